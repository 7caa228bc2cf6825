/*
Array-backed binary min-heap over (value, priority) pairs.

The heap is a complete binary tree stored in a Vec: the parent of slot i is (i - 1) / 2 and its
children are 2i + 1 and 2i + 2. Every entry's priority is <= the priorities of its children.

Values are opaque to the heap and may repeat. Dijkstra relies on that: improving a node's distance
pushes a second, cheaper entry for the same node instead of mutating the old one.
*/

#[derive(Clone, Debug)]
struct Entry<V, P> {
    value: V,
    priority: P,
}

#[derive(Clone, Debug)]
pub struct MinHeap<V, P = u64> {
    entries: Vec<Entry<V, P>>,
}

impl<V, P: Ord + Copy> Default for MinHeap<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P: Ord + Copy> MinHeap<V, P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends the entry and sifts it up. O(log k).
    pub fn insert(&mut self, value: V, priority: P) {
        self.entries.push(Entry { value, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Value of the lowest-priority entry. Panics on an empty heap.
    pub fn peek_min(&self) -> &V {
        assert!(!self.is_empty(), "peek_min called on an empty heap");
        &self.entries[0].value
    }

    /// Priority of the lowest-priority entry. Panics on an empty heap.
    pub fn peek_min_priority(&self) -> P {
        assert!(!self.is_empty(), "peek_min_priority called on an empty heap");
        self.entries[0].priority
    }

    /// Removes and returns the lowest-priority entry, handing the value back to the caller.
    /// Ties are broken by heap shape. Panics on an empty heap.
    pub fn pop_min(&mut self) -> (V, P) {
        assert!(!self.is_empty(), "pop_min called on an empty heap");
        let Entry { value, priority } = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        (value, priority)
    }

    pub fn peek(&self) -> Option<(&V, P)> {
        self.entries.first().map(|e| (&e.value, e.priority))
    }

    pub fn pop(&mut self) -> Option<(V, P)> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_min())
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drains the heap in ascending priority order.
    pub fn into_sorted_vec(mut self) -> Vec<(V, P)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent].priority <= self.entries[idx].priority {
                break;
            }
            self.entries.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| self.entries[(i - 1) / 2].priority <= self.entries[i].priority)
    }
}

impl<V, P: Ord + Copy> Extend<(V, P)> for MinHeap<V, P> {
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.insert(value, priority);
        }
    }
}

impl<V, P: Ord + Copy> FromIterator<(V, P)> for MinHeap<V, P> {
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}
