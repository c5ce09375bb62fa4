//! Binary min-heap keyed by cost
//!
//! Used by the Dijkstra engine. Keys are compared with `f64::total_cmp`, so the
//! heap stays well-ordered even if a NaN slips in. Equal keys pop in no
//! particular order.

/// Min-heap of `(key, payload)` pairs; every parent key is <= its children's keys
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    entries: Vec<(f64, T)>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, key: f64, payload: T) {
        self.entries.push((key, payload));
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the entry with the smallest key
    pub fn pop(&mut self) -> Option<(f64, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Smallest key without removing it
    pub fn peek_key(&self) -> Option<f64> {
        self.entries.first().map(|(key, _)| *key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a].0.total_cmp(&self.entries[b].0).is_lt()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}
