/// Heap status of a vertex during a single root's traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapSlot {
    /// Never entered the heap since the last reset
    Unvisited,
    /// Currently stored at this 1-based heap position
    At(usize),
    /// Popped and permanently outside the heap
    Finalized,
}

/// Binary min-heap over vertex ids with a vertex-to-position index, used as Prim PQ
/// on CSR graph data.
/// Slot 0 of `heap` is unused so that the children of `k` are `2k` and `2k + 1`.
/// Priorities are owned by the caller and passed into every operation.
pub struct BinaryMinHeap {
    heap: Vec<usize>,
    positions: Vec<HeapSlot>,
    touched: Vec<usize>,
}

/// Get the left child index of `index`
fn get_left(index: usize) -> usize {
    2 * index
}

/// Get the right child index of `index`
fn get_right(index: usize) -> usize {
    2 * index + 1
}

/// Get the parent index of `index`
fn get_parent(index: usize) -> usize {
    index / 2
}

impl BinaryMinHeap {
    /// Create a new `BinaryMinHeap` for keys in `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        let mut heap = Vec::with_capacity(capacity + 1);
        heap.push(usize::MAX);
        Self {
            heap,
            positions: vec![HeapSlot::Unvisited; capacity],
            touched: Vec::with_capacity(capacity),
        }
    }

    /// Empty the heap and mark every key that entered it since the last reset as unvisited.
    /// Keeps all allocations.
    pub fn reset(&mut self) {
        self.heap.truncate(1);
        for &key in &self.touched {
            self.positions[key] = HeapSlot::Unvisited;
        }
        self.touched.clear();
    }

    /// Set key `key` at position `index`
    fn set_key_and_pos(&mut self, key: usize, index: usize) {
        self.heap[index] = key;
        self.positions[key] = HeapSlot::At(index);
    }

    /// Swap positions of the keys at `parent` and `child`
    fn swap(&mut self, parent: usize, child: usize) {
        let p_key = self.heap[parent];
        let ch_key = self.heap[child];

        self.set_key_and_pos(p_key, child);
        self.set_key_and_pos(ch_key, parent);
    }

    /// Fixes the heap structure at `index` by sifting its key down
    fn reheap<W: PartialOrd>(&mut self, index: usize, priorities: &[W]) {
        let len = self.len();
        let left = get_left(index);
        let right = get_right(index);
        if left > len {
            return;
        }

        let mut smallest = left;
        if right <= len && priorities[self.heap[right]] < priorities[self.heap[left]] {
            smallest = right;
        }

        if priorities[self.heap[smallest]] < priorities[self.heap[index]] {
            self.swap(index, smallest);
            self.reheap(smallest, priorities);
        }
    }

    /// Move the key at `index` towards the root while its parent has a larger priority
    fn sift_up<W: PartialOrd>(&mut self, mut index: usize, priorities: &[W]) {
        while index > 1 {
            let parent = get_parent(index);
            if priorities[self.heap[parent]] > priorities[self.heap[index]] {
                self.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Push a key that has not been in the heap since the last reset
    pub fn push<W: PartialOrd>(&mut self, key: usize, priorities: &[W]) {
        debug_assert_eq!(self.positions[key], HeapSlot::Unvisited);

        self.heap.push(key);
        let index = self.len();
        self.positions[key] = HeapSlot::At(index);
        self.touched.push(key);

        self.sift_up(index, priorities);
    }

    /// Pop the minimum key from the heap and mark it as finalized
    pub fn pop<W: PartialOrd>(&mut self, priorities: &[W]) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let min_key = self.heap[1];
        self.positions[min_key] = HeapSlot::Finalized;

        let tail_key = self.heap.pop()?;
        if !self.is_empty() {
            self.set_key_and_pos(tail_key, 1);
            self.reheap(1, priorities);
        }

        Some(min_key)
    }

    /// Decrease the position of a key.
    /// This method must be called iff the priority of a key in the heap
    /// decreased after it was pushed.
    pub fn decrease_key<W: PartialOrd>(&mut self, key: usize, priorities: &[W]) {
        if let HeapSlot::At(index) = self.positions[key] {
            self.sift_up(index, priorities);
        }
    }

    /// Insert `key` or restore its position after its priority decreased.
    /// Finalized keys are left alone.
    pub fn push_or_decrease<W: PartialOrd>(&mut self, key: usize, priorities: &[W]) {
        match self.positions[key] {
            HeapSlot::Unvisited => self.push(key, priorities),
            HeapSlot::At(_) => self.decrease_key(key, priorities),
            HeapSlot::Finalized => ()
        }
    }

    /// Get the heap status of `key`
    #[cfg(test)]
    pub fn status(&self, key: usize) -> HeapSlot {
        self.positions[key]
    }

    /// Returns `true` if the heap contains `key`
    #[cfg(test)]
    pub fn contains(&self, key: usize) -> bool {
        matches!(self.positions[key], HeapSlot::At(_))
    }

    /// Returns `true` if `key` has been popped since the last reset
    pub fn is_finalized(&self, key: usize) -> bool {
        self.positions[key] == HeapSlot::Finalized
    }

    /// Number of keys in the heap
    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    /// Returns `true` if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the heap property and that `positions` mirrors `heap`
    #[cfg(test)]
    fn is_consistent<W: PartialOrd>(&self, priorities: &[W]) -> bool {
        for index in 1..=self.len() {
            let key = self.heap[index];
            if self.positions[key] != HeapSlot::At(index) {
                return false;
            }
            if index > 1 && priorities[self.heap[get_parent(index)]] > priorities[key] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use rand::prelude::*;

    use crate::binary_minheap::{BinaryMinHeap, HeapSlot};

    #[test]
    fn test_pop_order() {
        let priorities = vec![0.0, 5.0, 3.0, 8.0, 1.0, 4.0, 7.0];
        let mut heap = BinaryMinHeap::with_capacity(priorities.len());
        for key in 1..priorities.len() {
            heap.push(key, &priorities);
            assert!(heap.is_consistent(&priorities));
        }
        assert_eq!(heap.len(), 6);

        let mut popped = Vec::new();
        while let Some(key) = heap.pop(&priorities) {
            assert!(heap.is_consistent(&priorities));
            assert!(heap.is_finalized(key));
            popped.push(key);
        }
        assert_eq!(popped, vec![4, 2, 5, 1, 6, 3]);
        assert!(heap.pop(&priorities).is_none());
    }

    #[test]
    fn test_decrease_key() {
        let mut priorities = vec![0, 10, 20, 30, 40, 50];
        let mut heap = BinaryMinHeap::with_capacity(priorities.len());
        for key in 1..priorities.len() {
            heap.push(key, &priorities);
        }

        priorities[5] = 5;
        heap.decrease_key(5, &priorities);
        assert!(heap.is_consistent(&priorities));
        assert_eq!(heap.status(5), HeapSlot::At(1));

        priorities[3] = 15;
        heap.push_or_decrease(3, &priorities);
        assert!(heap.is_consistent(&priorities));

        assert_eq!(heap.pop(&priorities), Some(5));
        assert_eq!(heap.pop(&priorities), Some(1));
        assert_eq!(heap.pop(&priorities), Some(3));
        assert_eq!(heap.pop(&priorities), Some(2));
        assert_eq!(heap.pop(&priorities), Some(4));
    }

    #[test]
    fn test_finalized_keys_are_ignored() {
        let mut priorities = vec![0, 1, 2];
        let mut heap = BinaryMinHeap::with_capacity(priorities.len());
        heap.push(1, &priorities);
        heap.push(2, &priorities);
        assert_eq!(heap.pop(&priorities), Some(1));

        priorities[1] = 0;
        heap.push_or_decrease(1, &priorities);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.status(1), HeapSlot::Finalized);
        assert!(!heap.contains(1));
        assert!(heap.contains(2));
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let priorities = vec![0, 7, 7, 7];
        let mut heap = BinaryMinHeap::with_capacity(priorities.len());
        heap.push(2, &priorities);
        heap.push(1, &priorities);
        heap.push(3, &priorities);
        assert_eq!(heap.pop(&priorities), Some(2));
    }

    #[test]
    fn test_reset() {
        let priorities = vec![0, 3, 1, 2];
        let mut heap = BinaryMinHeap::with_capacity(priorities.len());
        heap.push(1, &priorities);
        heap.push(2, &priorities);
        assert_eq!(heap.pop(&priorities), Some(2));

        heap.reset();
        assert!(heap.is_empty());
        for key in 0..priorities.len() {
            assert_eq!(heap.status(key), HeapSlot::Unvisited);
        }

        heap.push(3, &priorities);
        heap.push(2, &priorities);
        assert_eq!(heap.pop(&priorities), Some(2));
        assert_eq!(heap.pop(&priorities), Some(3));
    }

    #[test]
    fn test_random_operations() {
        let mut rng = StdRng::seed_from_u64(42);
        let num_keys = 200;
        let mut priorities: Vec<u32> = (0..num_keys).map(|_| rng.gen_range(0..1000)).collect();
        let mut heap = BinaryMinHeap::with_capacity(num_keys);

        for key in 0..num_keys {
            heap.push(key, &priorities);
        }
        for _ in 0..500 {
            let key = rng.gen_range(0..num_keys);
            if heap.contains(key) && priorities[key] > 0 {
                priorities[key] = rng.gen_range(0..priorities[key]);
                heap.decrease_key(key, &priorities);
            }
            assert!(heap.is_consistent(&priorities));
        }

        let mut last = 0;
        while let Some(key) = heap.pop(&priorities) {
            assert!(priorities[key] >= last);
            last = priorities[key];
            assert!(heap.is_consistent(&priorities));
        }
    }
}
