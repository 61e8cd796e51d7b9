//! Size-capped FIFO queue. When full, an enqueue evicts the front (oldest) element.

use std::collections::VecDeque;

use super::ContainerError;

/// Capacity used for the "recently added" and "recently viewed" views.
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::InvalidCapacity);
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        })
    }

    /// Append `item` at the back. If the queue was full, the front element
    /// is evicted first and returned.
    pub fn enqueue(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.items
            .pop_front()
            .ok_or(ContainerError::EmptyContainer("queue"))
    }

    pub fn peek_front(&self) -> Result<&T, ContainerError> {
        self.items
            .front()
            .ok_or(ContainerError::EmptyContainer("queue"))
    }

    pub fn peek_back(&self) -> Result<&T, ContainerError> {
        self.items
            .back()
            .ok_or(ContainerError::EmptyContainer("queue"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Keep only the elements for which `keep` returns true. Relative order
    /// of the survivors is unchanged.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    /// Iterate front-to-back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq> BoundedQueue<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Snapshot, front-to-back.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::with_capacity(DEFAULT_QUEUE_CAPACITY),
            capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}
