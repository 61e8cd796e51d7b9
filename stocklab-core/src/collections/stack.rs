//! Size-capped LIFO stack. When full, a push evicts the bottom (oldest) element.

use std::collections::VecDeque;

use super::ContainerError;

/// Fixed-capacity stack. The front of the deque is the top.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Stack holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::InvalidCapacity);
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        })
    }

    /// Infallible constructor for the crate's nonzero capacity constants.
    pub(super) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Stack with no practical bound (`usize::MAX`).
    pub fn unbounded() -> Self {
        Self {
            items: VecDeque::new(),
            capacity: usize::MAX,
        }
    }

    /// Push `item` on top. If the stack was full, the bottom element is
    /// evicted first and returned.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_back()
        } else {
            None
        };
        self.items.push_front(item);
        evicted
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items
            .pop_front()
            .ok_or(ContainerError::EmptyContainer("stack"))
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items
            .front()
            .ok_or(ContainerError::EmptyContainer("stack"))
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

    /// Iterate top-first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Snapshot, top-first.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}
