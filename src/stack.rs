use std::fmt::Debug;
use thiserror::Error;

/// Values stored in a `BoundedStack` carry a key that must be unique among
/// the current elements.
pub trait Keyed {
    type Key: PartialEq + Copy + Debug;

    fn key(&self) -> Self::Key;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError<K: Debug> {
    #[error("Stack is full! Cannot push more items.")]
    Full { capacity: usize },
    #[error("Stack is empty! Cannot pop.")]
    Empty,
    #[error("ID {0:?} is already on the stack.")]
    DuplicateId(K),
}

/// A last-in-first-out container that never grows past the capacity it was
/// created with.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T: Keyed> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            // Grows on demand; `capacity` alone bounds it.
            values: Vec::new(),
            capacity,
        }
    }

    /// On failure the stack is left untouched.
    pub fn push(&mut self, value: T) -> Result<(), StackError<T::Key>> {
        if self.is_full() {
            return Err(StackError::Full {
                capacity: self.capacity,
            });
        }
        if !self.is_key_unique(value.key()) {
            return Err(StackError::DuplicateId(value.key()));
        }
        self.values.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError<T::Key>> {
        self.values.pop().ok_or(StackError::Empty)
    }

    pub fn is_key_unique(&self, key: T::Key) -> bool {
        self.values.iter().all(|v| v.key() != key)
    }

    /// Elements from the most recently pushed down to the oldest.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &T> {
        self.values.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(u8, &'static str);

    impl Keyed for Item {
        type Key = u8;

        fn key(&self) -> u8 {
            self.0
        }
    }

    #[test]
    fn push_past_capacity_fails_and_keeps_state() {
        let mut stack = BoundedStack::new(3);
        for k in 0..3 {
            stack.push(Item(k, "x")).unwrap();
            assert!(stack.len() <= stack.capacity());
        }

        let err = stack.push(Item(9, "overflow")).unwrap_err();
        assert_eq!(err, StackError::Full { capacity: 3 });
        assert_eq!(stack.len(), 3);
        assert!(stack.is_key_unique(9));
    }

    #[test]
    fn pop_on_empty() {
        let mut stack = BoundedStack::<Item>::new(1);
        assert_eq!(stack.pop(), Err(StackError::Empty));
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut stack = BoundedStack::new(4);
        stack.push(Item(1, "a")).unwrap();
        assert!(!stack.is_key_unique(1));
        assert_eq!(
            stack.push(Item(1, "b")),
            Err(StackError::DuplicateId(1))
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn lifo() {
        let mut stack = BoundedStack::new(4);
        stack.push(Item(1, "a")).unwrap();
        let before = stack.len();
        stack.push(Item(2, "b")).unwrap();
        assert_eq!(stack.pop(), Ok(Item(2, "b")));
        assert_eq!(stack.len(), before);

        stack.push(Item(3, "c")).unwrap();
        let order: Vec<u8> = stack.iter_top_down().map(|i| i.0).collect();
        assert_eq!(order, [3, 1]);
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let mut stack = BoundedStack::new(usize::MAX);
        stack.push(Item(1, "a")).unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.capacity(), usize::MAX);
        assert!(!stack.is_full());
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_full());
        assert!(stack.push(Item(0, "a")).is_err());
    }
}
