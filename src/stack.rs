use core::fmt;

use itertools::Itertools;

use crate::StackError;

/// A last-in-first-out container. The top is the most recently pushed item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  items: Vec<T>,
}

impl<T> Stack<T> {
  #[inline]
  pub const fn new() -> Self {
    Self { items: Vec::new() }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  #[inline]
  pub fn push(&mut self, item: T) {
    self.items.push(item);
  }

  /// Removes and returns the top item.
  ///
  /// An empty stack is left untouched and yields [`StackError::Underflow`].
  #[inline]
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.items.pop().ok_or(StackError::Underflow)
  }

  /// Removes and returns the top item, trusting that one exists.
  ///
  /// # Panics
  ///
  /// Panics if the stack is empty. Use [`Stack::pop`] when emptiness is a
  /// recoverable condition.
  #[inline]
  #[track_caller]
  pub fn must_pop(&mut self) -> T {
    match self.items.pop() {
      Some(item) => item,
      None => panic!("stack underflow"),
    }
  }

  /// Iterates from the top of the stack to the bottom.
  #[inline]
  pub fn iter(
    &self,
  ) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
    self.items.iter().rev()
  }

  /// Visits every item, top first.
  #[inline]
  pub fn for_each<F>(&self, visit: F)
  where
    F: FnMut(&T),
  {
    self.iter().for_each(visit)
  }
}

impl<T> Default for Stack<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> FromIterator<T> for Stack<T> {
  /// Pushes the items in order, so the last one ends up on top.
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self {
      items: iter.into_iter().collect(),
    }
  }
}

impl<T> fmt::Display for Stack<T>
where
  T: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", self.iter().join(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pop_returns_last_pushed() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.is_empty());
  }

  #[test]
  fn pop_on_empty_underflows() {
    let mut stack: Stack<i64> = Stack::new();

    assert_eq!(stack.pop(), Err(StackError::Underflow));
    assert_eq!(stack.len(), 0);
  }

  #[test]
  fn must_pop_returns_top() {
    let mut stack: Stack<i64> = [4, 5].into_iter().collect();

    assert_eq!(stack.must_pop(), 5);
    assert_eq!(stack.len(), 1);
  }

  #[test]
  #[should_panic(expected = "stack underflow")]
  fn must_pop_on_empty_panics() {
    let mut stack: Stack<i64> = Stack::new();
    stack.must_pop();
  }

  #[test]
  fn iterates_top_first() {
    let stack: Stack<i64> = [1, 2, 3].into_iter().collect();

    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    // Fresh pass each time.
    assert_eq!(stack.iter().count(), 3);
  }

  #[test]
  fn for_each_visits_top_first() {
    let stack: Stack<i64> = [1, 2, 3].into_iter().collect();
    let mut seen = Vec::new();

    stack.for_each(|x| seen.push(*x));

    assert_eq!(seen, vec![3, 2, 1]);
    assert_eq!(stack.len(), 3);
  }

  #[test]
  fn display() {
    let stack: Stack<i64> = [1, -2, 3].into_iter().collect();
    assert_eq!(stack.to_string(), "[3, -2, 1]");

    let empty: Stack<i64> = Stack::default();
    assert_eq!(empty.to_string(), "[]");
  }
}
