//! Singly linked lists of arena-allocated nodes.
//!
//! A list is an `Option<&Node>`, with `None` as the empty list. Links are
//! fixed when a node is created, so lists built through this module are
//! acyclic, and two lists can only share nodes by sharing a suffix.

use crate::prelude::*;

/// A list node holding a value and a link to the next node.
///
/// There is deliberately no `PartialEq`: nodes are compared by identity
/// with [`is`](Self::is).

pub struct Node<'a, T = i64> {
  value: T,
  next: Option<&'a Node<'a, T>>,
}

/// An iterator over the nodes of a list, starting at its head.

pub struct Iter<'a, T>(Option<&'a Node<'a, T>>);

impl<'a, T> Node<'a, T> {
  /// Creates a node which links to `next`.

  #[inline(always)]
  pub const fn new(value: T, next: Option<&'a Node<'a, T>>) -> Self {
    Self { value, next }
  }

  /// The value held by the node.

  #[inline(always)]
  pub fn value(&self) -> &T {
    &self.value
  }

  /// The next node, or `None` at the end of the list.

  #[inline(always)]
  pub fn next(&self) -> Option<&'a Node<'a, T>> {
    self.next
  }

  /// Whether `self` and `other` are the same node.

  #[inline(always)]
  pub fn is(&self, other: &Self) -> bool {
    ptr::eq(self, other)
  }

  /// Iterates over this node and every node reachable from it.

  pub fn iter(&self) -> Iter<'_, T> {
    Iter(Some(self))
  }

  /// The number of nodes reachable from this one, counting itself.

  pub fn count(&self) -> usize {
    self.iter().count()
  }

  /// The node `n` links after this one.

  pub fn nth(&self, n: usize) -> Option<&Node<'_, T>> {
    self.iter().nth(n)
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Node<'a, T>;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let x = self.0?;
    self.0 = x.next;
    Some(x)
  }
}

impl<'a, T> core::iter::FusedIterator for Iter<'a, T> { }

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Self(self.0)
  }
}

impl<'a, T: fmt::Debug> fmt::Debug for Node<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter().map(Node::value)).finish()
  }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Iter").field(&self.0).finish()
  }
}

/// Iterates over the nodes of the list starting at `head`.

pub fn iter<'a, T>(head: Option<&'a Node<'a, T>>) -> Iter<'a, T> {
  Iter(head)
}

/// The number of nodes in the list starting at `head`.

pub fn len<'a, T>(head: Option<&'a Node<'a, T>>) -> usize {
  iter(head).count()
}

/// Copies out the values of the list starting at `head`.

pub fn values<'a, T: Clone>(head: Option<&'a Node<'a, T>>) -> Vec<T> {
  iter(head).map(|x| x.value.clone()).collect()
}

/// Allocates a list holding `values` in order, whose last node links to
/// `tail`. Returns `tail` when `values` is empty.
///
/// # Panics
///
/// Panics on failure to allocate memory.

pub fn chain<'a, T>(
  arena: &'a Arena<Node<'a, T>>,
  values: &[T],
  tail: Option<&'a Node<'a, T>>,
) -> Option<&'a Node<'a, T>>
where
  T: Clone
{
  let mut head = tail;

  for x in values.iter().rev() {
    head = Some(&*arena.alloc(Node::new(x.clone(), head)));
  }

  head
}

/// Allocates a list holding `values` in order, whose last node links to
/// `tail`. Returns `tail` when `values` is empty.
///
/// # Errors
///
/// An error is returned on failure to allocate memory.

pub fn try_chain<'a, T>(
  arena: &'a Arena<Node<'a, T>>,
  values: &[T],
  tail: Option<&'a Node<'a, T>>,
) -> Result<Option<&'a Node<'a, T>>, AllocError>
where
  T: Clone
{
  let mut head = tail;

  for x in values.iter().rev() {
    head = Some(&*arena.try_alloc(Node::new(x.clone(), head))?);
  }

  Ok(head)
}
