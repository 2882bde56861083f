//! Finding the first node shared by two lists.
//!
//! Nodes are matched by identity, never by value. Both strategies only
//! follow links and leave the lists exactly as they found them.

use crate::prelude::*;

/// How to search for the intersection.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Strategy {
  /// Two cursors which swap to the other list's head at the end of their
  /// own. Constant extra space.
  #[default]
  TwoPointer,
  /// Record every node of the first list in a set, then scan the second.
  /// Extra space linear in the first list.
  NodeSet,
}

/// Finds the first node reachable from both `a` and `b`, using the default
/// strategy.
///
/// ```
/// use confluence::Arena;
/// use confluence::find_intersection;
/// use confluence::list;
///
/// let arena = Arena::new();
/// let tail = list::chain(&arena, &[8, 4, 5], None);
/// let a = list::chain(&arena, &[4, 1], tail);
/// let b = list::chain(&arena, &[5, 6, 1], tail);
/// let x = find_intersection(a, b).unwrap();
/// assert!(x.is(tail.unwrap()));
/// ```

pub fn find_intersection<'a, T>(
  a: Option<&'a Node<'a, T>>,
  b: Option<&'a Node<'a, T>>,
) -> Option<&'a Node<'a, T>>
{
  find_intersection_with(Strategy::default(), a, b)
}

/// Finds the first node reachable from both `a` and `b`.

pub fn find_intersection_with<'a, T>(
  strategy: Strategy,
  a: Option<&'a Node<'a, T>>,
  b: Option<&'a Node<'a, T>>,
) -> Option<&'a Node<'a, T>>
{
  let x =
    match strategy {
      Strategy::TwoPointer => two_pointer(a, b),
      Strategy::NodeSet => node_set(a, b),
    };

  tracing::debug!(?strategy, found = x.is_some(), "intersection search finished");

  x
}

#[inline(always)]
fn same<'a, T>(x: Option<&'a Node<'a, T>>, y: Option<&'a Node<'a, T>>) -> bool {
  match (x, y) {
    (Some(x), Some(y)) => x.is(y),
    (None, None) => true,
    _ => false,
  }
}

/// Two-cursor search.
///
/// Each cursor walks its own list and then the other one, so both cover
/// `len(a) + len(b)` nodes. Whatever the difference in prefix lengths, they
/// reach the shared suffix, or the end of both lists, on the same step.

pub fn two_pointer<'a, T>(
  a: Option<&'a Node<'a, T>>,
  b: Option<&'a Node<'a, T>>,
) -> Option<&'a Node<'a, T>>
{
  let (Some(head_a), Some(head_b)) = (a, b) else { return None; };

  let mut x = Some(head_a);
  let mut y = Some(head_b);

  while ! same(x, y) {
    x =
      match x {
        Some(n) => n.next(),
        None => {
          tracing::trace!("cursor a redirected to head b");
          Some(head_b)
        }
      };
    y =
      match y {
        Some(n) => n.next(),
        None => {
          tracing::trace!("cursor b redirected to head a");
          Some(head_a)
        }
      };
  }

  x
}

/// Set-based search.

pub fn node_set<'a, T>(
  a: Option<&'a Node<'a, T>>,
  b: Option<&'a Node<'a, T>>,
) -> Option<&'a Node<'a, T>>
{
  let mut seen = BTreeSet::new();

  for n in crate::list::iter(a) {
    let _ = seen.insert(ptr::from_ref(n));
  }

  tracing::trace!(len = seen.len(), "recorded nodes of list a");

  crate::list::iter(b).find(|n| seen.contains(&ptr::from_ref(*n)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_same() {
    let arena = Arena::new();
    let x = arena.alloc(Node::new(1, None));
    let y = arena.alloc(Node::new(1, None));
    assert!(same::<i64>(None, None));
    assert!(same(Some(&*x), Some(&*x)));
    assert!(! same(Some(&*x), Some(&*y)));
    assert!(! same(Some(&*x), None));
  }

  #[test]
  fn test_identical_heads_stop_immediately() {
    let arena = Arena::new();
    let head = crate::list::chain(&arena, &[1, 2, 3], None);
    assert!(two_pointer(head, head).unwrap().is(head.unwrap()));
    assert!(node_set(head, head).unwrap().is(head.unwrap()));
  }
}
