//! Building intersecting lists from a compact description.
//!
//! A [`Fixture`] gives the values of two lists, how many nodes of each come
//! before the shared suffix, and the value the first shared node holds. It
//! is validated before any node is allocated.

use crate::prelude::*;
use crate::list;

/// A description of two lists which may share a suffix.

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fixture<T = i64> {
  /// The value of the first shared node, or `T::default()` (zero for
  /// integers) if the lists are disjoint.
  pub intersect_val: T,
  /// The values of the first list, shared suffix included.
  pub list_a: Vec<T>,
  /// The values of the second list, shared suffix included.
  pub list_b: Vec<T>,
  /// The number of nodes of the first list before the shared suffix.
  pub skip_a: usize,
  /// The number of nodes of the second list before the shared suffix.
  pub skip_b: usize,
}

/// The heads built from a [`Fixture`], along with the node where they meet.

#[derive(Debug)]
pub struct Pair<'a, T = i64> {
  /// Head of the first list.
  pub head_a: Option<&'a Node<'a, T>>,
  /// Head of the second list.
  pub head_b: Option<&'a Node<'a, T>>,
  /// First node of the shared suffix, if any.
  pub intersection: Option<&'a Node<'a, T>>,
}

/// Which list of a [`Fixture`] an error refers to.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Which {
  /// `list_a`
  A,
  /// `list_b`
  B,
}

/// Reasons a [`Fixture`] cannot be built.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FixtureError<T = i64> {
  /// A skip count is larger than its list.
  SkipOutOfRange {
    /// The offending list.
    list: Which,
    /// The skip count.
    skip: usize,
    /// The list's length.
    len: usize,
  },
  /// The lists disagree on how long the shared suffix is.
  SuffixLengthMismatch {
    /// Suffix length of `list_a`.
    a: usize,
    /// Suffix length of `list_b`.
    b: usize,
  },
  /// The lists disagree on a value in the shared suffix.
  SuffixValueMismatch {
    /// Position within the suffix.
    index: usize,
  },
  /// `intersect_val` is not the first value of the shared suffix.
  IntersectValueMismatch {
    /// The value implied by the lists and skip counts.
    expected: T,
    /// The value given.
    found: T,
  },
  /// Allocating nodes failed.
  Alloc(AllocError),
}

impl<T> Fixture<T>
where
  T: Clone + Default + PartialEq
{
  /// Checks that the description is consistent, returning the shared suffix
  /// of the two lists.
  ///
  /// # Errors
  ///
  /// See [`FixtureError`].

  pub fn validate(&self) -> Result<&[T], FixtureError<T>> {
    let len_a = self.list_a.len();
    let len_b = self.list_b.len();

    if self.skip_a > len_a {
      return Err(FixtureError::SkipOutOfRange { list: Which::A, skip: self.skip_a, len: len_a });
    }

    if self.skip_b > len_b {
      return Err(FixtureError::SkipOutOfRange { list: Which::B, skip: self.skip_b, len: len_b });
    }

    let suffix_a = &self.list_a[self.skip_a ..];
    let suffix_b = &self.list_b[self.skip_b ..];

    if suffix_a.len() != suffix_b.len() {
      return Err(FixtureError::SuffixLengthMismatch { a: suffix_a.len(), b: suffix_b.len() });
    }

    if let Some(index) = suffix_a.iter().zip(suffix_b).position(|(x, y)| x != y) {
      return Err(FixtureError::SuffixValueMismatch { index });
    }

    let expected = suffix_a.first().cloned().unwrap_or_default();

    if expected != self.intersect_val {
      return Err(FixtureError::IntersectValueMismatch { expected, found: self.intersect_val.clone() });
    }

    Ok(suffix_a)
  }

  /// Allocates both lists in `arena`. The shared suffix is allocated once
  /// and linked from both prefixes.
  ///
  /// # Errors
  ///
  /// See [`FixtureError`].

  pub fn build<'a>(&self, arena: &'a Arena<Node<'a, T>>) -> Result<Pair<'a, T>, FixtureError<T>> {
    let suffix = self.validate()?;
    let intersection = list::try_chain(arena, suffix, None)?;
    let head_a = list::try_chain(arena, &self.list_a[.. self.skip_a], intersection)?;
    let head_b = list::try_chain(arena, &self.list_b[.. self.skip_b], intersection)?;

    tracing::debug!(
      len_a = self.list_a.len(),
      len_b = self.list_b.len(),
      shared = suffix.len(),
      "built fixture"
    );

    Ok(Pair { head_a, head_b, intersection })
  }
}

impl<T> From<AllocError> for FixtureError<T> {
  fn from(e: AllocError) -> Self {
    Self::Alloc(e)
  }
}

impl fmt::Display for Which {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::A => f.write_str("list_a"),
      Self::B => f.write_str("list_b"),
    }
  }
}

impl<T: fmt::Debug> fmt::Display for FixtureError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::SkipOutOfRange { list, skip, len } =>
        write!(f, "skip of {skip} is past the end of {list} (length {len})"),
      Self::SuffixLengthMismatch { a, b } =>
        write!(f, "shared suffix has length {a} in list_a but {b} in list_b"),
      Self::SuffixValueMismatch { index } =>
        write!(f, "shared suffix differs between the lists at index {index}"),
      Self::IntersectValueMismatch { expected, found } =>
        write!(f, "intersect_val is {found:?} but the shared suffix starts with {expected:?}"),
      Self::Alloc(e) =>
        fmt::Display::fmt(e, f),
    }
  }
}

impl<T: fmt::Debug> core::error::Error for FixtureError<T> { }
