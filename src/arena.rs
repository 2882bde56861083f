use crate::prelude::*;

const MIN_CHUNK_LEN_LOG2: u8 = 4;
const MAX_CHUNK_LEN_LOG2: u8 = usize::BITS as u8 - 2;

/// A typed, append-only arena.
///
/// Values are stored in chunks which are never reallocated, so a reference
/// returned by [`alloc`](Self::alloc) stays valid, and keeps its address,
/// until the arena is [`reset`](Self::reset) or dropped. This makes the
/// address of an allocated [`Node`] a usable identity.
///
/// Typical use is to allocate nodes that point at earlier nodes of the same
/// arena:
///
/// ```
/// use confluence::Arena;
/// use confluence::Node;
///
/// let arena = Arena::new();
/// let tail: &Node = arena.alloc(Node::new(2, None));
/// let head: &Node = arena.alloc(Node::new(1, Some(tail)));
/// assert!(head.next().unwrap().is(tail));
/// ```

pub struct Arena<T> {
  chunks: RefCell<Vec<Vec<T>>>,
}

// `16 <= len <= 1 << (usize::BITS - 2)`

#[derive(Clone, Copy)]
struct ChunkLenClass(u8);

impl ChunkLenClass {
  const MIN: Self = Self(MIN_CHUNK_LEN_LOG2);
  const MAX: Self = Self(MAX_CHUNK_LEN_LOG2);

  #[inline(always)]
  fn len(self) -> usize {
    1 << self.0
  }

  #[inline]
  fn with_len_at_least(n: usize) -> Option<Self> {
    if n <= Self::MIN.len() {
      Some(Self::MIN)
    } else if n > Self::MAX.len() {
      None
    } else {
      Some(Self((usize::BITS - (n - 1).leading_zeros()) as u8))
    }
  }
}

fn new_chunk<T>(len: usize) -> Result<Vec<T>, AllocError> {
  let Some(class) = ChunkLenClass::with_len_at_least(len) else {
    return Err(AllocError);
  };

  let mut chunk = Vec::new();

  if chunk.try_reserve_exact(class.len()).is_err() {
    return Err(AllocError);
  }

  Ok(chunk)
}

impl<T> Arena<T> {
  /// Creates an empty arena. No memory is reserved until the first
  /// allocation.

  pub fn new() -> Self {
    Self { chunks: RefCell::new(Vec::new()) }
  }

  /// Creates an arena whose first chunk holds at least `capacity` values.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity(capacity: usize) -> Self {
    match new_chunk(capacity) {
      Ok(chunk) => Self { chunks: RefCell::new(alloc::vec![chunk]) },
      Err(e) => too_large(e),
    }
  }

  /// Moves `value` into the arena.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory, or if `T` implements [`Drop`].

  #[inline]
  pub fn alloc(&self, value: T) -> &mut T {
    match self.try_alloc(value) {
      Ok(x) => x,
      Err(e) => too_large(e),
    }
  }

  /// Moves `value` into the arena.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.
  ///
  /// # Panics
  ///
  /// Panics if `T` implements [`Drop`].

  pub fn try_alloc(&self, value: T) -> Result<&mut T, AllocError> {
    assert!(! needs_drop::<T>());

    let mut chunks = self.chunks.borrow_mut();

    let is_full =
      match chunks.last() {
        Some(chunk) => chunk.len() == chunk.capacity(),
        None => true,
      };

    if is_full {
      // If nothing large is requested up front, chunk lengths go
      //
      //   1, 1, 1, 1, 2, 2, 4, 4, 8, 8, ...
      //
      // as multiples of the minimum chunk length.

      let reserved = chunks.iter().map(Vec::capacity).sum::<usize>();
      let chunk = new_chunk(max(1, reserved / 4 + 1))?;
      tracing::trace!(reserved, len = chunk.capacity(), "arena: adding chunk");
      chunks.try_reserve(1).map_err(|_| AllocError)?;
      chunks.push(chunk);
    }

    let Some(chunk) = chunks.last_mut() else {
      return Err(AllocError);
    };

    let i = chunk.len();
    chunk.push(value);

    // SAFETY:
    //
    // The chunk never grows past its reserved capacity, so its buffer is
    // never reallocated and the slot stays valid until the chunk is freed.
    // Chunks are only freed by `reset` or `drop`, which need the arena
    // borrowed uniquely. Each slot is handed out exactly once, and
    // `as_mut_ptr` does not create a reference to the other slots.

    Ok(unsafe { &mut *chunk.as_mut_ptr().add(i) })
  }

  /// The number of values allocated so far.

  pub fn len(&self) -> usize {
    self.chunks.borrow().iter().map(Vec::len).sum()
  }

  /// Whether nothing has been allocated yet.

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Frees every chunk.

  pub fn reset(&mut self) {
    self.chunks.get_mut().clear()
  }
}

impl<T> Default for Arena<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for Arena<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let chunks = self.chunks.borrow();
    f.debug_struct("Arena")
      .field("chunks", &chunks.len())
      .field("len", &chunks.iter().map(Vec::len).sum::<usize>())
      .field("reserved", &chunks.iter().map(Vec::capacity).sum::<usize>())
      .finish()
  }
}

#[inline(never)]
#[cold]
fn too_large(_: AllocError) -> ! {
  panic!("confluence: attempted an allocation that is too large!")
}
