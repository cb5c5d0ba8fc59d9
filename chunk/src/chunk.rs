use std::{fmt, ops::Index, rc::Rc};

use crate::ChunkError;

/// Builds a [`Chunk`] from a list of elements, like `vec!`.
///
/// # Examples
///
/// ```rust
/// # use tabula_chunk::{chunk, Chunk};
/// assert_eq!(chunk![1, 2, 3].as_slice(), &[1, 2, 3]);
/// assert_eq!(chunk![], Chunk::<i32>::empty());
/// ```
#[macro_export]
macro_rules! chunk {
    () => { $crate::Chunk::empty() };

    ( $($x:expr),+ $(,)? ) => {
        $crate::Chunk::from(vec![$($x),+])
    };
}

/// An ordered, zero-indexed buffer with value semantics.
///
/// Clones share their storage. The by-value operations ([`Chunk::set`],
/// [`Chunk::push`], [`Chunk::push_many`], ...) and the in-place ones
/// ([`Chunk::truncate`], [`Chunk::pop`], [`Extend`]) all go through
/// copy-on-write, so a change is never visible through another clone.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chunk<T> {
    // Invariant: never `Some` of an empty vector, so that there is exactly one
    // representation of the empty chunk and the derived `Eq` and `Hash` agree
    // with element-wise comparison.
    data: Option<Rc<Vec<T>>>,
}

impl<T> Chunk<T> {
    /// The chunk of length zero. Doesn't allocate.
    pub const fn empty() -> Self {
        Chunk { data: None }
    }

    /// Builds a chunk of length `len` whose element at `i` is `f(i)`.
    ///
    /// `f` is called exactly once per index, in increasing order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::Chunk;
    /// let squares = Chunk::initialize(4, |i| i * i);
    /// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
    /// assert!(Chunk::initialize(0, |i| i).is_empty());
    /// ```
    pub fn initialize(len: usize, f: impl FnMut(usize) -> T) -> Self {
        (0..len).map(f).collect()
    }

    /// The number of elements in this chunk.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.len())
    }

    /// Returns `true` if the length is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    pub fn as_slice(&self) -> &[T] {
        match &self.data {
            Some(data) => data.as_slice(),
            None => &[],
        }
    }

    /// Gets an element at a given index, or `None` if `idx` is out-of-bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// let c = chunk![0, 1, 2];
    /// assert_eq!(c.get(2), Some(&2));
    /// assert_eq!(c.get(3), None);
    /// ```
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.as_slice().get(idx)
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns `true` if both chunks are backed by the same allocation.
    ///
    /// This is stronger than equality: two equal chunks built separately are
    /// not `ptr_eq`. Two empty chunks always are.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.data, &other.data) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Panics if the internal representation is inconsistent.
    pub fn check_invariants(&self) {
        if let Some(data) = &self.data {
            assert!(!data.is_empty(), "non-canonical empty chunk");
        }
    }
}

impl<T: Clone> Chunk<T> {
    /// Gives mutable access to the buffer, copying it first if it's shared.
    ///
    /// Callers that might leave the buffer empty must call `normalize`.
    fn make_mut(&mut self) -> &mut Vec<T> {
        Rc::make_mut(self.data.get_or_insert_with(Default::default))
    }

    fn normalize(&mut self) {
        if self.data.as_ref().is_some_and(|data| data.is_empty()) {
            self.data = None;
        }
    }

    /// Returns the elements of `self` followed by the elements of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// assert_eq!(chunk![1, 2].concat(&chunk![3]), chunk![1, 2, 3]);
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(self.as_slice());
        data.extend_from_slice(other.as_slice());
        Chunk::from(data)
    }

    /// Returns this chunk with the element at `idx` replaced by `value`.
    ///
    /// If `idx` is out of bounds, the chunk is returned unchanged. Use
    /// [`Chunk::try_set`] to find out about that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// let c = chunk![1, 2, 3];
    /// assert_eq!(c.clone().set(1, 20), chunk![1, 20, 3]);
    /// assert_eq!(c.clone().set(5, 99), chunk![1, 2, 3]);
    /// assert_eq!(c, chunk![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn set(mut self, idx: usize, value: T) -> Self {
        if idx < self.len() {
            self.make_mut()[idx] = value;
        }
        self
    }

    /// Replaces the element at `idx` in place, failing if it's out of bounds.
    pub fn try_set(&mut self, idx: usize, value: T) -> Result<(), ChunkError> {
        let len = self.len();
        if idx < len {
            self.make_mut()[idx] = value;
            Ok(())
        } else {
            Err(ChunkError::IndexOutOfBounds { index: idx, len })
        }
    }

    /// Returns this chunk with `value` appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// let c = chunk![0, 1].push(2);
    /// assert_eq!(c.get(2), Some(&2));
    /// ```
    #[must_use]
    pub fn push(mut self, value: T) -> Self {
        self.make_mut().push(value);
        self
    }

    /// Returns this chunk with all of `iter` appended, in order.
    ///
    /// If `iter` is empty, the result shares its storage with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// let c = chunk![1, 2];
    /// assert_eq!(c.clone().push_many([3, 4]), chunk![1, 2, 3, 4]);
    /// assert!(c.clone().push_many([]).ptr_eq(&c));
    /// ```
    #[must_use]
    pub fn push_many<I: IntoIterator<Item = T>>(mut self, iter: I) -> Self {
        self.extend(iter);
        self
    }

    /// Replaces everything from index `from` onwards by the elements of `iter`.
    ///
    /// If `iter` is empty, nothing happens at all: in particular the chunk is
    /// *not* truncated, even if `from < self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// let c = chunk![1, 2, 3];
    /// assert_eq!(c.clone().push_many_from(1, [9, 10]), chunk![1, 9, 10]);
    /// assert_eq!(c.clone().push_many_from(1, []), chunk![1, 2, 3]);
    /// assert_eq!(c.clone().push_many_from(7, [4]), chunk![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn push_many_from<I: IntoIterator<Item = T>>(mut self, from: usize, iter: I) -> Self {
        let mut iter = iter.into_iter().peekable();
        if iter.peek().is_some() {
            self.truncate(from);
            self.extend(iter);
        }
        self
    }

    /// Shortens the chunk to its first `len` elements.
    ///
    /// Does nothing if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len() {
            return;
        }
        if len == 0 {
            self.data = None;
            return;
        }

        // unwrap: we're longer than `len > 0`, so we have data.
        let data = self.data.as_mut().unwrap();
        if let Some(data) = Rc::get_mut(data) {
            data.truncate(len);
        } else {
            // Shared, so only copy the part we keep.
            *data = Rc::new(data[..len].to_vec());
        }
    }

    /// Removes and returns the last element, or `None` if we're empty.
    pub fn pop(&mut self) -> Option<T> {
        let data = self.data.as_mut()?;
        let ret = Rc::make_mut(data).pop();
        self.normalize();
        ret
    }
}

impl<T> Default for Chunk<T> {
    fn default() -> Self {
        Chunk::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<Vec<T>> for Chunk<T> {
    fn from(data: Vec<T>) -> Self {
        if data.is_empty() {
            Chunk::empty()
        } else {
            Chunk {
                data: Some(Rc::new(data)),
            }
        }
    }
}

impl<T: Clone> From<Chunk<T>> for Vec<T> {
    fn from(chunk: Chunk<T>) -> Self {
        chunk.data.map(Rc::unwrap_or_clone).unwrap_or_default()
    }
}

impl<T> FromIterator<T> for Chunk<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Chunk::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone> Extend<T> for Chunk<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Peek first, so that extending by nothing doesn't force a copy of
        // shared storage (or allocate an empty buffer).
        let mut iter = iter.into_iter().peekable();
        if iter.peek().is_some() {
            self.make_mut().extend(iter);
        }
    }
}

impl<T> Index<usize> for Chunk<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of range")
    }
}

impl<'a, T> IntoIterator for &'a Chunk<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Chunk<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Moves the elements out if nobody else holds this chunk's storage, and
    /// clones them otherwise.
    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self).into_iter()
    }
}

impl<T: serde::Serialize> serde::Serialize for Chunk<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elt in self.iter() {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Chunk<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec: Vec<T> = Vec::deserialize(deserializer)?;
        Ok(Chunk::from(vec))
    }
}
