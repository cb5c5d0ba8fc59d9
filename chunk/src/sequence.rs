//! Conversion between chunks and forward sequences.
//!
//! On the way in, any iterator will do (see also the [`FromIterator`] and
//! [`Extend`] impls on [`Chunk`]). On the way out we produce an
//! [`rpds::List`], a persistent singly-linked list.

use rpds::List;

use crate::Chunk;

impl<T: Clone> Chunk<T> {
    /// Builds a chunk from the elements of a list, in order.
    pub fn from_list(list: &List<T>) -> Self {
        list.iter().cloned().collect()
    }

    /// Converts this chunk to a list with the same elements in the same order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// let list = chunk![1, 2, 3].to_list();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn to_list(&self) -> List<T> {
        // Lists grow at the front, so build it back to front.
        let mut list = List::new();
        for elt in self.iter().rev() {
            list.push_front_mut(elt.clone());
        }
        list
    }

    /// Splits the first `n` elements off a list.
    ///
    /// Returns a chunk of the first `n` elements (or all of them, if the list
    /// is shorter) and the rest of the list. The returned list shares its
    /// nodes with `list`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::{chunk, Chunk};
    /// # use rpds::List;
    /// let list: List<i32> = [1, 2, 3, 4].into_iter().collect();
    /// let (prefix, rest) = Chunk::take_prefix_from_list(2, &list);
    /// assert_eq!(prefix, chunk![1, 2]);
    /// assert_eq!(rest.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
    /// ```
    pub fn take_prefix_from_list(n: usize, list: &List<T>) -> (Self, List<T>) {
        let mut rest = list.clone();
        let mut prefix = Vec::with_capacity(n.min(list.len()));
        while prefix.len() < n {
            let Some(first) = rest.first() else {
                break;
            };
            prefix.push(first.clone());
            rest.drop_first_mut();
        }
        (Chunk::from(prefix), rest)
    }
}

impl<T> Chunk<T> {
    /// Splits the first `n` elements off an iterator.
    ///
    /// Returns a chunk of the first `n` elements (or all of them, if there
    /// are fewer) and the iterator, positioned just after them. No element
    /// past the first `n` is consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::{chunk, Chunk};
    /// let (prefix, rest) = Chunk::take_prefix(2, [1, 2, 3, 4]);
    /// assert_eq!(prefix, chunk![1, 2]);
    /// assert_eq!(rest.collect::<Vec<_>>(), vec![3, 4]);
    ///
    /// let (prefix, rest) = Chunk::take_prefix(0, [1, 2, 3]);
    /// assert!(prefix.is_empty());
    /// assert_eq!(rest.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn take_prefix<I: IntoIterator<Item = T>>(n: usize, iter: I) -> (Self, I::IntoIter) {
        let mut iter = iter.into_iter();
        let prefix = iter.by_ref().take(n).collect();
        (prefix, iter)
    }
}
