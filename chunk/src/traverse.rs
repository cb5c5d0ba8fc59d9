//! Order-preserving traversals.
//!
//! The folds take their callback as `f(item, accumulator)`, whichever direction
//! they go in.

use crate::Chunk;

impl<T> Chunk<T> {
    /// Applies `f` to every element, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// assert_eq!(chunk![1, 2, 3].map(|x| x * 2), chunk![2, 4, 6]);
    /// ```
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Chunk<U> {
        self.iter().map(f).collect()
    }

    /// Folds from the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// let digits = chunk![1, 2, 3].fold_left(0, |x, acc| acc * 10 + x);
    /// assert_eq!(digits, 123);
    /// ```
    pub fn fold_left<R>(&self, init: R, mut f: impl FnMut(&T, R) -> R) -> R {
        self.iter().fold(init, |acc, elt| f(elt, acc))
    }

    /// Folds from the back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// let digits = chunk![1, 2, 3].fold_right(0, |x, acc| acc * 10 + x);
    /// assert_eq!(digits, 321);
    /// ```
    pub fn fold_right<R>(&self, init: R, mut f: impl FnMut(&T, R) -> R) -> R {
        self.iter().rfold(init, |acc, elt| f(elt, acc))
    }

    /// Maps from the front while threading an accumulator through.
    ///
    /// `f` returns the new accumulator along with the mapped element. Returns
    /// the final accumulator and the mapped chunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tabula_chunk::chunk;
    /// // Running sums.
    /// let (total, sums) = chunk![1, 2, 3].map_accumulate_left(0, |x, acc| (acc + x, acc + x));
    /// assert_eq!(total, 6);
    /// assert_eq!(sums, chunk![1, 3, 6]);
    /// ```
    pub fn map_accumulate_left<A, U>(
        &self,
        init: A,
        mut f: impl FnMut(&T, A) -> (A, U),
    ) -> (A, Chunk<U>) {
        let mut acc = init;
        let mut mapped = Vec::with_capacity(self.len());
        for elt in self.iter() {
            let (next, out) = f(elt, acc);
            acc = next;
            mapped.push(out);
        }
        (acc, Chunk::from(mapped))
    }

    /// The index of the first element satisfying `pred`, if there is one.
    ///
    /// Stops calling `pred` after the first match.
    pub fn find_first_index(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(pred)
    }
}
