//! Repacking a run of chunks into chunks of uniform size.
//!
//! Concatenating or slicing a tree of chunks leaves it with leaves of
//! arbitrary lengths. [`redistribute`] streams the items of such a run, in
//! order, into fresh chunks that are all exactly `size` long except possibly
//! the last one.

use crate::{Chunk, ChunkError, Const, ValidBranchingConstant};

/// Repacks the items of `chunks` into chunks of `size` items each.
///
/// The output chunks are filled greedily from left to right, so every chunk
/// but the last has exactly `size` items, and the last one has the remainder.
/// Flattening the output gives back the flattened input. If there are no
/// items at all, the output has no chunks.
///
/// Fails with [`ChunkError::InvalidChunkSize`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// # use tabula_chunk::{chunk, redistribute, ChunkError};
/// let out = redistribute(3, &[chunk![1, 2], chunk![3, 4, 5, 6], chunk![7]]).unwrap();
/// assert_eq!(out, vec![chunk![1, 2, 3], chunk![4, 5, 6], chunk![7]]);
///
/// assert_eq!(redistribute::<i32>(3, &[]), Ok(vec![]));
/// assert_eq!(redistribute(0, &[chunk![1]]), Err(ChunkError::InvalidChunkSize(0)));
/// ```
pub fn redistribute<T: Clone>(
    size: usize,
    chunks: &[Chunk<T>],
) -> Result<Vec<Chunk<T>>, ChunkError> {
    if size == 0 {
        log::debug!(
            "refusing to redistribute {} chunks into chunks of size 0",
            chunks.len()
        );
        return Err(ChunkError::InvalidChunkSize(size));
    }

    let total: usize = chunks.iter().map(Chunk::len).sum();
    let count = total.div_ceil(size);
    log::trace!(
        "redistributing {total} items from {} chunks into {count} chunks of size {size}",
        chunks.len()
    );

    let mut ret = Vec::with_capacity(count);
    let mut items_left = total;
    let mut current = Vec::with_capacity(size.min(items_left));

    for elt in chunks.iter().flat_map(Chunk::iter) {
        if current.len() == size {
            // Every chunk we seal is full, so the buffer for the next one only
            // needs room for what's left.
            let next = Vec::with_capacity(size.min(items_left));
            ret.push(Chunk::from(std::mem::replace(&mut current, next)));
        }
        current.push(elt.clone());
        items_left -= 1;
    }

    if !current.is_empty() {
        ret.push(Chunk::from(current));
    }

    debug_assert_eq!(ret.len(), count);
    Ok(ret)
}

/// Like [`redistribute`], but with the target size fixed at compile time.
///
/// Since `N` is one of the sizes allowed by [`ValidBranchingConstant`], this
/// can't fail.
///
/// # Examples
///
/// ```rust
/// # use tabula_chunk::{chunk, redistribute_const};
/// let out = redistribute_const::<_, 2>(&[chunk![1], chunk![2, 3]]);
/// assert_eq!(out, vec![chunk![1, 2], chunk![3]]);
/// ```
pub fn redistribute_const<T: Clone, const N: usize>(chunks: &[Chunk<T>]) -> Vec<Chunk<T>>
where
    Const<N>: ValidBranchingConstant,
{
    match redistribute(N, chunks) {
        Ok(ret) => ret,
        Err(_) => unreachable!("valid branching constants are positive"),
    }
}
