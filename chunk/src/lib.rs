//! This crate provides the leaf storage for persistent sequences.
//!
//! A [`Chunk`] is an ordered buffer with value semantics: cloning it is cheap,
//! and every modification copies the underlying buffer only if some other
//! clone can still see it. On top of that, [`redistribute`] takes a run of
//! chunks of arbitrary lengths and repacks their items into chunks of a single
//! target size, which is what a tree of chunks needs after concatenation or
//! slicing has left it with ragged leaves.
//!
//! Bulk construction and conversion go through plain iterators on the way in
//! and through [`rpds::List`] on the way out.

pub mod chunk;
pub mod error;
pub mod redistribute;
pub mod sequence;
pub mod traverse;

/// The chunk size we recommend for trees built out of [`Chunk`]s.
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// [`redistribute_const`] takes its target size as a const parameter, which
/// must be a reasonably-sized power of two. We use this trait to enforce that.
pub trait ValidBranchingConstant {}
pub struct Const<const N: usize> {}

impl ValidBranchingConstant for Const<2> {}
impl ValidBranchingConstant for Const<4> {}
impl ValidBranchingConstant for Const<8> {}
impl ValidBranchingConstant for Const<16> {}
impl ValidBranchingConstant for Const<32> {}
impl ValidBranchingConstant for Const<64> {}
impl ValidBranchingConstant for Const<128> {}

pub use chunk::Chunk;
pub use error::ChunkError;
pub use redistribute::{redistribute, redistribute_const};
