//! Lazy enumerators for the four classic combinatorial structures:
//! Cartesian products, permutations, p-arrangements and p-combinations.
//!
//! Every enumerator is an [`Iterator`] that computes one tuple per `next()`
//! call and never materialises the full result set. Each yielded `Vec<T>` is
//! freshly allocated, so callers may keep or mutate results without touching
//! the enumerator's state or any other result.

use thiserror::Error;

mod arrangement;
mod combination;
mod permutation;
mod product;
mod rotate;

pub use arrangement::{Arrangements, arrangements};
pub use combination::{Combinations, combinations};
pub use permutation::{Permutations, permutations};
pub use product::{Product, bounded_products, products};

/// An invalid argument detected when constructing an enumerator.
///
/// Malformed inputs fail fast here rather than producing truncated or
/// out-of-bounds enumeration. Empty-but-valid bounds are not an error; they
/// enumerate zero results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("got {bounds} bounds for {arrays} arrays")]
    BoundsLengthMismatch { bounds: usize, arrays: usize },
    #[error("bound {lower}..{upper} is out of range for array {index} of length {len}")]
    BoundOutOfRange {
        index: usize,
        lower: usize,
        upper: usize,
        len: usize,
    },
    #[error("cannot select {p} items from a sequence of {n}")]
    SelectionTooLarge { p: usize, n: usize },
}
