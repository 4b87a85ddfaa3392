//! A [disjoint-sets/union-find] implementation and a model of [percolation] built on it.
//!
//! The [`DisjointSet`] joins sets by size and compresses the path of every lookup.
//! The `union`, `find` and `connected` methods therefore have an amortized complexity of
//! `O(α(n))` where 'α' is the inverse Ackermann function.
//! The `α(n)` has value below 5 for any `n` that can be written in the observable universe.
//!
//! The [`Percolation`] model opens sites of an `n` by `n` grid one at a time and answers
//! whether fluid poured on the top row can reach a given site, and whether it can reach the
//! bottom row.
//! Two virtual sites above and below the grid reduce both questions to a single
//! `connected` query on a [`DisjointSet`] of `n * n + 2` elements.
//!
//! ```
//! use percolation::Percolation;
//!
//! # fn main() -> percolation::Result<()> {
//! let mut percolation = Percolation::new(3)?;
//!
//! percolation.open(1, 2)?;
//! percolation.open(2, 2)?;
//! assert!(percolation.is_full(2, 2)?);
//! assert!(!percolation.percolates());
//!
//! percolation.open(3, 2)?;
//! assert!(percolation.percolates());
//! assert!(percolation.number_of_open_sites() == 3);
//! # Ok(())
//! # }
//! ```
//!
//! The `proptest` feature, enabled by default, implements `Arbitrary` for [`DisjointSet`].
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [percolation]: https://en.wikipedia.org/wiki/Percolation_theory
//! [`DisjointSet`]: disjoint_sets/disjoint_set/struct.DisjointSet.html
//! [`Percolation`]: percolation/struct.Percolation.html

extern crate bit_vec;
#[cfg(test)]
#[macro_use]
extern crate proptest;

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

pub mod disjoint_sets;
pub mod error;
pub mod percolation;

pub use disjoint_sets::disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use percolation::Percolation;
