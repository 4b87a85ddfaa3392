//! Contains the implementation of the [disjoint-sets/union-find].
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

mod metadata;
pub mod disjoint_set;
