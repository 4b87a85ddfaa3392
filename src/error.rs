//! The error type shared by the [`DisjointSet`] and the [`Percolation`] model.
//!
//! [`DisjointSet`]: ../disjoint_sets/disjoint_set/struct.DisjointSet.html
//! [`Percolation`]: ../percolation/struct.Percolation.html

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways an operation of this crate can fail.
///
/// Every operation validates its arguments before it changes anything,
/// so an `Err` always leaves the structure as it was.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// An element index of a `DisjointSet` was not in `0 .. len`.
    #[error("index {index} out of range for a disjoint set of {len} elements")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    /// A site of a `Percolation` grid was not in `1 ..= size` on both axes.
    #[error("site ({row}, {col}) out of range for a {size}x{size} grid")]
    SiteOutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },
    /// A `Percolation` grid was requested with a negative size.
    #[error("grid size cannot be negative, got {0}")]
    InvalidSize(isize),
}

impl Error {
    /// Returns `true` for both the index and the site variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::Error;
    ///
    /// assert!(Error::IndexOutOfRange { index: 4, len: 4 }.is_out_of_range());
    /// assert!(Error::SiteOutOfRange { row: 0, col: 1, size: 3 }.is_out_of_range());
    /// assert!(!Error::InvalidSize(-1).is_out_of_range());
    /// ```
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::IndexOutOfRange { .. } | Error::SiteOutOfRange { .. } => true,
            Error::InvalidSize(_) => false,
        }
    }
}
