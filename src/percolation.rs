//! A model of [percolation] on an `n` by `n` grid.
//!
//! See [`Percolation`] for more information.
//!
//! [percolation]: https://en.wikipedia.org/wiki/Percolation_theory
//! [`Percolation`]: struct.Percolation.html

use {
    std::fmt,
    bit_vec::BitVec,
    crate::{
        disjoint_sets::disjoint_set::DisjointSet,
        error::{Error, Result},
    },
};

/// The index of the virtual site above the grid.
const TOP: usize = 0;

/// An `n` by `n` grid of sites that are closed until they are opened.
///
/// Rows and columns are numbered `1 ..= n`.
/// The site at `(row, col)` is stored at index `(row - 1) * n + col` of a [`DisjointSet`].
/// Index `0` is a virtual site above the grid and index `n * n + 1` a virtual site below it.
/// Every site of the first row is joined with the top from the start, and every site of the
/// last row with the bottom, so the grid percolates exactly when the two virtual sites share
/// a set.
///
/// # Examples
///
/// ```
/// use percolation::Percolation;
///
/// # fn main() -> percolation::Result<()> {
/// let mut percolation = Percolation::new(2)?;
///
/// percolation.open(1, 1)?;
/// percolation.open(2, 2)?;
/// assert!(!percolation.percolates());
/// assert!(!percolation.is_full(2, 2)?);
///
/// percolation.open(2, 1)?;
/// assert!(percolation.percolates());
/// assert!(percolation.is_full(2, 2)?);
/// # Ok(())
/// # }
/// ```
///
/// [`DisjointSet`]: ../disjoint_sets/disjoint_set/struct.DisjointSet.html
#[derive(Clone, Debug)]
pub struct Percolation {
    /// The amount of rows and of columns.
    size: usize,
    /// Whether each index is open, the two virtual sites included.
    open: BitVec,
    /// The amount of sites opened with `open`.
    open_sites: usize,
    sites: DisjointSet,
}

impl Percolation {
    /// Constructs a new `Percolation` of `size` by `size` closed sites.
    ///
    /// A `size` of zero is allowed, but every site is out of range for such a grid and it
    /// never percolates.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSize` if `size` is negative or the grid does not fit in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::{Error, Percolation};
    ///
    /// # fn main() -> percolation::Result<()> {
    /// let percolation = Percolation::new(4)?;
    /// assert!(percolation.size() == 4);
    /// assert!(!percolation.is_open(4, 4)?);
    ///
    /// assert!(Percolation::new(-1).unwrap_err() == Error::InvalidSize(-1));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(size: isize) -> Result<Self> {
        if size < 0 {
            return Err(Error::InvalidSize(size))
        }

        let len = (size as usize)
            .checked_mul(size as usize)
            .and_then(|sites| sites.checked_add(2))
            .ok_or(Error::InvalidSize(size))?;
        let size = size as usize;
        let bottom = len - 1;

        let mut open = bit_vec![false; len];
        open.set(TOP, true);
        open.set(bottom, true);

        let mut sites = DisjointSet::new(len);
        for i in 1 ..= size {
            // `bottom - i` runs over the last row from right to left.
            sites.union(TOP, i)?;
            sites.union(bottom, bottom - i)?;
        }

        log::debug!("created a {}x{} percolation grid", size, size);

        Ok(Self {
            size,
            open,
            open_sites: 0,
            sites,
        })
    }

    /// Returns the amount of rows, which is also the amount of columns.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Opens the site at `(row, col)` and joins it with its open neighbours.
    ///
    /// A site in the first row is joined with the virtual top and a site in the last row with
    /// the virtual bottom.
    /// Opening a site that is already open does nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::SiteOutOfRange` if `row` or `col` is not in `1 ..= size`, in which case
    /// nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::Percolation;
    ///
    /// # fn main() -> percolation::Result<()> {
    /// let mut percolation = Percolation::new(3)?;
    ///
    /// percolation.open(2, 3)?;
    /// percolation.open(2, 3)?;
    /// assert!(percolation.is_open(2, 3)?);
    /// assert!(percolation.number_of_open_sites() == 1);
    ///
    /// assert!(percolation.open(0, 1).is_err());
    /// assert!(percolation.open(1, 4).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.index(row, col)?;

        if self.open[site] {
            return Ok(())
        }

        let percolated = self.percolates();

        self.open_sites += 1;
        self.open.set(site, true);

        if row > 1 {
            self.join_if_open(site, row - 1, col)?;
        } else {
            self.sites.union(site, TOP)?;
        }

        if col > 1 {
            self.join_if_open(site, row, col - 1)?;
        }

        if col < self.size {
            self.join_if_open(site, row, col + 1)?;
        }

        if row < self.size {
            self.join_if_open(site, row + 1, col)?;
        } else {
            self.sites.union(site, self.bottom())?;
        }

        log::trace!("opened site ({}, {}), {} sites open", row, col, self.open_sites);
        if !percolated && self.percolates() {
            log::debug!(
                "a {}x{} grid percolates after {} open sites",
                self.size,
                self.size,
                self.open_sites
            );
        }

        Ok(())
    }

    /// Returns `true` if the site at `(row, col)` has been opened.
    ///
    /// # Errors
    ///
    /// Returns `Error::SiteOutOfRange` if `row` or `col` is not in `1 ..= size`.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[self.index(row, col)?])
    }

    /// Returns `true` if the site at `(row, col)` is open and connected to the virtual top.
    ///
    /// Once the grid percolates an open site in the last row is connected to the top through
    /// the virtual bottom, so it is full even without a path of open sites of its own.
    ///
    /// # Errors
    ///
    /// Returns `Error::SiteOutOfRange` if `row` or `col` is not in `1 ..= size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::Percolation;
    ///
    /// # fn main() -> percolation::Result<()> {
    /// let mut percolation = Percolation::new(3)?;
    ///
    /// percolation.open(1, 1)?;
    /// percolation.open(2, 2)?;
    ///
    /// assert!(percolation.is_full(1, 1)?);
    /// assert!(!percolation.is_full(2, 2)?);
    /// // Closed sites in the first row are never full.
    /// assert!(!percolation.is_full(1, 3)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;

        Ok(self.is_full_site(site))
    }

    /// Returns `true` if there is a path of open sites from the top row to the bottom row.
    #[inline]
    pub fn percolates(&self) -> bool {
        self.sites.find_compress(TOP) == self.sites.find_compress(self.bottom())
    }

    /// Returns the amount of different sites that have been opened.
    #[inline]
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// The index of the virtual site below the grid.
    #[inline]
    fn bottom(&self) -> usize {
        self.size * self.size + 1
    }

    /// Maps `(row, col)` to its index in `sites`.
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if 0 < row && row <= self.size && 0 < col && col <= self.size {
            Ok((row - 1) * self.size + col)
        } else {
            Err(Error::SiteOutOfRange {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Joins `site` with the site at `(row, col)` if the latter is open.
    fn join_if_open(&mut self, site: usize, row: usize, col: usize) -> Result<()> {
        let neighbour = self.index(row, col)?;

        if self.open[neighbour] {
            self.sites.union(site, neighbour)?;
        }

        Ok(())
    }

    fn is_full_site(&self, site: usize) -> bool {
        self.open[site] && self.sites.find_compress(site) == self.sites.find_compress(TOP)
    }
}

/// Draws the grid one row per line: `#` for closed, `~` for full and `.` for other open sites.
impl fmt::Display for Percolation {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for row in 0 .. self.size {
            for col in 1 ..= self.size {
                let site = row * self.size + col;

                let symbol = if !self.open[site] {
                    '#'
                } else if self.is_full_site(site) {
                    '~'
                } else {
                    '.'
                };

                write!(formatter, "{}", symbol)?;
            }

            writeln!(formatter)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn all_sites(size: usize) -> impl Iterator<Item = (usize, usize)> {
        (1 ..= size).flat_map(move |row| (1 ..= size).map(move |col| (row, col)))
    }

    #[test]
    fn closed_at_the_start() {
        init_logger();
        let percolation = Percolation::new(4).unwrap();

        for (row, col) in all_sites(4) {
            assert_eq!(percolation.is_open(row, col), Ok(false));
            assert_eq!(percolation.is_full(row, col), Ok(false));
        }
        assert_eq!(percolation.number_of_open_sites(), 0);
        assert!(!percolation.percolates());
    }

    #[test]
    fn single_site_percolates_without_opening() {
        let percolation = Percolation::new(1).unwrap();

        assert!(percolation.percolates());
        assert_eq!(percolation.is_open(1, 1), Ok(false));
        assert_eq!(percolation.is_full(1, 1), Ok(false));
        assert_eq!(percolation.number_of_open_sites(), 0);
    }

    #[test]
    fn single_site_opened() {
        let mut percolation = Percolation::new(1).unwrap();
        percolation.open(1, 1).unwrap();

        assert!(percolation.percolates());
        assert_eq!(percolation.is_full(1, 1), Ok(true));
        assert_eq!(percolation.number_of_open_sites(), 1);
    }

    #[test]
    fn empty_grid() {
        let mut percolation = Percolation::new(0).unwrap();

        assert!(!percolation.percolates());
        assert_eq!(percolation.number_of_open_sites(), 0);
        assert_eq!(
            percolation.open(1, 1),
            Err(Error::SiteOutOfRange { row: 1, col: 1, size: 0 }),
        );
        assert!(percolation.is_open(1, 1).is_err());
        assert!(percolation.is_full(1, 1).is_err());
        assert_eq!(percolation.to_string(), "");
    }

    #[test]
    fn negative_size() {
        assert_eq!(Percolation::new(-1).unwrap_err(), Error::InvalidSize(-1));
        assert_eq!(Percolation::new(isize::min_value()).unwrap_err(), Error::InvalidSize(isize::min_value()));
    }

    #[test]
    fn out_of_range_sites() {
        let mut percolation = Percolation::new(3).unwrap();

        assert_eq!(percolation.open(0, 1), Err(Error::SiteOutOfRange { row: 0, col: 1, size: 3 }));
        assert!(percolation.open(0, 1).unwrap_err().is_out_of_range());
        assert!(percolation.open(1, 0).is_err());
        assert!(percolation.open(4, 1).is_err());
        assert!(percolation.open(1, 4).is_err());
        assert!(percolation.is_open(4, 4).is_err());
        assert!(percolation.is_full(0, 0).is_err());
        assert_eq!(percolation.number_of_open_sites(), 0);
    }

    #[test]
    fn column_chain() {
        init_logger();
        let mut percolation = Percolation::new(3).unwrap();

        percolation.open(1, 1).unwrap();
        assert_eq!(percolation.is_full(1, 1), Ok(true));
        assert!(!percolation.percolates());

        percolation.open(2, 1).unwrap();
        assert_eq!(percolation.is_full(2, 1), Ok(true));
        assert!(!percolation.percolates());

        percolation.open(3, 1).unwrap();
        assert_eq!(percolation.is_full(3, 1), Ok(true));
        assert!(percolation.percolates());
        assert_eq!(percolation.number_of_open_sites(), 3);
    }

    #[test]
    fn isolated_site() {
        let mut percolation = Percolation::new(3).unwrap();

        percolation.open(2, 2).unwrap();

        assert_eq!(percolation.is_open(2, 2), Ok(true));
        assert_eq!(percolation.is_full(2, 2), Ok(false));
        assert!(!percolation.percolates());
    }

    #[test]
    fn open_twice_counts_once() {
        let mut percolation = Percolation::new(3).unwrap();

        percolation.open(3, 3).unwrap();
        percolation.open(3, 3).unwrap();
        percolation.open(1, 2).unwrap();

        assert_eq!(percolation.number_of_open_sites(), 2);
    }

    #[test]
    fn last_column_joins_its_left_neighbour() {
        let mut percolation = Percolation::new(3).unwrap();

        percolation.open(1, 3).unwrap();
        percolation.open(2, 3).unwrap();
        percolation.open(2, 2).unwrap();

        // (2, 2) only reaches the top through (2, 3).
        assert_eq!(percolation.is_full(2, 2), Ok(true));
        assert!(!percolation.percolates());

        percolation.open(3, 2).unwrap();
        assert!(percolation.percolates());
    }

    #[test]
    fn second_to_last_row_is_not_bottom() {
        let mut percolation = Percolation::new(3).unwrap();

        percolation.open(1, 1).unwrap();
        percolation.open(2, 1).unwrap();
        assert!(!percolation.percolates());

        percolation.open(3, 2).unwrap();
        assert!(!percolation.percolates());
    }

    #[test]
    fn winding_path() {
        let mut percolation = Percolation::new(4).unwrap();
        let path = [(1, 4), (2, 4), (2, 3), (2, 2), (3, 2), (4, 2)];

        for (step, &(row, col)) in path.iter().enumerate() {
            assert!(!percolation.percolates());
            percolation.open(row, col).unwrap();
            assert_eq!(percolation.is_full(row, col), Ok(true));
            assert_eq!(percolation.number_of_open_sites(), step + 1);
        }

        assert!(percolation.percolates());
    }

    #[test]
    fn full_through_the_bottom_once_percolating() {
        let mut percolation = Percolation::new(3).unwrap();

        percolation.open(3, 3).unwrap();
        assert_eq!(percolation.is_full(3, 3), Ok(false));

        percolation.open(1, 1).unwrap();
        percolation.open(2, 1).unwrap();
        percolation.open(3, 1).unwrap();

        assert!(percolation.percolates());
        assert_eq!(percolation.is_full(3, 3), Ok(true));
    }

    #[test]
    fn display() {
        let mut percolation = Percolation::new(3).unwrap();

        percolation.open(1, 1).unwrap();
        percolation.open(2, 1).unwrap();
        percolation.open(2, 3).unwrap();

        assert_eq!(percolation.to_string(), "~##\n~#.\n###\n");
    }

    #[cfg(feature = "proptest")]
    mod properties {
        use {
            proptest::prelude::*,
            crate::percolation::Percolation,
            super::all_sites,
        };

        fn sites() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
            (1_usize .. 8).prop_flat_map(|size| {
                let site = (1 .. size + 1, 1 .. size + 1);
                (Just(size), proptest::collection::vec(site, 0 .. 64))
            })
        }

        proptest! {
            #[test]
            fn opened_sites_stay_open((size, opened) in sites()) {
                let mut percolation = Percolation::new(size as isize).unwrap();
                let mut distinct = std::collections::HashSet::new();

                for &(row, col) in &opened {
                    percolation.open(row, col).unwrap();
                    distinct.insert((row, col));

                    for &(row, col) in &distinct {
                        prop_assert!(percolation.is_open(row, col).unwrap());
                    }
                    prop_assert_eq!(percolation.number_of_open_sites(), distinct.len());
                }

                for (row, col) in all_sites(size) {
                    let open = distinct.contains(&(row, col));
                    prop_assert_eq!(percolation.is_open(row, col).unwrap(), open);
                    if !open {
                        prop_assert!(!percolation.is_full(row, col).unwrap());
                    }
                }
            }

            #[test]
            fn full_first_row_is_full((size, opened) in sites()) {
                let mut percolation = Percolation::new(size as isize).unwrap();

                for &(row, col) in &opened {
                    percolation.open(row, col).unwrap();
                }

                for col in 1 ..= size {
                    let open = percolation.is_open(1, col).unwrap();
                    prop_assert_eq!(percolation.is_full(1, col).unwrap(), open);
                }
            }

            #[test]
            fn opening_everything_percolates(size in 1_usize .. 12) {
                let mut percolation = Percolation::new(size as isize).unwrap();

                for (row, col) in all_sites(size) {
                    percolation.open(row, col).unwrap();
                }

                prop_assert!(percolation.percolates());
                prop_assert_eq!(percolation.number_of_open_sites(), size * size);
            }
        }
    }
}
