//! A [disjoint-sets/union-find] over the indices `0 .. n`, joined by size and
//! compressed on every lookup.
//!
//! See [`DisjointSet`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet`]: struct.DisjointSet.html

use {
    std::cmp::Ordering,
    crate::{
        disjoint_sets::metadata::Metadata,
        error::{Error, Result},
    },
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] of the indices `0 .. n`.
///
/// Every index starts out in its own set and sets are joined with the `union` method.
/// The set of smallest size is always placed below the root of the larger set and
/// every `find` points all the indices it passes directly at the root.
/// Together these keep `union`, `find` and `connected` at an amortized `O(α(n))`.
///
/// The metadata is kept in cells so the compression also happens through a shared
/// reference. This means a `DisjointSet` can be sent to another thread but not shared.
///
/// # Examples
///
/// ```
/// use percolation::DisjointSet;
///
/// # fn main() -> percolation::Result<()> {
/// let mut disjoint_set = DisjointSet::new(4);
/// disjoint_set.union(1, 2)?;
/// disjoint_set.union(2, 3)?;
///
/// assert!(disjoint_set.connected(1, 3)?);
/// assert!(!disjoint_set.connected(0, 3)?);
/// assert!(disjoint_set.count() == 2);
/// # Ok(())
/// # }
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone, Default)]
pub struct DisjointSet {
    /// The metadata for each index.
    meta: Vec<Metadata>,
    /// The amount of disjoint sets.
    count: usize,
}

impl DisjointSet {
    /// Constructs a new `DisjointSet` of `len` singleton sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSet;
    ///
    /// let disjoint_set = DisjointSet::new(5);
    ///
    /// assert!(disjoint_set.len() == 5);
    /// assert!(disjoint_set.count() == 5);
    /// ```
    pub fn new(len: usize) -> Self {
        log::debug!("creating a disjoint set of {} singletons", len);

        Self {
            meta: (0 .. len).map(Metadata::new).collect(),
            count: len,
        }
    }

    /// Returns the amount of indices in the `DisjointSet`.
    #[inline]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns `true` if the `DisjointSet` has no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Returns the amount of disjoint sets.
    ///
    /// This starts out at `len` and goes down by one for every `union` that joins
    /// two different sets.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Gives the root of the set that `index` belongs to.
    ///
    /// Each index of a set gives the same root.
    /// After this call every index on the way from `index` to the root has the root
    /// as its parent.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSet;
    ///
    /// # fn main() -> percolation::Result<()> {
    /// let mut disjoint_set = DisjointSet::new(3);
    /// assert!(disjoint_set.find(2)? == 2);
    ///
    /// disjoint_set.union(0, 2)?;
    /// assert!(disjoint_set.find(2)? == disjoint_set.find(0)?);
    ///
    /// assert!(disjoint_set.find(3).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn find(&self, index: usize) -> Result<usize> {
        self.check(index)?;

        Ok(self.find_compress(index))
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// The root of the smaller set is placed below the root of the larger set.
    /// When both sets have the same size the root of `second_index` is placed below
    /// the root of `first_index`.
    /// Nothing changes if the indices already share a set.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `first_index` or `second_index` is out of
    /// bounds, in which case nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSet;
    ///
    /// # fn main() -> percolation::Result<()> {
    /// let mut disjoint_set = DisjointSet::new(4);
    ///
    /// disjoint_set.union(0, 1)?;
    /// assert!(disjoint_set.count() == 3);
    ///
    /// // The second union of the same sets does nothing.
    /// disjoint_set.union(1, 0)?;
    /// assert!(disjoint_set.count() == 3);
    ///
    /// assert!(disjoint_set.union(0, 4).is_err());
    /// assert!(disjoint_set.count() == 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn union(&mut self, first_index: usize, second_index: usize) -> Result<()> {
        self.check(first_index)?;
        self.check(second_index)?;

        let i = self.find_compress(first_index);
        let j = self.find_compress(second_index);

        if i != j {
            self.union_roots(i, j);
            log::trace!("joined {} and {}, {} sets remain", first_index, second_index, self.count);
        }

        Ok(())
    }

    /// Places the smaller of the trees of the roots `i` and `j` below the other.
    ///
    /// # Panics
    ///
    /// If `i` or `j` is out of bounds.
    fn union_roots(&mut self, i: usize, j: usize) {
        let size_i = self.meta[i].size();
        let size_j = self.meta[j].size();

        // We add the smaller tree to the larger tree.
        match Ord::cmp(&size_i, &size_j) {
            Ordering::Less => {
                self.meta[i].set_parent(j);
                self.meta[j].set_size(size_i + size_j);
            },
            Ordering::Equal | Ordering::Greater => {
                self.meta[j].set_parent(i);
                self.meta[i].set_size(size_i + size_j);
            },
        }

        self.count -= 1;
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSet;
    ///
    /// # fn main() -> percolation::Result<()> {
    /// let mut disjoint_set = DisjointSet::new(4);
    ///
    /// disjoint_set.union(1, 3)?;
    /// disjoint_set.union(0, 1)?;
    ///
    /// assert!(disjoint_set.connected(0, 3)?);
    /// assert!(!disjoint_set.connected(1, 2)?);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn connected(&self, first_index: usize, second_index: usize) -> Result<bool> {
        Ok(self.find(first_index)? == self.find(second_index)?)
    }

    /// Returns the amount of indices in the set that `index` belongs to.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSet;
    ///
    /// # fn main() -> percolation::Result<()> {
    /// let mut disjoint_set = DisjointSet::new(5);
    /// disjoint_set.union(0, 4)?;
    /// disjoint_set.union(4, 2)?;
    ///
    /// assert!(disjoint_set.len_of_set(2)? == 3);
    /// assert!(disjoint_set.len_of_set(1)? == 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn len_of_set(&self, index: usize) -> Result<usize> {
        let root = self.find(index)?;

        Ok(self.meta[root].size())
    }

    /// Returns `true` if `index` is the only index of its set.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    #[inline]
    pub fn is_singleton(&self, index: usize) -> Result<bool> {
        Ok(self.len_of_set(index)? == 1)
    }

    /// Returns the amount of parent links between `index` and its root.
    ///
    /// Unlike `find` this does not compress the path.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSet;
    ///
    /// # fn main() -> percolation::Result<()> {
    /// let mut disjoint_set = DisjointSet::new(4);
    /// disjoint_set.union(0, 1)?;
    /// disjoint_set.union(2, 3)?;
    /// disjoint_set.union(0, 2)?;
    ///
    /// assert!(disjoint_set.depth(0)? == 0);
    /// assert!(disjoint_set.depth(3)? == 2);
    ///
    /// disjoint_set.find(3)?;
    /// assert!(disjoint_set.depth(3)? == 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn depth(&self, mut index: usize) -> Result<usize> {
        self.check(index)?;

        let mut depth = 0;
        while index != self.meta[index].parent() {
            index = self.meta[index].parent();
            depth += 1;
        }

        Ok(depth)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Gives the root of the set of `index` and points every index on the way at it.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub(crate) fn find_compress(&self, mut index: usize) -> usize {
        let root = self.find_final(index);

        // We make a second pass so each index on the path gets the root as parent.
        while index != root {
            let parent = self.meta[index].parent();
            self.meta[index].set_parent(root);
            index = parent;
        }

        root
    }

    /// Gives the root of the set of `index` without updating any parents.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub(crate) fn find_final(&self, mut index: usize) -> usize {
        while index != self.meta[index].parent() {
            index = self.meta[index].parent();
        }

        index
    }
}

impl std::fmt::Debug for DisjointSet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        // We map the roots to `usize` names.
        let mut map = std::collections::HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();
        let mut names = 0;

        for i in 0 .. self.len() {
            let root = self.find_compress(i);

            let name = *map.entry(root).or_insert_with(|| {
                let new_name = names;
                names += 1;

                new_name
            });

            builder.entry(&format_args!("{} => {}", i, name));
        }

        builder.finish()
    }
}

impl PartialEq for DisjointSet {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.count != other.count {
            return false
        }

        // We map the roots of self to the roots of other.
        let mut map = std::collections::HashMap::with_capacity(self.len());

        for i in 0 .. self.len() {
            let self_root = self.find_compress(i);
            let other_root = other.find_compress(i);

            if *map.entry(self_root).or_insert(other_root) != other_root {
                return false
            }
        }

        true
    }
}

impl Eq for DisjointSet {}

#[cfg(feature = "proptest")]
impl Arbitrary for DisjointSet {
    type Parameters = proptest::collection::SizeRange;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
        use std::collections::hash_map;

        (Vec::<usize>::arbitrary_with((size_range, ()))).prop_map(|vec| {
            let mut disjoint_set = Self::new(vec.len());

            // We map a `set_number` to an `index` of that set.
            let mut map = hash_map::HashMap::with_capacity(vec.len());

            for (index, set_number) in vec.into_iter().enumerate() {
                let set_number = set_number.trailing_zeros();

                match map.entry(set_number) {
                    hash_map::Entry::Occupied(occupied) => {
                        // A new index is always a root of its own.
                        let root = disjoint_set.find_compress(*occupied.get());
                        disjoint_set.union_roots(root, index);
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(index);
                    }
                }
            }

            disjoint_set
        }).boxed()
    }
}
