//! Stack-allocated list of column indices.

use crate::COLS;

/// Fixed-capacity buffer of columns. Capacity 7 covers every column on the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ColumnList {
    columns: [usize; COLS],
    len: u8,
}

impl ColumnList {
    /// Create an empty column list.
    pub const fn new() -> ColumnList {
        ColumnList {
            columns: [0; COLS],
            len: 0,
        }
    }

    /// Push a column onto the list. Pushes beyond capacity are ignored.
    #[inline]
    pub fn push(&mut self, column: usize) {
        debug_assert!((self.len as usize) < COLS);
        if (self.len as usize) < COLS {
            self.columns[self.len as usize] = column;
            self.len += 1;
        }
    }

    /// Return the number of columns in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the columns.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.columns[..self.len as usize]
    }

    /// Return `true` if `column` is in the list.
    #[inline]
    pub fn contains(&self, column: usize) -> bool {
        self.as_slice().contains(&column)
    }

    /// Return the first column, if any.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.as_slice().first().copied()
    }

    /// Iterate over the columns by value.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }

    /// Keep only the columns for which `keep` returns `true`, preserving order.
    pub fn retain<F: FnMut(usize) -> bool>(&mut self, mut keep: F) {
        let mut kept = ColumnList::new();
        for column in self.iter() {
            if keep(column) {
                kept.push(column);
            }
        }
        *self = kept;
    }
}

impl Default for ColumnList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ColumnList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for ColumnList {
    type Output = usize;
    #[inline]
    fn index(&self, index: usize) -> &usize {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<usize> for ColumnList {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut list = ColumnList::new();
        for column in iter {
            list.push(column);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnList;

    #[test]
    fn push_and_slice() {
        let mut list = ColumnList::new();
        assert!(list.is_empty());
        list.push(3);
        list.push(2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice(), &[3, 2]);
        assert_eq!(list[1], 2);
        assert_eq!(list.first(), Some(3));
    }

    #[test]
    fn retain_preserves_order() {
        let mut list: ColumnList = [0, 1, 2, 3, 4, 5, 6].into_iter().collect();
        list.retain(|c| c % 2 == 0);
        assert_eq!(list.as_slice(), &[0, 2, 4, 6]);
    }

    #[test]
    fn contains() {
        let list: ColumnList = [1, 5].into_iter().collect();
        assert!(list.contains(5));
        assert!(!list.contains(3));
    }
}
