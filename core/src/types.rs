use ndarray::Array2;

/// Single coordinate axis used for row and column indices and grid extents.
pub type Coord = u8;

/// Count type used for mine counts, flag counters and total-cell counts.
pub type CellCount = u16;

/// Grid position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

/// Row-major flat index of `coords` in a grid `cols` wide.
pub const fn flat_index((row, col): Coord2, cols: Coord) -> usize {
    row as usize * cols as usize + col as usize
}

/// Inverse of [`flat_index`].
pub const fn from_flat_index(index: usize, cols: Coord) -> Coord2 {
    let cols = cols as usize;
    ((index / cols) as Coord, (index % cols) as Coord)
}

/// Whether `coords` lies outside the 3x3 block centred on `center`.
pub const fn is_outside_perimeter(center: Coord2, coords: Coord2) -> bool {
    coords.0.abs_diff(center.0) > 1 || coords.1.abs_diff(center.1) > 1
}

/// Extent of a grid as `(rows, cols)`.
pub fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (
        rows.try_into().expect("grid rows fit in a coordinate"),
        cols.try_into().expect("grid cols fit in a coordinate"),
    )
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Offsets `center` by `(dr, dc)`, yielding a position only if it stays inside `size`.
fn offset(center: Coord2, (dr, dc): (i8, i8), size: Coord2) -> Option<Coord2> {
    let row = center.0.checked_add_signed(dr).filter(|&row| row < size.0)?;
    let col = center.1.checked_add_signed(dc).filter(|&col| col < size.1)?;
    Some((row, col))
}

/// Iterator over the up-to-8 in-bounds neighbors of a cell, row by row.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord2,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            next: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(pos) = offset(self.center, delta, self.size) {
                return Some(pos);
            }
        }
        None
    }
}

pub trait NeighborsExt {
    fn neighbors(&self, center: Coord2) -> Neighbors;
}

impl<T> NeighborsExt for Array2<T> {
    fn neighbors(&self, center: Coord2) -> Neighbors {
        Neighbors::new(center, grid_size(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<_> = Neighbors::new((0, 0), (5, 5)).collect();
        assert_eq!(found, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(Neighbors::new((2, 2), (5, 5)).count(), 8);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(Neighbors::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn far_edge_is_bounds_checked() {
        let found: Vec<_> = Neighbors::new((4, 2), (5, 3)).collect();
        assert_eq!(found, [(3, 1), (3, 2), (4, 1)]);
    }

    #[test]
    fn flat_index_is_row_major() {
        assert_eq!(flat_index((2, 3), 7), 17);
        assert_eq!(from_flat_index(17, 7), (2, 3));
    }

    #[test]
    fn perimeter_is_three_by_three() {
        assert!(!is_outside_perimeter((2, 2), (1, 3)));
        assert!(!is_outside_perimeter((2, 2), (2, 2)));
        assert!(is_outside_perimeter((2, 2), (0, 2)));
        assert!(is_outside_perimeter((2, 2), (2, 4)));
        assert!(is_outside_perimeter((0, 0), (0, 2)));
    }
}
