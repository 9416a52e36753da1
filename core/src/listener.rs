use alloc::vec::Vec;

use crate::Coord2;

/// Receives one notification per uncovered cell, cascade members included, before the dig that caused it returns.
///
/// This is the only channel from the minefield to whatever draws it.
pub trait RevealListener {
    fn on_cell_revealed(&mut self, coords: Coord2, adjacent_mines: u8);
}

impl<F: FnMut(Coord2, u8)> RevealListener for F {
    fn on_cell_revealed(&mut self, coords: Coord2, adjacent_mines: u8) {
        self(coords, adjacent_mines)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoopListener;

impl RevealListener for NoopListener {
    fn on_cell_revealed(&mut self, _coords: Coord2, _adjacent_mines: u8) {}
}

/// Keeps every notification in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealLog {
    entries: Vec<(Coord2, u8)>,
}

impl RevealLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Coord2, u8)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.entries.iter().any(|&(pos, _)| pos == coords)
    }
}

impl RevealListener for RevealLog {
    fn on_cell_revealed(&mut self, coords: Coord2, adjacent_mines: u8) {
        self.entries.push((coords, adjacent_mines));
    }
}
