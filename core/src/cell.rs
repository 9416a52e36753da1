use serde::{Deserialize, Serialize};

/// What the player has done to a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Covered,
    Flagged,
    Uncovered,
}

impl CellState {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_uncovered(self) -> bool {
        matches!(self, Self::Uncovered)
    }
}

/// Hidden content of a cell.
///
/// Safe cells start as `Count(0)` and only hold their real adjacency count once they have been dug.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutCell {
    Mine,
    Count(u8),
}

impl LayoutCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// The stored adjacency count, `None` for mines.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }
}

impl Default for LayoutCell {
    fn default() -> Self {
        Self::Count(0)
    }
}
