#![no_std]

extern crate alloc;

use alloc::string::ToString;
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use listener::*;
pub use minefield::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod listener;
mod minefield;
mod session;
mod types;

/// Dimensions and mine count of a game, validated so every possible first dig keeps its 3x3 perimeter clear.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.rows, raw.cols, raw.mines)
    }
}

impl GameConfig {
    pub(crate) const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        let max = Self::max_mines(rows, cols);
        if mines > max {
            return Err(GameError::TooManyMines { max });
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    /// Largest mine count that still leaves room for the safety zone of an interior first dig.
    pub const fn max_mines(rows: Coord, cols: Coord) -> CellCount {
        let zone_rows = if rows < 3 { rows } else { 3 };
        let zone_cols = if cols < 3 { cols } else { 3 };
        mult(rows, cols) - mult(zone_rows, zone_cols)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| GameError::InvalidConfig(err.to_string()))
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    /// `(rows, cols)`
    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Number of cells that have to be uncovered to win.
    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub const fn contains(&self, (row, col): Coord2) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

/// Result of digging a single cell on a [`Minefield`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DigOutcome {
    /// The cell is a covered, unflagged mine. Nothing was changed.
    MineHit,
    /// The cell is already uncovered or flagged. Nothing was changed.
    NoOp,
    /// The cell was uncovered; carries its adjacency count.
    SafeReveal(u8),
}

impl DigOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::SafeReveal(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a move on a [`GameSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) | (_, HitMine) => HitMine,
            (Won, _) | (_, Won) => Won,
            (Revealed, _) | (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_grid() {
        assert_eq!(GameConfig::new(0, 5, 0), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(5, 0, 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_keeps_room_for_safety_zone() {
        assert!(GameConfig::new(5, 5, 16).is_ok());
        assert_eq!(
            GameConfig::new(5, 5, 17),
            Err(GameError::TooManyMines { max: 16 })
        );
    }

    #[test]
    fn narrow_grids_shrink_the_safety_zone() {
        assert_eq!(GameConfig::max_mines(1, 10), 7);
        assert_eq!(GameConfig::max_mines(2, 2), 0);
        assert_eq!(GameConfig::max_mines(1, 1), 0);
    }

    #[test]
    fn presets_are_valid() {
        for preset in [
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            let checked = GameConfig::new(preset.rows(), preset.cols(), preset.mines());
            assert_eq!(checked, Ok(preset));
        }
        assert_eq!(GameConfig::expert().safe_cells(), 381);
    }

    #[test]
    fn config_loads_from_json() {
        let config = GameConfig::from_json(r#"{"rows": 8, "cols": 12, "mines": 20}"#).unwrap();

        assert_eq!(config.size(), (8, 12));
        assert_eq!(config.mines(), 20);
    }

    #[test]
    fn json_config_is_validated() {
        let err = GameConfig::from_json(r#"{"rows": 3, "cols": 3, "mines": 1}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let err = GameConfig::from_json(r#"{"rows": 3}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let config = GameConfig::new(4, 6, 0).unwrap();

        assert_eq!(config.validate_coords((3, 5)), Ok((3, 5)));
        assert_eq!(config.validate_coords((4, 0)), Err(GameError::InvalidCoords));
        assert_eq!(config.validate_coords((0, 6)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn reveal_outcomes_combine_by_severity() {
        use RevealOutcome::*;

        assert_eq!(Revealed | HitMine, HitMine);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | Revealed, Revealed);
        assert_eq!(NoChange | NoChange, NoChange);
    }
}
