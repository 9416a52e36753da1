use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Decides where mines go once the first dig is known.
pub trait MineGenerator {
    /// Returns the mine positions in placement order.
    fn generate(&mut self, config: GameConfig, start: Coord2) -> Vec<Coord2>;
}
