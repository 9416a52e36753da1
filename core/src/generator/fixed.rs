use super::*;

/// Hands out a predetermined layout, for replaying known boards and forcing mines in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: Vec<Coord2>) -> Self {
        Self { mines }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, config: GameConfig, start: Coord2) -> Vec<Coord2> {
        if self.mines.len() != usize::from(config.mines()) {
            log::warn!(
                "Fixed layout has {} mines but the config asks for {}",
                self.mines.len(),
                config.mines()
            );
        }
        if self
            .mines
            .iter()
            .any(|&pos| !is_outside_perimeter(start, pos))
        {
            log::warn!("Fixed layout puts a mine next to the first dig at {:?}", start);
        }
        self.mines.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn returns_layout_unchanged() {
        let config = GameConfig::new(5, 5, 2).unwrap();
        let mut generator = FixedMineGenerator::new(vec![(4, 4), (0, 4)]);

        assert_eq!(generator.generate(config, (0, 0)), [(4, 4), (0, 4)]);
    }
}
