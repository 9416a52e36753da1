use super::*;

/// Uniform placement outside the first dig's 3x3 perimeter.
///
/// Every draw picks uniformly among the eligible cells still free and removes the pick from the pool, so the layout
/// depends on the draw order and is fully determined by the seed, the config and the start cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: GameConfig, start: Coord2) -> Vec<Coord2> {
        use rand::prelude::*;

        let (rows, cols) = config.size();
        let mut eligible: Vec<usize> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&coords| is_outside_perimeter(start, coords))
            .map(|coords| flat_index(coords, cols))
            .collect();

        let mines = usize::from(config.mines());
        assert!(
            mines <= eligible.len(),
            "cannot place {} mines around {:?}, only {} cells are eligible",
            mines,
            start,
            eligible.len()
        );

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let placed: Vec<Coord2> = (0..mines)
            .map(|_| {
                let pick = rng.random_range(0..eligible.len());
                from_flat_index(eligible.remove(pick), cols)
            })
            .collect();

        log::debug!(
            "Placed {} mines around start {:?} with seed {}",
            placed.len(),
            start,
            self.seed
        );
        placed
    }
}
