use alloc::collections::VecDeque;
use ndarray::Array2;

use crate::*;

/// The minefield engine: hidden layout, per-cell player state and the counters derived from them.
///
/// Mines are placed lazily by the first dig on a covered cell, so that dig and its 3x3 perimeter are always safe.
/// Coordinates are `(row, col)` and must be inside the grid; indexed operations panic otherwise.
#[derive(Clone, Debug)]
pub struct Minefield<L = NoopListener, G = RandomMineGenerator> {
    config: GameConfig,
    layout: Array2<LayoutCell>,
    state: Array2<CellState>,
    generated: bool,
    flag_count: CellCount,
    correct_flag_count: CellCount,
    uncovered_count: CellCount,
    generator: G,
    listener: L,
}

impl<L: RevealListener> Minefield<L> {
    pub fn new(config: GameConfig, seed: u64, listener: L) -> Self {
        Self::with_generator(config, RandomMineGenerator::new(seed), listener)
    }
}

impl<L: RevealListener, G: MineGenerator> Minefield<L, G> {
    pub fn with_generator(config: GameConfig, generator: G, listener: L) -> Self {
        let size = config.size().to_nd_index();
        Self {
            config,
            layout: Array2::default(size),
            state: Array2::default(size),
            generated: false,
            flag_count: 0,
            correct_flag_count: 0,
            uncovered_count: 0,
            generator,
            listener,
        }
    }

    /// Places the mines keeping the 3x3 block around `start` clear.
    ///
    /// Called by the first [`dig`](Self::dig); calling it again once mines exist does nothing.
    ///
    /// Panics if `start` is outside the grid, or if the generator does not hand out exactly
    /// [`GameConfig::mines`] distinct cells.
    pub fn generate(&mut self, start: Coord2) {
        assert!(
            self.config.contains(start),
            "first dig at {:?} is outside the {:?} grid",
            start,
            self.config.size()
        );
        if self.generated {
            log::warn!("Minefield already generated, ignoring new start {:?}", start);
            return;
        }

        let mut placed: CellCount = 0;
        for pos in self.generator.generate(self.config, start) {
            let cell = &mut self.layout[pos.to_nd_index()];
            if !cell.is_mine() {
                *cell = LayoutCell::Mine;
                placed += 1;
            }
        }
        assert_eq!(
            placed,
            self.config.mines(),
            "generator placed {} distinct mines, the config asks for {}",
            placed,
            self.config.mines()
        );
        self.generated = true;

        // flags placed before generation could not know what they cover
        self.correct_flag_count = self
            .state
            .iter()
            .zip(self.layout.iter())
            .filter(|&(state, cell)| state.is_flagged() && cell.is_mine())
            .count() as CellCount;

        log::debug!(
            "Generated {}x{} minefield with {} mines, first dig at {:?}",
            self.config.rows(),
            self.config.cols(),
            self.config.mines(),
            start
        );
    }

    /// Digs a single cell, cascading through zero-count regions.
    pub fn dig(&mut self, coords: Coord2) -> DigOutcome {
        let cell_state = self.state[coords.to_nd_index()];
        if cell_state.is_covered() && !self.generated {
            self.generate(coords);
        }

        match (cell_state, self.layout[coords.to_nd_index()]) {
            (CellState::Covered, LayoutCell::Mine) => DigOutcome::MineHit,
            (CellState::Covered, _) => DigOutcome::SafeReveal(self.reveal(coords)),
            _ => DigOutcome::NoOp,
        }
    }

    fn reveal(&mut self, coords: Coord2) -> u8 {
        let adjacent_mines = self.uncover(coords);
        log::debug!("Dug cell at {:?}, mine count: {}", coords, adjacent_mines);

        if adjacent_mines == 0 {
            let mut to_visit: VecDeque<Coord2> = self.covered_neighbors(coords).collect();
            log::trace!(
                "Starting cascade from {:?}, initial neighbors: {:?}",
                coords,
                to_visit
            );

            while let Some(visit_coords) = to_visit.pop_front() {
                // queued twice, or flagged in the meantime
                if !self.state[visit_coords.to_nd_index()].is_covered() {
                    continue;
                }

                let visit_adjacent_mines = self.uncover(visit_coords);
                log::trace!(
                    "Cascade uncovered {:?}, mine count: {}",
                    visit_coords,
                    visit_adjacent_mines
                );
                if visit_adjacent_mines == 0 {
                    to_visit.extend(self.covered_neighbors(visit_coords));
                }
            }
        }

        adjacent_mines
    }

    fn uncover(&mut self, coords: Coord2) -> u8 {
        let index = coords.to_nd_index();
        debug_assert!(!self.layout[index].is_mine(), "mine at {coords:?} uncovered");

        let adjacent_mines = self.count_adjacent_mines(coords);
        self.layout[index] = LayoutCell::Count(adjacent_mines);
        self.state[index] = CellState::Uncovered;
        self.uncovered_count += 1;
        self.listener.on_cell_revealed(coords, adjacent_mines);
        adjacent_mines
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.layout
            .neighbors(coords)
            .filter(|&pos| self.layout[pos.to_nd_index()].is_mine())
            .count() as u8
    }

    fn covered_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> {
        self.state
            .neighbors(coords)
            .filter(|&pos| self.state[pos.to_nd_index()].is_covered())
    }

    pub fn flag(&mut self, coords: Coord2) -> MarkOutcome {
        let index = coords.to_nd_index();
        if !self.state[index].is_covered() {
            return MarkOutcome::NoChange;
        }

        self.state[index] = CellState::Flagged;
        self.flag_count += 1;
        if self.layout[index].is_mine() {
            self.correct_flag_count += 1;
        }
        MarkOutcome::Changed
    }

    pub fn unflag(&mut self, coords: Coord2) -> MarkOutcome {
        let index = coords.to_nd_index();
        if !self.state[index].is_flagged() {
            return MarkOutcome::NoChange;
        }

        self.state[index] = CellState::Covered;
        self.flag_count -= 1;
        if self.layout[index].is_mine() {
            self.correct_flag_count -= 1;
        }
        MarkOutcome::Changed
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_flagged(coords) {
            self.unflag(coords)
        } else {
            self.flag(coords)
        }
    }
}

impl<L, G> Minefield<L, G> {
    /// Number of flagged cells among the up-to-8 neighbors of `coords`.
    pub fn count_adjacent_flags(&self, coords: Coord2) -> u8 {
        self.state
            .neighbors(coords)
            .filter(|&pos| self.state[pos.to_nd_index()].is_flagged())
            .count() as u8
    }

    pub fn cell_state(&self, coords: Coord2) -> CellState {
        self.state[coords.to_nd_index()]
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.cell_state(coords).is_flagged()
    }

    pub fn is_uncovered(&self, coords: Coord2) -> bool {
        self.cell_state(coords).is_uncovered()
    }

    /// Raw layout value; the count is only meaningful once the cell has been dug.
    pub fn adjacent_mines_count(&self, coords: Coord2) -> LayoutCell {
        self.layout[coords.to_nd_index()]
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.layout[coords.to_nd_index()].is_mine()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Flags that sit on actual mines.
    pub fn correct_flag_count(&self) -> CellCount {
        self.correct_flag_count
    }

    pub fn uncovered_count(&self) -> CellCount {
        self.uncovered_count
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}
