use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Nothing has been dug yet, mines are not placed.
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game played on a [`Minefield`], tracking whether it is won or lost.
///
/// Unlike the minefield itself, a session validates coordinates and refuses moves once the game is over.
#[derive(Clone, Debug)]
pub struct GameSession<L = NoopListener, G = RandomMineGenerator> {
    minefield: Minefield<L, G>,
    state: SessionState,
    triggered_mine: Option<Coord2>,
}

impl<L: RevealListener> GameSession<L> {
    pub fn new(config: GameConfig, seed: u64, listener: L) -> Self {
        Self::from_minefield(Minefield::new(config, seed, listener))
    }
}

impl<L: RevealListener, G: MineGenerator> GameSession<L, G> {
    pub fn from_minefield(minefield: Minefield<L, G>) -> Self {
        let state = if minefield.uncovered_count() > 0 {
            SessionState::Active
        } else {
            SessionState::Ready
        };
        Self {
            minefield,
            state,
            triggered_mine: None,
        }
    }

    pub fn dig(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.minefield.config().validate_coords(coords)?;
        self.check_not_finished()?;

        Ok(self.dig_single_cell(coords))
    }

    /// Digs every neighbor of an uncovered number whose flags already account for all its mines.
    ///
    /// Stops at the first mine hit, a wrong flag makes the chord lose the game.
    pub fn chord(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.minefield.config().validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.can_chord_at(coords) {
            return Ok(RevealOutcome::NoChange);
        }

        let mut outcome = RevealOutcome::NoChange;
        for pos in Neighbors::new(coords, self.minefield.size()) {
            outcome = outcome | self.dig_single_cell(pos);
            if self.state.is_finished() {
                break;
            }
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.minefield.config().validate_coords(coords)?;
        self.check_not_finished()?;

        Ok(self.minefield.toggle_flag(coords))
    }

    fn dig_single_cell(&mut self, coords: Coord2) -> RevealOutcome {
        match self.minefield.dig(coords) {
            DigOutcome::MineHit => {
                log::debug!("Mine hit at {:?}", coords);
                self.triggered_mine = Some(coords);
                self.end_game(false);
                RevealOutcome::HitMine
            }
            DigOutcome::NoOp => RevealOutcome::NoChange,
            DigOutcome::SafeReveal(_) => {
                if self.minefield.uncovered_count() == self.minefield.safe_cell_count() {
                    self.end_game(true);
                    RevealOutcome::Won
                } else {
                    self.mark_started();
                    RevealOutcome::Revealed
                }
            }
        }
    }
}

impl<L, G> GameSession<L, G> {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mines not yet accounted for by a flag, negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.minefield.config().mines()) - i32::from(self.minefield.flag_count())
    }

    pub fn can_chord_at(&self, coords: Coord2) -> bool {
        if self.state.is_finished() || !self.minefield.is_uncovered(coords) {
            return false;
        }
        match self.minefield.adjacent_mines_count(coords) {
            LayoutCell::Count(count) if count > 0 => {
                count == self.minefield.count_adjacent_flags(coords)
            }
            _ => false,
        }
    }

    pub fn minefield(&self) -> &Minefield<L, G> {
        &self.minefield
    }

    pub fn into_minefield(self) -> Minefield<L, G> {
        self.minefield
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = SessionState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
        log::debug!("Game over, state: {:?}", self.state);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
