use alloc::vec;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Board initialized, mines not placed yet.
    #[default]
    Ready,
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns one game session: the hidden mine layout plus everything the player has uncovered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    config: GameConfig,
    mine_layout: MineLayout,
    visibility: Array2<CellVisibility>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: EngineState,
    mines_exposed: bool,
    triggered_mine: Option<Coord2>,
}

impl BoardEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            mine_layout: MineLayout::empty(config.size),
            visibility: Array2::default((config.size, config.size).to_nd_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            state: EngineState::Ready,
            mines_exposed: false,
            triggered_mine: None,
        }
    }

    /// Starts a session on a known layout, skipping random placement.
    pub fn with_layout(mine_layout: MineLayout) -> Self {
        let mut engine = Self::new(mine_layout.game_config());
        engine.start(mine_layout);
        engine
    }

    /// Resets every cell to hidden and clears the mines.
    pub fn initialize(&mut self, config: GameConfig) {
        *self = Self::new(config);
    }

    /// Randomly places the configured number of mines and starts the session.
    ///
    /// The layout is fixed for the rest of the session, so this only works on a fresh board.
    pub fn place_mines<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.check_ready()?;
        let layout = sample_layout(self.config, rng);
        self.start(layout);
        Ok(())
    }

    /// Starts the session with a layout from any generator.
    pub fn place_mines_with<G: LayoutGenerator>(&mut self, generator: G) -> Result<()> {
        self.check_ready()?;
        let layout = generator.generate(self.config);
        self.start(layout);
        Ok(())
    }

    fn start(&mut self, mine_layout: MineLayout) {
        debug_assert_eq!(mine_layout.size(), self.config.size);
        self.config = mine_layout.game_config();
        self.mine_layout = mine_layout;
        self.state = EngineState::Playing;
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.mine_layout.mine_coords()
    }

    pub fn visibility_at(&self, coords: Coord2) -> CellVisibility {
        self.visibility[coords.to_nd_index()]
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        let has_mine = self.mine_layout.contains_mine(coords);
        if self.mines_exposed && has_mine {
            return CellView::Mine;
        }

        match self.visibility_at(coords) {
            CellVisibility::Hidden => CellView::Unknown,
            CellVisibility::Flagged => CellView::Flagged,
            CellVisibility::Revealed if has_mine => CellView::Mine,
            CellVisibility::Revealed => {
                CellView::from_count(self.mine_layout.adjacent_mine_count(coords))
            }
        }
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(self)
    }

    pub fn is_valid_cell(&self, row: i64, col: i64) -> bool {
        narrow_coords(row, col, self.config.size).is_some()
    }

    pub fn checked_coords(&self, row: i64, col: i64) -> Result<Coord2> {
        narrow_coords(row, col, self.config.size).ok_or(GameError::InvalidCellCoordinate)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_layout.adjacent_mine_count(coords)
    }

    /// A flagged mine cannot be hit.
    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords) && !self.visibility_at(coords).is_flagged()
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellVisibility::*;

        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_playing()?;
        let cell = &mut self.visibility[coords.to_nd_index()];

        let outcome = match *cell {
            Hidden => {
                *cell = Flagged;
                self.flagged_count += 1;
                MarkOutcome::Flagged
            }
            Flagged => {
                *cell = Hidden;
                self.flagged_count -= 1;
                MarkOutcome::Unflagged
            }
            Revealed => return Err(GameError::CellNotFlaggable),
        };

        log::debug!("flag {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Flood-reveals from `coords` and returns how many cells were newly revealed.
    ///
    /// Out-of-bounds, revealed and flagged cells are left alone, including flagged cells
    /// reached by the cascade. Nothing is revealed outside of `Playing`. Callers must not aim
    /// this at a mine.
    pub fn reveal(&mut self, coords: Coord2) -> CellCount {
        if !self.state.is_playing() || self.mine_layout.validate_coords(coords).is_err() {
            return 0;
        }

        let mut revealed = 0;
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.visibility[visit_coords.to_nd_index()];
            if *cell != CellVisibility::Hidden {
                continue;
            }
            *cell = CellVisibility::Revealed;
            revealed += 1;

            if self.mine_layout.adjacent_mine_count(visit_coords) == 0 {
                log::trace!("expanding zero cell {:?}", visit_coords);
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| self.visibility[pos.to_nd_index()] == CellVisibility::Hidden),
                );
            }
        }

        self.revealed_count += revealed;
        revealed
    }

    /// Shows every mine, flagged or not. Non-mine cells keep their visibility.
    pub fn reveal_all(&mut self) {
        self.mines_exposed = true;
    }

    pub fn check_win(&self) -> bool {
        self.mine_layout
            .mine_mask()
            .iter()
            .zip(self.visibility.iter())
            .all(|(&is_mine, visibility)| is_mine || visibility.is_revealed())
    }

    /// Applies one player command and advances the session state machine.
    ///
    /// Rejected commands never change any state.
    pub fn play(&mut self, command: Command) -> Result<TurnOutcome> {
        self.check_playing()?;
        let (row, col) = command.target();
        let coords = self.checked_coords(row, col)?;

        match command {
            Command::ToggleFlag { .. } => self.toggle_flag(coords).map(TurnOutcome::Marked),
            Command::Reveal { .. } if self.is_mine(coords) => {
                log::debug!("mine hit at {:?}", coords);
                self.triggered_mine = Some(coords);
                self.reveal_all();
                self.state = EngineState::Lost;
                Ok(TurnOutcome::HitMine)
            }
            Command::Reveal { .. } => {
                let cells = self.reveal(coords);
                log::debug!("reveal {:?}: {} new cells", coords, cells);

                if cells == 0 {
                    Ok(TurnOutcome::NoChange)
                } else if self.check_win() {
                    self.state = EngineState::Won;
                    Ok(TurnOutcome::Won)
                } else {
                    Ok(TurnOutcome::Revealed { cells })
                }
            }
        }
    }

    fn check_playing(&self) -> Result<()> {
        match self.state {
            state if state.is_playing() => Ok(()),
            EngineState::Ready => Err(GameError::NotStarted),
            _ => Err(GameError::AlreadyEnded),
        }
    }

    fn check_ready(&self) -> Result<()> {
        match self.state {
            EngineState::Ready => Ok(()),
            EngineState::Playing => Err(GameError::AlreadyStarted),
            EngineState::Won | EngineState::Lost => Err(GameError::AlreadyEnded),
        }
    }
}
