#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use command::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod cell;
mod command;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Square board dimension and the number of mines hidden in it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// The classic 8x8 board with 10 mines.
    pub const STANDARD: Self = Self::new_unchecked(8, 10);

    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects empty boards and boards with no room for a safe cell, which would make
    /// mine placement spin forever.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        if mines >= mult(size, size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Layout of a `size`x`size` board without any mines.
    pub fn empty(size: Coord) -> Self {
        Self {
            mine_mask: Array2::default((size, size).to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for &coords in mine_coords {
            layout.validate_coords(coords)?;
            layout.insert(coords);
        }

        Ok(layout)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCellCoordinate)
        }
    }

    pub fn size(&self) -> Coord {
        self.mine_mask.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mines in the Moore neighborhood of `coords`, never counting the cell itself.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .fold(0, |count, _| count + 1)
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }

    /// Marks `coords` as a mine, returning `false` if it already was one.
    pub(crate) fn insert(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.mine_mask[coords.to_nd_index()];
        if *cell {
            return false;
        }
        *cell = true;
        self.mine_count += 1;
        true
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    Flagged,
    Unflagged,
}

/// Result of one accepted player command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    NoChange,
    Revealed { cells: CellCount },
    Marked(MarkOutcome),
    HitMine,
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_boards_without_safe_cells() {
        assert_eq!(GameConfig::new(8, 64), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidBoardShape));
        assert_eq!(GameConfig::new(8, 63), Ok(GameConfig::new_unchecked(8, 63)));
        assert_eq!(GameConfig::default().total_cells(), 64);
        assert_eq!(GameConfig::STANDARD.safe_cell_count(), 54);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        assert_eq!(
            MineLayout::from_mine_coords(8, &[(1, 1), (8, 0)]),
            Err(GameError::InvalidCellCoordinate)
        );
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let layout = MineLayout::from_mine_coords(4, &[(1, 1), (1, 1), (2, 3)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.mine_coords(), [(1, 1), (2, 3)]);
    }

    #[test]
    fn adjacent_count_does_not_include_the_cell_itself() {
        let layout = MineLayout::from_mine_coords(3, &[(1, 1)]).unwrap();

        assert_eq!(layout.adjacent_mine_count((1, 1)), 0);
        assert_eq!(layout.adjacent_mine_count((0, 0)), 1);
    }

    #[test]
    fn adjacent_count_respects_board_edges() {
        let mines = [(0, 1), (1, 0), (1, 1), (7, 7)];
        let layout = MineLayout::from_mine_coords(8, &mines).unwrap();

        assert_eq!(layout.adjacent_mine_count((0, 0)), 3);
        assert_eq!(layout.adjacent_mine_count((6, 6)), 1);
        assert_eq!(layout.adjacent_mine_count((4, 4)), 0);
    }
}
