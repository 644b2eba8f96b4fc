use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of everything a renderer is allowed to see.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub state: EngineState,
    pub mines_left: isize,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_engine(engine: &BoardEngine) -> Self {
        let size = engine.size();
        let cells = Array2::from_shape_fn((size, size).to_nd_index(), |(row, col)| {
            engine.cell_view((row as Coord, col as Coord))
        });

        Self {
            size,
            state: engine.state(),
            mines_left: engine.mines_left(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    /// Iterates rows top to bottom, each as a left-to-right run of cells.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn from_engine_maps_revealed_and_flagged_cells() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut engine = BoardEngine::with_layout(layout);

        engine.reveal((1, 1));
        engine.toggle_flag((0, 0)).unwrap();

        let view = engine.view();

        assert_eq!(view.mines_left, 0);
        assert_eq!(view.cell((1, 1)), CellView::Number(1));
        assert_eq!(view.cell((0, 0)), CellView::Flagged);
        assert_eq!(view.cell((0, 1)), CellView::Unknown);
    }

    #[test]
    fn rows_follow_row_major_order() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 1)]).unwrap();
        let mut engine = BoardEngine::with_layout(layout);
        engine.reveal((1, 0));

        let rows: Vec<Vec<char>> = engine
            .view()
            .rows()
            .map(|row| row.map(CellView::symbol).collect())
            .collect();

        assert_eq!(rows, [['#', '#'], ['1', '#']]);
    }

    #[test]
    fn serializes_for_external_renderers() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut engine = BoardEngine::with_layout(layout);
        engine.reveal((1, 1));

        let json = serde_json::to_value(engine.view()).unwrap();

        assert_eq!(json["size"], 2);
        assert_eq!(json["state"], "Playing");
        assert_eq!(json["cells"]["dim"], serde_json::json!([2, 2]));
        assert_eq!(json["cells"]["data"][3], serde_json::json!({ "Number": 1 }));
    }
}
