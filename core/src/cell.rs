use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell, independent of whether it holds a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellVisibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

impl CellVisibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Unknown,
    Flagged,
    Mine,
    Empty,
    Number(u8),
}

impl CellView {
    /// Display value of a revealed safe cell with `adjacent_mines` around it.
    pub const fn from_count(adjacent_mines: u8) -> Self {
        match adjacent_mines {
            0 => Self::Empty,
            count => Self::Number(count),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Unknown => '#',
            Self::Flagged => 'F',
            Self::Mine => '*',
            Self::Empty => '-',
            Self::Number(count) => match char::from_digit(count as u32, 10) {
                Some(digit) => digit,
                None => '?',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_board_legend() {
        assert_eq!(CellView::Unknown.symbol(), '#');
        assert_eq!(CellView::Flagged.symbol(), 'F');
        assert_eq!(CellView::Mine.symbol(), '*');
        assert_eq!(CellView::from_count(0).symbol(), '-');
        assert_eq!(CellView::from_count(3).symbol(), '3');
    }
}
