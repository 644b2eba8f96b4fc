use std::io::{self, Write};

use minefield_core::{BoardView, CellView};

pub const PROMPT: &str = "Enter (row col) or (f row col) to flag/unflag:";

/// Presents board snapshots and messages to the player.
pub trait Renderer {
    fn render(&mut self, view: &BoardView) -> io::Result<()>;

    fn prompt(&mut self) -> io::Result<()> {
        self.message(PROMPT)
    }

    fn message(&mut self, text: &str) -> io::Result<()>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Ansi,
    Plain,
}

impl Palette {
    const RESET: &'static str = "\x1b[0m";

    const fn style(self, cell: CellView) -> (&'static str, &'static str) {
        use CellView::*;

        let color = match cell {
            Unknown => "\x1b[36m",
            Flagged => "\x1b[32m",
            Empty => "\x1b[34m",
            Mine | Number(_) => "\x1b[31m",
        };
        match self {
            Self::Ansi => (color, Self::RESET),
            Self::Plain => ("", ""),
        }
    }
}

/// Draws the board as text: a column header, then one `row | cells` line per row.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    palette: Palette,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn digits(value: usize) -> usize {
    value.checked_ilog10().unwrap_or(0) as usize + 1
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &BoardView) -> io::Result<()> {
        if view.size == 0 {
            return Ok(());
        }

        let last = usize::from(view.size) - 1;
        let row_width = digits(last);
        let col_width = digits(last);

        write!(self.out, "{:row_width$}  ", "")?;
        for col in 0..=last {
            write!(self.out, " {col:<col_width$}")?;
        }
        writeln!(self.out)?;

        for (row, cells) in view.rows().enumerate() {
            write!(self.out, "{row:>row_width$} |")?;
            for cell in cells {
                let (start, end) = self.palette.style(cell);
                write!(self.out, " {start}{:<col_width$}{end}", cell.symbol())?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use minefield_core::{BoardEngine, GameConfig, MineLayout};

    use super::*;

    fn render_to_string(view: &BoardView, palette: Palette) -> String {
        let mut renderer = TextRenderer::new(Vec::new(), palette);
        renderer.render(view).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn plain_board_has_headers_and_row_prefixes() {
        let layout = MineLayout::from_mine_coords(3, &[(0, 2)]).unwrap();
        let mut engine = BoardEngine::with_layout(layout);
        engine.reveal((2, 0));
        engine.toggle_flag((0, 2)).unwrap();

        let text = render_to_string(&engine.view(), Palette::Plain);

        assert_eq!(
            text,
            concat!(
                "    0 1 2\n",
                "0 | - 1 F\n",
                "1 | - 1 1\n",
                "2 | - - -\n",
            )
        );
    }

    #[test]
    fn ansi_board_styles_each_cell() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut engine = BoardEngine::with_layout(layout);
        engine.reveal((1, 1));
        engine.reveal_all();

        let text = render_to_string(&engine.view(), Palette::Ansi);

        assert!(text.contains("\x1b[31m*\x1b[0m"));
        assert!(text.contains("\x1b[36m#\x1b[0m"));
        assert!(text.contains("\x1b[31m1\x1b[0m"));
    }

    #[test]
    fn wide_boards_pad_columns() {
        let layout = MineLayout::from_mine_coords(11, &[(10, 10)]).unwrap();
        let engine = BoardEngine::with_layout(layout);

        let text = render_to_string(&engine.view(), Palette::Plain);
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("     0  1  2  3  4  5  6  7  8  9  10")
        );
        assert!(lines.next().unwrap().starts_with(" 0 | #  #"));
        assert!(lines.last().unwrap().starts_with("10 | #  #"));
    }

    #[test]
    fn empty_board_draws_nothing() {
        let engine = BoardEngine::new(GameConfig::new_unchecked(0, 0));

        assert_eq!(render_to_string(&engine.view(), Palette::Plain), "");
    }

    #[test]
    fn prompt_and_messages_are_lines() {
        let mut renderer = TextRenderer::new(Vec::new(), Palette::Plain);
        renderer.prompt().unwrap();
        renderer.message("Hurray! You win!").unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, format!("{PROMPT}\nHurray! You win!\n"));
    }
}
