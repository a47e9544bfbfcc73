//! Terminal rendering of a sky: one star per letter over decorative dots.

use crossterm::style::{Color, Stylize};
use rand::Rng;

use crate::letter::{Emotion, Letter, Position};

pub const DEFAULT_WIDTH: usize = 64;
pub const DEFAULT_HEIGHT: usize = 20;
pub const BACKGROUND_DOTS: usize = 40;

const STAR: char = '✦';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Dot(char),
    /// Index into the letter slice, so legends can refer back to it.
    Star(usize, Emotion),
}

#[derive(Debug, Clone, Copy)]
pub struct SkyOptions {
    pub width: usize,
    pub height: usize,
    pub dots: usize,
    pub color: bool,
}

impl Default for SkyOptions {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, dots: BACKGROUND_DOTS, color: true }
    }
}

/// Map percent coordinates onto a `width × height` grid.
pub fn cell_for(pos: Position, width: usize, height: usize) -> (usize, usize) {
    let col = usize::from(pos.x.min(100)) * width.saturating_sub(1) / 100;
    let row = usize::from(pos.y.min(100)) * height.saturating_sub(1) / 100;
    (col, row)
}

pub struct Sky<'a> {
    title: String,
    letters: &'a [Letter],
    opts: SkyOptions,
}

impl<'a> Sky<'a> {
    pub fn new(title: impl Into<String>, letters: &'a [Letter], opts: SkyOptions) -> Self {
        Self { title: title.into(), letters, opts }
    }

    /// Lay out dots then stars. Stars overwrite dots, later letters overwrite
    /// earlier ones in the same cell.
    pub fn grid<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Vec<Cell>> {
        let SkyOptions { width, height, dots, .. } = self.opts;
        let mut grid = vec![vec![Cell::Empty; width]; height];
        if width == 0 || height == 0 {
            return grid;
        }

        for _ in 0..dots {
            let col = rng.gen_range(0..width);
            let row = rng.gen_range(0..height);
            let glyph = if rng.gen_bool(0.3) { '·' } else { '.' };
            grid[row][col] = Cell::Dot(glyph);
        }

        for (i, letter) in self.letters.iter().enumerate() {
            let (col, row) = cell_for(letter.position(), width, height);
            grid[row][col] = Cell::Star(i, letter.mood());
        }
        grid
    }

    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let grid = self.grid(rng);
        let width = self.opts.width;
        let border = "─".repeat(width);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&format!("┌{border}┐\n"));
        for row in &grid {
            out.push('│');
            for cell in row {
                out.push_str(&self.paint(*cell));
            }
            out.push_str("│\n");
        }
        out.push_str(&format!("└{border}┘\n"));
        out.push_str(&footer(self.letters.len()));
        out.push('\n');
        out
    }

    /// One line per star: number, coordinates, time and a preview.
    pub fn legend(&self) -> Vec<String> {
        self.letters
            .iter()
            .enumerate()
            .map(|(i, l)| {
                format!(
                    "{} #{:<3} ({:>2},{:>2})  {}  {}",
                    self.paint(Cell::Star(i, l.mood())),
                    i + 1,
                    l.x,
                    l.y,
                    l.created_label(),
                    l.preview(32)
                )
            })
            .collect()
    }

    fn paint(&self, cell: Cell) -> String {
        match (cell, self.opts.color) {
            (Cell::Empty, _) => " ".to_string(),
            (Cell::Dot(c), false) => c.to_string(),
            (Cell::Dot(c), true) => c.dark_grey().to_string(),
            (Cell::Star(..), false) => STAR.to_string(),
            (Cell::Star(_, mood), true) => {
                let (r, g, b) = mood.rgb();
                STAR.with(Color::Rgb { r, g, b }).bold().to_string()
            }
        }
    }
}

pub fn recipient_title(label: &str, count: usize) -> String {
    format!("{label}에게 보내는 밤하늘 · 총 {count}개의 별")
}

pub fn solo_title() -> String {
    "Unsent Words in the Sky".to_string()
}

pub fn footer(count: usize) -> String {
    match count {
        1 => "1 star has been created in this sky.".to_string(),
        n => format!("{n} stars have been created in this sky."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letter_at(x: u8, y: u8, emotion: Option<Emotion>) -> Letter {
        Letter {
            id: format!("{x}-{y}"),
            to: None,
            slug: None,
            body: "별".into(),
            emotion,
            created_at: 0,
            x,
            y,
        }
    }

    fn plain(width: usize, height: usize) -> SkyOptions {
        SkyOptions { width, height, dots: 0, color: false }
    }

    #[test]
    fn test_cell_for_scales_percent() {
        assert_eq!(cell_for(Position { x: 0, y: 0 }, 101, 11), (0, 0));
        assert_eq!(cell_for(Position { x: 50, y: 50 }, 101, 11), (50, 5));
        assert_eq!(cell_for(Position { x: 100, y: 100 }, 101, 11), (100, 10));
    }

    #[test]
    fn test_stars_land_on_grid() {
        let letters = vec![letter_at(10, 10, None), letter_at(90, 80, Some(Emotion::Sad))];
        let sky = Sky::new("t", &letters, plain(101, 101));
        let grid = sky.grid(&mut StdRng::seed_from_u64(0));
        assert_eq!(grid[10][10], Cell::Star(0, Emotion::Happy));
        assert_eq!(grid[80][90], Cell::Star(1, Emotion::Sad));
    }

    #[test]
    fn test_later_star_wins_shared_cell() {
        let letters = vec![letter_at(50, 50, Some(Emotion::Calm)), letter_at(50, 50, Some(Emotion::Angry))];
        let sky = Sky::new("t", &letters, plain(11, 11));
        let grid = sky.grid(&mut StdRng::seed_from_u64(0));
        assert_eq!(grid[5][5], Cell::Star(1, Emotion::Angry));
    }

    #[test]
    fn test_render_without_color_has_no_escape_codes() {
        let letters = vec![letter_at(20, 20, Some(Emotion::Happy))];
        let opts = SkyOptions { color: false, ..SkyOptions::default() };
        let out = Sky::new("title", &letters, opts).render(&mut StdRng::seed_from_u64(3));
        assert!(!out.contains('\u{1b}'));
        assert!(out.contains(STAR));
        assert!(out.starts_with("title\n"));
        assert!(out.trim_end().ends_with("1 star has been created in this sky."));
        // title + top border + rows + bottom border + footer
        assert_eq!(out.lines().count(), DEFAULT_HEIGHT + 4);
    }

    #[test]
    fn test_background_dots_never_exceed_count() {
        let sky = Sky::new("t", &[], SkyOptions { dots: 40, color: false, ..SkyOptions::default() });
        let grid = sky.grid(&mut StdRng::seed_from_u64(9));
        let dots = grid.iter().flatten().filter(|c| matches!(c, Cell::Dot(_))).count();
        assert!(dots > 0 && dots <= 40);
    }

    #[test]
    fn test_recipient_title() {
        assert_eq!(recipient_title("엄마", 2), "엄마에게 보내는 밤하늘 · 총 2개의 별");
    }
}
