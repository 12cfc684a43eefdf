//! Terminal rendering of a [`ProgressRing`].
//!
//! The ring is rasterized onto a square grid of cells. Each cell prints as
//! two characters so the ring stays round in a typical terminal font.

use fitring_engine::coords::Vec2;
use fitring_engine::paint::{Color, Hsl};

use crate::error::StyleError;
use crate::ring::ProgressRing;

const FULL: &str = "██";
const TRACK: &str = "░░";
const BLANK: &str = "  ";
const RESET: &str = "\x1b[0m";

/// Largest grid [`TermStyle::validate`] accepts; [`render`] clamps to it.
pub const MAX_ROWS: u16 = 200;

/// Terminal raster options.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TermStyle {
    /// Grid height in rows; the grid is `rows` cells wide.
    pub rows: u16,
    /// Emit 24-bit ANSI colour. Without it the filled arc and the track are
    /// told apart by glyph.
    pub ansi: bool,
}

impl Default for TermStyle {
    fn default() -> Self {
        Self { rows: 15, ansi: true }
    }
}

impl TermStyle {
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.rows == 0 || self.rows > MAX_ROWS {
            return Err(StyleError::Rows(self.rows));
        }
        Ok(())
    }

    /// Number of lines [`render`] produces for `ring`.
    pub fn line_count(&self, ring: &ProgressRing) -> usize {
        self.rows.clamp(1, MAX_ROWS) as usize + usize::from(ring.has_label())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Cell {
    Blank,
    Track,
    Filled,
}

/// Rasterizes the ring at `value` with stroke colour `color`.
///
/// Every line ends with `\n`; with `ansi` each coloured run is reset at the
/// end of its line.
pub fn render(ring: &ProgressRing, style: &TermStyle, value: f32, color: Hsl) -> String {
    let g = ring.geometry();
    let rows = style.rows.clamp(1, MAX_ROWS) as usize;
    let cell = g.size / rows as f32;
    // A stroke thinner than a cell would leave gaps in the raster.
    let min_half = cell * 0.6;

    let fill = fg(Color::from_hsl(color));
    let track = fg(ring.get_track_color());

    let mut out = String::with_capacity(rows * (rows * 2 + 24) + 16);
    for row in 0..rows {
        let mut current = None;
        for col in 0..rows {
            let p = Vec2::new((col as f32 + 0.5) * cell, (row as f32 + 0.5) * cell);
            let kind = if g.on_filled_arc(p, value, min_half) {
                Cell::Filled
            } else if g.in_band(p, min_half) {
                Cell::Track
            } else {
                Cell::Blank
            };

            if style.ansi {
                if kind != Cell::Blank && current != Some(kind) {
                    out.push_str(if kind == Cell::Filled { &fill } else { &track });
                    current = Some(kind);
                }
                out.push_str(if kind == Cell::Blank { BLANK } else { FULL });
            } else {
                out.push_str(match kind {
                    Cell::Blank => BLANK,
                    Cell::Track => TRACK,
                    Cell::Filled => FULL,
                });
            }
        }
        if style.ansi && current.is_some() {
            out.push_str(RESET);
        }
        out.push('\n');
    }

    if ring.has_label() {
        let text = ProgressRing::label_text(value);
        let width = rows * 2;
        let pad = width.saturating_sub(text.chars().count()) / 2;
        out.push_str(&" ".repeat(pad));
        out.push_str(&text);
        out.push('\n');
    }

    out
}

fn fg(color: Color) -> String {
    let [r, g, b, _] = color.to_srgb_u8();
    format!("\x1b[38;2;{r};{g};{b}m")
}
