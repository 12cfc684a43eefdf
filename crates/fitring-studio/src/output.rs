use std::io::{self, Write};

use fitring_engine::anim::ProgressFrame;
use fitring_engine::paint::Color;
use fitring_ui::{term, ProgressRing, TermStyle};
use serde::Serialize;

/// What the studio writes for each presented frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Redraw the ring in place on every frame.
    Term,
    /// Write the final frame as an SVG document.
    Svg,
    /// One JSON object per frame.
    Json,
}

#[derive(Debug, Serialize)]
struct JsonFrame {
    frame: u64,
    elapsed_ms: f64,
    value: f32,
    hsl: String,
    hex: String,
    done: bool,
}

/// Frame sink backing the studio's output formats.
///
/// Write errors are latched: the first one stops further output and is
/// reported by [`finish`](Self::finish).
pub struct Output<W: Write> {
    format: Format,
    ring: ProgressRing,
    term: TermStyle,
    writer: W,
    /// Move the cursor back over the previous terminal frame before drawing.
    rewind: bool,
    drawn_lines: usize,
    frames: u64,
    last: Option<ProgressFrame>,
    error: Option<io::Error>,
}

impl<W: Write> Output<W> {
    pub fn new(format: Format, ring: ProgressRing, term: TermStyle, writer: W, rewind: bool) -> Self {
        Self {
            format,
            ring,
            term,
            writer,
            rewind,
            drawn_lines: 0,
            frames: 0,
            last: None,
            error: None,
        }
    }

    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn present(&mut self, frame: ProgressFrame) {
        if self.error.is_some() {
            return;
        }

        let res = match self.format {
            Format::Term => self.draw_term(&frame),
            Format::Json => self.write_json(&frame),
            Format::Svg => Ok(()),
        };

        self.frames += 1;
        self.last = Some(frame);

        if let Err(err) = res {
            log::error!("output failed after {} frame(s): {err}", self.frames);
            self.error = Some(err);
        }
    }

    /// Writes any trailing output and flushes.
    ///
    /// Returns the number of frames presented.
    pub fn finish(&mut self) -> io::Result<u64> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        if self.format == Format::Svg {
            match self.last {
                Some(frame) => self.writer.write_all(self.ring.to_svg(&frame).as_bytes())?,
                None => log::warn!("animation produced no frames; nothing to write"),
            }
        }

        self.writer.flush()?;
        Ok(self.frames)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn draw_term(&mut self, frame: &ProgressFrame) -> io::Result<()> {
        if self.rewind && self.drawn_lines > 0 {
            write!(self.writer, "\x1b[{}A", self.drawn_lines)?;
        }

        let text = term::render(&self.ring, &self.term, frame.value, frame.color);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;

        self.drawn_lines = self.term.line_count(&self.ring);
        Ok(())
    }

    fn write_json(&mut self, frame: &ProgressFrame) -> io::Result<()> {
        let record = JsonFrame {
            frame: self.frames,
            elapsed_ms: frame.elapsed.as_micros() as f64 / 1000.0,
            value: frame.value,
            hsl: frame.color.to_string(),
            hex: Color::from_hsl(frame.color).to_hex(),
            done: frame.done,
        };

        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn frame(value: f32, elapsed_ms: u64, done: bool) -> ProgressFrame {
        ProgressFrame::new(value, Duration::from_millis(elapsed_ms), done)
    }

    fn output(format: Format, rewind: bool) -> Output<Vec<u8>> {
        let term = TermStyle { rows: 5, ansi: false };
        Output::new(format, ProgressRing::new(), term, Vec::new(), rewind)
    }

    fn text(out: Output<Vec<u8>>) -> String {
        String::from_utf8(out.into_inner()).unwrap()
    }

    // ── json ──────────────────────────────────────────────────────────────

    #[test]
    fn json_line_per_frame() {
        let mut out = output(Format::Json, false);
        out.present(frame(0.0, 0, false));
        out.present(frame(50.0, 400, true));
        assert_eq!(out.finish().unwrap(), 2);

        let s = text(out);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 2);

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["frame"], 1);
        assert_eq!(last["elapsed_ms"], 400.0);
        assert_eq!(last["value"], 50.0);
        assert_eq!(last["hsl"], "hsl(55, 85%, 50%)");
        assert_eq!(last["done"], true);
        assert!(last["hex"].as_str().unwrap().starts_with('#'));
    }

    // ── svg ───────────────────────────────────────────────────────────────

    #[test]
    fn svg_writes_only_final_frame() {
        let mut out = output(Format::Svg, false);
        out.present(frame(0.0, 0, false));
        out.present(frame(100.0, 1500, true));
        out.finish().unwrap();

        let s = text(out);
        assert_eq!(s.matches("<svg").count(), 1);
        assert!(s.contains(r#"stroke-dashoffset="0""#));
    }

    #[test]
    fn svg_without_frames_writes_nothing() {
        let mut out = output(Format::Svg, false);
        assert_eq!(out.finish().unwrap(), 0);
        assert!(text(out).is_empty());
    }

    // ── term ──────────────────────────────────────────────────────────────

    #[test]
    fn term_rewinds_between_frames() {
        let mut out = output(Format::Term, true);
        out.present(frame(10.0, 0, false));
        out.present(frame(20.0, 16, false));
        out.finish().unwrap();

        let s = text(out);
        assert_eq!(s.matches("\x1b[5A").count(), 1);
        assert!(!s.starts_with('\x1b'));
    }

    #[test]
    fn term_without_rewind_appends() {
        let mut out = output(Format::Term, false);
        out.present(frame(10.0, 0, false));
        out.present(frame(20.0, 16, false));
        out.finish().unwrap();

        let s = text(out);
        assert!(!s.contains("\x1b["));
        assert_eq!(s.lines().count(), 10);
    }

    // ── errors ────────────────────────────────────────────────────────────

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_error_is_latched_and_reported() {
        let mut out = Output::new(Format::Json, ProgressRing::new(), TermStyle::default(), Broken, false);
        out.present(frame(10.0, 0, false));
        assert!(out.failed());
        out.present(frame(20.0, 16, false));
        assert_eq!(out.frames(), 1);

        let err = out.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
