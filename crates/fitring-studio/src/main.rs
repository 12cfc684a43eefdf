//! fitring studio: animates a fit-score progress ring outside the browser.
//!
//! Drives a `ProgressAnimation` on a real frame loop and writes the result
//! to the terminal, as SVG, or as JSON frames.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use fitring_engine::anim::{AnimationConfig, FrameQueue, ProgressAnimation, ProgressFrame};
use fitring_engine::logging::{init_logging, LoggingConfig};
use fitring_engine::time::{FrameClock, FrameTime};
use fitring_ui::{ProgressRing, TermStyle};

mod output;

use output::{Format, Output};

#[derive(Debug, Parser)]
#[command(name = "fitring-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Animate a fit-score progress ring", long_about = None)]
struct Cli {
    /// Fit score to animate towards (0-100; out-of-range values are clamped)
    #[arg(short, long, allow_negative_numbers = true)]
    progress: f32,

    /// Animation length in milliseconds (0 shows the score immediately)
    #[arg(short, long, default_value_t = 1500)]
    duration_ms: u64,

    /// Show the score without animating
    #[arg(long)]
    no_animate: bool,

    /// Frames per second for the render loop
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Run on synthetic frame timestamps instead of the wall clock
    #[arg(long)]
    simulate: bool,

    /// Ring size in logical pixels
    #[arg(long, default_value_t = 200.0)]
    size: f32,

    /// Stroke thickness in logical pixels
    #[arg(long, default_value_t = 10.0)]
    stroke_width: f32,

    /// Terminal raster height in rows
    #[arg(long, default_value_t = 15)]
    rows: u16,

    /// Show the percentage under the ring
    #[arg(long)]
    label: bool,

    /// Disable ANSI colour in terminal output
    #[arg(long)]
    no_color: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Term)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn ring(&self) -> ProgressRing {
        ProgressRing::new()
            .size(self.size)
            .stroke_width(self.stroke_width)
            .show_label(self.label)
    }

    fn term_style(&self) -> TermStyle {
        TermStyle { rows: self.rows, ansi: !self.no_color }
    }

    fn animation(&self) -> AnimationConfig {
        AnimationConfig::default()
            .duration_ms(self.duration_ms)
            .animate_on_load(!self.no_animate)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::default().verbose(cli.verbose));

    let ring = cli.ring();
    ring.validate().context("invalid ring style")?;
    let term = cli.term_style();
    term.validate().context("invalid terminal style")?;

    log::debug!("{cli:?}");

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    let rewind = cli.output.is_none() && io::stdout().is_terminal();

    let output = Rc::new(RefCell::new(Output::new(cli.format, ring, term, writer, rewind)));
    let frames = run(&cli, Rc::clone(&output))?;

    let written = output.borrow_mut().finish().context("failed to write output")?;
    log::info!("presented {written} frame(s) over {frames} loop iteration(s)");

    if let Some(path) = &cli.output {
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

/// Runs the frame loop until the animation settles.
///
/// Returns the number of loop iterations.
fn run<W: Write + 'static>(cli: &Cli, output: Rc<RefCell<Output<W>>>) -> Result<u64> {
    let queue = Rc::new(FrameQueue::new());
    let mut clock = FrameClock::new(cli.fps);

    let sink = {
        let output = Rc::clone(&output);
        move |frame: ProgressFrame| output.borrow_mut().present(frame)
    };
    let anim = ProgressAnimation::start(&queue, cli.progress, cli.animation(), sink);

    log::info!(
        "animating to {:.1} over {} ms ({} fps{})",
        anim.target(),
        cli.duration_ms,
        cli.fps,
        if cli.simulate { ", simulated" } else { "" }
    );

    let mut sim_now = cli.simulate.then(Instant::now);
    let mut iterations = 0u64;

    while !queue.is_idle() {
        let ft = next_frame(&mut clock, sim_now.as_mut());
        queue.run_frame(ft.now);
        iterations += 1;

        if output.borrow().failed() {
            anim.cancel();
            break;
        }

        if !cli.simulate {
            std::thread::sleep(clock.remaining_budget());
        }
    }

    Ok(iterations)
}

/// Ticks `clock` on the wall clock, or on the synthetic timeline at `sim_now`
/// which then moves one frame budget ahead.
fn next_frame(clock: &mut FrameClock, sim_now: Option<&mut Instant>) -> FrameTime {
    match sim_now {
        Some(at) => {
            let ft = clock.tick_at(*at);
            *at += clock.frame_budget();
            ft
        }
        None => clock.tick(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["fitring-studio"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_dashboard_component() {
        let cli = parse(&["--progress", "80"]);
        assert_eq!(cli.animation(), AnimationConfig::default());
        assert_eq!(cli.ring(), ProgressRing::new());
        assert_eq!(cli.format, Format::Term);
    }

    #[test]
    fn flags_map_to_configs() {
        let cli = parse(&[
            "-p", "-5", "--duration-ms", "0", "--no-animate", "--size", "120",
            "--stroke-width", "8", "--label", "--no-color", "--format", "json",
        ]);
        assert_eq!(cli.progress, -5.0);
        assert!(cli.animation().is_immediate());
        assert!(!cli.term_style().ansi);
        assert!(cli.ring().has_label());
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn progress_is_required() {
        assert!(Cli::try_parse_from(["fitring-studio"]).is_err());
    }

    #[test]
    fn simulated_run_reaches_target() {
        let cli = parse(&["-p", "80", "-d", "100", "--fps", "50", "--simulate", "-f", "json"]);
        let output = Rc::new(RefCell::new(Output::new(
            cli.format,
            cli.ring(),
            cli.term_style(),
            Vec::new(),
            false,
        )));

        let iterations = run(&cli, Rc::clone(&output)).unwrap();
        // Ticks at 0, 20, ..., 100 ms.
        assert_eq!(iterations, 6);

        let mut out = Rc::try_unwrap(output).ok().unwrap().into_inner();
        assert_eq!(out.finish().unwrap(), 6);

        let s = String::from_utf8(out.into_inner()).unwrap();
        let last: serde_json::Value = serde_json::from_str(s.lines().last().unwrap()).unwrap();
        assert_eq!(last["value"], 80.0);
        assert_eq!(last["done"], true);
    }

    #[test]
    fn simulated_time_advances_one_budget_per_frame() {
        let mut clock = FrameClock::new(50);
        let origin = Instant::now();
        let mut at = origin;

        let stamps: Vec<Instant> = (0..3).map(|_| next_frame(&mut clock, Some(&mut at)).now).collect();
        assert_eq!(stamps, vec![origin, origin + Duration::from_millis(20), origin + Duration::from_millis(40)]);
    }

    #[test]
    fn simulated_time_keeps_advancing_past_u32_frames() {
        let mut clock = FrameClock::new(1000);
        let far = Instant::now() + clock.frame_budget() * u32::MAX;
        let mut at = far;

        let a = next_frame(&mut clock, Some(&mut at)).now;
        let b = next_frame(&mut clock, Some(&mut at)).now;
        assert_eq!(a, far);
        assert_eq!(b, far + Duration::from_millis(1));
    }

    #[test]
    fn immediate_run_needs_no_loop() {
        let cli = parse(&["-p", "42", "--no-animate", "--simulate", "-f", "svg"]);
        let output = Rc::new(RefCell::new(Output::new(
            cli.format,
            cli.ring(),
            cli.term_style(),
            Vec::new(),
            false,
        )));

        assert_eq!(run(&cli, Rc::clone(&output)).unwrap(), 0);
        assert_eq!(output.borrow_mut().finish().unwrap(), 1);
    }
}
