//! SVG rendering of a [`ProgressRing`].
//!
//! Output mirrors the web dashboard's markup: a track circle plus a progress
//! circle whose dash offset hides the unfilled part, rotated so the arc
//! starts at 12 o'clock.

use std::fmt::Write;

use fitring_engine::paint::Hsl;

use crate::ring::ProgressRing;

/// Label font size relative to the ring size.
const LABEL_SCALE: f32 = 0.2;

/// CSS transition on the progress circle, so a browser eases between
/// successive documents the way the dashboard does.
pub const PROGRESS_TRANSITION: &str =
    "transition: stroke-dashoffset 1s cubic-bezier(0.25, 1, 0.5, 1), stroke 1s linear";

pub fn render(ring: &ProgressRing, value: f32, color: Hsl) -> String {
    let g = ring.geometry();
    let size = num(g.size);
    let c = num(g.center.x);
    let r = num(g.radius);
    let stroke = num(g.stroke_width);

    let label_size = g.size * LABEL_SCALE;
    let height = if ring.has_label() { g.size + label_size * 1.5 } else { g.size };

    let mut out = String::with_capacity(512);

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{h}" viewBox="0 0 {size} {h}">"#,
        h = num(height),
    );
    let _ = writeln!(
        out,
        r#"  <circle cx="{c}" cy="{c}" r="{r}" stroke="{track}" stroke-width="{stroke}" fill="none"/>"#,
        track = ring.get_track_color().to_hex(),
    );
    let _ = writeln!(
        out,
        r#"  <circle cx="{c}" cy="{c}" r="{r}" stroke="{color}" stroke-width="{stroke}" fill="none" stroke-dasharray="{dash}" stroke-dashoffset="{offset}" stroke-linecap="round" transform="rotate(-90 {c} {c})" style="{PROGRESS_TRANSITION}"/>"#,
        dash = num(g.circumference()),
        offset = num(g.dash_offset(value)),
    );

    if ring.has_label() {
        let _ = writeln!(
            out,
            r#"  <text x="{c}" y="{y}" text-anchor="middle" dominant-baseline="central" font-size="{fs}" fill="{fill}">{text}</text>"#,
            y = num(g.size + label_size * 0.75),
            fs = num(label_size),
            fill = ring.get_label_color().to_hex(),
            text = ProgressRing::label_text(value),
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Formats with at most three decimals, dropping trailing zeros.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitring_engine::paint::color_for;

    fn svg(ring: &ProgressRing, value: f32) -> String {
        ring.svg_for(value, color_for(value))
    }

    #[test]
    fn num_trims() {
        assert_eq!(num(100.0), "100");
        assert_eq!(num(596.9026), "596.903");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn default_ring_markup() {
        let out = svg(&ProgressRing::new(), 50.0);
        assert!(out.starts_with("<svg "));
        assert!(out.contains(r#"width="200" height="200""#));
        assert!(out.contains(
            r##"<circle cx="100" cy="100" r="95" stroke="#eeeeee" stroke-width="10" fill="none"/>"##
        ));
        assert!(out.contains(r#"stroke="hsl(55, 85%, 50%)""#));
        assert!(out.contains(r#"stroke-dasharray="596.903""#));
        assert!(out.contains(r#"stroke-linecap="round""#));
        assert!(out.contains(r#"transform="rotate(-90 100 100)""#));
        assert!(out.trim_end().ends_with("</svg>"));
        assert!(!out.contains("<text"));
    }

    #[test]
    fn progress_circle_carries_transition() {
        let out = svg(&ProgressRing::new(), 30.0);
        let progress = out.lines().find(|l| l.contains("stroke-dashoffset")).unwrap();
        assert!(progress.contains(
            r#"style="transition: stroke-dashoffset 1s cubic-bezier(0.25, 1, 0.5, 1), stroke 1s linear""#
        ));
        assert_eq!(out.matches("transition:").count(), 1);
    }

    #[test]
    fn offset_tracks_value() {
        let ring = ProgressRing::new();
        assert!(svg(&ring, 100.0).contains(r#"stroke-dashoffset="0""#));
        assert!(svg(&ring, 0.0).contains(r#"stroke-dashoffset="596.903""#));
    }

    #[test]
    fn label_extends_canvas() {
        let out = svg(&ProgressRing::new().show_label(true), 79.6);
        assert!(out.contains(r#"height="260""#));
        assert!(out.contains(">80%</text>"));
        assert!(out.contains(r##"fill="#333333""##));
    }
}
