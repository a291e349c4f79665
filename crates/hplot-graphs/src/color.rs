//! Segment palettes and color maps

use hplot_config::SegmentColoring;
use plotters::style::RGBColor;

/// Default qualitative palette, cycled one color per drawn segment
pub const DEFAULT_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Gray
    RGBColor(188, 189, 34),  // Olive
    RGBColor(23, 190, 207),  // Cyan
];

/// nipy_spectral control points, evenly spaced over [0, 1]
const NIPY_SPECTRAL: [(f64, f64, f64); 21] = [
    (0.0, 0.0, 0.0),
    (0.4667, 0.0, 0.5333),
    (0.5333, 0.0, 0.6),
    (0.0, 0.0, 0.6667),
    (0.0, 0.0, 0.8667),
    (0.0, 0.4667, 0.8667),
    (0.0, 0.6, 0.8667),
    (0.0, 0.6667, 0.6667),
    (0.0, 0.6667, 0.5333),
    (0.0, 0.6, 0.0),
    (0.0, 0.7333, 0.0),
    (0.0, 0.8667, 0.0),
    (0.0, 1.0, 0.0),
    (0.7333, 1.0, 0.0),
    (0.9333, 0.9333, 0.0),
    (1.0, 0.8, 0.0),
    (1.0, 0.6, 0.0),
    (1.0, 0.0, 0.0),
    (0.8667, 0.0, 0.0),
    (0.8, 0.0, 0.0),
    (0.8, 0.8, 0.8),
];

/// Palette color for the `index`-th drawn element
pub fn cycle_color(index: usize) -> RGBColor {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

/// Sample the nipy_spectral color map at `t` in [0, 1]
///
/// Values outside the unit interval are clamped, NaN maps to the low end.
pub fn nipy_spectral(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let last = NIPY_SPECTRAL.len() - 1;
    let scaled = t * last as f64;
    let lower = (scaled.floor() as usize).min(last - 1);
    let frac = scaled - lower as f64;

    let (a, b) = (NIPY_SPECTRAL[lower], NIPY_SPECTRAL[lower + 1]);
    let lerp = |from: f64, to: f64| ((from + (to - from) * frac) * 255.0).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Color of segment `index` out of `count` under the given policy
pub fn segment_color(coloring: SegmentColoring, index: usize, count: usize) -> RGBColor {
    match coloring {
        SegmentColoring::Cycle => cycle_color(index),
        SegmentColoring::ColorMap => {
            let span = count.saturating_sub(1).max(1);
            nipy_spectral(index as f64 / span as f64)
        }
    }
}

/// Parse a `#RRGGBB` string
pub fn parse_color(color_str: &str) -> Option<RGBColor> {
    let hex = color_str.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
