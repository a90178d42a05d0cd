//! Parrot/neon theme tokens for the FundLab dashboard
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (primary highlights, focus)
//! - **Positive**: Neon green (selected, success)
//! - **Negative**: Hot pink (outliers, errors)
//! - **Warning**: Neon orange (alerts, medians)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (disabled, secondary text)
//!
//! Funds are coloured from a fixed cycle so a fund keeps its colour across
//! every chart. The heatmap uses a diverging cool-to-warm scale.

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Per-fund series colours, cycled by fund position in the universe.
const FUND_PALETTE: [Color; 8] = [
    ACCENT,
    WARNING,
    POSITIVE,
    NEGATIVE,
    NEUTRAL,
    Color::Rgb(255, 255, 102),
    MUTED,
    Color::Rgb(255, 160, 122),
];

// Diverging scale endpoints (cool blue → light grey → warm red).
const COOL: (u8, u8, u8) = (59, 76, 192);
const MID: (u8, u8, u8) = (221, 221, 221);
const WARM: (u8, u8, u8) = (180, 4, 38);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Colour for the fund at `index` in the universe.
pub fn fund_color(index: usize) -> Color {
    FUND_PALETTE[index % FUND_PALETTE.len()]
}

/// Colour for `fund`, looked up by its position in `universe`.
pub fn fund_color_by_name(universe: &[String], fund: &str) -> Color {
    let idx = universe.iter().position(|f| f == fund).unwrap_or(0);
    fund_color(idx)
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
}

fn blend(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> Color {
    Color::Rgb(lerp(a.0, b.0, t), lerp(a.1, b.1, t), lerp(a.2, b.2, t))
}

/// Heatmap cell colour for a normalized value in `[0, 1]`.
pub fn heat_color(t: f64) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    if t < 0.5 {
        blend(COOL, MID, t * 2.0)
    } else {
        blend(MID, WARM, (t - 0.5) * 2.0)
    }
}

/// Readable annotation colour on top of a heatmap cell.
pub fn heat_text_color(t: f64) -> Color {
    if (0.2..=0.8).contains(&t) {
        Color::Black
    } else {
        TEXT_PRIMARY
    }
}
