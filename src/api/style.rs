//! Injected chart configuration: palette, month names, and draw styles.

use crate::core::sector::MAX_SECTORS;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// English month names for the pie subtitle, 0 = January.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month name for a 0-based month index; indexes wrap modulo 12.
#[must_use]
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[usize::from(month) % MONTH_NAMES.len()]
}

/// Gradient endpoint pair for one palette slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPair {
    pub from: Color,
    pub to: Color,
}

impl GradientPair {
    #[must_use]
    pub fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }
}

/// Sector color palette, validated to cover the maximum sector count.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    slots: Vec<GradientPair>,
}

impl Palette {
    /// Builds a palette, requiring at least one slot per supported sector.
    pub fn new(slots: Vec<GradientPair>) -> ChartResult<Self> {
        if slots.len() < MAX_SECTORS {
            return Err(ChartError::InvalidConfig(format!(
                "palette must provide at least {MAX_SECTORS} gradient pairs, got {}",
                slots.len()
            )));
        }
        for slot in &slots {
            slot.from.validate()?;
            slot.to.validate()?;
        }
        Ok(Self { slots })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot for a sector position; positions wrap modulo the palette length.
    #[must_use]
    pub fn slot(&self, position: usize) -> GradientPair {
        self.slots[position % self.slots.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        let pair = |from, to| GradientPair::new(Color::from_hex(from), Color::from_hex(to));
        Self {
            slots: vec![
                pair(0x36D1DC, 0xD8B5FF),
                pair(0xFFCE00, 0xA6E088),
                pair(0xFFBFCB, 0xFFF647),
                pair(0xF7B733, 0xFF6A00),
                pair(0xFC5E39, 0xF00000),
                pair(0xFF758C, 0xC973FF),
                pair(0x7F00FF, 0x134E5E),
                pair(0x7F55F9, 0x3ED4D9),
                pair(0x87D300, 0x4DCF9F),
                pair(0xF7FD04, 0xFFA751),
                pair(0xFF6A84, 0xFE881E),
                pair(0xEC0404, 0x1C1B1B),
            ],
        }
    }
}

/// Draw style for the pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieStyle {
    /// Inset from the measured square to the drawn disc.
    pub padding_px: f64,
    pub background: Color,
    pub header_color: Color,
    pub subtitle_color: Color,
    /// Translucent overlay painted over the selected sector.
    pub highlight: Color,
    /// Divisor of the disc size giving the center hole radius.
    pub hole_divisor: f64,
    /// Prefix of the subtitle; the month name is appended.
    pub subtitle_label: String,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            padding_px: 0.0,
            background: Color::rgb(1.0, 1.0, 1.0),
            header_color: Color::rgb(0.0, 0.0, 0.0),
            subtitle_color: Color::from_hex(0x444444),
            highlight: Color::from_hex(0x43F527).with_alpha(140.0 / 255.0),
            hole_divisor: 2.7,
            subtitle_label: "Spent in".to_owned(),
        }
    }
}

/// Draw style for the drill-down line chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub stroke: Color,
    pub stroke_width: f64,
    /// Join rounding radius of the spend path.
    pub corner_radius: f64,
    /// Radius of the marker dot drawn at each vertex.
    pub dot_radius: f64,
    pub legend_color: Color,
    pub legend_font_px: f64,
    pub legend_stroke_width: f64,
    pub dash_on_px: f64,
    pub dash_off_px: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0.0, 0.0, 1.0),
            stroke_width: 10.0,
            corner_radius: 30.0,
            dot_radius: 30.0,
            legend_color: Color::from_hex(0x444444),
            legend_font_px: 30.0,
            legend_stroke_width: 1.0,
            dash_on_px: 5.0,
            dash_off_px: 10.0,
        }
    }
}
