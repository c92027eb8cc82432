//! Single-selection toggle state machine for the pie chart.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::sector::{self, Sector};
use crate::core::types::Viewport;

/// Result of one processed tap: where the selection moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTransition {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

/// Selection state driven by pointer taps.
///
/// Tapping a sector selects it; tapping the selected sector again clears the
/// selection. At most one sector is selected at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMachine {
    selected: Option<usize>,
}

impl SelectionMachine {
    #[must_use]
    pub fn selected(self) -> Option<usize> {
        self.selected
    }

    pub fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Processes a tap at view coordinates against the current geometry.
    ///
    /// Hit-testing depends only on the tap angle relative to the viewport
    /// center, not its radius: a tap at any distance inside a sector's angular
    /// span selects it. Returns `None` when no sector matches (degenerate
    /// geometry), leaving the selection unchanged.
    pub fn tap_at(
        &mut self,
        x: f64,
        y: f64,
        viewport: Viewport,
        sectors: &[Sector],
    ) -> Option<SelectionTransition> {
        let center_x = f64::from(viewport.width) / 2.0;
        let center_y = f64::from(viewport.height) / 2.0;
        let angle = sector::pointer_angle(x, y, center_x, center_y);
        let hit = sector::sector_at(sectors, angle)?;

        let previous = self.selected;
        self.selected = if previous == Some(hit) { None } else { Some(hit) };
        trace!(
            angle,
            hit,
            previous = ?previous,
            current = ?self.selected,
            "tap resolved"
        );
        Some(SelectionTransition {
            previous,
            current: self.selected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sector::sweep;

    #[test]
    fn tapping_selected_sector_again_deselects() {
        let sectors = sweep(&[100, 400]);
        let viewport = Viewport::new(100, 100);
        let mut machine = SelectionMachine::default();

        // Straight right of center, angle 0: first sector.
        let first = machine
            .tap_at(90.0, 50.0, viewport, &sectors)
            .expect("tap should hit");
        assert_eq!(first.current, Some(0));

        let second = machine
            .tap_at(90.0, 50.0, viewport, &sectors)
            .expect("tap should hit");
        assert_eq!(second.previous, Some(0));
        assert_eq!(second.current, None);
    }

    #[test]
    fn tap_radius_does_not_matter() {
        let sectors = sweep(&[100, 400]);
        let viewport = Viewport::new(100, 100);
        let mut machine = SelectionMachine::default();

        // Far outside the disc, still within the first sector's angular span.
        let transition = machine
            .tap_at(5_000.0, 50.0, viewport, &sectors)
            .expect("tap should hit");
        assert_eq!(transition.current, Some(0));
    }

    #[test]
    fn degenerate_geometry_ignores_taps() {
        let sectors = sweep(&[0, 0]);
        let viewport = Viewport::new(100, 100);
        let mut machine = SelectionMachine::default();

        assert!(machine.tap_at(90.0, 50.0, viewport, &sectors).is_none());
        assert_eq!(machine.selected(), None);
    }
}
