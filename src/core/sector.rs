//! Proportional sector geometry and angle-based hit-testing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum number of pie sectors a dataset may carry.
pub const MAX_SECTORS: usize = 12;

/// Full circle sweep in degrees.
pub const FULL_SWEEP_DEG: f64 = 360.0;

/// One angular span of the pie, in degrees measured clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Sector {
    #[must_use]
    pub fn new(start_deg: f64, end_deg: f64) -> Self {
        Self { start_deg, end_deg }
    }

    #[must_use]
    pub fn span_deg(self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Half-open membership: the start boundary belongs to this sector, the
    /// end boundary to its successor.
    #[must_use]
    pub fn contains(self, angle_deg: f64) -> bool {
        self.start_deg <= angle_deg && angle_deg < self.end_deg
    }
}

/// Sector list sized for the 12-category maximum.
pub type SectorSet = SmallVec<[Sector; MAX_SECTORS]>;

/// Assigns contiguous angle ranges proportional to `amounts`.
///
/// For a non-zero total the first sector starts at 0 and the last sector's end
/// is force-set to exactly 360 so accumulated floating-point drift cannot open
/// a gap at the seam. A zero total yields zero-span sectors; callers treat
/// that set as degenerate and skip arc drawing.
#[must_use]
pub fn sweep(amounts: &[i64]) -> SectorSet {
    let total: i64 = amounts.iter().sum();
    let mut sectors = SectorSet::new();

    if total == 0 {
        sectors.extend(amounts.iter().map(|_| Sector::new(0.0, 0.0)));
        return sectors;
    }

    let mut cursor = 0.0;
    for &amount in amounts {
        let span = amount as f64 / total as f64 * FULL_SWEEP_DEG;
        sectors.push(Sector::new(cursor, cursor + span));
        cursor += span;
    }
    if let Some(last) = sectors.last_mut() {
        last.end_deg = FULL_SWEEP_DEG;
    }
    sectors
}

/// Resolves an angle to the sector containing it.
///
/// With contiguous half-open sectors every angle in `[0, 360)` matches at most
/// one sector; a boundary angle matches the sector that starts there.
#[must_use]
pub fn sector_at(sectors: &[Sector], angle_deg: f64) -> Option<usize> {
    sectors.iter().position(|sector| sector.contains(angle_deg))
}

/// Angle of the vector from `(center_x, center_y)` to `(x, y)`, in degrees
/// normalized to `[0, 360)`. The y axis points down, so angles grow clockwise.
#[must_use]
pub fn pointer_angle(x: f64, y: f64, center_x: f64, center_y: f64) -> f64 {
    let degrees = (y - center_y).atan2(x - center_x).to_degrees();
    if degrees < 0.0 {
        degrees + FULL_SWEEP_DEG
    } else {
        degrees
    }
}
