//! Serializable chart state for transient-destruction survival.
//!
//! A snapshot carries the validated dataset, every piece of derived geometry,
//! and (for the pie) the current selection. `restore` replays the cached
//! geometry verbatim instead of recomputing it from the dataset, so a restored
//! chart renders pixel-identical output. Selection listeners are not part of a
//! snapshot and must be re-attached by the host after restore.

use serde::{Deserialize, Serialize};

use crate::core::line::LineModel;
use crate::core::pie::PieModel;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartSnapshot {
    pub viewport: Viewport,
    pub model: Option<PieModel>,
    pub selected: Option<usize>,
}

impl PieChartSnapshot {
    /// Serializes the snapshot as pretty JSON for host-side persistence.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ChartError::InvalidData(format!("failed to deserialize snapshot: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartSnapshot {
    pub viewport: Viewport,
    pub model: Option<LineModel>,
}

impl LineChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ChartError::InvalidData(format!("failed to deserialize snapshot: {e}")))
    }
}
