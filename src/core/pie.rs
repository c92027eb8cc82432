//! Pie chart dataset and derived sector geometry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::sector::{self, MAX_SECTORS, SectorSet};
use crate::core::types::CategoryTotal;
use crate::error::{ChartError, ChartResult};

/// One month of categorized spending, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieDataset {
    /// Month index, 0 = January.
    pub month: u8,
    pub currency_symbol: String,
    pub values: Vec<CategoryTotal>,
}

impl PieDataset {
    #[must_use]
    pub fn new(month: u8, currency_symbol: impl Into<String>, values: Vec<CategoryTotal>) -> Self {
        Self {
            month,
            currency_symbol: currency_symbol.into(),
            values,
        }
    }
}

/// Derived pie state: values sorted ascending by amount, their sum, and the
/// sector angle ranges in sorted order.
///
/// The ascending sort makes the largest sectors adjacent at the end of the
/// sweep. Equal amounts keep their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieModel {
    dataset: PieDataset,
    total: i64,
    sectors: SectorSet,
}

impl PieModel {
    /// Builds the derived geometry, rejecting oversized datasets.
    pub fn build(mut dataset: PieDataset) -> ChartResult<Self> {
        if dataset.values.len() > MAX_SECTORS {
            return Err(ChartError::InvalidDatasetSize {
                count: dataset.values.len(),
                max: MAX_SECTORS,
            });
        }

        dataset.values.sort_by_key(|value| value.amount);
        let total: i64 = dataset.values.iter().map(|value| value.amount).sum();
        if total == 0 && !dataset.values.is_empty() {
            debug!(
                values = dataset.values.len(),
                "zero-sum dataset, arcs will be skipped"
            );
        }

        let amounts: Vec<i64> = dataset.values.iter().map(|value| value.amount).collect();
        let sectors = sector::sweep(&amounts);

        Ok(Self {
            dataset,
            total,
            sectors,
        })
    }

    #[must_use]
    pub fn dataset(&self) -> &PieDataset {
        &self.dataset
    }

    #[must_use]
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Sector angle ranges, index-aligned with the sorted dataset values.
    #[must_use]
    pub fn sectors(&self) -> &[sector::Sector] {
        &self.sectors
    }

    /// A zero-sum model has no drawable arcs.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<&CategoryTotal> {
        self.dataset.values.get(index)
    }
}
