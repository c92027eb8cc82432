//! Drill-down line chart dataset and derived grid/point geometry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{DailyPoint, Viewport};

/// Amount represented by one horizontal grid division.
pub const DIVISION_PRICE: i64 = 500;

/// Day-bucketed spending of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDataset {
    pub category: String,
    pub points: Vec<DailyPoint>,
}

impl LineDataset {
    #[must_use]
    pub fn new(category: impl Into<String>, points: Vec<DailyPoint>) -> Self {
        Self {
            category: category.into(),
            points,
        }
    }
}

/// Horizontal grid derived from the dataset maximum: line count, pixel step,
/// and descending amount labels from the top line down. The zero baseline is
/// drawn and labeled separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub line_count: u32,
    pub step_px: u32,
    pub labels: Vec<String>,
}

impl GridSpec {
    fn empty() -> Self {
        Self {
            line_count: 0,
            step_px: 0,
            labels: Vec::new(),
        }
    }
}

/// One dataset point projected into pixel space, with its date label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Derived line chart state for one viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineModel {
    dataset: LineDataset,
    viewport: Viewport,
    max_value: i64,
    grid: GridSpec,
    points: Vec<PlottedPoint>,
    point_width: f64,
}

impl LineModel {
    /// Projects the dataset into grid and point geometry for `viewport`.
    ///
    /// The scale ceiling is the dataset maximum plus a tenth (integer
    /// arithmetic). An empty or non-positive dataset produces a neutral
    /// model: no grid, no points, only the zero baseline is drawn.
    #[must_use]
    pub fn build(dataset: LineDataset, viewport: Viewport) -> Self {
        let max = dataset.points.iter().map(|point| point.amount).max();
        let Some(max) = max.filter(|&max| max > 0) else {
            debug!(
                category = %dataset.category,
                points = dataset.points.len(),
                "neutral line model, no drawable points"
            );
            return Self {
                dataset,
                viewport,
                max_value: 0,
                grid: GridSpec::empty(),
                points: Vec::new(),
                point_width: 0.0,
            };
        };

        let max_value = max + max / 10;
        let line_count = u32::try_from(max_value / DIVISION_PRICE + 1).unwrap_or(u32::MAX);
        let labels = (0..line_count)
            .map(|index| {
                (i64::from(line_count) * DIVISION_PRICE - DIVISION_PRICE * i64::from(index))
                    .to_string()
            })
            .collect();
        let grid = GridSpec {
            line_count,
            step_px: viewport.height / line_count,
            labels,
        };

        let height = f64::from(viewport.height);
        let point_width = f64::from(viewport.width) / dataset.points.len() as f64;
        let points = dataset
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| PlottedPoint {
                x: index as f64 * point_width + point_width / 2.0,
                y: height - point.amount as f64 / max_value as f64 * height,
                label: point.day.label(),
            })
            .collect();

        Self {
            dataset,
            viewport,
            max_value,
            grid,
            points,
            point_width,
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &LineDataset {
        &self.dataset
    }

    #[must_use]
    pub fn into_dataset(self) -> LineDataset {
        self.dataset
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    #[must_use]
    pub fn points(&self) -> &[PlottedPoint] {
        &self.points
    }

    /// Horizontal slot width of one point, in pixels.
    #[must_use]
    pub fn point_width(&self) -> f64 {
        self.point_width
    }
}
