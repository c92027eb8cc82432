//! spend-charts: charting engine for categorized spending.
//!
//! This crate provides a Rust-idiomatic API and a strict architectural split
//! between chart math (`core`), selection handling (`interaction`),
//! backend-agnostic drawing (`render`), and the embeddable chart components
//! (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChart, LineStyle, Palette, PieChart, PieStyle};
pub use error::{ChartError, ChartResult};
