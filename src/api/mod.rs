mod line_chart;
mod pie_chart;
mod snapshot;
mod style;

pub use line_chart::LineChart;
pub use pie_chart::{PieChart, SelectionListener};
pub use snapshot::{LineChartSnapshot, PieChartSnapshot};
pub use style::{GradientPair, LineStyle, Palette, PieStyle, month_name};
