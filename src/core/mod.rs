pub mod aggregate;
pub mod line;
pub mod pie;
pub mod sector;
pub mod types;

pub use line::{GridSpec, LineDataset, LineModel, PlottedPoint};
pub use pie::{PieDataset, PieModel};
pub use sector::{MAX_SECTORS, Sector, SectorSet};
pub use types::{CategoryTotal, DailyPoint, DayKey, SpendPoint, SpendRecord, Viewport};
