pub(crate) mod builder;
pub(crate) mod extract;
pub(crate) mod records;
pub(crate) mod types;
pub(crate) mod window;

pub(crate) use builder::build_table;
pub(crate) use types::{AlbumRecord, AlbumTable, DateWindow, DayAlbums, MonthGroup};
pub(crate) use window::{compute_window, split_by_month};
