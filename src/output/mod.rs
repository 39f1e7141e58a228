mod csv;
mod format;
mod html;
mod json;
mod table;

pub(crate) use csv::output_album_csv;
pub(crate) use html::output_album_html;
pub(crate) use json::{output_album_json, output_window_json};
pub(crate) use table::{AlbumTableOptions, render_album_table, render_window_table, summary_line};
