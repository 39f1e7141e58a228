//! Document source abstraction layer
//!
//! A source hands back the raw markup of one month's release calendar.
//! The pipeline never cares where the page came from.

pub(crate) mod dir;
pub(crate) mod http;

use std::path::PathBuf;

use crate::error::AppError;

pub(crate) use dir::DirSource;
pub(crate) use http::HttpSource;

/// Document source trait - implemented per transport
pub(crate) trait DocumentSource {
    /// Short name used in debug output
    fn name(&self) -> &'static str;

    /// Fetch the calendar page for `month` (lowercase full name) of `year`
    fn fetch(&self, month: &str, year: i32) -> Result<String, AppError>;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedSource = Box<dyn DocumentSource>;

/// Pick the source for this run: a local page directory wins over HTTP
pub(crate) fn select_source(
    source_dir: Option<PathBuf>,
    url_template: Option<&str>,
) -> Result<BoxedSource, AppError> {
    if let Some(dir) = source_dir {
        return Ok(Box::new(DirSource::new(dir)));
    }
    let source = match url_template {
        Some(template) => HttpSource::with_template(template)?,
        None => HttpSource::new(),
    };
    Ok(Box::new(source))
}
