//! Calendar pages saved to a local directory as `<month>.html`

use std::fs;
use std::path::PathBuf;

use crate::error::AppError;
use crate::utils::parse_debug_enabled;

use super::DocumentSource;

pub(crate) struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub(crate) fn new(root: PathBuf) -> Self {
        DirSource { root }
    }

    pub(crate) fn path_for(&self, month: &str) -> PathBuf {
        self.root.join(format!("{month}.html"))
    }
}

impl DocumentSource for DirSource {
    fn name(&self) -> &'static str {
        "dir"
    }

    fn fetch(&self, month: &str, _year: i32) -> Result<String, AppError> {
        let path = self.path_for(month);
        let body = fs::read_to_string(&path).map_err(|e| AppError::Fetch {
            target: path.display().to_string(),
            message: e.to_string(),
        })?;
        if parse_debug_enabled() {
            eprintln!("[DEBUG] read {} ({} bytes)", path.display(), body.len());
        }
        Ok(body)
    }
}
