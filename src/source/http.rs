//! Calendar pages over HTTP

use std::time::Instant;

use crate::consts::DEFAULT_URL_TEMPLATE;
use crate::error::AppError;
use crate::utils::parse_debug_enabled;

use super::DocumentSource;

const USER_AGENT: &str = concat!("relcal/", env!("CARGO_PKG_VERSION"));

pub(crate) struct HttpSource {
    template: String,
}

impl HttpSource {
    pub(crate) fn new() -> Self {
        HttpSource {
            template: DEFAULT_URL_TEMPLATE.to_string(),
        }
    }

    pub(crate) fn with_template(template: &str) -> Result<Self, AppError> {
        if !template.contains("{month}") {
            return Err(AppError::InvalidTemplate {
                input: template.to_string(),
            });
        }
        Ok(HttpSource {
            template: template.to_string(),
        })
    }

    pub(crate) fn url_for(&self, month: &str, year: i32) -> String {
        self.template
            .replace("{month}", month)
            .replace("{year}", &year.to_string())
    }
}

impl DocumentSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch(&self, month: &str, year: i32) -> Result<String, AppError> {
        let url = self.url_for(month, year);
        let start = Instant::now();
        let fetch_err = |e: ureq::Error| AppError::Fetch {
            target: url.clone(),
            message: e.to_string(),
        };

        let response = ureq::get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(fetch_err)?;
        let body = response.into_body().read_to_string().map_err(fetch_err)?;

        if parse_debug_enabled() {
            eprintln!(
                "[DEBUG] fetched {} ({} bytes, {:.2}ms)",
                url,
                body.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
        Ok(body)
    }
}
