use thiserror::Error;

pub const DEFAULT_PAGE_NUMBER: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Request parameters recognized by the listing and unified-search routes,
/// extracted from the raw, ordered query string pairs. Anything that is not
/// a recognized parameter shape is dropped here; unknown *filter fields*
/// survive into `filters` and are ignored later by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// `filter[field]=value` pairs in request order, field name unwrapped.
    pub filters: Vec<(String, String)>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub model: Option<String>,
    pub page_number: usize,
    pub page_size: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Invalid {0} parameter: expected a positive integer")]
    InvalidPage(&'static str),
}

impl QueryOptions {
    pub fn from_params(params: &[(String, String)]) -> Result<Self, OptionsError> {
        let mut options = QueryOptions {
            filters: Vec::new(),
            search: None,
            sort: None,
            model: None,
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        };

        for (key, value) in params {
            match key.as_str() {
                "search" => options.search = Some(value.clone()),
                "sort" => options.sort = Some(value.clone()),
                "model" => options.model = Some(value.clone()),
                "page[number]" => {
                    options.page_number = value
                        .parse()
                        .map_err(|_| OptionsError::InvalidPage("page[number]"))?;
                }
                "page[size]" => {
                    options.page_size = value
                        .parse()
                        .ok()
                        .filter(|size| *size >= 1)
                        .ok_or(OptionsError::InvalidPage("page[size]"))?;
                }
                _ => {
                    if let Some(field) = filter_field(key) {
                        options.filters.push((field.to_string(), value.clone()));
                    }
                }
            }
        }

        Ok(options)
    }

    /// The search phrase, trimmed; `None` when absent or blank.
    pub fn search_phrase(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Unwraps `filter[field]` into `field`.
fn filter_field(key: &str) -> Option<&str> {
    key.strip_prefix("filter[")?.strip_suffix(']')
}
