use serde::Serialize;

/// Navigation links for a paginated envelope. `self` stays the bare route
/// path; the page links carry explicit `page[number]`/`page[size]` params.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// The 1-based page slice of `items`, clamped to bounds. Out-of-range pages
/// yield an empty slice, not an error.
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let start = start.min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn build_links(route: &str, page_number: usize, page_size: usize, total_pages: usize) -> Links {
    Links {
        self_link: route.to_string(),
        first: page_link(route, 1, page_size),
        last: page_link(route, total_pages, page_size),
        prev: (page_number > 1).then(|| page_link(route, page_number - 1, page_size)),
        next: (page_number < total_pages).then(|| page_link(route, page_number + 1, page_size)),
    }
}

fn page_link(route: &str, page_number: usize, page_size: usize) -> String {
    format!("{route}?page[number]={page_number}&page[size]={page_size}")
}
