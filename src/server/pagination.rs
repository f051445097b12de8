use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: i64 = 10;

/// `?page=N`, 1-indexed, defaulting to the first page.
#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn bounds(&self) -> (i64, i64) {
        page_bounds(self.page.unwrap_or(1))
    }
}

/// SQL (limit, offset) for a 1-indexed page number. Page 0 is treated as
/// page 1 rather than wrapping.
pub fn page_bounds(page: u32) -> (i64, i64) {
    let offset = i64::from(page.saturating_sub(1)) * QUESTIONS_PER_PAGE;
    (QUESTIONS_PER_PAGE, offset)
}
