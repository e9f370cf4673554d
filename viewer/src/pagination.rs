//! Page-number math shared by the engine and the listing.

/// Records per page, fixed for the life of the process.
pub const PAGE_SIZE: u64 = 250;

/// The (skip, limit) slice of the ordered record set a page covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub skip: u64,
    pub limit: u64,
}

impl PageWindow {
    pub fn for_page(page_number: i64) -> Self {
        let page = normalize_page(page_number);
        Self {
            page,
            skip: skip_for(page),
            limit: PAGE_SIZE,
        }
    }
}

/// Pages below 1 are treated as page 1.
pub fn normalize_page(page_number: i64) -> u64 {
    page_number.max(1) as u64
}

/// Offset of the first record on a (normalized) page.
pub fn skip_for(page: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(PAGE_SIZE)
}

/// Number of pages needed for `total_records`; zero records is zero pages.
pub fn total_pages(total_records: u64) -> u64 {
    let mut pages = total_records / PAGE_SIZE;
    if total_records % PAGE_SIZE != 0 {
        pages += 1;
    }
    pages
}

/// Page numbers to link to, `1..=total_pages`.
pub fn build_links(total_pages: u64) -> Vec<u64> {
    (1..=total_pages).collect()
}
