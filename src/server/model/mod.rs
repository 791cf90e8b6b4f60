//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! request DTOs with free text already sanitized, so repositories persist them as-is.

pub mod assessment;
pub mod budget;
pub mod completeness;
pub mod evidence;
pub mod indicator;
pub mod journal;
pub mod mentoring;
pub mod pdpa;
pub mod plc;
pub mod report;
pub mod school;
pub mod self_assessment;
pub mod teacher;
pub mod user;

/// Per-teacher activity for one record type.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityTally {
    pub count: u64,
    /// Most recent record date.
    pub last_date: Option<chrono::NaiveDate>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Builds a page, deriving `total_pages` as the ceiling of `total / per_page`.
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}
