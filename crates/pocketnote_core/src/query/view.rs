//! Visible-set computation.
//!
//! # Responsibility
//! - Apply the AND-ed filter predicate per note.
//! - Order the result and slice out the requested page.
//!
//! # Invariants
//! - The archived and active views are disjoint; `show_archived` swaps
//!   the visible set instead of widening it.
//! - Sort order is `created_at DESC, id ASC`.
//! - `total_pages` is never below 1, even for an empty result.

use crate::model::note::Note;
use chrono::NaiveDate;

/// Notes shown per page.
pub const ITEMS_PER_PAGE: usize = 6;

/// Transient filter state supplied by the rendering collaborator.
///
/// Never persisted; reset only by explicit user action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Case-insensitive substring matched against title or content.
    pub search_term: String,
    /// Inclusive lower bound on the local creation date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the local creation date (end of day).
    pub end_date: Option<NaiveDate>,
    /// Exact category match when set.
    pub category: Option<String>,
    /// Swaps between the active view (false) and the archived view (true).
    pub show_archived: bool,
}

/// One page of the visible set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Notes on the requested page, newest first.
    pub items: Vec<&'a Note>,
    /// The 1-based page number that was requested.
    pub page: usize,
    /// Total pages for the filtered set; at least 1.
    pub total_pages: usize,
}

/// Filter predicate; all conditions are AND-ed.
pub fn matches(note: &Note, filter: &FilterOptions) -> bool {
    if note.archived != filter.show_archived {
        return false;
    }

    if !filter.search_term.is_empty() {
        let needle = filter.search_term.to_lowercase();
        if !note.title.to_lowercase().contains(&needle)
            && !note.content.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if let Some(category) = filter.category.as_deref() {
        if note.category.as_deref() != Some(category) {
            return false;
        }
    }

    // Date bounds compare local calendar dates, which is equivalent to
    // [local midnight, 23:59:59.999] instant bounds.
    let created_on = note.created_at.date_naive();
    if let Some(start) = filter.start_date {
        if created_on < start {
            return false;
        }
    }
    if let Some(end) = filter.end_date {
        if created_on > end {
            return false;
        }
    }

    true
}

/// Computes one visible page for the given criteria.
///
/// Pure read path: filters, sorts newest-first (ties broken by ascending
/// id for deterministic output), then slices the requested 1-based page.
/// An out-of-range page yields an empty item list rather than an error;
/// callers re-clamp with [`clamp_page`] when the result set shrinks.
pub fn visible<'a>(
    notes: &'a [Note],
    filter: &FilterOptions,
    page: usize,
    page_size: usize,
) -> Page<'a> {
    let page_size = page_size.max(1);

    let mut matched: Vec<&Note> = notes.iter().filter(|note| matches(note, filter)).collect();
    matched.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let total_pages = matched.len().div_ceil(page_size).max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = if page == 0 || start >= matched.len() {
        Vec::new()
    } else {
        matched[start..start.saturating_add(page_size).min(matched.len())].to_vec()
    };

    Page {
        items,
        page,
        total_pages,
    }
}

/// Re-clamps the caller's current page after the result set changed.
///
/// Pages only reset downward, never upward, and never below 1.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.min(total_pages).max(1)
}
