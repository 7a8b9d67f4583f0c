//! Pure derivation of the visible page from the full post list.
//!
//! Pipeline: search filter → title sort → page slice. Nothing here touches
//! [`super::ViewState`]; callers pass the inputs explicitly.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::Post;

/// Number of cards rendered per page.
pub const PAGE_SIZE: usize = 6;

/// Title sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort by Title (A-Z)",
            SortOrder::Descending => "Sort by Title (Z-A)",
        }
    }
}

/// Result of [`derive_view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    /// Posts on the requested page, in display order.
    pub visible_items: Vec<&'a Post>,
    /// `ceil(total_matches / PAGE_SIZE)`; zero when nothing matches.
    pub page_count: usize,
    /// Number of posts passing the search filter.
    pub total_matches: usize,
}

/// Derive the visible page for the given inputs.
///
/// `page` is 1-based. A page of zero, or one past the end, yields no items.
pub fn derive_view<'a>(
    items: &'a [Post],
    search_term: &str,
    sort_order: SortOrder,
    page: usize,
) -> DerivedView<'a> {
    let filtered = filter_and_sort(items, search_term, sort_order);
    let total_matches = filtered.len();
    let visible_items = page_slice(&filtered, page).to_vec();

    DerivedView {
        visible_items,
        page_count: page_count(total_matches),
        total_matches,
    }
}

/// Posts whose title contains `search_term` (case-insensitive), ordered by
/// title. Always starts from the full `items` list.
pub fn filter_and_sort<'a>(
    items: &'a [Post],
    search_term: &str,
    sort_order: SortOrder,
) -> Vec<&'a Post> {
    let needle = search_term.to_lowercase();
    let mut filtered: Vec<&Post> = items
        .iter()
        .filter(|post| title_matches(&post.title, &needle))
        .collect();

    // sort_by is stable, so equal titles keep fetch order in both directions
    match sort_order {
        SortOrder::Ascending => filtered.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortOrder::Descending => filtered.sort_by(|a, b| locale_compare(&b.title, &a.title)),
    }
    filtered
}

/// Number of posts whose title contains `search_term` (case-insensitive).
pub fn count_matches(items: &[Post], search_term: &str) -> usize {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|post| title_matches(&post.title, &needle))
        .count()
}

/// `needle` must already be lowercased.
fn title_matches(title: &str, needle: &str) -> bool {
    needle.is_empty() || title.to_lowercase().contains(needle)
}

/// Number of pages needed for `len` matches.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The slice of `list` shown on 1-based `page`.
pub fn page_slice<T>(list: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= list.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(list.len());
    &list[start..end]
}

/// Locale-style title comparison.
///
/// Levels, most significant first:
/// 1. base letters, ignoring accents and case; punctuation/whitespace ranks
///    before digits before letters
/// 2. accents (unaccented before accented)
/// 3. case (lowercase before uppercase)
/// 4. code point order, so the result is total
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_chars(a)
        .map(primary_key)
        .cmp(base_chars(b).map(primary_key))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            base_chars(a)
                .map(char::is_uppercase)
                .cmp(base_chars(b).map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Canonically decomposed characters with combining marks removed.
fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn primary_key(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}
