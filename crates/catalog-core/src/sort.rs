//! # Sorting
//!
//! Ordering rules for each [`SortCriteria`]. Every order is ascending and
//! stable: products with equal keys keep their relative order.
//!
//! ## Name Ordering
//! Names collate the way a browser's default `localeCompare` does for
//! product names, level by level:
//! ```text
//! 1. base letters, case and accents ignored   "Éclair" < "rose" < "Zebra"
//! 2. tie: unaccented before accented          "resume" < "résumé"
//! 3. tie: lowercase before uppercase          "tea" < "Tea"
//! 4. tie: code point order of the decomposed text
//! ```
//! Accents are separated from their letters by canonical decomposition
//! (NFD), so "é" collates as "e" at the first level. Scripts keep their
//! Unicode block order (Latin, then Greek, then Cyrillic).

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::{Product, SortCriteria};

/// Sorts `products` in place by `criteria`.
pub fn sort_products(products: &mut [Product], criteria: SortCriteria) {
    match criteria {
        SortCriteria::Name => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortCriteria::Price => products.sort_by_key(|p| p.price_cents),
        SortCriteria::Quantity => products.sort_by_key(|p| p.quantity),
    }
}

/// Locale-style comparison of two product names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.nfd().cmp(b.nfd()))
}

/// Lowercased letters with combining marks removed.
fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased letters with combining marks kept in place. A mark sorts
/// after any letter, so the unaccented spelling comes first.
fn with_accents(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

/// First case difference decides: lowercase first.
fn compare_case(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
