use crate::registry::MarkerSpec;

/// Sentinel select value that keeps every marker visible.
pub const ALL_CATEGORIES: &str = "Alle";

pub fn category_matches(selection: &str, category: &str) -> bool {
    selection == ALL_CATEGORIES || selection == category
}

/// Visibility per marker for the given selection, in marker order. The
/// map layer turns this into cluster add/remove calls; the computation
/// itself is stateless, so re-applying a selection is idempotent.
pub fn visible_flags(markers: &[MarkerSpec], selection: &str) -> Vec<bool> {
    markers
        .iter()
        .map(|marker| category_matches(selection, &marker.category))
        .collect()
}
