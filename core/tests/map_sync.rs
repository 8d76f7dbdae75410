//! End-to-end check of the map page data flow: embedded dataset in,
//! registry out, then filter, search and focus lookup against the same
//! registry handle.

use bilderkarte_core::{
    parse_dataset, search, sidebar_entries, visible_flags, MarkerRegistry, ALL_CATEGORIES,
    DEFAULT_ICON_URL, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
};

const DATASET: &str = r#"[
    [1, "Burg Eltz", "Moselblick", "Burg", "eltz.jpg", "eltz_thumb.jpg", 50.205, 7.336],
    [2, "Lorelei", "Schieferfelsen", "Fels", "lorelei.jpg", 50.139, 7.729],
    [3, "Koelner Dom", "", "Kirche", "dom.jpg", "dom_thumb.jpg", 50.941, 6.958],
    [4, "Ohne Ort", "", "Parkplatz", "ort.jpg", "", null, null]
]"#;

#[test]
fn registry_sidebar_filter_and_focus_stay_consistent() {
    let records = parse_dataset(DATASET);
    assert_eq!(records.len(), 4);

    let registry = MarkerRegistry::build(&records);
    assert_eq!(registry.len(), records.len());

    // Mixed tuple arities reconcile: row 2 has no thumbnail slot.
    assert_eq!(registry.get("1").unwrap().thumbnail_src, "/thumbnails/eltz_thumb.jpg");
    assert_eq!(registry.get("2").unwrap().thumbnail_src, "/uploads/lorelei.jpg");

    // Unknown category and missing coordinates degrade silently.
    let fallback = registry.get("4").unwrap();
    assert_eq!(fallback.icon_url, DEFAULT_ICON_URL);
    assert_eq!(fallback.latitude, DEFAULT_LATITUDE);
    assert_eq!(fallback.longitude, DEFAULT_LONGITUDE);

    // Category filter narrows and the sentinel restores everything.
    let burgen = visible_flags(registry.markers(), "Burg");
    assert_eq!(burgen, vec![true, false, false, false]);
    let alle = visible_flags(registry.markers(), ALL_CATEGORIES);
    assert!(alle.iter().all(|visible| *visible));

    // Sidebar entries mirror the registry and stay searchable.
    let entries = sidebar_entries(&registry);
    assert_eq!(entries.len(), registry.len());
    let hits = search(&entries, "DOM");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "3");

    // A sidebar hit resolves back to its marker; a stale id is a miss.
    let marker = registry.get(&hits[0].id).expect("marker for entry");
    assert_eq!(marker.name, "Koelner Dom");
    assert!(registry.get("99").is_none());
}

#[test]
fn deep_link_ids_resolve_like_sidebar_selections() {
    let registry = MarkerRegistry::build(&parse_dataset(DATASET));
    let focused = registry.get("2").expect("focus target");
    assert_eq!((focused.latitude, focused.longitude), (50.139, 7.729));
    // Non-matching parameter leaves the view untouched: lookup is None.
    assert!(registry.get("focus-me").is_none());
}
