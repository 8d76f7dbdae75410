use serde::Serialize;

use crate::registry::MarkerRegistry;

/// Lightweight view row for the sidebar list. Entries are re-derived on
/// every search input; the registry stays the source of truth.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub thumbnail_src: String,
}

pub fn sidebar_entries(registry: &MarkerRegistry) -> Vec<SidebarEntry> {
    registry
        .markers()
        .iter()
        .map(|marker| SidebarEntry {
            id: marker.id.clone(),
            name: marker.name.clone(),
            category: marker.category.clone(),
            thumbnail_src: marker.thumbnail_src.clone(),
        })
        .collect()
}

/// Case-insensitive substring match on the entry name. An empty query
/// returns the full list in original order.
pub fn search<'a>(entries: &'a [SidebarEntry], query: &str) -> Vec<&'a SidebarEntry> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_dataset;

    fn entries() -> Vec<SidebarEntry> {
        let registry = MarkerRegistry::build(&parse_dataset(
            r#"[
                [1, "Burg Eltz", "", "Burg", "a.jpg", "t.jpg", 50.1, 7.3],
                [2, "Lorelei", "", "Fels", "b.jpg", "", 50.14, 7.73],
                [3, "Marksburg", "", "Burg", "c.jpg", "", 50.27, 7.61]
            ]"#,
        ));
        sidebar_entries(&registry)
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let entries = entries();
        let hits = search(&entries, "");
        let names: Vec<&str> = hits.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["Burg Eltz", "Lorelei", "Marksburg"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let entries = entries();
        let hits = search(&entries, "burg");
        let names: Vec<&str> = hits.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["Burg Eltz", "Marksburg"]);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let entries = entries();
        assert!(search(&entries, "zugspitze").is_empty());
    }

    #[test]
    fn entries_carry_thumbnail_fallbacks() {
        let entries = entries();
        assert_eq!(entries[0].thumbnail_src, "/thumbnails/t.jpg");
        assert_eq!(entries[1].thumbnail_src, "/uploads/b.jpg");
    }
}
