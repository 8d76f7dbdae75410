use std::collections::HashMap;

use crate::icons::icon_url_for_category;
use crate::record::ImageRecord;

/// Everything the map layer needs to place one marker: resolved position,
/// icon, popup markup and the sidebar thumbnail. Derived once per record.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub id: String,
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub icon_url: &'static str,
    pub popup_html: String,
    pub thumbnail_src: String,
}

impl MarkerSpec {
    fn from_record(record: &ImageRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            icon_url: icon_url_for_category(&record.category),
            popup_html: popup_html(record),
            thumbnail_src: image_src(record),
        }
    }
}

/// Owns the ordered marker list and the id lookup for one page session.
/// Construction is a pure one-pass transform; input records are not
/// touched. Duplicate ids keep all markers but the index points at the
/// last one.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: Vec<MarkerSpec>,
    index: HashMap<String, usize>,
}

impl MarkerRegistry {
    pub fn build(records: &[ImageRecord]) -> Self {
        let mut markers = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            let spec = MarkerSpec::from_record(record);
            index.insert(spec.id.clone(), markers.len());
            markers.push(spec);
        }
        Self { markers, index }
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&MarkerSpec> {
        self.markers.get(self.index_of(id)?)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Image shown in popups and the sidebar: the thumbnail when one exists,
/// otherwise the full upload.
pub fn image_src(record: &ImageRecord) -> String {
    match &record.thumbnail_path {
        Some(thumbnail) => format!("/thumbnails/{thumbnail}"),
        None => format!("/uploads/{}", record.filepath),
    }
}

pub fn popup_html(record: &ImageRecord) -> String {
    format!(
        concat!(
            "<div style=\"max-width:200px\">",
            "<h5 class=\"fw-bold mb-1\">{name}</h5>",
            "<span class=\"badge bg-warning text-dark mb-2\">{category}</span>",
            "<p>{description}</p>",
            "<img src=\"{image}\" class=\"img-fluid rounded mb-2\" loading=\"lazy\" alt=\"{name}\">",
            "<a href=\"/detail/{id}\" class=\"btn btn-warning btn-sm w-100\">Details ansehen</a>",
            "</div>"
        ),
        name = record.name,
        category = record.category,
        description = record.description,
        image = image_src(record),
        id = record.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::DEFAULT_ICON_URL;
    use crate::record::{parse_dataset, DEFAULT_LATITUDE, DEFAULT_LONGITUDE};

    fn sample_records() -> Vec<ImageRecord> {
        parse_dataset(
            r#"[
                [1, "Burg Eltz", "", "Burg", "a.jpg", "t.jpg", 50.1, 7.3],
                [2, "Lost", "", "", "b.jpg", "", null, null]
            ]"#,
        )
    }

    #[test]
    fn one_marker_per_record_with_resolved_fallbacks() {
        let registry = MarkerRegistry::build(&sample_records());
        assert_eq!(registry.len(), 2);

        let eltz = registry.get("1").expect("marker 1");
        assert_eq!(eltz.latitude, 50.1);
        assert_eq!(eltz.longitude, 7.3);
        assert_eq!(eltz.icon_url, "/static/icons/burg.svg");

        let lost = registry.get("2").expect("marker 2");
        assert_eq!(lost.latitude, DEFAULT_LATITUDE);
        assert_eq!(lost.longitude, DEFAULT_LONGITUDE);
        assert_eq!(lost.icon_url, DEFAULT_ICON_URL);
    }

    #[test]
    fn index_misses_are_none() {
        let registry = MarkerRegistry::build(&sample_records());
        assert!(registry.get("99").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn duplicate_ids_keep_all_markers_but_index_last_write_wins() {
        let records = parse_dataset(
            r#"[
                [7, "First", "", "Burg", "a.jpg", "", 50.0, 7.0],
                [7, "Second", "", "Fels", "b.jpg", "", 51.0, 8.0]
            ]"#,
        );
        let registry = MarkerRegistry::build(&records);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("7").expect("marker").name, "Second");
        assert_eq!(registry.index_of("7"), Some(1));
    }

    #[test]
    fn popup_prefers_thumbnail_and_links_detail_page() {
        let records = sample_records();
        let with_thumbnail = popup_html(&records[0]);
        assert!(with_thumbnail.contains("Burg Eltz"));
        assert!(with_thumbnail.contains("src=\"/thumbnails/t.jpg\""));
        assert!(with_thumbnail.contains("href=\"/detail/1\""));

        let without_thumbnail = popup_html(&records[1]);
        assert!(without_thumbnail.contains("src=\"/uploads/b.jpg\""));
    }

    #[test]
    fn build_does_not_consume_or_reorder_records() {
        let records = sample_records();
        let registry = MarkerRegistry::build(&records);
        let ids: Vec<&str> = registry.markers().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(records.len(), 2);
    }
}
