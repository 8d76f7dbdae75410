/// One entry of the category icon table.
#[derive(Clone, Copy, Debug)]
pub struct CategoryIcon {
    pub category: &'static str,
    pub url: &'static str,
}

/// Shared Leaflet icon geometry: all marker icons are 48x48 with the tip
/// at the bottom center and the popup opening above it.
pub const ICON_SIZE: (f64, f64) = (48.0, 48.0);
pub const ICON_ANCHOR: (f64, f64) = (24.0, 48.0);
pub const POPUP_ANCHOR: (f64, f64) = (0.0, -48.0);

pub const CATEGORY_ICONS: &[CategoryIcon] = &[
    CategoryIcon {
        category: "Burg",
        url: "/static/icons/burg.svg",
    },
    CategoryIcon {
        category: "Fels",
        url: "/static/icons/fels.svg",
    },
    CategoryIcon {
        category: "Kirche",
        url: "/static/icons/kirche.svg",
    },
    CategoryIcon {
        category: "Aussicht",
        url: "/static/icons/aussicht.svg",
    },
];

pub const DEFAULT_ICON_URL: &str = "/static/icons/default.svg";

/// Fixed icon for the single-image detail map.
pub const DETAIL_ICON_URL: &str = "/static/icons/men-in-dreck-helmet.svg";

/// Exact-match lookup; unknown categories get the generic icon.
pub fn icon_url_for_category(category: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|icon| icon.category == category)
        .map(|icon| icon.url)
        .unwrap_or(DEFAULT_ICON_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_resolve_exactly() {
        assert_eq!(icon_url_for_category("Burg"), "/static/icons/burg.svg");
        assert_eq!(icon_url_for_category("Fels"), "/static/icons/fels.svg");
        assert_eq!(icon_url_for_category("Kirche"), "/static/icons/kirche.svg");
        assert_eq!(
            icon_url_for_category("Aussicht"),
            "/static/icons/aussicht.svg"
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(icon_url_for_category("burg"), DEFAULT_ICON_URL);
        assert_eq!(icon_url_for_category("BURG"), DEFAULT_ICON_URL);
    }

    #[test]
    fn unknown_categories_get_the_default_icon() {
        assert_eq!(icon_url_for_category(""), DEFAULT_ICON_URL);
        assert_eq!(icon_url_for_category("Schloss"), DEFAULT_ICON_URL);
    }
}
