pub mod filter;
pub mod icons;
pub mod record;
pub mod registry;
pub mod sidebar;
pub mod upload;

pub use filter::{category_matches, visible_flags, ALL_CATEGORIES};
pub use icons::{
    icon_url_for_category, CategoryIcon, CATEGORY_ICONS, DEFAULT_ICON_URL, DETAIL_ICON_URL,
};
pub use record::{
    parse_dataset, record_from_row, ImageRecord, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
};
pub use registry::{image_src, popup_html, MarkerRegistry, MarkerSpec};
pub use sidebar::{search, sidebar_entries, SidebarEntry};
pub use upload::required_field_filled;
