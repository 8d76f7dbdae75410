use bilderkarte_core::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DETAIL_ICON_URL};
use gloo::console;
use web_sys::Element;

use crate::{dom, leaflet};

const DETAIL_ZOOM: f64 = 15.0;
const OSM_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_MAX_ZOOM: f64 = 19.0;
const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Single-marker map for the image detail page. No clustering, no
/// filtering, no sidebar.
pub(crate) fn install() {
    let Some(data) = dom::element_by_id("detail-data") else {
        return;
    };
    if dom::element_by_id("detailMap").is_none() {
        return;
    }

    let latitude = coordinate_attribute(&data, "data-lat", DEFAULT_LATITUDE);
    let longitude = coordinate_attribute(&data, "data-lon", DEFAULT_LONGITUDE);

    let map = leaflet::new_map("detailMap");
    let position = leaflet::new_lat_lng(latitude, longitude);
    map.set_view(&position, DETAIL_ZOOM);
    leaflet::tile_layer(OSM_URL, OSM_MAX_ZOOM, OSM_ATTRIBUTION).add_to(&map);

    let icon = leaflet::icon_for(DETAIL_ICON_URL);
    leaflet::marker_with_icon(&position, &icon).add_to(&map);
    console::log!("detail view: marker placed");
}

fn coordinate_attribute(element: &Element, name: &str, fallback: f64) -> f64 {
    let parsed = element
        .get_attribute(name)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite());
    match parsed {
        Some(value) => value,
        None => {
            console::warn!("detail view: bad coordinate attribute", name);
            fallback
        }
    }
}
