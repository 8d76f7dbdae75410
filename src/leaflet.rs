//! Bindings to the Leaflet and Leaflet.markercluster globals the host
//! pages load; map rendering itself stays with the library. Only the
//! surface the pages use is declared.

use bilderkarte_core::icons::{ICON_ANCHOR, ICON_SIZE, POPUP_ANCHOR};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub(crate) type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub(crate) fn new_map(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub(crate) fn set_view(this: &Map, center: &LatLng, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub(crate) fn add_layer(this: &Map, layer: &MarkerClusterGroup) -> Map;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub(crate) fn invalidate_size(this: &Map) -> Map;

    #[wasm_bindgen(method)]
    pub(crate) fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[derive(Debug, Clone)]
    pub(crate) type LatLng;

    #[wasm_bindgen(js_namespace = L, js_name = latLng)]
    pub(crate) fn new_lat_lng(latitude: f64, longitude: f64) -> LatLng;

    #[derive(Debug, Clone)]
    pub(crate) type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub(crate) fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub(crate) fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[derive(Debug, Clone)]
    pub(crate) type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    pub(crate) fn new_icon(options: &JsValue) -> Icon;

    #[derive(Debug, Clone)]
    pub(crate) type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub(crate) fn new_marker(position: &LatLng, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub(crate) fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub(crate) fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub(crate) fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method, js_name = getLatLng)]
    pub(crate) fn get_lat_lng(this: &Marker) -> LatLng;

    #[derive(Debug, Clone)]
    pub(crate) type MarkerClusterGroup;

    #[wasm_bindgen(js_namespace = L, js_name = markerClusterGroup)]
    pub(crate) fn new_marker_cluster_group() -> MarkerClusterGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub(crate) fn add_layer(this: &MarkerClusterGroup, marker: &Marker) -> MarkerClusterGroup;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub(crate) fn remove_layer(this: &MarkerClusterGroup, marker: &Marker) -> MarkerClusterGroup;

    #[wasm_bindgen(method, js_name = zoomToShowLayer)]
    pub(crate) fn zoom_to_show_layer(
        this: &MarkerClusterGroup,
        marker: &Marker,
        callback: &js_sys::Function,
    );

    #[derive(Debug, Clone)]
    pub(crate) type LayersControl;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub(crate) fn new_layers_control(
        base_layers: &JsValue,
        overlays: &JsValue,
        options: &JsValue,
    ) -> LayersControl;

    #[wasm_bindgen(method, js_name = addTo)]
    pub(crate) fn add_to(this: &LayersControl, map: &Map) -> LayersControl;
}

/// A marker icon with the shared site geometry.
pub(crate) fn icon_for(url: &str) -> Icon {
    let options = js_sys::Object::new();
    set(&options, "iconUrl", &JsValue::from_str(url));
    set(&options, "iconSize", &point(ICON_SIZE));
    set(&options, "iconAnchor", &point(ICON_ANCHOR));
    set(&options, "popupAnchor", &point(POPUP_ANCHOR));
    new_icon(&options.into())
}

pub(crate) fn marker_with_icon(position: &LatLng, icon: &Icon) -> Marker {
    let options = js_sys::Object::new();
    set(&options, "icon", icon.as_ref());
    new_marker(position, &options.into())
}

pub(crate) fn tile_layer(url_template: &str, max_zoom: f64, attribution: &str) -> TileLayer {
    let options = js_sys::Object::new();
    set(&options, "maxZoom", &JsValue::from_f64(max_zoom));
    set(&options, "attribution", &JsValue::from_str(attribution));
    set(&options, "errorTileUrl", &JsValue::from_str(""));
    new_tile_layer(url_template, &options.into())
}

pub(crate) fn set(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}

fn point((x, y): (f64, f64)) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(x), &JsValue::from_f64(y)).into()
}
