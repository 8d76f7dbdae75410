use std::cell::RefCell;
use std::rc::Rc;

use bilderkarte_core::{
    parse_dataset, search, sidebar_entries, visible_flags, MarkerRegistry, SidebarEntry,
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
};
use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::{dom, leaflet};

const DEFAULT_ZOOM: f64 = 6.0;
const FOCUS_ZOOM: f64 = 15.0;
// Matches the sidebar CSS transition; Leaflet measures the container
// after the transition has finished.
const SIDEBAR_RESIZE_DELAY_MS: u32 = 300;

const OSM_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TOPO_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
const SATELLITE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";

thread_local! {
    // Keeps the page state (and with it every listener) alive for the
    // page session; released on navigation.
    static MAP_PAGE: RefCell<Option<Rc<MapPage>>> = RefCell::new(None);
}

struct MapPage {
    map: leaflet::Map,
    cluster: leaflet::MarkerClusterGroup,
    registry: MarkerRegistry,
    // Leaflet markers, parallel to registry.markers().
    markers: Vec<leaflet::Marker>,
    entries: Vec<SidebarEntry>,
    sidebar: Option<HtmlElement>,
    toggle: Option<HtmlElement>,
    image_list: Option<Element>,
    listeners: RefCell<Vec<EventListener>>,
    entry_listeners: RefCell<Vec<EventListener>>,
}

/// Wires the clustered marker map: registry from the embedded dataset,
/// sidebar list, category filter and the `focus` deep link all read from
/// the same registry handle.
pub(crate) fn install() {
    let Some(data_element) = dom::element_by_id("images-data") else {
        return;
    };
    if dom::element_by_id("map").is_none() {
        return;
    }

    let raw = data_element.get_attribute("data-images").unwrap_or_default();
    let records = parse_dataset(&raw);
    let registry = MarkerRegistry::build(&records);
    console::log!("map view:", registry.len() as u32, "markers");

    let map = leaflet::new_map("map");
    map.set_view(
        &leaflet::new_lat_lng(DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
        DEFAULT_ZOOM,
    );
    install_base_layers(&map);

    let cluster = leaflet::new_marker_cluster_group();
    let mut markers = Vec::with_capacity(registry.len());
    for spec in registry.markers() {
        let icon = leaflet::icon_for(spec.icon_url);
        let position = leaflet::new_lat_lng(spec.latitude, spec.longitude);
        let marker = leaflet::marker_with_icon(&position, &icon);
        marker.bind_popup(&spec.popup_html);
        cluster.add_layer(&marker);
        markers.push(marker);
    }
    map.add_layer(&cluster);

    let entries = sidebar_entries(&registry);
    let page = Rc::new(MapPage {
        map,
        cluster,
        registry,
        markers,
        entries,
        sidebar: dom::html_element_by_id("sidebar"),
        toggle: dom::html_element_by_id("sidebar-toggle"),
        image_list: dom::element_by_id("image-list"),
        listeners: RefCell::new(Vec::new()),
        entry_listeners: RefCell::new(Vec::new()),
    });

    init_sidebar(&page);
    let all: Vec<&SidebarEntry> = page.entries.iter().collect();
    render_image_list(&page, &all);
    install_search(&page);
    install_category_filter(&page);
    apply_deep_link(&page);

    MAP_PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
}

fn install_base_layers(map: &leaflet::Map) {
    let osm = leaflet::tile_layer(OSM_URL, 19.0, "© OpenStreetMap contributors");
    let topo = leaflet::tile_layer(TOPO_URL, 17.0, "© OpenTopoMap contributors");
    let satellite = leaflet::tile_layer(SATELLITE_URL, 19.0, "© Esri");
    osm.add_to(map);

    let base_layers = js_sys::Object::new();
    leaflet::set(&base_layers, "🗺️ OpenStreetMap", osm.as_ref());
    leaflet::set(&base_layers, "🏔️ Topographie", topo.as_ref());
    leaflet::set(&base_layers, "🛰️ Satellit", satellite.as_ref());

    let options = js_sys::Object::new();
    leaflet::set(&options, "position", &JsValue::from_str("topright"));
    leaflet::set(&options, "collapsed", &JsValue::TRUE);
    leaflet::new_layers_control(&base_layers.into(), &JsValue::NULL, &options.into()).add_to(map);

    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let name = js_sys::Reflect::get(&event, &JsValue::from_str("name"))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default();
        console::log!("map view: base layer switched to", name);
    });
    map.on("baselayerchange", handler.as_ref().unchecked_ref());
    handler.forget();
}

// --- sidebar panel ---

fn init_sidebar(page: &Rc<MapPage>) {
    let Some(sidebar) = page.sidebar.as_ref() else {
        return;
    };
    // Starts closed on every viewport.
    let _ = sidebar.class_list().add_1("closed");
    if let Some(body) = dom::document().and_then(|document| document.body()) {
        let _ = body.class_list().add_1("sidebar-closed");
    }
    update_toggle_visibility(page);

    if let Some(toggle) = page.toggle.as_ref() {
        let page_for_open = Rc::clone(page);
        let listener = EventListener::new(toggle, "click", move |_event| {
            set_sidebar_open(&page_for_open, true);
        });
        page.listeners.borrow_mut().push(listener);
    }
    if let Some(close) = dom::html_element_by_id("sidebar-close") {
        let page_for_close = Rc::clone(page);
        let listener = EventListener::new(&close, "click", move |_event| {
            set_sidebar_open(&page_for_close, false);
        });
        page.listeners.borrow_mut().push(listener);
    }
}

fn set_sidebar_open(page: &Rc<MapPage>, open: bool) {
    let Some(sidebar) = page.sidebar.as_ref() else {
        return;
    };
    let classes = sidebar.class_list();
    let body = dom::document().and_then(|document| document.body());
    if open {
        let _ = classes.remove_1("closed");
        let _ = classes.add_1("open");
        if let Some(body) = &body {
            let _ = body.class_list().remove_1("sidebar-closed");
            let _ = body.class_list().add_1("sidebar-open");
        }
    } else {
        let _ = classes.remove_1("open");
        let _ = classes.add_1("closed");
        if let Some(body) = &body {
            let _ = body.class_list().remove_1("sidebar-open");
            let _ = body.class_list().add_1("sidebar-closed");
        }
    }
    update_toggle_visibility(page);
    schedule_map_resize(page);
}

fn update_toggle_visibility(page: &Rc<MapPage>) {
    let Some(sidebar) = page.sidebar.as_ref() else {
        return;
    };
    let Some(toggle) = page.toggle.as_ref() else {
        return;
    };
    let display = if sidebar.class_list().contains("closed") {
        "flex"
    } else {
        "none"
    };
    let _ = toggle.style().set_property("display", display);
}

// Fire-and-forget; there is nothing to cancel and re-measuring twice is
// harmless.
fn schedule_map_resize(page: &Rc<MapPage>) {
    let map = page.map.clone();
    Timeout::new(SIDEBAR_RESIZE_DELAY_MS, move || {
        map.invalidate_size();
    })
    .forget();
}

// --- sidebar list ---

fn render_image_list(page: &Rc<MapPage>, entries: &[&SidebarEntry]) {
    let Some(list) = page.image_list.as_ref() else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    list.set_inner_html("");
    let mut listeners = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(item) = build_entry_item(&document, entry) else {
            continue;
        };
        let _ = list.append_child(&item);

        let page_for_click = Rc::clone(page);
        let id = entry.id.clone();
        listeners.push(EventListener::new(&item, "click", move |_event| {
            if focus_marker(&page_for_click, &id) {
                set_sidebar_open(&page_for_click, false);
            }
        }));
    }
    *page.entry_listeners.borrow_mut() = listeners;
}

fn build_entry_item(document: &web_sys::Document, entry: &SidebarEntry) -> Option<Element> {
    let item = document.create_element("div").ok()?;
    item.set_class_name("image-item");
    let _ = item.set_attribute("data-image-id", &entry.id);

    let thumb = document.create_element("img").ok()?;
    thumb.set_class_name("image-item-thumb");
    let _ = thumb.set_attribute("src", &entry.thumbnail_src);
    let _ = thumb.set_attribute("alt", &entry.name);
    let _ = thumb.set_attribute("loading", "lazy");

    let info = document.create_element("div").ok()?;
    info.set_class_name("image-item-info");
    let name = document.create_element("div").ok()?;
    name.set_class_name("image-item-name");
    name.set_text_content(Some(&entry.name));
    let badge = document.create_element("span").ok()?;
    badge.set_class_name("badge bg-warning text-dark");
    badge.set_text_content(Some(&entry.category));

    let _ = info.append_child(&name);
    let _ = info.append_child(&badge);
    let _ = item.append_child(&thumb);
    let _ = item.append_child(&info);
    Some(item)
}

fn install_search(page: &Rc<MapPage>) {
    let Some(input) = dom::input_by_id("sidebar-search") else {
        return;
    };
    let page_for_input = Rc::clone(page);
    let input_for_events = input.clone();
    let listener = EventListener::new(&input, "input", move |_event| {
        let query = input_for_events.value();
        let hits = search(&page_for_input.entries, &query);
        render_image_list(&page_for_input, &hits);
    });
    page.listeners.borrow_mut().push(listener);
}

// --- category filter ---

fn install_category_filter(page: &Rc<MapPage>) {
    let Some(select) = dom::select_by_id("category-filter") else {
        return;
    };
    let page_for_change = Rc::clone(page);
    let select_for_events = select.clone();
    let listener = EventListener::new(&select, "change", move |_event| {
        apply_category_filter(&page_for_change, &select_for_events.value());
    });
    page.listeners.borrow_mut().push(listener);
}

fn apply_category_filter(page: &Rc<MapPage>, selection: &str) {
    let flags = visible_flags(page.registry.markers(), selection);
    for (marker, visible) in page.markers.iter().zip(flags) {
        if visible {
            page.cluster.add_layer(marker);
        } else {
            page.cluster.remove_layer(marker);
        }
    }
}

// --- focus (sidebar selection and deep link) ---

fn focus_marker(page: &Rc<MapPage>, id: &str) -> bool {
    let Some(position) = page.registry.index_of(id) else {
        console::log!("map view: unknown marker id", id);
        return false;
    };
    let Some(marker) = page.markers.get(position) else {
        return false;
    };
    let map = page.map.clone();
    let marker_for_view = marker.clone();
    let callback = Closure::once_into_js(move || {
        map.set_view(&marker_for_view.get_lat_lng(), FOCUS_ZOOM);
        marker_for_view.open_popup();
    });
    page.cluster.zoom_to_show_layer(marker, callback.unchecked_ref());
    true
}

fn apply_deep_link(page: &Rc<MapPage>) {
    let Some(params) = dom::search_params() else {
        return;
    };
    let Some(focus) = params.get("focus") else {
        return;
    };
    if focus_marker(page, &focus) {
        console::log!("map view: deep link focus", focus);
    }
}
