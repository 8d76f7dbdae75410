use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Storage};

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub(crate) fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub(crate) fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into().ok()
}

pub(crate) fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    element_by_id(id)?.dyn_into().ok()
}

pub(crate) fn select_by_id(id: &str) -> Option<HtmlSelectElement> {
    element_by_id(id)?.dyn_into().ok()
}

pub(crate) fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub(crate) fn search_params() -> Option<web_sys::UrlSearchParams> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()
}
