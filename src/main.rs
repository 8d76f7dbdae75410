mod cookie_banner;
mod detail_page;
mod dom;
mod leaflet;
mod map_page;
mod upload_page;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
thread_local! {
    // Listener handles for page-global components; dropped on navigation.
    static PAGE_LISTENERS: RefCell<Vec<gloo::events::EventListener>> = RefCell::new(Vec::new());
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    boot();
}

/// Activates every component whose root elements exist on the current
/// page. Components without their elements stay inactive.
#[cfg(target_arch = "wasm32")]
fn boot() {
    console_error_panic_hook::set_once();
    if let Some(listener) = cookie_banner::install() {
        keep_alive(listener);
    }
    map_page::install();
    detail_page::install();
    if let Some(listener) = upload_page::install() {
        keep_alive(listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn keep_alive(listener: gloo::events::EventListener) {
    PAGE_LISTENERS.with(|slot| slot.borrow_mut().push(listener));
}
