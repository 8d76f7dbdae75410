use gloo::console;
use gloo::events::EventListener;

use crate::dom;

pub(crate) const CONSENT_STORAGE_KEY: &str = "cookiesAccepted";
const CONSENT_GRANTED: &str = "true";
const SHOW_CLASS: &str = "show";

/// Shows the banner until consent is stored; the returned listener must
/// be kept alive for the accept button to work.
pub(crate) fn install() -> Option<EventListener> {
    let banner = dom::element_by_id("cookie-banner")?;
    let accept = dom::element_by_id("cookie-accept")?;

    if !consent_granted() {
        let _ = banner.class_list().add_1(SHOW_CLASS);
    }

    let banner_for_click = banner.clone();
    let listener = EventListener::new(&accept, "click", move |_event| {
        store_consent();
        let _ = banner_for_click.class_list().remove_1(SHOW_CLASS);
    });
    Some(listener)
}

fn consent_granted() -> bool {
    dom::local_storage()
        .and_then(|storage| storage.get_item(CONSENT_STORAGE_KEY).ok().flatten())
        .map(|value| value == CONSENT_GRANTED)
        .unwrap_or(false)
}

fn store_consent() {
    let Some(storage) = dom::local_storage() else {
        console::warn!("cookie banner: storage unavailable");
        return;
    };
    if storage.set_item(CONSENT_STORAGE_KEY, CONSENT_GRANTED).is_err() {
        console::warn!("cookie banner: storage set failed");
    }
}
