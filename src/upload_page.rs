use bilderkarte_core::required_field_filled;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::dom;

const ERROR_CLASS: &str = "input-error";

/// Required-field validator for the upload form: the submit button stays
/// disabled while the trimmed name is empty. Runs once at load and on
/// every input event. Submission itself is not intercepted.
pub(crate) fn install() -> Option<EventListener> {
    let name_input = dom::input_by_id("name")?;
    let error_label = dom::html_element_by_id("nameError");
    let submit = submit_button();

    apply_state(&name_input, error_label.as_ref(), submit.as_ref());

    let input_for_events = name_input.clone();
    let listener = EventListener::new(&name_input, "input", move |_event| {
        apply_state(&input_for_events, error_label.as_ref(), submit.as_ref());
    });
    Some(listener)
}

fn submit_button() -> Option<HtmlButtonElement> {
    let document = dom::document()?;
    let button = document
        .query_selector("button[type='submit']")
        .ok()
        .flatten()
        .or_else(|| document.query_selector("button").ok().flatten())?;
    button.dyn_into().ok()
}

fn apply_state(
    input: &HtmlInputElement,
    error: Option<&HtmlElement>,
    submit: Option<&HtmlButtonElement>,
) {
    let filled = required_field_filled(&input.value());
    if filled {
        let _ = input.class_list().remove_1(ERROR_CLASS);
    } else {
        let _ = input.class_list().add_1(ERROR_CLASS);
    }
    if let Some(error) = error {
        let display = if filled { "none" } else { "block" };
        let _ = error.style().set_property("display", display);
    }
    if let Some(submit) = submit {
        submit.set_disabled(!filled);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_input(input: &HtmlInputElement) {
        let event = web_sys::Event::new("input").expect("input event");
        let _ = input.dispatch_event(&event);
    }

    #[wasm_bindgen_test]
    fn submit_follows_the_trimmed_name_value() {
        let document = crate::dom::document().expect("document");
        let body = document.body().expect("body");
        let input: HtmlInputElement = document
            .create_element("input")
            .expect("input")
            .dyn_into()
            .expect("input element");
        input.set_id("name");
        let button: HtmlButtonElement = document
            .create_element("button")
            .expect("button")
            .dyn_into()
            .expect("button element");
        let _ = button.set_attribute("type", "submit");
        body.append_child(&input).expect("attach input");
        body.append_child(&button).expect("attach button");

        let _listener = install().expect("listener");
        assert!(button.disabled());

        input.set_value("   ");
        dispatch_input(&input);
        assert!(button.disabled());
        assert!(input.class_list().contains(ERROR_CLASS));

        input.set_value("Burg Eltz");
        dispatch_input(&input);
        assert!(!button.disabled());
        assert!(!input.class_list().contains(ERROR_CLASS));

        input.remove();
        button.remove();
    }
}
