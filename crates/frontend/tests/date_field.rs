#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use contracts::shared::date_field::DATE_INPUT_TYPE;
use contracts::{Clock, DateFieldSettings, FixedClock, TimeZonePolicy};
use frontend::shared::components::date_field::DateField;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el.dyn_into().unwrap()
}

fn date_input(parent: &HtmlElement) -> HtmlInputElement {
    parent
        .query_selector("input")
        .unwrap()
        .expect("date input rendered")
        .dyn_into()
        .unwrap()
}

fn text_of(parent: &HtmlElement) -> Option<String> {
    parent
        .query_selector(".date-field__text")
        .unwrap()
        .and_then(|el| el.text_content())
}

fn mount_field(parent: &HtmlElement, timestamp: &str, settings: DateFieldSettings) {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::parse(timestamp).unwrap());
    let handle = leptos::mount::mount_to(parent.clone(), move || {
        view! { <DateField clock=clock settings=settings /> }
    });
    // keep the field mounted for the rest of the test
    std::mem::forget(handle);
}

#[wasm_bindgen_test]
fn renders_today_as_text_and_input_value() {
    let parent = container();
    mount_field(&parent, "2024-03-05T08:00:00Z", DateFieldSettings::default());

    let input = date_input(&parent);
    assert_eq!(input.type_(), DATE_INPUT_TYPE);
    assert_eq!(input.value(), "2024-03-05");
    assert_eq!(text_of(&parent).as_deref(), Some("2024-03-05"));
}

#[wasm_bindgen_test]
fn last_second_of_year_stays_on_that_day() {
    let parent = container();
    mount_field(&parent, "2024-12-31T23:59:59Z", DateFieldSettings::default());

    assert_eq!(date_input(&parent).value(), "2024-12-31");
    assert_eq!(text_of(&parent).as_deref(), Some("2024-12-31"));
}

#[wasm_bindgen_test]
fn offset_policy_keeps_text_and_input_in_sync() {
    let parent = container();
    let settings = DateFieldSettings {
        time_zone: TimeZonePolicy::FixedOffset { seconds: 3600 },
    };
    mount_field(&parent, "2024-12-31T23:30:00Z", settings);

    assert_eq!(date_input(&parent).value(), "2025-01-01");
    assert_eq!(text_of(&parent).as_deref(), Some("2025-01-01"));
}

#[wasm_bindgen_test]
fn user_edits_do_not_write_back() {
    let parent = container();
    mount_field(&parent, "2024-03-05T08:00:00Z", DateFieldSettings::default());

    let input = date_input(&parent);
    input.set_value("2024-04-01");
    input.dispatch_event(&web_sys::Event::new("input").unwrap()).unwrap();
    input.dispatch_event(&web_sys::Event::new("change").unwrap()).unwrap();

    assert_eq!(text_of(&parent).as_deref(), Some("2024-03-05"));
}
