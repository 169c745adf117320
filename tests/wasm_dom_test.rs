//! Browser tests for the mount phase
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use creative_cards_wasm::api::dom::document;
use creative_cards_wasm::api::render_payload;
use creative_cards_wasm::config::FALLBACK_IMAGE_URL;
use creative_cards_wasm::{InteractionPayload, InteractionSink, RenderOptions, VizError, VizPayload};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<(String, Value)>>,
}

impl InteractionSink for RecordingSink {
    fn send_interaction(
        &self,
        event_kind: &str,
        payload: &InteractionPayload<'_>,
    ) -> Result<(), VizError> {
        let value = serde_json::to_value(payload)
            .map_err(|e| VizError::Serialization(e.to_string()))?;
        self.events.borrow_mut().push((event_kind.to_string(), value));
        Ok(())
    }
}

fn options(id: &str) -> RenderOptions {
    RenderOptions {
        container_id: id.to_string(),
        ..RenderOptions::default()
    }
}

fn payload(value: Value) -> VizPayload {
    serde_json::from_value(value).unwrap()
}

fn populated(count: usize) -> VizPayload {
    let rows: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "name": format!("Creative {}", i),
                "image": format!("img{}.png", i),
                "status": "Paused"
            })
        })
        .collect();
    payload(json!({
        "tables": {"DEFAULT": rows},
        "style": {"columns": 3, "showShadow": true},
        "fields": {
            "creativeName": [{"name": "name"}],
            "imageUrl": [{"name": "image"}],
            "status": [{"name": "status"}]
        }
    }))
}

fn container(id: &str) -> Element {
    document().unwrap().get_element_by_id(id).expect("container should exist")
}

fn cards(id: &str) -> Vec<HtmlElement> {
    let list = container(id).query_selector_all(".creative-card").unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[wasm_bindgen_test]
fn test_container_is_created_once() {
    let sink = Rc::new(RecordingSink::default());
    render_payload(&populated(2), sink.clone(), &options("viz-create")).unwrap();
    render_payload(&populated(2), sink, &options("viz-create")).unwrap();

    let matches = document().unwrap().query_selector_all("#viz-create").unwrap();
    assert_eq!(matches.length(), 1);
}

#[wasm_bindgen_test]
fn test_rerender_replaces_previous_output() {
    let sink = Rc::new(RecordingSink::default());
    let id = "viz-replace";

    render_payload(&populated(5), sink.clone(), &options(id)).unwrap();
    assert_eq!(container(id).child_element_count(), 1);
    assert_eq!(cards(id).len(), 5);

    render_payload(&populated(2), sink.clone(), &options(id)).unwrap();
    assert_eq!(container(id).child_element_count(), 1);
    assert_eq!(cards(id).len(), 2);

    render_payload(&payload(json!({"tables": {"DEFAULT": []}})), sink, &options(id)).unwrap();
    assert_eq!(container(id).child_element_count(), 1);
    assert_eq!(cards(id).len(), 0);
    assert!(container(id).query_selector(".empty-state").unwrap().is_some());
}

#[wasm_bindgen_test]
fn test_theme_variables_on_root() {
    let sink = Rc::new(RecordingSink::default());
    render_payload(&populated(1), sink, &options("viz-theme")).unwrap();

    let root: HtmlElement = document().unwrap().document_element().unwrap().dyn_into().unwrap();
    let style = root.style();
    assert_eq!(style.get_property_value("--columns").unwrap().trim(), "3");
    assert_eq!(style.get_property_value("--card-spacing").unwrap().trim(), "16px");
    assert_ne!(style.get_property_value("--card-shadow").unwrap().trim(), "none");
}

#[wasm_bindgen_test]
fn test_click_reports_row_and_index() {
    let sink = Rc::new(RecordingSink::default());
    let id = "viz-click";
    render_payload(&populated(3), sink.clone(), &options(id)).unwrap();

    let cards = cards(id);
    for index in [0, 1, 2] {
        cards[index].click();
    }

    let events = sink.events.borrow();
    assert_eq!(events.len(), 3);
    for (index, (kind, value)) in events.iter().enumerate() {
        assert_eq!(kind, "onClick");
        assert_eq!(value["index"], json!(index));
        assert_eq!(value["data"]["name"], json!(format!("Creative {}", index)));
    }
}

#[wasm_bindgen_test]
fn test_status_badge_and_image_markup() {
    let sink = Rc::new(RecordingSink::default());
    let id = "viz-markup";
    render_payload(&populated(1), sink, &options(id)).unwrap();

    let badge = container(id).query_selector(".badge-status").unwrap().unwrap();
    assert_eq!(badge.class_name(), "badge badge-status badge-paused");

    let img = container(id).query_selector(".card-image img").unwrap().unwrap();
    assert_eq!(img.get_attribute("src").as_deref(), Some("img0.png"));
    assert_eq!(img.get_attribute("alt").as_deref(), Some("Creative 0"));
}

#[wasm_bindgen_test]
fn test_image_error_swaps_to_fallback_once() {
    let sink = Rc::new(RecordingSink::default());
    let id = "viz-fallback";
    render_payload(&populated(1), sink, &options(id)).unwrap();

    let img = container(id).query_selector(".card-image img").unwrap().unwrap();
    img.dispatch_event(&Event::new("error").unwrap()).unwrap();
    assert_eq!(img.get_attribute("src").as_deref(), Some(FALLBACK_IMAGE_URL));

    // a failing fallback leaves the src alone
    img.dispatch_event(&Event::new("error").unwrap()).unwrap();
    assert_eq!(img.get_attribute("src").as_deref(), Some(FALLBACK_IMAGE_URL));
}

#[wasm_bindgen_test]
fn test_clicks_survive_render_into_other_container() {
    let sink = Rc::new(RecordingSink::default());
    render_payload(&populated(2), sink.clone(), &options("viz-first")).unwrap();
    render_payload(&populated(3), sink.clone(), &options("viz-second")).unwrap();

    cards("viz-first")[1].click();
    cards("viz-second")[2].click();

    let events = sink.events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].1["index"], json!(1));
    assert_eq!(events[1].1["index"], json!(2));
}

#[wasm_bindgen_test]
fn test_format_value_export() {
    use creative_cards_wasm::api::format_value_js;
    use wasm_bindgen::JsValue;

    assert_eq!(format_value_js(JsValue::from_f64(1234.0), "number"), "1,234");
    assert_eq!(format_value_js(JsValue::from_f64(1234.5), "currency"), "$1,235");
    assert_eq!(format_value_js(JsValue::from_f64(12.345), "percentage"), "12.35%");
    assert_eq!(format_value_js(JsValue::from_f64(f64::NAN), "number"), "NaN");
    assert_eq!(format_value_js(JsValue::NULL, "currency"), "—");
    assert_eq!(format_value_js(JsValue::UNDEFINED, "other"), "—");
    assert_eq!(format_value_js(JsValue::from_str("Video"), "other"), "Video");
}

#[wasm_bindgen_test]
fn test_theme_variables_export() {
    use creative_cards_wasm::api::theme_variables;
    use wasm_bindgen::JsValue;

    let variables = theme_variables(JsValue::UNDEFINED).unwrap();
    let columns = js_sys::Reflect::get(&variables, &JsValue::from_str("--columns")).unwrap();
    assert_eq!(columns.as_string().as_deref(), Some("4"));

    let shadow = js_sys::Reflect::get(&variables, &JsValue::from_str("--card-shadow")).unwrap();
    assert_eq!(shadow.as_string().as_deref(), Some("none"));
}
