use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlDocument, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Node, Selection, Window};

use crate::types::DateFormatOptions;

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_html_document() -> Option<HtmlDocument> {
    get_document().and_then(|d| d.dyn_into::<HtmlDocument>().ok())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_origin() -> String {
    get_window().and_then(|w| w.location().origin().ok()).unwrap_or_default()
}

pub fn get_pathname() -> String {
    get_window().and_then(|w| w.location().pathname().ok()).unwrap_or_else(|| "/".to_string())
}

pub fn location_assign(path: &str) {
    if let Some(w) = get_window() {
        if w.location().assign(&format!("{}/{}", get_origin(), path.trim_start_matches('/'))).is_err() {
            log::error!("location_assign: {path}");
        }
    }
}

pub fn set_title(title: &str) {
    if let Some(document) = get_document() {
        document.set_title(title);
    }
}

pub fn clear_body() {
    if let Some(body) = get_document().and_then(|d| d.body()) {
        body.set_inner_html("");
    }
}

pub fn get_input_value(name: &str) -> String {
    query_selector(&format!("[name={name}]"))
        .map(|element| get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e| e)
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    get_document().and_then(|d| d.get_element_by_id(id))
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn get_element_from_node(el: Option<Node>) -> Option<Element> {
    el.and_then(|el| el.dyn_into::<Element>().ok())
}

/// `textContent` of a template element.
pub fn text_by_id(id: &str) -> String {
    get_element_by_id(id).and_then(|e| e.text_content()).unwrap_or_default()
}

/// Rendered `innerText` of a template element, falls back to `textContent`.
pub fn inner_text_by_id(id: &str) -> String {
    match get_html_element(get_element_by_id(id)) {
        Some(element) => element.inner_text(),
        None => text_by_id(id),
    }
}

pub fn exec_command(command_id: &str) -> bool {
    get_html_document().and_then(|d| d.exec_command(command_id).ok()).unwrap_or_default()
}

pub fn exec_command_full(command_id: &str, show_ui: bool, value: &str) -> bool {
    get_html_document().and_then(|d| d.exec_command_with_show_ui_and_value(command_id, show_ui, value).ok()).unwrap_or_default()
}

pub fn get_selection() -> Option<Selection> {
    get_window().and_then(|w| w.get_selection().ok()).and_then(|s| s)
}

pub fn node_parent(node: Node, node_name: &str) -> Option<Node> {
    let node_name = node_name.to_uppercase();
    let mut node = Some(node);
    while let Some(current) = node {
        if current.node_name() == node_name {
            return Some(current);
        }
        node = current.parent_node();
    }
    None
}

pub fn drop_element(elem: Element) {
    if let Some(parent) = elem.parent_node() {
        while let Some(child) = elem.first_child() {
            if parent.insert_before(&child, Some(&elem)).is_ok() {}
        }
        elem.remove();
    };
}

pub fn to_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Copies through an off-screen textarea, keeping the user's selection.
pub fn copy_to_clipboard(text: &str) -> bool {
    let Some(document) = get_document() else { return false };
    let Some(body) = document.body() else { return false };
    let Some(area) = document.create_element("textarea").ok().and_then(|e| e.dyn_into::<HtmlTextAreaElement>().ok()) else {
        return false;
    };
    area.set_value(text);
    area.set_attribute("readonly", "").ok();
    area.style().set_property("position", "absolute").ok();
    area.style().set_property("left", "-9999px").ok();
    if body.append_child(&area).is_err() {
        return false;
    }

    let selection = get_selection();
    let saved = selection.as_ref()
        .filter(|s| s.range_count() > 0)
        .and_then(|s| s.get_range_at(0).ok());

    area.select();
    let copied = exec_command("copy");
    area.remove();

    if let (Some(selection), Some(saved)) = (selection, saved) {
        if selection.remove_all_ranges().is_ok() && selection.add_range(&saved).is_ok() {}
    }
    copied
}

/// Server timestamps are naive UTC.
pub fn format_date_time(created: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(&format!("{created}Z")));
    let options = serde_wasm_bindgen::to_value(&DateFormatOptions::default()).unwrap_or(JsValue::UNDEFINED);
    let text: String = date.to_locale_string("en-US", &options).into();
    text.replacen("at", "•", 1)
}
