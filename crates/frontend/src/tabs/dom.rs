//! Thin web-sys helpers used by the tabs widget.

use anyhow::{anyhow, Context};
use contracts::enums::panel_visibility::PanelVisibility;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub(crate) fn js_err(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

fn collect_elements<T: JsCast>(list: NodeList) -> Vec<T> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(element) = node.dyn_into::<T>() {
                out.push(element);
            }
        }
    }
    out
}

/// All elements under `document` matching `selector`, in document order.
pub fn query_document(document: &Document, selector: &str) -> anyhow::Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(js_err)
        .with_context(|| format!("bad selector '{}'", selector))?;
    Ok(collect_elements(list))
}

/// Descendants of `root` matching `selector`, in document order.
pub fn query_within<T: JsCast>(root: &Element, selector: &str) -> anyhow::Result<Vec<T>> {
    let list = root
        .query_selector_all(selector)
        .map_err(js_err)
        .with_context(|| format!("bad selector '{}'", selector))?;
    Ok(collect_elements(list))
}

/// Label for a panel; a missing attribute becomes an empty label.
pub fn panel_title(attribute: Option<String>) -> String {
    attribute.unwrap_or_default()
}

/// Builds `<li><a href="#">label</a></li>`. The label goes in as text.
pub fn create_menu_item(document: &Document, label: &str) -> anyhow::Result<Element> {
    let item = document
        .create_element("li")
        .map_err(js_err)
        .context("create menu item")?;
    let link = document
        .create_element("a")
        .map_err(js_err)
        .context("create menu link")?;
    link.set_attribute("href", "#").map_err(js_err)?;
    link.set_text_content(Some(label));
    item.append_child(&link).map_err(js_err)?;
    Ok(item)
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        log::warn!("tabs: class '{}' not toggled: {:?}", class, err);
    }
}

pub fn set_visibility(panel: &HtmlElement, visibility: PanelVisibility) {
    let _ = panel
        .style()
        .set_property("display", visibility.css_display());
}

pub fn fade_transition(fade_ms: u32) -> String {
    format!("opacity {}ms ease", fade_ms)
}

/// Shows the panel and fades it from transparent to opaque.
///
/// The transition is armed on the next tick so the browser sees opacity 0 first.
pub fn fade_in(panel: &HtmlElement, fade_ms: u32) {
    let style = panel.style();
    if fade_ms == 0 {
        let _ = style.remove_property("opacity");
        set_visibility(panel, PanelVisibility::Shown);
        return;
    }

    let _ = style.set_property("transition", "none");
    let _ = style.set_property("opacity", "0");
    set_visibility(panel, PanelVisibility::Shown);

    let panel = panel.clone();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        let style = panel.style();
        let _ = style.set_property("transition", &fade_transition(fade_ms));
        let _ = style.set_property("opacity", "1");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_title() {
        assert_eq!(panel_title(Some("Обзор".to_string())), "Обзор");
        assert_eq!(panel_title(Some(String::new())), "");
        assert_eq!(panel_title(None), "");
    }

    #[test]
    fn test_fade_transition() {
        assert_eq!(fade_transition(400), "opacity 400ms ease");
    }
}
