//! Locating marker elements in the document.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCollection, HtmlDataListElement, HtmlInputElement, HtmlOptionElement};

/// A marker element paired with its raw position text.
#[derive(Clone, Debug)]
pub struct DomMarker {
    /// Element receiving the below class.
    pub element: Element,
    /// Position as written in the page, if any.
    pub position: Option<String>,
}

/// Options of the `<datalist>` referenced by the control's `list` attribute.
#[must_use]
pub fn control_list(control: &HtmlInputElement) -> Option<Vec<DomMarker>> {
    let list = control.list()?.dyn_into::<HtmlDataListElement>().ok()?;
    Some(option_markers(&list.options()))
}

/// Options of the first `<datalist>` inside the slider container.
#[must_use]
pub fn container_list(container: &Element) -> Option<Vec<DomMarker>> {
    let list = container
        .query_selector("datalist")
        .ok()
        .flatten()?
        .dyn_into::<HtmlDataListElement>()
        .ok()?;
    Some(option_markers(&list.options()))
}

/// Custom marker elements inside the container; `None` when the selector matches nothing.
#[must_use]
pub fn custom_collection(
    container: &Element,
    selector: &str,
    attribute: &str,
) -> Option<Vec<DomMarker>> {
    let nodes = container.query_selector_all(selector).ok()?;
    if nodes.length() == 0 {
        return None;
    }
    let markers = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|element| DomMarker {
            position: element.get_attribute(attribute),
            element,
        })
        .collect();
    Some(markers)
}

fn option_markers(options: &HtmlCollection) -> Vec<DomMarker> {
    (0..options.length())
        .filter_map(|index| options.item(index))
        .map(|element| {
            let position = element
                .dyn_ref::<HtmlOptionElement>()
                .map(HtmlOptionElement::value);
            DomMarker { element, position }
        })
        .collect()
}
