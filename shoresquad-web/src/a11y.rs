// Accessibility helpers

/// Update the live region status for screen readers.
///
/// Updates the text content of the #status-helper element if present. This
/// announces state changes (beach switched, cleanup logged) to assistive
/// technology without moving focus.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("status-helper"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Return keyboard focus to the element with the given id, if it exists.
///
/// Used when a modal closes so focus lands back on the control that opened
/// it rather than falling to the document body.
pub fn restore_focus(id: &str) {
    use wasm_bindgen::JsCast;
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
