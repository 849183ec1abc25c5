use shoresquad_core::{Beach, CleanupEvent};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::modal::Modal;

/// Raw form values; parsing and validation happen in the submit handler
/// and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupFormData {
    pub location: String,
    pub date: String,
    pub members: String,
    pub kg: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub beaches: Vec<Beach>,
    #[prop_or_default]
    pub editing: Option<CleanupEvent>,
    pub on_submit: Callback<CleanupFormData>,
    pub on_close: Callback<()>,
}

#[function_component(CleanupForm)]
pub fn cleanup_form(p: &Props) -> Html {
    let beach_ref = use_node_ref();
    let date_ref = use_node_ref();
    let members_ref = use_node_ref();
    let kg_ref = use_node_ref();

    {
        let beach_ref = beach_ref.clone();
        let date_ref = date_ref.clone();
        let members_ref = members_ref.clone();
        let kg_ref = kg_ref.clone();
        use_effect_with((p.open, p.editing.clone()), move |(open, editing)| {
            if *open {
                if let Some(select) = beach_ref.cast::<HtmlSelectElement>()
                    && let Some(event) = editing.as_ref()
                {
                    select.set_value(&event.location);
                }
                if let Some(input) = date_ref.cast::<HtmlInputElement>() {
                    // New cleanups default to today.
                    let date = editing
                        .as_ref()
                        .map_or_else(crate::platform::today_ymd, |e| e.date.clone());
                    input.set_value(&date);
                }
                if let Some(input) = members_ref.cast::<HtmlInputElement>() {
                    input.set_value(&editing.as_ref().map_or_else(|| "1".to_string(), |e| e.members.to_string()));
                }
                if let Some(input) = kg_ref.cast::<HtmlInputElement>() {
                    input.set_value(&editing.as_ref().map_or_else(String::new, |e| e.kg.to_string()));
                }
            }
            || {}
        });
    }

    let onsubmit = {
        let beach_ref = beach_ref.clone();
        let date_ref = date_ref.clone();
        let members_ref = members_ref.clone();
        let kg_ref = kg_ref.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            cb.emit(CleanupFormData {
                location: beach_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
                date: value_of(&date_ref),
                members: value_of(&members_ref),
                kg: value_of(&kg_ref),
            });
        })
    };

    let editing = p.editing.is_some();
    let title = if editing { "Edit Cleanup" } else { "Log Cleanup" };
    let submit_label = if editing { "✅ Update Cleanup" } else { "✅ Log Cleanup" };

    html! {
        <Modal
            open={p.open}
            title={title}
            on_close={p.on_close.clone()}
            return_focus_id="start-cleanup-btn"
        >
            <form class="cleanup-form" onsubmit={onsubmit}>
                <label for="cleanup-beach">{ "Beach" }</label>
                <select id="cleanup-beach" ref={beach_ref}>
                    { for p.beaches.iter().map(|beach| html! {
                        <option value={beach.name.clone()}>{ &beach.name }</option>
                    }) }
                </select>
                <label for="cleanup-date">{ "Date" }</label>
                <input id="cleanup-date" ref={date_ref} type="date" />
                <label for="cleanup-members">{ "Team members" }</label>
                <input id="cleanup-members" ref={members_ref} type="number" min="1" step="1" />
                <label for="cleanup-kg">{ "Waste removed (kg)" }</label>
                <input id="cleanup-kg" ref={kg_ref} type="number" min="0" step="0.1" placeholder="0" />
                <button type="submit">{ submit_label }</button>
            </form>
        </Modal>
    }
}
