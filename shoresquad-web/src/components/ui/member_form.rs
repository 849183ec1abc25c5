use shoresquad_core::CrewMember;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::modal::Modal;

/// Raw form values; the store validates them on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFormData {
    pub name: String,
    pub role: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Current values when editing an existing member.
    #[prop_or_default]
    pub editing: Option<CrewMember>,
    pub on_submit: Callback<MemberFormData>,
    pub on_close: Callback<()>,
}

#[function_component(MemberForm)]
pub fn member_form(p: &Props) -> Html {
    let name_ref = use_node_ref();
    let role_ref = use_node_ref();

    // Prefill on open; effects keep the inputs uncontrolled while typing.
    {
        let name_ref = name_ref.clone();
        let role_ref = role_ref.clone();
        use_effect_with((p.open, p.editing.clone()), move |(open, editing)| {
            if *open {
                if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                    input.set_value(editing.as_ref().map_or("", |m| m.name.as_str()));
                }
                if let Some(select) = role_ref.cast::<HtmlSelectElement>() {
                    select.set_value(editing.as_ref().map_or("Member", |m| m.role.as_str()));
                }
            }
            || {}
        });
    }

    let onsubmit = {
        let name_ref = name_ref.clone();
        let role_ref = role_ref.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let role = role_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();
            cb.emit(MemberFormData { name, role });
        })
    };

    let editing = p.editing.is_some();
    let title = if editing { "Edit Member" } else { "Add Member" };
    let submit_label = if editing { "✅ Update Member" } else { "✅ Add Member" };

    html! {
        <Modal
            open={p.open}
            title={title}
            on_close={p.on_close.clone()}
            return_focus_id="invite-crew-btn"
        >
            <form class="member-form" onsubmit={onsubmit}>
                <label for="member-name">{ "Name" }</label>
                <input id="member-name" ref={name_ref} type="text" placeholder="e.g. Alex Chen" />
                <label for="member-role">{ "Role" }</label>
                <select id="member-role" ref={role_ref}>
                    <option value="Member">{ "Member" }</option>
                    <option value="Coordinator">{ "Coordinator" }</option>
                    <option value="Crew Leader">{ "Crew Leader" }</option>
                </select>
                <button type="submit">{ submit_label }</button>
            </form>
        </Modal>
    }
}
