use yew::prelude::*;

use crate::app::handlers::notify;
use crate::app::state::{AppState, EditorTarget};
use crate::components::toast::ToastKind;
use crate::components::ui::member_form::MemberFormData;

pub fn build_open_invite(state: &AppState) -> Callback<()> {
    let editor = state.member_editor.clone();
    Callback::from(move |()| editor.set(Some(EditorTarget::New)))
}

pub fn build_edit_member(state: &AppState) -> Callback<usize> {
    let editor = state.member_editor.clone();
    Callback::from(move |index| editor.set(Some(EditorTarget::Existing(index))))
}

pub fn build_close_member_form(state: &AppState) -> Callback<()> {
    let editor = state.member_editor.clone();
    Callback::from(move |()| editor.set(None))
}

pub fn build_submit_member(state: &AppState) -> Callback<MemberFormData> {
    let state = state.clone();
    Callback::from(move |form: MemberFormData| {
        let target = *state.member_editor;
        let outcome = state.with_store(|store| match target {
            Some(EditorTarget::Existing(index)) => store
                .edit_crew_member(index, &form.name, &form.role)
                .map(|()| format!("✅ {}'s profile updated!", form.name.trim())),
            _ => store
                .add_crew_member(&form.name, &form.role)
                .map(|member| format!("✅ {} added to your crew as {}!", member.name, member.role)),
        });
        match outcome {
            Ok(message) => {
                state.member_editor.set(None);
                notify(&state.toasts, ToastKind::Success, message);
            }
            Err(e) => notify(&state.toasts, ToastKind::Error, e.to_string()),
        }
    })
}

pub fn build_remove_member(state: &AppState) -> Callback<usize> {
    let state = state.clone();
    Callback::from(move |index| {
        match state.with_store(|store| store.remove_crew_member(index)) {
            Ok(_) => notify(&state.toasts, ToastKind::Info, "❌ Crew member removed"),
            Err(e) => notify(&state.toasts, ToastKind::Error, e.to_string()),
        }
    })
}
