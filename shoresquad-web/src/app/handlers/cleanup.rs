use yew::prelude::*;

use crate::app::handlers::notify;
use crate::app::state::{AppState, EditorTarget};
use crate::components::toast::ToastKind;
use crate::components::ui::cleanup_form::CleanupFormData;

pub fn build_open_schedule(state: &AppState) -> Callback<()> {
    let editor = state.cleanup_editor.clone();
    Callback::from(move |()| editor.set(Some(EditorTarget::New)))
}

pub fn build_edit_cleanup(state: &AppState) -> Callback<usize> {
    let editor = state.cleanup_editor.clone();
    Callback::from(move |index| editor.set(Some(EditorTarget::Existing(index))))
}

pub fn build_close_cleanup_form(state: &AppState) -> Callback<()> {
    let editor = state.cleanup_editor.clone();
    Callback::from(move |()| editor.set(None))
}

pub fn build_submit_cleanup(state: &AppState) -> Callback<CleanupFormData> {
    let state = state.clone();
    Callback::from(move |form: CleanupFormData| {
        let Ok(members) = form.members.trim().parse::<u32>() else {
            notify(
                &state.toasts,
                ToastKind::Error,
                "Please fill in beach, date, and members",
            );
            return;
        };
        let kg = if form.kg.trim().is_empty() {
            Ok(0.0)
        } else {
            form.kg.trim().parse::<f64>()
        };
        let Ok(kg) = kg else {
            notify(
                &state.toasts,
                ToastKind::Error,
                "Removed weight must be a number",
            );
            return;
        };

        let target = *state.cleanup_editor;
        let outcome = state.with_store(|store| match target {
            Some(EditorTarget::Existing(index)) => store
                .edit_cleanup(index, &form.location, &form.date, members, kg)
                .map(|()| "✅ Cleanup updated!".to_string()),
            _ => store
                .add_cleanup(&form.location, &form.date, members, kg)
                .map(|event| {
                    if event.kg > 0.0 {
                        format!("✅ Cleanup logged at {} with {}kg recorded!", event.location, event.kg)
                    } else {
                        format!("✅ Cleanup planned at {}!", event.location)
                    }
                }),
        });
        match outcome {
            Ok(message) => {
                state.cleanup_editor.set(None);
                notify(&state.toasts, ToastKind::Success, message);
            }
            Err(e) => notify(&state.toasts, ToastKind::Error, e.to_string()),
        }
    })
}

pub fn build_remove_cleanup(state: &AppState) -> Callback<usize> {
    let state = state.clone();
    Callback::from(move |index| {
        match state.with_store(|store| store.remove_cleanup(index)) {
            Ok(_) => notify(&state.toasts, ToastKind::Info, "❌ Cleanup removed"),
            Err(e) => notify(&state.toasts, ToastKind::Error, e.to_string()),
        }
    })
}
