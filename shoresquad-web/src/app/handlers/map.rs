use yew::prelude::*;

use crate::app::handlers::notify;
use crate::app::state::AppState;
use crate::components::toast::ToastKind;

pub fn build_select_beach(state: &AppState) -> Callback<String> {
    let selected = state.selected_beach.clone();
    let beaches = state.beaches.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |id: String| {
        let Some(beach) = beaches.get(&id).cloned() else {
            return;
        };
        selected.set(id);
        notify(
            &toasts,
            ToastKind::Success,
            format!("📍 Beach switched to {}! Ready to clean? 🌊", beach.name),
        );
    })
}
