//! Per-concern callback builders over [`AppState`], wired up once per render.
pub mod chat;
pub mod cleanup;
pub mod crew;
pub mod map;
pub mod weather;

use std::sync::atomic::{AtomicUsize, Ordering};

use yew::prelude::*;

use crate::app::state::AppState;
use crate::components::toast::{ToastAction, ToastKind, ToastList, ToastMessage};

static TOAST_IDS: AtomicUsize = AtomicUsize::new(0);

const TOAST_DISMISS_MS: i32 = 4000;

/// Show a toast, announce it to assistive technology, and schedule its
/// auto-dismissal.
pub fn notify(toasts: &UseReducerHandle<ToastList>, kind: ToastKind, text: impl Into<String>) {
    let text = text.into();
    crate::a11y::set_status(&text);
    let id = TOAST_IDS.fetch_add(1, Ordering::Relaxed);
    toasts.dispatch(ToastAction::Push(ToastMessage { id, kind, text }));

    let toasts = toasts.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = crate::dom::sleep_ms(TOAST_DISMISS_MS).await;
        toasts.dispatch(ToastAction::Dismiss(id));
    });
}

pub fn build_dismiss_toast(state: &AppState) -> Callback<usize> {
    let toasts = state.toasts.clone();
    Callback::from(move |id: usize| toasts.dispatch(ToastAction::Dismiss(id)))
}
