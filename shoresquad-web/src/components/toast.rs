//! Transient toast notifications.
use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Info => "toast-info",
            Self::Warning => "toast-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: usize,
    pub kind: ToastKind,
    pub text: String,
}

/// Reducer-backed toast list, so pushes and timed dismissals always apply
/// to the current list no matter which render scheduled them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    pub items: Vec<ToastMessage>,
}

pub enum ToastAction {
    Push(ToastMessage),
    Dismiss(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(toast) => items.push(toast),
            ToastAction::Dismiss(id) => items.retain(|toast| toast.id != id),
        }
        Rc::new(Self { items })
    }
}


#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub toasts: Vec<ToastMessage>,
    pub on_dismiss: Callback<usize>,
}

/// Stacked notifications. Each toast is a button so a click (or Enter)
/// dismisses it ahead of the auto-dismiss timer.
#[function_component(ToastTray)]
pub fn toast_tray(p: &Props) -> Html {
    html! {
        <div class="toast-tray" aria-live="polite">
            { for p.toasts.iter().map(|toast| {
                let on_click = {
                    let cb = p.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| cb.emit(id))
                };
                html! {
                    <button
                        key={toast.id}
                        class={classes!("toast", toast.kind.css_class())}
                        onclick={on_click}
                    >
                        { &toast.text }
                    </button>
                }
            }) }
        </div>
    }
}
