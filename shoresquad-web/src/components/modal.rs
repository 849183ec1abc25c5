use std::sync::atomic::{AtomicUsize, Ordering};

use yew::prelude::*;

use crate::a11y::restore_focus;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Element to return focus to when the dialog closes.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Focus-managed dialog. Escape and a backdrop click both close it; focus
/// moves into the dialog on open and back to `return_focus_id` on close.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();
    let prev_open = use_mut_ref(|| false);

    {
        let container_ref = container_ref.clone();
        let return_focus = props.return_focus_id.clone();
        use_effect_with((props.open, return_focus), move |(is_open, return_focus_id)| {
            let was_open = *prev_open.borrow();
            *prev_open.borrow_mut() = *is_open;
            if *is_open {
                if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                    let _ = el.set_attribute("tabindex", "-1");
                    let _ = el.focus();
                }
            } else if was_open && let Some(id) = return_focus_id.as_ref() {
                restore_focus(id);
            }
            || {}
        });
    }

    if !props.open {
        return Html::default();
    }

    let title_id = format!("modal-title-{}", *modal_id);

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_backdrop}>
            <div
                ref={container_ref}
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                onclick={swallow_click}
                onkeydown={on_keydown}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button class="modal__close" aria-label="Close dialog" onclick={on_close_btn}>{ "✕" }</button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
