use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::modal::Modal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub from_user: bool,
    pub text: String,
    /// `HH:MM` wall-clock label.
    pub time: String,
}

impl ChatMessage {
    /// The opening message every conversation starts with.
    #[must_use]
    pub fn greeting() -> Self {
        Self {
            from_user: false,
            text: "👋 Hey! Ask me about the weather, the map, planning a cleanup, or our impact tracker."
                .to_string(),
            time: String::new(),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    /// True while the bot's reply is pending; sending is disabled.
    pub busy: bool,
    pub on_close: Callback<()>,
    pub on_send: Callback<String>,
}

#[function_component(ChatWidget)]
pub fn chat_widget(p: &Props) -> Html {
    let input_ref = use_node_ref();

    let submit = {
        let input_ref = input_ref.clone();
        let cb = p.on_send.clone();
        let busy = p.busy;
        move || {
            if busy {
                return;
            }
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let text = input.value();
            if text.trim().is_empty() {
                return;
            }
            input.set_value("");
            let _ = input.focus();
            cb.emit(text);
        }
    };

    let on_send_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };
    let on_keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" && !e.shift_key() {
            e.prevent_default();
            submit();
        }
    });

    html! {
        <Modal
            open={p.open}
            title="ShoreSquad Assistant"
            on_close={p.on_close.clone()}
            return_focus_id="chat-open-btn"
        >
            <div class="chat-messages" aria-live="polite">
                { for p.messages.iter().map(chat_bubble) }
                {
                    if p.busy {
                        html! { <p class="bot-typing" role="status">{ "…" }</p> }
                    } else {
                        Html::default()
                    }
                }
            </div>
            <div class="chat-input-row">
                <label for="chat-input" class="sr-only">{ "Your message" }</label>
                <input
                    id="chat-input"
                    ref={input_ref}
                    type="text"
                    placeholder="Type a message…"
                    onkeydown={on_keydown}
                />
                <button id="send-chat-btn" onclick={on_send_click} disabled={p.busy}>{ "Send" }</button>
            </div>
        </Modal>
    }
}

fn chat_bubble(message: &ChatMessage) -> Html {
    let class = if message.from_user {
        "chat-message user-message"
    } else {
        "chat-message bot-message"
    };
    html! {
        <div class={class}>
            <div class="message-content"><p>{ &message.text }</p></div>
            {
                if message.time.is_empty() {
                    Html::default()
                } else {
                    html! { <span class="message-time">{ &message.time }</span> }
                }
            }
        </div>
    }
}
