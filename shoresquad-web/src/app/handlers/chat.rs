use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

use shoresquad_core::{detect_intent, pick_response};

use crate::app::state::AppState;
use crate::components::ui::chat_widget::ChatMessage;

/// Milliseconds of fake "typing" before the bot answers.
const BOT_TYPING_MS: i32 = 800;

pub fn build_open_chat(state: &AppState) -> Callback<()> {
    let open = state.chat_open.clone();
    Callback::from(move |()| open.set(true))
}

pub fn build_close_chat(state: &AppState) -> Callback<()> {
    let open = state.chat_open.clone();
    Callback::from(move |()| open.set(false))
}

pub fn build_send_chat(state: &AppState) -> Callback<String> {
    let messages = state.chat_messages.clone();
    let busy = state.chat_busy.clone();
    Callback::from(move |text: String| {
        if *busy {
            return;
        }
        let mut thread = (*messages).clone();
        thread.push(ChatMessage {
            from_user: true,
            text: text.clone(),
            time: clock_label(),
        });
        messages.set(thread.clone());
        busy.set(true);

        let messages = messages.clone();
        let busy = busy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = crate::dom::sleep_ms(BOT_TYPING_MS).await;
            let intent = detect_intent(&text);
            let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
            thread.push(ChatMessage {
                from_user: false,
                text: pick_response(intent, &mut rng).to_string(),
                time: clock_label(),
            });
            messages.set(thread);
            busy.set(false);
        });
    })
}

fn clock_label() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}
