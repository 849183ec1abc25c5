use yew::prelude::*;

use shoresquad_core::{normalize, updated_label};

use crate::app::handlers::notify;
use crate::app::state::AppState;
use crate::components::toast::ToastKind;
use crate::weather::{ForecastState, fetch_four_day_forecast};

pub fn build_load_forecast(state: &AppState) -> Callback<()> {
    let forecast = state.forecast.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        // In-flight guard: the panel disables its button too, but the state
        // check keeps a second entry point from double-fetching.
        if matches!(*forecast, ForecastState::Loading) {
            return;
        }
        forecast.set(ForecastState::Loading);

        let forecast = forecast.clone();
        let toasts = toasts.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_four_day_forecast().await {
                Ok(raw) => {
                    let entries = normalize(&raw);
                    let updated = updated_label(&raw);
                    forecast.set(ForecastState::Ready { updated, entries });
                    notify(
                        &toasts,
                        ToastKind::Success,
                        "Weather forecast loaded successfully!",
                    );
                }
                Err(e) => {
                    forecast.set(ForecastState::Failed(e.to_string()));
                    notify(&toasts, ToastKind::Error, format!("Weather Error: {e}"));
                }
            }
        });
    })
}
