use shoresquad_core::{ForecastDay, ForecastEntry};
use yew::prelude::*;

use super::helpers::icon_symbol;
use crate::weather::ForecastState;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub forecast: ForecastState,
    pub on_load: Callback<()>,
}

#[function_component(WeatherPanel)]
pub fn weather_panel(p: &Props) -> Html {
    let loading = matches!(p.forecast, ForecastState::Loading);
    let load = {
        let cb = p.on_load.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let body = match &p.forecast {
        ForecastState::Idle => html! {
            <p class="weather-hint">{ "Check the 4-day outlook before you pick a cleanup day." }</p>
        },
        ForecastState::Loading => html! {
            <p class="weather-loading" role="status">{ "Loading weather forecast…" }</p>
        },
        ForecastState::Failed(message) => html! {
            <div class="error-panel" role="alert">
                <strong>{ "⚠️ Error Loading Weather" }</strong>
                <p>{ message.clone() }</p>
            </div>
        },
        ForecastState::Ready { updated, entries } => {
            if entries.is_empty() {
                html! { <div class="error-panel">{ "No forecast data available" }</div> }
            } else {
                html! {
                    <div class="weather-info">
                        {
                            updated.as_ref().map_or_else(Html::default, |stamp| html! {
                                <p class="weather-updated">{ "Last updated: " }{ stamp.clone() }</p>
                            })
                        }
                        <div class="forecast-grid" role="list">
                            { for entries.iter().map(forecast_card) }
                        </div>
                    </div>
                }
            }
        }
    };

    html! {
        <section id="weather" class="panel weather-panel" aria-label="Weather Vibes">
            <div class="panel-head">
                <h2>{ "Weather Vibes" }</h2>
                <button id="load-weather-btn" onclick={load} disabled={loading}>
                    { "🌦️ Load 4-Day Forecast" }
                </button>
            </div>
            { body }
        </section>
    }
}

fn forecast_card(entry: &ForecastEntry) -> Html {
    match entry {
        ForecastEntry::Unavailable { index } => html! {
            <div class="forecast-day error-day" role="listitem">
                <p>{ format!("Day {} unavailable", index + 1) }</p>
            </div>
        },
        ForecastEntry::Day(day) => day_card(day),
    }
}

fn day_card(day: &ForecastDay) -> Html {
    html! {
        <div class="forecast-day" role="listitem">
            <div class="forecast-date">{ &day.label }</div>
            <div class="forecast-icon" aria-hidden="true">{ icon_symbol(day.icon) }</div>
            <div class="forecast-condition">{ &day.condition }</div>
            <div class="forecast-details">
                <div class="detail-item">
                    <span class="detail-label">{ "🌡️ Temp:" }</span>
                    <span class="detail-value">{ format!("{}°C - {}°C", day.temp_high, day.temp_low) }</span>
                </div>
                <div class="detail-item">
                    <span class="detail-label">{ "💧 Humidity:" }</span>
                    <span class="detail-value">{ format!("{}% - {}%", day.humidity_high, day.humidity_low) }</span>
                </div>
                <div class="detail-item">
                    <span class="detail-label">{ "💨 Wind:" }</span>
                    <span class="detail-value">{ format!("{}-{} km/h {}", day.wind_speed_low, day.wind_speed_high, day.wind_direction) }</span>
                </div>
            </div>
        </div>
    }
}
