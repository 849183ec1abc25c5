use shoresquad_core::CleanupEvent;
use yew::prelude::*;

use super::helpers::{beach_emoji, event_date_label};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cleanups: Vec<CleanupEvent>,
    pub on_schedule: Callback<()>,
    pub on_edit: Callback<usize>,
    pub on_remove: Callback<usize>,
}

#[function_component(CleanupPanel)]
pub fn cleanup_panel(p: &Props) -> Html {
    let schedule = {
        let cb = p.on_schedule.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let body = if p.cleanups.is_empty() {
        html! {
            <p class="empty-note">{ "No cleanups planned yet. Schedule your first cleanup! 📅" }</p>
        }
    } else {
        html! {
            <div class="cleanup-grid" role="list">
                { for p.cleanups.iter().enumerate().map(|(index, cleanup)| {
                    cleanup_card(index, cleanup, &p.on_edit, &p.on_remove)
                }) }
            </div>
        }
    };

    html! {
        <section id="cleanups" class="panel cleanup-panel" aria-label="Cleanup schedule">
            <div class="panel-head">
                <h2>{ "Cleanups" }</h2>
                <span class="stat-count" aria-label="Cleanup count">{ p.cleanups.len() }</span>
                <button id="start-cleanup-btn" onclick={schedule}>{ "📅 Log Cleanup" }</button>
            </div>
            { body }
        </section>
    }
}

fn cleanup_card(
    index: usize,
    cleanup: &CleanupEvent,
    on_edit: &Callback<usize>,
    on_remove: &Callback<usize>,
) -> Html {
    let edit = {
        let cb = on_edit.clone();
        Callback::from(move |_| cb.emit(index))
    };
    let remove = {
        let cb = on_remove.clone();
        Callback::from(move |_| cb.emit(index))
    };
    html! {
        <div class="cleanup-card" role="listitem">
            <div class="card-actions">
                <button
                    class="edit-cleanup-btn"
                    aria-label={format!("Edit cleanup at {}", cleanup.location)}
                    onclick={edit}
                >{ "✏️" }</button>
                <button
                    class="delete-cleanup-btn"
                    aria-label={format!("Remove cleanup at {}", cleanup.location)}
                    onclick={remove}
                >{ "🗑️" }</button>
            </div>
            <div class="cleanup-location">{ beach_emoji(&cleanup.location) }{ " " }{ &cleanup.location }</div>
            <div class="cleanup-info">
                <span class="cleanup-info-item">{ "📅 " }{ event_date_label(&cleanup.date) }</span>
                <span class="cleanup-info-item">{ "♻️ " }<strong>{ cleanup.kg }{ "kg" }</strong>{ " removed" }</span>
                <span class="cleanup-info-item">{ "👥 " }<strong>{ cleanup.members }</strong>{ " team members" }</span>
            </div>
        </div>
    }
}
