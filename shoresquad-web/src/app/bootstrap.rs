use yew::prelude::*;

use crate::app::state::AppState;

/// One-shot startup work: restore the persisted snapshot, then ask for a
/// geolocation fix. Effects are skipped during server-side rendering, so
/// this only ever runs in the browser.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |_| {
        state.with_store(shoresquad_core::SquadStore::hydrate);

        let geo_state = state.clone();
        crate::geo::request_user_location(move |point| {
            geo_state.with_store(|store| store.set_user_location(point));
        });
        || {}
    });
}
