use shoresquad_core::Beach;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub beaches: Vec<Beach>,
    pub selected_id: String,
    /// Kilograms logged at the selected beach, from the cleanup history.
    pub recent_kg: f64,
    pub on_select: Callback<String>,
}

#[function_component(BeachMap)]
pub fn beach_map(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_select.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };

    let selected = p
        .beaches
        .iter()
        .find(|beach| beach.id == p.selected_id)
        .or_else(|| p.beaches.first());

    let Some(beach) = selected else {
        return html! {
            <section id="map" class="panel map-panel" aria-label="Beach map">
                <h2>{ "Next Cleanup Spot" }</h2>
                <p class="empty-note">{ "No beaches configured." }</p>
            </section>
        };
    };

    html! {
        <section id="map" class="panel map-panel" aria-label="Beach map">
            <div class="panel-head">
                <h2>{ "Next Cleanup Spot" }</h2>
                <label for="beach-selector" class="sr-only">{ "Choose a beach" }</label>
                <select id="beach-selector" onchange={on_change} value={p.selected_id.clone()}>
                    { for p.beaches.iter().map(|b| html! {
                        <option value={b.id.clone()} selected={b.id == beach.id}>{ &b.name }</option>
                    }) }
                </select>
            </div>
            <div class="map-container">
                <iframe
                    id="map-iframe"
                    src={beach.map_url.clone()}
                    title={format!("Map of {}", beach.name)}
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                />
                <div class="beach-info">
                    <h3>{ "📍 Next Cleanup: " }{ &beach.name }</h3>
                    <p><strong>{ "Coordinates: " }</strong>{ format!("{}°N, {}°E", beach.lat, beach.lng) }</p>
                    <p><strong>{ "About: " }</strong>{ &beach.blurb }</p>
                    <p><strong>{ "Recent Impact: " }</strong>{ format!("{}kg logged here 🎉", p.recent_kg) }</p>
                </div>
            </div>
        </section>
    }
}
