use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ "ShoreSquad — rally your crew, clean our shores. 🌊" }</footer>
    }
}
