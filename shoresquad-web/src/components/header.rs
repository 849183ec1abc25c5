use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_open_chat: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let open_chat = {
        let cb = p.on_open_chat.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <div class="header-left">
                    <span class="brand" aria-hidden="true">{ "🌊" }</span>
                    <span class="brand-name">{ "ShoreSquad" }</span>
                </div>
                <nav aria-label="Sections" class="header-nav">
                    <a class="nav-link" href="#squad">{ "Squad" }</a>
                    <a class="nav-link" href="#cleanups">{ "Cleanups" }</a>
                    <a class="nav-link" href="#impact">{ "Impact" }</a>
                    <a class="nav-link" href="#map">{ "Map" }</a>
                    <a class="nav-link" href="#weather">{ "Weather" }</a>
                </nav>
                <div class="header-right">
                    <button id="chat-open-btn" onclick={open_chat}>{ "💬 Chat" }</button>
                </div>
            </div>
        </header>
    }
}
