pub mod bootstrap;
pub mod handlers;
pub mod state;

use yew::prelude::*;

use shoresquad_core::{Beach, CleanupEvent, CrewMember};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast::ToastTray;
use crate::components::ui::beach_map::BeachMap;
use crate::components::ui::chat_widget::ChatWidget;
use crate::components::ui::cleanup_form::CleanupForm;
use crate::components::ui::cleanup_panel::CleanupPanel;
use crate::components::ui::impact_panel::ImpactPanel;
use crate::components::ui::member_form::MemberForm;
use crate::components::ui::squad_panel::SquadPanel;
use crate::components::ui::weather_panel::WeatherPanel;

use bootstrap::use_bootstrap;
use state::{EditorTarget, use_app_state};

#[function_component(App)]
pub fn app() -> Html {
    let app_state = use_app_state();
    use_bootstrap(&app_state);

    // Snapshot the store for this render pass.
    let (crew, cleanups, total_kg, months) = {
        let store = app_state.store.borrow();
        (
            store.state().crew.clone(),
            store.state().cleanups.clone(),
            store.state().total_impact_kg,
            store.monthly_impact(),
        )
    };

    let beaches: Vec<Beach> = app_state.beaches.beaches.clone();
    let selected_id = (*app_state.selected_beach).clone();
    let recent_kg: f64 = app_state
        .beaches
        .get(&selected_id)
        .map(|beach| {
            cleanups
                .iter()
                .filter(|event| event.location == beach.name)
                .map(|event| event.kg)
                .sum()
        })
        .unwrap_or_default();

    let member_editing: Option<CrewMember> = match *app_state.member_editor {
        Some(EditorTarget::Existing(index)) => crew.get(index).cloned(),
        _ => None,
    };
    let cleanup_editing: Option<CleanupEvent> = match *app_state.cleanup_editor {
        Some(EditorTarget::Existing(index)) => cleanups.get(index).cloned(),
        _ => None,
    };

    html! {
        <>
            <Header on_open_chat={handlers::chat::build_open_chat(&app_state)} />
            <div id="status-helper" class="sr-only" aria-live="polite"></div>
            <main id="main">
                <SquadPanel
                    crew={crew.clone()}
                    on_invite={handlers::crew::build_open_invite(&app_state)}
                    on_edit={handlers::crew::build_edit_member(&app_state)}
                    on_remove={handlers::crew::build_remove_member(&app_state)}
                />
                <CleanupPanel
                    cleanups={cleanups.clone()}
                    on_schedule={handlers::cleanup::build_open_schedule(&app_state)}
                    on_edit={handlers::cleanup::build_edit_cleanup(&app_state)}
                    on_remove={handlers::cleanup::build_remove_cleanup(&app_state)}
                />
                <ImpactPanel
                    total_kg={total_kg}
                    crew_count={crew.len()}
                    cleanup_count={cleanups.len()}
                    months={months}
                />
                <BeachMap
                    beaches={beaches.clone()}
                    selected_id={selected_id}
                    recent_kg={recent_kg}
                    on_select={handlers::map::build_select_beach(&app_state)}
                />
                <WeatherPanel
                    forecast={(*app_state.forecast).clone()}
                    on_load={handlers::weather::build_load_forecast(&app_state)}
                />
            </main>
            <Footer />
            <MemberForm
                open={app_state.member_editor.is_some()}
                editing={member_editing}
                on_submit={handlers::crew::build_submit_member(&app_state)}
                on_close={handlers::crew::build_close_member_form(&app_state)}
            />
            <CleanupForm
                open={app_state.cleanup_editor.is_some()}
                beaches={beaches}
                editing={cleanup_editing}
                on_submit={handlers::cleanup::build_submit_cleanup(&app_state)}
                on_close={handlers::cleanup::build_close_cleanup_form(&app_state)}
            />
            <ChatWidget
                open={*app_state.chat_open}
                messages={(*app_state.chat_messages).clone()}
                busy={*app_state.chat_busy}
                on_close={handlers::chat::build_close_chat(&app_state)}
                on_send={handlers::chat::build_send_chat(&app_state)}
            />
            <ToastTray
                toasts={app_state.toasts.items.clone()}
                on_dismiss={handlers::build_dismiss_toast(&app_state)}
            />
        </>
    }
}
