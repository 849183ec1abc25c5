use std::cell::RefCell;
use std::rc::Rc;

use shoresquad_core::{BeachCatalog, SeedData, SquadStore};
use yew::prelude::*;

use crate::components::toast::ToastList;
use crate::components::ui::chat_widget::ChatMessage;
use crate::platform::{BrowserTime, LocalStorageBackend};
use crate::weather::ForecastState;

/// The store as this frontend runs it: localStorage persistence, JS clock.
pub type Store = SquadStore<LocalStorageBackend, BrowserTime>;

/// Which record an open editor dialog is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTarget {
    New,
    Existing(usize),
}

/// Hook-assembled application state.
///
/// The store lives in one shared cell so every callback closure mutates the
/// same live data; `revision` only exists to schedule a re-render after a
/// mutation.
#[derive(Clone)]
pub struct AppState {
    pub store: Rc<RefCell<Store>>,
    pub revision: UseStateHandle<u32>,
    pub beaches: UseStateHandle<BeachCatalog>,
    pub selected_beach: UseStateHandle<String>,
    pub forecast: UseStateHandle<ForecastState>,
    pub toasts: UseReducerHandle<ToastList>,
    pub member_editor: UseStateHandle<Option<EditorTarget>>,
    pub cleanup_editor: UseStateHandle<Option<EditorTarget>>,
    pub chat_open: UseStateHandle<bool>,
    pub chat_busy: UseStateHandle<bool>,
    pub chat_messages: UseStateHandle<Vec<ChatMessage>>,
}

impl AppState {
    /// Run a mutation against the live store and re-render.
    pub fn with_store<R>(&self, mutate: impl FnOnce(&mut Store) -> R) -> R {
        let result = mutate(&mut self.store.borrow_mut());
        self.revision.set(self.revision.wrapping_add(1));
        result
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    let beaches = use_state(BeachCatalog::load_from_static);
    let selected_beach = {
        let beaches = beaches.clone();
        use_state(move || {
            beaches
                .first()
                .map(|beach| beach.id.clone())
                .unwrap_or_default()
        })
    };
    AppState {
        store: use_mut_ref(|| Store::new(SeedData::sample(), LocalStorageBackend, BrowserTime)),
        revision: use_state(|| 0),
        beaches,
        selected_beach,
        forecast: use_state(ForecastState::default),
        toasts: use_reducer(ToastList::default),
        member_editor: use_state(|| None),
        cleanup_editor: use_state(|| None),
        chat_open: use_state(|| false),
        chat_busy: use_state(|| false),
        chat_messages: use_state(|| vec![ChatMessage::greeting()]),
    }
}
