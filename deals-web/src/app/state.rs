use deals_core::DealsView;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    /// `None` until the deal list has loaded
    pub view: UseStateHandle<Option<DealsView>>,
    /// Set once the load has finished, whether or not it succeeded
    pub load_finished: UseStateHandle<bool>,
    pub sidebar_open: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        view: use_state(|| None::<DealsView>),
        load_finished: use_state(|| false),
        sidebar_open: use_state(|| false),
    }
}

impl AppState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !*self.load_finished
    }
}
