use crate::app::state::AppState;
use crate::collate::PageCollator;
use crate::site::image_dir;
use deals_core::{DealRecord, DealsView};
use yew::prelude::*;

/// Build the page model once the deal list has arrived.
#[must_use]
pub fn build_view(deals: &[DealRecord]) -> DealsView {
    DealsView::from_records(deals, &image_dir(), &PageCollator::new())
}

/// Fetch the deal list once, then publish the built view.
///
/// A failed load is logged and leaves the page without deals.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let view = app_state.view.clone();
    let load_finished = app_state.load_finished.clone();
    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let url = crate::site::data_url();
            match crate::store::fetch_deals(&url).await {
                Ok(deals) => {
                    log::info!("Loaded {} deals from {url}", deals.len());
                    view.set(Some(build_view(&deals)));
                }
                Err(err) => log::error!("Failed to load deals from {url}: {err}"),
            }
            load_finished.set(true);
        });
        #[cfg(not(target_arch = "wasm32"))]
        drop((view, load_finished));
        || {}
    });
}
