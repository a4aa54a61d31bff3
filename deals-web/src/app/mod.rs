use crate::site::SITE;
use std::rc::Rc;
use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod hash;
pub mod state;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let site = &*SITE;
    let section_ids: Rc<[String]> = site.section_ids().into_iter().map(String::from).collect();
    let active_section = hash::use_hash_section(
        section_ids,
        AttrValue::from(site.default_section.clone()),
        site.features.hash_pages,
    );

    view::render_app(&app_state, site, active_section)
}
