use crate::app::handlers;
use crate::app::state::AppState;
use crate::components::deal_list::DealList;
use crate::components::header::Header;
use crate::components::nav_menu::NavMenu;
use crate::components::page_section::PageSection;
use crate::components::sidebar::Sidebar;
use deals_core::{FilterState, SiteConfig, SortState};
use yew::prelude::*;

pub fn render_app(state: &AppState, site: &SiteConfig, active_section: usize) -> Html {
    let features = site.features;
    let on_filter = handlers::filter_callback(&state.view);
    let on_sort = handlers::sort_callback(&state.view);
    let (categories, filter, sort): (Vec<String>, FilterState, SortState) =
        (*state.view).as_ref().map_or_else(Default::default, |view| {
            (view.categories().to_vec(), view.filter().clone(), view.sort())
        });

    let menu = |role: &'static str| {
        html! {
            <NavMenu
                role={role}
                categories={categories.clone()}
                filter={filter.clone()}
                sort={sort}
                on_filter={on_filter.clone()}
                on_sort={on_sort.clone()} />
        }
    };

    let deals = (*state.view).as_ref().map_or_else(
        || html! { <div class="ui cards" data-role="deals"></div> },
        |view| html! { <DealList view={view.clone()} show_code={features.discount_code} /> },
    );

    let extra_sections = if features.hash_pages {
        site.sections.as_slice()
    } else {
        &[]
    };

    html! {
        <>
            <Header
                title={site.title.clone()}
                home={site.default_section.clone()}
                show_sidebar_toggle={features.sidebar}
                on_toggle_sidebar={handlers::sidebar_toggle(&state.sidebar_open)}>
                { menu("nav-menu") }
            </Header>
            if features.sidebar {
                <Sidebar
                    open={*state.sidebar_open}
                    on_close={handlers::sidebar_close(&state.sidebar_open)}>
                    { menu("sidebar") }
                </Sidebar>
            }
            <main id="main" role="main" aria-busy={state.is_loading().to_string()}>
                <PageSection id={site.default_section.clone()} visible={active_section == 0}>
                    { deals }
                </PageSection>
                { for extra_sections.iter().enumerate().map(|(i, section)| html! {
                    <PageSection
                        key={section.id.clone()}
                        id={section.id.clone()}
                        title={Some(AttrValue::from(section.title.clone()))}
                        visible={active_section == i + 1}>
                        { for section.paragraphs.iter().map(|p| html! { <p>{ p.clone() }</p> }) }
                    </PageSection>
                }) }
            </main>
        </>
    }
}
