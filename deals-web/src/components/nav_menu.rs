use deals_core::{FilterSelection, FilterState, SortKind, SortState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Lowercase categories, one filter control each
    pub categories: Vec<String>,
    pub filter: FilterState,
    pub sort: SortState,
    pub on_filter: Callback<FilterSelection>,
    pub on_sort: Callback<SortKind>,
    /// `nav-menu` for the top bar, `sidebar` for the drawer copy
    #[prop_or(AttrValue::Static("nav-menu"))]
    pub role: AttrValue,
}

const SORT_CONTROLS: [(SortKind, &str); 2] = [
    (SortKind::Discount, "Biggest discount"),
    (SortKind::Title, "A to Z"),
];

fn item_class(active: bool) -> Classes {
    classes!("item", active.then_some("active"))
}

fn filter_click(on_filter: &Callback<FilterSelection>, selection: FilterSelection) -> Callback<MouseEvent> {
    let on_filter = on_filter.clone();
    Callback::from(move |_: MouseEvent| on_filter.emit(selection.clone()))
}

#[function_component(NavMenu)]
pub fn nav_menu(p: &Props) -> Html {
    let featured_active = p.filter.is_active(&FilterSelection::Featured);

    html! {
        <div class="ui menu" data-role={p.role.clone()}>
            <a
                class={item_class(featured_active)}
                data-role="filter"
                data-filter="featured"
                aria-pressed={featured_active.to_string()}
                onclick={filter_click(&p.on_filter, FilterSelection::Featured)}>
                { "Featured" }
            </a>
            { for SORT_CONTROLS.iter().map(|&(kind, label)| {
                let active = p.sort.is_active(kind);
                let on_sort = p.on_sort.clone();
                html! {
                    <a
                        class={item_class(active)}
                        data-role="sort"
                        data-sort={kind.as_str()}
                        aria-pressed={active.to_string()}
                        onclick={Callback::from(move |_: MouseEvent| on_sort.emit(kind))}>
                        { label }
                    </a>
                }
            }) }
            { for p.categories.iter().map(|category| {
                let selection = FilterSelection::category(category);
                let active = p.filter.is_active(&selection);
                let mut class = item_class(active);
                class.push("header");
                html! {
                    <a
                        class={class}
                        data-role="filter"
                        data-filter="category"
                        data-category={category.clone()}
                        aria-pressed={active.to_string()}
                        onclick={filter_click(&p.on_filter, selection)}>
                        <span>{ category.clone() }</span>
                    </a>
                }
            }) }
        </div>
    }
}
