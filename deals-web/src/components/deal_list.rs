use crate::components::deal_card::Deal;
use deals_core::DealsView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: DealsView,
    #[prop_or_default]
    pub show_code: bool,
}

/// Every card in the current order; filtered-out cards stay mounted but hidden.
#[function_component(DealList)]
pub fn deal_list(p: &Props) -> Html {
    let view = &p.view;
    html! {
        <div class="ui three stackable cards" data-role="deals">
            { for view.arranged().map(|card| html! {
                <Deal
                    key={card.index.to_string()}
                    card={card.clone()}
                    visible={view.is_visible(card)}
                    show_code={p.show_code} />
            }) }
        </div>
    }
}
