use deals_core::DealCard;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: DealCard,
    #[prop_or(true)]
    pub visible: bool,
    /// Render the discount code row
    #[prop_or_default]
    pub show_code: bool,
}

#[function_component(Deal)]
pub fn deal(p: &Props) -> Html {
    let card = &p.card;
    let class = classes!("ui", "card", "deal", card.featured.then_some("featured"));
    let style = (!p.visible).then_some("display: none");

    html! {
        <div
            class={class}
            style={style}
            data-role="deal"
            data-index={card.index.to_string()}
            data-discount={card.discount.to_string()}
            data-title={card.title.clone()}>
            { card.image_src.as_ref().map(|src| html! {
                <div class="image">
                    <img src={src.clone()} alt={card.title.clone()} loading="lazy" />
                </div>
            }).unwrap_or_default() }
            <div class="content">
                <a class="header" data-role="product-link" href={card.href.clone()} target="_blank" rel="noopener noreferrer">
                    { card.title.clone() }
                </a>
                <div class="description">{ card.description.clone() }</div>
            </div>
            <div class="extra content">
                <div class="starts">{ "Starts " }<span class="datetime">{ card.starts_label.clone() }</span></div>
                <div class="ends">{ "Ends " }<span class="datetime">{ card.ends_label.clone() }</span></div>
                <div class="discount">{ card.discount_label.clone() }</div>
                if p.show_code {
                    <div class="code">{ "Code " }<span class="discount-code">{ card.code_label.clone() }</span></div>
                }
                <ul class="categories">
                    { for card.categories.iter().map(|category| html! {
                        <li data-category={category.clone()}>{ category.clone() }</li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
