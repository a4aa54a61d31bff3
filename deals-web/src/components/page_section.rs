use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub visible: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Top-level page addressable by `#id`.
#[function_component(PageSection)]
pub fn page_section(p: &Props) -> Html {
    let style = (!p.visible).then_some("display: none");
    html! {
        <article id={p.id.clone()} class="page" style={style}>
            { p.title.as_ref().map(|title| html! { <h2 class="ui header">{ title.clone() }</h2> }).unwrap_or_default() }
            { for p.children.iter() }
        </article>
    }
}
