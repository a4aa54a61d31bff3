use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Sidebar)]
pub fn sidebar(p: &Props) -> Html {
    let class = classes!("ui", "vertical", "sidebar", p.open.then_some("visible"));
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <>
            <aside class={class} data-role="sidebar" data-open={p.open.to_string()} aria-hidden={(!p.open).to_string()}>
                { for p.children.iter() }
            </aside>
            if p.open {
                <div class="sidebar-overlay" role="presentation" onclick={close}></div>
            }
        </>
    }
}
