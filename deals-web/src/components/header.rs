use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    /// Section id the title links back to
    pub home: AttrValue,
    #[prop_or_default]
    pub show_sidebar_toggle: bool,
    #[prop_or_default]
    pub on_toggle_sidebar: Callback<()>,
    /// Navigation controls
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <header role="banner">
            <div class="header-content">
                if p.show_sidebar_toggle {
                    <button class="ui icon button" data-role="sidebar-toggle" aria-label="Menu" onclick={toggle}>
                        <i class="bars icon"></i>
                    </button>
                }
                <h1 class="ui header"><a href={format!("#{}", p.home)}>{ p.title.clone() }</a></h1>
            </div>
            <nav aria-label="Deals">
                { for p.children.iter() }
            </nav>
        </header>
    }
}
