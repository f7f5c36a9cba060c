use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::state::{Action, Tracker};
use crate::types::{CategoryFilter, SortKey, StatusFilter};

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub search: AttrValue,
    pub filter: StatusFilter,
    pub category: CategoryFilter,
    pub sort: SortKey,
    pub categories: Vec<String>,
    pub dispatcher: UseReducerDispatcher<Tracker>,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let on_search = {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            dispatcher.dispatch(Action::Search(value));
        })
    };

    let on_sort = {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
            dispatcher.dispatch(Action::Sort(SortKey::from_value(&value)));
        })
    };

    let on_category = {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
            dispatcher.dispatch(Action::Category(CategoryFilter::from_value(&value)));
        })
    };

    let on_reset = {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_| dispatcher.dispatch(Action::ResetFilters))
    };

    let filter_buttons = StatusFilter::ALL.into_iter().map(|f| {
        let dispatcher = props.dispatcher.clone();
        let onclick = Callback::from(move |_| dispatcher.dispatch(Action::Filter(f)));
        let class = classes!("filter-btn", (props.filter == f).then_some("active"));
        html! { <button {class} {onclick}>{ f.label() }</button> }
    });

    html! {
        <div class="controls">
            <input
                id="searchInput"
                type="search"
                placeholder="Search title or channel..."
                value={props.search.clone()}
                oninput={on_search}
            />
            <div class="filters">
                { for filter_buttons }
            </div>
            <select id="sortSelect" onchange={on_sort}>
                { for SortKey::ALL.into_iter().map(|k| html! {
                    <option value={k.value()} selected={props.sort == k}>{ k.label() }</option>
                }) }
            </select>
            <select id="categoryFilter" onchange={on_category}>
                <option value="all" selected={props.category == CategoryFilter::All}>{"All Categories"}</option>
                <option value="uncategorized" selected={props.category == CategoryFilter::Uncategorized}>{"Uncategorized"}</option>
                { for props.categories.iter().map(|c| html! {
                    <option value={c.clone()} selected={matches!(&props.category, CategoryFilter::Tag(t) if t == c)}>
                        { format!("🏷️ {c}") }
                    </option>
                }) }
            </select>
            <button class="icon-btn reset-btn" onclick={on_reset} title="Reset filters">
                <Icon icon_id={IconId::LucideRotateCcw} width={"18"} height={"18"} />
            </button>
        </div>
    }
}
