use yew::prelude::*;

use crate::projection::PaginationView;
use crate::state::{Action, Tracker};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub view: PaginationView,
    pub dispatcher: UseReducerDispatcher<Tracker>,
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if !props.view.is_visible() {
        return html! { <div id="paginationContainer" class="pagination-controls" /> };
    }

    let step = |action: Action| {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_| {
            dispatcher.dispatch(action.clone());
            scroll_to_top();
        })
    };

    html! {
        <div id="paginationContainer" class="pagination-controls">
            <button class="page-btn" disabled={!props.view.has_prev} onclick={step(Action::PrevPage)}>
                {"← Previous"}
            </button>
            <span class="page-info">{ props.view.label() }</span>
            <button class="page-btn" disabled={!props.view.has_next} onclick={step(Action::NextPage)}>
                {"Next →"}
            </button>
        </div>
    }
}
