use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::projection::CardView;
use crate::state::{Action, Tracker};

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub card: CardView,
    pub dispatcher: UseReducerDispatcher<Tracker>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let card = &props.card;

    let on_favorite = {
        let dispatcher = props.dispatcher.clone();
        let url = card.url.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(Action::ToggleFavorite(url.clone()));
        })
    };

    let on_seen = {
        let dispatcher = props.dispatcher.clone();
        let url = card.url.clone();
        let next = card.next_status().to_string();
        Callback::from(move |_| {
            dispatcher.dispatch(Action::UpdateMetadata {
                url: url.clone(),
                status: Some(next.clone()),
                category: None,
            });
        })
    };

    let on_category = {
        let dispatcher = props.dispatcher.clone();
        let url = card.url.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            dispatcher.dispatch(Action::UpdateMetadata {
                url: url.clone(),
                status: None,
                category: Some(value),
            });
        })
    };

    html! {
        <div class={card.class()}>
            <div class="card-image">
                <button class={classes!("fav-btn", card.favorite.then_some("active"))} onclick={on_favorite} title="Favorite">
                    { card.star() }
                </button>
                { match &card.thumbnail {
                    Some(src) => html! { <img src={src.clone()} alt={card.title.clone()} loading="lazy" /> },
                    None => html! { <div class="no-thumbnail" /> },
                }}
                <span class="duration-tag">{ card.duration.clone() }</span>
            </div>
            <div class="card-content">
                <div class="card-title" title={card.title.clone()}>{ card.title.clone() }</div>
                <div class="card-meta">
                    <span>{ format!("👤 {}", card.author) }</span><br />
                    <span>{ format!("📅 {}", card.date) }</span>
                </div>
                <input
                    type="text"
                    class="cat-input"
                    placeholder="🏷️ Add tags..."
                    value={card.category.clone()}
                    list="category-suggestions"
                    onchange={on_category}
                />
                <div class="card-actions">
                    <a href={card.url.clone()} target="_blank" rel="noopener" class="action-btn watch-btn">
                        <Icon icon_id={IconId::LucideExternalLink} width={"14"} height={"14"} />
                        {" Watch"}
                    </a>
                    <button class={classes!("action-btn", "seen-btn", card.watched.then_some("active"))} onclick={on_seen}>
                        { card.seen_label() }
                    </button>
                </div>
            </div>
        </div>
    }
}
