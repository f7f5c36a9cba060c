use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::toolbar::Toolbar;
use crate::components::video_card::VideoCard;
use crate::projection;
use crate::state::{LoadState, Tracker};

#[derive(Properties, PartialEq)]
pub struct VideosPageProps {
    pub tracker: UseReducerHandle<Tracker>,
}

#[function_component(VideosPage)]
pub fn videos_page(props: &VideosPageProps) -> Html {
    let tracker = &props.tracker;
    let dispatcher = tracker.dispatcher();

    let body = match &tracker.load {
        LoadState::Failed(_) => html! {
            <p class="error">{"Error loading videos. Please check backend."}</p>
        },
        LoadState::Loading if tracker.videos.is_empty() => html! {
            <p class="loading">{"Loading videos..."}</p>
        },
        _ => {
            let view = projection::project(tracker);
            html! {
                <>
                    <div id="videoContainer" class="video-grid">
                        { for view.cards.into_iter().map(|card| html! {
                            <VideoCard key={card.url.clone()} {card} dispatcher={dispatcher.clone()} />
                        }) }
                    </div>
                    <Pagination view={view.pagination} dispatcher={dispatcher.clone()} />
                </>
            }
        }
    };

    html! {
        <section id="videosView">
            <Toolbar
                search={AttrValue::from(tracker.search.clone())}
                filter={tracker.filter}
                category={tracker.category.clone()}
                sort={tracker.sort}
                categories={tracker.categories.clone()}
                dispatcher={dispatcher.clone()}
            />
            <datalist id="category-suggestions">
                { for tracker.categories.iter().map(|c| html! { <option value={c.clone()} /> }) }
            </datalist>
            { body }
        </section>
    }
}
