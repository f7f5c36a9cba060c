use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::ApiClient;
use crate::components::header::Header;
use crate::components::settings_modal::SettingsModal;
use crate::config;
use crate::log;
use crate::pages::channels::ChannelsPage;
use crate::pages::videos::VideosPage;
use crate::state::{Action, Tracker};
use crate::sync::{self, Queued};
use crate::theme;
use crate::types::{Settings, View};

#[function_component(App)]
pub fn app() -> Html {
    let tracker = use_reducer(Tracker::default);
    let theme = use_state(theme::load);
    let settings_open = use_state(|| None::<Settings>);

    use_effect_once(|| {
        log::info("app_started", json!({ "api_base": config::api_base(), "version": config::APP_VERSION }));
        || ()
    });

    {
        use_effect_with(*theme, |current| {
            theme::apply(*current);
            || ()
        });
    }

    // Full list fetch; runs at mount and again on every Action::Refresh.
    {
        let dispatcher = tracker.dispatcher();
        use_effect_with(tracker.generation, move |generation| {
            let generation = *generation;
            spawn_local(async move {
                match ApiClient::default().fetch_videos().await {
                    Ok(videos) => dispatcher.dispatch(Action::Loaded(videos)),
                    Err(e) => {
                        log::error("videos_load_failed", json!({ "generation": generation, "error": e.to_string() }));
                        dispatcher.dispatch(Action::LoadFailed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    // Drain queued edits once they are on screen.
    {
        let pending: Vec<Queued> = tracker.outbox.pending().to_vec();
        let dispatcher = tracker.dispatcher();
        use_effect_with(tracker.outbox.last_seq(), move |_| {
            if let Some(last) = pending.last().map(|q| q.seq) {
                dispatcher.dispatch(Action::Dispatched(last));
                let backend = ApiClient::default();
                for queued in pending {
                    let backend = backend.clone();
                    spawn_local(async move {
                        sync::reconcile(&backend, queued.request).await;
                    });
                }
            }
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            theme::store(next);
            log::debug("theme_changed", json!({ "theme": next.as_str() }));
            theme.set(next);
        })
    };

    let on_open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_| {
            let settings_open = settings_open.clone();
            spawn_local(async move {
                match ApiClient::default().load_settings().await {
                    Ok(s) => settings_open.set(Some(s)),
                    Err(e) => log::error("settings_load_failed", json!({ "error": e.to_string() })),
                }
            });
        })
    };

    let on_close_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_| settings_open.set(None))
    };

    let on_settings_saved = {
        let settings_open = settings_open.clone();
        let dispatcher = tracker.dispatcher();
        Callback::from(move |_| {
            settings_open.set(None);
            dispatcher.dispatch(Action::Refresh);
        })
    };

    let body = match tracker.view {
        View::Videos => html! { <VideosPage tracker={tracker.clone()} /> },
        View::Channels => html! {
            <ChannelsPage channels={tracker.channels.clone()} dispatcher={tracker.dispatcher()} />
        },
    };

    let modal = match &*settings_open {
        Some(settings) => html! {
            <SettingsModal
                settings={settings.clone()}
                on_close={on_close_settings}
                on_saved={on_settings_saved}
            />
        },
        None => html! {},
    };

    html! {
        <>
            <Header
                view={tracker.view}
                dispatcher={tracker.dispatcher()}
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
                on_open_settings={on_open_settings}
            />
            <main class="container">
                { body }
            </main>
            { modal }
            <footer class="app-footer">{ config::version_label() }</footer>
        </>
    }
}
