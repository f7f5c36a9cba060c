use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::log;
use crate::state::{Action, Tracker};
use crate::theme::Theme;
use crate::types::View;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub view: View,
    pub dispatcher: UseReducerDispatcher<Tracker>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let tab = |view: View, icon: IconId| {
        let dispatcher = props.dispatcher.clone();
        let onclick = Callback::from(move |_| {
            log::info("navigate", serde_json::json!({ "to": view.label() }));
            dispatcher.dispatch(Action::SwitchView(view));
        });
        let class = classes!("tab-btn", (props.view == view).then_some("active"));
        html! {
            <button {class} {onclick}>
                <Icon icon_id={icon} width={"18"} height={"18"} />
                <span>{ view.label() }</span>
            </button>
        }
    };

    let on_theme = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_settings = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header class="app-header">
            <h1 class="app-title">{"My Videos"}</h1>
            <nav class="tabs">
                { tab(View::Videos, IconId::LucideVideo) }
                { tab(View::Channels, IconId::LucideUsers) }
            </nav>
            <div class="header-actions">
                <button id="themeToggle" class="icon-btn" onclick={on_theme} title="Toggle theme">
                    <span class="theme-icon">{ props.theme.icon() }</span>
                </button>
                <button id="settingsBtn" class="icon-btn" onclick={on_settings} title="Settings">
                    <Icon icon_id={IconId::LucideSettings} width={"22"} height={"22"} />
                </button>
            </div>
        </header>
    }
}
