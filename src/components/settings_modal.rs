use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api::ApiClient;
use crate::log;
use crate::types::Settings;

#[derive(Properties, PartialEq)]
pub struct SettingsModalProps {
    pub settings: Settings,
    pub on_close: Callback<()>,
    /// Fired after the backend accepted the new settings.
    pub on_saved: Callback<()>,
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    let settings = use_state(|| props.settings.clone());
    let saving = use_state(|| false);

    let on_api_key_change = {
        let settings = settings.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            let mut s = (*settings).clone();
            s.api_key = value;
            settings.set(s);
        })
    };

    let on_playlist_change = {
        let settings = settings.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            let mut s = (*settings).clone();
            s.playlist_id = value;
            settings.set(s);
        })
    };

    let on_save = {
        let settings = settings.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |_| {
            let settings_to_save = (*settings).clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            saving.set(true);
            spawn_local(async move {
                match ApiClient::default().save_settings(&settings_to_save).await {
                    Ok(()) => {
                        log::info("settings_saved", serde_json::json!({ "playlist_id": settings_to_save.playlist_id }));
                        on_saved.emit(());
                    }
                    Err(e) => {
                        log::error("settings_save_failed", serde_json::json!({ "error": e.to_string() }));
                        alert("Failed to save settings");
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    // Only clicks on the backdrop itself close the dialog.
    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                cb.emit(());
            }
        })
    };

    html! {
        <div id="settingsModal" class="modal active" onclick={on_backdrop}>
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{"Settings"}</h2>
                    <button class="close-modal icon-btn" onclick={on_close} title="Close">
                        <Icon icon_id={IconId::LucideX} width={"20"} height={"20"} />
                    </button>
                </div>
                <div class="settings-form">
                    <div class="form-group">
                        <label for="apiKeyInput">{"YouTube API key"}</label>
                        <input type="password" id="apiKeyInput" value={settings.api_key.clone()} oninput={on_api_key_change} />
                    </div>
                    <div class="form-group">
                        <label for="playlistIdInput">{"Playlist ID"}</label>
                        <input type="text" id="playlistIdInput" value={settings.playlist_id.clone()} oninput={on_playlist_change} />
                    </div>
                    <div class="form-group center">
                        <button id="saveSettingsBtn" onclick={on_save} disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save Changes" } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
