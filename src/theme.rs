use serde_json::json;

use crate::config::THEME_STORAGE_KEY;
use crate::log;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Unknown or missing values fall back to dark.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load() -> Theme {
    let saved = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::parse(saved.as_deref())
}

pub fn store(theme: Theme) {
    let Some(storage) = storage() else {
        log::warn("theme_storage_unavailable", json!({}));
        return;
    };
    if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
        log::warn("theme_store_failed", json!({ "theme": theme.as_str() }));
    }
}

/// Puts `light-theme` on `<body>` for the light theme, removes it otherwise.
pub fn apply(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.class_list().toggle_with_force("light-theme", theme == Theme::Light);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_dark() {
        assert_eq!(Theme::parse(Some("light")), Theme::Light);
        assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
        assert_eq!(Theme::parse(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::parse(None), Theme::Dark);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for t in [Theme::Light, Theme::Dark] {
            assert_ne!(t.toggled(), t);
            assert_eq!(t.toggled().toggled(), t);
            assert_eq!(Theme::parse(Some(t.as_str())), t);
        }
    }
}
