//! Build-time and fixed settings of the frontend.

/// Cards per page in the videos view.
pub const VIDEOS_PER_PAGE: usize = 12;

/// `Statut` value the backend stores for a watched video.
pub const WATCHED_MARKER: &str = "Vu";

/// Local-storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Used when neither `TRACKER_API_BASE` nor a browser location is available.
const FALLBACK_API_BASE: &str = "http://localhost:8000";

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_DATE: Option<&str> = option_env!("VERGEN_BUILD_DATE");
pub const BUILD_TARGET: Option<&str> = option_env!("VERGEN_CARGO_TARGET_TRIPLE");
pub const RUSTC_VERSION: Option<&str> = option_env!("VERGEN_RUSTC_SEMVER");

pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

/// Base URL of the backend, without trailing slash.
///
/// `TRACKER_API_BASE` at build time wins; otherwise the page's own origin,
/// since the backend normally serves this bundle.
pub fn api_base() -> String {
    if let Some(base) = option_env!("TRACKER_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    browser_origin().unwrap_or_else(|| FALLBACK_API_BASE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn browser_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_origin() -> Option<String> {
    None
}

/// Footer text: crate version, then whatever build metadata vergen emitted.
pub fn version_label() -> String {
    format_version(APP_VERSION, BUILD_DATE, BUILD_TARGET, RUSTC_VERSION)
}

fn format_version(version: &str, date: Option<&str>, target: Option<&str>, rustc: Option<&str>) -> String {
    let rustc = rustc.map(|v| format!("rustc {v}"));
    let details: Vec<&str> = [date, target, rustc.as_deref()].into_iter().flatten().collect();
    if details.is_empty() {
        format!("v{version}")
    } else {
        format!("v{version} ({})", details.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_lists_the_emitted_build_metadata() {
        assert_eq!(
            format_version("0.1.0", Some("2024-05-01"), Some("wasm32-unknown-unknown"), Some("1.79.0")),
            "v0.1.0 (2024-05-01, wasm32-unknown-unknown, rustc 1.79.0)"
        );
        assert_eq!(format_version("0.1.0", None, None, Some("1.79.0")), "v0.1.0 (rustc 1.79.0)");
        assert_eq!(format_version("0.1.0", None, None, None), "v0.1.0");
    }

    #[test]
    fn api_base_falls_back_without_a_browser() {
        if option_env!("TRACKER_API_BASE").is_none() {
            assert_eq!(api_base(), FALLBACK_API_BASE);
        }
    }
}
