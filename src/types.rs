use serde::{Deserialize, Deserializer, Serialize};

use crate::config;

/// Backend text fields may come back as `null`; treat that like an empty cell.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Titre", default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "Auteur", default, deserialize_with = "null_as_empty")]
    pub author: String,
    /// `YYYY-MM-DD`, compared as a plain string.
    #[serde(rename = "Date", default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(rename = "Durée", default, deserialize_with = "null_as_empty")]
    pub duration: String,
    /// `"Vu"` when watched, empty otherwise.
    #[serde(rename = "Statut", default, deserialize_with = "null_as_empty")]
    pub status: String,
    /// Comma-separated tags.
    #[serde(rename = "Categorie", default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(rename = "favori", default)]
    pub favorite: bool,
}

impl VideoRecord {
    pub fn is_watched(&self) -> bool {
        self.status == config::WATCHED_MARKER
    }

    pub fn is_uncategorized(&self) -> bool {
        self.category.trim().is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        split_tags(&self.category)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }

    /// The `v` query parameter of the watch URL.
    pub fn video_id(&self) -> Option<String> {
        let url = reqwest::Url::parse(&self.url).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }

    pub fn thumbnail_url(&self) -> Option<String> {
        self.video_id().map(|id| config::thumbnail_url(&id))
    }
}

/// Trimmed, non-empty tags of a category string.
pub fn split_tags(category: &str) -> impl Iterator<Item = &str> {
    category.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Partial update for one record; absent fields are left alone server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "favori", skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl UpdateRequest {
    pub fn favorite(url: &str, favorite: bool) -> Self {
        Self {
            url: url.to_string(),
            status: None,
            category: None,
            favorite: Some(favorite),
        }
    }

    pub fn metadata(url: &str, status: Option<String>, category: Option<String>) -> Self {
        Self {
            url: url.to_string(),
            status,
            category,
            favorite: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub playlist_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Watched,
    #[default]
    Unwatched,
    Favorites,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Unwatched,
        StatusFilter::Watched,
        StatusFilter::Favorites,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Watched => "Watched",
            StatusFilter::Unwatched => "To watch",
            StatusFilter::Favorites => "Favorites",
        }
    }

    pub fn matches(self, video: &VideoRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Watched => video.is_watched(),
            StatusFilter::Unwatched => !video.is_watched(),
            StatusFilter::Favorites => video.favorite,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Uncategorized,
    Tag(String),
}

impl CategoryFilter {
    /// Maps a `<select>` value back to a filter.
    pub fn from_value(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            "uncategorized" => CategoryFilter::Uncategorized,
            tag => CategoryFilter::Tag(tag.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Uncategorized => "uncategorized",
            CategoryFilter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, video: &VideoRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Uncategorized => video.is_uncategorized(),
            CategoryFilter::Tag(tag) => video.has_tag(tag),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Backend (playlist) order.
    #[default]
    Default,
    DateDesc,
    DateAsc,
    DurationDesc,
    DurationAsc,
    Author,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Default,
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::DurationDesc,
        SortKey::DurationAsc,
        SortKey::Author,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::DateDesc => "date_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::DurationDesc => "duration_desc",
            SortKey::DurationAsc => "duration_asc",
            SortKey::Author => "author",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.value() == value)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Playlist order",
            SortKey::DateDesc => "Newest first",
            SortKey::DateAsc => "Oldest first",
            SortKey::DurationDesc => "Longest first",
            SortKey::DurationAsc => "Shortest first",
            SortKey::Author => "Author (A-Z)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Videos,
    Channels,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Videos => "Videos",
            View::Channels => "Channels",
        }
    }
}
