//! Pure projection of the tracker state into what the videos page draws.

use crate::config::WATCHED_MARKER;
use crate::state::Tracker;
use crate::types::VideoRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub url: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub duration: String,
    pub thumbnail: Option<String>,
    pub favorite: bool,
    pub watched: bool,
    pub category: String,
}

impl CardView {
    pub fn from_record(v: &VideoRecord) -> Self {
        Self {
            url: v.url.clone(),
            title: v.title.clone(),
            author: v.author.clone(),
            date: v.date.clone(),
            duration: v.duration.clone(),
            thumbnail: v.thumbnail_url(),
            favorite: v.favorite,
            watched: v.is_watched(),
            category: v.category.clone(),
        }
    }

    pub fn star(&self) -> &'static str {
        if self.favorite { "★" } else { "☆" }
    }

    pub fn seen_label(&self) -> &'static str {
        if self.watched { "Seen" } else { "Mark Seen" }
    }

    /// Status to send when the watched toggle is pressed.
    pub fn next_status(&self) -> &'static str {
        if self.watched { "" } else { WATCHED_MARKER }
    }

    pub fn class(&self) -> &'static str {
        if self.watched { "card watched" } else { "card" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PaginationView {
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoListView {
    pub cards: Vec<CardView>,
    pub pagination: PaginationView,
    /// Records matching the filters across all pages.
    pub matching: usize,
}

pub fn project(tracker: &Tracker) -> VideoListView {
    let rows = tracker.visible();
    let window = tracker.window(rows.len());
    let cards = window.slice(&rows).iter().map(|v| CardView::from_record(v)).collect();
    VideoListView {
        cards,
        pagination: PaginationView {
            page: window.page,
            total_pages: window.total_pages,
            has_prev: window.has_prev(),
            has_next: window.has_next(),
        },
        matching: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use crate::types::{SortKey, StatusFilter};

    fn video(n: usize) -> VideoRecord {
        VideoRecord {
            url: format!("https://www.youtube.com/watch?v=id{n}"),
            title: format!("Clip {n}"),
            author: format!("Author {}", n % 4),
            date: format!("2023-{:02}-01", n % 12 + 1),
            duration: format!("{}:{:02}", n % 7, n % 60),
            status: String::new(),
            category: String::new(),
            favorite: false,
        }
    }

    fn tracker(n: usize) -> Tracker {
        let mut t = Tracker::default();
        t.apply(Action::Loaded((0..n).map(video).collect()));
        t
    }

    #[test]
    fn projection_is_idempotent() {
        let mut t = tracker(30);
        t.apply(Action::Sort(SortKey::DurationDesc));
        t.apply(Action::NextPage);
        let first = project(&t);
        let second = project(&t);
        assert_eq!(first, second);
        assert_eq!(first.cards.len(), 12);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut t = tracker(25);
        t.apply(Action::NextPage);
        t.apply(Action::NextPage);
        let view = project(&t);
        assert_eq!(view.pagination.page, 3);
        assert_eq!(view.cards.len(), 1);
        assert!(view.pagination.has_prev);
        assert!(!view.pagination.has_next);
        assert_eq!(view.pagination.label(), "Page 3 of 3");
        assert_eq!(view.matching, 25);
    }

    #[test]
    fn single_page_hides_pagination() {
        let view = project(&tracker(5));
        assert!(!view.pagination.is_visible());
        assert_eq!(view.pagination.total_pages, 1);
    }

    #[test]
    fn card_reflects_record() {
        let mut t = tracker(1);
        t.apply(Action::Filter(StatusFilter::All));
        let url = t.videos[0].url.clone();

        let card = project(&t).cards.remove(0);
        assert_eq!(card.thumbnail.as_deref(), Some("https://img.youtube.com/vi/id0/hqdefault.jpg"));
        assert_eq!((card.star(), card.seen_label(), card.next_status()), ("☆", "Mark Seen", "Vu"));
        assert_eq!(card.class(), "card");

        t.apply(Action::UpdateMetadata { url: url.clone(), status: Some("Vu".into()), category: None });
        t.apply(Action::ToggleFavorite(url));
        let card = project(&t).cards.remove(0);
        assert_eq!((card.star(), card.seen_label(), card.next_status()), ("★", "Seen", ""));
        assert_eq!(card.class(), "card watched");
    }

    #[test]
    fn double_favorite_toggle_restores_star() {
        let mut t = tracker(2);
        let url = t.videos[0].url.clone();
        let before = project(&t);
        t.apply(Action::ToggleFavorite(url.clone()));
        assert_eq!(project(&t).cards[0].star(), "★");
        t.apply(Action::ToggleFavorite(url));
        assert_eq!(project(&t).cards, before.cards);
    }
}
