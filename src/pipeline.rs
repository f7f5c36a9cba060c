//! Filter, sort and paginate the in-memory video list.
//!
//! Everything here is a pure function of its inputs so the videos view can be
//! recomputed from scratch on every render.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::types::{CategoryFilter, SortKey, StatusFilter, VideoRecord};

/// The part of the view state that decides which records are visible.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub status: StatusFilter,
    pub search: &'a str,
    pub category: &'a CategoryFilter,
}

impl Query<'_> {
    pub fn matches(&self, video: &VideoRecord) -> bool {
        self.status.matches(video) && text_matches(self.search, video) && self.category.matches(video)
    }
}

/// Case-insensitive substring match against title or author.
pub fn text_matches(search: &str, video: &VideoRecord) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    video.title.to_lowercase().contains(&needle) || video.author.to_lowercase().contains(&needle)
}

pub fn filter<'a>(videos: &'a [VideoRecord], query: &Query<'_>) -> Vec<&'a VideoRecord> {
    videos.iter().filter(|v| query.matches(v)).collect()
}

/// Stable sort; `SortKey::Default` keeps the incoming order.
pub fn sort_videos(videos: &mut [&VideoRecord], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::DateDesc => videos.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::DateAsc => videos.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::DurationDesc => {
            videos.sort_by_key(|v| std::cmp::Reverse(parse_duration(&v.duration)))
        }
        SortKey::DurationAsc => videos.sort_by_key(|v| parse_duration(&v.duration)),
        SortKey::Author => videos.sort_by(|a, b| locale_compare(&a.author, &b.author)),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let ord = js_sys::JsString::from(a).locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new());
    ord.cmp(&0)
}

/// Without `Intl`: case-insensitive first, then by code point so the order is total.
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Seconds in a duration string.
///
/// Accepts `H:MM:SS`, `MM:SS` and `SS`, optionally prefixed by `"N day, "` or
/// `"N days, "`. Anything unparseable counts as zero.
pub fn parse_duration(raw: &str) -> u64 {
    let raw = raw.trim();
    let (days, clock) = match raw.split_once(',') {
        Some((prefix, rest)) => match parse_days(prefix) {
            Some(days) => (days, rest.trim()),
            None => return 0,
        },
        None => (0, raw),
    };
    if clock.is_empty() {
        return 0;
    }

    clock_seconds(clock)
        .and_then(|secs| days.checked_mul(86_400)?.checked_add(secs))
        .unwrap_or(0)
}

/// `None` on a malformed clock or one too large for `u64`.
fn clock_seconds(clock: &str) -> Option<u64> {
    let parts: Vec<u64> = clock
        .split(':')
        .map(|p| p.trim().parse::<u64>().ok())
        .collect::<Option<_>>()?;
    let (h, m, s) = match parts.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => (0, *m, *s),
        [s] => (0, 0, *s),
        _ => return None,
    };
    h.checked_mul(3600)?.checked_add(m.checked_mul(60)?)?.checked_add(s)
}

fn parse_days(prefix: &str) -> Option<u64> {
    let mut words = prefix.split_whitespace();
    let count = words.next()?.parse::<u64>().ok()?;
    match (words.next(), words.next()) {
        (Some("day" | "days"), None) => Some(count),
        _ => None,
    }
}

/// A page-sized window over `len` filtered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based, already clamped to `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn new(len: usize, requested_page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = len.div_ceil(page_size).max(1);
        let page = requested_page.clamp(1, total_pages);
        let start = ((page - 1) * page_size).min(len);
        let end = (start + page_size).min(len);
        Self { page, total_pages, start, end }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start..self.end]
    }
}

/// Distinct trimmed tags across all records, sorted.
pub fn collect_categories(videos: &[VideoRecord]) -> Vec<String> {
    videos
        .iter()
        .flat_map(VideoRecord::tags)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str, author: &str, duration: &str) -> VideoRecord {
        VideoRecord {
            url: format!("https://www.youtube.com/watch?v={title}"),
            title: title.into(),
            author: author.into(),
            date: String::new(),
            duration: duration.into(),
            status: String::new(),
            category: String::new(),
            favorite: false,
        }
    }

    fn sample() -> Vec<VideoRecord> {
        let mut a = video("Rust ownership", "Jon", "1:00");
        a.status = "Vu".into();
        a.category = "rust, talks".into();
        a.date = "2023-01-02".into();
        let mut b = video("Cooking pasta", "Chef", "0:30");
        b.favorite = true;
        b.category = " food ".into();
        b.date = "2024-06-01".into();
        let mut c = video("Async in depth", "rustacean", "2:00");
        c.date = "2022-12-31".into();
        let mut d = video("Guitar lesson", "Jon", "");
        d.status = "Vu".into();
        d.favorite = true;
        d.category = "music,talks".into();
        d.date = "2024-01-15".into();
        vec![a, b, c, d]
    }

    #[test]
    fn duration_parsing() {
        assert_eq!(parse_duration("1:02:03"), 3723);
        assert_eq!(parse_duration("04:05"), 245);
        assert_eq!(parse_duration("9"), 9);
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("abc"), 0);
        assert_eq!(parse_duration("1:xx"), 0);
        assert_eq!(parse_duration("1:2:3:4"), 0);
        assert_eq!(parse_duration("1 day, 0:00:03"), 86_403);
        assert_eq!(parse_duration("2 days, 1:00:00"), 2 * 86_400 + 3600);
        assert_eq!(parse_duration("soon, 1:00"), 0);
        assert_eq!(parse_duration("99999999999999999:00:00"), 0);
        assert_eq!(parse_duration("307445734561825861:00"), 0);
        assert_eq!(parse_duration("213503982334602 days, 0:00:00"), 0);
        assert_eq!(parse_duration("18446744073709551615"), u64::MAX);
    }

    #[test]
    fn filter_is_the_conjunction_of_all_predicates() {
        let videos = sample();
        let statuses = StatusFilter::ALL;
        let searches = ["", "jon", "RUST", "zzz"];
        let categories = [
            CategoryFilter::All,
            CategoryFilter::Uncategorized,
            CategoryFilter::Tag("talks".into()),
            CategoryFilter::Tag("food".into()),
        ];
        for status in statuses {
            for search in searches {
                for category in &categories {
                    let query = Query { status, search, category };
                    let got: Vec<&str> = filter(&videos, &query).iter().map(|v| v.title.as_str()).collect();
                    let expected: Vec<&str> = videos
                        .iter()
                        .filter(|v| status.matches(v) && text_matches(search, v) && category.matches(v))
                        .map(|v| v.title.as_str())
                        .collect();
                    assert_eq!(got, expected, "{status:?} {search:?} {category:?}");
                }
            }
        }
    }

    #[test]
    fn filter_examples() {
        let videos = sample();
        let all = CategoryFilter::All;
        let unwatched = Query { status: StatusFilter::Unwatched, search: "", category: &all };
        let titles: Vec<_> = filter(&videos, &unwatched).iter().map(|v| v.title.clone()).collect();
        assert_eq!(titles, ["Cooking pasta", "Async in depth"]);

        let by_author = Query { status: StatusFilter::All, search: "RUSTACEAN", category: &all };
        assert_eq!(filter(&videos, &by_author).len(), 1);

        let talks = CategoryFilter::Tag("talks".into());
        let favorite_talks = Query { status: StatusFilter::Favorites, search: "", category: &talks };
        let titles: Vec<_> = filter(&videos, &favorite_talks).iter().map(|v| v.title.clone()).collect();
        assert_eq!(titles, ["Guitar lesson"]);

        let none = CategoryFilter::Uncategorized;
        let uncategorized = Query { status: StatusFilter::All, search: "", category: &none };
        let titles: Vec<_> = filter(&videos, &uncategorized).iter().map(|v| v.title.clone()).collect();
        assert_eq!(titles, ["Async in depth"]);
    }

    #[test]
    fn sort_by_duration_descending() {
        let videos = vec![video("a", "x", "1:00"), video("b", "x", "0:30"), video("c", "x", "2:00")];
        let mut refs: Vec<&VideoRecord> = videos.iter().collect();
        sort_videos(&mut refs, SortKey::DurationDesc);
        let durations: Vec<_> = refs.iter().map(|v| v.duration.as_str()).collect();
        assert_eq!(durations, ["2:00", "1:00", "0:30"]);

        sort_videos(&mut refs, SortKey::DurationAsc);
        let durations: Vec<_> = refs.iter().map(|v| v.duration.as_str()).collect();
        assert_eq!(durations, ["0:30", "1:00", "2:00"]);
    }

    #[test]
    fn sort_by_date_and_author() {
        let videos = sample();
        let mut refs: Vec<&VideoRecord> = videos.iter().collect();
        sort_videos(&mut refs, SortKey::DateDesc);
        let dates: Vec<_> = refs.iter().map(|v| v.date.as_str()).collect();
        assert_eq!(dates, ["2024-06-01", "2024-01-15", "2023-01-02", "2022-12-31"]);

        sort_videos(&mut refs, SortKey::DateAsc);
        assert_eq!(refs[0].date, "2022-12-31");

        sort_videos(&mut refs, SortKey::Author);
        let authors: Vec<_> = refs.iter().map(|v| v.author.as_str()).collect();
        assert_eq!(authors, ["Chef", "Jon", "Jon", "rustacean"]);
    }

    #[test]
    fn default_sort_keeps_backend_order() {
        let videos = sample();
        let mut refs: Vec<&VideoRecord> = videos.iter().collect();
        sort_videos(&mut refs, SortKey::Default);
        let titles: Vec<_> = refs.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["Rust ownership", "Cooking pasta", "Async in depth", "Guitar lesson"]);
    }

    #[test]
    fn page_window_counts_and_last_page() {
        for n in [0usize, 1, 11, 12, 13, 24, 25, 100] {
            let p = 12;
            let first = PageWindow::new(n, 1, p);
            let expected_pages = n.div_ceil(p).max(1);
            assert_eq!(first.total_pages, expected_pages, "n={n}");

            let last = PageWindow::new(n, expected_pages, p);
            assert_eq!(last.end - last.start, n - p * (expected_pages - 1), "n={n}");
        }
    }

    #[test]
    fn page_window_clamps_to_last_page() {
        let window = PageWindow::new(13, 5, 12);
        assert_eq!(window.page, 2);
        assert_eq!((window.start, window.end), (12, 13));
        assert!(window.has_prev());
        assert!(!window.has_next());

        let empty = PageWindow::new(0, 3, 12);
        assert_eq!((empty.page, empty.total_pages, empty.start, empty.end), (1, 1, 0, 0));
        assert!(!empty.has_prev() && !empty.has_next());
    }

    #[test]
    fn categories_are_distinct_sorted_and_trimmed() {
        let videos = sample();
        assert_eq!(collect_categories(&videos), ["food", "music", "rust", "talks"]);
    }
}
