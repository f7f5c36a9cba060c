//! View state of the tracker and the transitions UI events map to.

use std::rc::Rc;

use serde_json::json;
use yew::Reducible;

use crate::channels::{self, ChannelSummary};
use crate::config::VIDEOS_PER_PAGE;
use crate::log;
use crate::pipeline::{self, PageWindow, Query};
use crate::sync::Outbox;
use crate::types::{CategoryFilter, SortKey, StatusFilter, UpdateRequest, VideoRecord, View};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch of the full list completed.
    Loaded(Vec<VideoRecord>),
    LoadFailed(String),
    /// Ask for a fresh fetch of the full list.
    Refresh,
    Search(String),
    Filter(StatusFilter),
    Category(CategoryFilter),
    Sort(SortKey),
    PrevPage,
    NextPage,
    SwitchView(View),
    SelectChannel(String),
    ResetFilters,
    ToggleFavorite(String),
    UpdateMetadata {
        url: String,
        status: Option<String>,
        category: Option<String>,
    },
    /// Queued updates up to this sequence number have been handed to the network.
    Dispatched(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracker {
    pub videos: Vec<VideoRecord>,
    pub load: LoadState,
    pub filter: StatusFilter,
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub view: View,
    /// Distinct tags, sorted; feeds the category selector and suggestions.
    pub categories: Vec<String>,
    pub channels: Vec<ChannelSummary>,
    /// Bumped on every requested refetch.
    pub generation: u32,
    pub outbox: Outbox,
}

impl Default for Tracker {
    fn default() -> Self {
        Self {
            videos: Vec::new(),
            load: LoadState::Loading,
            filter: StatusFilter::default(),
            search: String::new(),
            category: CategoryFilter::All,
            sort: SortKey::default(),
            page: 1,
            page_size: VIDEOS_PER_PAGE,
            view: View::Videos,
            categories: Vec::new(),
            channels: Vec::new(),
            generation: 0,
            outbox: Outbox::default(),
        }
    }
}

impl Tracker {
    pub fn query(&self) -> Query<'_> {
        Query {
            status: self.filter,
            search: &self.search,
            category: &self.category,
        }
    }

    /// Filtered and sorted records, before pagination.
    pub fn visible(&self) -> Vec<&VideoRecord> {
        let mut rows = pipeline::filter(&self.videos, &self.query());
        pipeline::sort_videos(&mut rows, self.sort);
        rows
    }

    pub fn window(&self, filtered: usize) -> PageWindow {
        PageWindow::new(filtered, self.page, self.page_size)
    }

    pub fn find(&self, url: &str) -> Option<&VideoRecord> {
        self.videos.iter().find(|v| v.url == url)
    }

    fn find_mut(&mut self, url: &str) -> Option<&mut VideoRecord> {
        self.videos.iter_mut().find(|v| v.url == url)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(videos) => {
                log::info("videos_loaded", json!({ "count": videos.len() }));
                self.videos = videos;
                self.load = LoadState::Ready;
                self.rebuild_categories();
                self.channels = channels::aggregate(&self.videos);
            }
            Action::LoadFailed(reason) => {
                self.load = LoadState::Failed(reason);
            }
            Action::Refresh => {
                self.generation = self.generation.wrapping_add(1);
            }
            Action::Search(search) => {
                self.search = search;
                self.page = 1;
            }
            Action::Filter(filter) => {
                self.filter = filter;
                self.page = 1;
            }
            Action::Category(category) => {
                self.category = category;
                self.page = 1;
            }
            Action::Sort(sort) => {
                self.sort = sort;
                self.page = 1;
            }
            Action::PrevPage => {
                self.page = self.page.saturating_sub(1).max(1);
            }
            Action::NextPage => {
                self.page += 1;
            }
            Action::SwitchView(view) => self.switch_view(view),
            Action::SelectChannel(author) => {
                log::info("channel_selected", json!({ "author": author }));
                self.search = author;
                self.page = 1;
                self.switch_view(View::Videos);
            }
            Action::ResetFilters => {
                self.search.clear();
                self.filter = StatusFilter::Unwatched;
                self.category = CategoryFilter::All;
                self.page = 1;
                self.switch_view(View::Videos);
            }
            Action::ToggleFavorite(url) => self.toggle_favorite(&url),
            Action::UpdateMetadata { url, status, category } => {
                self.update_metadata(&url, status, category)
            }
            Action::Dispatched(seq) => self.outbox.acknowledge(seq),
        }
        self.clamp_page();
    }

    fn switch_view(&mut self, view: View) {
        if view == View::Channels {
            self.channels = channels::aggregate(&self.videos);
        }
        self.view = view;
    }

    fn toggle_favorite(&mut self, url: &str) {
        let Some(video) = self.find_mut(url) else {
            log::warn("favorite_unknown_url", json!({ "url": url }));
            return;
        };
        video.favorite = !video.favorite;
        let request = UpdateRequest::favorite(url, video.favorite);
        self.outbox.enqueue(request);
    }

    fn update_metadata(&mut self, url: &str, status: Option<String>, category: Option<String>) {
        if status.is_none() && category.is_none() {
            return;
        }
        let category_changed = category.is_some();
        if let Some(video) = self.find_mut(url) {
            if let Some(status) = &status {
                video.status = status.clone();
            }
            if let Some(category) = &category {
                video.category = category.clone();
            }
        }
        if category_changed {
            self.rebuild_categories();
        }
        self.outbox.enqueue(UpdateRequest::metadata(url, status, category));
    }

    /// Recomputes the tag list, dropping the selected tag if it no longer exists.
    fn rebuild_categories(&mut self) {
        self.categories = pipeline::collect_categories(&self.videos);
        if let CategoryFilter::Tag(tag) = &self.category {
            if !self.categories.contains(tag) {
                self.category = CategoryFilter::All;
            }
        }
    }

    fn clamp_page(&mut self) {
        let filtered = self.visible().len();
        self.page = self.window(filtered).page;
    }
}

impl Reducible for Tracker {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}
