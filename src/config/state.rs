// src/config/state.rs
use super::options::AppOptions;
use crate::stats::GenderBucket;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Search page -> raw text in the search box
    pub search_text: String,
    /// Search page -> competitor whose history is shown instead of the results
    pub selected_competitor: Option<String>,

    /// Distance page -> selected distance label and time filters
    pub distance: String,
    pub gender_filter: Option<GenderBucket>,
    pub age_filter: Option<String>,

    /// Medals page -> zero-based page of the ranking
    pub medal_page: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            search_text: s!(),
            selected_competitor: None,
            distance: s!("1K"),
            gender_filter: None,
            age_filter: None,
            medal_page: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
