// 🧶 Page State - the mutable cells behind the page
//
// Every operation is a total function: navigation wraps, jumps are checked,
// counters saturate. Nothing in here knows about time; deferred changes are
// driven by the page through `set_progress` and `hide_alert`.

use crate::config::PageConfig;
use crate::error::PageError;
use serde::Serialize;

// ============================================================================
// CELLS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Current slide of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gallery {
    index: usize,
    len: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Gallery { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn navigate(&mut self, direction: Direction) {
        if self.len == 0 {
            return;
        }
        self.index = match direction {
            Direction::Next => (self.index + 1) % self.len,
            Direction::Prev => (self.index + self.len - 1) % self.len,
        };
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), PageError> {
        if index >= self.len {
            return Err(PageError::ImageOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }
}

/// The "name this cat" alert. Visible always carries a name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum NamingAlert {
    #[default]
    Hidden,
    Visible { name: String },
}

impl NamingAlert {
    pub fn is_visible(&self) -> bool {
        matches!(self, NamingAlert::Visible { .. })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            NamingAlert::Visible { name } => Some(name),
            NamingAlert::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Characteristics,
    Breeds,
    Facts,
    Population,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Characteristics, Tab::Breeds, Tab::Facts, Tab::Population];

    pub fn next(&self) -> Self {
        match self {
            Tab::Characteristics => Tab::Breeds,
            Tab::Breeds => Tab::Facts,
            Tab::Facts => Tab::Population,
            Tab::Population => Tab::Characteristics,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Characteristics => Tab::Population,
            Tab::Breeds => Tab::Characteristics,
            Tab::Facts => Tab::Breeds,
            Tab::Population => Tab::Facts,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Characteristics => "Characteristics",
            Tab::Breeds => "Popular Breeds",
            Tab::Facts => "Fun Facts",
            Tab::Population => "Population",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "characteristics" => Some(Tab::Characteristics),
            "breeds" => Some(Tab::Breeds),
            "facts" => Some(Tab::Facts),
            "population" => Some(Tab::Population),
            _ => None,
        }
    }
}

// ============================================================================
// STORE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub likes: u64,
    pub gallery: Gallery,
    pub progress: u8,
    pub theme: Theme,
    pub alert: NamingAlert,
    pub active_tab: Tab,
    pub fact_cursor: usize,
    pub expanded_fact: Option<usize>,
    pub tooltip_open: bool,
    #[serde(skip)]
    fact_count: usize,
}

impl PageState {
    pub fn new(config: &PageConfig, image_count: usize, fact_count: usize) -> Self {
        PageState {
            likes: 0,
            gallery: Gallery::new(image_count),
            progress: config.initial_progress.min(100),
            theme: Theme::Light,
            alert: NamingAlert::Hidden,
            active_tab: Tab::default(),
            fact_cursor: 0,
            expanded_fact: None,
            tooltip_open: false,
            fact_count,
        }
    }

    pub fn increment_likes(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn navigate_image(&mut self, direction: Direction) {
        self.gallery.navigate(direction);
    }

    pub fn jump_to_image(&mut self, index: usize) -> Result<(), PageError> {
        self.gallery.jump_to(index)
    }

    pub fn current_image(&self) -> usize {
        self.gallery.index()
    }

    pub fn set_progress(&mut self, percent: u8) {
        self.progress = percent.min(100);
    }

    pub fn show_alert(&mut self, name: &str) {
        self.alert = NamingAlert::Visible {
            name: name.to_string(),
        };
    }

    pub fn hide_alert(&mut self) {
        self.alert = NamingAlert::Hidden;
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }

    /// Move the accordion cursor, staying within the fact list
    pub fn move_fact_cursor(&mut self, direction: Direction) {
        if self.fact_count == 0 {
            return;
        }
        self.fact_cursor = match direction {
            Direction::Next => (self.fact_cursor + 1).min(self.fact_count - 1),
            Direction::Prev => self.fact_cursor.saturating_sub(1),
        };
    }

    /// Expand the fact under the cursor, or collapse it if already open.
    /// Only one fact is open at a time.
    pub fn toggle_fact(&mut self) {
        if self.fact_count == 0 {
            return;
        }
        self.expanded_fact = match self.expanded_fact {
            Some(open) if open == self.fact_cursor => None,
            _ => Some(self.fact_cursor),
        };
    }

    pub fn toggle_tooltip(&mut self) {
        self.tooltip_open = !self.tooltip_open;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(images: usize) -> PageState {
        PageState::new(&PageConfig::default(), images, 3)
    }

    #[test]
    fn test_likes_count_calls() {
        let mut state = state_with(3);
        for _ in 0..7 {
            state.increment_likes();
        }
        assert_eq!(state.likes, 7);
    }

    #[test]
    fn test_likes_saturate() {
        let mut state = state_with(3);
        state.likes = u64::MAX;
        state.increment_likes();
        assert_eq!(state.likes, u64::MAX);
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut state = state_with(3);
        state.navigate_image(Direction::Prev);
        assert_eq!(state.current_image(), 2);
        state.navigate_image(Direction::Next);
        assert_eq!(state.current_image(), 0);
    }

    #[test]
    fn test_n_next_calls_return_to_start() {
        let mut state = state_with(4);
        state.jump_to_image(1).unwrap();
        for _ in 0..4 {
            state.navigate_image(Direction::Next);
        }
        assert_eq!(state.current_image(), 1);
    }

    #[test]
    fn test_navigation_on_empty_gallery_is_noop() {
        let mut state = state_with(0);
        state.navigate_image(Direction::Next);
        state.navigate_image(Direction::Prev);
        assert_eq!(state.current_image(), 0);
    }

    #[test]
    fn test_jump_out_of_range_keeps_index() {
        let mut state = state_with(3);
        state.jump_to_image(2).unwrap();

        let err = state.jump_to_image(3).unwrap_err();
        assert_eq!(err, PageError::ImageOutOfRange { index: 3, len: 3 });
        assert_eq!(state.current_image(), 2);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut state = state_with(3);
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Dark);
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
        state.set_theme(Theme::Dark);
        assert!(state.theme.is_dark());
    }

    #[test]
    fn test_tabs_cycle() {
        let mut state = state_with(3);
        for _ in 0..Tab::ALL.len() {
            state.next_tab();
        }
        assert_eq!(state.active_tab, Tab::Characteristics);
        state.previous_tab();
        assert_eq!(state.active_tab, Tab::Population);
        assert_eq!(Tab::parse("Breeds"), Some(Tab::Breeds));
        assert_eq!(Tab::parse("nope"), None);
    }

    #[test]
    fn test_accordion_is_single_and_collapsible() {
        let mut state = state_with(3);
        state.toggle_fact();
        assert_eq!(state.expanded_fact, Some(0));

        state.move_fact_cursor(Direction::Next);
        state.toggle_fact();
        assert_eq!(state.expanded_fact, Some(1));

        state.toggle_fact();
        assert_eq!(state.expanded_fact, None);
    }

    #[test]
    fn test_fact_cursor_is_clamped() {
        let mut state = state_with(3);
        state.move_fact_cursor(Direction::Prev);
        assert_eq!(state.fact_cursor, 0);
        for _ in 0..10 {
            state.move_fact_cursor(Direction::Next);
        }
        assert_eq!(state.fact_cursor, 2);
    }

    #[test]
    fn test_alert_visible_carries_name() {
        let mut state = state_with(3);
        assert_eq!(state.alert.name(), None);
        state.show_alert("Luna");
        assert!(state.alert.is_visible());
        assert_eq!(state.alert.name(), Some("Luna"));
        state.hide_alert();
        assert!(!state.alert.is_visible());
    }

    #[test]
    fn test_initial_progress_is_clamped() {
        let config = PageConfig {
            initial_progress: 150,
            ..PageConfig::default()
        };
        let state = PageState::new(&config, 3, 3);
        assert_eq!(state.progress, 100);
    }
}
