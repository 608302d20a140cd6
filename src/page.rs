// 🐾 FelineFascinationPage - the single component
//
// Owns all state. User events arrive as `Action`s, timers are advanced by
// `tick`, and `render` projects the current state for the host. Teardown
// cancels every pending timer, so a torn-down page never changes again.

use crate::config::PageConfig;
use crate::content::Content;
use crate::error::PageError;
use crate::scheduler::{Scheduler, TimerKind};
use crate::state::{Direction, PageState, Tab, Theme};
use crate::view::{self, ViewTree};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Mounted,
    TornDown,
}

/// Discrete input events delivered by the rendering host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Like,
    ToggleTheme,
    SetTheme(Theme),
    NextImage,
    PrevImage,
    JumpToImage(usize),
    NameCat,
    NextTab,
    PrevTab,
    SelectTab(Tab),
    FactUp,
    FactDown,
    ToggleFact,
    ToggleTooltip,
}

pub struct FelineFascinationPage {
    content: Content,
    config: PageConfig,
    state: PageState,
    timers: Scheduler,
    rng: StdRng,
    lifecycle: Lifecycle,
}

impl FelineFascinationPage {
    pub fn new(content: Content, config: PageConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = PageState::new(&config, content.gallery.len(), content.facts.len());

        FelineFascinationPage {
            content,
            config,
            state,
            timers: Scheduler::new(),
            rng,
            lifecycle: Lifecycle::Created,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.timers.is_pending(kind)
    }

    /// Earliest instant at which `tick` has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Run the mount effect: show the initial progress now and schedule the
    /// reveal. Only the first call has any effect.
    pub fn mount(&mut self, now: Instant) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }

        self.state.set_progress(self.config.initial_progress);
        self.timers
            .schedule(TimerKind::ProgressReveal, now + self.config.progress_delay);
        self.lifecycle = Lifecycle::Mounted;

        info!(
            initial = self.config.initial_progress,
            target = self.config.target_progress,
            delay_ms = self.config.progress_delay.as_millis() as u64,
            "page mounted"
        );
    }

    /// Apply every timer that is due at `now`. Returns true if state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_torn_down() {
            return false;
        }

        let mut changed = false;
        for kind in self.timers.take_due(now) {
            debug!(timer = kind.as_str(), "timer fired");
            match kind {
                TimerKind::ProgressReveal => {
                    self.state.set_progress(self.config.target_progress);
                }
                TimerKind::AlertHide => {
                    self.state.hide_alert();
                }
            }
            changed = true;
        }
        changed
    }

    /// Cancel all pending timers. Returns how many were cancelled.
    pub fn teardown(&mut self) -> usize {
        if self.is_torn_down() {
            return 0;
        }

        let cancelled = self.timers.cancel_all();
        self.lifecycle = Lifecycle::TornDown;
        info!(cancelled, "page torn down");
        cancelled
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    pub fn increment_likes(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.state.increment_likes();
        debug!(likes = self.state.likes, "liked");
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.is_torn_down() {
            return;
        }
        self.state.set_theme(theme);
        debug!(dark = theme.is_dark(), "theme set");
    }

    pub fn navigate_image(&mut self, direction: Direction) {
        if self.is_torn_down() {
            return;
        }
        self.state.navigate_image(direction);
        debug!(index = self.state.current_image(), "image navigated");
    }

    /// No-op once torn down.
    pub fn jump_to_image(&mut self, index: usize) -> Result<(), PageError> {
        if self.is_torn_down() {
            return Ok(());
        }
        self.state.jump_to_image(index)?;
        debug!(index, "jumped to image");
        Ok(())
    }

    /// Pick a random name, show the alert and (re)start its hide timer.
    /// A second call while the alert is showing pushes the deadline out.
    pub fn name_random_cat(&mut self, now: Instant) -> Result<&'static str, PageError> {
        if self.is_torn_down() {
            return Err(PageError::TornDown);
        }

        let name = *self
            .content
            .cat_names
            .choose(&mut self.rng)
            .ok_or(PageError::NoCatNames)?;

        self.state.show_alert(name);
        let replaced = self
            .timers
            .schedule(TimerKind::AlertHide, now + self.config.alert_duration);
        debug!(name, replaced, "cat named");

        Ok(name)
    }

    /// Route a host event to its operation. Ignored once torn down.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> Result<(), PageError> {
        if self.is_torn_down() {
            debug!(?action, "action after teardown ignored");
            return Ok(());
        }

        match action {
            Action::Like => self.increment_likes(),
            Action::ToggleTheme => self.set_theme(self.state.theme.toggled()),
            Action::SetTheme(theme) => self.set_theme(theme),
            Action::NextImage => self.navigate_image(Direction::Next),
            Action::PrevImage => self.navigate_image(Direction::Prev),
            Action::JumpToImage(index) => self.jump_to_image(index)?,
            Action::NameCat => {
                self.name_random_cat(now)?;
            }
            Action::NextTab => self.state.next_tab(),
            Action::PrevTab => self.state.previous_tab(),
            Action::SelectTab(tab) => self.state.select_tab(tab),
            Action::FactUp => self.state.move_fact_cursor(Direction::Prev),
            Action::FactDown => self.state.move_fact_cursor(Direction::Next),
            Action::ToggleFact => self.state.toggle_fact(),
            Action::ToggleTooltip => self.state.toggle_tooltip(),
        }
        Ok(())
    }

    pub fn render(&self) -> ViewTree {
        view::render(&self.state, &self.content)
    }
}

impl Drop for FelineFascinationPage {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing::Level;

    #[derive(Clone)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<F: FnOnce()>(f: F) -> String {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = LogBuffer(buf.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .with_max_level(Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buf.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).to_string()
    }

    fn page() -> FelineFascinationPage {
        FelineFascinationPage::new(Content::builtin(), PageConfig::default().with_seed(7))
    }

    #[test]
    fn test_progress_reveals_after_delay() {
        let t0 = Instant::now();
        let mut page = page();
        page.mount(t0);
        assert_eq!(page.state().progress, 13);

        assert!(!page.tick(t0 + Duration::from_millis(499)));
        assert_eq!(page.state().progress, 13);

        assert!(page.tick(t0 + Duration::from_millis(500)));
        assert_eq!(page.state().progress, 66);
    }

    #[test]
    fn test_mount_runs_once() {
        let t0 = Instant::now();
        let mut page = page();
        page.mount(t0);
        page.tick(t0 + Duration::from_secs(1));

        page.mount(t0 + Duration::from_secs(2));
        assert_eq!(page.state().progress, 66);
        assert!(!page.is_pending(TimerKind::ProgressReveal));
    }

    #[test]
    fn test_teardown_cancels_progress_reveal() {
        let t0 = Instant::now();
        let mut page = page();
        page.mount(t0);

        assert_eq!(page.teardown(), 1);
        assert!(!page.tick(t0 + Duration::from_secs(5)));
        assert_eq!(page.state().progress, 13);
        assert_eq!(page.lifecycle(), Lifecycle::TornDown);
    }

    #[test]
    fn test_name_random_cat_shows_then_hides() {
        let t0 = Instant::now();
        let mut page = page();
        page.mount(t0);

        let name = page.name_random_cat(t0).unwrap().to_string();
        assert!(Content::builtin().cat_names.contains(&name.as_str()));
        assert_eq!(page.state().alert.name(), Some(name.as_str()));

        page.tick(t0 + Duration::from_millis(2999));
        assert!(page.state().alert.is_visible());

        page.tick(t0 + Duration::from_secs(3));
        assert!(!page.state().alert.is_visible());
    }

    #[test]
    fn test_second_naming_extends_alert() {
        let t0 = Instant::now();
        let mut page = page();

        page.name_random_cat(t0).unwrap();
        page.name_random_cat(t0 + Duration::from_secs(2)).unwrap();

        page.tick(t0 + Duration::from_secs(3));
        assert!(page.state().alert.is_visible());

        page.tick(t0 + Duration::from_secs(5));
        assert!(!page.state().alert.is_visible());
    }

    #[test]
    fn test_seeded_pages_pick_same_names() {
        let t0 = Instant::now();
        let mut a = page();
        let mut b = page();
        for _ in 0..5 {
            let left = a.name_random_cat(t0).unwrap().to_string();
            let right = b.name_random_cat(t0).unwrap().to_string();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_empty_name_list_is_an_error() {
        const NONE: &[&str] = &[];
        let content = Content {
            cat_names: NONE,
            ..Content::builtin()
        };
        let mut page = FelineFascinationPage::new(content, PageConfig::default());

        assert_eq!(page.name_random_cat(Instant::now()), Err(PageError::NoCatNames));
        assert!(!page.state().alert.is_visible());
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let t0 = Instant::now();
        let mut page = page();
        page.mount(t0);

        page.dispatch(Action::Like, t0).unwrap();
        page.dispatch(Action::NextImage, t0).unwrap();
        page.dispatch(Action::ToggleTheme, t0).unwrap();
        page.dispatch(Action::SelectTab(Tab::Facts), t0).unwrap();
        page.dispatch(Action::ToggleTooltip, t0).unwrap();

        let state = page.state();
        assert_eq!(state.likes, 1);
        assert_eq!(state.current_image(), 1);
        assert!(state.theme.is_dark());
        assert_eq!(state.active_tab, Tab::Facts);
        assert!(state.tooltip_open);

        assert_eq!(
            page.dispatch(Action::JumpToImage(9), t0),
            Err(PageError::ImageOutOfRange { index: 9, len: 3 })
        );
    }

    #[test]
    fn test_actions_after_teardown_are_ignored() {
        let t0 = Instant::now();
        let mut page = page();
        page.mount(t0);
        page.teardown();

        page.dispatch(Action::Like, t0).unwrap();
        page.dispatch(Action::NameCat, t0).unwrap();
        assert_eq!(page.state().likes, 0);
        assert!(!page.state().alert.is_visible());
        assert_eq!(page.next_deadline(), None);
    }

    #[test]
    fn test_direct_operations_after_teardown_do_nothing() {
        let t0 = Instant::now();
        let mut page = page();
        page.mount(t0);
        page.teardown();

        page.increment_likes();
        page.set_theme(Theme::Dark);
        page.navigate_image(Direction::Next);
        page.jump_to_image(2).unwrap();
        assert_eq!(page.name_random_cat(t0), Err(PageError::TornDown));

        page.tick(t0 + Duration::from_secs(60));
        let state = page.state();
        assert_eq!(state.likes, 0);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.current_image(), 0);
        assert!(!state.alert.is_visible());
        assert!(!page.is_pending(TimerKind::AlertHide));
        assert_eq!(page.next_deadline(), None);
    }

    #[test]
    fn test_drop_cancels_pending_timers() {
        let logs = capture_logs(|| {
            let t0 = Instant::now();
            let mut page = page();
            page.mount(t0);
            page.name_random_cat(t0).unwrap();
            assert_eq!(page.lifecycle(), Lifecycle::Mounted);
            drop(page);
        });

        assert!(logs.contains("page torn down"), "logs: {}", logs);
        assert!(logs.contains("cancelled=2"), "logs: {}", logs);
    }
}
