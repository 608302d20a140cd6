use std::time::Duration;

pub const DEFAULT_INITIAL_PROGRESS: u8 = 13;
pub const DEFAULT_TARGET_PROGRESS: u8 = 66;
pub const DEFAULT_PROGRESS_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_ALERT_DURATION: Duration = Duration::from_secs(3);

/// Tunables for one page instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Progress shown immediately at mount
    pub initial_progress: u8,

    /// Progress shown once `progress_delay` has elapsed
    pub target_progress: u8,

    pub progress_delay: Duration,

    /// How long the naming alert stays visible
    pub alert_duration: Duration,

    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl PageConfig {
    /// Set both progress values, clamped to [0, 100]
    pub fn with_progress(mut self, initial: u8, target: u8) -> Self {
        self.initial_progress = initial.min(100);
        self.target_progress = target.min(100);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            initial_progress: DEFAULT_INITIAL_PROGRESS,
            target_progress: DEFAULT_TARGET_PROGRESS,
            progress_delay: DEFAULT_PROGRESS_DELAY,
            alert_duration: DEFAULT_ALERT_DURATION,
            seed: None,
        }
    }
}
