// Feline Fascination - Core Library
// Page state, static content, timers and the render projection.
// The terminal host lives in the binary.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod page;
pub mod scheduler;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use config::PageConfig;
pub use content::{BreedRecord, Content, FactRecord, ImageRecord, PopulationSample};
pub use error::PageError;
pub use page::{Action, FelineFascinationPage, Lifecycle};
pub use scheduler::{Scheduler, TimerKind};
pub use state::{Direction, Gallery, NamingAlert, PageState, Tab, Theme};
pub use view::{render, Palette, TabPanel, ViewTree};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
