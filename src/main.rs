// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use feline_fascination::logging::{self, LogTarget};
use feline_fascination::{Action, Content, FelineFascinationPage, PageConfig, Tab, Theme};

#[derive(Parser, Debug)]
#[command(name = "feline-fascination", version, about = "Cat facts, photos and a like button")]
struct Cli {
    /// Seed for the random cat names
    #[arg(long, env = "FELINE_SEED", global = true)]
    seed: Option<u64>,

    /// Start in dark mode
    #[arg(long, global = true)]
    dark: bool,

    /// Where interactive runs write their log
    #[arg(long, env = "FELINE_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal page (default)
    Run {
        /// Redraw interval in milliseconds
        #[arg(long, default_value_t = 100)]
        tick_ms: u64,
    },

    /// Print the rendered view tree as JSON
    Snapshot {
        /// Number of likes to apply
        #[arg(long, default_value_t = 0)]
        likes: u64,

        /// Carousel slide to show
        #[arg(long)]
        image: Option<usize>,

        /// Milliseconds elapsed since mount when the tree is rendered
        #[arg(long, default_value_t = 0)]
        elapsed_ms: u64,

        /// Active tab: characteristics, breeds, facts or population
        #[arg(long)]
        tab: Option<String>,

        /// Name a cat before rendering
        #[arg(long)]
        name_cat: bool,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PageConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    match cli.command {
        Some(Command::Snapshot {
            likes,
            image,
            elapsed_ms,
            tab,
            name_cat,
            compact,
        }) => {
            let _guard = logging::init(LogTarget::Stderr)?;
            let tab = match tab.as_deref() {
                Some(name) => match Tab::parse(name) {
                    Some(tab) => Some(tab),
                    None => bail!("unknown tab '{}'", name),
                },
                None => None,
            };
            let options = SnapshotOptions {
                likes,
                image,
                elapsed: Duration::from_millis(elapsed_ms),
                tab,
                name_cat,
                dark: cli.dark,
            };
            let json = snapshot(config, &options, compact)?;
            println!("{}", json);
        }
        Some(Command::Run { tick_ms }) => {
            let _guard = logging::init(LogTarget::file_or_default(cli.log_file.as_deref()))?;
            run_ui_mode(config, cli.dark, Duration::from_millis(tick_ms))?;
        }
        None => {
            let _guard = logging::init(LogTarget::file_or_default(cli.log_file.as_deref()))?;
            run_ui_mode(config, cli.dark, Duration::from_millis(100))?;
        }
    }

    Ok(())
}

struct SnapshotOptions {
    likes: u64,
    image: Option<usize>,
    elapsed: Duration,
    tab: Option<Tab>,
    name_cat: bool,
    dark: bool,
}

/// Mount a page, replay the requested actions and serialise what it renders.
fn snapshot(config: PageConfig, options: &SnapshotOptions, compact: bool) -> Result<String> {
    let content = Content::builtin();
    content.validate()?;

    let t0 = Instant::now();
    let mut page = FelineFascinationPage::new(content, config);
    page.mount(t0);

    let mut actions = Vec::new();
    actions.extend((0..options.likes).map(|_| Action::Like));
    if let Some(index) = options.image {
        actions.push(Action::JumpToImage(index));
    }
    if let Some(tab) = options.tab {
        actions.push(Action::SelectTab(tab));
    }
    if options.dark {
        actions.push(Action::SetTheme(Theme::Dark));
    }
    if options.name_cat {
        actions.push(Action::NameCat);
    }

    for action in actions {
        page.dispatch(action, t0)
            .with_context(|| format!("applying {:?}", action))?;
    }
    page.tick(t0 + options.elapsed);

    let view = page.render();
    let json = if compact {
        serde_json::to_string(&view)?
    } else {
        serde_json::to_string_pretty(&view)?
    };
    Ok(json)
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: PageConfig, dark: bool, tick_rate: Duration) -> Result<()> {
    let content = Content::builtin();
    content.validate()?;

    let mut page = FelineFascinationPage::new(content, config);
    page.set_theme(Theme::from_dark(dark));

    ui::run_ui(&mut page, tick_rate)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: PageConfig, _dark: bool, _tick_rate: Duration) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print the view tree: feline-fascination snapshot");
    std::process::exit(1);
}
