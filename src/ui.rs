use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use feline_fascination::view::{Rgb, ViewTree};
use feline_fascination::{Action, FelineFascinationPage, Tab, TabPanel};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Quit,
    Page(Action),
}

/// Leaves raw mode and the alternate screen when dropped, whatever path
/// the UI exits through.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
            tracing::warn!(%err, "failed to leave alternate screen");
        }
    }
}

pub fn run_ui(page: &mut FelineFascinationPage, tick_rate: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    run_session(&mut terminal, page, tick_rate, crossterm_event)
}

/// Next input event, or `None` if nothing arrived within `timeout`.
fn crossterm_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Mount, drive the loop until quit, then tear down on every exit path.
fn run_session<B, E>(
    terminal: &mut Terminal<B>,
    page: &mut FelineFascinationPage,
    tick_rate: Duration,
    next_event: E,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut(Duration) -> io::Result<Option<Event>>,
{
    page.mount(Instant::now());
    let res = run_app(terminal, page, tick_rate, next_event);
    page.teardown();

    if let Err(err) = &res {
        tracing::error!(%err, "ui loop failed");
    }
    res.context("ui loop failed")
}

fn run_app<B, E>(
    terminal: &mut Terminal<B>,
    page: &mut FelineFascinationPage,
    tick_rate: Duration,
    mut next_event: E,
) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut(Duration) -> io::Result<Option<Event>>,
{
    loop {
        let view = page.render();
        terminal.draw(|f| ui(f, &view))?;

        let timeout = poll_timeout(page.next_deadline(), Instant::now(), tick_rate);
        if let Some(Event::Key(key)) = next_event(timeout)? {
            if key.kind == KeyEventKind::Press {
                match key_to_command(key, page.state().active_tab) {
                    Some(UiCommand::Quit) => return Ok(()),
                    Some(UiCommand::Page(action)) => {
                        if let Err(err) = page.dispatch(action, Instant::now()) {
                            tracing::warn!(%err, ?action, "action rejected");
                        }
                    }
                    None => {}
                }
            }
        }

        page.tick(Instant::now());
    }
}

/// Wait no longer than the next timer deadline or the redraw interval.
fn poll_timeout(deadline: Option<Instant>, now: Instant, tick_rate: Duration) -> Duration {
    match deadline {
        Some(at) => at.saturating_duration_since(now).min(tick_rate),
        None => tick_rate,
    }
}

pub fn key_to_command(key: KeyEvent, tab: Tab) -> Option<UiCommand> {
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(UiCommand::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(UiCommand::Quit)
        }
        KeyCode::Char('l') | KeyCode::Char(' ') => Action::Like,
        KeyCode::Char('d') => Action::ToggleTheme,
        KeyCode::Char('n') => Action::NameCat,
        KeyCode::Char('i') => Action::ToggleTooltip,
        KeyCode::Right => Action::NextImage,
        KeyCode::Left => Action::PrevImage,
        KeyCode::Char(c @ '1'..='9') => Action::JumpToImage(c as usize - '1' as usize),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Action::PrevTab
            } else {
                Action::NextTab
            }
        }
        KeyCode::BackTab => Action::PrevTab,
        KeyCode::Up | KeyCode::Char('k') if tab == Tab::Facts => Action::FactUp,
        KeyCode::Down | KeyCode::Char('j') if tab == Tab::Facts => Action::FactDown,
        KeyCode::Enter if tab == Tab::Facts => Action::ToggleFact,
        _ => return None,
    };
    Some(UiCommand::Page(action))
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn ui(f: &mut Frame, view: &ViewTree) {
    let palette = view.palette;

    let background = Block::default().style(
        Style::default()
            .bg(color(palette.background))
            .fg(color(palette.text)),
    );
    f.render_widget(background, f.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Carousel
            Constraint::Length(5), // Intro + like button
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Tab panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], view);
    render_carousel(f, chunks[1], view);
    render_intro(f, chunks[2], view);
    render_progress(f, chunks[3], view);
    render_tabs(f, chunks[4], view);
    render_panel(f, chunks[5], view);
    render_status_bar(f, chunks[6], view);

    if view.tooltip.content.is_some() {
        render_tooltip(f, chunks[6], view);
    }
    if view.alert.is_some() {
        render_alert(f, f.size(), view);
    }
}

fn bordered(view: &ViewTree, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(view.palette.accent)))
        .title(format!(" {} ", title))
}

fn render_header(f: &mut Frame, area: Rect, view: &ViewTree) {
    let palette = view.palette;
    let switch = if view.header.dark_mode {
        Span::styled("☾ Dark", Style::default().fg(color(palette.highlight)))
    } else {
        Span::styled("☀ Light", Style::default().fg(color(palette.highlight)))
    };

    let line = Line::from(vec![
        Span::styled(
            format!("🐱 {}", view.header.title),
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        switch,
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color(palette.accent))));

    f.render_widget(header, area);
}

fn render_carousel(f: &mut Frame, area: Rect, view: &ViewTree) {
    let palette = view.palette;
    let carousel = &view.carousel;

    let (alt, url) = match carousel.active() {
        Some(slide) => (slide.alt.as_str(), slide.url.as_str()),
        None => ("No images", ""),
    };

    let dots: Vec<Span> = carousel
        .slides
        .iter()
        .map(|slide| {
            if slide.active {
                Span::styled("● ", Style::default().fg(color(palette.highlight)))
            } else {
                Span::styled("○ ", Style::default().fg(color(palette.muted)))
            }
        })
        .collect();

    let content = vec![
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(color(palette.muted))),
            Span::styled(alt, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" ▶", Style::default().fg(color(palette.muted))),
        ]),
        Line::from(Span::styled(
            url,
            Style::default()
                .fg(color(palette.muted))
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(dots),
    ];

    let title = format!("Gallery {}/{}", carousel.index + 1, carousel.len);
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(bordered(view, &title));

    f.render_widget(paragraph, area);
}

fn render_intro(f: &mut Frame, area: Rect, view: &ViewTree) {
    let palette = view.palette;
    let content = vec![
        Line::from(view.intro.text.as_str()),
        Line::from(vec![
            Span::styled(
                "♥ Like ",
                Style::default()
                    .fg(color(palette.highlight))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                view.intro.likes.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color(palette.muted))));

    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, area: Rect, view: &ViewTree) {
    let palette = view.palette;
    let gauge = Gauge::default()
        .block(bordered(view, "Cat Nap Progress"))
        .gauge_style(
            Style::default()
                .fg(color(palette.accent))
                .bg(color(palette.surface)),
        )
        .percent(u16::from(view.progress.percent));

    f.render_widget(gauge, area);
}

fn render_tabs(f: &mut Frame, area: Rect, view: &ViewTree) {
    let palette = view.palette;
    let titles: Vec<String> = view.tabs.labels.iter().map(|l| l.label.clone()).collect();
    let selected = view
        .tabs
        .labels
        .iter()
        .position(|l| l.active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color(palette.muted))))
        .style(Style::default().fg(color(palette.muted)))
        .highlight_style(
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");

    f.render_widget(tabs, area);
}

fn render_panel(f: &mut Frame, area: Rect, view: &ViewTree) {
    let palette = view.palette;
    let label_style = Style::default()
        .fg(color(palette.accent))
        .add_modifier(Modifier::BOLD);

    match &view.panel {
        TabPanel::Characteristics { title, traits } => {
            let content: Vec<Line> = traits
                .iter()
                .map(|badge| {
                    Line::from(vec![
                        Span::styled(
                            format!(" {} ", badge.number),
                            Style::default()
                                .fg(color(palette.background))
                                .bg(color(palette.highlight)),
                        ),
                        Span::raw(" "),
                        Span::raw(badge.text.as_str()),
                    ])
                })
                .collect();

            let paragraph = Paragraph::new(content).block(bordered(view, title));
            f.render_widget(paragraph, area);
        }
        TabPanel::Breeds { cards } => {
            let mut content = Vec::new();
            for card in cards {
                content.push(Line::from(Span::styled(card.title.as_str(), label_style)));
                content.push(Line::from(Span::styled(
                    card.description.as_str(),
                    Style::default().fg(color(palette.muted)),
                )));
                content.push(Line::from(vec![
                    Span::styled("Temperament: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(card.temperament.as_str()),
                ]));
                content.push(Line::from(""));
            }

            let paragraph = Paragraph::new(content)
                .wrap(Wrap { trim: false })
                .block(bordered(view, "Popular Breeds"));
            f.render_widget(paragraph, area);
        }
        TabPanel::Facts { items } => {
            let mut content = Vec::new();
            for item in items {
                let marker = if item.expanded { "▾ " } else { "▸ " };
                let style = if item.focused {
                    label_style.add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                content.push(Line::from(Span::styled(
                    format!("{}{}", marker, item.title),
                    style,
                )));
                if let Some(body) = &item.body {
                    content.push(Line::from(Span::styled(
                        format!("  {}", body),
                        Style::default()
                            .fg(color(palette.muted))
                            .add_modifier(Modifier::ITALIC),
                    )));
                }
            }

            let paragraph = Paragraph::new(content)
                .wrap(Wrap { trim: false })
                .block(bordered(view, "Fun Facts"));
            f.render_widget(paragraph, area);
        }
        TabPanel::Population { caption, samples } => {
            let labels: Vec<String> = samples.iter().map(|s| s.year.to_string()).collect();
            let data: Vec<(&str, u64)> = labels
                .iter()
                .zip(samples.iter())
                .map(|(label, sample)| (label.as_str(), u64::from(sample.value)))
                .collect();

            let chart = BarChart::default()
                .block(bordered(view, caption))
                .data(data.as_slice())
                .bar_width(6)
                .bar_gap(2)
                .bar_style(Style::default().fg(color(palette.accent)))
                .value_style(
                    Style::default()
                        .fg(color(palette.background))
                        .bg(color(palette.accent)),
                )
                .label_style(Style::default().fg(color(palette.muted)));
            f.render_widget(chart, area);
        }
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, view: &ViewTree) {
    let key = Style::default().fg(color(view.palette.highlight));
    let status_spans = vec![
        Span::styled(" l", key),
        Span::raw(" Like | "),
        Span::styled("←/→", key),
        Span::raw(" Photos | "),
        Span::styled("Tab", key),
        Span::raw(" Section | "),
        Span::styled("n", key),
        Span::raw(" Name a cat | "),
        Span::styled("d", key),
        Span::raw(" Theme | "),
        Span::styled("i", key),
        Span::raw(format!(" {} | ", view.tooltip.trigger)),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(view.palette.muted))),
    );

    f.render_widget(status_bar, area);
}

fn render_tooltip(f: &mut Frame, anchor: Rect, view: &ViewTree) {
    let text = match &view.tooltip.content {
        Some(text) => text.as_str(),
        None => return,
    };

    let width = (text.chars().count() as u16 + 4).min(anchor.width);
    let area = Rect {
        x: anchor.x + anchor.width.saturating_sub(width),
        y: anchor.y.saturating_sub(3),
        width,
        height: 3,
    };

    let tooltip = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(view.palette.highlight))),
    );

    f.render_widget(Clear, area);
    f.render_widget(tooltip, area);
}

fn render_alert(f: &mut Frame, screen: Rect, view: &ViewTree) {
    let alert = match &view.alert {
        Some(alert) => alert,
        None => return,
    };

    let area = centered_rect(60, 5, screen);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            alert.message.as_str(),
            Style::default()
                .fg(color(view.palette.accent))
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(bordered(view, "New Name"));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (u32::from(r.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
