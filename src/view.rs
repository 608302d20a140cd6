// 🖼️ View Tree - pure projection of state + content
//
// `render` is recomputed in full after every change. It borrows the static
// tables and copies only what the host needs to paint, so the same inputs
// always produce an equal tree.

use crate::content::{Content, PopulationSample};
use crate::state::{PageState, Tab, Theme};
use serde::Serialize;

// ============================================================================
// PALETTE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Theme-dependent colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub highlight: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Rgb(243, 232, 255),
        surface: Rgb(252, 231, 243),
        text: Rgb(55, 65, 81),
        muted: Rgb(107, 114, 128),
        accent: Rgb(107, 33, 168),
        highlight: Rgb(219, 39, 119),
    };

    pub const DARK: Palette = Palette {
        background: Rgb(17, 24, 39),
        surface: Rgb(31, 41, 55),
        text: Rgb(229, 231, 235),
        muted: Rgb(156, 163, 175),
        accent: Rgb(216, 180, 254),
        highlight: Rgb(244, 114, 182),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

// ============================================================================
// NODES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    pub theme: Theme,
    pub palette: Palette,
    pub header: Header,
    pub carousel: Carousel,
    pub intro: IntroCard,
    pub progress: ProgressBar,
    pub tabs: TabStrip,
    pub panel: TabPanel,
    pub tooltip: Tooltip,
    pub alert: Option<AlertBanner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub url: String,
    pub alt: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    pub slides: Vec<Slide>,
    pub index: usize,
    pub len: usize,
}

impl Carousel {
    pub fn active(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntroCard {
    pub text: String,
    pub likes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressBar {
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabLabel {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabStrip {
    pub labels: Vec<TabLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedCard {
    pub title: String,
    pub description: String,
    pub temperament: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccordionItem {
    pub title: String,
    pub body: Option<String>,
    pub focused: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TabPanel {
    Characteristics { title: String, traits: Vec<Badge> },
    Breeds { cards: Vec<BreedCard> },
    Facts { items: Vec<AccordionItem> },
    Population { caption: String, samples: Vec<PopulationSample> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub trigger: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertBanner {
    pub name: String,
    pub message: String,
}

// ============================================================================
// PROJECTION
// ============================================================================

pub fn render(state: &PageState, content: &Content) -> ViewTree {
    ViewTree {
        theme: state.theme,
        palette: Palette::for_theme(state.theme),
        header: Header {
            title: content.title.to_string(),
            dark_mode: state.theme.is_dark(),
        },
        carousel: render_carousel(state, content),
        intro: IntroCard {
            text: content.intro.to_string(),
            likes: state.likes,
        },
        progress: ProgressBar {
            percent: state.progress,
        },
        tabs: TabStrip {
            labels: Tab::ALL
                .iter()
                .map(|tab| TabLabel {
                    tab: *tab,
                    label: tab.title().to_string(),
                    active: *tab == state.active_tab,
                })
                .collect(),
        },
        panel: render_panel(state, content),
        tooltip: Tooltip {
            trigger: content.tooltip_trigger.to_string(),
            content: state
                .tooltip_open
                .then(|| content.tooltip_fact.to_string()),
        },
        alert: state.alert.name().map(|name| AlertBanner {
            name: name.to_string(),
            message: format!("Meet {}! Your new feline friend has a name.", name),
        }),
    }
}

fn render_carousel(state: &PageState, content: &Content) -> Carousel {
    let index = state.current_image();
    Carousel {
        slides: content
            .gallery
            .iter()
            .enumerate()
            .map(|(i, image)| Slide {
                url: image.url.to_string(),
                alt: image.alt.to_string(),
                active: i == index,
            })
            .collect(),
        index,
        len: content.gallery.len(),
    }
}

fn render_panel(state: &PageState, content: &Content) -> TabPanel {
    match state.active_tab {
        Tab::Characteristics => TabPanel::Characteristics {
            title: "Characteristics of Cats".to_string(),
            traits: content
                .characteristics
                .iter()
                .enumerate()
                .map(|(i, text)| Badge {
                    number: i + 1,
                    text: text.to_string(),
                })
                .collect(),
        },
        Tab::Breeds => TabPanel::Breeds {
            cards: content
                .breeds
                .iter()
                .map(|breed| BreedCard {
                    title: breed.name.to_string(),
                    description: format!("Origin: {}", breed.origin),
                    temperament: breed.temperament.to_string(),
                    image: breed.image.to_string(),
                })
                .collect(),
        },
        Tab::Facts => TabPanel::Facts {
            items: content
                .facts
                .iter()
                .enumerate()
                .map(|(i, fact)| {
                    let expanded = state.expanded_fact == Some(i);
                    AccordionItem {
                        title: fact.title.to_string(),
                        body: expanded.then(|| fact.text.to_string()),
                        focused: state.fact_cursor == i,
                        expanded,
                    }
                })
                .collect(),
        },
        Tab::Population => TabPanel::Population {
            caption: "Estimated pet cats (millions)".to_string(),
            samples: content.population.to_vec(),
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    fn fresh_state(content: &Content) -> PageState {
        PageState::new(&PageConfig::default(), content.gallery.len(), content.facts.len())
    }

    #[test]
    fn test_render_is_deterministic() {
        let content = Content::builtin();
        let state = fresh_state(&content);
        assert_eq!(render(&state, &content), render(&state, &content));
    }

    #[test]
    fn test_carousel_marks_exactly_one_active_slide() {
        let content = Content::builtin();
        let mut state = fresh_state(&content);
        state.jump_to_image(1).unwrap();

        let view = render(&state, &content);
        let active: Vec<usize> = view
            .carousel
            .slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![1]);
        assert_eq!(view.carousel.active().unwrap().url, content.gallery[1].url);
    }

    #[test]
    fn test_theme_toggle_twice_restores_palette() {
        let content = Content::builtin();
        let mut state = fresh_state(&content);
        let before = render(&state, &content);

        state.toggle_theme();
        let dark = render(&state, &content);
        assert_ne!(dark.palette, before.palette);
        assert!(dark.header.dark_mode);

        state.toggle_theme();
        let after = render(&state, &content);
        assert_eq!(after.palette, before.palette);
        assert_eq!(after, before);
    }

    #[test]
    fn test_characteristics_are_numbered_from_one() {
        let content = Content::builtin();
        let state = fresh_state(&content);
        match render(&state, &content).panel {
            TabPanel::Characteristics { traits, .. } => {
                assert_eq!(traits.len(), 4);
                assert_eq!(traits[0].number, 1);
                assert_eq!(traits[3].number, 4);
            }
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn test_breed_cards_describe_origin() {
        let content = Content::builtin();
        let mut state = fresh_state(&content);
        state.select_tab(Tab::Breeds);
        match render(&state, &content).panel {
            TabPanel::Breeds { cards } => {
                assert_eq!(cards.len(), 5);
                assert_eq!(cards[0].title, "Siamese");
                assert_eq!(cards[0].description, "Origin: Thailand");
            }
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn test_only_expanded_fact_has_body() {
        let content = Content::builtin();
        let mut state = fresh_state(&content);
        state.select_tab(Tab::Facts);
        state.toggle_fact();

        match render(&state, &content).panel {
            TabPanel::Facts { items } => {
                assert!(items[0].expanded);
                assert!(items[0].body.is_some());
                assert!(items[1..].iter().all(|item| item.body.is_none()));
            }
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn test_alert_and_tooltip_follow_state() {
        let content = Content::builtin();
        let mut state = fresh_state(&content);
        let view = render(&state, &content);
        assert!(view.alert.is_none());
        assert!(view.tooltip.content.is_none());

        state.show_alert("Felix");
        state.toggle_tooltip();
        let view = render(&state, &content);
        assert_eq!(view.alert.unwrap().name, "Felix");
        assert_eq!(view.tooltip.content.as_deref(), Some(content.tooltip_fact));
    }

    #[test]
    fn test_view_serializes_to_json() {
        let content = Content::builtin();
        let state = fresh_state(&content);
        let json = serde_json::to_value(render(&state, &content)).unwrap();

        assert_eq!(json["header"]["title"], "Feline Fascination");
        assert_eq!(json["theme"], "light");
        assert_eq!(json["panel"]["kind"], "characteristics");
        assert_eq!(json["progress"]["percent"], 13);
    }
}
