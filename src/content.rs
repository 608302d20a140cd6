// 🐈 Static Content - display records for the page
//
// Everything here is fixed at compile time. The page never mutates these
// tables; it only holds a `Content` value and passes it by reference into
// the render projection.

use crate::error::PageError;
use serde::Serialize;

// ============================================================================
// DISPLAY RECORDS
// ============================================================================

/// A cat breed card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreedRecord {
    pub name: &'static str,
    pub origin: &'static str,
    pub temperament: &'static str,
    pub image: &'static str,
}

/// One accordion entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactRecord {
    pub title: &'static str,
    pub text: &'static str,
}

/// One carousel slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub url: &'static str,
    pub alt: &'static str,
}

/// Estimated pet cat population (millions) for a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopulationSample {
    pub year: u16,
    pub value: u32,
}

// ============================================================================
// TABLES
// ============================================================================

pub const TITLE: &str = "Feline Fascination";

pub const INTRO: &str = "Cats are fascinating creatures that have been domesticated for \
thousands of years. They are known for their independence, agility, and affectionate nature.";

pub const TOOLTIP_TRIGGER: &str = "Did you know?";

pub const TOOLTIP_FACT: &str = "Cats spend 70% of their lives sleeping!";

pub const BREEDS: &[BreedRecord] = &[
    BreedRecord {
        name: "Siamese",
        origin: "Thailand",
        temperament: "Vocal, Intelligent, Social",
        image: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/25/Siam_lilacpoint.jpg/1200px-Siam_lilacpoint.jpg",
    },
    BreedRecord {
        name: "Persian",
        origin: "Iran",
        temperament: "Gentle, Quiet, Dignified",
        image: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/15/White_Persian_Cat.jpg/1200px-White_Persian_Cat.jpg",
    },
    BreedRecord {
        name: "Maine Coon",
        origin: "United States",
        temperament: "Friendly, Playful, Gentle",
        image: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5f/Maine_Coon_cat_by_Tomitheos.JPG/1200px-Maine_Coon_cat_by_Tomitheos.JPG",
    },
    BreedRecord {
        name: "British Shorthair",
        origin: "United Kingdom",
        temperament: "Calm, Patient, Intelligent",
        image: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9d/Britishblue.jpg/1200px-Britishblue.jpg",
    },
    BreedRecord {
        name: "Sphynx",
        origin: "Canada",
        temperament: "Energetic, Mischievous, Friendly",
        image: "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e8/Sphinx2_July_2006.jpg/1200px-Sphinx2_July_2006.jpg",
    },
];

pub const CHARACTERISTICS: &[&str] = &[
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially hearing and night vision",
    "Communicate through vocalizations, body language, and scent",
];

pub const FACTS: &[FactRecord] = &[
    FactRecord {
        title: "How long do cats sleep?",
        text: "Most cats sleep between 12 and 16 hours a day, saving energy for short bursts of hunting.",
    },
    FactRecord {
        title: "Why do cats purr?",
        text: "Purring signals contentment, but cats also purr to soothe themselves when stressed or hurt.",
    },
    FactRecord {
        title: "Can cats see in the dark?",
        text: "Not in total darkness, but they need only about a sixth of the light humans do.",
    },
    FactRecord {
        title: "How high can a cat jump?",
        text: "A healthy cat can leap up to six times its own body length in a single bound.",
    },
    FactRecord {
        title: "Do cats have whisker fatigue?",
        text: "Whiskers are packed with nerves; deep narrow bowls can overstimulate them.",
    },
];

pub const GALLERY: &[ImageRecord] = &[
    ImageRecord {
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
        alt: "A cute cat",
    },
    ImageRecord {
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/Cat_November_2010-1a.jpg/1200px-Cat_November_2010-1a.jpg",
        alt: "A tabby cat looking up",
    },
    ImageRecord {
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/b6/Felis_catus-cat_on_snow.jpg/1200px-Felis_catus-cat_on_snow.jpg",
        alt: "A cat walking on snow",
    },
];

pub const POPULATION: &[PopulationSample] = &[
    PopulationSample { year: 2016, value: 86 },
    PopulationSample { year: 2017, value: 88 },
    PopulationSample { year: 2018, value: 91 },
    PopulationSample { year: 2019, value: 94 },
    PopulationSample { year: 2020, value: 95 },
    PopulationSample { year: 2021, value: 98 },
];

pub const CAT_NAMES: &[&str] = &[
    "Whiskers", "Mittens", "Shadow", "Luna", "Oliver", "Simba", "Cleo", "Felix",
];

// ============================================================================
// CONTENT BUNDLE
// ============================================================================

/// All static tables the page renders from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content {
    pub title: &'static str,
    pub intro: &'static str,
    pub tooltip_trigger: &'static str,
    pub tooltip_fact: &'static str,
    pub breeds: &'static [BreedRecord],
    pub characteristics: &'static [&'static str],
    pub facts: &'static [FactRecord],
    pub gallery: &'static [ImageRecord],
    pub population: &'static [PopulationSample],
    pub cat_names: &'static [&'static str],
}

impl Content {
    /// The tables shipped with the page
    pub fn builtin() -> Self {
        Content {
            title: TITLE,
            intro: INTRO,
            tooltip_trigger: TOOLTIP_TRIGGER,
            tooltip_fact: TOOLTIP_FACT,
            breeds: BREEDS,
            characteristics: CHARACTERISTICS,
            facts: FACTS,
            gallery: GALLERY,
            population: POPULATION,
            cat_names: CAT_NAMES,
        }
    }

    /// Check the invariants the page relies on.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.cat_names.iter().any(|name| name.is_empty()) {
            return Err(PageError::InvalidContent("cat names must be non-empty".to_string()));
        }

        let ascending = self
            .population
            .windows(2)
            .all(|pair| pair[0].year < pair[1].year);
        if !ascending {
            return Err(PageError::InvalidContent(
                "population samples must be ordered by year ascending".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_valid() {
        let content = Content::builtin();
        assert!(content.validate().is_ok());
        assert_eq!(content.gallery.len(), 3);
        assert_eq!(content.breeds.len(), 5);
        assert!(!content.cat_names.is_empty());
    }

    #[test]
    fn test_unordered_population_is_rejected() {
        const BAD: &[PopulationSample] = &[
            PopulationSample { year: 2020, value: 1 },
            PopulationSample { year: 2019, value: 2 },
        ];
        let content = Content {
            population: BAD,
            ..Content::builtin()
        };

        assert!(matches!(content.validate(), Err(PageError::InvalidContent(_))));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        const NAMES: &[&str] = &["Tom", ""];
        let content = Content {
            cat_names: NAMES,
            ..Content::builtin()
        };

        assert!(content.validate().is_err());
    }
}
