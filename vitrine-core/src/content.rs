//! Site content — the data the controllers animate.
//!
//! Content loads from a TOML file; a built-in default set keeps every
//! feature alive when no file is present. Validation catches the
//! inconsistencies that would otherwise silently disable features.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content file: {0}")]
    Parse(#[from] Box<toml::de::Error>),
    #[error("content has no slides")]
    NoSlides,
    #[error("card '{card}' references unknown category '{category}'")]
    UnknownCategory { card: String, category: String },
    #[error("stat '{0}' has a zero target")]
    ZeroTarget(String),
    #[error("hero headline is empty")]
    EmptyHeadline,
    #[error("highlight word '{word}' does not occur in the headline")]
    HighlightMissing { word: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    /// The word inside `headline` that gets the accent color and the
    /// delete-and-retype style cycle.
    pub highlight_word: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub kicker: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub category: String,
    pub blurb: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub categories: Vec<String>,
    pub slides: Vec<Slide>,
    pub cards: Vec<ProjectCard>,
    pub stats: Vec<Stat>,
}

impl SiteContent {
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(text).map_err(Box::new)?;
        content.validate()?;
        Ok(content)
    }

    pub fn to_toml_string(&self) -> String {
        // A struct of strings and integers cannot fail to serialize.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slides.is_empty() {
            return Err(ContentError::NoSlides);
        }
        let known: BTreeSet<&str> = self.categories.iter().map(String::as_str).collect();
        for card in &self.cards {
            if !known.contains(card.category.as_str()) {
                return Err(ContentError::UnknownCategory {
                    card: card.title.clone(),
                    category: card.category.clone(),
                });
            }
        }
        for stat in &self.stats {
            if stat.target == 0 {
                return Err(ContentError::ZeroTarget(stat.label.clone()));
            }
        }
        if self.hero.headline.trim().is_empty() {
            return Err(ContentError::EmptyHeadline);
        }
        if !self.hero.headline.contains(&self.hero.highlight_word) {
            return Err(ContentError::HighlightMissing {
                word: self.hero.highlight_word.clone(),
            });
        }
        Ok(())
    }

    pub fn card_categories(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.category.clone()).collect()
    }
}

/// Built-in portfolio used when no content file is supplied.
pub fn default_site() -> SiteContent {
    SiteContent {
        hero: HeroContent {
            headline: "We craft digital stories that AMAZE".into(),
            highlight_word: "AMAZE".into(),
            tagline: "Brand, web, and motion design studio".into(),
        },
        categories: vec!["branding".into(), "web".into(), "motion".into()],
        slides: vec![
            Slide {
                kicker: "01 — Branding".into(),
                title: "Nordlys Identity".into(),
                body: "Complete rebrand for a Scandinavian outdoor label:\n\
                       wordmark, color system, packaging, and a voice that\n\
                       survives from trail signage to social clips.".into(),
            },
            Slide {
                kicker: "02 — Web".into(),
                title: "Atlas Commerce".into(),
                body: "Headless storefront with editorial layouts,\n\
                       sub-second page loads, and a checkout flow that\n\
                       cut abandonment by a third.".into(),
            },
            Slide {
                kicker: "03 — Motion".into(),
                title: "Koi Title Sequence".into(),
                body: "Ninety seconds of hand-keyed type and ink\n\
                       simulation for a documentary festival opener.".into(),
            },
            Slide {
                kicker: "04 — Product".into(),
                title: "Field Notes App".into(),
                body: "Design system and interface for a field-research\n\
                       notebook used offline on three continents.".into(),
            },
        ],
        cards: vec![
            ProjectCard {
                title: "Nordlys".into(),
                category: "branding".into(),
                blurb: "Outdoor label rebrand".into(),
            },
            ProjectCard {
                title: "Atlas".into(),
                category: "web".into(),
                blurb: "Headless storefront".into(),
            },
            ProjectCard {
                title: "Koi".into(),
                category: "motion".into(),
                blurb: "Festival title sequence".into(),
            },
            ProjectCard {
                title: "Field Notes".into(),
                category: "web".into(),
                blurb: "Research notebook UI".into(),
            },
            ProjectCard {
                title: "Mareld".into(),
                category: "branding".into(),
                blurb: "Coastal distillery identity".into(),
            },
            ProjectCard {
                title: "Drift".into(),
                category: "motion".into(),
                blurb: "Generative loop series".into(),
            },
        ],
        stats: vec![
            Stat { label: "Projects shipped".into(), target: 120, suffix: "+".into() },
            Stat { label: "Happy clients".into(), target: 48, suffix: String::new() },
            Stat { label: "Cups of coffee".into(), target: 12_400, suffix: "+".into() },
            Stat { label: "Awards".into(), target: 16, suffix: String::new() },
        ],
    }
}
