//! Site configuration loaded from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working site with the stock splash timings.

use std::collections::HashSet;
use std::path::Path;

use folio_core::SplashConfig;
use folio_logging::LogConfig;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand shown in the splash and navbar
    pub brand: String,
    /// Role line under the brand
    pub role: String,
    /// Short line shown in the footer
    pub tagline: String,
    /// Splash timings and phrases
    pub splash: SplashConfig,
    /// Page sections, in display order
    pub sections: Vec<SectionConfig>,
    /// Logging settings
    pub log: LogConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Folio".to_string(),
            role: "Software Engineer".to_string(),
            tagline: "Built with Rust and Dioxus".to_string(),
            splash: SplashConfig::default(),
            sections: default_sections(),
            log: LogConfig::default(),
        }
    }
}

/// One anchored section of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Anchor id, used for `#id` navigation
    pub id: String,
    pub title: String,
    /// Small heading above the title
    #[serde(default)]
    pub eyebrow: Option<String>,
    /// Paragraphs of body text
    #[serde(default)]
    pub body: Vec<String>,
}

impl SectionConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            eyebrow: None,
            body: Vec::new(),
        }
    }

    /// Navigation href for this section
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

fn default_sections() -> Vec<SectionConfig> {
    ["Home", "About", "Skills", "Projects", "Contact"]
        .into_iter()
        .map(|title| SectionConfig::new(title.to_lowercase(), title))
        .collect()
}

impl SiteConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| SiteError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check splash timings and section ids
    pub fn validate(&self) -> SiteResult<()> {
        self.splash.validate()?;

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(SiteError::EmptySectionId(section.title.clone()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(SiteError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }
}
