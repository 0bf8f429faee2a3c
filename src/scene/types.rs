use crate::error::DeckError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Presentation {
    #[serde(default)]
    pub intro: Vec<IntroSlide>,
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl Presentation {
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let presentation = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            intro = presentation.intro.len(),
            units = presentation.units.len(),
            "presentation loaded"
        );
        Ok(presentation)
    }
}

/// Static slide shown before the code walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IntroSlide {
    Cover {
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtitle: String,
        #[serde(default)]
        big_text: String,
    },
    Team {
        #[serde(default)]
        title: String,
        #[serde(default)]
        members: Vec<String>,
    },
    Features {
        #[serde(default)]
        title: String,
        #[serde(default)]
        items: Vec<Feature>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub add: Vec<Annotation>,
}

/// Annotation attached to the first line containing `anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub anchor: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}
