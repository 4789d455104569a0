//! Card content configuration
//!
//! The card ships with built-in content; a JSON file swaps in a different
//! recipient, letter, or track without rebuilding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Everything the card displays, plus the track it plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Name in the greeting headline
    pub recipient: String,
    /// Line under the headline
    pub subtitle: String,
    /// Label on the button that reveals the letter
    pub reveal_label: String,
    /// Heading above the letter
    pub letter_title: String,
    /// Letter body, one entry per paragraph
    pub letter: Vec<String>,
    /// Closing line under the letter
    pub signoff: String,
    /// Display title of the music track, used in the manual-play prompt
    pub track_title: String,
    /// Path to a loopable audio file (mp3/wav/ogg)
    pub track: PathBuf,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recipient: "Friend".to_string(),
            subtitle: "Another year of wonderful you".to_string(),
            reveal_label: "Click to read your letter".to_string(),
            letter_title: "A Letter For You".to_string(),
            letter: vec![
                "Some people make every year brighter just by being in it. \
                 You are one of them."
                    .to_string(),
                "Wherever this birthday finds you, I hope it brings you the \
                 kind of joy you hand out so freely to everyone else."
                    .to_string(),
                "Happy birthday. Celebrate loudly.".to_string(),
            ],
            signoff: "With love, from your people".to_string(),
            track_title: "the birthday song".to_string(),
            track: PathBuf::from("assets/birthday-song.mp3"),
        }
    }
}

impl CardConfig {
    /// Load card content from a JSON file. Missing fields keep their
    /// built-in defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading card config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing card config {}", path.display()))?;
        Ok(config)
    }
}
