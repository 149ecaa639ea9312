//! The fixed set of output channels content is generated for.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// An output channel with its own instruction text and result shape.
///
/// # Examples
///
/// ```
/// use castmark_core::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(format!("{}", Platform::YouTube), "youtube");
/// assert_eq!(Platform::from_str("podcast").unwrap(), Platform::Podcast);
/// assert_eq!(Platform::all().len(), 4);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    /// YouTube strategy: titles, description, tags, chapters, end screen
    YouTube,
    /// Thumbnail creative briefs with generation prompts
    Thumbnail,
    /// Spotify / Apple Podcasts listings
    Podcast,
    /// Short-clip social assets (captions, hashtags, overlays)
    Social,
}

impl Platform {
    /// All known platforms, in canonical order.
    pub fn all() -> Vec<Platform> {
        Platform::iter().collect()
    }

    /// Human-readable label for UI surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Thumbnail => "Thumbnails",
            Platform::Podcast => "Spotify / Apple",
            Platform::Social => "Social / Clips",
        }
    }
}
