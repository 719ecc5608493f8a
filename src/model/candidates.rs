//! Candidate place names for autocomplete.
//!
//! The candidate set is loaded once at startup and never mutated afterwards.
//! Order is significant: match lists preserve it.

use crate::model::error::CandidateError;
use std::path::Path;

/// Sydney suburbs shipped as the default candidate set.
pub const SYDNEY_SUBURBS: &[&str] = &[
    "Bondi",
    "Bondi Beach",
    "Bondi Junction",
    "Bronte",
    "Clovelly",
    "Coogee",
    "Double Bay",
    "Dover Heights",
    "Paddington",
    "Point Piper",
    "Rose Bay",
    "Surry Hills",
    "Potts Point",
    "Darlinghurst",
    "Kings Cross",
    "Woollahra",
    "Bellevue Hill",
    "Vaucluse",
    "Watsons Bay",
    "Tamarama",
    "Randwick",
    "Kensington",
    "Maroubra",
    "Mascot",
    "Alexandria",
    "Waterloo",
    "Zetland",
    "Newtown",
    "Glebe",
    "Annandale",
    "Leichhardt",
    "Balmain",
    "Birchgrove",
    "Rozelle",
    "Pyrmont",
    "Ultimo",
    "Sydney CBD",
    "The Rocks",
    "Circular Quay",
    "Mosman",
    "Neutral Bay",
    "Cremorne",
    "Cammeray",
    "North Sydney",
    "Milsons Point",
    "Kirribilli",
    "McMahons Point",
    "Waverton",
    "Wollstonecraft",
    "Artarmon",
    "Chatswood",
    "Lane Cove",
    "Greenwich",
    "Hunters Hill",
    "Woolwich",
    "Manly",
    "Dee Why",
    "Brookvale",
    "Frenchs Forest",
    "Warringah",
    "Avalon",
    "Palm Beach",
    "Whale Beach",
    "Collaroy",
    "Narrabeen",
    "Mona Vale",
];

/// Ordered, immutable list of place names.
///
/// Duplicates are kept as-is. Case is preserved for display; matching
/// lowercases on the fly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    names: Vec<String>,
}

impl CandidateSet {
    /// Build a candidate set from names, keeping their order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in Sydney suburb list.
    pub fn sydney() -> Self {
        Self::from_names(SYDNEY_SUBURBS.iter().copied())
    }

    /// Parse a newline-delimited list.
    ///
    /// Lines are trimmed. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_names(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Read and parse a candidate file.
    ///
    /// An empty file is not an error; it produces an empty set.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CandidateError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| CandidateError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let set = Self::parse(&contents);
        tracing::info!(path = ?path, count = set.len(), "Loaded candidate file");
        Ok(set)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
