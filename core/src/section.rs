use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of a page section, matching the `id` of its DOM anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Builds an id from a raw fragment, dropping a leading `#`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().trim_start_matches('#');
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.trim_start_matches('#').to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("section id must not be empty")]
    EmptyId,
    #[error("section `{0}` is registered twice")]
    Duplicate(SectionId),
}

/// Ordered list of the page sections, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    ids: Vec<SectionId>,
}

impl SectionRegistry {
    pub fn new<I, S>(ids: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registered: Vec<SectionId> = Vec::new();
        for raw in ids {
            let id = SectionId::parse(raw.as_ref()).ok_or(SectionError::EmptyId)?;
            if registered.contains(&id) {
                return Err(SectionError::Duplicate(id));
            }
            registered.push(id);
        }
        Ok(Self { ids: registered })
    }

    pub fn ids(&self) -> &[SectionId] {
        &self.ids
    }

    pub fn first(&self) -> Option<&SectionId> {
        self.ids.first()
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.ids.contains(id)
    }

    /// Returns the registered id for a raw fragment, if any.
    pub fn resolve(&self, raw: &str) -> Option<&SectionId> {
        let wanted = SectionId::parse(raw)?;
        self.ids.iter().find(|id| **id == wanted)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: the top edge belongs to the section, the bottom edge does not.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Measures where sections currently sit on the page.
///
/// The browser implementation reads the DOM; tests use a fixed table.
pub trait SectionLayout {
    fn span(&self, id: &SectionId) -> Option<SectionSpan>;
}

impl SectionLayout for Vec<(SectionId, SectionSpan)> {
    fn span(&self, id: &SectionId) -> Option<SectionSpan> {
        self.iter()
            .find(|(candidate, _)| candidate == id)
            .map(|(_, span)| *span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_hash_and_rejects_empty() {
        assert_eq!(SectionId::parse("#about").unwrap().as_str(), "about");
        assert_eq!(SectionId::parse(" contact ").unwrap().as_str(), "contact");
        assert!(SectionId::parse("#").is_none());
        assert!(SectionId::parse("").is_none());
    }

    #[test]
    fn registry_keeps_order() {
        let registry = SectionRegistry::new(["home", "projects", "about"]).unwrap();
        let ids: Vec<&str> = registry.ids().iter().map(SectionId::as_str).collect();
        assert_eq!(ids, vec!["home", "projects", "about"]);
        assert_eq!(registry.first().unwrap().as_str(), "home");
    }

    #[test]
    fn registry_rejects_duplicates() {
        let err = SectionRegistry::new(["home", "about", "#about"]).unwrap_err();
        assert_eq!(err, SectionError::Duplicate(SectionId::from("about")));
    }

    #[test]
    fn registry_rejects_empty_ids() {
        assert_eq!(
            SectionRegistry::new(["home", ""]).unwrap_err(),
            SectionError::EmptyId
        );
    }

    #[test]
    fn resolve_accepts_fragments() {
        let registry = SectionRegistry::new(["home", "about"]).unwrap();
        assert_eq!(registry.resolve("#about").unwrap().as_str(), "about");
        assert!(registry.resolve("#missing").is_none());
    }

    #[test]
    fn span_is_half_open() {
        let span = SectionSpan::new(100.0, 50.0);
        assert!(span.contains(100.0));
        assert!(span.contains(149.9));
        assert!(!span.contains(150.0));
        assert!(!span.contains(99.9));
    }
}
