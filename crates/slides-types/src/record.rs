//! The three persisted record shapes and their invariant helpers.
//!
//! Records are stored as whole JSON documents in a key-value metadata store:
//! an [`IndexRecord`] under the owning user's id and a [`DetailRecord`] under
//! each slide's id. The store has no partial-field update, so every mutation
//! is a read-whole-record / modify / write-whole-record cycle in the caller.
//!
//! The wire field names (`number_of_slides`, `create_date`, `type`, the
//! detail record's flattened summary, ...) are a stored-data contract:
//! existing records must keep deserializing across releases.
//!
//! The count fields are denormalized copies of the list lengths. Use the
//! mutation helpers (`push_slide`, `remove_page`, ...) rather than editing
//! the lists directly; they keep `slide_count == slides.len()` and
//! `page_count == pages.len()` true through every mutation.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::time::Timestamp;

/// Index entry describing one slide a user owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSummary {
    pub title: String,
    pub id: String,
    #[serde(rename = "create_date")]
    pub created_at: Timestamp,
    #[serde(rename = "change_date")]
    pub changed_at: Timestamp,
}

/// Structural entry for one page of a slide. The page's content lives in the
/// blob store, addressed by the page id; only position and type are tracked
/// here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub page_id: String,
    #[serde(rename = "type")]
    pub page_type: String,
}

/// Per-user record listing every slide the user owns. Keyed by user id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    #[serde(rename = "number_of_slides")]
    pub slide_count: usize,
    pub slides: Vec<SlideSummary>,
}

impl IndexRecord {
    /// The record a user without slides reads as: zero slides, empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Position of a slide id in the listing, by linear scan.
    pub fn position_of(&self, slide_id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == slide_id)
    }

    /// Append a slide entry and bump the count.
    pub fn push_slide(&mut self, slide: SlideSummary) {
        self.slides.push(slide);
        self.slide_count = self.slides.len();
    }

    /// Remove the entry at `index`, preserving the order of the rest.
    pub fn remove_slide(&mut self, index: usize) -> SlideSummary {
        let removed = self.slides.remove(index);
        self.slide_count = self.slides.len();
        removed
    }

    /// Serialize to the stored JSON form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        encode(self)
    }

    /// Deserialize from the stored JSON form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        decode(bytes)
    }
}

/// Per-slide record listing every page the slide owns, plus an embedded copy
/// of the slide's index entry. Keyed by slide id.
///
/// The embedded summary is a denormalized copy of the [`IndexRecord`] entry;
/// renames rewrite both, non-atomically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "number_of_pages")]
    pub page_count: usize,
    pub pages: Vec<PageSummary>,
    #[serde(flatten)]
    pub summary: SlideSummary,
}

impl DetailRecord {
    /// A fresh detail record for a slide with no pages yet.
    pub fn new(summary: SlideSummary) -> Self {
        Self {
            page_count: 0,
            pages: Vec::new(),
            summary,
        }
    }

    /// Position of a page id in the listing, by linear scan.
    pub fn position_of_page(&self, page_id: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.page_id == page_id)
    }

    /// Append a page entry and bump the count.
    pub fn push_page(&mut self, page: PageSummary) {
        self.pages.push(page);
        self.page_count = self.pages.len();
    }

    /// Remove the entry at `index`, preserving the order of the rest.
    pub fn remove_page(&mut self, index: usize) -> PageSummary {
        let removed = self.pages.remove(index);
        self.page_count = self.pages.len();
        removed
    }

    /// Exchange two page positions in place.
    pub fn swap_pages(&mut self, origin: usize, target: usize) {
        self.pages.swap(origin, target);
    }

    /// Serialize to the stored JSON form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        encode(self)
    }

    /// Deserialize from the stored JSON form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        decode(bytes)
    }
}

fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, TypeError> {
    serde_json::to_vec(record).map_err(|e| TypeError::Serialization(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, TypeError> {
    serde_json::from_slice(bytes).map_err(|e| TypeError::Serialization(e.to_string()))
}
