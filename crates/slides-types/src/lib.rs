//! Foundation types for the slide document service.
//!
//! This crate provides the record shapes, timestamps, and identifier
//! derivation used throughout the service. Every other slides crate depends
//! on `slides-types`.
//!
//! # Key Types
//!
//! - [`IndexRecord`] — Per-user listing of every slide the user owns
//! - [`DetailRecord`] — Per-slide listing of every page the slide owns
//! - [`SlideSummary`] / [`PageSummary`] — The entries inside those listings
//! - [`Timestamp`] — 14-digit `YYYYMMDDHHMMSS` string rendered at UTC+9
//! - [`derive_id`] — Hash-derived identifier for new slides and pages
//!
//! Records persist as JSON; the wire field names are part of the stored data
//! contract and must not change (see [`record`]).

pub mod error;
pub mod id;
pub mod record;
pub mod time;

pub use error::TypeError;
pub use id::derive_id;
pub use record::{DetailRecord, IndexRecord, PageSummary, SlideSummary};
pub use time::Timestamp;
