//! Slide and page orchestration for the slide document service.
//!
//! [`SlideManager`] is the only component with business logic: it keeps a
//! per-user index record, per-slide detail records, and per-page content
//! blobs consistent across two independent stores that offer nothing beyond
//! get/set/delete. Every mutation is a whole-record read-modify-write, and
//! every multi-record operation defines an explicit policy for partial
//! failure, missing records, and ordering.
//!
//! Authentication happens upstream: a manager is constructed with an
//! already-verified user id and scopes every operation to that user.

pub mod error;
pub mod manager;

pub use error::{ManagerError, ManagerResult};
pub use manager::SlideManager;
