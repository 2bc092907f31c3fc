//! The slide manager: every document and page operation for one user.

use std::sync::Arc;

use slides_store::{BlobPath, BlobStore, MetadataStore};
use slides_types::{derive_id, DetailRecord, IndexRecord, PageSummary, SlideSummary, Timestamp};

use crate::error::{ManagerError, ManagerResult};

/// Root segment under which all page blobs live.
const PAGES_ROOT: &str = "pages";

/// Orchestrates slide and page operations for one authenticated user.
///
/// The manager is bound to a pre-verified user id at construction; every
/// operation implicitly scopes to that user. State lives in two places: the
/// metadata store holds the user's [`IndexRecord`] (under the user id) and
/// one [`DetailRecord`] per slide (under the slide id), while page content
/// lives in the blob store under `pages/{user_id}/{slide_id}/{page_id}`.
///
/// Neither store offers transactions or conditional writes, so every
/// mutation here is a whole-record read-modify-write. Two consequences are
/// part of the contract:
///
/// - Concurrent operations against the same user or slide can race; the
///   last write wins and the earlier one is lost.
/// - Operations that touch several records (rename, timestamp propagation)
///   write them in a fixed order and can fail between writes, leaving the
///   records divergent. Such failures surface to the caller and are logged.
///
/// No operation retries; any store failure is returned immediately.
pub struct SlideManager {
    user_id: String,
    metadata: Arc<dyn MetadataStore>,
    blobs: Arc<dyn BlobStore>,
}

impl SlideManager {
    /// Bind a manager to one user over the given stores.
    pub fn new(
        metadata: Arc<dyn MetadataStore>,
        blobs: Arc<dyn BlobStore>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            metadata,
            blobs,
        }
    }

    /// The user this manager is bound to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    // -----------------------------------------------------------------------
    // Slide operations
    // -----------------------------------------------------------------------

    /// Create a slide titled `title` and return its id.
    ///
    /// A missing index record means "no slides yet", not an error: the first
    /// create starts from the empty record.
    pub fn create(&self, title: &str) -> ManagerResult<String> {
        let slide_id = derive_id(title);
        let now = Timestamp::now();
        let summary = SlideSummary {
            title: title.to_string(),
            id: slide_id.clone(),
            created_at: now.clone(),
            changed_at: now,
        };

        let mut index = self.info()?;
        index.push_slide(summary);
        self.write_index(&index)?;

        tracing::debug!(user = %self.user_id, slide = %slide_id, "created slide");
        Ok(slide_id)
    }

    /// The user's index record; the empty record if none is stored.
    pub fn info(&self) -> ManagerResult<IndexRecord> {
        Ok(self.read_index()?.unwrap_or_default())
    }

    /// The detail record for `slide_id`, materializing it on first access.
    ///
    /// Detail records are created lazily: if none is stored but the slide is
    /// listed in the index, a fresh record (no pages, summary copied from
    /// the index entry) is persisted and returned. A read can therefore
    /// cause a write. Fails with [`ManagerError::SlideNotFound`] if the
    /// slide is not in the index either.
    pub fn slide_details(&self, slide_id: &str) -> ManagerResult<DetailRecord> {
        if let Some(detail) = self.read_detail(slide_id)? {
            return Ok(detail);
        }

        let index = self.info()?;
        let position = index
            .position_of(slide_id)
            .ok_or_else(|| ManagerError::SlideNotFound(slide_id.to_string()))?;
        let detail = DetailRecord::new(index.slides[position].clone());
        self.write_detail(slide_id, &detail)?;

        tracing::debug!(user = %self.user_id, slide = %slide_id, "materialized detail record");
        Ok(detail)
    }

    /// Retitle a slide in both the index entry and the detail record.
    ///
    /// The two writes are not atomic. The index is written first; if the
    /// detail read or write then fails, the title is left divergent between
    /// the records until a later rename converges them.
    pub fn rename(&self, slide_id: &str, new_name: &str) -> ManagerResult<()> {
        let mut index = self
            .read_index()?
            .ok_or_else(|| ManagerError::SlideNotFound(slide_id.to_string()))?;
        let position = index
            .position_of(slide_id)
            .ok_or_else(|| ManagerError::SlideNotFound(slide_id.to_string()))?;
        index.slides[position].title = new_name.to_string();
        self.write_index(&index)?;

        let mut detail = match self.read_detail(slide_id) {
            Ok(Some(detail)) => detail,
            Ok(None) => {
                tracing::warn!(user = %self.user_id, slide = %slide_id,
                    "index renamed but no detail record exists; titles diverge");
                return Err(ManagerError::SlideNotFound(slide_id.to_string()));
            }
            Err(err) => {
                tracing::warn!(user = %self.user_id, slide = %slide_id,
                    "index renamed but detail read failed; titles diverge: {err}");
                return Err(err);
            }
        };
        detail.summary.title = new_name.to_string();
        if let Err(err) = self.write_detail(slide_id, &detail) {
            tracing::warn!(user = %self.user_id, slide = %slide_id,
                "index renamed but detail write failed; titles diverge: {err}");
            return Err(err);
        }
        Ok(())
    }

    /// Delete a slide: its index entry, its detail record, and every page
    /// blob under it.
    ///
    /// The detail delete is best-effort in the sense that a slide which was
    /// never detailed has no record to remove; only store failures are
    /// errors. Remaining index entries keep their order.
    pub fn delete(&self, slide_id: &str) -> ManagerResult<()> {
        let mut index = self
            .read_index()?
            .ok_or_else(|| ManagerError::SlideNotFound(slide_id.to_string()))?;
        let position = index
            .position_of(slide_id)
            .ok_or_else(|| ManagerError::SlideNotFound(slide_id.to_string()))?;
        index.remove_slide(position);
        self.write_index(&index)?;

        self.metadata.delete(slide_id)?;
        self.blobs.delete_prefix(&self.slide_dir(slide_id))?;

        tracing::debug!(user = %self.user_id, slide = %slide_id, "deleted slide");
        Ok(())
    }

    /// Delete every slide the user owns, the index record itself, and every
    /// page blob of the user. Succeeds as a no-op when no index exists.
    pub fn delete_all(&self) -> ManagerResult<()> {
        let index = match self.read_index()? {
            Some(index) => index,
            None => return Ok(()),
        };

        for slide in &index.slides {
            self.metadata.delete(&slide.id)?;
        }
        self.metadata.delete(&self.user_id)?;
        self.blobs.delete_prefix(&self.user_root())?;

        tracing::debug!(user = %self.user_id, slides = index.slide_count, "deleted all slides");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Page operations
    // -----------------------------------------------------------------------

    /// Add a page of `page_type` to a slide and return its summary.
    ///
    /// Goes through the lazy detail materialization, so the first page added
    /// to a never-detailed slide creates the detail record on the way.
    pub fn create_page(&self, slide_id: &str, page_type: &str) -> ManagerResult<PageSummary> {
        let mut detail = self.slide_details(slide_id)?;

        let page = PageSummary {
            page_id: derive_id(slide_id),
            page_type: page_type.to_string(),
        };
        detail.push_page(page.clone());
        detail.summary.changed_at = Timestamp::now();
        self.write_detail(slide_id, &detail)?;

        self.touch_timestamps(true, false, slide_id)?;

        tracing::debug!(user = %self.user_id, slide = %slide_id, page = %page.page_id, "created page");
        Ok(page)
    }

    /// Write a page's content blob.
    ///
    /// The write is unconditional: no check that a matching [`PageSummary`]
    /// exists, so a blob can be created for a page the detail record never
    /// listed. The subsequent timestamp propagation still requires the slide
    /// to be in the index, and its failure does not undo the blob write.
    pub fn set_page(&self, data: &[u8], slide_id: &str, page_id: &str) -> ManagerResult<()> {
        let path = self.slide_dir(slide_id).child(page_id);
        self.blobs.write(&path, data)?;
        self.touch_timestamps(true, true, slide_id)?;
        Ok(())
    }

    /// Read a page's content blob.
    ///
    /// A page that was never written reads as empty bytes, not as an error;
    /// callers distinguish "not yet written" from failure by this sentinel.
    pub fn page(&self, slide_id: &str, page_id: &str) -> ManagerResult<Vec<u8>> {
        let path = self.slide_dir(slide_id).child(page_id);
        if !self.blobs.exists(&path)? {
            return Ok(Vec::new());
        }
        Ok(self.blobs.read(&path)?.unwrap_or_default())
    }

    /// Exchange the pages at `origin` and `target` in a slide's page list.
    ///
    /// Both positions must be in range; otherwise the record is left
    /// unchanged and [`ManagerError::IndexOutOfRange`] is returned. Swapping
    /// a position with itself is a valid no-op that still stamps the change
    /// timestamps.
    pub fn swap_pages(&self, slide_id: &str, origin: usize, target: usize) -> ManagerResult<()> {
        let mut detail = self.slide_details(slide_id)?;
        let count = detail.pages.len();
        if origin >= count || target >= count {
            let index = if origin >= count { origin } else { target };
            return Err(ManagerError::IndexOutOfRange { index, count });
        }

        detail.swap_pages(origin, target);
        detail.summary.changed_at = Timestamp::now();
        self.write_detail(slide_id, &detail)?;

        self.touch_timestamps(true, false, slide_id)?;
        Ok(())
    }

    /// Remove a page from a slide's detail record and delete its blob.
    ///
    /// Requires an existing detail record. Remaining pages keep their order.
    pub fn delete_page(&self, slide_id: &str, page_id: &str) -> ManagerResult<()> {
        let mut detail = self
            .read_detail(slide_id)?
            .ok_or_else(|| ManagerError::SlideNotFound(slide_id.to_string()))?;
        let position = detail
            .position_of_page(page_id)
            .ok_or_else(|| ManagerError::PageNotFound(page_id.to_string()))?;
        detail.remove_page(position);
        detail.summary.changed_at = Timestamp::now();
        self.write_detail(slide_id, &detail)?;

        self.touch_timestamps(true, false, slide_id)?;

        self.blobs.delete_prefix(&self.slide_dir(slide_id).child(page_id))?;

        tracing::debug!(user = %self.user_id, slide = %slide_id, page = %page_id, "deleted page");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Stamp `changed_at` on the index entry and/or the detail record for
    /// `slide_id`.
    ///
    /// The store has no partial-field update, so each touch is a full
    /// reload-stamp-rewrite of the whole record. The index branch fails with
    /// [`ManagerError::SlideNotFound`] if the slide is not listed. The
    /// detail branch goes through the lazy materialization path, so touching
    /// a never-detailed slide materializes its record first.
    fn touch_timestamps(
        &self,
        update_index: bool,
        update_detail: bool,
        slide_id: &str,
    ) -> ManagerResult<()> {
        let now = Timestamp::now();

        if update_index {
            let mut index = self.info()?;
            let position = index
                .position_of(slide_id)
                .ok_or_else(|| ManagerError::SlideNotFound(slide_id.to_string()))?;
            index.slides[position].changed_at = now.clone();
            self.write_index(&index)?;
        }

        if update_detail {
            let mut detail = self.slide_details(slide_id)?;
            detail.summary.changed_at = now;
            self.write_detail(slide_id, &detail)?;
        }

        Ok(())
    }

    /// Read the user's index record. Absent keys and empty stored bytes both
    /// read as `None`.
    fn read_index(&self) -> ManagerResult<Option<IndexRecord>> {
        match self.metadata.get(&self.user_id)? {
            Some(bytes) if !bytes.is_empty() => {
                let record = IndexRecord::from_bytes(&bytes).map_err(|e| {
                    ManagerError::CorruptRecord {
                        key: self.user_id.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(Some(record))
            }
            _ => Ok(None),
        }
    }

    fn write_index(&self, record: &IndexRecord) -> ManagerResult<()> {
        let bytes = record.to_bytes().map_err(|e| ManagerError::CorruptRecord {
            key: self.user_id.clone(),
            reason: e.to_string(),
        })?;
        self.metadata.set(&self.user_id, &bytes)?;
        Ok(())
    }

    /// Read a slide's detail record. Absent keys and empty stored bytes both
    /// read as `None`.
    fn read_detail(&self, slide_id: &str) -> ManagerResult<Option<DetailRecord>> {
        match self.metadata.get(slide_id)? {
            Some(bytes) if !bytes.is_empty() => {
                let record = DetailRecord::from_bytes(&bytes).map_err(|e| {
                    ManagerError::CorruptRecord {
                        key: slide_id.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(Some(record))
            }
            _ => Ok(None),
        }
    }

    fn write_detail(&self, slide_id: &str, record: &DetailRecord) -> ManagerResult<()> {
        let bytes = record.to_bytes().map_err(|e| ManagerError::CorruptRecord {
            key: slide_id.to_string(),
            reason: e.to_string(),
        })?;
        self.metadata.set(slide_id, &bytes)?;
        Ok(())
    }

    /// Blob directory for all of the user's pages: `pages/{user_id}`.
    fn user_root(&self) -> BlobPath {
        BlobPath::new([PAGES_ROOT, self.user_id.as_str()])
    }

    /// Blob directory for one slide's pages: `pages/{user_id}/{slide_id}`.
    fn slide_dir(&self, slide_id: &str) -> BlobPath {
        self.user_root().child(slide_id)
    }
}

impl std::fmt::Debug for SlideManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideManager")
            .field("user_id", &self.user_id)
            .finish()
    }
}
