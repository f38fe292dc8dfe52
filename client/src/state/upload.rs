//! Image upload workflow for the post composer.
//!
//! DESIGN
//! ======
//! `Idle -> Uploading -> {Succeeded, Failed}`. Every attempt gets a fresh
//! ticket; events carrying an older ticket are dropped, so selecting a new
//! file while an upload is in flight supersedes the old one (the page also
//! cancels the superseded task).
//!
//! Transport detail never reaches the UI: failures collapse to a fixed
//! message and the underlying reason is only logged.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::storage::{ContentStore, SelectedFile, UploadEvent, UploadSink, UploadTask, storage_key};
use crate::state::draft::DraftPost;

pub const SELECT_IMAGE_MESSAGE: &str = "Please select an image";
pub const UPLOAD_FAILED_MESSAGE: &str = "Image upload failed";

/// Phase of the current upload attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    /// `progress` is the latest whole-percent snapshot, absent until the
    /// first byte counters arrive.
    Uploading { progress: Option<u8> },
    Succeeded,
    Failed { message: String },
}

/// Upload state owned by one composer instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub status: UploadStatus,
    ticket: u64,
}

impl UploadState {
    /// Ticket of the most recent attempt.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.status, UploadStatus::Uploading { .. })
    }

    pub fn progress(&self) -> Option<u8> {
        match self.status {
            UploadStatus::Uploading { progress } => progress,
            _ => None,
        }
    }

    /// Progress as displayed next to the file input, e.g. `"50"`.
    pub fn progress_label(&self) -> Option<String> {
        self.progress().map(|p| p.to_string())
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Enter `Uploading` for `file` and return the new ticket.
    ///
    /// With no file the attempt fails immediately and no ticket is issued.
    pub fn begin(&mut self, file: Option<&SelectedFile>) -> Option<u64> {
        if file.is_none() {
            self.status = UploadStatus::Failed { message: SELECT_IMAGE_MESSAGE.to_owned() };
            return None;
        }
        self.ticket += 1;
        self.status = UploadStatus::Uploading { progress: None };
        Some(self.ticket)
    }

    /// Apply a store event. Returns the download URL when `ticket`'s upload completes.
    pub fn apply(&mut self, ticket: u64, event: UploadEvent) -> Option<String> {
        if ticket != self.ticket || !self.is_uploading() {
            return None;
        }
        match event {
            UploadEvent::Progress { transferred, total } => {
                if let Some(percent) = progress_percent(transferred, total) {
                    self.status = UploadStatus::Uploading { progress: Some(percent) };
                }
                None
            }
            UploadEvent::Completed { url } => {
                self.status = UploadStatus::Succeeded;
                Some(url)
            }
            UploadEvent::Failed { reason } => {
                log::warn!("image upload {ticket} failed: {reason}");
                self.fail();
                None
            }
        }
    }

    /// Apply a store event and attach the resolved URL to `draft`.
    ///
    /// Returns `true` when the draft's image changed.
    pub fn apply_to_draft(&mut self, draft: &mut DraftPost, ticket: u64, event: UploadEvent) -> bool {
        match self.apply(ticket, event) {
            Some(url) => {
                draft.set_image(url);
                true
            }
            None => false,
        }
    }

    fn fail(&mut self) {
        self.status = UploadStatus::Failed { message: UPLOAD_FAILED_MESSAGE.to_owned() };
    }
}

/// `transferred / total * 100` rounded to a whole percent, clamped to `0..=100`.
/// Returns `None` while the total size is unknown.
pub fn progress_percent(transferred: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = transferred as f64 / total as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;
    Some(percent)
}

/// Begin an upload of `file` through `store`.
///
/// `make_sink` receives the attempt's ticket and must route events back into
/// `UploadState::apply` with that ticket. Returns the running task, or `None`
/// when the guard rejected the attempt or the store could not start it.
pub fn start_upload<S, F>(
    state: &mut UploadState,
    store: &S,
    file: Option<&SelectedFile>,
    now_ms: u64,
    make_sink: F,
) -> Option<UploadTask>
where
    S: ContentStore + ?Sized,
    F: FnOnce(u64) -> UploadSink,
{
    let ticket = state.begin(file)?;
    let file = file?;
    let key = storage_key(now_ms, &file.name);
    match store.upload(file, &key, make_sink(ticket)) {
        Ok(task) => Some(task),
        Err(e) => {
            log::warn!("image upload could not start: {e}");
            state.fail();
            None
        }
    }
}
