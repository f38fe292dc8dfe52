//! Image content store used by the post composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The composer depends on `ContentStore` only; the concrete backend is
//! provided through Leptos context by the root `App`. In the browser build
//! that is `FirebaseStore`, which streams the file with `XMLHttpRequest` so
//! upload progress can be observed, then resolves a durable download URL.
//!
//! ERROR HANDLING
//! ==============
//! Failures to *start* an upload are returned as `StoreError`. Everything
//! after a successful start arrives through the `UploadSink` as
//! `UploadEvent::Failed`, never as a panic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::rc::Rc;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::StorageConfig;

/// Notification emitted by a running upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadEvent {
    /// Byte counters from the transport; `total` may be zero if unknown.
    Progress { transferred: u64, total: u64 },
    /// The object is stored and reachable at `url`.
    Completed { url: String },
    /// Transport or backend failure. `reason` is diagnostic detail only.
    Failed { reason: String },
}

/// Receiver for upload notifications. Stores must invoke it asynchronously,
/// never from inside `ContentStore::upload`.
pub type UploadSink = Rc<dyn Fn(UploadEvent)>;

/// Handle to a started upload.
///
/// Must be kept alive until the upload finishes; dropping it releases the
/// transport callbacks without aborting the request.
pub struct UploadTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl UploadTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A task with nothing to cancel.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Abort the upload. No further events are delivered for it.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for UploadTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadTask")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Errors raised while initiating an upload.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The browser refused to build or send the request.
    #[error("upload request could not be started: {0}")]
    Request(String),

    /// No storage backend exists in this build (server rendering).
    #[error("content store unavailable outside the browser")]
    Unavailable,
}

/// A file picked by the user.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub content_type: String,
    #[cfg(feature = "hydrate")]
    handle: web_sys::File,
}

impl SelectedFile {
    #[cfg(feature = "hydrate")]
    pub fn from_file(file: web_sys::File) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size().max(0.0) as u64;
        Self { name: file.name(), size, content_type: file.type_(), handle: file }
    }

    /// Metadata-only file for non-browser builds.
    #[cfg(not(feature = "hydrate"))]
    pub fn new(name: impl Into<String>, size: u64, content_type: impl Into<String>) -> Self {
        Self { name: name.into(), size, content_type: content_type.into() }
    }

    /// Content type sent with the upload; browsers leave it empty for unknown types.
    pub fn effective_content_type(&self) -> &str {
        if self.content_type.is_empty() { "application/octet-stream" } else { &self.content_type }
    }
}

/// Capability to store a binary object and report its progress.
pub trait ContentStore: Send + Sync {
    /// Start streaming `file` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the upload cannot be initiated. Failures after
    /// a successful start are reported through `sink`.
    fn upload(&self, file: &SelectedFile, key: &str, sink: UploadSink) -> Result<UploadTask, StoreError>;
}

/// Shared content store provided to pages through Leptos context.
#[derive(Clone)]
pub struct StoreHandle(Arc<dyn ContentStore>);

impl StoreHandle {
    pub fn new(store: impl ContentStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    pub fn store(&self) -> &dyn ContentStore {
        self.0.as_ref()
    }
}

/// Object key for an upload: epoch milliseconds immediately followed by the
/// original filename. Two uploads of the same name in the same millisecond
/// share a key.
pub fn storage_key(now_ms: u64, filename: &str) -> String {
    format!("{now_ms}{filename}")
}

/// Media-upload endpoint for an already URL-encoded object name.
pub fn upload_endpoint(config: &StorageConfig, encoded_name: &str) -> String {
    format!("{}/b/{}/o?uploadType=media&name={encoded_name}", config.api_base, config.bucket)
}

/// Durable download URL for an already URL-encoded object name.
pub fn download_url(config: &StorageConfig, encoded_name: &str, token: &str) -> String {
    format!("{}/b/{}/o/{encoded_name}?alt=media&token={token}", config.api_base, config.bucket)
}

/// Stored object metadata returned by the storage backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    pub name: String,
    pub download_token: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    name: String,
    #[serde(rename = "downloadTokens")]
    download_tokens: Option<String>,
}

/// Parse the backend's upload response into the object name and first download token.
///
/// # Errors
///
/// Returns a diagnostic string if the body is not the expected JSON or
/// carries no download token.
pub fn parse_upload_response(body: &str) -> Result<StoredObject, String> {
    let resp: UploadResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    let token = resp
        .download_tokens
        .as_deref()
        .and_then(|tokens| tokens.split(',').map(str::trim).find(|t| !t.is_empty()))
        .ok_or_else(|| "upload response has no download token".to_owned())?;
    Ok(StoredObject { name: resp.name, download_token: token.to_owned() })
}

/// Translate the finished HTTP exchange into the terminal upload event.
pub fn completion_event<E>(config: &StorageConfig, status: u16, body: &str, encode: E) -> UploadEvent
where
    E: Fn(&str) -> String,
{
    if !(200..300).contains(&status) {
        return UploadEvent::Failed { reason: format!("storage responded with status {status}") };
    }
    match parse_upload_response(body) {
        Ok(object) => UploadEvent::Completed {
            url: download_url(config, &encode(&object.name), &object.download_token),
        },
        Err(reason) => UploadEvent::Failed { reason },
    }
}

/// Firebase Storage backend driven by `XMLHttpRequest`.
#[derive(Clone, Debug)]
pub struct FirebaseStore {
    config: StorageConfig,
}

impl FirebaseStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }
}

impl ContentStore for FirebaseStore {
    #[cfg(feature = "hydrate")]
    fn upload(&self, file: &SelectedFile, key: &str, sink: UploadSink) -> Result<UploadTask, StoreError> {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let js_err = |e: wasm_bindgen::JsValue| StoreError::Request(format!("{e:?}"));
        let encode = |s: &str| -> String { js_sys::encode_uri_component(s).into() };

        let xhr = web_sys::XmlHttpRequest::new().map_err(js_err)?;
        xhr.open_with_async("POST", &upload_endpoint(&self.config, &encode(key)), true)
            .map_err(js_err)?;
        xhr.set_request_header("Content-Type", file.effective_content_type())
            .map_err(js_err)?;

        let on_progress = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new({
            let sink = Rc::clone(&sink);
            move |ev: web_sys::ProgressEvent| {
                if !ev.length_computable() {
                    return;
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                sink(UploadEvent::Progress { transferred: ev.loaded() as u64, total: ev.total() as u64 });
            }
        });
        xhr.upload()
            .map_err(js_err)?
            .set_onprogress(Some(on_progress.as_ref().unchecked_ref()));

        let on_load = Closure::<dyn FnMut()>::new({
            let sink = Rc::clone(&sink);
            let xhr = xhr.clone();
            let config = self.config.clone();
            move || {
                let status = xhr.status().unwrap_or(0);
                let body = xhr.response_text().ok().flatten().unwrap_or_default();
                sink(completion_event(&config, status, &body, encode));
            }
        });
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));

        let on_error = Closure::<dyn FnMut()>::new({
            let sink = Rc::clone(&sink);
            move || sink(UploadEvent::Failed { reason: "network error".to_owned() })
        });
        xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        xhr.send_with_opt_blob(Some(&*file.handle)).map_err(js_err)?;
        log::debug!("upload started key={key} bytes={}", file.size);

        Ok(UploadTask::new(move || {
            let _ = xhr.abort();
            drop((on_progress, on_load, on_error));
        }))
    }

    #[cfg(not(feature = "hydrate"))]
    fn upload(&self, file: &SelectedFile, key: &str, sink: UploadSink) -> Result<UploadTask, StoreError> {
        let _ = (file, key, sink, &self.config);
        Err(StoreError::Unavailable)
    }
}
