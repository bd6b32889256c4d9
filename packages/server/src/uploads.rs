use dashmap::DashMap;
use uuid::Uuid;

use crate::handlers::media::media_path;

/// Displayable form of a held payload.
#[derive(Debug, Clone)]
pub enum PreviewRef {
    /// Uploaded file bytes, parked in the media store.
    Stored(Uuid),
    /// A pasted remote URL, used as-is.
    Remote(String),
}

/// One captured upload payload.
///
/// File captures carry both forms the try-on flow needs: the displayable
/// preview and the raw binary. URL captures are preview-only.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub preview: PreviewRef,
    pub raw: Option<Vec<u8>>,
}

impl StoredUpload {
    pub fn preview_url(&self) -> String {
        match &self.preview {
            PreviewRef::Stored(id) => media_path(*id),
            PreviewRef::Remote(url) => url.clone(),
        }
    }
}

/// Registry of held upload payloads, one per capture id.
#[derive(Debug, Default)]
pub struct UploadStore {
    entries: DashMap<Uuid, StoredUpload>,
}

impl UploadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, upload: StoredUpload) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.insert(id, upload);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<StoredUpload> {
        self.entries.get(&id).map(|entry| entry.value().clone())
    }

    /// Remove a payload, returning it so the caller can release its stored
    /// preview. Absent ids are a no-op.
    pub fn remove(&self, id: Uuid) -> Option<StoredUpload> {
        self.entries.remove(&id).map(|(_, upload)| upload)
    }
}
