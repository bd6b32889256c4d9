use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

/// One stored image: raw bytes plus the media type to serve them under.
#[derive(Debug, Clone)]
pub struct MediaObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media object not found: {0}")]
    NotFound(Uuid),
}

/// In-memory media registry for upload previews and generated images.
///
/// Entries live for the process lifetime unless explicitly removed; nothing
/// is persisted. Keys are random, so a reference is only reachable through
/// the response that handed it out.
#[derive(Debug, Default)]
pub struct MediaStore {
    objects: DashMap<Uuid, MediaObject>,
}

impl MediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bytes and return the key they are reachable under.
    pub fn insert(&self, bytes: Vec<u8>, content_type: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.objects.insert(
            id,
            MediaObject {
                bytes,
                content_type: content_type.into(),
            },
        );
        id
    }

    pub fn get(&self, id: Uuid) -> Result<MediaObject, MediaError> {
        self.objects
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(MediaError::NotFound(id))
    }

    /// Remove an entry. Returns `false` if it did not exist.
    pub fn remove(&self, id: Uuid) -> bool {
        self.objects.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
