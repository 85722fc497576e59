use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Note;

/// Reference to a file kept in platform-managed storage. Only metadata is
/// stored here; the bytes stay wherever the picker put them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub uri: String,
    pub size: u64,
    /// May be missing for files the platform could not identify.
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
}

/// What the platform file picker hands back for a chosen file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub name: String,
    pub uri: String,
    pub size: u64,
    pub mime_type: Option<String>,
}

impl Attachment {
    pub fn new(meta: FileMetadata) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: meta.name,
            uri: meta.uri,
            size: meta.size,
            mime_type: meta.mime_type,
        }
    }
}

impl Note {
    /// Append a descriptor for a freshly picked file. Does not persist;
    /// callers go through the repository's `update` for that.
    pub fn attach(&mut self, meta: FileMetadata) -> Uuid {
        let attachment = Attachment::new(meta);
        let id = attachment.id;
        self.attachments.push(attachment);
        id
    }

    /// Remove the descriptor with the given id. No-op if absent.
    pub fn detach(&mut self, attachment_id: Uuid) {
        self.attachments.retain(|a| a.id != attachment_id);
    }
}
