mod attachment;
mod note;

pub use attachment::{Attachment, FileMetadata};
pub use note::{Category, Note, NoteDraft, UNTITLED_TITLE};
