//! Attachment opening is a platform concern; this module only decides how a
//! file should be opened and hands the work to an injected capability.

use crate::models::Attachment;

/// How the platform layer should present an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStrategy {
    /// Show inline in the app's image viewer.
    ImagePreview,
    /// Hand to whatever app claims the MIME type.
    DirectOpen,
    /// No usable type information: fall back to the share sheet.
    ShareFallback,
}

impl OpenStrategy {
    pub fn for_attachment(attachment: &Attachment) -> Self {
        match attachment.mime_type.as_deref() {
            Some(mime) if mime.starts_with("image/") => Self::ImagePreview,
            Some(_) => Self::DirectOpen,
            None => Self::ShareFallback,
        }
    }
}

/// Platform capability that actually opens files. Injected by the host app.
pub trait FileOpener {
    fn open(&self, attachment: &Attachment, strategy: OpenStrategy);
}

/// Pick the strategy for an attachment and delegate to the opener.
pub fn open_attachment(opener: &dyn FileOpener, attachment: &Attachment) {
    opener.open(attachment, OpenStrategy::for_attachment(attachment));
}
