use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Attachment;

/// Title shown for notes saved with a blank title.
pub const UNTITLED_TITLE: &str = "Untitled Note";

/// Category a note is filed under - fixed set, used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Ideas,
    Tasks,
    Important,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Personal,
        Self::Work,
        Self::Ideas,
        Self::Tasks,
        Self::Important,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Ideas => "Ideas",
            Self::Tasks => "Tasks",
            Self::Important => "Important",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Work" => Self::Work,
            "Ideas" => Self::Ideas,
            "Tasks" => Self::Tasks,
            "Important" => Self::Important,
            _ => Self::Personal,
        }
    }
}

/// A single note. Stored notes may predate the `category` field, so it
/// defaults to Personal when deserializing rather than rewriting storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub timestamp: DateTime<Utc>,
}

/// User-entered fields for a note, before trimming and validation.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub attachments: Vec<Attachment>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    /// A draft with neither title nor content (after trimming) cannot be saved.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

impl Note {
    pub fn new(draft: NoteDraft) -> Self {
        let mut note = Self {
            id: Uuid::new_v4(),
            title: String::new(),
            content: String::new(),
            category: Category::default(),
            attachments: Vec::new(),
            timestamp: Utc::now(),
        };
        note.revise(draft);
        note
    }

    /// Replace the editable fields from a draft, keeping the id. Trims both
    /// text fields, falls back to the untitled sentinel, refreshes the
    /// timestamp.
    pub fn revise(&mut self, draft: NoteDraft) {
        let title = draft.title.trim();
        self.title = if title.is_empty() {
            UNTITLED_TITLE.to_string()
        } else {
            title.to_string()
        };
        self.content = draft.content.trim().to_string();
        self.category = draft.category;
        self.attachments = draft.attachments;
        self.timestamp = Utc::now();
    }
}
