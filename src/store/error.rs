use std::io;

use thiserror::Error;

/// Failures raised by [`super::NoteStore`] and its slot backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Note text was empty once surrounding whitespace was removed.
    #[error("Note cannot be empty!")]
    EmptyNote,

    #[error("failed to read slot `{key}`")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write slot `{key}`")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("slot `{key}` does not hold a valid note list")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("slot `{key}` is not UTF-8 text")]
    NotText {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to encode notes")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    /// True for failures caused by user input rather than storage.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyNote)
    }

    /// True when a slot was read but its contents are not a note list.
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::NotText { .. })
    }

    /// Short message suitable for a status line.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyNote => self.to_string(),
            Self::Read { source, .. } => format!("Read failed: {source}"),
            Self::Write { source, .. } => format!("Save failed: {source}"),
            Self::Decode { source, .. } => format!("Stored notes are corrupt: {source}"),
            Self::NotText { source, .. } => format!("Stored notes are corrupt: {source}"),
            Self::Encode(source) => format!("Save failed: {source}"),
        }
    }
}
