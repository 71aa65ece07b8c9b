use serde::{Deserialize, Serialize};

/// One complaint record as the client persists it. The field names match the
/// stored JSON shape consumed by the mobile shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub image: Option<String>,
    pub audio_uri: Option<String>,
    #[serde(default)]
    pub caption: String,
}

impl Entry {
    /// Builds an entry. At least one of `image` or `audio_uri` is required;
    /// the caption may be empty. Entries are immutable after creation.
    pub fn new(
        image: Option<String>,
        audio_uri: Option<String>,
        caption: String,
    ) -> Result<Self, EntryError> {
        if image.is_none() && audio_uri.is_none() {
            return Err(EntryError::NoMedia);
        }
        Ok(Self {
            image,
            audio_uri,
            caption,
        })
    }

    /// Renders the entry as a plain-text snippet suitable for a share sheet.
    pub fn share_text(&self) -> String {
        let mut lines = Vec::new();
        if !self.caption.is_empty() {
            lines.push(self.caption.clone());
        }
        if let Some(image) = &self.image {
            lines.push(format!("Photo: {}", image));
        }
        if let Some(audio) = &self.audio_uri {
            lines.push(format!("Recording: {}", audio));
        }
        lines.join("\n")
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("an entry needs a picked image or a recorded clip")]
    NoMedia,
}
