use serde::{Deserialize, Serialize};

/// One profile in the directory.
///
/// `picture_url` is carried as-is and never validated; `bio` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub picture_url: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, picture_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            picture_url: picture_url.into(),
            bio: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Bio text, empty when absent
    pub fn bio_text(&self) -> &str {
        self.bio.as_deref().unwrap_or("")
    }
}
