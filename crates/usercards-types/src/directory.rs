use std::path::Path;

use crate::{Error, Result, UserRecord};

const BUILT_IN: &[(&str, &str, &str)] = &[
    (
        "amisha rathore",
        "https://i.pinimg.com/736x/cd/9b/1c/cd9b1cf5b96e8300751f952488d6c002.jpg",
        "silent chaos in a loud world 🌑🖤 | not for everyone",
    ),
    (
        "amita mehta",
        "https://i.pinimg.com/736x/1f/2f/85/1f2f856bf3a020ed8ee9ecb3306ae074.jpg",
        "main character energy 🎬 | coffee > everything ☕✨",
    ),
    (
        "isha oberoi",
        "https://i.pinimg.com/736x/23/48/7e/23487ef1268cfe017047a0640318c0d0.jpg",
        "walking through dreams in doc martens 💭🖤 | late night thinker",
    ),
    (
        "Ojin Oklawa",
        "https://i.pinimg.com/736x/01/be/94/01be94b0b5bf03a50b5d6c4bfec78063.jpg",
        "too glam to give a damn 💅 | filter free soul",
    ),
    (
        "diya bansal",
        "https://i.pinimg.com/736x/74/b0/67/74b067e6c5ece09d99f68c42c5f6754e.jpg",
        "a little chaos, a lot of art 🎨✨ | just vibes",
    ),
    (
        "tanay rawat",
        "https://i.pinimg.com/736x/9b/78/b9/9b78b95425278ee37e88869b8c5fb2c6.jpg",
        "don’t text, just vibe 🪩 | soft heart, sharp mind",
    ),
    (
        "mohit chhabra",
        "https://i.pinimg.com/736x/22/8b/cf/228bcf5a0800f813cd1744d4ccbf01ea.jpg",
        "aesthetic overload 📸🕊️ | living in lowercase",
    ),
];

/// Immutable, ordered collection of profiles.
///
/// Built once at startup and only ever read afterwards. The order of
/// `all()` is the canonical display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    records: Vec<UserRecord>,
}

impl Directory {
    /// The directory compiled into the binary
    pub fn built_in() -> Self {
        let records = BUILT_IN
            .iter()
            .map(|(name, picture, bio)| UserRecord::new(*name, *picture).with_bio(*bio))
            .collect();
        Self { records }
    }

    /// Build a directory from records, rejecting blank names.
    pub fn from_records(records: Vec<UserRecord>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(Error::InvalidRecord {
                    index,
                    reason: "name must not be empty".to_string(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Load a directory from a JSON array of records.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<UserRecord> = serde_json::from_str(content)?;
        Self::from_records(records)
    }

    pub fn all(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose name equals `name`, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&UserRecord> {
        let needle = name.trim().to_lowercase();
        self.records
            .iter()
            .find(|record| record.name.to_lowercase() == needle)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::built_in()
    }
}
