use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ClothingCategory;

/// One physical garment in the closet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: Uuid,
    pub name: String,
    pub category: ClothingCategory,
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "base64_blob")]
    pub image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub notes: String,
}

impl ClothingItem {
    pub fn new(
        name: impl Into<String>,
        category: ClothingCategory,
        style: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            style: style.into(),
            last_worn: None,
            is_favorite: false,
            image_data: None,
            notes: String::new(),
        }
    }

    pub fn with_last_worn(mut self, last_worn: DateTime<Utc>) -> Self {
        self.last_worn = Some(last_worn);
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn with_image(mut self, image_data: Vec<u8>) -> Self {
        self.image_data = Some(image_data);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Relative "last worn" text, e.g. `"3 days ago"` or `"Never worn"`.
    pub fn last_worn_label(&self, now: DateTime<Utc>) -> String {
        let Some(last_worn) = self.last_worn else {
            return "Never worn".to_string();
        };
        let days = (now - last_worn).num_days();
        match days {
            i64::MIN..=0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            2..=6 => format!("{days} days ago"),
            7..=29 => plural(days / 7, "week"),
            30..=364 => plural(days / 30, "month"),
            _ => plural(days / 365, "year"),
        }
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Photographs travel as standard base64 strings inside the JSON records.
mod base64_blob {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
