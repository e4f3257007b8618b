use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Occasion;

/// A named combination of item references.
///
/// `item_ids` are weak references: an id may outlive the item it named and is
/// then skipped when the outfit is resolved against the closet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedOutfit {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "itemIDs")]
    pub item_ids: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
    #[serde(default)]
    pub is_favorite: bool,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

impl SavedOutfit {
    pub fn new(name: impl Into<String>, item_ids: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            item_ids,
            occasion: None,
            is_favorite: false,
            created_date: Utc::now(),
            notes: String::new(),
        }
    }

    pub fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = Some(occasion);
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// The outfit being assembled for today. Exactly one exists per closet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayOutfit {
    pub date: DateTime<Utc>,
    #[serde(rename = "itemIDs", default)]
    pub item_ids: Vec<Uuid>,
}

impl TodayOutfit {
    pub fn contains(&self, id: &Uuid) -> bool {
        self.item_ids.contains(id)
    }
}

impl Default for TodayOutfit {
    fn default() -> Self {
        Self {
            date: Utc::now(),
            item_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outfit_wire_names() {
        let a = Uuid::new_v4();
        let outfit = SavedOutfit::new("Night Out", vec![a]).with_occasion(Occasion::Party);
        let value = serde_json::to_value(&outfit).unwrap();
        assert_eq!(value["itemIDs"][0], a.to_string());
        assert_eq!(value["occasion"], "Party");
        assert!(value.get("createdDate").is_some());
        assert_eq!(value["isFavorite"], false);
    }

    #[test]
    fn test_outfit_without_occasion_omits_field() {
        let outfit = SavedOutfit::new("Plain", Vec::new());
        let value = serde_json::to_value(&outfit).unwrap();
        assert!(value.get("occasion").is_none());

        let back: SavedOutfit = serde_json::from_value(value).unwrap();
        assert_eq!(back, outfit);
    }
}
