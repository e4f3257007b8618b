//! The in-memory closet aggregate.
//!
//! [`ClosetState`] holds the three collections and the mutation primitives
//! that keep them consistent (cascade on item deletion, set semantics for
//! today's outfit). Only [`crate::store::ClosetStore`] can mutate it; everyone
//! else reads through the queries in [`crate::queries`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{ClothingItem, SavedOutfit, TodayOutfit};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClosetState {
    pub(crate) items: Vec<ClothingItem>,
    pub(crate) outfits: Vec<SavedOutfit>,
    pub(crate) today: TodayOutfit,
}

impl ClosetState {
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn outfits(&self) -> &[SavedOutfit] {
        &self.outfits
    }

    pub fn today(&self) -> &TodayOutfit {
        &self.today
    }

    pub(crate) fn push_item(&mut self, item: ClothingItem) {
        self.items.push(item);
    }

    pub(crate) fn item_mut(&mut self, id: Uuid) -> Option<&mut ClothingItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Replace the item with the same id, keeping its position.
    pub(crate) fn replace_item(&mut self, item: ClothingItem) -> bool {
        match self.item_mut(item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove an item and every reference to it held by today's outfit and
    /// saved outfits.
    pub(crate) fn remove_item(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return false;
        }
        self.today.item_ids.retain(|i| *i != id);
        for outfit in self.outfits.iter_mut() {
            outfit.item_ids.retain(|i| *i != id);
        }
        true
    }

    pub(crate) fn toggle_item_favorite(&mut self, id: Uuid) -> bool {
        self.item_mut(id)
            .map(|item| item.is_favorite = !item.is_favorite)
            .is_some()
    }

    pub(crate) fn mark_item_worn(&mut self, id: Uuid, at: DateTime<Utc>) -> bool {
        self.item_mut(id)
            .map(|item| item.last_worn = Some(at))
            .is_some()
    }

    pub(crate) fn push_outfit(&mut self, outfit: SavedOutfit) {
        self.outfits.push(outfit);
    }

    pub(crate) fn outfit_mut(&mut self, id: Uuid) -> Option<&mut SavedOutfit> {
        self.outfits.iter_mut().find(|o| o.id == id)
    }

    pub(crate) fn replace_outfit(&mut self, outfit: SavedOutfit) -> bool {
        match self.outfit_mut(outfit.id) {
            Some(slot) => {
                *slot = outfit;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_outfit(&mut self, id: Uuid) -> bool {
        let before = self.outfits.len();
        self.outfits.retain(|o| o.id != id);
        self.outfits.len() != before
    }

    pub(crate) fn toggle_outfit_favorite(&mut self, id: Uuid) -> bool {
        self.outfit_mut(id)
            .map(|outfit| outfit.is_favorite = !outfit.is_favorite)
            .is_some()
    }

    pub(crate) fn add_to_today(&mut self, id: Uuid) -> bool {
        if self.today.contains(&id) {
            return false;
        }
        self.today.item_ids.push(id);
        true
    }

    pub(crate) fn remove_from_today(&mut self, id: Uuid) -> bool {
        let before = self.today.item_ids.len();
        self.today.item_ids.retain(|i| *i != id);
        self.today.item_ids.len() != before
    }

    pub(crate) fn clear_today(&mut self) {
        self.today.item_ids.clear();
    }
}
