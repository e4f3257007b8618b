//! Read-only views over a [`ClosetState`].
//!
//! Outfits and today's selection hold item ids, not items. Every view that
//! returns items resolves those ids against the live collection and silently
//! skips ids that no longer match anything.

use std::collections::HashMap;

use uuid::Uuid;

use crate::model::{ClothingCategory, ClothingItem, Occasion, SavedOutfit};
use crate::state::ClosetState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClosetStats {
    pub items: usize,
    pub outfits: usize,
    pub favorite_items: usize,
    pub favorite_outfits: usize,
    pub today_items: usize,
}

/// Items of an outfit arranged the way a flat-lay preview shows them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatLay<'a> {
    pub top: Option<&'a ClothingItem>,
    pub bottom: Option<&'a ClothingItem>,
    pub shoes: Option<&'a ClothingItem>,
    pub extras: Vec<&'a ClothingItem>,
}

impl<'a> FlatLay<'a> {
    pub fn from_items(items: &[&'a ClothingItem]) -> Self {
        Self {
            top: first_of(items, &[ClothingCategory::Tops, ClothingCategory::Dresses]),
            bottom: first_of(items, &[ClothingCategory::Pants, ClothingCategory::Jeans]),
            shoes: first_of(items, &[ClothingCategory::Shoes]),
            extras: items
                .iter()
                .copied()
                .filter(|item| {
                    matches!(
                        item.category,
                        ClothingCategory::Accessories | ClothingCategory::Misc
                    )
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.shoes.is_none() && self.extras.is_empty()
    }
}

fn first_of<'a>(
    items: &[&'a ClothingItem],
    wanted: &[ClothingCategory],
) -> Option<&'a ClothingItem> {
    items
        .iter()
        .copied()
        .find(|item| wanted.contains(&item.category))
}

impl ClosetState {
    pub fn item(&self, id: Uuid) -> Option<&ClothingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn outfit(&self, id: Uuid) -> Option<&SavedOutfit> {
        self.outfits.iter().find(|o| o.id == id)
    }

    pub fn items_by_category(&self, category: ClothingCategory) -> Vec<&ClothingItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    pub fn favorite_items(&self) -> Vec<&ClothingItem> {
        self.items.iter().filter(|i| i.is_favorite).collect()
    }

    pub fn favorite_outfits(&self) -> Vec<&SavedOutfit> {
        self.outfits.iter().filter(|o| o.is_favorite).collect()
    }

    /// Today's items in selection order.
    pub fn today_items(&self) -> Vec<&ClothingItem> {
        self.resolve(&self.today.item_ids)
    }

    pub fn outfit_items(&self, outfit: &SavedOutfit) -> Vec<&ClothingItem> {
        self.resolve(&outfit.item_ids)
    }

    pub fn is_in_today(&self, id: Uuid) -> bool {
        self.today.contains(&id)
    }

    /// Outfits for one occasion, or every outfit when `occasion` is `None`.
    pub fn outfits_for_occasion(&self, occasion: Option<Occasion>) -> Vec<&SavedOutfit> {
        self.outfits
            .iter()
            .filter(|o| occasion.is_none() || o.occasion == occasion)
            .collect()
    }

    pub fn category_counts(&self) -> Vec<(ClothingCategory, usize)> {
        ClothingCategory::ALL
            .iter()
            .map(|category| {
                let count = self.items.iter().filter(|i| i.category == *category).count();
                (*category, count)
            })
            .collect()
    }

    pub fn stats(&self) -> ClosetStats {
        ClosetStats {
            items: self.items.len(),
            outfits: self.outfits.len(),
            favorite_items: self.items.iter().filter(|i| i.is_favorite).count(),
            favorite_outfits: self.outfits.iter().filter(|o| o.is_favorite).count(),
            today_items: self.today_items().len(),
        }
    }

    pub fn today_flat_lay(&self) -> FlatLay<'_> {
        FlatLay::from_items(&self.today_items())
    }

    fn resolve(&self, ids: &[Uuid]) -> Vec<&ClothingItem> {
        let index: HashMap<Uuid, &ClothingItem> =
            self.items.iter().map(|item| (item.id, item)).collect();
        ids.iter().filter_map(|id| index.get(id).copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closet() -> ClosetState {
        let mut state = ClosetState::default();
        state.push_item(ClothingItem::new("Tee", ClothingCategory::Tops, "Casual").with_favorite(true));
        state.push_item(ClothingItem::new("Jeans", ClothingCategory::Jeans, "Casual"));
        state.push_item(ClothingItem::new("Sneakers", ClothingCategory::Shoes, "Casual"));
        state.push_item(ClothingItem::new("Scarf", ClothingCategory::Accessories, "Casual"));
        state.push_item(ClothingItem::new("Tote", ClothingCategory::Misc, "Casual"));
        state.push_item(ClothingItem::new("Blouse", ClothingCategory::Tops, "Formal"));
        state
    }

    #[test]
    fn test_items_by_category_preserves_order() {
        let state = closet();
        let tops: Vec<_> = state
            .items_by_category(ClothingCategory::Tops)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(tops, vec!["Tee", "Blouse"]);
        assert!(state.items_by_category(ClothingCategory::Dresses).is_empty());
    }

    #[test]
    fn test_resolution_skips_dangling_ids() {
        let mut state = closet();
        let ids = vec![state.items[2].id, Uuid::new_v4(), state.items[0].id];
        let outfit = SavedOutfit::new("Mixed", ids);
        let names: Vec<_> = state
            .outfit_items(&outfit)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sneakers", "Tee"]);

        state.add_to_today(Uuid::new_v4());
        assert!(state.today_items().is_empty());
        assert_eq!(state.stats().today_items, 0);
    }

    #[test]
    fn test_outfits_for_occasion() {
        let mut state = closet();
        state.push_outfit(SavedOutfit::new("a", vec![]).with_occasion(Occasion::Work));
        state.push_outfit(SavedOutfit::new("b", vec![]));
        state.push_outfit(SavedOutfit::new("c", vec![]).with_occasion(Occasion::Party).with_favorite(true));

        assert_eq!(state.outfits_for_occasion(None).len(), 3);
        assert_eq!(state.outfits_for_occasion(Some(Occasion::Work))[0].name, "a");
        assert!(state.outfits_for_occasion(Some(Occasion::Outdoor)).is_empty());
        assert_eq!(state.favorite_outfits().len(), 1);
    }

    #[test]
    fn test_counts_and_stats() {
        let state = closet();
        let counts = state.category_counts();
        assert_eq!(counts.len(), 7);
        assert_eq!(counts[0], (ClothingCategory::Tops, 2));
        assert_eq!(counts[3], (ClothingCategory::Dresses, 0));

        let stats = state.stats();
        assert_eq!(stats.items, 6);
        assert_eq!(stats.favorite_items, 1);
        assert_eq!(stats.outfits, 0);
    }

    #[test]
    fn test_flat_lay() {
        let mut state = closet();
        for item in state.items.clone() {
            state.add_to_today(item.id);
        }
        let lay = state.today_flat_lay();
        assert_eq!(lay.top.map(|i| i.name.as_str()), Some("Tee"));
        assert_eq!(lay.bottom.map(|i| i.name.as_str()), Some("Jeans"));
        assert_eq!(lay.shoes.map(|i| i.name.as_str()), Some("Sneakers"));
        assert_eq!(lay.extras.len(), 2);

        assert!(FlatLay::from_items(&[]).is_empty());
    }
}
