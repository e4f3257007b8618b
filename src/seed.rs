//! Sample wardrobe used to bootstrap an empty closet.

use chrono::{DateTime, Duration, Utc};

use crate::model::{ClothingCategory as C, ClothingItem, Occasion, SavedOutfit};

pub(crate) fn sample_closet(now: DateTime<Utc>) -> (Vec<ClothingItem>, Vec<SavedOutfit>) {
    let ago = |days: i64| now - Duration::days(days);
    let item = ClothingItem::new;

    let items: [ClothingItem; 16] = [
        item("White Classic Tee", C::Tops, "Casual").with_last_worn(ago(3)).with_favorite(true),
        item("Blue Button-Up", C::Tops, "Smart Casual").with_last_worn(ago(7)),
        item("Canvas Tote", C::Misc, "Casual"),
        item("Black Blazer", C::Tops, "Formal").with_last_worn(ago(14)).with_favorite(true),
        item("Slim Chinos", C::Pants, "Smart Casual").with_last_worn(ago(2)),
        item("Wide Leg Trousers", C::Pants, "Casual"),
        item("Straight Leg Jeans", C::Jeans, "Casual").with_last_worn(ago(1)).with_favorite(true),
        item("Dark Wash Jeans", C::Jeans, "Smart Casual"),
        item("Floral Midi Dress", C::Dresses, "Party").with_last_worn(ago(30)).with_favorite(true),
        item("White Sundress", C::Dresses, "Casual"),
        item("White Sneakers", C::Shoes, "Casual").with_last_worn(ago(1)),
        item("Classic Loafers", C::Shoes, "Smart Casual").with_last_worn(ago(5)),
        item("Heeled Boots", C::Shoes, "Formal").with_last_worn(ago(20)).with_favorite(true),
        item("Leather Belt", C::Accessories, "Formal"),
        item("Silk Scarf", C::Accessories, "Casual").with_favorite(true),
        item("Gold Hoop Earrings", C::Accessories, "Party"),
    ];

    let ids = |picks: [usize; 3]| picks.iter().map(|&i| items[i].id).collect::<Vec<_>>();
    let outfits = vec![
        SavedOutfit::new("Weekend Casual", ids([0, 6, 10]))
            .with_occasion(Occasion::Casual)
            .with_favorite(true),
        SavedOutfit::new("Office Ready", ids([3, 4, 11])).with_occasion(Occasion::Work),
        SavedOutfit::new("Night Out", ids([8, 12, 15]))
            .with_occasion(Occasion::Party)
            .with_favorite(true),
        SavedOutfit::new("Smart Friday", ids([1, 7, 11])).with_occasion(Occasion::Formal),
    ];

    (items.into(), outfits)
}
