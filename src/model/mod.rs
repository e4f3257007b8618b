//! Closet domain model: garments, outfits and today's selection, plus the
//! presentation metadata carried by categories and occasions.

pub mod category;
pub mod color;
pub mod item;
pub mod occasion;
pub mod outfit;

pub use category::ClothingCategory;
pub use color::Color;
pub use item::ClothingItem;
pub use occasion::Occasion;
pub use outfit::{SavedOutfit, TodayOutfit};
