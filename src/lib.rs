//! Wardrobe catalog data store.
//!
//! A [`ClosetStore`] owns every clothing item, saved outfit and today's
//! outfit-in-progress. Collaborators construct it once per session, call its
//! mutators, subscribe to [`Change`] notifications and re-render from the
//! read-only views on [`ClosetState`].
//!
//! ```no_run
//! use closet_store::{ClosetConfig, ClosetStore, ClothingCategory, ClothingItem};
//!
//! let config = ClosetConfig::from_env()?;
//! let mut closet = ClosetStore::open(&config)?;
//! closet.subscribe(|change, state| {
//!     println!("v{}: {} items", change.version, state.items().len());
//! });
//! closet.add_item(ClothingItem::new("Red Scarf", ClothingCategory::Accessories, "Casual"));
//! assert!(!closet.items_by_category(ClothingCategory::Accessories).is_empty());
//! # Ok::<(), closet_store::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod metadata;
pub mod model;
pub mod queries;
mod seed;
pub mod state;
pub mod storage;
pub mod store;
pub mod telemetry;

pub use config::{ClosetConfig, StoreOptions};
pub use error::{StoreError, StoreResult};
pub use events::{Change, ChangeKind, SubscriptionId};
pub use model::{ClothingCategory, ClothingItem, Color, Occasion, SavedOutfit, TodayOutfit};
pub use queries::{ClosetStats, FlatLay};
pub use state::ClosetState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{ClosetStore, ITEMS_KEY, OUTFITS_KEY, TODAY_KEY};
pub use telemetry::init_tracing;
