//! The closet store: owns the in-memory closet, writes a full snapshot to its
//! [`KeyValueStore`] after every change and tells observers about it.
//!
//! Persistence is best-effort. A failed write never rolls back the in-memory
//! change; it is logged, kept in [`ClosetStore::last_persist_error`] and
//! flagged on the [`Change`] handed to observers. A reference to an id the
//! closet does not know is a no-op, reported as `false`.

use std::ops::Deref;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{ClosetConfig, StoreOptions};
use crate::error::{StoreError, StoreResult};
use crate::events::{Change, ChangeKind, Observers, SubscriptionId};
use crate::model::{ClothingItem, Occasion, SavedOutfit, TodayOutfit};
use crate::seed::sample_closet;
use crate::state::ClosetState;
use crate::storage::{FileStore, KeyValueStore};

pub const ITEMS_KEY: &str = "closet_items";
pub const OUTFITS_KEY: &str = "closet_outfits";
pub const TODAY_KEY: &str = "closet_today";

#[derive(Debug)]
pub struct ClosetStore<S: KeyValueStore = FileStore> {
    backend: S,
    state: ClosetState,
    options: StoreOptions,
    observers: Observers,
    version: u64,
    last_persist_error: Option<StoreError>,
}

impl ClosetStore<FileStore> {
    /// Open the closet kept in `config.data_dir`.
    pub fn open(config: &ClosetConfig) -> StoreResult<Self> {
        config.validate()?;
        let backend = FileStore::new(config.data_dir.clone());
        Ok(Self::with_options(backend, config.store_options()))
    }
}

impl<S: KeyValueStore> ClosetStore<S> {
    pub fn with_backend(backend: S) -> Self {
        Self::with_options(backend, StoreOptions::default())
    }

    /// Load whatever the backend holds, seeding the sample wardrobe when no
    /// item survived the load.
    pub fn with_options(backend: S, options: StoreOptions) -> Self {
        let mut store = Self {
            backend,
            state: ClosetState::default(),
            options,
            observers: Observers::default(),
            version: 0,
            last_persist_error: None,
        };
        store.load();
        if store.state.items.is_empty() && store.options.seed_sample_data {
            store.seed();
        }
        store
    }

    pub fn state(&self) -> &ClosetState {
        &self.state
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Incremented once per applied change; starts at 0 after load.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn last_persist_error(&self) -> Option<&StoreError> {
        self.last_persist_error.as_ref()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Change, &ClosetState) + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // Items

    pub fn add_item(&mut self, item: ClothingItem) {
        let id = item.id;
        self.state.push_item(item);
        self.commit(ChangeKind::ItemAdded(id));
    }

    pub fn update_item(&mut self, item: ClothingItem) -> bool {
        let id = item.id;
        let changed = self.state.replace_item(item);
        self.commit_if(changed, ChangeKind::ItemUpdated(id))
    }

    /// Remove an item along with its id in today's outfit and every saved
    /// outfit.
    pub fn delete_item(&mut self, id: Uuid) -> bool {
        let changed = self.state.remove_item(id);
        self.commit_if(changed, ChangeKind::ItemDeleted(id))
    }

    pub fn toggle_favorite_item(&mut self, id: Uuid) -> bool {
        let changed = self.state.toggle_item_favorite(id);
        self.commit_if(changed, ChangeKind::ItemFavoriteToggled(id))
    }

    pub fn mark_worn_today(&mut self, id: Uuid) -> bool {
        let changed = self.state.mark_item_worn(id, Utc::now());
        self.commit_if(changed, ChangeKind::ItemWorn(id))
    }

    /// Put an item in today's outfit and stamp it as worn, as one change.
    pub fn wear_item(&mut self, id: Uuid) -> bool {
        if !self.state.mark_item_worn(id, Utc::now()) {
            return false;
        }
        self.state.add_to_today(id);
        self.commit(ChangeKind::ItemWornToday(id));
        true
    }

    // Outfits

    pub fn save_outfit(&mut self, outfit: SavedOutfit) {
        let id = outfit.id;
        self.state.push_outfit(outfit);
        self.commit(ChangeKind::OutfitSaved(id));
    }

    pub fn update_outfit(&mut self, outfit: SavedOutfit) -> bool {
        let id = outfit.id;
        let changed = self.state.replace_outfit(outfit);
        self.commit_if(changed, ChangeKind::OutfitUpdated(id))
    }

    pub fn delete_outfit(&mut self, id: Uuid) -> bool {
        let changed = self.state.remove_outfit(id);
        self.commit_if(changed, ChangeKind::OutfitDeleted(id))
    }

    pub fn toggle_favorite_outfit(&mut self, id: Uuid) -> bool {
        let changed = self.state.toggle_outfit_favorite(id);
        self.commit_if(changed, ChangeKind::OutfitFavoriteToggled(id))
    }

    /// Add every item of an outfit that still exists to today's outfit.
    pub fn add_outfit_to_today(&mut self, outfit_id: Uuid) -> bool {
        let ids: Vec<Uuid> = match self.state.outfit(outfit_id) {
            Some(outfit) => self
                .state
                .outfit_items(outfit)
                .iter()
                .map(|item| item.id)
                .collect(),
            None => return false,
        };
        let mut changed = false;
        for id in ids {
            changed |= self.state.add_to_today(id);
        }
        self.commit_if(changed, ChangeKind::OutfitAddedToToday(outfit_id))
    }

    // Today's outfit

    pub fn add_to_today(&mut self, id: Uuid) -> bool {
        let changed = self.state.add_to_today(id);
        self.commit_if(changed, ChangeKind::TodayItemAdded(id))
    }

    pub fn remove_from_today(&mut self, id: Uuid) -> bool {
        let changed = self.state.remove_from_today(id);
        self.commit_if(changed, ChangeKind::TodayItemRemoved(id))
    }

    pub fn clear_today(&mut self) {
        self.state.clear_today();
        self.commit(ChangeKind::TodayCleared);
    }

    /// Save today's selection as a casual outfit. Without a name the outfit is
    /// called "Look - <date>". Returns `None` when today's outfit is empty.
    pub fn save_today_as_outfit(&mut self, name: Option<String>) -> Option<Uuid> {
        if self.state.today.item_ids.is_empty() {
            return None;
        }
        let name = name
            .unwrap_or_else(|| format!("Look - {}", Utc::now().format("%b %-d, %Y")));
        let outfit = SavedOutfit::new(name, self.state.today.item_ids.clone())
            .with_occasion(Occasion::Casual);
        let id = outfit.id;
        self.save_outfit(outfit);
        Some(id)
    }

    // Persistence

    /// Write all three collections. Encoding happens before any write, and
    /// every key is attempted even if an earlier one fails; the first error
    /// is returned.
    pub fn save(&mut self) -> StoreResult<()> {
        let result = self.write_snapshot();
        if result.is_ok() {
            self.last_persist_error = None;
        }
        result
    }

    fn write_snapshot(&mut self) -> StoreResult<()> {
        let items = self.encode(&self.state.items)?;
        let outfits = self.encode(&self.state.outfits)?;
        let today = self.encode(&self.state.today)?;

        let mut first_error = None;
        for (key, bytes) in [(ITEMS_KEY, items), (OUTFITS_KEY, outfits), (TODAY_KEY, today)] {
            if let Err(e) = self.backend.set(key, &bytes) {
                warn!(key, error = %e, "failed to write closet snapshot");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> StoreResult<Vec<u8>> {
        let bytes = if self.options.pretty_json {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(bytes)
    }

    fn load(&mut self) {
        self.state.items = self.load_key::<Vec<ClothingItem>>(ITEMS_KEY).unwrap_or_default();
        self.state.outfits = self.load_key::<Vec<SavedOutfit>>(OUTFITS_KEY).unwrap_or_default();
        self.state.today = self.load_key::<TodayOutfit>(TODAY_KEY).unwrap_or_default();
        debug!(
            items = self.state.items.len(),
            outfits = self.state.outfits.len(),
            today = self.state.today.item_ids.len(),
            "closet loaded"
        );
    }

    /// A missing, unreadable or undecodable key loads as `None`.
    fn load_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.backend.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read closet data, starting empty");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "failed to decode closet data, starting empty");
                None
            }
        }
    }

    fn seed(&mut self) {
        let (items, outfits) = sample_closet(Utc::now());
        info!(
            items = items.len(),
            outfits = outfits.len(),
            "empty closet, seeding sample wardrobe"
        );
        self.state.items = items;
        self.state.outfits = outfits;
        self.commit(ChangeKind::Seeded);
    }

    fn commit_if(&mut self, changed: bool, kind: ChangeKind) -> bool {
        if changed {
            self.commit(kind);
        } else {
            debug!(?kind, "no matching closet entry, nothing to do");
        }
        changed
    }

    fn commit(&mut self, kind: ChangeKind) {
        let persisted = match self.write_snapshot() {
            Ok(()) => {
                self.last_persist_error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, ?kind, "closet change kept in memory only");
                self.last_persist_error = Some(e);
                false
            }
        };
        self.version += 1;
        debug!(version = self.version, ?kind, persisted, "closet changed");

        let change = Change {
            version: self.version,
            kind,
            persisted,
        };
        self.observers.notify(&change, &self.state);
    }
}

impl<S: KeyValueStore> Deref for ClosetStore<S> {
    type Target = ClosetState;

    fn deref(&self) -> &ClosetState {
        &self.state
    }
}
