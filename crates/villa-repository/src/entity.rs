//! Entity trait binding the model types to the store

use chrono::Utc;
use villa_core::{Villa, VillaNumber};

/// Storable entity with an integer identity
///
/// The two entity types differ in where the identity comes from: the store
/// assigns villa ids (`STORE_KEYED = true`) while villa numbers carry their
/// caller-supplied number as the key. That asymmetry is part of the contract
/// and must be preserved.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Whether the store assigns the key on insert
    const STORE_KEYED: bool;

    /// Current identity value
    fn key(&self) -> i32;

    /// Overwrite the identity; called by the store when `STORE_KEYED`
    fn set_key(&mut self, key: i32);

    /// Hook run once at insertion, before the row is stored
    fn on_insert(&mut self) {}
}

impl Entity for Villa {
    const STORE_KEYED: bool = true;

    fn key(&self) -> i32 {
        self.id
    }

    fn set_key(&mut self, key: i32) {
        self.id = key;
    }

    fn on_insert(&mut self) {
        // Creation time is stamped by the store, not by the caller, and
        // survives later overwrites.
        self.created_at = Utc::now();
    }
}

impl Entity for VillaNumber {
    const STORE_KEYED: bool = false;

    fn key(&self) -> i32 {
        self.villa_no
    }

    fn set_key(&mut self, key: i32) {
        self.villa_no = key;
    }
}
