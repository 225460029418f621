//! # Configuration Store
//!
//! Owns the canonical `ShelfConfig` and exposes the only sanctioned
//! mutation surface.
//!
//! ## Snapshot Model
//! The store hands out `Arc<ShelfConfig>` snapshots. Every mutation builds
//! a new tree, validates it, and swaps the `Arc`; a reader holding a
//! previous snapshot (renderer, pricing panel) never observes a partial
//! state. A monotone version counter ticks once per committed change, so
//! collaborators can cheaply detect "anything new since I last looked?".
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  UI Action                Store Operation            Tree Change        │
//! │  ─────────                ───────────────            ───────────        │
//! │                                                                         │
//! │  Drag height slider ────► update_global_dimensions ► height clamped,    │
//! │                                                       levels re-clamped │
//! │  Pick depth option ─────► update_global_dimensions ► depth swapped      │
//! │                                                       (or kept if not   │
//! │                                                        manufactured)    │
//! │  Click "+ Bay" ─────────► add_module ──────────────► module appended    │
//! │  Click bay ✕ ───────────► remove_module ───────────► module removed,    │
//! │                                                       active falls back │
//! │  Drag width handle ─────► update_module ───────────► width clamped      │
//! │  Click "+ Shelf" ───────► add_level ───────────────► level appended     │
//! │  Click shelf ✕ ─────────► remove_level ────────────► level removed      │
//! │  Drag shelf / pick mat ─► update_level ────────────► elevation clamped  │
//! │                                                       material swapped  │
//! │  Click "Start over" ────► reset ───────────────────► fresh default      │
//! │                                                                         │
//! │  EVERY operation returns bool: did the configuration change?            │
//! │  Rejected input never panics and never leaves a half-applied tree.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rejection Policy
//! Out-of-range dimensions are clamped, unknown ids and non-manufactured
//! depths are dropped, structural minimums are protected. A mutation that
//! lands on a tree identical to the current one reports `false` and does
//! not bump the version. Errors never cross this surface.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::limits::{
    clamp_height, clamp_width, is_allowed_depth, DEFAULT_LEVEL_SPACING_MM, MAX_LEVELS, MIN_LEVELS,
};
use crate::types::{Material, ShelfConfig, ShelfLevel, ShelfModule};

// =============================================================================
// Update Payloads
// =============================================================================

/// Partial update for the global row dimensions.
///
/// Fields apply independently: a valid height applies even when the depth
/// in the same payload is rejected, and vice versa.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GlobalDimensionsUpdate {
    /// New row height in mm (clamped into range).
    #[serde(default)]
    pub height: Option<u32>,

    /// New row depth in mm (dropped unless a manufactured depth).
    #[serde(default)]
    pub depth: Option<u32>,
}

/// Partial update for one module.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModuleUpdate {
    /// New bay width in mm (clamped into range).
    #[serde(default)]
    pub width: Option<u32>,
}

/// Partial update for one level.
///
/// `material: Some(Material::None)` means "set the level open"; `None`
/// (the Option) means "leave the material alone".
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpdate {
    /// New elevation in mm (clamped to `[0, height]`).
    #[serde(default)]
    pub elevation: Option<u32>,

    /// New shelf material.
    #[serde(default)]
    pub material: Option<Material>,
}

// =============================================================================
// Config Store
// =============================================================================

/// The authoritative configuration state for one design session.
///
/// ## Held State
/// - `current`: the canonical tree, shared out as `Arc` snapshots
/// - `active_module_id`: which bay the editing UI is focused on, always
///   the id of an existing module
/// - `version`: bumps once per committed change, never on rejection
#[derive(Debug, Clone)]
pub struct ConfigStore {
    current: Arc<ShelfConfig>,
    active_module_id: String,
    version: u64,
}

impl ConfigStore {
    /// Creates a store holding the factory-default configuration.
    pub fn new() -> Self {
        let config = ShelfConfig::new();
        let active_module_id = config.modules[0].id.clone();

        ConfigStore {
            current: Arc::new(config),
            active_module_id,
            version: 0,
        }
    }

    /// Returns the current configuration snapshot.
    ///
    /// The snapshot is immutable: later mutations swap the store's `Arc`
    /// and never touch trees already handed out.
    #[inline]
    pub fn config(&self) -> Arc<ShelfConfig> {
        Arc::clone(&self.current)
    }

    /// Returns the monotone change counter.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the id of the module the UI is focused on.
    #[inline]
    pub fn active_module_id(&self) -> &str {
        &self.active_module_id
    }

    /// Focuses another module.
    ///
    /// ## Behavior
    /// - Unknown id: no-op, returns `false`
    /// - Known id: focus moves (focus is UI state, not tree state, so the
    ///   version does not bump)
    pub fn set_active_module_id(&mut self, module_id: &str) -> bool {
        if self.current.module(module_id).is_none() {
            return false;
        }
        if self.active_module_id == module_id {
            return false;
        }
        self.active_module_id = module_id.to_string();
        true
    }

    /// Commits a candidate tree if it differs from the current one.
    ///
    /// The single funnel every mutation goes through: equality here is
    /// what makes "clamped to the value it already had" a clean no-op.
    fn commit(&mut self, next: ShelfConfig) -> bool {
        if next == *self.current {
            return false;
        }
        self.current = Arc::new(next);
        self.version += 1;
        true
    }

    // =========================================================================
    // Global Dimension Operations
    // =========================================================================

    /// Applies a partial update to the global row dimensions.
    ///
    /// ## Behavior
    /// - `height` clamps into `[MIN_HEIGHT_MM, MAX_HEIGHT_MM]`. When the
    ///   row shrinks, level elevations above the new ceiling are pulled
    ///   down to it, keeping the elevation invariant unconditional.
    /// - `depth` must be a manufactured frame depth; anything else keeps
    ///   the prior depth (the other field still applies).
    pub fn update_global_dimensions(&mut self, update: &GlobalDimensionsUpdate) -> bool {
        let mut next = (*self.current).clone();

        if let Some(height) = update.height {
            next.height = clamp_height(height);
            for module in &mut next.modules {
                for level in &mut module.levels {
                    level.elevation = level.elevation.min(next.height);
                }
            }
        }

        if let Some(depth) = update.depth {
            if is_allowed_depth(depth) {
                next.depth = depth;
            }
        }

        self.commit(next)
    }

    // =========================================================================
    // Module Operations
    // =========================================================================

    /// Appends a factory-default module to the row.
    ///
    /// Always succeeds (there is no upper bound on bays); sibling modules
    /// and the focus are untouched. Returns the new module's id.
    pub fn add_module(&mut self) -> String {
        let mut next = (*self.current).clone();
        let module = ShelfModule::new();
        let id = module.id.clone();
        next.modules.push(module);

        self.commit(next);
        id
    }

    /// Removes a module from the row.
    ///
    /// ## Behavior
    /// - Unknown id: no-op
    /// - Last remaining module: no-op (a design always has at least one bay)
    /// - If the focused module was removed, focus falls back to the first
    ///   remaining module
    pub fn remove_module(&mut self, module_id: &str) -> bool {
        if self.current.module(module_id).is_none() {
            return false;
        }
        if self.current.modules.len() <= 1 {
            return false;
        }

        let mut next = (*self.current).clone();
        next.modules.retain(|m| m.id != module_id);

        let changed = self.commit(next);
        if changed && self.active_module_id == module_id {
            self.active_module_id = self.current.modules[0].id.clone();
        }
        changed
    }

    /// Applies a partial update to one module.
    ///
    /// ## Behavior
    /// - Unknown id: no-op
    /// - `width` clamps into `[MIN_WIDTH_MM, MAX_WIDTH_MM]`
    pub fn update_module(&mut self, module_id: &str, update: &ModuleUpdate) -> bool {
        let mut next = (*self.current).clone();
        let Some(module) = next.module_mut(module_id) else {
            return false;
        };

        if let Some(width) = update.width {
            module.width = clamp_width(width);
        }

        self.commit(next)
    }

    // =========================================================================
    // Level Operations
    // =========================================================================

    /// Appends a level to a module.
    ///
    /// ## Behavior
    /// - Unknown module id: no-op
    /// - Module already at `MAX_LEVELS`: no-op
    /// - The new level lands one spacing step above the current highest
    ///   level (clamped to the row height), open material
    pub fn add_level(&mut self, module_id: &str) -> bool {
        let mut next = (*self.current).clone();
        let height = next.height;
        let Some(module) = next.module_mut(module_id) else {
            return false;
        };
        if module.levels.len() >= MAX_LEVELS {
            return false;
        }

        let elevation = (module.max_elevation() + DEFAULT_LEVEL_SPACING_MM).min(height);
        module.levels.push(ShelfLevel::new(elevation, Material::None));

        self.commit(next)
    }

    /// Removes a level from a module.
    ///
    /// ## Behavior
    /// - Unknown module or level id: no-op
    /// - Module at `MIN_LEVELS`: no-op (the structural minimum is never
    ///   crossed, matching the disabled remove button in the UI)
    pub fn remove_level(&mut self, module_id: &str, level_id: &str) -> bool {
        let mut next = (*self.current).clone();
        let Some(module) = next.module_mut(module_id) else {
            return false;
        };
        if module.levels.len() <= MIN_LEVELS {
            return false;
        }

        let before = module.levels.len();
        module.levels.retain(|l| l.id != level_id);
        if module.levels.len() == before {
            return false;
        }

        self.commit(next)
    }

    /// Applies a partial update to one level.
    ///
    /// ## Behavior
    /// - Unknown module or level id: no-op
    /// - `elevation` clamps to `[0, height]`
    /// - Fields apply independently: an elevation applies even when no
    ///   material was provided, and vice versa
    pub fn update_level(&mut self, module_id: &str, level_id: &str, update: &LevelUpdate) -> bool {
        let mut next = (*self.current).clone();
        let height = next.height;
        let Some(module) = next.module_mut(module_id) else {
            return false;
        };
        let Some(level) = module.levels.iter_mut().find(|l| l.id == level_id) else {
            return false;
        };

        if let Some(elevation) = update.elevation {
            level.elevation = elevation.min(height);
        }

        if let Some(material) = update.material {
            level.material = material;
        }

        self.commit(next)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Replaces the tree with a fresh factory default.
    ///
    /// All ids are newly generated; ids from the discarded tree never
    /// reappear. Focus moves to the fresh module.
    pub fn reset(&mut self) -> bool {
        let next = ShelfConfig::new();
        let changed = self.commit(next);
        if changed {
            self.active_module_id = self.current.modules[0].id.clone();
        }
        changed
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        ConfigStore::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{
        DEFAULT_DEPTH_MM, DEFAULT_HEIGHT_MM, MAX_WIDTH_MM, MIN_HEIGHT_MM, MIN_WIDTH_MM,
    };

    fn first_module_id(store: &ConfigStore) -> String {
        store.config().modules[0].id.clone()
    }

    fn first_level_id(store: &ConfigStore) -> String {
        store.config().modules[0].levels[0].id.clone()
    }

    #[test]
    fn test_new_store_defaults() {
        let store = ConfigStore::new();
        let config = store.config();

        assert_eq!(config.height, DEFAULT_HEIGHT_MM);
        assert_eq!(config.depth, DEFAULT_DEPTH_MM);
        assert_eq!(config.modules.len(), 1);
        assert_eq!(store.version(), 0);
        assert_eq!(store.active_module_id(), config.modules[0].id);
    }

    #[test]
    fn test_width_clamps_high_and_low() {
        let mut store = ConfigStore::new();
        let id = first_module_id(&store);

        assert!(store.update_module(&id, &ModuleUpdate { width: Some(5000) }));
        assert_eq!(store.config().modules[0].width, MAX_WIDTH_MM);

        assert!(store.update_module(&id, &ModuleUpdate { width: Some(100) }));
        assert_eq!(store.config().modules[0].width, MIN_WIDTH_MM);
    }

    #[test]
    fn test_width_update_to_same_value_is_noop() {
        let mut store = ConfigStore::new();
        let id = first_module_id(&store);
        let width = store.config().modules[0].width;

        assert!(!store.update_module(&id, &ModuleUpdate { width: Some(width) }));
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_update_unknown_module_is_noop() {
        let mut store = ConfigStore::new();

        assert!(!store.update_module("no-such-id", &ModuleUpdate { width: Some(1500) }));
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_depth_700_is_rejected() {
        let mut store = ConfigStore::new();

        let changed = store.update_global_dimensions(&GlobalDimensionsUpdate {
            height: None,
            depth: Some(700),
        });

        assert!(!changed);
        assert_eq!(store.config().depth, DEFAULT_DEPTH_MM);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_valid_height_applies_even_with_bad_depth() {
        let mut store = ConfigStore::new();

        let changed = store.update_global_dimensions(&GlobalDimensionsUpdate {
            height: Some(2500),
            depth: Some(700),
        });

        assert!(changed);
        assert_eq!(store.config().height, 2500);
        assert_eq!(store.config().depth, DEFAULT_DEPTH_MM);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_height_clamps() {
        let mut store = ConfigStore::new();

        store.update_global_dimensions(&GlobalDimensionsUpdate {
            height: Some(9999),
            depth: None,
        });
        assert_eq!(store.config().height, 5000);

        store.update_global_dimensions(&GlobalDimensionsUpdate {
            height: Some(1),
            depth: None,
        });
        assert_eq!(store.config().height, MIN_HEIGHT_MM);
    }

    #[test]
    fn test_height_shrink_pulls_levels_down() {
        let mut store = ConfigStore::new();
        let module_id = first_module_id(&store);
        let level_id = first_level_id(&store);

        // Park a level near the ceiling, then lower the ceiling below it.
        store.update_level(
            &module_id,
            &level_id,
            &LevelUpdate {
                elevation: Some(1900),
                material: None,
            },
        );
        store.update_global_dimensions(&GlobalDimensionsUpdate {
            height: Some(1200),
            depth: None,
        });

        let config = store.config();
        assert_eq!(config.height, 1200);
        assert!(config.modules[0].levels.iter().all(|l| l.elevation <= 1200));
        assert_eq!(config.modules[0].level(&level_id).unwrap().elevation, 1200);
    }

    #[test]
    fn test_add_module_appends_and_keeps_focus() {
        let mut store = ConfigStore::new();
        let original = first_module_id(&store);

        let new_id = store.add_module();

        let config = store.config();
        assert_eq!(config.modules.len(), 2);
        assert_eq!(config.modules[1].id, new_id);
        assert_ne!(new_id, original);
        assert_eq!(store.active_module_id(), original);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_remove_last_module_is_noop() {
        let mut store = ConfigStore::new();
        let id = first_module_id(&store);

        assert!(!store.remove_module(&id));
        assert_eq!(store.config().modules.len(), 1);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_remove_focused_module_falls_back_to_first() {
        let mut store = ConfigStore::new();
        let first = first_module_id(&store);
        let second = store.add_module();

        assert!(store.set_active_module_id(&second));
        assert!(store.remove_module(&second));

        assert_eq!(store.config().modules.len(), 1);
        assert_eq!(store.active_module_id(), first);
    }

    #[test]
    fn test_remove_other_module_keeps_focus() {
        let mut store = ConfigStore::new();
        let first = first_module_id(&store);
        let second = store.add_module();

        assert!(store.remove_module(&second));
        assert_eq!(store.active_module_id(), first);
    }

    #[test]
    fn test_set_active_module_id() {
        let mut store = ConfigStore::new();
        let second = store.add_module();

        assert!(store.set_active_module_id(&second));
        assert_eq!(store.active_module_id(), second);

        assert!(!store.set_active_module_id("no-such-id"));
        assert_eq!(store.active_module_id(), second);

        // Focusing the already focused module changes nothing.
        assert!(!store.set_active_module_id(&second));
    }

    #[test]
    fn test_level_count_stays_within_bounds() {
        let mut store = ConfigStore::new();
        let module_id = first_module_id(&store);

        // Fill to the maximum...
        while store.config().modules[0].levels.len() < MAX_LEVELS {
            assert!(store.add_level(&module_id));
        }
        // ...then one more is refused.
        assert!(!store.add_level(&module_id));
        assert_eq!(store.config().modules[0].levels.len(), MAX_LEVELS);

        // Strip back down to the minimum...
        while store.config().modules[0].levels.len() > MIN_LEVELS {
            let level_id = store.config().modules[0].levels.last().unwrap().id.clone();
            assert!(store.remove_level(&module_id, &level_id));
        }
        // ...then one more is refused.
        let level_id = first_level_id(&store);
        assert!(!store.remove_level(&module_id, &level_id));
        assert_eq!(store.config().modules[0].levels.len(), MIN_LEVELS);
    }

    #[test]
    fn test_new_level_lands_above_highest() {
        let mut store = ConfigStore::new();
        let module_id = first_module_id(&store);

        assert!(store.add_level(&module_id));

        let config = store.config();
        let added = config.modules[0].levels.last().unwrap();
        assert_eq!(added.elevation, 1000); // 500 (highest) + 500 spacing
        assert_eq!(added.material, Material::None);
    }

    #[test]
    fn test_new_level_elevation_clamps_to_height() {
        let mut store = ConfigStore::new();
        let module_id = first_module_id(&store);
        let level_id = first_level_id(&store);

        // Highest level at the ceiling; the next one cannot go above it.
        store.update_level(
            &module_id,
            &level_id,
            &LevelUpdate {
                elevation: Some(2000),
                material: None,
            },
        );
        assert!(store.add_level(&module_id));

        let config = store.config();
        assert_eq!(config.modules[0].levels.last().unwrap().elevation, 2000);
    }

    #[test]
    fn test_update_level_clamps_elevation_and_sets_material() {
        let mut store = ConfigStore::new();
        let module_id = first_module_id(&store);
        let level_id = first_level_id(&store);

        assert!(store.update_level(
            &module_id,
            &level_id,
            &LevelUpdate {
                elevation: Some(9999),
                material: Some(Material::Grid),
            },
        ));

        let config = store.config();
        let level = config.modules[0].level(&level_id).unwrap();
        assert_eq!(level.elevation, config.height);
        assert_eq!(level.material, Material::Grid);
    }

    #[test]
    fn test_update_level_fields_apply_independently() {
        let mut store = ConfigStore::new();
        let module_id = first_module_id(&store);
        let level_id = first_level_id(&store);

        store.update_level(
            &module_id,
            &level_id,
            &LevelUpdate {
                elevation: None,
                material: Some(Material::Wood),
            },
        );
        store.update_level(
            &module_id,
            &level_id,
            &LevelUpdate {
                elevation: Some(300),
                material: None,
            },
        );

        let config = store.config();
        let level = config.modules[0].level(&level_id).unwrap();
        assert_eq!(level.material, Material::Wood);
        assert_eq!(level.elevation, 300);
    }

    #[test]
    fn test_update_level_unknown_ids_are_noops() {
        let mut store = ConfigStore::new();
        let module_id = first_module_id(&store);
        let level_id = first_level_id(&store);

        assert!(!store.update_level("nope", &level_id, &LevelUpdate::default()));
        assert!(!store.update_level(
            &module_id,
            "nope",
            &LevelUpdate {
                elevation: Some(100),
                material: None,
            },
        ));
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_reset_restores_defaults_with_fresh_ids() {
        let mut store = ConfigStore::new();
        let old_module_id = first_module_id(&store);
        store.add_module();
        store.update_global_dimensions(&GlobalDimensionsUpdate {
            height: Some(3000),
            depth: Some(800),
        });
        let version_before = store.version();

        assert!(store.reset());

        let config = store.config();
        assert_eq!(config.height, DEFAULT_HEIGHT_MM);
        assert_eq!(config.depth, DEFAULT_DEPTH_MM);
        assert_eq!(config.modules.len(), 1);
        assert_ne!(config.modules[0].id, old_module_id);
        assert_eq!(store.active_module_id(), config.modules[0].id);
        assert!(store.version() > version_before);
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let mut store = ConfigStore::new();
        let module_id = first_module_id(&store);
        let before = store.config();

        store.update_module(&module_id, &ModuleUpdate { width: Some(1200) });

        // The old snapshot still shows the old width.
        assert_eq!(before.modules[0].width, 1800);
        assert_eq!(store.config().modules[0].width, 1200);
    }

    #[test]
    fn test_at_least_one_module_survives_any_sequence() {
        let mut store = ConfigStore::new();
        let first = first_module_id(&store);
        let second = store.add_module();
        let third = store.add_module();

        store.remove_module(&second);
        store.remove_module(&first);
        store.remove_module(&third);
        store.remove_module(&third); // repeat on purpose
        store.remove_module("ghost");

        assert_eq!(store.config().modules.len(), 1);
        assert_eq!(store.active_module_id(), store.config().modules[0].id);
    }
}
