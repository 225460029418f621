//! # Domain Types
//!
//! Core domain types for the shelving configurator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ShelfConfig (the canonical tree, one per session)                      │
//! │  ├── height: u32        global row height (mm)                          │
//! │  ├── depth:  u32        global row depth (mm)                           │
//! │  └── modules: Vec<ShelfModule>      left-to-right bays                  │
//! │       ├── id (UUID), width: u32                                         │
//! │       └── levels: Vec<ShelfLevel>                                       │
//! │            ├── id (UUID), elevation: u32                                │
//! │            └── material: Material  {None, Wood, Steel, ...}             │
//! │                                                                         │
//! │  Product (catalog collaborator's record, consumed read-only)            │
//! │  ├── id (i64), codigo, categoria, descripcion, medidas_mm               │
//! │  └── precio_cents: i64                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Rules
//! - Module and level `id`s are UUID v4 strings assigned at creation,
//!   immutable for the entity's lifetime, and never reused after deletion.
//! - Product `id`s come from the catalog database and are merge keys only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::limits::{
    DEFAULT_DEPTH_MM, DEFAULT_HEIGHT_MM, DEFAULT_LEVEL_SPACING_MM, DEFAULT_WIDTH_MM, MIN_LEVELS,
};
use crate::money::Money;

// =============================================================================
// Material
// =============================================================================

/// Shelf surface material for a level.
///
/// ## Pricing Model
/// Each material adds a flat bonus per shelf on top of the structural cost
/// (the beams carry the shelf; the surface is an add-on):
///
/// | Material  | Showroom label    | Bonus   |
/// |-----------|-------------------|---------|
/// | None      | Sin suelo         |  €0.00  |
/// | Wood      | Madera            | €15.00  |
/// | Steel     | Acero             | €25.00  |
/// | Grid      | Rejilla           | €30.00  |
/// | Multiplex | Madera Multiplex  | €20.00  |
/// | Angled    | Suelo inclinado   | €35.00  |
///
/// `None` is a real choice, not an absence: an open level holds pallets
/// directly on the beams and costs nothing extra.
///
/// Serialized names are the exact tokens the TypeScript viewer uses
/// (`"None"`, `"Wood"`, ...), so no serde renames are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Material {
    /// Open level, goods rest on the beams.
    None,
    /// Chipboard panel.
    Wood,
    /// Galvanized steel panel.
    Steel,
    /// Wire mesh deck (sprinkler-friendly).
    Grid,
    /// Multiplex plywood panel.
    Multiplex,
    /// Inclined picking shelf.
    Angled,
}

impl Material {
    /// Every material, in catalog order.
    pub const ALL: [Material; 6] = [
        Material::None,
        Material::Wood,
        Material::Steel,
        Material::Grid,
        Material::Multiplex,
        Material::Angled,
    ];

    /// Returns the flat price bonus for one shelf of this material.
    pub const fn bonus(&self) -> Money {
        match self {
            Material::None => Money::from_cents(0),
            Material::Wood => Money::from_cents(1500),
            Material::Steel => Money::from_cents(2500),
            Material::Grid => Money::from_cents(3000),
            Material::Multiplex => Money::from_cents(2000),
            Material::Angled => Money::from_cents(3500),
        }
    }

    /// Returns the canonical serialized token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Material::None => "None",
            Material::Wood => "Wood",
            Material::Steel => "Steel",
            Material::Grid => "Grid",
            Material::Multiplex => "Multiplex",
            Material::Angled => "Angled",
        }
    }

    /// Returns the Spanish showroom label.
    pub const fn label_es(&self) -> &'static str {
        match self {
            Material::None => "Sin suelo",
            Material::Wood => "Madera",
            Material::Steel => "Acero",
            Material::Grid => "Rejilla",
            Material::Multiplex => "Madera Multiplex",
            Material::Angled => "Suelo inclinado",
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::None
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a material token as typed by an operator.
///
/// Case-insensitive ("wood" and "Wood" both work); unknown tokens list
/// the valid choices in the error.
impl FromStr for Material {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ValidationError::Required {
                field: "material".to_string(),
            });
        }

        Material::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "material".to_string(),
                allowed: Material::ALL.iter().map(|m| m.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Shelf Level
// =============================================================================

/// One horizontal shelf inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShelfLevel {
    /// Unique identifier (UUID v4), stable for the level's lifetime.
    pub id: String,

    /// Height from the ground in mm. Always within `[0, config.height]`.
    pub elevation: u32,

    /// Shelf surface material.
    pub material: Material,
}

impl ShelfLevel {
    /// Creates a level with a fresh id.
    pub fn new(elevation: u32, material: Material) -> Self {
        ShelfLevel {
            id: Uuid::new_v4().to_string(),
            elevation,
            material,
        }
    }
}

// =============================================================================
// Shelf Module
// =============================================================================

/// One shelving bay: its own width, its own levels.
///
/// Modules sit side by side in the row; each gets its own pair of uprights
/// (adjacent bays do not share posts in this product line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShelfModule {
    /// Unique identifier (UUID v4), stable for the module's lifetime.
    pub id: String,

    /// Bay width in mm. Always within `[MIN_WIDTH_MM, MAX_WIDTH_MM]`.
    pub width: u32,

    /// Levels in stacking order (not necessarily sorted by elevation).
    /// Always between `MIN_LEVELS` and `MAX_LEVELS` entries.
    pub levels: Vec<ShelfLevel>,
}

impl ShelfModule {
    /// Creates a factory-default module: default width and the structural
    /// minimum of levels (ground level plus one spaced above it), all open.
    pub fn new() -> Self {
        let levels = (0..MIN_LEVELS)
            .map(|i| ShelfLevel::new(i as u32 * DEFAULT_LEVEL_SPACING_MM, Material::None))
            .collect();

        ShelfModule {
            id: Uuid::new_v4().to_string(),
            width: DEFAULT_WIDTH_MM,
            levels,
        }
    }

    /// Returns the highest level elevation, or 0 for an empty bay.
    pub fn max_elevation(&self) -> u32 {
        self.levels.iter().map(|l| l.elevation).max().unwrap_or(0)
    }

    /// Finds a level by id.
    pub fn level(&self, level_id: &str) -> Option<&ShelfLevel> {
        self.levels.iter().find(|l| l.id == level_id)
    }
}

impl Default for ShelfModule {
    fn default() -> Self {
        ShelfModule::new()
    }
}

// =============================================================================
// Shelf Config
// =============================================================================

/// The canonical configuration tree: global dimensions plus the row of
/// modules. One per design session.
///
/// ## Invariants (enforced by the store, assumed everywhere else)
/// - `modules.len() >= 1`
/// - `height` within `[MIN_HEIGHT_MM, MAX_HEIGHT_MM]`
/// - `depth` in `ALLOWED_DEPTHS_MM`
/// - every module/level within its own bounds (see their docs)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShelfConfig {
    /// Global row height in mm, shared by all modules.
    pub height: u32,

    /// Global row depth in mm, shared by all modules.
    pub depth: u32,

    /// Bays in physical left-to-right order.
    pub modules: Vec<ShelfModule>,
}

impl ShelfConfig {
    /// Creates the factory-default configuration: one default module under
    /// the default global dimensions.
    pub fn new() -> Self {
        ShelfConfig {
            height: DEFAULT_HEIGHT_MM,
            depth: DEFAULT_DEPTH_MM,
            modules: vec![ShelfModule::new()],
        }
    }

    /// Finds a module by id.
    pub fn module(&self, module_id: &str) -> Option<&ShelfModule> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Finds a module by id, mutably.
    pub fn module_mut(&mut self, module_id: &str) -> Option<&mut ShelfModule> {
        self.modules.iter_mut().find(|m| m.id == module_id)
    }

    /// Total level count across all modules.
    pub fn level_count(&self) -> usize {
        self.modules.iter().map(|m| m.levels.len()).sum()
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        ShelfConfig::new()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product (accessories, anchors, protectors...).
///
/// Produced by the catalog collaborator and consumed read-only: the core
/// uses `id` as the cart merge key and `precio_cents` for totals; every
/// other field passes through untouched into the export document.
///
/// Field names mirror the catalog database columns (Spanish).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog row id.
    pub id: i64,

    /// When the catalog row was created (absent for seed data).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    /// Article code (business identifier).
    pub codigo: String,

    /// Catalog category.
    pub categoria: String,

    /// Display description.
    pub descripcion: String,

    /// Dimensions as printed in the catalog, e.g. "1100x400".
    pub medidas_mm: String,

    /// Unit price in cents.
    pub precio_cents: i64,

    /// Optional product photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.precio_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{MAX_LEVELS, MIN_LEVELS};

    #[test]
    fn test_material_bonus_table() {
        assert_eq!(Material::None.bonus().cents(), 0);
        assert_eq!(Material::Wood.bonus().cents(), 1500);
        assert_eq!(Material::Steel.bonus().cents(), 2500);
        assert_eq!(Material::Grid.bonus().cents(), 3000);
        assert_eq!(Material::Multiplex.bonus().cents(), 2000);
        assert_eq!(Material::Angled.bonus().cents(), 3500);
    }

    #[test]
    fn test_material_labels() {
        assert_eq!(Material::None.label_es(), "Sin suelo");
        assert_eq!(Material::Grid.label_es(), "Rejilla");
        assert_eq!(Material::Multiplex.label_es(), "Madera Multiplex");
    }

    #[test]
    fn test_material_parses_case_insensitive() {
        assert_eq!("Wood".parse::<Material>().unwrap(), Material::Wood);
        assert_eq!("wood".parse::<Material>().unwrap(), Material::Wood);
        assert_eq!("ANGLED".parse::<Material>().unwrap(), Material::Angled);
        assert_eq!(" none ".parse::<Material>().unwrap(), Material::None);
    }

    #[test]
    fn test_material_rejects_unknown() {
        let err = "glass".parse::<Material>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));

        let err = "".parse::<Material>().unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_material_serializes_to_viewer_tokens() {
        assert_eq!(serde_json::to_string(&Material::Wood).unwrap(), "\"Wood\"");
        assert_eq!(
            serde_json::from_str::<Material>("\"Multiplex\"").unwrap(),
            Material::Multiplex
        );
    }

    #[test]
    fn test_new_module_satisfies_invariants() {
        let module = ShelfModule::new();
        assert_eq!(module.width, DEFAULT_WIDTH_MM);
        assert_eq!(module.levels.len(), MIN_LEVELS);
        assert!(module.levels.len() <= MAX_LEVELS);
        assert_eq!(module.levels[0].elevation, 0);
        assert_eq!(module.levels[1].elevation, DEFAULT_LEVEL_SPACING_MM);
        assert!(module.levels.iter().all(|l| l.material == Material::None));
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = ShelfModule::new();
        let b = ShelfModule::new();
        assert_ne!(a.id, b.id);
        assert_ne!(a.levels[0].id, a.levels[1].id);
        assert_ne!(a.levels[0].id, b.levels[0].id);
    }

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::new();
        assert_eq!(config.height, DEFAULT_HEIGHT_MM);
        assert_eq!(config.depth, DEFAULT_DEPTH_MM);
        assert_eq!(config.modules.len(), 1);
        assert_eq!(config.level_count(), MIN_LEVELS);
    }

    #[test]
    fn test_module_lookup() {
        let config = ShelfConfig::new();
        let id = config.modules[0].id.clone();

        assert!(config.module(&id).is_some());
        assert!(config.module("no-such-id").is_none());

        let level_id = config.modules[0].levels[0].id.clone();
        assert!(config.module(&id).unwrap().level(&level_id).is_some());
        assert!(config.module(&id).unwrap().level("nope").is_none());
    }

    #[test]
    fn test_max_elevation() {
        let mut module = ShelfModule::new();
        assert_eq!(module.max_elevation(), DEFAULT_LEVEL_SPACING_MM);

        module.levels.push(ShelfLevel::new(1800, Material::Wood));
        assert_eq!(module.max_elevation(), 1800);
    }

    #[test]
    fn test_product_price() {
        let product = Product {
            id: 1,
            created_at: None,
            codigo: "ACC-001".to_string(),
            categoria: "Accesorios".to_string(),
            descripcion: "Tope de palet".to_string(),
            medidas_mm: "1100x400".to_string(),
            precio_cents: 1250,
            image_url: None,
        };
        assert_eq!(product.price(), Money::from_cents(1250));
    }

    #[test]
    fn test_product_optional_fields_skip_serialization() {
        let product = Product {
            id: 7,
            created_at: None,
            codigo: "X".to_string(),
            categoria: "Y".to_string(),
            descripcion: "Z".to_string(),
            medidas_mm: "100x100".to_string(),
            precio_cents: 100,
            image_url: None,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(!json.contains("created_at"));
        assert!(!json.contains("image_url"));

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
