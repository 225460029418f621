//! # Rackline Quoter
//!
//! Builds a shelving design from command-line flags, prints the itemized
//! quote, and optionally writes the design document.
//!
//! ## Usage
//! ```bash
//! # Quote the default design (1 bay, 3 open levels, 1800×2000×600)
//! cargo run -p rackline-quoter
//!
//! # A bigger row with wooden shelves and some accessories
//! cargo run -p rackline-quoter -- \
//!     --modules 3 --levels 5 --width 2200 --height 3000 --depth 800 \
//!     --material Wood --extras PRO-400=2 --extras ANC-M10=8
//!
//! # Save the design document, then re-print it later
//! cargo run -p rackline-quoter -- --levels 4 --out design.json
//! cargo run -p rackline-quoter -- --show design.json
//! ```
//!
//! ## Validation
//! Flags go through the strict validators before anything is built: a
//! mistyped `--depth 700` fails with the list of manufactured depths
//! instead of being silently corrected the way a UI slider would be.

use std::env;
use std::fs;

use rackline_core::document::DEFAULT_FILE_NAME;
use rackline_core::limits::MIN_LEVELS;
use rackline_core::validation::{
    validate_depth_mm, validate_height_mm, validate_level_count, validate_module_count,
    validate_quantity, validate_width_mm,
};
use rackline_core::{
    CartItem, DesignDocument, DesignSession, GlobalDimensionsUpdate, LevelUpdate, MarginRate,
    Material, ModuleUpdate, Money, Pricing, Product, ValidationError, MARGIN_BPS,
};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Built-in accessory catalog for demo quotes:
/// (codigo, categoria, descripcion, medidas_mm, precio_cents).
const DEMO_CATALOG: &[(&str, &str, &str, &str, i64)] = &[
    ("ANC-M10", "Anclajes", "Anclaje químico M10", "10x90", 450),
    ("PRO-400", "Protecciones", "Protector de bastidor", "400x160", 1250),
    ("TOP-110", "Topes", "Tope de palet trasero", "1100x60", 950),
    ("SEN-300", "Señalización", "Placa de carga máxima", "300x200", 780),
    ("NIV-080", "Nivelación", "Calzo de nivelación 80 mm", "80x80", 160),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut modules: usize = 1;
    let mut levels: usize = 3;
    let mut width_mm: u32 = 1800;
    let mut height_mm: u32 = 2000;
    let mut depth_mm: u32 = 600;
    let mut material = Material::None;
    let mut extras: Vec<String> = Vec::new();
    let mut out: Option<String> = None;
    let mut show: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--modules" | "-m" => {
                modules = flag_value(&args, i, "--modules")?.parse()?;
                i += 1;
            }
            "--levels" | "-l" => {
                levels = flag_value(&args, i, "--levels")?.parse()?;
                i += 1;
            }
            "--width" | "-w" => {
                width_mm = flag_value(&args, i, "--width")?.parse()?;
                i += 1;
            }
            "--height" | "-H" => {
                height_mm = flag_value(&args, i, "--height")?.parse()?;
                i += 1;
            }
            "--depth" | "-d" => {
                depth_mm = flag_value(&args, i, "--depth")?.parse()?;
                i += 1;
            }
            "--material" | "-M" => {
                material = flag_value(&args, i, "--material")?.parse()?;
                i += 1;
            }
            "--extras" | "-e" => {
                extras.push(flag_value(&args, i, "--extras")?.to_string());
                i += 1;
            }
            "--out" | "-o" => {
                // File name is optional: bare --out uses the viewer's name.
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    out = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    out = Some(DEFAULT_FILE_NAME.to_string());
                }
            }
            "--show" => {
                show = Some(flag_value(&args, i, "--show")?.to_string());
                i += 1;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                return Err(format!("unknown option: {} (see --help)", other).into());
            }
        }
        i += 1;
    }

    // Re-printing a saved document needs no design of its own.
    if let Some(path) = show {
        return show_document(&path);
    }

    // Strict validation before anything is built
    validate_module_count(modules)?;
    validate_level_count(levels)?;
    validate_width_mm(width_mm)?;
    validate_height_mm(height_mm)?;
    validate_depth_mm(depth_mm)?;

    info!(modules, levels, width_mm, height_mm, depth_mm, "building design");

    let mut session = build_design(modules, levels, width_mm, height_mm, depth_mm, material);

    for raw in &extras {
        let (code, qty) = parse_extra(raw)?;
        validate_quantity(qty)?;
        let product = find_demo_product(&code)?;
        debug!(%code, qty, "adding extra");

        let cart = session.cart_mut();
        cart.add(&product);
        if qty > 1 {
            cart.update_quantity(product.id, qty);
        }
    }

    println!("📐 Rackline Quoter");
    println!("==================");
    println!(
        "Fila: {} módulo(s) × {} mm · altura {} mm · fondo {} mm",
        modules, width_mm, height_mm, depth_mm
    );
    println!("Niveles: {} por módulo · suelo: {}", levels, material.label_es());

    print_quote(
        &session.pricing(),
        &session.cart().items,
        session.estimated_total(),
        session.margin_rate(),
    );

    // Write the document when asked (flag wins over the env override)
    let out_path = out.or_else(|| env::var("RACKLINE_OUT").ok());
    if let Some(path) = out_path {
        let document = session.export();
        fs::write(&path, document.to_json_pretty()?)?;
        info!(%path, "design document written");
        println!();
        println!("✓ Documento guardado en {}", path);
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-operation detail
/// - `RUST_LOG=rackline_quoter=debug` - Quoter detail only
/// - Default: WARN, so diagnostics never interleave with the quote table
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Returns the value following a flag, or a loud error.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value (see --help)", flag))
}

/// Splits an extras argument: "PRO-400=2" → ("PRO-400", 2), bare code → qty 1.
fn parse_extra(raw: &str) -> Result<(String, i64), Box<dyn std::error::Error>> {
    match raw.split_once('=') {
        Some((code, qty)) => Ok((code.to_string(), qty.parse()?)),
        None => Ok((raw.to_string(), 1)),
    }
}

/// Builds one demo catalog product.
fn demo_product(index: usize) -> Product {
    let (codigo, categoria, descripcion, medidas_mm, precio_cents) = DEMO_CATALOG[index];
    Product {
        id: index as i64 + 1,
        created_at: None,
        codigo: codigo.to_string(),
        categoria: categoria.to_string(),
        descripcion: descripcion.to_string(),
        medidas_mm: medidas_mm.to_string(),
        precio_cents,
        image_url: None,
    }
}

/// Looks up a demo catalog product by its article code.
fn find_demo_product(code: &str) -> Result<Product, ValidationError> {
    DEMO_CATALOG
        .iter()
        .position(|(codigo, ..)| codigo.eq_ignore_ascii_case(code))
        .map(demo_product)
        .ok_or_else(|| ValidationError::NotAllowed {
            field: "extras".to_string(),
            allowed: DEMO_CATALOG.iter().map(|(c, ..)| c.to_string()).collect(),
        })
}

/// Builds a design through the sanctioned store surface.
///
/// All inputs are pre-validated, so every mutation below lands unclamped;
/// the store still treats them like any other caller's.
fn build_design(
    module_count: usize,
    level_count: usize,
    width_mm: u32,
    height_mm: u32,
    depth_mm: u32,
    material: Material,
) -> DesignSession {
    let mut session = DesignSession::new();

    session.store_mut().update_global_dimensions(&GlobalDimensionsUpdate {
        height: Some(height_mm),
        depth: Some(depth_mm),
    });

    for _ in 1..module_count {
        session.store_mut().add_module();
    }

    let module_ids: Vec<String> = session.config().modules.iter().map(|m| m.id.clone()).collect();
    for module_id in &module_ids {
        session
            .store_mut()
            .update_module(module_id, &ModuleUpdate { width: Some(width_mm) });

        for _ in MIN_LEVELS..level_count {
            session.store_mut().add_level(module_id);
        }

        let level_ids: Vec<String> = session
            .config()
            .module(module_id)
            .map(|m| m.levels.iter().map(|l| l.id.clone()).collect())
            .unwrap_or_default();
        for level_id in &level_ids {
            session.store_mut().update_level(
                module_id,
                level_id,
                &LevelUpdate {
                    elevation: None,
                    material: Some(material),
                },
            );
        }

        debug!(%module_id, levels = level_ids.len(), "module configured");
    }

    session
}

/// Prints the itemized quote table.
fn print_quote(pricing: &Pricing, items: &[CartItem], estimated: Money, rate: MarginRate) {
    println!();
    println!("Presupuesto estructura");
    println!("  {:<28} {:>10}", "Bastidores (uprights)", pricing.uprights.to_string());
    println!("  {:<28} {:>10}", "Largueros (beams)", pricing.beams.to_string());
    println!("  {:<28} {:>10}", "Puntales (supports)", pricing.supports.to_string());
    println!("  {:<28} {:>10}", "Baldas (shelves)", pricing.shelves.to_string());
    println!("  {:-<39}", "");
    println!("  {:<28} {:>10}", "Subtotal estructura", pricing.total.to_string());

    if !items.is_empty() {
        let cart_total: Money = items.iter().map(|i| i.line_total()).sum();
        println!();
        println!("Extras");
        for item in items {
            let line = format!("{} × {}", item.quantity, item.product.descripcion);
            println!("  {:<28} {:>10}", line, item.line_total().to_string());
        }
        println!("  {:-<39}", "");
        println!("  {:<28} {:>10}", "Subtotal extras", cart_total.to_string());
    }

    println!();
    println!(
        "Precio total estimado (incl. {:.0}% margen): {}",
        rate.percentage(),
        estimated
    );
}

/// Re-prints a previously saved design document.
fn show_document(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let document = DesignDocument::from_json(&json)?;
    let rate = MarginRate::from_bps(MARGIN_BPS);

    info!(%path, "design document loaded");

    println!("📐 Rackline Quoter");
    println!("==================");
    println!(
        "Documento: {} (exportado {})",
        path,
        document.exported_at.format("%Y-%m-%d %H:%M UTC")
    );

    print_quote(
        &document.pricing,
        &document.cart_items,
        document.estimated_total(rate),
        rate,
    );

    Ok(())
}

fn print_help() {
    println!("Rackline Quoter");
    println!();
    println!("Usage: quoter [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -m, --modules <N>       Number of bays (default: 1)");
    println!("  -l, --levels <N>        Levels per bay, 2-8 (default: 3)");
    println!("  -w, --width <MM>        Bay width in mm, 1100-2200 (default: 1800)");
    println!("  -H, --height <MM>       Row height in mm, 1000-5000 (default: 2000)");
    println!("  -d, --depth <MM>        Row depth in mm: 400/500/600/800/1000/1200 (default: 600)");
    println!("  -M, --material <NAME>   Shelf material: None/Wood/Steel/Grid/Multiplex/Angled");
    println!("  -e, --extras <CODE=QTY> Add a catalog accessory (repeatable, qty optional)");
    println!("  -o, --out [FILE]        Write the design document (default: {})", DEFAULT_FILE_NAME);
    println!("      --show <FILE>       Print a saved design document and exit");
    println!("  -h, --help              Show this help message");
    println!();
    println!("Environment:");
    println!("  RACKLINE_OUT            Output path used when --out is not given");
    println!("  RUST_LOG                Tracing filter (default: warn)");
    println!();
    println!("Extras catalog:");
    for (codigo, _, descripcion, _, precio_cents) in DEMO_CATALOG {
        let precio = Money::from_cents(*precio_cents);
        println!("  {:<10} {:<28} {:>8}", codigo, descripcion, precio.to_string());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_design_applies_recipe() {
        let session = build_design(3, 5, 2200, 3000, 800, Material::Wood);
        let config = session.config();

        assert_eq!(config.modules.len(), 3);
        assert_eq!(config.height, 3000);
        assert_eq!(config.depth, 800);
        for module in &config.modules {
            assert_eq!(module.width, 2200);
            assert_eq!(module.levels.len(), 5);
            assert!(module.levels.iter().all(|l| l.material == Material::Wood));
        }
    }

    #[test]
    fn test_build_design_minimum_levels() {
        let session = build_design(1, 2, 1100, 1000, 400, Material::None);
        assert_eq!(session.config().modules[0].levels.len(), 2);
    }

    #[test]
    fn test_parse_extra() {
        assert_eq!(parse_extra("PRO-400=2").unwrap(), ("PRO-400".to_string(), 2));
        assert_eq!(parse_extra("ANC-M10").unwrap(), ("ANC-M10".to_string(), 1));
        assert!(parse_extra("PRO-400=two").is_err());
    }

    #[test]
    fn test_find_demo_product() {
        let product = find_demo_product("pro-400").unwrap();
        assert_eq!(product.codigo, "PRO-400");
        assert_eq!(product.precio_cents, 1250);

        assert!(find_demo_product("XXX-000").is_err());
    }
}
