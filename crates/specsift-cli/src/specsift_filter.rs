//! Catalog filter CLI
//!
//! Usage: specsift_filter <catalog> [options]
//!
//! Options:
//!   --color <COLOR>  Match records with this color (red, green, blue)
//!   --size <SIZE>    Match records with this size (small, medium, large)
//!   --bundles <K>    Also report the number of K-item bundles among matches
//!   --save <PATH>    Write matches to a text listing
//!   --help, -h       Show help
//!
//! At least one of --color/--size is required; giving both matches their
//! conjunction.
//!
//! Example: specsift_filter stock.sorted.cat --color green --size large

use specsift_catalog::app::bundles::count_bundles;
use specsift_catalog::domain::catalog_format::{CatalogFormatError, ValidationOptions};
use specsift_catalog::domain::record::{Color, Record, Size};
use specsift_catalog::domain::spec::{Spec, conjoin};
use specsift_catalog::infra::listing_io::save_listing;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "mmap")]
use specsift_catalog::MappedCatalog;

#[cfg(not(feature = "mmap"))]
use specsift_catalog::infra::catalog_io::load_catalog;

#[cfg(feature = "indexed-search")]
use specsift_catalog::domain::filter::{CatalogIndex, filter_with_index};

#[cfg(not(feature = "indexed-search"))]
use specsift_catalog::domain::filter::filter;

struct Args {
    catalog: PathBuf,
    color: Option<Color>,
    size: Option<Size>,
    bundles: Option<u64>,
    save: Option<PathBuf>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <catalog> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <catalog>        Binary catalog file built with specsift_build");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --color <COLOR>  Match records with this color (red, green, blue)");
    eprintln!("  --size <SIZE>    Match records with this size (small, medium, large)");
    eprintln!("  --bundles <K>    Also report the number of K-item bundles among matches");
    eprintln!("  --save <PATH>    Write matches to a text listing");
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut catalog: Option<PathBuf> = None;
    let mut color: Option<Color> = None;
    let mut size: Option<Size> = None;
    let mut bundles: Option<u64> = None;
    let mut save: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--color" => {
                i += 1;
                if i >= args.len() {
                    return Err("--color requires a value".to_string());
                }
                color = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("Invalid color: {}", args[i]))?,
                );
            }
            "--size" => {
                i += 1;
                if i >= args.len() {
                    return Err("--size requires a value".to_string());
                }
                size = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("Invalid size: {}", args[i]))?,
                );
            }
            "--bundles" => {
                i += 1;
                if i >= args.len() {
                    return Err("--bundles requires a value".to_string());
                }
                bundles = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("Invalid bundle size: {}", args[i]))?,
                );
            }
            "--save" => {
                i += 1;
                if i >= args.len() {
                    return Err("--save requires a value".to_string());
                }
                save = Some(PathBuf::from(&args[i]));
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if catalog.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                catalog = Some(PathBuf::from(arg));
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let catalog = catalog.ok_or("Missing catalog argument")?;

    if color.is_none() && size.is_none() {
        return Err("At least one of --color/--size is required".to_string());
    }

    Ok(Args {
        catalog,
        color,
        size,
        bundles,
        save,
    })
}

fn format_catalog_error(path: &Path, err: CatalogFormatError) -> String {
    match err {
        CatalogFormatError::InvalidMagic => format!(
            "Invalid file: '{}' is not a valid catalog file.\nBuild one with specsift_build.",
            path.display()
        ),
        CatalogFormatError::UnsupportedVersion(version) => format!(
            "Unsupported format version: {}.\nPlease rebuild the catalog file.",
            version
        ),
        CatalogFormatError::RecordCountExceeded { count, max } => format!(
            "Catalog declares {} records, more than the supported {}.",
            count, max
        ),
        CatalogFormatError::TruncatedHeader { .. }
        | CatalogFormatError::TruncatedRecord { .. }
        | CatalogFormatError::TrailingData => {
            "Catalog file is corrupt.\nPlease rebuild it with specsift_build.".to_string()
        }
        other => other.to_string(),
    }
}

fn build_spec(args: &Args) -> Spec {
    let leaves = args
        .color
        .map(Spec::ColorIs)
        .into_iter()
        .chain(args.size.map(Spec::SizeIs));

    // parse_args guarantees at least one leaf.
    conjoin(leaves).expect("at least one leaf spec")
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let spec = build_spec(&args);
    let options = ValidationOptions::for_filter();

    println!("Loading catalog {}...", args.catalog.display());
    let start_load = Instant::now();

    #[cfg(feature = "mmap")]
    let records: Vec<Record> = match MappedCatalog::open(&args.catalog, &options) {
        Ok(catalog) => catalog.iter().collect(),
        Err(e) => {
            eprintln!("Error: {}", format_catalog_error(&args.catalog, e));
            std::process::exit(1);
        }
    };

    #[cfg(not(feature = "mmap"))]
    let records: Vec<Record> = match load_catalog(&args.catalog, &options) {
        Ok((_, records)) => records,
        Err(e) => {
            eprintln!("Error: {}", format_catalog_error(&args.catalog, e));
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} records in {:.3} seconds",
        records.len(),
        start_load.elapsed().as_secs_f64()
    );

    println!("Filter: {}", spec);
    let start = Instant::now();

    #[cfg(feature = "indexed-search")]
    let matches = {
        let index = CatalogIndex::build(&records);
        filter_with_index(&records, &index, &spec)
    };

    #[cfg(not(feature = "indexed-search"))]
    let matches = filter(&records, &spec);

    let elapsed = start.elapsed();

    if matches.is_empty() {
        println!("No matching records.");
    } else {
        println!("Found {} matching record(s):", matches.len());
        for record in &matches {
            println!("  {}", record);
        }
    }
    println!("Filter completed in {:.3} seconds.", elapsed.as_secs_f64());

    if let Some(bundle_size) = args.bundles {
        match count_bundles(&records, &spec, bundle_size) {
            Ok(count) => println!(
                "Distinct {}-item bundles from the matches: {}",
                bundle_size, count
            ),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if let Some(save_path) = &args.save {
        let owned: Vec<Record> = matches.iter().map(|r| (*r).clone()).collect();
        match save_listing(save_path, &owned) {
            Ok(_) => println!("Matches written to {}.", save_path.display()),
            Err(e) => {
                eprintln!("Error writing listing: {}", e);
                std::process::exit(1);
            }
        }
    }
}
