//! Catalog build CLI
//!
//! Usage: specsift_build <listing> [options]
//!
//! Options:
//!   --output <PATH>  Write the catalog to this path
//!   --no-sort        Skip sorting (also skips deduplication)
//!   --keep-dupes     Keep records sharing a name (default: dedup)
//!   --help, -h       Show help
//!
//! Example: specsift_build stock.txt

use specsift_catalog::constants::{FLAG_DEDUPED, FLAG_SORTED};
use specsift_catalog::infra::catalog_io::{
    get_catalog_path, get_sorted_catalog_path, save_catalog,
};
use specsift_catalog::infra::catalog_sort::{deduplicate_catalog, sort_catalog_parallel};
use specsift_catalog::infra::listing_io::load_listing;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

struct Args {
    listing: PathBuf,
    output: Option<PathBuf>,
    no_sort: bool,
    keep_dupes: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <listing> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <listing>        Text listing file, one 'name,color,size' per line");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --output <PATH>  Write the catalog to this path");
    eprintln!("  --no-sort        Skip sorting (also skips deduplication)");
    eprintln!("  --keep-dupes     Keep records sharing a name (default: dedup)");
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut listing: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut no_sort = false;
    let mut keep_dupes = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-sort" => no_sort = true,
            "--keep-dupes" => keep_dupes = true,
            "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("--output requires a value".to_string());
                }
                output = Some(PathBuf::from(&args[i]));
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if listing.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                listing = Some(PathBuf::from(arg));
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let listing = listing.ok_or("Missing listing argument")?;

    Ok(Args {
        listing,
        output,
        no_sort,
        keep_dupes,
    })
}

fn default_output(args: &Args) -> PathBuf {
    let stem = args
        .listing
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());

    let name = if args.no_sort {
        get_catalog_path(&stem)
    } else {
        get_sorted_catalog_path(&stem)
    };

    match args.listing.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
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

    println!("Reading listing {}...", args.listing.display());
    let start = Instant::now();

    let mut records = match load_listing(&args.listing) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Read {} records in {:.2} seconds",
        records.len(),
        start.elapsed().as_secs_f64()
    );

    let mut flags = 0;

    if args.no_sort {
        if !args.keep_dupes {
            println!("Note: deduplication requires sorting; skipped due to --no-sort.");
        }
    } else {
        println!("Sorting...");
        let sort_start = Instant::now();
        sort_catalog_parallel(&mut records);
        flags |= FLAG_SORTED;
        println!("Sorted in {:.2} seconds.", sort_start.elapsed().as_secs_f64());

        if !args.keep_dupes {
            let before = records.len();
            deduplicate_catalog(&mut records);
            flags |= FLAG_DEDUPED;
            if before != records.len() {
                println!("Removed {} duplicate name(s).", before - records.len());
            }
        }
    }

    let output = args.output.clone().unwrap_or_else(|| default_output(&args));
    println!("Saving catalog to {}...", output.display());

    match save_catalog(&output, &records, flags) {
        Ok(_) => println!("Catalog saved successfully."),
        Err(e) => {
            eprintln!("Error saving catalog: {}", e);
            std::process::exit(1);
        }
    }

    let file_size = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    println!("File size: {:.2} KB", file_size as f64 / 1024.0);

    println!();
    println!(
        "Done! {} records written in {:.2} seconds total.",
        records.len(),
        start.elapsed().as_secs_f64()
    );

    if args.no_sort {
        println!("Note: Catalog was not sorted. Run without --no-sort to include sorting.");
    } else {
        println!("The catalog is ready for querying with specsift_filter.");
    }
}
