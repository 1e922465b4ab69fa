//! Binomial coefficient CLI
//!
//! Usage: specsift_choose <n> <k>
//!
//! Prints C(n, k), the number of distinct k-item bundles that can be
//! assembled from n items.
//!
//! Example:
//!   specsift_choose 8 5
//!   C(8, 5) = 56

use specsift_catalog::binomial;
use std::env;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <n> <k>", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <n>    Number of items to choose from");
    eprintln!("  <k>    Bundle size (0 <= k <= n)");
}

fn parse_args() -> Result<(u64, u64), String> {
    let args: Vec<String> = env::args().collect();

    let mut values = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if values.len() == 2 {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                values.push(
                    arg.parse::<u64>()
                        .map_err(|_| format!("Invalid number: {}", arg))?,
                );
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    match values.as_slice() {
        [n, k] => Ok((*n, *k)),
        _ => Err("Expected exactly two arguments: <n> <k>".to_string()),
    }
}

fn main() {
    let (n, k) = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    match binomial(n, k) {
        Ok(count) => println!("C({}, {}) = {}", n, k, count),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
