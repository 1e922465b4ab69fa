//! Selectivity measurement script
//!
//! Generates a random catalog and reports how selective each leaf spec
//! and a few conjunctions are, with filter timings for the direct and
//! parallel paths.
//!
//! ## Run
//!
//! ```text
//! cargo run --example selectivity -p specsift-catalog --release
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use specsift_catalog::app::selector::filter_parallel;
use specsift_catalog::domain::filter::filter;
use specsift_catalog::domain::record::{Color, Record, Size};
use specsift_catalog::domain::spec::Spec;

const CATALOG_SIZE: usize = 1_000_000;

fn main() {
    println!("[Selectivity Measurement]");
    println!("Catalog size: {}", CATALOG_SIZE);
    println!();

    let start = Instant::now();
    let records = random_catalog(CATALOG_SIZE);
    println!(
        "Generated catalog in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!();

    let specs = [
        Spec::ColorIs(Color::Red),
        Spec::ColorIs(Color::Green),
        Spec::ColorIs(Color::Blue),
        Spec::SizeIs(Size::Small),
        Spec::SizeIs(Size::Medium),
        Spec::SizeIs(Size::Large),
        Spec::ColorIs(Color::Green).and(Spec::SizeIs(Size::Large)),
        Spec::ColorIs(Color::Red)
            .and(Spec::SizeIs(Size::Small))
            .and(Spec::ColorIs(Color::Red)),
    ];

    for spec in &specs {
        let start = Instant::now();
        let direct = filter(&records, spec);
        let direct_time = start.elapsed();

        let start = Instant::now();
        let parallel = filter_parallel(&records, spec);
        let parallel_time = start.elapsed();

        assert_eq!(direct.len(), parallel.len());

        let selectivity = direct.len() as f64 / records.len() as f64 * 100.0;
        println!(
            "{:<40} {:>8} matches ({:>5.1}%)  direct {:>7.1}ms  parallel {:>7.1}ms",
            spec.to_string(),
            direct.len(),
            selectivity,
            direct_time.as_secs_f64() * 1000.0,
            parallel_time.as_secs_f64() * 1000.0,
        );
    }
}

/// Generate a uniformly tagged random catalog
fn random_catalog(len: usize) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(0xCA7A_1065);

    (0..len)
        .map(|i| {
            let color = Color::from_tag(rng.gen_range(0..3)).unwrap();
            let size = Size::from_tag(rng.gen_range(0..3)).unwrap();
            Record::new(format!("item{:07}", i), color, size)
        })
        .collect()
}
