//! End-to-end catalog pipeline
//!
//! Exercises the full build-and-query flow: listing → sort → dedup →
//! binary catalog → validated load → filter → bundle count.

use specsift_catalog::app::bundles::count_bundles;
use specsift_catalog::app::selector::filter_with_validation;
use specsift_catalog::constants::{FLAG_DEDUPED, FLAG_SORTED};
use specsift_catalog::domain::catalog_format::ValidationOptions;
use specsift_catalog::domain::record::{Color, Record, Size};
use specsift_catalog::domain::spec::Spec;
use specsift_catalog::infra::catalog_io::{load_catalog, save_catalog};
use specsift_catalog::infra::catalog_sort::{deduplicate_catalog, sort_catalog_parallel};
use specsift_catalog::infra::listing_io::{load_listing, save_listing};
use tempfile::tempdir;

#[cfg(feature = "mmap")]
use specsift_catalog::infra::catalog_io::MappedCatalog;

const LISTING: &str = "\
# garden stock
tree,green,large
apple,green,small
house,blue,large
apple,red,small
grass,green,small
cherry,red,small
";

#[test]
fn test_full_pipeline() {
    let dir = tempdir().unwrap();
    let listing_path = dir.path().join("stock.txt");
    let catalog_path = dir.path().join("stock.sorted.cat");

    std::fs::write(&listing_path, LISTING).unwrap();

    // Build: listing → sorted deduped catalog.
    let mut records = load_listing(&listing_path).unwrap();
    assert_eq!(records.len(), 6);

    sort_catalog_parallel(&mut records);
    deduplicate_catalog(&mut records);
    assert_eq!(records.len(), 5, "Duplicate apple must collapse");
    // Sorted order puts the red apple (tag 0) first, so keep-first dedup
    // retains the red one.
    assert_eq!(records[0], Record::new("apple", Color::Red, Size::Small));

    save_catalog(&catalog_path, &records, FLAG_SORTED | FLAG_DEDUPED).unwrap();

    // Query: validated load → filter.
    let (header, loaded) = load_catalog(&catalog_path, &ValidationOptions::for_filter()).unwrap();
    assert!(header.is_sorted());
    assert!(header.is_deduped());
    assert_eq!(loaded, records);

    let spec = Spec::ColorIs(Color::Red).and(Spec::SizeIs(Size::Small));
    let matches = filter_with_validation(&header, &loaded, &spec).unwrap();
    let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["apple", "cherry"]);

    // Bundles: C(3, 2) pairs of small records (apple, cherry, grass).
    let pairs = count_bundles(&loaded, &Spec::SizeIs(Size::Small), 2).unwrap();
    assert_eq!(pairs, 3);
}

#[test]
fn test_dedup_keeps_first_sorted_entry() {
    let mut records = vec![
        Record::new("apple", Color::Red, Size::Small),
        Record::new("apple", Color::Green, Size::Small),
    ];

    sort_catalog_parallel(&mut records);
    deduplicate_catalog(&mut records);

    // Sorted order puts the red apple (tag 0) first; keep-first retains it.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].color, Color::Red);
}

#[test]
fn test_filter_export_roundtrip() {
    let dir = tempdir().unwrap();
    let listing_path = dir.path().join("stock.txt");
    let export_path = dir.path().join("matches.txt");

    std::fs::write(&listing_path, LISTING).unwrap();
    let records = load_listing(&listing_path).unwrap();

    let spec = Spec::SizeIs(Size::Small);
    let matches: Vec<Record> = records
        .iter()
        .filter(|r| spec.is_satisfied(r))
        .cloned()
        .collect();

    save_listing(&export_path, &matches).unwrap();
    let reloaded = load_listing(&export_path).unwrap();
    assert_eq!(reloaded, matches);
}

#[cfg(feature = "mmap")]
#[test]
fn test_mapped_catalog_pipeline() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("stock.sorted.cat");

    let mut records = vec![
        Record::new("tree", Color::Green, Size::Large),
        Record::new("apple", Color::Green, Size::Small),
        Record::new("house", Color::Blue, Size::Large),
    ];
    sort_catalog_parallel(&mut records);
    save_catalog(&catalog_path, &records, FLAG_SORTED).unwrap();

    let options = ValidationOptions {
        max_records: None,
        require_sorted: true,
    };
    let catalog = MappedCatalog::open(&catalog_path, &options).unwrap();

    let loaded: Vec<Record> = catalog.iter().collect();
    assert_eq!(loaded, records);

    let spec = Spec::SizeIs(Size::Large);
    let matches: Vec<Record> = catalog.iter().filter(|r| spec.is_satisfied(r)).collect();
    let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["house", "tree"]);
}
