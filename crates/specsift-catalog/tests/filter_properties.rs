//! Filter contract properties
//!
//! Covers the algebraic guarantees of filtering: order preservation, the
//! intersection law for conjunctions, and agreement between the direct,
//! parallel, and indexed implementations.

use specsift_catalog::app::selector::filter_parallel;
use specsift_catalog::domain::filter::{filter, filter_indices};
use specsift_catalog::domain::record::{Color, Record, Size};
use specsift_catalog::domain::spec::Spec;

#[cfg(feature = "indexed-search")]
use specsift_catalog::domain::filter::{CatalogIndex, filter_with_index};

fn mixed_catalog() -> Vec<Record> {
    let colors = [Color::Red, Color::Green, Color::Blue];
    let sizes = [Size::Small, Size::Medium, Size::Large];

    (0..300)
        .map(|i| {
            Record::new(
                format!("item{:03}", i),
                colors[i % 3],
                sizes[(i / 3) % 3],
            )
        })
        .collect()
}

fn leaf_specs() -> Vec<Spec> {
    vec![
        Spec::ColorIs(Color::Red),
        Spec::ColorIs(Color::Green),
        Spec::ColorIs(Color::Blue),
        Spec::SizeIs(Size::Small),
        Spec::SizeIs(Size::Medium),
        Spec::SizeIs(Size::Large),
    ]
}

#[test]
fn test_empty_collection_for_any_spec() {
    let records: Vec<Record> = vec![];

    for a in leaf_specs() {
        for b in leaf_specs() {
            let spec = a.clone().and(b);
            assert!(filter(&records, &spec).is_empty());
        }
        assert!(filter(&records, &a).is_empty());
    }
}

#[test]
fn test_intersection_law() {
    // filter(items, A) ∩ filter(items, B) == filter(items, And(A, B))
    let records = mixed_catalog();

    for a in leaf_specs() {
        for b in leaf_specs() {
            let indices_a = filter_indices(&records, &a);
            let indices_b = filter_indices(&records, &b);
            let conjunction = filter_indices(&records, &a.clone().and(b.clone()));

            let intersection: Vec<usize> = indices_a
                .iter()
                .copied()
                .filter(|i| indices_b.contains(i))
                .collect();

            assert_eq!(
                intersection, conjunction,
                "Intersection law failed for {} / {}",
                a, b
            );
        }
    }
}

#[test]
fn test_order_preservation() {
    let records = mixed_catalog();

    for spec in leaf_specs() {
        let indices = filter_indices(&records, &spec);
        assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "Order not preserved for {}",
            spec
        );
    }
}

#[test]
fn test_matches_satisfy_spec_and_rest_do_not() {
    let records = mixed_catalog();
    let spec = Spec::ColorIs(Color::Green).and(Spec::SizeIs(Size::Large));

    let matched = filter_indices(&records, &spec);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(matched.contains(&i), spec.is_satisfied(record));
    }
}

#[test]
fn test_parallel_agrees_with_sequential() {
    let records = mixed_catalog();

    for a in leaf_specs() {
        for b in leaf_specs() {
            let spec = a.clone().and(b);
            assert_eq!(filter(&records, &spec), filter_parallel(&records, &spec));
        }
    }
}

#[cfg(feature = "indexed-search")]
#[test]
fn test_indexed_agrees_with_sequential() {
    let records = mixed_catalog();
    let index = CatalogIndex::build(&records);

    for a in leaf_specs() {
        for b in leaf_specs() {
            let spec = a.clone().and(b);
            assert_eq!(
                filter(&records, &spec),
                filter_with_index(&records, &index, &spec),
                "Indexed filter diverged for {}",
                spec
            );
        }
    }
}

#[test]
fn test_and_conjunction_is_commutative_on_results() {
    let records = mixed_catalog();
    let a = Spec::ColorIs(Color::Blue);
    let b = Spec::SizeIs(Size::Medium);

    let ab = filter_indices(&records, &a.clone().and(b.clone()));
    let ba = filter_indices(&records, &b.and(a));
    assert_eq!(ab, ba);
}
