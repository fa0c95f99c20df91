//! End-to-end scenarios driven through the public API only.

use sarf_core::{
    engine::{apply_scheme, validate},
    index::RootIndex,
    prelude::*,
    scheme::{DEFAULT_BUCKET_COUNT, bucket_index},
};

fn fa3il() -> Scheme {
    Scheme::new("اسم فاعل", "فَاعِل")
}

#[test]
fn traversal_ignores_insertion_order() {
    let mut index = RootIndex::new();
    for root in ["كتب", "درس", "علم"] {
        index.insert(root, []).expect("valid root");
    }

    let roots = index
        .all_roots()
        .map(|node| node.root().as_str())
        .collect::<Vec<_>>();
    assert_eq!(roots, ["درس", "علم", "كتب"]);

    let head = index.snapshot().expect("non-empty");
    assert_eq!(head.root.as_str(), "كتب", "shape keeps the first insert on top");
}

#[test]
fn active_participle_of_ktb() {
    let scheme = fa3il();

    assert_eq!(apply_scheme("كتب", &scheme.pattern).as_deref(), Ok("كَاتِب"));
}

#[test]
fn validate_hit_and_miss() {
    let schemes = [fa3il()];

    let hit = validate("كَاتِب", "كتب", &schemes);
    assert!(hit.is_valid());
    assert_eq!(hit.scheme(), Some(&fa3il()));

    assert!(!validate("طالب", "كتب", &schemes).is_valid());
}

#[test]
fn repeated_derivative_is_kept_once() {
    let mut index = RootIndex::new();
    index
        .insert("كتب", [Derivative::new("كَاتِب", "اسم فاعل")])
        .expect("valid root");
    index
        .insert("كتب", [Derivative::new("كَاتِب", "اسم فاعل")])
        .expect("valid root");

    let node = index.search("كتب").expect("inserted");
    assert_eq!(node.derivatives().len(), 1);
    assert_eq!(index.len(), 1);
}

#[test]
fn scheme_bucket_is_stable() {
    let first = bucket_index("اسم فاعل", DEFAULT_BUCKET_COUNT);

    for _ in 0..8 {
        assert_eq!(bucket_index("اسم فاعل", DEFAULT_BUCKET_COUNT), first);
    }
    assert_eq!(first, Some(25));
}

#[test]
fn lexicon_round_trip() {
    let mut lexicon = Lexicon::new();
    lexicon.add_scheme(fa3il()).expect("fresh scheme");
    lexicon
        .add_scheme(Scheme::new("اسم مفعول", "مَفْعُول"))
        .expect("fresh scheme");

    let word = lexicon.generate("درس", "اسم مفعول").expect("known scheme");
    assert_eq!(word, "مَدْرُوس");

    let analysis = lexicon.analyze(&word).expect("just generated");
    assert_eq!(analysis.root.as_str(), "درس");
    assert_eq!(analysis.scheme.name, "اسم مفعول");

    let learned = lexicon.validate("كَاتِب", "كتب").expect("valid root");
    assert_eq!(learned, Some(fa3il()));
    assert_eq!(lexicon.roots().len(), 2);

    let report = lexicon.report();
    assert_eq!(report.derivatives, 2);
    assert_eq!(report.indexed_words, 2);
}
