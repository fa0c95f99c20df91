use super::*;
use proptest::prelude::*;

fn fa3il() -> Scheme {
    Scheme::new("اسم فاعل", "فَاعِل")
}

#[test]
fn active_participle_of_ktb() {
    assert_eq!(apply_scheme("كتب", "فَاعِل").as_deref(), Ok("كَاتِب"));
}

#[test]
fn literals_and_marks_pass_through() {
    assert_eq!(apply_scheme("درس", "مَفْعُول").as_deref(), Ok("مَدْرُوس"));
    assert_eq!(
        apply_scheme("عمل", "اِسْتِفْعَال").as_deref(),
        Ok("اِسْتِعْمَال")
    );
    assert_eq!(apply_scheme("كتب", "").as_deref(), Ok(""));
    assert_eq!(apply_scheme("كتب", "xyz").as_deref(), Ok("xyz"));
}

#[test]
fn markers_repeat_and_reorder() {
    assert_eq!(apply_scheme("abc", "لعفف").as_deref(), Ok("cbaa"));
}

#[test]
fn apply_scheme_rejects_wrong_length() {
    assert_eq!(
        apply_scheme("كت", "فَاعِل"),
        Err(RootError::Length { found: 2 })
    );
    assert_eq!(
        apply_scheme("كتبت", "فَاعِل"),
        Err(RootError::Length { found: 4 })
    );
}

#[test]
fn validate_matches_rendered_word() {
    let schemes = [fa3il()];

    let hit = validate("كَاتِب", "كتب", &schemes);
    assert!(hit.is_valid());
    assert_eq!(hit.scheme(), Some(&fa3il()));

    let miss = validate("طالب", "كتب", &schemes);
    assert!(!miss.is_valid());
    assert_eq!(miss.scheme(), None);
}

#[test]
fn validate_requires_exact_diacritics() {
    let schemes = [fa3il()];

    assert!(!validate("كاتب", "كتب", &schemes).is_valid());
    assert!(!validate("كَاتِبٌ", "كتب", &schemes).is_valid());
}

#[test]
fn validate_rejects_wrong_length_root() {
    let schemes = [Scheme::new("literal", "abc")];

    assert!(!validate("abc", "كت", &schemes).is_valid());
    assert!(validate("abc", "كتب", &schemes).is_valid());
}

#[test]
fn validate_first_scheme_wins_ties() {
    let schemes = [
        Scheme::new("first", "فَعَل"),
        Scheme::new("second", "فَعَل"),
    ];

    let hit = validate("كَتَب", "كتب", &schemes);
    assert_eq!(hit.scheme().map(|s| s.name.as_str()), Some("first"));

    let reversed = [schemes[1].clone(), schemes[0].clone()];
    let hit = validate("كَتَب", "كتب", &reversed);
    assert_eq!(hit.scheme().map(|s| s.name.as_str()), Some("second"));
}

#[test]
fn find_root_scans_roots_in_given_order() {
    let schemes = [fa3il(), Scheme::new("اسم مفعول", "مَفْعُول")];

    let found = find_root_from_word("مَدْرُوس", &schemes, ["كتب", "درس"])
        .expect("word derives from درس");
    assert_eq!(found.root, "درس");
    assert_eq!(found.scheme.name, "اسم مفعول");

    assert!(find_root_from_word("مَدْرُوس", &schemes, ["كتب"]).is_none());
    assert!(find_root_from_word("كَاتِب", &schemes, std::iter::empty()).is_none());
}

#[test]
fn find_root_tie_goes_to_first_root() {
    // A marker-free pattern renders the same word for every root.
    let schemes = [Scheme::new("fixed", "xyz")];

    let found = find_root_from_word("xyz", &schemes, ["علم", "درس"]).expect("fixed pattern");
    assert_eq!(found.root, "علم");
}

#[test]
fn find_root_skips_malformed_roots() {
    let schemes = [fa3il()];

    let found = find_root_from_word("كَاتِب", &schemes, ["كت", "كتب"]).expect("second root");
    assert_eq!(found.root, "كتب");
}

///
/// PROPERTIES
///

fn arb_root() -> impl Strategy<Value = String> {
    prop::collection::vec(proptest::char::range('\u{0621}', '\u{064A}'), 3)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(FA),
            Just(AIN),
            Just(LAM),
            proptest::char::range('\u{064B}', '\u{0652}'),
            proptest::char::range('\u{0621}', '\u{064A}'),
            any::<char>(),
        ],
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn rendering_preserves_length(root in arb_root(), pattern in arb_pattern()) {
        let word = apply_scheme(&root, &pattern).expect("generated roots have 3 letters");
        prop_assert_eq!(word.chars().count(), pattern.chars().count());
    }

    #[test]
    fn changing_a_literal_changes_only_that_position(
        root in arb_root(),
        pattern in arb_pattern(),
        index in any::<prop::sample::Index>(),
        replacement in proptest::char::range('\u{064B}', '\u{0652}'),
    ) {
        let chars = pattern.chars().collect::<Vec<_>>();
        let literals = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| ![FA, AIN, LAM].contains(*c))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        prop_assume!(!literals.is_empty());

        let position = literals[index.index(literals.len())];
        prop_assume!(chars[position] != replacement);

        let mut edited = chars.clone();
        edited[position] = replacement;
        let edited = edited.into_iter().collect::<String>();

        let before = apply_scheme(&root, &pattern).expect("valid root").chars().collect::<Vec<_>>();
        let after = apply_scheme(&root, &edited).expect("valid root").chars().collect::<Vec<_>>();

        for (i, (b, a)) in before.iter().zip(&after).enumerate() {
            if i == position {
                prop_assert_eq!(*a, replacement);
                prop_assert_ne!(a, b);
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn rendered_word_validates_against_its_scheme(
        root in arb_root(),
        pattern in arb_pattern(),
        others in prop::collection::vec(arb_pattern(), 0..4),
    ) {
        let scheme = Scheme::new("target", pattern.clone());
        let mut schemes = vec![scheme.clone()];
        schemes.extend(
            others
                .into_iter()
                .enumerate()
                .map(|(i, p)| Scheme::new(format!("other-{i}"), p)),
        );

        let word = apply_scheme(&root, &scheme.pattern).expect("valid root");
        let outcome = validate(&word, &root, &schemes);

        prop_assert!(outcome.is_valid());
        prop_assert_eq!(outcome.scheme().map(|s| s.name.as_str()), Some("target"));
    }
}
