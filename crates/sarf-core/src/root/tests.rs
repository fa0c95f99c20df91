use super::*;

#[test]
fn parse_accepts_three_arabic_letters() {
    let root = Root::parse("كتب").expect("valid root");

    assert_eq!(root.as_str(), "كتب");
    assert_eq!(root.consonants().as_array(), ['ك', 'ت', 'ب']);
}

#[test]
fn parse_rejects_wrong_length() {
    assert_eq!(Root::parse("كت"), Err(RootError::Length { found: 2 }));
    assert_eq!(Root::parse("كتبت"), Err(RootError::Length { found: 4 }));
    assert_eq!(Root::parse(""), Err(RootError::Length { found: 0 }));
}

#[test]
fn parse_rejects_letters_outside_arabic_block() {
    assert_eq!(
        Root::parse("كtب"),
        Err(RootError::Letter {
            letter: 't',
            position: 1
        })
    );

    // Diacritics sit above U+064A and are not root letters.
    assert_eq!(
        Root::parse("كَت"),
        Err(RootError::Letter {
            letter: '\u{064E}',
            position: 1
        })
    );
}

#[test]
fn parse_does_not_trim() {
    assert!(matches!(
        Root::parse(" كتب"),
        Err(RootError::Length { found: 4 })
    ));
}

#[test]
fn root_ordering_is_code_point_ordering() {
    let mut roots = ["كتب", "درس", "علم"]
        .into_iter()
        .map(|r| Root::parse(r).expect("valid root"))
        .collect::<Vec<_>>();
    roots.sort();

    let sorted = roots.iter().map(Root::as_str).collect::<Vec<_>>();
    assert_eq!(sorted, ["درس", "علم", "كتب"]);
}

#[test]
fn root_deserialize_revalidates() {
    let ok: Root = serde_json::from_str("\"علم\"").expect("valid root json");
    assert_eq!(ok.as_str(), "علم");

    let err = serde_json::from_str::<Root>("\"عل\"").expect_err("short root must fail");
    assert!(err.to_string().contains("exactly 3 letters"));
}

#[test]
fn consonants_only_check_length() {
    let consonants = Consonants::from_root("abc").expect("three code points");
    assert_eq!(
        (consonants.first(), consonants.second(), consonants.third()),
        ('a', 'b', 'c')
    );

    assert_eq!(
        Consonants::from_root("ab"),
        Err(RootError::Length { found: 2 })
    );
}

#[test]
fn derivative_list_dedups_by_word_value() {
    let mut list = DerivativeList::new();

    assert!(list.insert(Derivative::new("كَاتِب", "اسم فاعل")));
    // Same word under a different scheme tag is still a duplicate.
    assert!(!list.insert(Derivative::new("كَاتِب", "مصدر")));
    assert!(list.insert(Derivative::new("مَكْتُوب", "اسم مفعول")));

    assert_eq!(list.len(), 2);
    assert_eq!(
        list.get("كَاتِب").map(|d| d.scheme.as_str()),
        Some("اسم فاعل")
    );
}

#[test]
fn derivative_list_merge_counts_additions() {
    let mut list = DerivativeList::from_iter_dedup([
        Derivative::new("a", "x"),
        Derivative::new("a", "y"),
    ]);
    assert_eq!(list.len(), 1);

    let added = list.merge([
        Derivative::new("a", "z"),
        Derivative::new("b", "z"),
        Derivative::new("c", "z"),
    ]);

    assert_eq!(added, 2);
    let words = list.iter().map(|d| d.word.as_str()).collect::<Vec<_>>();
    assert_eq!(words, ["a", "b", "c"]);
}

#[test]
fn derivative_list_deserialize_drops_duplicates() {
    let json = r#"[{"word":"w","scheme":"s1"},{"word":"w","scheme":"s2"}]"#;
    let list: DerivativeList = serde_json::from_str(json).expect("list json");

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].scheme, "s1");
}
