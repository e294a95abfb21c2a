use super::*;

#[test]
fn sieve_names_serialize_with_scheme_labels() {
    let s = serde_json::to_string(&SieveName::Length).unwrap();
    assert_eq!(s, "\"根少优先\"");
    let back: SieveName = serde_json::from_str("\"少弱字根\"").unwrap();
    assert_eq!(back, SieveName::Weak);
    for sieve in SieveName::ALL {
        assert_eq!(sieve.label().parse::<SieveName>().unwrap(), sieve);
    }
}

#[test]
fn unknown_labels_are_rejected() {
    assert!("最长优先".parse::<SieveName>().is_err());
    assert!("glyph".parse::<DataCategory>().is_err());
    assert!("sound".parse::<ElementIndex>().is_err());
}

#[test]
fn operator_arity_matches_description_characters() {
    assert_eq!(Operator::LeftMiddleRight.arity(), 3);
    assert_eq!(Operator::AboveMiddleBelow.arity(), 3);
    assert_eq!(Operator::LeftRight.arity(), 2);
    let op: Operator = serde_json::from_str("\"⿻\"").unwrap();
    assert_eq!(op, Operator::Overlaid);
    assert_eq!(op.symbol(), '⿻');
}

#[test]
fn feature_is_a_transparent_string() {
    let f = Feature::new("横折钩");
    assert_eq!(serde_json::to_string(&f).unwrap(), "\"横折钩\"");
    let mut m = std::collections::BTreeMap::new();
    m.insert(f.clone(), 5u32);
    assert_eq!(m.get("横折钩"), Some(&5));
}

#[test]
fn indices_parse_their_display_form() {
    for idx in [ElementIndex::Form, ElementIndex::Pronunciation] {
        assert_eq!(idx.to_string().parse::<ElementIndex>().unwrap(), idx);
    }
    for cat in [
        DataCategory::Form,
        DataCategory::Repertoire,
        DataCategory::Classifier,
    ] {
        assert_eq!(cat.to_string().parse::<DataCategory>().unwrap(), cat);
    }
}
