use super::*;
use crate::{
    action::taxonomy::{Action, DataAction, ElementAction, MapEdit, SelectorEdit},
    document::glyph::{Component, ComponentShape, Stroke},
    engine::transition::apply,
    foundation::core::{ElementIndex, Feature, SieveName},
};

fn selector(sieve: SieveName) -> Action {
    Action::Element {
        index: ElementIndex::Form,
        action: ElementAction::Selector(SelectorEdit::Add(sieve)),
    }
}

#[test]
fn fingerprint_is_deterministic() {
    let a = Document::from_source("demo");
    let b = Document::from_source("demo");
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), Document::default().fingerprint());
}

#[test]
fn fingerprint_tracks_content_not_sharing() {
    let base = Document::default();
    let edited = apply(&base, selector(SieveName::Length));
    assert_ne!(base.fingerprint(), edited.fingerprint());

    // Same content reached along a different path.
    let other = apply(&apply(&base, selector(SieveName::Bias)), selector(SieveName::Length));
    let other = apply(
        &other,
        Action::Element {
            index: ElementIndex::Form,
            action: ElementAction::Selector(SelectorEdit::Remove(SieveName::Bias)),
        },
    );
    assert_eq!(edited.fingerprint(), other.fingerprint());
}

#[test]
fn absent_and_empty_stages_differ() {
    let base = Document::default();
    let toggled = apply(
        &base,
        Action::Element {
            index: ElementIndex::Form,
            action: ElementAction::DegeneratorToggleNoCross,
        },
    );
    let back = apply(
        &toggled,
        Action::Element {
            index: ElementIndex::Form,
            action: ElementAction::DegeneratorToggleNoCross,
        },
    );
    assert_ne!(base.fingerprint(), back.fingerprint());
    assert_ne!(toggled.fingerprint(), back.fingerprint());
}

#[test]
fn adjacent_strings_are_separated() {
    let a = apply(
        &Document::default(),
        Action::Element {
            index: ElementIndex::Form,
            action: ElementAction::Mapping(MapEdit::Add {
                key: "ab".to_string(),
                value: "c".to_string(),
            }),
        },
    );
    let b = apply(
        &Document::default(),
        Action::Element {
            index: ElementIndex::Form,
            action: ElementAction::Mapping(MapEdit::Add {
                key: "a".to_string(),
                value: "bc".to_string(),
            }),
        },
    );
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn display_is_32_hex_digits() {
    let s = Fingerprint { hi: 1, lo: 0xff }.to_string();
    assert_eq!(s.len(), 32);
    assert_eq!(s, "000000000000000100000000000000ff");
}

fn with_stroke_at(start: [f64; 2]) -> Document {
    let component = Component {
        shape: vec![ComponentShape {
            glyph: vec![Stroke {
                feature: Feature::new("点"),
                start,
                curve_list: Vec::new(),
            }],
            reference: String::new(),
        }],
    };
    apply(
        &Document::default(),
        Action::Data(DataAction::Form(MapEdit::Add {
            key: "丶".to_string(),
            value: Glyph::component(0x4e36, component),
        })),
    )
}

#[test]
fn signed_zero_coordinates_hash_alike() {
    let positive = with_stroke_at([0.0, 0.0]);
    let negative = with_stroke_at([-0.0, 0.0]);
    assert_eq!(positive, negative);
    assert_eq!(positive.fingerprint(), negative.fingerprint());
    assert_ne!(
        positive.fingerprint(),
        with_stroke_at([0.5, 0.0]).fingerprint()
    );
}
