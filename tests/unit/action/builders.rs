use super::*;
use crate::{action::taxonomy::SelectorEdit, foundation::core::SieveName};

#[test]
fn route_selects_category() {
    let ctx = DataContext::from_route("/mswb/data/repertoire").unwrap();
    assert_eq!(ctx.category(), DataCategory::Repertoire);
    assert_eq!(
        DataContext::from_route("/mswb/data/classifier/extra")
            .unwrap()
            .category(),
        DataCategory::Classifier
    );
    assert!(DataContext::from_route("/mswb/data").is_err());
    assert!(DataContext::from_route("/mswb/data/element").is_err());
}

#[test]
fn make_add_resolves_subtype() {
    let ctx = DataContext::new(DataCategory::Classifier);
    let action = ctx.make_add("横", DataValue::Classifier(1)).unwrap();
    assert_eq!(
        action,
        Action::Data(DataAction::Classifier(MapEdit::Add {
            key: Feature::new("横"),
            value: 1,
        }))
    );
    assert_eq!(
        ctx.make_remove("横"),
        Action::Data(DataAction::Classifier(MapEdit::Remove {
            key: Feature::new("横"),
        }))
    );
}

#[test]
fn make_add_rejects_mismatched_value() {
    let ctx = DataContext::new(DataCategory::Form);
    let err = ctx
        .make_add("木", DataValue::Repertoire(Character::default()))
        .unwrap_err();
    assert!(
        err.to_string()
            .contains("cannot add a repertoire value while editing form")
    );
}

#[test]
fn design_context_defaults_to_form() {
    let action = DesignContext::default().make(ElementAction::Selector(SelectorEdit::Add(
        SieveName::Length,
    )));
    let Action::Element { index, .. } = action else {
        panic!("expected element action");
    };
    assert_eq!(index, ElementIndex::Form);
    let Action::Element { index, .. } =
        DesignContext::new(ElementIndex::Pronunciation).make(ElementAction::SetMaxCodeLength(3))
    else {
        panic!("expected element action");
    };
    assert_eq!(index, ElementIndex::Pronunciation);
}
