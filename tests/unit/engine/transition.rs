use super::*;
use crate::{
    document::{
        encoder::EncoderConfig,
        glyph::{Component, Glyph},
        model::Info,
    },
    foundation::core::{Feature, SieveName},
};

fn form(action: ElementAction) -> Action {
    Action::Element {
        index: ElementIndex::Form,
        action,
    }
}

fn add_glyph(key: &str, unicode: u32) -> Action {
    Action::Data(DataAction::Form(MapEdit::Add {
        key: key.to_string(),
        value: Glyph::component(unicode, Component::default()),
    }))
}

#[test]
fn data_edit_shares_untouched_subtrees() {
    let before = Document::default();
    let after = apply(&before, add_glyph("木", 0x6728));

    assert!(before.data.form.is_empty());
    assert_eq!(after.data.form.len(), 1);
    assert!(!Arc::ptr_eq(&before.data, &after.data));
    assert!(Arc::ptr_eq(&before.data.repertoire, &after.data.repertoire));
    assert!(Arc::ptr_eq(&before.data.classifier, &after.data.classifier));
    assert!(Arc::ptr_eq(&before.info, &after.info));
    assert!(Arc::ptr_eq(&before.form, &after.form));
    assert!(Arc::ptr_eq(&before.pronunciation, &after.pronunciation));
    assert!(Arc::ptr_eq(&before.encoder, &after.encoder));
}

#[test]
fn element_edit_copies_only_its_path() {
    let base = apply(
        &Document::default(),
        form(ElementAction::Mapping(MapEdit::Add {
            key: "木".to_string(),
            value: "m".to_string(),
        })),
    );
    let after = apply(
        &base,
        form(ElementAction::Selector(SelectorEdit::Add(SieveName::Length))),
    );

    assert!(base.form.analysis.is_none());
    assert!(Arc::ptr_eq(&base.form.mapping, &after.form.mapping));
    assert!(Arc::ptr_eq(&base.form.grouping, &after.form.grouping));
    assert!(Arc::ptr_eq(&base.pronunciation, &after.pronunciation));
    assert!(Arc::ptr_eq(&base.data, &after.data));
    assert_eq!(
        after.form().analysis().unwrap().selector(),
        Some(&[SieveName::Length][..])
    );
}

#[test]
fn edits_on_analysis_do_not_leak_into_previous_document() {
    let one = apply(
        &Document::default(),
        form(ElementAction::Customize(MapEdit::Add {
            key: "丁".to_string(),
            value: vec!["一".to_string(), "亅".to_string()],
        })),
    );
    let two = apply(
        &one,
        form(ElementAction::StrongWeak {
            variant: Priority::Strong,
            edit: SetEdit::Add("一".to_string()),
        }),
    );
    assert!(one.form().analysis().unwrap().strong().is_none());
    assert_eq!(
        two.form().analysis().unwrap().strong(),
        Some(&["一".to_string()][..])
    );
    assert_eq!(
        two.form().analysis().unwrap().customize(),
        one.form().analysis().unwrap().customize()
    );
}

#[test]
fn noop_returns_the_input_unchanged() {
    let doc = Document::default();
    let t = transition(
        &doc,
        form(ElementAction::Degenerator(MapEdit::Remove {
            key: Feature::new("横"),
        })),
    );
    assert_eq!(t.outcome, Outcome::NoOp);
    assert!(t.document.form().analysis().is_none());
    assert!(Arc::ptr_eq(&doc.form, &t.document.form));

    let t = transition(
        &doc,
        form(ElementAction::StrongWeak {
            variant: Priority::Weak,
            edit: SetEdit::Remove("丶".to_string()),
        }),
    );
    assert_eq!(t.outcome, Outcome::NoOp);
    assert_eq!(t.document, doc);

    let t = transition(
        &doc,
        form(ElementAction::Selector(SelectorEdit::Remove(SieveName::Bias))),
    );
    assert_eq!(t.outcome, Outcome::NoOp);
    assert!(t.document.form().analysis().is_none());
}

#[test]
fn element_index_selects_the_target() {
    let doc = apply(
        &Document::default(),
        Action::Element {
            index: ElementIndex::Pronunciation,
            action: ElementAction::SetAlphabet("aeiou".to_string()),
        },
    );
    assert_eq!(doc.pronunciation().alphabet, "aeiou");
    assert_eq!(
        doc.form().alphabet,
        crate::document::model::DEFAULT_ALPHABET
    );
    let doc = apply(
        &doc,
        Action::Element {
            index: ElementIndex::Pronunciation,
            action: ElementAction::SetMaxCodeLength(4),
        },
    );
    assert_eq!(doc.pronunciation().max_code_length, 4);
    assert_eq!(doc.form().max_code_length, 1);
}

#[test]
fn info_and_encoder_replace_wholesale() {
    let doc = Document::from_source("yima");
    let info = Info {
        name: "易码".to_string(),
        author: Some("someone".to_string()),
        ..Info::default()
    };
    let doc = apply(&doc, Action::Info(info.clone()));
    assert_eq!(doc.info(), &info);

    let encoder = EncoderConfig::default().with_child("0", "字根 1").unwrap();
    let next = apply(&doc, Action::Encoder(encoder.clone()));
    assert_eq!(next.encoder(), &encoder);
    assert!(Arc::ptr_eq(&doc.info, &next.info));
    assert_eq!(next.source(), Some("yima"));
    assert_eq!(next.version(), doc.version());
}

#[test]
fn apply_all_folds_in_order() {
    let doc = apply_all(
        &Document::default(),
        [
            form(ElementAction::Selector(SelectorEdit::Add(SieveName::Length))),
            form(ElementAction::Selector(SelectorEdit::Add(SieveName::Bias))),
            form(ElementAction::Selector(SelectorEdit::Remove(SieveName::Length))),
            form(ElementAction::Grouping(MapEdit::Add {
                key: "⺡".to_string(),
                value: "水".to_string(),
            })),
        ],
    );
    let analysis = doc.form().analysis().unwrap();
    assert_eq!(analysis.selector(), Some(&[SieveName::Bias][..]));
    assert_eq!(doc.form().group("⺡"), Some("水"));
}
