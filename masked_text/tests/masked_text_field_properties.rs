// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end behavior of [`MaskedTextField`], driven the way a host widget drives it.

use r3bl_masked_text::{CharacterSet, DecoratedRange, EditOutcome, MaskedTextField,
                       MaskedTextFieldConfig, RawReplacement, SignificantRange,
                       StringDecoration, StringSanitization, StringValidation, Utf16Range,
                       assert_eq2, grapheme_count, handle_should_change,
                       partial_birth_certificate_number, render_into_host,
                       text_field_host_test_fixtures::TestTextFieldHost, utf16_offset};
use test_case::test_case;

fn decorations() -> Vec<StringDecoration> {
    vec![
        StringDecoration::Empty,
        StringDecoration::template("__:__"),
        StringDecoration::template("+_ (___) ___-__-__"),
        StringDecoration::template_with_suffix("______", " руб."),
        StringDecoration::time_of_day(),
        StringDecoration::grouped(4, " "),
        StringDecoration::custom(|logical: &str| {
            StringDecoration::template("[_] [_]").decorate(logical)
        }),
    ]
}

const LOGICAL_VALUES: [&str; 6] = ["", "2", "2357", "79005552211", "👍🏽ab", "абвгд"];

#[test]
fn decoration_round_trips_and_is_deterministic() {
    for decoration in decorations() {
        for logical in LOGICAL_VALUES {
            let first = decoration.decorate(logical);
            let second = decoration.decorate(logical);
            assert_eq2!(first.significant_value(), logical);
            assert_eq2!(&first, &second);
        }
    }
}

#[test]
fn range_translation_covers_the_same_significant_characters() {
    for decoration in decorations() {
        let decorated = decoration.decorate("79005552211");
        for start in 0..=decorated.len() {
            for end in start..=decorated.len() {
                let range = DecoratedRange::new(start, end - start);
                let significant = decorated.significant_range(range).unwrap();
                let back = decorated.decorated_range(significant).unwrap();
                assert_eq2!(decorated.significant_range(back).unwrap(), significant);
                assert_eq2!(
                    decorated.significant_substring(back).unwrap(),
                    decorated.significant_substring(range).unwrap()
                );
            }
        }
    }
}

#[test]
fn template_renders_time_of_day() {
    let mut field = MaskedTextField::new(
        MaskedTextFieldConfig::default().with_decoration(StringDecoration::template("__:__")),
    );
    field
        .propose_edit(RawReplacement::insertion(0, "2357"))
        .unwrap();
    assert_eq2!(field.decorated_value(), "23:57");
    assert_eq2!(field.logical_value(), "2357");
}

#[test]
fn caret_backspace_over_colon_deletes_the_digit() {
    let mut field = MaskedTextField::new(
        MaskedTextFieldConfig::default().with_decoration(StringDecoration::template("__:__")),
    );
    field.set_logical_value("2357");
    field.set_selection(Utf16Range::caret(3)).unwrap();

    let outcome = field
        .propose_edit(RawReplacement::deletion(Utf16Range::new(2, 1)))
        .unwrap();

    assert_eq2!(
        outcome,
        EditOutcome::Applied {
            decorated_value: "25:7".into(),
            caret: utf16_offset(1),
        }
    );
    assert_eq2!(field.logical_value(), "257");
}

#[test]
fn maximum_length_keeps_a_full_field_full() {
    let mut field = MaskedTextField::new(
        MaskedTextFieldConfig::default()
            .with_decoration(StringDecoration::template("__:__"))
            .with_validation(StringValidation::MaximumLength(4)),
    );
    field.set_logical_value("2357");
    let outcome = field
        .propose_edit(RawReplacement::insertion(5, "1"))
        .unwrap();
    assert_eq2!(outcome, EditOutcome::Rejected);
    assert_eq2!(field.decorated_value(), "23:57");
}

#[test]
fn pasted_phone_number_keeps_digits_only() {
    let mut field = MaskedTextField::new(
        MaskedTextFieldConfig::default()
            .with_decoration(StringDecoration::template("+_ ___ ___-__-__"))
            .with_sanitization(StringSanitization::Accept(CharacterSet::DecimalDigits)),
    );
    let caret = field.selection();
    field.paste_text(caret, "+7 (900) 555-22-11").unwrap();
    assert_eq2!(field.logical_value(), "79005552211");
    assert_eq2!(field.decorated_value(), "+7 900 555-22-11");
}

#[test]
fn global_suffix_is_always_rendered() {
    let mut field = MaskedTextField::new(MaskedTextFieldConfig::default().with_decoration(
        StringDecoration::template_with_suffix("______", " руб."),
    ));
    field.propose_edit(RawReplacement::insertion(0, "5")).unwrap();
    assert_eq2!(field.decorated_value(), "5 руб.");
}

#[test_case(StringDecoration::template("__:__")                 ; "time template")]
#[test_case(StringDecoration::template("+_ (___) ___-__-__")    ; "phone template")]
#[test_case(StringDecoration::template_with_suffix("____", " ₽") ; "global suffix")]
#[test_case(StringDecoration::grouped(2, "-")                    ; "grouped")]
#[test_case(StringDecoration::Empty                              ; "no decoration")]
fn inserting_one_character_advances_the_caret(decoration: StringDecoration) {
    let logical = "2357";
    let config = MaskedTextFieldConfig::default().with_decoration(decoration);

    for significant_position in 0..=grapheme_count(logical) {
        let mut field = MaskedTextField::new(config.clone());
        field.set_logical_value(logical);

        let decorated = field.decorated_string().clone();
        let old_index = decorated
            .decorated_range(SignificantRange::caret(significant_position))
            .unwrap()
            .location;
        let old_caret = decorated.utf16_offset_at(old_index).unwrap();
        field.set_selection(Utf16Range::caret(old_caret)).unwrap();

        let outcome = field
            .propose_edit(RawReplacement::insertion(old_caret, "9"))
            .unwrap();
        let new_caret = outcome.caret().unwrap();
        let new_index = field
            .decorated_string()
            .char_index_at(new_caret)
            .unwrap();

        assert!(new_index.as_usize() > old_index.as_usize());
        assert!(new_index.as_usize() <= field.decorated_string().len());
    }
}

#[test]
fn birth_certificate_accepts_only_its_shape() {
    let mut field = MaskedTextField::new(
        MaskedTextFieldConfig::default()
            .with_decoration(StringDecoration::template("__________-__ ______"))
            .with_validation(partial_birth_certificate_number().unwrap()),
    );
    assert!(field.propose_edit(RawReplacement::insertion(0, "IV")).unwrap().is_applied());
    assert!(field.propose_edit(RawReplacement::insertion(2, "7")).unwrap().is_applied());
    // Roman digits can't follow the number.
    assert!(field.propose_edit(RawReplacement::insertion(3, "I")).unwrap().is_rejected());
    assert_eq2!(field.logical_value(), "IV7");
}

#[test]
fn host_round_trip() {
    let mut field = MaskedTextField::new(
        MaskedTextFieldConfig::default()
            .with_decoration(StringDecoration::template("+_ ___ ___-__-__"))
            .with_validation(StringValidation::MaximumLength(11)),
    );
    let mut host = TestTextFieldHost::default();
    render_into_host(&field, &mut host);
    assert_eq2!(host.text, "+");

    for digit in ["7", "9", "0", "0"] {
        let caret = host.selection;
        let allow = handle_should_change(&mut field, &mut host, caret, digit).unwrap();
        assert!(!allow);
    }
    assert_eq2!(host.text, "+7 900 ");
    assert_eq2!(host.selection, Utf16Range::caret(7));

    // Backspace at the end deletes the space, which means the last zero.
    let allow =
        handle_should_change(&mut field, &mut host, Utf16Range::new(6, 1), "").unwrap();
    assert!(!allow);
    assert_eq2!(field.logical_value(), "790");
    assert_eq2!(host.text, "+7 90");
}
