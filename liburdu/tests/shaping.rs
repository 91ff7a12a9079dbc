/// Shaping behaviour of the Urdu engine:
/// - next-letter variants for every letter and context class
/// - forward-joining derived from the forms table
/// - tatweel previews and space key labels
/// - hamza fusion while typing
use liburdu::{create_engine, demo_lexicon, letter_forms, script_table, Engine, GlyphVariant};
use matnsaz_core::{ShapingEngine, TATWEEL, ZWNJ};

fn engine() -> Engine {
    create_engine(demo_lexicon().unwrap()).unwrap()
}

/// Type `letters` one by one, applying every edit the engine returns.
fn type_word(engine: &Engine, buffer: &mut String, letters: &str) -> GlyphVariant {
    let mut variant = engine.next_variant(buffer);
    for c in letters.chars() {
        let out = engine.type_letter(buffer, c);
        out.edit.apply(buffer);
        variant = out.next_variant;
    }
    variant
}

#[test]
fn next_variant_is_deterministic_for_all_letters() {
    let table = script_table();
    let shaper = ShapingEngine::new(table.clone(), None);
    for letter in table.letters() {
        let joins = table.is_forward_joining(letter).unwrap();
        let after_letter = format!("ک{letter}");
        for context in ["", "ک ", "ا", after_letter.as_str()] {
            let first = shaper.next_variant(context);
            assert_eq!(first, shaper.next_variant(context), "context {context:?}");
        }
        let expected = if joins {
            GlyphVariant::Medial
        } else {
            GlyphVariant::Initial
        };
        assert_eq!(shaper.next_variant(&after_letter), expected, "after {letter}");
    }
}

#[test]
fn boundaries_reset_to_initial() {
    let e = engine();
    assert_eq!(e.next_variant(""), GlyphVariant::Initial);
    assert_eq!(e.next_variant("کب "), GlyphVariant::Initial);
    assert_eq!(e.next_variant(&format!("کب{ZWNJ}")), GlyphVariant::Initial);
    assert_eq!(e.next_variant("کب۔"), GlyphVariant::Initial);
    assert_eq!(e.next_variant("کب،"), GlyphVariant::Initial);
    assert_eq!(e.next_variant("کب"), GlyphVariant::Medial);
    // diacritics do not hide the base letter
    assert_eq!(e.next_variant("کبِ"), GlyphVariant::Medial);
    assert_eq!(e.next_variant("دَ"), GlyphVariant::Initial);
}

#[test]
fn forward_joining_matches_forms_table() {
    let table = script_table();
    for letter in table.letters() {
        let forms = letter_forms(letter).unwrap();
        assert_eq!(
            table.is_forward_joining(letter).unwrap(),
            forms[1] != forms[0],
            "letter {letter}"
        );
    }
    // two-form letters: medial and final coincide
    assert_eq!(
        table.shape('د', GlyphVariant::Medial).unwrap(),
        table.shape('د', GlyphVariant::Final).unwrap()
    );
    // four-form letters: they differ
    assert_ne!(
        table.shape('س', GlyphVariant::Medial).unwrap(),
        table.shape('س', GlyphVariant::Final).unwrap()
    );
}

#[test]
fn tatweel_previews() {
    let shaper = engine().shaper().clone();
    for letter in script_table().letters() {
        let s = letter.to_string();
        let isolated = shaper.add_tatweel(&s, GlyphVariant::Isolated).unwrap();
        assert!(!isolated.contains(TATWEEL));
        if script_table().is_forward_joining(letter).unwrap() {
            let initial = shaper.add_tatweel(&s, GlyphVariant::Initial).unwrap();
            assert!(initial.ends_with(TATWEEL));
        }
    }
    assert_eq!(shaper.add_tatweel("ر", GlyphVariant::Medial).unwrap(), "ـر");
    assert_eq!(shaper.add_tatweel("س", GlyphVariant::Final).unwrap(), "ـس");
}

#[test]
fn key_labels_preview_next_form() {
    let e = engine();
    assert_eq!(e.key_label('س', "").unwrap(), "سـ");
    assert_eq!(e.key_label('س', "ک").unwrap(), "ـسـ");
    assert_eq!(e.key_label('ا', "ک").unwrap(), "ـا");
    assert_eq!(e.key_label('ء', "ک").unwrap(), "ـئـ");
    assert_eq!(e.key_label('ء', "").unwrap(), "ءـ");
}

#[test]
fn space_label_previews_word_end() {
    let e = engine();
    assert_eq!(e.space_label("کتاب"), Some("ب".to_string()));
    assert_eq!(e.space_label("کب"), Some("ـب".to_string()));
    assert_eq!(e.space_label("س"), Some("س".to_string()));
    assert_eq!(e.space_label("کتا"), None);
    assert_eq!(e.space_label(""), None);
}

#[test]
fn hamza_fuses_with_waw() {
    let e = engine();
    let mut buffer = String::new();
    let variant = type_word(&e, &mut buffer, "سوءال");
    assert_eq!(buffer, "سؤال");
    assert_eq!(variant, GlyphVariant::Medial);
}

#[test]
fn hamza_fuses_with_bari_yeh() {
    let e = engine();
    let mut buffer = String::new();
    type_word(&e, &mut buffer, "گےء");
    assert_eq!(buffer, "گۓ");
}

#[test]
fn hamza_is_seated_when_word_continues() {
    let e = engine();
    let mut buffer = String::new();
    let variant = type_word(&e, &mut buffer, "گءے");
    assert_eq!(buffer, "گئے");
    assert_eq!(variant, GlyphVariant::Initial);

    // a space after hamza leaves it bare
    let mut buffer = String::new();
    type_word(&e, &mut buffer, "جزء ");
    assert_eq!(buffer, "جزء ");
}

#[test]
fn hamza_with_a_mark_is_seated_when_word_continues() {
    let e = engine();
    let mut buffer = String::new();
    let variant = type_word(&e, &mut buffer, "گء\u{064E}ے");
    assert_eq!(buffer, "گئ\u{064E}ے");
    assert_eq!(variant, GlyphVariant::Initial);

    let out = e.type_letter("گء\u{064E}", 'ے');
    assert_eq!(out.edit.delete, 2);
    assert_eq!(out.edit.insert, "ئ\u{064E}ے");
}

#[test]
fn full_reshaping() {
    let e = engine();
    assert_eq!(e.shape("گئے").unwrap(), "ﮔﺌﮯ");
    assert_eq!(e.shape("کتاب").unwrap(), "ﻛﺘﺎﺏ");
    assert_eq!(e.shape("دن ہے").unwrap(), "دن ﮨﮯ");
    assert_eq!(e.shape("123").unwrap(), "123");
    // dotless skeletons join through ZWJ
    assert_eq!(e.shape("ٮڡا").unwrap(), "ٮ\u{200D}\u{200D}ڡ\u{200D}ﺎ");
}
