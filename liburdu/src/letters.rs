// liburdu/src/letters.rs
//
// Urdu letter inventory: the presentation forms of every letter the
// keyboard can type, plus the hamza seats.
//
// Forms are listed as [isolated, initial, medial, final]. Letters that never
// join the following letter repeat the isolated form as their initial form
// and the final form as their medial form. Noon ghunna has no initial or
// medial presentation glyph, so those forms are built from noon plus the
// noon ghunna mark. The dotless skeleton letters of the rasm layout have no
// presentation glyphs at all; their joined forms are the letter with ZWJ on
// the joining sides.

use std::sync::Arc;

use matnsaz_core::{HamzaRules, Normalizer, ScriptTable};
use once_cell::sync::Lazy;
use phf::phf_map;

/// The bare hamza letter.
pub const HAMZA: char = 'ء';
/// Hamza on a yeh seat, used once a word continues past the hamza.
pub const HAMZA_SEATED: char = 'ئ';
/// Hamza on waw.
pub const WAW_HAMZA: char = 'ؤ';
/// Hamza on bari yeh.
pub const YEH_BARREE_HAMZA: char = 'ۓ';

static LETTER_FORMS: phf::Map<char, [&'static str; 4]> = phf_map! {
    'ا' => ["ا", "ا", "ﺎ", "ﺎ"],
    'ب' => ["ﺏ", "ﺑ", "ﺒ", "ﺐ"],
    'پ' => ["پ", "ﭘ", "ﭙ", "ﭗ"],
    'ت' => ["ت", "ﺗ", "ﺘ", "ﺖ"],
    'ٹ' => ["ٹ", "ﭨ", "ﭩ", "ﭧ"],
    'ث' => ["ث", "ﺛ", "ﺜ", "ﺚ"],
    'ج' => ["ج", "ﺟ", "ﺠ", "ﺞ"],
    'چ' => ["چ", "ﭼ", "ﭽ", "ﭻ"],
    'ح' => ["ح", "ﺣ", "ﺤ", "ﺢ"],
    'خ' => ["خ", "ﺧ", "ﺨ", "ﺦ"],
    'د' => ["د", "د", "ﺪ", "ﺪ"],
    'ڈ' => ["ڈ", "ڈ", "ﮉ", "ﮉ"],
    'ذ' => ["ذ", "ذ", "ﺬ", "ﺬ"],
    'ر' => ["ر", "ر", "ﺮ", "ﺮ"],
    'ڑ' => ["ڑ", "ڑ", "ﮍ", "ﮍ"],
    'ز' => ["ز", "ز", "ﺰ", "ﺰ"],
    'ژ' => ["ژ", "ژ", "ﮋ", "ﮋ"],
    'س' => ["س", "ﺳ", "ﺴ", "ﺲ"],
    'ش' => ["ش", "ﺷ", "ﺸ", "ﺶ"],
    'ص' => ["ص", "ﺻ", "ﺼ", "ﺺ"],
    'ض' => ["ض", "ﺿ", "ﻀ", "ﺾ"],
    'ط' => ["ط", "ﻃ", "ﻄ", "ﻂ"],
    'ظ' => ["ظ", "ﻇ", "ﻈ", "ﻆ"],
    'ع' => ["ع", "ﻋ", "ﻌ", "ﻊ"],
    'غ' => ["غ", "ﻏ", "ﻐ", "ﻎ"],
    'ف' => ["ف", "ﻓ", "ﻔ", "ﻒ"],
    'ق' => ["ق", "ﻗ", "ﻘ", "ﻖ"],
    'ک' => ["ک", "ﻛ", "ﮑ", "ﮏ"],
    'گ' => ["گ", "ﮔ", "ﮕ", "ﮓ"],
    'ل' => ["ل", "ﻟ", "ﻠ", "ﻞ"],
    'م' => ["م", "ﻣ", "ﻤ", "ﻢ"],
    'ن' => ["ن", "ﻧ", "ﻨ", "ﻦ"],
    'ں' => ["ں", "ﻧ٘", "ﻨ٘", "ﮟ"],
    'و' => ["و", "و", "ﻮ", "ﻮ"],
    'ہ' => ["ہ", "ﮨ", "ﮩ", "ﮧ"],
    'ھ' => ["ھ", "ﮬ", "ﮭ", "ﮫ"],
    'ء' => ["ء", "ﺋ", "ﺌ", "ء"],
    'ی' => ["ی", "ﻳ", "ﻴ", "ﯽ"],
    'ے' => ["ے", "ے", "ﮯ", "ﮯ"],
    // hamza seats produced by fusion
    'ئ' => ["ئ", "ﺋ", "ﺌ", "ﺊ"],
    'ؤ' => ["ؤ", "ؤ", "ﺆ", "ﺆ"],
    'ۓ' => ["ۓ", "ۓ", "ﮱ", "ﮱ"],
    // dotless skeletons: beh, feh, qaf
    'ٮ' => ["ٮ", "ٮ\u{200D}", "\u{200D}ٮ\u{200D}", "\u{200D}ٮ"],
    'ڡ' => ["ڡ", "ڡ\u{200D}", "\u{200D}ڡ\u{200D}", "\u{200D}ڡ"],
    'ٯ' => ["ٯ", "ٯ\u{200D}", "\u{200D}ٯ\u{200D}", "\u{200D}ٯ"],
};

static SCRIPT_TABLE: Lazy<Arc<ScriptTable>> = Lazy::new(|| {
    Arc::new(ScriptTable::from_rows(
        LETTER_FORMS.entries().map(|(letter, forms)| (*letter, *forms)),
    ))
});

/// The shared Urdu script table.
pub fn script_table() -> Arc<ScriptTable> {
    Arc::clone(&SCRIPT_TABLE)
}

/// Raw forms for `letter`, as `[isolated, initial, medial, final]`.
pub fn letter_forms(letter: char) -> Option<&'static [&'static str; 4]> {
    LETTER_FORMS.get(&letter)
}

/// Hamza seating and fusion: و and ے absorb a following hamza.
pub fn hamza_rules() -> HamzaRules {
    HamzaRules {
        bare: HAMZA,
        seated: HAMZA_SEATED,
        fused: vec![('و', WAW_HAMZA), ('ے', YEH_BARREE_HAMZA)],
    }
}

/// Normalizer for Urdu lexicon keys and typed words.
pub fn normalizer() -> Normalizer {
    Normalizer::from_hamza(&hamza_rules())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matnsaz_core::GlyphVariant;

    #[test]
    fn table_has_every_letter() {
        let t = script_table();
        assert_eq!(t.len(), 45);
        for c in "ابپتٹثجچحخدڈذرڑزژسشصضطظعغفقکگلمنںوہھءیےئؤۓٮڡٯ".chars() {
            assert!(t.contains(c), "missing {c}");
        }
    }

    #[test]
    fn non_joining_letters() {
        let t = script_table();
        for c in "ادڈذرڑزژوےؤۓ".chars() {
            assert!(!t.is_forward_joining(c).unwrap(), "{c} should not join forward");
        }
        for c in "بسکںہھءیئٮڡٯ".chars() {
            assert!(t.is_forward_joining(c).unwrap(), "{c} should join forward");
        }
    }

    #[test]
    fn medial_and_final_differ_for_some_letters_only() {
        let t = script_table();
        assert_ne!(
            t.shape('ب', GlyphVariant::Medial).unwrap(),
            t.shape('ب', GlyphVariant::Final).unwrap()
        );
        assert_eq!(
            t.shape('ر', GlyphVariant::Medial).unwrap(),
            t.shape('ر', GlyphVariant::Final).unwrap()
        );
    }

    #[test]
    fn seated_forms_fold_to_bare_hamza() {
        let n = normalizer();
        assert_eq!(n.clean("گئے"), "گءے");
        assert_eq!(n.clean("سؤال"), "سءال");
        assert_eq!(letter_forms('ں').map(|f| f[1]), Some("ﻧ٘"));
    }
}
