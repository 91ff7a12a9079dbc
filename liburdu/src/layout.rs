// liburdu/src/layout.rs
//
// Letter keys of the built-in Urdu layouts.
//
// Alphabetical: letters run right to left in alphabetical order, ten keys
// per row, on a 375pt wide keyboard.
//
// Rasm: one key per letter skeleton. Dotted letters share the key of their
// dotless shape, so the layout needs only 21 wider keys.
//
// Only letter keys matter for adjacency; space, backspace and the other
// function keys are left to the host.

use matnsaz_core::{KeySpec, KeyboardLayout};

pub const ALPHABETICAL: &str = "alphabetical";
pub const RASM: &str = "rasm";

const KEY_WIDTH: f64 = 31.5;
const KEY_HEIGHT: f64 = 42.0;

/// Left edges of the ten key columns, rightmost first.
const COLUMNS: [f64; 10] = [340.5, 303.0, 265.5, 228.0, 190.5, 153.0, 115.5, 78.0, 40.5, 3.0];

/// Top edges of the four letter rows.
const ROWS: [f64; 4] = [10.0, 63.0, 116.0, 169.0];

const ALPHABETICAL_ROWS: [&str; 4] = [
    "ابپتٹثجچحخ",
    "دڈذرڑزژسشص",
    "ضطظعغفقکگل",
    // backspace takes the last slot
    "منںوہھءیے",
];

const RASM_KEY_WIDTH: f64 = 40.0;

/// Rasm layout keys as (letter, left, top).
const RASM_KEYS: [(char, f64, f64); 21] = [
    ('ا', 332.0, 10.0),
    ('ٮ', 285.0, 10.0),
    ('ح', 238.0, 10.0),
    ('د', 191.0, 10.0),
    ('ر', 144.0, 10.0),
    ('س', 97.0, 10.0),
    ('ص', 50.0, 10.0),
    ('ط', 3.0, 10.0),
    ('ع', 332.0, 63.0),
    ('ڡ', 285.0, 63.0),
    ('ٯ', 238.0, 63.0),
    ('ک', 191.0, 63.0),
    ('ل', 144.0, 63.0),
    ('م', 97.0, 63.0),
    ('ں', 50.0, 63.0),
    ('و', 3.0, 63.0),
    // third row is offset by half a key, settings and backspace at the ends
    ('ہ', 261.5, 116.0),
    ('ھ', 214.5, 116.0),
    ('ء', 167.5, 116.0),
    ('ی', 120.5, 116.0),
    ('ے', 73.5, 116.0),
];

/// The alphabetical layout.
pub fn alphabetical_layout() -> KeyboardLayout {
    let mut layout = KeyboardLayout::new(ALPHABETICAL);
    for (row, letters) in ALPHABETICAL_ROWS.iter().enumerate() {
        for (col, letter) in letters.chars().enumerate() {
            layout.add_key(KeySpec::new(letter, COLUMNS[col], ROWS[row], KEY_WIDTH, KEY_HEIGHT));
        }
    }
    layout
}

/// The skeleton (rasm) layout.
pub fn rasm_layout() -> KeyboardLayout {
    let mut layout = KeyboardLayout::new(RASM);
    for &(letter, x, y) in &RASM_KEYS {
        layout.add_key(KeySpec::new(letter, x, y, RASM_KEY_WIDTH, KEY_HEIGHT));
    }
    layout
}

/// Built-in layout by name.
pub fn layout_by_name(name: &str) -> Option<KeyboardLayout> {
    match name {
        ALPHABETICAL => Some(alphabetical_layout()),
        RASM => Some(rasm_layout()),
        _ => None,
    }
}
