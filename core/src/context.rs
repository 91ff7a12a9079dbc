//! Editing context shared with the host.
//!
//! The host owns the document. It hands the engine a snapshot of the text
//! before the cursor and receives `Edit` values back, which it applies to
//! its own buffer. The engine never holds on to host text.

use crate::script::{is_diacritic, is_word_boundary};

/// Replace the last `delete` characters before the cursor with `insert`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Edit {
    /// Number of characters (not bytes) to remove before the cursor.
    pub delete: usize,
    /// Text to insert at the cursor after deleting.
    pub insert: String,
}

impl Edit {
    /// Plain insertion.
    pub fn insert<S: Into<String>>(text: S) -> Self {
        Self {
            delete: 0,
            insert: text.into(),
        }
    }

    /// Remove `delete` characters, then insert `text`.
    pub fn replace<S: Into<String>>(delete: usize, text: S) -> Self {
        Self {
            delete,
            insert: text.into(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.delete == 0 && self.insert.is_empty()
    }

    /// Apply to a buffer whose cursor is at the end.
    pub fn apply(&self, text: &mut String) {
        for _ in 0..self.delete {
            if text.pop().is_none() {
                break;
            }
        }
        text.push_str(&self.insert);
    }

    /// Apply to a copy of `context`.
    pub fn applied_to(&self, context: &str) -> String {
        let mut out = context.to_string();
        self.apply(&mut out);
        out
    }
}

/// Last character before the cursor, skipping combining marks.
pub fn last_base_char(context: &str) -> Option<char> {
    context.chars().rev().find(|c| !is_diacritic(*c))
}

/// The base character before `last_base_char`, skipping marks.
pub fn second_last_base_char(context: &str) -> Option<char> {
    context.chars().rev().filter(|c| !is_diacritic(*c)).nth(1)
}

/// Whether the cursor sits inside a word.
pub fn in_word(context: &str) -> bool {
    matches!(last_base_char(context), Some(c) if !is_word_boundary(c))
}

/// The word in progress: everything after the last word boundary.
pub fn current_word(context: &str) -> &str {
    let start = context
        .char_indices()
        .rev()
        .find(|(_, c)| is_word_boundary(*c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &context[start..]
}
