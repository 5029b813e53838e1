//! Bounds-checked element access, the only sanctioned way generated code
//! reads sequence elements.

use crate::outcome::{ErrorCode, Outcome};
use crate::text::Text;

/// Checked indexed access over ordered sequences and string values.
///
/// The index is the source language's signed 64-bit integer, which is why
/// negative indices are representable and must be rejected. `at` fails with
/// `IndexOutOfRange` (code 1) when `index < 0 || index >= length`; an
/// out-of-range access always becomes an inspectable [`Outcome`], never a
/// fault.
pub trait At {
    type Item;

    fn at(&self, index: i64) -> Outcome<Self::Item>;
}

impl<T: Clone> At for [T] {
    type Item = T;

    fn at(&self, index: i64) -> Outcome<T> {
        if index < 0 || index >= self.len() as i64 {
            return Outcome::Err(ErrorCode::IndexOutOfRange);
        }
        Outcome::Ok(self[index as usize].clone())
    }
}

impl At for Text {
    type Item = char;

    fn at(&self, index: i64) -> Outcome<char> {
        if index < 0 || index >= self.size() {
            return Outcome::Err(ErrorCode::IndexOutOfRange);
        }
        let s = self.as_str();
        if self.is_ascii() {
            return Outcome::Ok(s.as_bytes()[index as usize] as char);
        }
        match s.chars().nth(index as usize) {
            Some(c) => Outcome::Ok(c),
            None => Outcome::Err(ErrorCode::IndexOutOfRange),
        }
    }
}
