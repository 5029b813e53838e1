//! Immutable string value with small string optimization.

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;
use std::str;

const INLINE_CAP: usize = 22;
const CHAR_COUNT_UNKNOWN: u32 = u32::MAX;

/// The runtime's string value. Immutable after construction: short values
/// live in an inline buffer, longer ones share a reference-counted heap
/// buffer, so clones never copy string data out of the inline range.
#[derive(Clone)]
pub enum Text {
    Inline { len: u8, buf: [u8; INLINE_CAP] },
    Heap { data: Rc<String>, char_count: Cell<u32> },
}

impl Text {
    pub fn new() -> Self {
        Self::Inline {
            len: 0,
            buf: [0u8; INLINE_CAP],
        }
    }

    pub fn from_str(s: &str) -> Self {
        if s.len() <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            buf[..s.len()].copy_from_slice(s.as_bytes());
            return Self::Inline {
                len: s.len() as u8,
                buf,
            };
        }
        Self::Heap {
            data: Rc::new(s.to_string()),
            char_count: Cell::new(CHAR_COUNT_UNKNOWN),
        }
    }

    pub fn from_string(s: String) -> Self {
        if s.len() <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            buf[..s.len()].copy_from_slice(s.as_bytes());
            return Self::Inline {
                len: s.len() as u8,
                buf,
            };
        }
        Self::Heap {
            data: Rc::new(s),
            char_count: Cell::new(CHAR_COUNT_UNKNOWN),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Text::Inline { len, buf } => {
                let s = &buf[..*len as usize];
                // SAFETY: the inline buffer is only ever filled from &str data
                unsafe { str::from_utf8_unchecked(s) }
            }
            Text::Heap { data, .. } => data.as_str(),
        }
    }

    /// Byte length (not character count; see [`size`](Text::size)).
    pub fn len(&self) -> usize {
        match self {
            Text::Inline { len, .. } => *len as usize,
            Text::Heap { data, .. } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character count as the source language's integer type. Each unit is
    /// one Unicode scalar, not a byte and not a grapheme. Cached for heap
    /// values; ASCII content short-circuits to the byte length.
    pub fn size(&self) -> i64 {
        match self {
            Text::Inline { len, buf } => {
                let byte_len = *len as usize;
                let s = &buf[..byte_len];
                if s.iter().all(|&b| b < 128) {
                    byte_len as i64
                } else {
                    let s = unsafe { str::from_utf8_unchecked(s) };
                    s.chars().count() as i64
                }
            }
            Text::Heap { data, char_count } => {
                let cached = char_count.get();
                if cached != CHAR_COUNT_UNKNOWN {
                    cached as i64
                } else {
                    let count = data.chars().count() as u32;
                    char_count.set(count);
                    count as i64
                }
            }
        }
    }

    /// Materializes an owned copy of the characters as an ordered sequence.
    /// A full copy, not a view: the two values have independent lifetimes.
    pub fn to_chars(&self) -> Vec<char> {
        self.as_str().chars().collect()
    }

    pub fn into_string(self) -> String {
        match self {
            Text::Inline { len, buf } => {
                let s = &buf[..len as usize];
                let ss = unsafe { str::from_utf8_unchecked(s) };
                ss.to_string()
            }
            Text::Heap { data, .. } => match Rc::try_unwrap(data) {
                Ok(s) => s,
                Err(r) => (*r).clone(),
            },
        }
    }

    /// Check if the string is ASCII-only (fast path for indexing).
    #[inline]
    pub fn is_ascii(&self) -> bool {
        match self {
            Text::Inline { len, buf } => buf[..*len as usize].iter().all(|&b| b < 128),
            Text::Heap { data, .. } => data.is_ascii(),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Text::Heap { data: a, .. }, Text::Heap { data: b, .. }) => {
                Rc::ptr_eq(a, b) || a.as_str() == b.as_str()
            }
            (Text::Inline { len: l1, buf: b1 }, Text::Inline { len: l2, buf: b2 }) => {
                l1 == l2 && b1[..*l1 as usize] == b2[..*l2 as usize]
            }
            _ => self.as_str() == other.as_str(),
        }
    }
}

impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().as_bytes().hash(state);
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::from_str(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::from_string(value)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}
