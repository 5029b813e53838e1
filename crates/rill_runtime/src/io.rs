//! Output sink: ordered, separator-free writes to standard output.

use std::io::{self, Write};

use crate::text::Text;

/// A value `print` can emit directly: already-textual values and character
/// sequences. Non-textual values are stringified by the caller first.
pub trait ToOutput {
    fn write_to(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl ToOutput for str {
    fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl ToOutput for String {
    fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl ToOutput for Text {
    fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.as_str().as_bytes())
    }
}

impl ToOutput for char {
    fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut buf = [0u8; 4];
        out.write_all(self.encode_utf8(&mut buf).as_bytes())
    }
}

impl ToOutput for [char] {
    fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let s: String = self.iter().collect();
        out.write_all(s.as_bytes())
    }
}

impl ToOutput for Vec<char> {
    fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        self.as_slice().write_to(out)
    }
}

/// Writes each part to stdout in argument order, with no inserted
/// separators and no trailing newline. stdout is locked once per call, so
/// a single `print` is never interleaved. Stream-write failures are not
/// modeled: on a write error (e.g. a closed pipe) the sink stops writing
/// and returns normally.
pub fn print(parts: &[&dyn ToOutput]) {
    let mut out = io::stdout().lock();
    for part in parts {
        if part.write_to(&mut out).is_err() {
            return;
        }
    }
}
