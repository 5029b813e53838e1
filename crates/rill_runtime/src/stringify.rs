//! Canonical textual conversion for the closed set of runtime value kinds.

use crate::text::Text;

/// Append-into-buffer stringification. One impl per supported value kind:
/// the two integer widths (decimal via itoa), floating (shortest
/// round-tripping decimal via ryu, so `2.0` renders as `2.0`, never `2`),
/// boolean literals, bare characters, string values, and ordered sequences
/// of any supported kind in `[a, b, c]` form.
pub trait ToText {
    /// Append this value's canonical text form to `out`.
    fn append_to(&self, out: &mut String);

    /// Render into an owned string value.
    fn to_text(&self) -> Text {
        let mut out = String::new();
        self.append_to(&mut out);
        Text::from_string(out)
    }
}

impl ToText for i64 {
    fn append_to(&self, out: &mut String) {
        let mut buf = itoa::Buffer::new();
        out.push_str(buf.format(*self));
    }
}

impl ToText for i32 {
    fn append_to(&self, out: &mut String) {
        let mut buf = itoa::Buffer::new();
        out.push_str(buf.format(*self));
    }
}

impl ToText for f64 {
    fn append_to(&self, out: &mut String) {
        let mut buf = ryu::Buffer::new();
        out.push_str(buf.format(*self));
    }
}

impl ToText for bool {
    fn append_to(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl ToText for char {
    fn append_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl ToText for Text {
    fn append_to(&self, out: &mut String) {
        out.push_str(self.as_str());
    }
}

impl<T: ToText> ToText for [T] {
    fn append_to(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.append_to(out);
        }
        out.push(']');
    }
}

impl<T: ToText> ToText for Vec<T> {
    fn append_to(&self, out: &mut String) {
        self.as_slice().append_to(out);
    }
}
