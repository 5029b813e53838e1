//! String value conformance: size, checked character access, structural
//! equality, and multi-argument print with no inserted separators.

use rill_runtime::{At, Text, print};

fn main() {
    let s = Text::from("Hello");
    if s.size() != 5 {
        print(&[&Text::from("Size Fail\n")]);
        return;
    }
    let r = s.at(1);
    if !r.is_ok() {
        print(&[&Text::from("At Fail 1\n")]);
        return;
    }
    if r.get_value() != 'e' {
        print(&[&Text::from("At Fail 2\n")]);
        return;
    }
    if s != Text::from("Hello") {
        print(&[&Text::from("Eq Fail\n")]);
        return;
    }
    print(&[&s]);
    print(&[&Text::from("\n")]);
    print(&[
        &Text::from("Variadic"),
        &Text::from(" "),
        &Text::from("Print"),
        &Text::from(" "),
        &Text::from("Works\n"),
    ]);
    print(&[&Text::from("Passed\n")]);
}
