//! Arithmetic conformance: one operation result per line, integers in
//! decimal, floats in shortest round-tripping decimal.

use rill_runtime::{Text, ToText, float, int32, int64, print};

fn print_line(value: Text) {
    print(&[&value, &'\n']);
}

fn main() {
    print_line(int32::abs(-5).to_text());
    print_line(int32::min(10, 5).to_text());
    print_line(int32::max(10, 5).to_text());
    let p32 = int32::pow(2, 3);
    if p32.is_ok() {
        print_line(p32.get_value().to_text());
    } else {
        print_line(Text::from("Error in int32 pow"));
    }

    print_line(int64::abs(-5).to_text());
    print_line(int64::min(10, 5).to_text());
    print_line(int64::max(10, 5).to_text());
    let p64 = int64::pow(2, 3);
    if p64.is_ok() {
        print_line(p64.get_value().to_text());
    }

    print_line(float::abs(-5.5).to_text());
    print_line(float::pow(2.0, 3.0).to_text());
    let s = float::sqrt(4.0);
    if s.is_ok() {
        print_line(s.get_value().to_text());
    } else {
        print_line(Text::from("Error in sqrt"));
    }
    print_line(float::floor(2.9).to_text());
    print_line(float::ceil(2.1).to_text());
    print_line(float::exp(1.0).to_text());
    let l = float::log(float::E);
    if l.is_ok() {
        print_line(l.get_value().to_text());
    }
    print_line(float::sin(0.0).to_text());
    print_line(float::cos(0.0).to_text());
}
