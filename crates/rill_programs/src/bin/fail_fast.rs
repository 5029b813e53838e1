//! Deliberately extracts from a failed result, one violation kind per mode,
//! so the abort contract (exit status = stored code, diagnostic on stderr,
//! prior stdout preserved) can be probed from the outside.

use rill_runtime::{At, Text, div, int64, print};

const USAGE: &str = "Usage: fail_fast <index|div|pow>";

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(mode) = args.next() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    if args.next().is_some() {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }
    match mode.as_str() {
        "index" => {
            print(&[&Text::from("probing index\n")]);
            let xs: Vec<i64> = vec![1, 2, 3];
            let _ = xs.at(99).get_value();
        }
        "div" => {
            print(&[&Text::from("probing div\n")]);
            let _ = div(1i64, 0).get_value();
        }
        "pow" => {
            print(&[&Text::from("probing pow\n")]);
            let _ = int64::pow(2, -1).get_value();
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}
