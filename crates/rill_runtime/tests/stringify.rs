use rill_runtime::{Text, ToText};

#[test]
fn integers_render_decimal() {
    assert_eq!(0i64.to_text().as_str(), "0");
    assert_eq!((-42i64).to_text().as_str(), "-42");
    assert_eq!(i64::MIN.to_text().as_str(), "-9223372036854775808");
    assert_eq!(7i32.to_text().as_str(), "7");
    assert_eq!((-7i32).to_text().as_str(), "-7");
}

#[test]
fn floats_render_shortest_round_trip() {
    assert_eq!(2.0f64.to_text().as_str(), "2.0");
    assert_eq!(5.5f64.to_text().as_str(), "5.5");
    assert_eq!(0.1f64.to_text().as_str(), "0.1");
    assert_eq!((-0.0f64).to_text().as_str(), "-0.0");
    assert_eq!(2.718281828459045f64.to_text().as_str(), "2.718281828459045");
}

#[test]
fn bools_chars_and_text_render_verbatim() {
    assert_eq!(true.to_text().as_str(), "true");
    assert_eq!(false.to_text().as_str(), "false");
    assert_eq!('x'.to_text().as_str(), "x");
    assert_eq!('好'.to_text().as_str(), "好");
    assert_eq!(Text::from("hi there").to_text().as_str(), "hi there");
}

#[test]
fn sequences_render_bracketed_and_comma_joined() {
    assert_eq!(vec![1i64, 2, 3].to_text().as_str(), "[1, 2, 3]");
    let empty: Vec<i64> = Vec::new();
    assert_eq!(empty.to_text().as_str(), "[]");
    assert_eq!(vec!['a', 'b'].to_text().as_str(), "[a, b]");
    assert_eq!(vec![1.5f64, 2.0].to_text().as_str(), "[1.5, 2.0]");
}

#[test]
fn nested_sequences_recurse() {
    let nested = vec![vec![1i64, 2], vec![], vec![3]];
    assert_eq!(nested.to_text().as_str(), "[[1, 2], [], [3]]");
}

#[test]
fn append_to_extends_an_existing_buffer() {
    let mut out = String::from("x = ");
    42i64.append_to(&mut out);
    assert_eq!(out, "x = 42");
}
