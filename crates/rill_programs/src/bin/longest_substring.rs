//! Longest run without a repeated character, computed over checked indexed
//! access with a sliding left bound.

use rill_runtime::{At, Text, print};

fn length_of_longest_substring(items: &[char]) -> i64 {
    let n = items.len() as i64;
    let mut max_len = 0i64;
    let mut left = 0i64;
    for k in 0..n {
        let r_k = items.at(k);
        if !r_k.is_ok() {
            return 0;
        }
        let c = r_k.get_value();
        let mut found = false;
        let mut found_index = 0i64;
        for j in left..k {
            let r_j = items.at(j);
            if r_j.is_ok() && r_j.get_value() == c {
                found = true;
                found_index = j;
            }
        }
        if found && found_index >= left {
            left = found_index + 1;
        }
        let current_len = k - left + 1;
        if current_len > max_len {
            max_len = current_len;
        }
    }
    max_len
}

fn main() {
    let s1 = vec!['a', 'b', 'c', 'a', 'b', 'c', 'b', 'b'];
    if length_of_longest_substring(&s1) == 3 {
        let s2 = vec!['b', 'b', 'b', 'b', 'b'];
        if length_of_longest_substring(&s2) == 1 {
            let s3 = vec!['p', 'w', 'w', 'k', 'e', 'w'];
            if length_of_longest_substring(&s3) == 3 {
                print(&[&Text::from("Longest Substring: Passed\n").to_chars()]);
                return;
            }
        }
    }
    print(&[&Text::from("Longest Substring: Failed\n").to_chars()]);
}
