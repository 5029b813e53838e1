//! Checked pair search: find two elements summing to a target and report
//! their index pair through bounds-checked access only.

use rill_runtime::{At, Text, print};

fn two_sum(nums: &[i32], target: i32) -> Vec<i64> {
    let n = nums.len() as i64;
    for i in 0..n {
        for j in (i + 1)..n {
            let r1 = nums.at(i);
            if !r1.is_ok() {
                return vec![-1, -1];
            }
            let v1 = r1.get_value();
            let r2 = nums.at(j);
            if !r2.is_ok() {
                return vec![-1, -1];
            }
            let v2 = r2.get_value();
            if v1 + v2 == target {
                return vec![i, j];
            }
        }
    }
    vec![-1, -1]
}

fn main() {
    let nums: Vec<i32> = vec![2, 7, 11, 15];
    let target = 9;
    let result = two_sum(&nums, target);
    if result.len() as i64 == 2 {
        let r0 = result.at(0);
        let r1 = result.at(1);
        if r0.is_ok() && r1.is_ok() && r0.get_value() == 0 && r1.get_value() == 1 {
            print(&[&Text::from("Two Sum: Passed\n").to_chars()]);
            return;
        }
    }
    print(&[&Text::from("Failed\n").to_chars()]);
}
