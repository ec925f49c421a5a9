#![allow(unused)]

use cleanstring::{clean_with, Options};


pub fn clean_prefixed(input: &str, prefix: &str) -> String {
    clean_with(input, Some(&Options::new().with_prefix(prefix)))
}

#[track_caller]
pub fn assert_trimmed(output: &str) {
    if output.is_empty() {
        return;
    }
    let first = output.split('\n').next().unwrap_or_default();
    let last = output.split('\n').next_back().unwrap_or_default();
    assert!(!first.trim_start().is_empty(), "leading blank line in {output:?}");
    assert!(!last.trim_start().is_empty(), "trailing blank line in {output:?}");
}
