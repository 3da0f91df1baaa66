// crates/shared-kernel/tests/counts.rs
use shell_wc_shared_kernel::{ByteCount, CharCount, LineCount, WordCount};

#[test]
fn eq_with_usize_both_sides() {
    let count = LineCount::from(7);
    assert!(count == 7usize);
    assert!(7usize == count);
}

#[test]
fn display_renders_the_bare_value() {
    assert_eq!(ByteCount::new(42).to_string(), "42");
    assert_eq!(CharCount::zero().to_string(), "0");
}

#[test]
fn zero_is_the_default() {
    assert!(WordCount::default().is_zero());
    assert_eq!(LineCount::default(), LineCount::zero());
}

#[test]
fn add_assign_accumulates() {
    let mut total = WordCount::zero();
    total += WordCount::new(3);
    total += WordCount::new(2);
    assert_eq!(total, 5usize);
}

#[test]
fn add_produces_the_sum() {
    assert_eq!(ByteCount::new(1) + ByteCount::new(2), ByteCount::new(3));
}
