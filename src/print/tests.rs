#![cfg(test)]

use super::*;

#[test]
fn test_write_vector() {
    let mut out = Vec::new();
    write_vector(&mut out, &[3, 1, 2]).unwrap();
    write_vector(&mut out, &["a", "b"]).unwrap();
    write_vector::<_, i32>(&mut out, &[]).unwrap();
    assert_eq!(out, b"3 1 2\na b\n\n");
}

#[test]
fn test_precision_applies_per_item() {
    assert_eq!(
        format!("{:.6}", VectorDisplay(&[1.5, -2.0])),
        "1.500000 -2.000000"
    );
    assert_eq!(format!("{:.2}", VectorDisplay(&["abc", "d"])), "ab d");
}
