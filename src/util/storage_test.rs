#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_is_absent_in_non_hydrate_tests() {
    assert_eq!(read_string("theme"), None);
}

#[test]
fn write_is_a_noop_but_callable() {
    write_string("theme", "dark");
    assert_eq!(read_string("theme"), None);
}
