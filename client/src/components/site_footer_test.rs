use super::*;

#[test]
fn copyright_line_names_year_and_site() {
    assert_eq!(copyright_line(2031), "\u{a9} 2031 First Principles Education. All rights reserved.");
}

#[test]
fn copyright_line_for_current_year_starts_with_symbol() {
    let year = current_year();
    assert!(copyright_line(year).starts_with(&format!("\u{a9} {year} ")));
}
