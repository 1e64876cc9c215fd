use crate::CharSet;

#[test]
fn iterates_in_code_point_order() {
    let set = CharSet::from("zaZ0");
    let chars: String = set.iter().collect();
    assert_eq!(chars, "0Zaz");
}

#[test]
fn deduplicates() {
    let mut set = CharSet::from("aab");
    assert_eq!(set.len(), 2);
    assert!(!set.insert('a'));
    assert!(set.insert('c'));
    assert_eq!(set.len(), 3);
}

#[test]
fn contains_all_and_remove_all() {
    let digits = CharSet::from("0123456789");
    let mut set = CharSet::from("0123456789x");
    assert!(set.contains_all(&digits));
    assert!(!digits.contains_all(&set));

    set.remove_all(&digits);
    assert_eq!(set, CharSet::from("x"));
    assert!(!set.contains_all(&digits));
}

#[test]
fn display_lists_characters() {
    assert_eq!(CharSet::from("b\na").to_string(), r"['\n', 'a', 'b']");
    assert_eq!(CharSet::default().to_string(), "[]");
}
