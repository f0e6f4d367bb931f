//! Name list behaviour through the public API.

use cviceni_core::{Error, NameList};

#[test]
fn test_index_one_is_karel() {
    let list = NameList::new(["Pepa", "Karel", "Mirek", "Kryštof"]);
    assert_eq!(list.get(1).unwrap(), "Karel");
}

#[test]
fn test_remove_at_on_empty_list() {
    let mut list = NameList::default();
    let err = list.remove_at(0).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn test_error_message() {
    let list = NameList::new(["Pepa"]);
    let err = list.get(3).unwrap_err();
    assert_eq!(err.to_string(), "Index out of range: 3 (length 1)");
}
