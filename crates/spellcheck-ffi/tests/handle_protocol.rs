//! Handle misuse: double destroy and queries on a destroyed handle.
//!
//! Kept in its own test binary with a single test so that no other session
//! can be allocated at the address of the destroyed handle while it runs.

use std::ffi::{CString, c_int};
use std::path::PathBuf;

use spellcheck_ffi::{
    SPELLCHECK_SUGGEST_ERROR, spellcheck_create, spellcheck_destroy,
    spellcheck_free_suggestions, spellcheck_spell, spellcheck_suggest,
};

fn fixture(name: &str) -> CString {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-data")
        .join(name);
    CString::new(path.to_str().expect("fixture path is UTF-8")).unwrap()
}

#[test]
fn destroyed_handle_is_inert() {
    let aff = fixture("en_test.aff");
    let dic = fixture("en_test.dic");
    let word = CString::new("hello").unwrap();
    let misspelled = CString::new("helo").unwrap();

    let handle = unsafe { spellcheck_create(aff.as_ptr(), dic.as_ptr()) };
    assert!(!handle.is_null());
    assert_eq!(unsafe { spellcheck_spell(handle, word.as_ptr()) }, 1);

    unsafe { spellcheck_destroy(handle) };

    // Use after destroy answers with the invalid-argument defaults.
    assert_eq!(unsafe { spellcheck_spell(handle, word.as_ptr()) }, 0);

    let mut count: c_int = 0;
    let list = unsafe { spellcheck_suggest(handle, misspelled.as_ptr(), &mut count) };
    assert!(list.is_null());
    assert_eq!(count, SPELLCHECK_SUGGEST_ERROR);
    unsafe { spellcheck_free_suggestions(handle, list, count) };

    // A second destroy is ignored.
    unsafe { spellcheck_destroy(handle) };
    unsafe { spellcheck_destroy(handle) };
}
