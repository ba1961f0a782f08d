//! End-to-end tests of the exported C ABI, called from Rust as a C host would.
//!
//! Fixture dictionaries live in ../../test-data relative to the crate root.

use std::ffi::{CStr, CString, c_int};
use std::path::PathBuf;
use std::ptr;

use spellcheck_ffi::{
    SPELLCHECK_SUGGEST_ERROR, SpellcheckHandle, spellcheck_create, spellcheck_destroy,
    spellcheck_free_suggestions, spellcheck_spell, spellcheck_suggest, spellcheck_version,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture(lang: &str, ext: &str) -> CString {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-data")
        .join(format!("{lang}.{ext}"));
    CString::new(path.to_str().expect("fixture path is UTF-8")).unwrap()
}

fn create(lang: &str) -> *mut SpellcheckHandle {
    let aff = fixture(lang, "aff");
    let dic = fixture(lang, "dic");
    let handle = unsafe { spellcheck_create(aff.as_ptr(), dic.as_ptr()) };
    assert!(!handle.is_null(), "failed to create session for {lang}");
    handle
}

fn spell(handle: *const SpellcheckHandle, word: impl AsRef<[u8]>) -> bool {
    let word = CString::new(word.as_ref()).unwrap();
    unsafe { spellcheck_spell(handle, word.as_ptr()) == 1 }
}

/// Suggest, copy the result bytes out, and free the array.
fn suggest(handle: *const SpellcheckHandle, word: impl AsRef<[u8]>) -> (c_int, Vec<Vec<u8>>) {
    let word = CString::new(word.as_ref()).unwrap();
    let mut count: c_int = 12345;
    let list = unsafe { spellcheck_suggest(handle, word.as_ptr(), &mut count) };

    let mut out = Vec::new();
    if !list.is_null() {
        for i in 0..count as usize {
            let s = unsafe { CStr::from_ptr(*list.add(i)) };
            out.push(s.to_bytes().to_vec());
        }
    }
    unsafe { spellcheck_free_suggestions(handle, list, count) };
    (count, out)
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_minimal_english() {
    let handle = create("en_test");

    assert!(spell(handle, "hello"));
    assert!(!spell(handle, "helo"));

    let (count, suggestions) = suggest(handle, "helo");
    assert!(count >= 1);
    assert_eq!(suggestions.len(), count as usize);
    assert!(suggestions.iter().any(|s| s == b"hello"), "got {suggestions:?}");

    unsafe { spellcheck_destroy(handle) };
}

#[test]
fn suggestion_order_matches_engine() {
    let aff = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data/en_test.aff");
    let dic = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data/en_test.dic");
    let speller = spellcheck_core::Speller::open(aff, dic).unwrap();
    let expected: Vec<Vec<u8>> = speller
        .suggest_raw(c"wrold")
        .iter()
        .map(|s| s.to_bytes().to_vec())
        .collect();
    assert!(!expected.is_empty());

    let handle = create("en_test");
    let (count, suggestions) = suggest(handle, "wrold");
    assert_eq!(count as usize, expected.len());
    assert_eq!(suggestions, expected);
    unsafe { spellcheck_destroy(handle) };
}

// ---------------------------------------------------------------------------
// Dictionaries
// ---------------------------------------------------------------------------

#[test]
fn affix_rules_are_applied() {
    let handle = create("en_affix");
    assert!(spell(handle, "cat"));
    assert!(spell(handle, "cats"));
    assert!(!spell(handle, "catts"));
    unsafe { spellcheck_destroy(handle) };
}

#[test]
fn sessions_do_not_interfere() {
    let en = create("en_test");
    let de = create("de_test");

    assert!(spell(en, "hello"));
    assert!(!spell(de, "hello"));
    assert!(spell(de, "hallo"));
    assert!(!spell(en, "hallo"));

    unsafe { spellcheck_destroy(en) };
    assert!(spell(de, "welt"));
    unsafe { spellcheck_destroy(de) };
}

#[test]
fn missing_files_yield_an_empty_dictionary() {
    let aff = CString::new("/nonexistent/spellcheck/xx.aff").unwrap();
    let dic = CString::new("/nonexistent/spellcheck/xx.dic").unwrap();
    let handle = unsafe { spellcheck_create(aff.as_ptr(), dic.as_ptr()) };
    assert!(!handle.is_null());
    assert!(!spell(handle, "hello"));
    unsafe { spellcheck_destroy(handle) };
}

#[test]
fn latin1_words_are_checked_in_dictionary_encoding() {
    let handle = create("de_latin1");
    assert!(spell(handle, b"gr\xf6\xdfe"));
    assert!(spell(handle, b"t\xfcr"));
    assert!(spell(handle, "haus"));
    // The UTF-8 spelling is a different byte string in this dictionary.
    assert!(!spell(handle, "größe"));
    unsafe { spellcheck_destroy(handle) };
}

#[test]
fn latin1_suggestions_are_returned_byte_exact() {
    let handle = create("de_latin1");
    let (count, suggestions) = suggest(handle, b"gr\xf6\xdf");
    assert!(count >= 1);
    assert!(
        suggestions.iter().any(|s| s == b"gr\xf6\xdfe"),
        "got {suggestions:?}"
    );
    unsafe { spellcheck_destroy(handle) };
}

// ---------------------------------------------------------------------------
// Invalid arguments
// ---------------------------------------------------------------------------

#[test]
fn create_rejects_null_paths() {
    let dic = fixture("en_test", "dic");
    assert!(unsafe { spellcheck_create(ptr::null(), dic.as_ptr()) }.is_null());
    assert!(unsafe { spellcheck_create(dic.as_ptr(), ptr::null()) }.is_null());
}

#[cfg(unix)]
#[test]
fn create_accepts_non_utf8_path() {
    let aff = CString::new(b"/nonexistent/x\xff.aff".to_vec()).unwrap();
    let dic = CString::new(b"/nonexistent/x\xff.dic".to_vec()).unwrap();
    let handle = unsafe { spellcheck_create(aff.as_ptr(), dic.as_ptr()) };
    assert!(!handle.is_null());
    assert!(!spell(handle, "hello"));
    unsafe { spellcheck_destroy(handle) };
}

#[test]
fn spell_with_null_arguments_is_false() {
    let handle = create("en_test");
    let word = CString::new("hello").unwrap();

    assert_eq!(unsafe { spellcheck_spell(ptr::null(), word.as_ptr()) }, 0);
    assert_eq!(unsafe { spellcheck_spell(handle, ptr::null()) }, 0);

    unsafe { spellcheck_destroy(handle) };
}


#[test]
fn suggest_with_null_count_writes_nothing() {
    let handle = create("en_test");
    let word = CString::new("helo").unwrap();
    let list = unsafe { spellcheck_suggest(handle, word.as_ptr(), ptr::null_mut()) };
    assert!(list.is_null());
    unsafe { spellcheck_destroy(handle) };
}

#[test]
fn suggest_with_invalid_arguments_reports_error() {
    let handle = create("en_test");
    let word = CString::new("helo").unwrap();

    let mut count: c_int = 0;
    let list = unsafe { spellcheck_suggest(ptr::null(), word.as_ptr(), &mut count) };
    assert!(list.is_null());
    assert_eq!(count, SPELLCHECK_SUGGEST_ERROR);

    let mut count: c_int = 0;
    let list = unsafe { spellcheck_suggest(handle, ptr::null(), &mut count) };
    assert!(list.is_null());
    assert_eq!(count, SPELLCHECK_SUGGEST_ERROR);

    unsafe { spellcheck_free_suggestions(handle, list, count) };
    unsafe { spellcheck_destroy(handle) };
}

#[test]
fn suggest_without_candidates_is_empty_success() {
    let handle = create("en_test");
    let (count, suggestions) = suggest(handle, "qqqqqqqqqqqqqqqqqqqq");
    assert_eq!(count, 0);
    assert!(suggestions.is_empty());
    unsafe { spellcheck_destroy(handle) };
}

#[test]
fn free_tolerates_null_list() {
    unsafe { spellcheck_free_suggestions(ptr::null(), ptr::null_mut(), 0) };
    unsafe { spellcheck_free_suggestions(ptr::null(), ptr::null_mut(), 3) };
}

// ---------------------------------------------------------------------------
// Handle protocol
// ---------------------------------------------------------------------------

#[test]
fn destroy_null_is_noop() {
    unsafe { spellcheck_destroy(ptr::null_mut()) };
}

#[test]
fn version_matches_crate() {
    let version = unsafe { CStr::from_ptr(spellcheck_version()) };
    assert_eq!(version.to_str().unwrap(), spellcheck_core::version());
}
