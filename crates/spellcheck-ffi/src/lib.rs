// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// spellcheck-ffi: C-compatible FFI layer for Hunspell sessions.
//
// This crate exposes a stable C ABI for managed hosts (Dart/Flutter FFI,
// C#/P-Invoke, Python/ctypes, ...). The C declarations live in
// `include/spellcheck.h`.
//
// Memory management rules:
// - Opaque `SpellcheckHandle` pointer: created by `spellcheck_create`,
//   freed by `spellcheck_destroy`. Destroying an unknown or already
//   destroyed handle is ignored.
// - Returned suggestion arrays: caller must free with
//   `spellcheck_free_suggestions`, passing the count that was returned.
// - Strings are null-terminated byte strings. Paths are handed to the
//   engine unchanged. Words and suggestions are in the dictionary's
//   encoding (the affix file's SET line) and are never transcoded.
//
// Threading: a single handle must not be queried from several threads at
// once; callers serialize access per handle. Distinct handles are
// independent.

mod registry;
pub mod suggestions;

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use log::{debug, error, warn};
use spellcheck_core::{Speller, Suggestions};

use crate::suggestions::{MarshalError, SuggestionArray};

/// Opaque session handle as seen from C.
pub type SpellcheckHandle = Speller;

/// Count written by `spellcheck_suggest` when the call failed.
pub const SPELLCHECK_SUGGEST_ERROR: c_int = -1;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new session from an affix file and a dictionary file.
///
/// File existence is not checked; an unreadable file produces a session
/// that knows no words.
///
/// Returns an opaque pointer, or NULL if either path is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spellcheck_create(
    aff_path: *const c_char,
    dic_path: *const c_char,
) -> *mut SpellcheckHandle {
    let Some(aff) = c_str(aff_path) else {
        warn!("spellcheck_create: affix path is null");
        return ptr::null_mut();
    };
    let Some(dic) = c_str(dic_path) else {
        warn!("spellcheck_create: dictionary path is null");
        return ptr::null_mut();
    };

    match Speller::open_raw(aff, dic) {
        Ok(speller) => {
            let handle = Box::into_raw(Box::new(speller));
            registry::register(handle.cast_const());
            debug!("spellcheck_create: {handle:p} for {dic:?}");
            handle
        }
        Err(e) => {
            warn!("spellcheck_create: {e}");
            ptr::null_mut()
        }
    }
}

/// Free a session created by `spellcheck_create`.
///
/// NULL, foreign and already destroyed handles are ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spellcheck_destroy(handle: *mut SpellcheckHandle) {
    if handle.is_null() {
        return;
    }
    if !registry::unregister(handle.cast_const()) {
        warn!("spellcheck_destroy: ignoring unknown handle {handle:p}");
        return;
    }
    drop(unsafe { Box::from_raw(handle) });
    debug!("spellcheck_destroy: {handle:p}");
}

// ── Spell checking ──────────────────────────────────────────────

/// Check whether a word is correctly spelled.
///
/// Returns 1 for correct, 0 for misspelled. Also returns 0 when the handle is
/// NULL or destroyed, or the word is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spellcheck_spell(
    handle: *const SpellcheckHandle,
    word: *const c_char,
) -> c_int {
    let Some(speller) = live_speller(handle) else {
        return 0;
    };
    let Some(word) = c_str(word) else {
        return 0;
    };
    c_int::from(speller.spell_raw(word))
}

/// Generate spelling suggestions, best first.
///
/// Suggestion bytes are copied exactly as the engine produced them.
///
/// - `count` NULL: returns NULL, nothing written.
/// - invalid handle or word, or allocation failure: returns NULL and
///   writes `SPELLCHECK_SUGGEST_ERROR` (-1) to `*count`.
/// - no suggestions: returns NULL and writes 0.
/// - otherwise returns an array of `*count` strings. Caller must free it with
///   `spellcheck_free_suggestions(handle, array, *count)`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spellcheck_suggest(
    handle: *const SpellcheckHandle,
    word: *const c_char,
    count: *mut c_int,
) -> *mut *mut c_char {
    let Some(count) = (unsafe { count.as_mut() }) else {
        return ptr::null_mut();
    };
    *count = SPELLCHECK_SUGGEST_ERROR;

    let Some(speller) = live_speller(handle) else {
        return ptr::null_mut();
    };
    let Some(word) = c_str(word) else {
        return ptr::null_mut();
    };

    match marshal_suggestions(&speller.suggest_raw(word)) {
        Ok((list, n)) => {
            *count = n;
            list
        }
        Err(e) => {
            error!("spellcheck_suggest: {e}");
            ptr::null_mut()
        }
    }
}

/// Free a suggestion array returned by `spellcheck_suggest`.
///
/// `count` must be the value `spellcheck_suggest` wrote. `handle` is not
/// used and may be NULL. A NULL `list` is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spellcheck_free_suggestions(
    _handle: *const SpellcheckHandle,
    list: *mut *mut c_char,
    count: c_int,
) {
    if list.is_null() {
        return;
    }
    let Ok(len) = usize::try_from(count) else {
        warn!("spellcheck_free_suggestions: negative count {count}, array not freed");
        return;
    };
    if len == 0 {
        warn!("spellcheck_free_suggestions: zero count for non-null array, array not freed");
        return;
    }
    drop(unsafe { SuggestionArray::from_raw(list, len) });
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn spellcheck_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(spellcheck_core::version()).unwrap_or_default());
    VERSION.as_ptr()
}

// ── Internal helpers ────────────────────────────────────────────

fn c_str<'a>(s: *const c_char) -> Option<&'a CStr> {
    if s.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(s) })
}

fn live_speller<'a>(handle: *const SpellcheckHandle) -> Option<&'a Speller> {
    if !registry::is_live(handle) {
        return None;
    }
    unsafe { handle.as_ref() }
}

fn marshal_suggestions(
    suggestions: &Suggestions<'_>,
) -> Result<(*mut *mut c_char, c_int), MarshalError> {
    let n = c_int::try_from(suggestions.len())
        .map_err(|_| MarshalError::TooMany(suggestions.len()))?;
    let (list, _) = SuggestionArray::from_bytes(suggestions.iter().map(CStr::to_bytes))?.into_raw();
    Ok((list, n))
}
