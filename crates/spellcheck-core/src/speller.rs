// Speller: one loaded Hunspell dictionary.
//
// Design notes:
// - The engine is constructed from file paths and reads both files itself.
//   Missing or unreadable files are not detected here; Hunspell reports them
//   on stderr and behaves as an empty dictionary.
// - Words and suggestions are bytes in the dictionary's own encoding (the
//   affix file's SET line). The `_raw` methods pass them through untouched;
//   the `&str` conveniences are for UTF-8 dictionaries and display.
// - A single Speller is not safe for concurrent queries. Hunspell mutates
//   internal scratch state during lookups, so the type is Send but not Sync.

use std::ffi::{CStr, CString, c_char, c_int};
use std::fmt;
use std::path::{Path, PathBuf};
use std::ptr::{self, NonNull};

use hunspell_sys::{
    Hunhandle, Hunspell_create, Hunspell_destroy, Hunspell_free_list, Hunspell_spell,
    Hunspell_suggest,
};
use log::debug;

use crate::error::{SpellerError, SpellerResult};

/// A spell-checking session backed by one affix file and one word list.
pub struct Speller {
    engine: NonNull<Hunhandle>,
    affix_path: PathBuf,
    dictionary_path: PathBuf,
}

// SAFETY: a Hunspell instance has no thread affinity. Shared access is what
// must be excluded, and `Speller` is not `Sync`.
unsafe impl Send for Speller {}

impl Speller {
    /// Load a dictionary from an affix file and a word-list file.
    ///
    /// Fails only when a path cannot be handed to the engine. File existence
    /// is not checked.
    pub fn open(
        affix_path: impl AsRef<Path>,
        dictionary_path: impl AsRef<Path>,
    ) -> SpellerResult<Self> {
        let affix_path = affix_path.as_ref();
        let dictionary_path = dictionary_path.as_ref();
        let aff = path_to_c(affix_path)?;
        let dic = path_to_c(dictionary_path)?;
        Self::create(&aff, &dic, affix_path.to_path_buf(), dictionary_path.to_path_buf())
    }

    /// Load a dictionary from paths given as C strings, bytes passed as-is.
    pub fn open_raw(affix_path: &CStr, dictionary_path: &CStr) -> SpellerResult<Self> {
        Self::create(
            affix_path,
            dictionary_path,
            path_from_c(affix_path),
            path_from_c(dictionary_path),
        )
    }

    fn create(
        aff: &CStr,
        dic: &CStr,
        affix_path: PathBuf,
        dictionary_path: PathBuf,
    ) -> SpellerResult<Self> {
        debug!(
            "loading dictionary aff={} dic={}",
            affix_path.display(),
            dictionary_path.display()
        );
        let engine = unsafe { Hunspell_create(aff.as_ptr(), dic.as_ptr()) };
        let engine = NonNull::new(engine).ok_or(SpellerError::EngineInit)?;

        Ok(Self {
            engine,
            affix_path,
            dictionary_path,
        })
    }

    /// Check whether a word, in the dictionary's encoding, is correctly spelled.
    pub fn spell_raw(&self, word: &CStr) -> bool {
        unsafe { Hunspell_spell(self.engine.as_ptr(), word.as_ptr()) != 0 }
    }

    /// Generate spelling suggestions in the engine's ranking order.
    ///
    /// The returned list borrows engine-owned memory and releases it on drop.
    pub fn suggest_raw(&self, word: &CStr) -> Suggestions<'_> {
        let mut list: *mut *mut c_char = ptr::null_mut();
        let count = unsafe { Hunspell_suggest(self.engine.as_ptr(), &mut list, word.as_ptr()) };
        Suggestions {
            speller: self,
            list,
            count,
        }
    }

    /// Check a UTF-8 word. Words with an interior NUL are misspelled.
    pub fn spell(&self, word: &str) -> bool {
        CString::new(word).is_ok_and(|w| self.spell_raw(&w))
    }

    /// Suggestions for a UTF-8 word, decoded lossily for display.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let Ok(word) = CString::new(word) else {
            return Vec::new();
        };
        self.suggest_raw(&word)
            .iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }

    /// Path of the affix file this session was created from.
    pub fn affix_path(&self) -> &Path {
        &self.affix_path
    }

    /// Path of the word-list file this session was created from.
    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary_path
    }
}

impl Drop for Speller {
    fn drop(&mut self) {
        unsafe { Hunspell_destroy(self.engine.as_ptr()) };
    }
}

impl fmt::Debug for Speller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speller")
            .field("affix_path", &self.affix_path)
            .field("dictionary_path", &self.dictionary_path)
            .finish_non_exhaustive()
    }
}

/// Suggestion list owned by the engine, freed when dropped.
pub struct Suggestions<'a> {
    speller: &'a Speller,
    list: *mut *mut c_char,
    count: c_int,
}

impl Suggestions<'_> {
    /// Number of suggestions.
    pub fn len(&self) -> usize {
        if self.list.is_null() {
            return 0;
        }
        usize::try_from(self.count).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Suggestions as raw C strings, best first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CStr> + '_ {
        (0..self.len()).map(move |i| unsafe { CStr::from_ptr(*self.list.add(i)) })
    }
}

impl Drop for Suggestions<'_> {
    fn drop(&mut self) {
        if !self.list.is_null() {
            unsafe { Hunspell_free_list(self.speller.engine.as_ptr(), &mut self.list, self.count) };
        }
    }
}

#[cfg(unix)]
fn path_to_c(path: &Path) -> SpellerResult<CString> {
    use std::os::unix::ffi::OsStrExt;

    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| SpellerError::InteriorNul(path.to_path_buf()))
}

#[cfg(not(unix))]
fn path_to_c(path: &Path) -> SpellerResult<CString> {
    let s = path
        .to_str()
        .ok_or_else(|| SpellerError::NonUtf8Path(path.to_path_buf()))?;
    CString::new(s).map_err(|_| SpellerError::InteriorNul(path.to_path_buf()))
}

#[cfg(unix)]
fn path_from_c(path: &CStr) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(path.to_bytes()))
}

#[cfg(not(unix))]
fn path_from_c(path: &CStr) -> PathBuf {
    PathBuf::from(path.to_string_lossy().into_owned())
}
