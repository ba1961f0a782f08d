// Boundary-owned suggestion arrays.
//
// A `SuggestionArray` is a boxed slice of C string pointers. Each slot is a
// `CString` released with `into_raw`; the slice itself is released with
// `Box::into_raw`. The caller gets `(pointer, len)` and must hand back the
// same pair, which `from_raw` turns into an owner whose `Drop` frees every
// slot and then the slice.
//
// Strings are byte strings in the dictionary's encoding.
//
// Construction is all-or-nothing: every string is copied into a fallibly
// reserved buffer before any pointer escapes, so a failed copy drops the
// copies already made and no partially populated array is ever produced.

use std::collections::TryReserveError;
use std::ffi::{CString, c_char};
use std::ptr;

/// Error type for suggestion marshalling failures.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// A string buffer or the pointer array could not be allocated.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// A suggestion contained a NUL byte and cannot become a C string.
    #[error("suggestion contains an interior NUL byte")]
    InteriorNul,

    /// More suggestions than the C count type can represent.
    #[error("too many suggestions for the count type: {0}")]
    TooMany(usize),
}

/// An owned array of C strings with an explicit length.
pub struct SuggestionArray {
    slots: Box<[*mut c_char]>,
}

impl SuggestionArray {
    /// Copy each byte string into a freshly allocated C string, preserving
    /// order. Bytes are copied as-is; no encoding is assumed.
    pub fn from_bytes<I>(items: I) -> Result<Self, MarshalError>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: AsRef<[u8]>,
    {
        Self::marshal_with(items, copy_c_string)
    }

    fn marshal_with<I, F>(items: I, mut copy: F) -> Result<Self, MarshalError>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: AsRef<[u8]>,
        F: FnMut(&[u8]) -> Result<CString, MarshalError>,
    {
        let items = items.into_iter();
        let mut owned: Vec<CString> = Vec::new();
        owned.try_reserve_exact(items.len())?;
        for item in items {
            owned.push(copy(item.as_ref())?);
        }

        let mut slots: Vec<*mut c_char> = Vec::new();
        slots.try_reserve_exact(owned.len())?;
        slots.extend(owned.into_iter().map(CString::into_raw));

        Ok(Self { slots: slots.into_boxed_slice() })
    }

    /// Number of strings in the array.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the array holds no strings.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Release ownership to the caller.
    ///
    /// An empty array yields a null pointer and length 0.
    pub fn into_raw(self) -> (*mut *mut c_char, usize) {
        let len = self.slots.len();
        if len == 0 {
            return (ptr::null_mut(), 0);
        }
        let mut this = std::mem::ManuallyDrop::new(self);
        let slots = std::mem::take(&mut this.slots);
        (Box::into_raw(slots).cast::<*mut c_char>(), len)
    }

    /// Reclaim an array previously released by [`SuggestionArray::into_raw`].
    ///
    /// A null pointer or zero length yields an empty array.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `into_raw` with exactly this `len`, and must not
    /// have been reclaimed before. Slots may have been set to null by the
    /// caller; null slots are skipped on drop.
    pub unsafe fn from_raw(ptr: *mut *mut c_char, len: usize) -> Self {
        if ptr.is_null() || len == 0 {
            return Self { slots: Box::default() };
        }
        let slots = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len)) };
        Self { slots }
    }
}

impl Drop for SuggestionArray {
    fn drop(&mut self) {
        for &slot in self.slots.iter() {
            if !slot.is_null() {
                drop(unsafe { CString::from_raw(slot) });
            }
        }
    }
}

fn copy_c_string(bytes: &[u8]) -> Result<CString, MarshalError> {
    let mut buf: Vec<u8> = Vec::new();
    // Room for the terminator so `CString::new` does not reallocate.
    buf.try_reserve_exact(bytes.len() + 1)?;
    buf.extend_from_slice(bytes);
    CString::new(buf).map_err(|_| MarshalError::InteriorNul)
}
