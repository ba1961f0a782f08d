// spellcheck-core: safe session type over the Hunspell engine.
//
// A `Speller` owns exactly one loaded dictionary (affix rules + word list).
// Spelling verdicts and suggestion ranking come from Hunspell unchanged;
// this crate only adapts paths and words into the shapes the engine accepts.

pub mod error;
pub mod speller;

pub use error::SpellerError;
pub use speller::{Speller, Suggestions};

/// Return the crate version (from Cargo.toml).
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
