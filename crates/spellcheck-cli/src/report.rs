// Line-oriented reports written by the CLI tools.
//
// Input is read as bytes, one word per line, so words for 8-bit dictionaries
// reach the engine unchanged and are echoed back unchanged.

use std::ffi::{CStr, CString};
use std::io::{self, BufRead, Write};

use log::warn;
use spellcheck_core::Speller;

/// Check every word of `input` and write one `C:`/`W:` line per word.
///
/// With `show_suggestions`, each misspelled word is followed by its
/// suggestions as `S:` lines.
pub fn check_lines(
    speller: &Speller,
    input: impl BufRead,
    out: &mut impl Write,
    show_suggestions: bool,
) -> io::Result<()> {
    for_each_word(input, |word| {
        if speller.spell_raw(word) {
            return write_line(out, b"C: ", word.to_bytes(), b"");
        }
        write_line(out, b"W: ", word.to_bytes(), b"")?;
        if show_suggestions {
            for suggestion in speller.suggest_raw(word).iter() {
                write_line(out, b"S: ", suggestion.to_bytes(), b"")?;
            }
        }
        Ok(())
    })
}

/// Write suggestions for every word of `input`, see [`suggest_word`].
pub fn suggest_lines(
    speller: &Speller,
    input: impl BufRead,
    max: Option<usize>,
    out: &mut impl Write,
) -> io::Result<()> {
    for_each_word(input, |word| suggest_word(speller, word, max, out))
}

/// Write suggestions for each word given on the command line.
pub fn suggest_words<I>(
    speller: &Speller,
    words: I,
    max: Option<usize>,
    out: &mut impl Write,
) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    for word in words {
        match CString::new(word.as_ref()) {
            Ok(word) => suggest_word(speller, &word, max, out)?,
            Err(_) => warn!("skipping word with a NUL byte"),
        }
    }
    Ok(())
}

/// Report one word: `word (correct)`, `word: (no suggestions)`, or `word:`
/// followed by at most `max` indented suggestions.
pub fn suggest_word(
    speller: &Speller,
    word: &CStr,
    max: Option<usize>,
    out: &mut impl Write,
) -> io::Result<()> {
    let word_bytes = word.to_bytes();
    if speller.spell_raw(word) {
        return write_line(out, b"", word_bytes, b" (correct)");
    }
    let suggestions = speller.suggest_raw(word);
    if suggestions.is_empty() {
        return write_line(out, b"", word_bytes, b": (no suggestions)");
    }
    write_line(out, b"", word_bytes, b":")?;
    for suggestion in suggestions.iter().take(max.unwrap_or(usize::MAX)) {
        write_line(out, b"  ", suggestion.to_bytes(), b"")?;
    }
    Ok(())
}

/// Split `-n N` / `--max-suggestions N` from positional words.
///
/// Other dash-prefixed arguments are dropped.
pub fn parse_max_suggestions(args: &[String]) -> Result<(Option<usize>, Vec<String>), String> {
    let mut max = None;
    let mut words = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "-n" || arg == "--max-suggestions" {
            let value = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?;
            let n: usize = value
                .parse()
                .map_err(|_| format!("invalid number for {arg}: {value}"))?;
            max = Some(n);
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    Ok((max, words))
}

fn for_each_word(
    input: impl BufRead,
    mut f: impl FnMut(&CStr) -> io::Result<()>,
) -> io::Result<()> {
    for line in input.split(b'\n') {
        let line = line?;
        let word = line.trim_ascii();
        if word.is_empty() {
            continue;
        }
        match CString::new(word) {
            Ok(word) => f(&word)?,
            Err(_) => warn!("skipping line with a NUL byte"),
        }
    }
    Ok(())
}

fn write_line(out: &mut impl Write, prefix: &[u8], text: &[u8], suffix: &[u8]) -> io::Result<()> {
    out.write_all(prefix)?;
    out.write_all(text)?;
    out.write_all(suffix)?;
    out.write_all(b"\n")
}
