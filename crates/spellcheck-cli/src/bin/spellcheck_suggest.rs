// spellcheck-suggest: Generate spelling suggestions.
//
// Prints suggestions for misspelled words given as arguments, or read from
// stdin (one per line). Correctly spelled words are reported as such.
//
// Usage:
//   spellcheck-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH      Directory containing LANG.aff and LANG.dic
//   -l, --lang LANG           Dictionary name (default: $DICTIONARY or en_US)
//   -n, --max-suggestions N   Print at most N suggestions per word
//   -h, --help                Print help

use std::io::{self, Write};

use spellcheck_cli::report;

const HELP: &str = "\
spellcheck-suggest: Generate spelling suggestions.

Usage: spellcheck-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]

If WORD arguments are given, suggests for each word.
Otherwise reads words from stdin (one per line).

Options:
  -d, --dict-path PATH     Directory containing LANG.aff and LANG.dic
  -l, --lang LANG          Dictionary name (default: $DICTIONARY or en_US)
  -n, --max-suggestions N  Print at most N suggestions per word
  -h, --help               Print this help";

fn main() {
    spellcheck_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spellcheck_cli::parse_dict_path(&args);
    let (lang, args) = spellcheck_cli::parse_lang(&args);

    if spellcheck_cli::wants_help(&args) {
        println!("{HELP}");
        return;
    }

    let (max, words) =
        report::parse_max_suggestions(&args).unwrap_or_else(|e| spellcheck_cli::fatal(&e));

    let speller = spellcheck_cli::load_speller(dict_path.as_deref(), lang.as_deref())
        .unwrap_or_else(|e| spellcheck_cli::fatal(&e));

    let mut out = io::BufWriter::new(io::stdout().lock());
    let written = if words.is_empty() {
        report::suggest_lines(&speller, io::stdin().lock(), max, &mut out)
    } else {
        report::suggest_words(&speller, &words, max, &mut out)
    };
    written
        .and_then(|()| out.flush())
        .unwrap_or_else(|e| spellcheck_cli::fatal(&format!("I/O error: {e}")));
}
