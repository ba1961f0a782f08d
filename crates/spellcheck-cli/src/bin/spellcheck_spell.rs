// spellcheck-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   spellcheck-spell [-d DICT_PATH] [-l LANG] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Directory containing LANG.aff and LANG.dic
//   -l, --lang LANG        Dictionary name (default: $DICTIONARY or en_US)
//   -s, --suggest          Also print suggestions for misspelled words
//   -h, --help             Print help

use std::io::{self, Write};

const HELP: &str = "\
spellcheck-spell: Check spelling of words from stdin.

Usage: spellcheck-spell [-d DICT_PATH] [-l LANG] [OPTIONS]

Reads words from stdin (one per line). Prints:
  C: word    (correct)
  W: word    (misspelled)
  S: word    (suggestion, with --suggest)

Options:
  -d, --dict-path PATH   Directory containing LANG.aff and LANG.dic
  -l, --lang LANG        Dictionary name (default: $DICTIONARY or en_US)
  -s, --suggest          Also print suggestions for misspelled words
  -h, --help             Print this help";

fn main() {
    spellcheck_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spellcheck_cli::parse_dict_path(&args);
    let (lang, args) = spellcheck_cli::parse_lang(&args);

    if spellcheck_cli::wants_help(&args) {
        println!("{HELP}");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let speller = spellcheck_cli::load_speller(dict_path.as_deref(), lang.as_deref())
        .unwrap_or_else(|e| spellcheck_cli::fatal(&e));

    let mut out = io::BufWriter::new(io::stdout().lock());
    spellcheck_cli::report::check_lines(&speller, io::stdin().lock(), &mut out, show_suggestions)
        .and_then(|()| out.flush())
        .unwrap_or_else(|e| spellcheck_cli::fatal(&format!("I/O error: {e}")));
}
