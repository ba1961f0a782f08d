// spellcheck-cli: shared utilities for CLI tools.

pub mod report;

use std::path::{Path, PathBuf};
use std::process;

use log::debug;
use spellcheck_core::{Speller, SpellerError};

/// Language used when neither `--lang` nor `DICTIONARY` is set.
const DEFAULT_LANG: &str = "en_US";

/// Environment variable controlling log output (env_logger filter syntax).
const LOG_ENV: &str = "SPELLCHECK_LOG";

/// Initialize logging for a CLI binary. Defaults to warnings only.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();
}

/// Search for `<lang>.aff` + `<lang>.dic` and open a Speller.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. each entry of the colon-separated `DICPATH` environment variable
/// 3. `~/.hunspell`
/// 4. `/usr/share/hunspell`, `/usr/share/myspell`, `/usr/share/myspell/dicts`
/// 5. `~/Library/Spelling` (macOS)
/// 6. Current working directory
pub fn load_speller(dict_path: Option<&str>, lang: Option<&str>) -> Result<Speller, String> {
    let lang = resolve_lang(lang);
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        if let Some((aff, dic)) = dictionary_files(dir, &lang) {
            debug!("using dictionary {}", dic.display());
            return Speller::open(&aff, &dic)
                .map_err(|e: SpellerError| format!("failed to open dictionary: {e}"));
        }
    }

    Err(format!(
        "could not find {lang}.aff and {lang}.dic in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Pick the dictionary language: explicit value, `DICTIONARY`, then `en_US`.
fn resolve_lang(lang: Option<&str>) -> String {
    if let Some(l) = lang {
        return l.to_string();
    }
    match std::env::var("DICTIONARY") {
        Ok(l) if !l.is_empty() => l,
        _ => DEFAULT_LANG.to_string(),
    }
}

/// Return the affix and word-list paths if both exist in `dir`.
fn dictionary_files(dir: &Path, lang: &str) -> Option<(PathBuf, PathBuf)> {
    let aff = dir.join(format!("{lang}.aff"));
    let dic = dir.join(format!("{lang}.dic"));
    (aff.is_file() && dic.is_file()).then_some((aff, dic))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("DICPATH") {
        paths.extend(
            env_path
                .split(':')
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        );
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".hunspell"));
    }

    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell"));
    paths.push(PathBuf::from("/usr/share/myspell/dicts"));

    #[cfg(target_os = "macos")]
    if let Some(home) = home_dir() {
        paths.push(home.join("Library").join("Spelling"));
    }

    // Fallback for local development
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--dict-path", "-d")
}

/// Parse a `--lang=LANG` or `-l LANG` argument from command line args.
///
/// Returns `(lang, remaining_args)`.
pub fn parse_lang(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--lang", "-l")
}

fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let long_eq = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match args.get(i + 1) {
                Some(next) => {
                    value = Some(next.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
