//! Command-line surface
//!
//! Hand-rolled argument parsing for the four subcommands, and the file-level
//! operations behind them. The keyword conversion itself lives in
//! [`rewriter`](crate::rewriter); this module only reads, writes and reports.

use crate::config::APP_NAME;
use crate::keywords::{Dictionary, Direction, KeywordCategory};
use crate::rewriter::{Translation, Translator};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Convert a file in the given direction
    Convert {
        direction: Direction,
        input: PathBuf,
        output: PathBuf,
    },
    /// Print the dictionary, optionally restricted to one category
    Keywords { category: Option<KeywordCategory> },
    /// Open the side-by-side preview TUI
    Preview { input: PathBuf, direction: Direction },
    Help,
    Version,
}

/// Everything parsed from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of `-v` flags
    pub verbosity: usize,
    pub command: Command,
}

/// Command-line errors
#[derive(Debug)]
pub enum CliError {
    /// Missing or extra arguments
    Usage(String),

    /// First positional argument is not a known subcommand
    UnknownCommand(String),

    /// `keywords <category>` with an unknown category name
    UnknownCategory(String),

    /// Reading the input or writing the output failed
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(message) => write!(f, "{}", message),
            CliError::UnknownCommand(name) => write!(f, "Unknown command '{}'", name),
            CliError::UnknownCategory(name) => {
                let known: Vec<&str> = KeywordCategory::ALL.iter().map(|c| c.name()).collect();
                write!(
                    f,
                    "Unknown keyword category '{}' (expected one of: {})",
                    name,
                    known.join(", ")
                )
            }
            CliError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Usage text
pub fn usage() -> String {
    format!(
        "Usage: {name} [-v...] <command> [args]\n\
         \n\
         Commands:\n\
         \x20 translate, t <input> <output>   Translate C to C🥖\n\
         \x20 compile, c <input> <output>     Compile C🥖 back to C\n\
         \x20 keywords [category]             List the keyword dictionary\n\
         \x20 preview, p <input> [--compile]  Show input and output side by side\n\
         \n\
         Options:\n\
         \x20 -v, --verbose   Print more diagnostics (repeatable)\n\
         \x20 -h, --help      Show this message\n\
         \x20 -V, --version   Show the version",
        name = APP_NAME
    )
}

/// Parse the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut verbosity = 0;
    let mut compile_flag = false;
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(Options {
                    verbosity,
                    command: Command::Help,
                })
            }
            "-V" | "--version" => {
                return Ok(Options {
                    verbosity,
                    command: Command::Version,
                })
            }
            "--verbose" => verbosity += 1,
            "--compile" => compile_flag = true,
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                verbosity += flag.len() - 1;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::Usage(format!("Unknown option '{}'", flag)));
            }
            _ => positional.push(arg),
        }
    }

    let Some((name, rest)) = positional.split_first() else {
        return Err(CliError::Usage("No command given".to_string()));
    };

    let command = match name.as_str() {
        "translate" | "t" => convert_command(Direction::ToTarget, name, rest)?,
        "compile" | "c" => convert_command(Direction::ToOrigin, name, rest)?,
        "keywords" | "k" => match rest {
            [] => Command::Keywords { category: None },
            [category] => Command::Keywords {
                category: Some(
                    KeywordCategory::from_name(category)
                        .ok_or_else(|| CliError::UnknownCategory(category.clone()))?,
                ),
            },
            _ => return Err(CliError::Usage("keywords takes at most one category".to_string())),
        },
        "preview" | "p" => match rest {
            [input] => Command::Preview {
                input: PathBuf::from(input),
                direction: if compile_flag {
                    Direction::ToOrigin
                } else {
                    Direction::ToTarget
                },
            },
            _ => return Err(CliError::Usage("preview takes exactly one input file".to_string())),
        },
        "help" => Command::Help,
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };

    if compile_flag && !matches!(command, Command::Preview { .. }) {
        return Err(CliError::Usage("--compile only applies to preview".to_string()));
    }

    Ok(Options { verbosity, command })
}

fn convert_command(direction: Direction, name: &str, rest: &[String]) -> Result<Command, CliError> {
    match rest {
        [input, output] => Ok(Command::Convert {
            direction,
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        }),
        _ => Err(CliError::Usage(format!(
            "{} takes an input file and an output file",
            name
        ))),
    }
}

/// Read a whole source file.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `input`, convert it, and write the result to `output`.
pub fn convert_file(
    dictionary: &Dictionary,
    direction: Direction,
    input: &Path,
    output: &Path,
) -> Result<Translation, CliError> {
    let source = read_source(input)?;
    let translation = Translator::new(dictionary, direction).run(&source);

    fs::write(output, &translation.output).map_err(|source| CliError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(translation)
}

/// Render the dictionary as an aligned table, grouped by category.
pub fn keyword_listing(dictionary: &Dictionary, category: Option<KeywordCategory>) -> String {
    let categories: Vec<KeywordCategory> = match category {
        Some(c) => vec![c],
        None => KeywordCategory::ALL.to_vec(),
    };

    let width = dictionary
        .mappings()
        .iter()
        .map(|m| m.origin.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for category in categories {
        let mut entries = dictionary.by_category(category).peekable();
        if entries.peek().is_none() {
            continue;
        }

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", category));
        for m in entries {
            let pad = width - m.origin.chars().count();
            out.push_str(&format!("  {}{}  {}", m.origin, " ".repeat(pad), m.target));
            if let Some(description) = m.description {
                out.push_str(&format!("  ({})", description));
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::builtin;

    fn parse(args: &[&str]) -> Result<Options, CliError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_translate_and_compile() {
        let options = parse(&["translate", "in.c", "out.cb"]).unwrap();
        assert_eq!(options.verbosity, 0);
        assert_eq!(
            options.command,
            Command::Convert {
                direction: Direction::ToTarget,
                input: PathBuf::from("in.c"),
                output: PathBuf::from("out.cb"),
            }
        );

        let options = parse(&["-vv", "c", "in.cb", "out.c"]).unwrap();
        assert_eq!(options.verbosity, 2);
        assert!(matches!(
            options.command,
            Command::Convert {
                direction: Direction::ToOrigin,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_preview_and_keywords() {
        let options = parse(&["preview", "x.cb", "--compile", "--verbose"]).unwrap();
        assert_eq!(options.verbosity, 1);
        assert_eq!(
            options.command,
            Command::Preview {
                input: PathBuf::from("x.cb"),
                direction: Direction::ToOrigin,
            }
        );

        let options = parse(&["keywords", "storage"]).unwrap();
        assert_eq!(
            options.command,
            Command::Keywords {
                category: Some(KeywordCategory::Storage)
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(&[]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["translate", "a.c"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["frobnicate"]), Err(CliError::UnknownCommand(_))));
        assert!(matches!(parse(&["keywords", "loops"]), Err(CliError::UnknownCategory(_))));
        assert!(matches!(parse(&["-x", "t", "a", "b"]), Err(CliError::Usage(_))));
        assert!(matches!(
            parse(&["t", "a", "b", "--compile"]),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parse(&["t", "--help"]).unwrap().command, Command::Help);
        assert_eq!(parse(&["-V"]).unwrap().command, Command::Version);
    }

    #[test]
    fn test_keyword_listing() {
        let listing = keyword_listing(builtin(), Some(KeywordCategory::Constant));
        assert!(listing.starts_with("[constant]\n"));
        assert!(listing.contains("nullptr"));
        assert!(listing.contains("pointeurverslenéant"));
        assert!(!listing.contains("entier"));

        let full = keyword_listing(builtin(), None);
        assert_eq!(full.lines().filter(|l| l.starts_with("  ")).count(), builtin().mappings().len());
    }

    #[test]
    fn test_convert_file_round_trip() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("{}_convert_in_{}.c", APP_NAME, std::process::id()));
        let translated = dir.join(format!("{}_convert_mid_{}.cb", APP_NAME, std::process::id()));
        let compiled = dir.join(format!("{}_convert_out_{}.c", APP_NAME, std::process::id()));
        let source = "int pour(void) { return 0; }\n";
        fs::write(&input, source).unwrap();

        let translation = convert_file(builtin(), Direction::ToTarget, &input, &translated).unwrap();
        assert_eq!(translation.replaced, 3);
        assert_eq!(translation.collisions.len(), 1);
        assert_eq!(
            fs::read_to_string(&translated).unwrap(),
            "entier pour(néant) { retourner 0; }\n"
        );

        // The colliding identifier comes back as a keyword
        convert_file(builtin(), Direction::ToOrigin, &translated, &compiled).unwrap();
        assert_eq!(
            fs::read_to_string(&compiled).unwrap(),
            "int for(void) { return 0; }\n"
        );

        for path in [&input, &translated, &compiled] {
            fs::remove_file(path).unwrap();
        }
    }

    #[test]
    fn test_convert_file_reports_output_path() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("{}_unwritable_in_{}.c", APP_NAME, std::process::id()));
        fs::write(&input, "int x;").unwrap();
        let output = dir.join("no_such_dir").join("out.cb");

        let err = convert_file(builtin(), Direction::ToTarget, &input, &output).unwrap_err();
        fs::remove_file(&input).unwrap();
        match err {
            CliError::Io { path, .. } => assert_eq!(path, output),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source(Path::new("does/not/exist.c")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().starts_with("does/not/exist.c"));
    }
}
