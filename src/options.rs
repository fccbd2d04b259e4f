//! Options parsing and handling.

use itertools::Itertools;
use std::ffi::{OsStr, OsString};
use std::iter::Peekable;
use termcolor::ColorChoice;

use crate::argparse::{parse_args, Arg, ArgRef};
use crate::language::{languages, ParserDefinition};
use crate::output::OutputFormat;
use crate::scanner::{KindSet, ScanOptions};

/// Parsed options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Files and directories to scan. `-` is standard input.
    pub paths: Vec<OsString>,
    /// Scanner settings.
    pub scan: ScanOptions,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to color `xref` output.
    pub color: ColorChoice,
}

#[derive(Clone, Debug)]
enum OptionCommand {
    Kinds(String),
    Format(String),
    Comments(bool),
    Strings(bool),
    Cyrillic(bool),
    Legacy,
    Color(ColorChoice),
    ListKinds,
    ListMaps,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            paths: vec!["./".into()],
            scan: ScanOptions {
                kinds: ParserDefinition::e8script().default_kinds(),
                ..ScanOptions::default()
            },
            format: OutputFormat::default(),
            color: ColorChoice::Auto,
        }
    }
}

fn print_help(long: bool, status: i32) -> ! {
    let filename = std::env::args()
        .next()
        .unwrap_or_else(|| "e8tags".to_string());
    if !long {
        println!(
            "Usage: {} [OPTION]... [PATH]...
Pass --help for more information.",
            filename
        );
    } else {
        println!(
            r#"Usage: {} [OPTION]... [PATH]...
Print function and variable declarations found in E8Script/OneScript PATHs.
Directories are searched recursively, '-' reads standard input.

Options:
  -h, --help                 Display this message
  --format FORMAT            Output format: ctags (default), xref or json
  -x                         Same as --format xref
  --kinds LETTERS            Emit only the listed kinds (eg. 'fv')

  --[no-]comments            Skip comments (default: on)
  --[no-]strings             Skip string literals (default: on)
  --[no-]cyrillic            Allow identifiers to start with Cyrillic letters
                             (default: on)
  --legacy                   Same as --no-comments --no-strings --no-cyrillic

  --color, --no-color        Force or disable colors in xref output
  --list-kinds               List tag kinds and quit
  --list-maps                List languages and file extensions and quit
"#,
            filename
        );
    }
    std::process::exit(status)
}

fn print_kinds() -> ! {
    for kind in &ParserDefinition::e8script().kinds {
        println!(
            "{}  {:<10} {}{}",
            kind.letter,
            kind.kind,
            kind.description,
            if kind.enabled { "" } else { " [off]" }
        );
    }
    std::process::exit(0)
}

fn print_maps() -> ! {
    for (lang, def) in languages() {
        println!(
            "{:<10} {}",
            lang,
            def.extensions.iter().map(|e| format!("*.{}", e)).join(" ")
        );
    }
    std::process::exit(0)
}

fn get_whole_arg<I: Iterator<Item = Arg>>(iter: &mut Peekable<I>) -> Option<OsString> {
    let arg = iter.next()?;
    let index = arg.index();
    while iter.peek().map(|a| a.index()) == Some(index) {
        iter.next();
    }
    Some(arg.entire_match())
}

fn required_arg<I: Iterator<Item = Arg>>(iter: &mut Peekable<I>, flag: &str) -> String {
    match get_whole_arg(iter) {
        Some(arg) => arg.to_string_lossy().to_string(),
        None => {
            println!("Missing argument for --{}", flag);
            print_help(false, 1)
        }
    }
}

fn parse_options<S: AsRef<OsStr>>(args: &[S]) -> (Vec<OptionCommand>, Vec<OsString>) {
    let mut opts = Vec::new();
    let mut positionals = Vec::new();
    let parsed = parse_args(args.get(1..).unwrap_or_default());
    let mut arg_iter = parsed.into_iter().peekable();

    while let Some(arg) = arg_iter.next() {
        let cmd = match arg.as_ref() {
            ArgRef::Short('h') => print_help(false, 0),
            ArgRef::Long("help") => print_help(true, 0),

            ArgRef::Long("format") => OptionCommand::Format(required_arg(&mut arg_iter, "format")),
            ArgRef::Short('x') => OptionCommand::Format("xref".to_string()),
            ArgRef::Long("kinds") => OptionCommand::Kinds(required_arg(&mut arg_iter, "kinds")),

            ArgRef::Long("comments") => OptionCommand::Comments(true),
            ArgRef::Long("no-comments") => OptionCommand::Comments(false),
            ArgRef::Long("strings") => OptionCommand::Strings(true),
            ArgRef::Long("no-strings") => OptionCommand::Strings(false),
            ArgRef::Long("cyrillic") => OptionCommand::Cyrillic(true),
            ArgRef::Long("no-cyrillic") => OptionCommand::Cyrillic(false),
            ArgRef::Long("legacy") => OptionCommand::Legacy,

            ArgRef::Long("color") => OptionCommand::Color(ColorChoice::Always),
            ArgRef::Long("no-color") => OptionCommand::Color(ColorChoice::Never),

            ArgRef::Long("list-kinds") => OptionCommand::ListKinds,
            ArgRef::Long("list-maps") => OptionCommand::ListMaps,

            ArgRef::Positional => {
                positionals.push(arg.entire_match());
                continue;
            }

            ArgRef::Attached => {
                println!("Unexpected value: {}", arg.entire_match().to_string_lossy());
                print_help(false, 1)
            }
            ArgRef::Short(s) => {
                println!("Unknown flag: -{}", s);
                print_help(false, 1)
            }
            ArgRef::Long(s) => {
                println!("Unknown flag: --{}", s);
                print_help(false, 1)
            }
        };
        opts.push(cmd);
    }

    (opts, positionals)
}

fn parse_kinds(letters: &str) -> Result<KindSet, String> {
    letters
        .chars()
        .map(|c| {
            ParserDefinition::e8script()
                .kind_by_letter(c)
                .map(|k| k.kind)
                .ok_or_else(|| format!("Unknown kind: {}", c))
        })
        .collect()
}

impl Options {
    /// Parse options from `args`. The first element is the program name.
    ///
    /// ```
    /// use e8tags::options::Options;
    /// use e8tags::output::OutputFormat;
    /// let options = Options::new(&["e8tags", "--format=json", "--no-strings", "src"]);
    /// assert_eq!(options.format, OutputFormat::Json);
    /// assert!(!options.scan.skip_strings);
    /// assert!(options.scan.skip_comments);
    /// assert_eq!(options.paths, vec!["src"]);
    /// ```
    pub fn new<S: AsRef<OsStr>>(args: &[S]) -> Options {
        let (cmds, positionals) = parse_options(args);
        let mut opts = Options::default();

        for cmd in cmds {
            match cmd {
                OptionCommand::Kinds(letters) => match parse_kinds(&letters) {
                    Ok(kinds) => opts.scan.kinds = kinds,
                    Err(e) => {
                        println!("{}", e);
                        print_help(false, 1)
                    }
                },
                OptionCommand::Format(format) => match format.parse::<OutputFormat>() {
                    Ok(format) => opts.format = format,
                    Err(e) => {
                        println!("{}", e);
                        print_help(false, 1)
                    }
                },
                OptionCommand::Comments(on) => opts.scan.skip_comments = on,
                OptionCommand::Strings(on) => opts.scan.skip_strings = on,
                OptionCommand::Cyrillic(on) => opts.scan.cyrillic_identifiers = on,
                OptionCommand::Legacy => {
                    opts.scan = ScanOptions {
                        kinds: opts.scan.kinds,
                        ..ScanOptions::legacy()
                    }
                }
                OptionCommand::Color(choice) => opts.color = choice,
                OptionCommand::ListKinds => print_kinds(),
                OptionCommand::ListMaps => print_maps(),
            }
        }

        if !positionals.is_empty() {
            opts.paths = positionals;
        }

        opts
    }
}
