//! Declaration scanner.
//!
//! A single pass over the source, one line at a time. A small state machine
//! tracks whether the cursor is inside a function body so that variables get
//! the right scope. Nothing is ever rejected: unexpected input is skipped a
//! byte at a time.

use log::{debug, trace};

use crate::cursor::LineCursor;
use crate::keywords::Keyword;
use crate::tag::{Scope, TagKind, TagRecord};

/// Supplies source lines to the scanner. `None` means end of input.
pub trait LineSource {
    /// Get the next line, without its line terminator.
    fn next_line(&mut self) -> Option<Vec<u8>>;
}

impl<I> LineSource for I
where
    I: Iterator,
    I::Item: Into<Vec<u8>>,
{
    fn next_line(&mut self) -> Option<Vec<u8>> {
        self.next().map(Into::into)
    }
}

/// Receives tags as soon as they are recognized.
pub trait TagSink {
    /// Take ownership of `tag`.
    fn accept(&mut self, tag: TagRecord);
}

impl TagSink for Vec<TagRecord> {
    fn accept(&mut self, tag: TagRecord) {
        self.push(tag);
    }
}

/// Set of enabled tag kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindSet {
    functions: bool,
    variables: bool,
}

impl KindSet {
    /// Every kind enabled.
    pub fn all() -> KindSet {
        KindSet {
            functions: true,
            variables: true,
        }
    }

    /// No kinds enabled.
    pub fn none() -> KindSet {
        KindSet {
            functions: false,
            variables: false,
        }
    }

    /// Enable or disable `kind`.
    pub fn set(&mut self, kind: TagKind, enabled: bool) {
        match kind {
            TagKind::Function => self.functions = enabled,
            TagKind::Variable => self.variables = enabled,
        }
    }

    /// Is `kind` enabled?
    pub fn contains(&self, kind: TagKind) -> bool {
        match kind {
            TagKind::Function => self.functions,
            TagKind::Variable => self.variables,
        }
    }
}

impl Default for KindSet {
    fn default() -> KindSet {
        KindSet::all()
    }
}

impl FromIterator<TagKind> for KindSet {
    fn from_iter<T: IntoIterator<Item = TagKind>>(iter: T) -> KindSet {
        let mut set = KindSet::none();
        for kind in iter {
            set.set(kind, true);
        }
        set
    }
}

/// Scanner settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Skip `//` and `/* */` comments.
    pub skip_comments: bool,
    /// Skip `"..."` string literals, which may span lines.
    pub skip_strings: bool,
    /// Let Cyrillic letters start identifiers.
    pub cyrillic_identifiers: bool,
    /// Tag kinds to emit.
    pub kinds: KindSet,
}

impl Default for ScanOptions {
    fn default() -> ScanOptions {
        ScanOptions {
            skip_comments: true,
            skip_strings: true,
            cyrillic_identifiers: true,
            kinds: KindSet::all(),
        }
    }
}

impl ScanOptions {
    /// Plain keyword scanning: comments and strings are scanned like code and
    /// only ASCII letters start identifiers.
    pub fn legacy() -> ScanOptions {
        ScanOptions {
            skip_comments: false,
            skip_strings: false,
            cyrillic_identifiers: false,
            kinds: KindSet::all(),
        }
    }
}

/// Parse state, persisting across lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Top level.
    Default,
    /// Inside a function or procedure body.
    InFunctionBody,
    /// After `var`, waiting for a name.
    VarList,
    /// After a variable name, waiting for `,`.
    VarDone,
    /// After `function`, waiting for its name.
    SubName,
}

/// Lexical context that spans lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lexical {
    Code,
    BlockComment,
    String,
}

struct Scanner<'a, T: TagSink + ?Sized> {
    options: &'a ScanOptions,
    sink: &'a mut T,
    state: State,
    lexical: Lexical,
    /// Name of the function whose body we are in.
    enclosing: Option<String>,
    line_number: usize,
}

/// Scan every line of `source`, sending tags to `sink`.
///
/// ```
/// use e8tags::scanner::{scan, ScanOptions};
/// use e8tags::tag::TagKind;
///
/// let source = "Перем Счетчик;\nФункция Foo()\n  Перем x;\nКонецФункции";
/// let mut tags = Vec::new();
/// scan(source.lines(), &mut tags, &ScanOptions::default());
/// let names: Vec<_> = tags.iter().map(|t| (t.name.as_str(), t.kind)).collect();
/// assert_eq!(
///     names,
///     vec![
///         ("Счетчик", TagKind::Variable),
///         ("Foo", TagKind::Function),
///         ("x", TagKind::Variable),
///     ]
/// );
/// ```
pub fn scan<S, T>(mut source: S, sink: &mut T, options: &ScanOptions)
where
    S: LineSource,
    T: TagSink + ?Sized,
{
    let mut scanner = Scanner {
        options,
        sink,
        state: State::Default,
        lexical: Lexical::Code,
        enclosing: None,
        line_number: 0,
    };
    while let Some(line) = source.next_line() {
        scanner.line_number += 1;
        scanner.scan_line(LineCursor::new(&line));
    }
    if let Some(name) = &scanner.enclosing {
        debug!("End of input inside body of {}", name);
    }
}

impl<T: TagSink + ?Sized> Scanner<'_, T> {
    fn scan_line(&mut self, mut cursor: LineCursor) {
        while !cursor.at_end() {
            match self.lexical {
                Lexical::BlockComment => {
                    if cursor.skip_past(b"*/") {
                        self.lexical = Lexical::Code;
                    }
                    continue;
                }
                Lexical::String => {
                    if cursor.skip_past(b"\"") {
                        self.lexical = Lexical::Code;
                    }
                    continue;
                }
                Lexical::Code => {}
            }

            cursor.skip_whitespace();
            let Some(c) = cursor.peek() else {
                break;
            };

            if self.options.skip_comments {
                if cursor.starts_with(b"//") {
                    cursor.skip_line();
                    continue;
                }
                if cursor.starts_with(b"/*") {
                    cursor.advance(2);
                    self.lexical = Lexical::BlockComment;
                    continue;
                }
            }
            if self.options.skip_strings && c == b'"' {
                cursor.advance(1);
                self.lexical = Lexical::String;
                continue;
            }

            if c == b';' {
                self.set_state(if self.enclosing.is_some() {
                    State::InFunctionBody
                } else {
                    State::Default
                });
                cursor.advance(1);
                continue;
            }

            self.step(&mut cursor);
        }
    }

    /// Run one transition at the cursor. Always consumes at least one byte.
    fn step(&mut self, cursor: &mut LineCursor) {
        match self.state {
            State::Default => {
                if self.keyword(cursor, Keyword::Var) {
                    self.set_state(State::VarList);
                } else if self.keyword(cursor, Keyword::Sub) {
                    self.set_state(State::SubName);
                } else {
                    cursor.advance(1);
                }
            }
            State::InFunctionBody => {
                if self.keyword(cursor, Keyword::Var) {
                    self.set_state(State::VarList);
                } else if self.keyword(cursor, Keyword::EndSub) {
                    if let Some(name) = self.enclosing.take() {
                        trace!("End of {} at line {}", name, self.line_number);
                    }
                    self.set_state(State::Default);
                } else {
                    cursor.advance(1);
                }
            }
            State::SubName => {
                if cursor.at_token_start(self.options.cyrillic_identifiers) {
                    let name = String::from_utf8_lossy(cursor.take_token()).into_owned();
                    self.emit(TagRecord::new(name.clone(), TagKind::Function, self.line_number));
                    self.enclosing = Some(name);
                    self.set_state(State::InFunctionBody);
                } else {
                    cursor.advance(1);
                }
            }
            State::VarList => {
                if cursor.at_token_start(self.options.cyrillic_identifiers) {
                    let name = String::from_utf8_lossy(cursor.take_token()).into_owned();
                    let scope = self.enclosing.as_ref().map(Scope::function);
                    self.emit(
                        TagRecord::new(name, TagKind::Variable, self.line_number).with_scope(scope),
                    );
                    self.set_state(State::VarDone);
                } else {
                    cursor.advance(1);
                }
            }
            State::VarDone => {
                if cursor.peek() == Some(b',') {
                    self.set_state(State::VarList);
                }
                cursor.advance(1);
            }
        }
    }

    /// Consume `keyword` if it starts at the cursor.
    fn keyword(&self, cursor: &mut LineCursor, keyword: Keyword) -> bool {
        if !cursor.at_word_start() {
            return false;
        }
        match keyword.find(cursor) {
            Some(len) => {
                trace!(
                    "{:?} at {}:{}",
                    keyword,
                    self.line_number,
                    cursor.pos() + 1
                );
                cursor.advance(len);
                true
            }
            None => false,
        }
    }

    fn set_state(&mut self, state: State) {
        if self.state != state {
            trace!("{:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    fn emit(&mut self, tag: TagRecord) {
        if tag.name.is_empty() || !self.options.kinds.contains(tag.kind) {
            return;
        }
        debug!("Tag: {:?}", tag);
        self.sink.accept(tag);
    }
}
