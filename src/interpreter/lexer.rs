use logos::Logos;

use crate::error::{ScriptError, ScriptResult};

/// Represents a lexical token in the source input.
///
/// The language has no grammar beyond "words separated by whitespace", so a
/// token is either one run of non-whitespace characters or a line break.
/// Quotes are not special at this level: `'a b'` lexes as two words.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\x0B\x0C]+")]
pub enum Token<'s> {
    /// A run of non-whitespace characters, such as `print`, `=` or `'hello`.
    #[regex(r"[^ \t\r\n\x0B\x0C]+", |lex| lex.slice())]
    Word(&'s str),
    /// `\n`
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting. Lines are counted from
/// 1 and incremented every time a newline is consumed.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// One line of source split into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'s> {
    /// The 1-based line number.
    pub number: usize,
    /// The whitespace-separated words of the line, in order. Empty for a blank
    /// line.
    pub words:  Vec<&'s str>,
}

/// Streams a program one line at a time.
///
/// Lexing is lazy: the next line is only tokenized when the caller asks for it,
/// so a statement runs before the lines after it have been looked at.
///
/// The empty remainder after a trailing `\n` is not reported as a line.
///
/// # Example
/// ```
/// use macaque::interpreter::lexer::Lines;
///
/// let lines: Vec<_> = Lines::new("var x = 1\n\nprint x\n").map(Result::unwrap)
///                                                        .collect();
///
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[0].words, ["var", "x", "=", "1"]);
/// assert!(lines[1].words.is_empty());
/// assert_eq!(lines[2].number, 3);
/// ```
pub struct Lines<'s> {
    lexer:    logos::Lexer<'s, Token<'s>>,
    finished: bool,
}

impl<'s> Lines<'s> {
    /// Creates a line stream over `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { lexer:    Token::lexer(source),
               finished: false, }
    }
}

impl<'s> Iterator for Lines<'s> {
    type Item = ScriptResult<SourceLine<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let number = self.lexer.extras.line;
        let mut words = Vec::new();

        loop {
            match self.lexer.next() {
                Some(Ok(Token::Word(word))) => words.push(word),
                Some(Ok(Token::NewLine)) => break,
                Some(Err(())) => {
                    self.finished = true;
                    return Some(Err(unrecognized(self.lexer.slice(), number)));
                },
                None => {
                    self.finished = true;
                    if words.is_empty() {
                        return None;
                    }
                    break;
                },
            }
        }

        Some(Ok(SourceLine { number, words }))
    }
}

fn unrecognized(slice: &str, line: usize) -> ScriptError {
    ScriptError::malformed(format!("unrecognized input {slice:?}"), line)
}
