use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    codegen::translate_error::TranslateError,
    frontend::{Lexer, Span, Spanned, Token},
};

/// Conventional tape length of the generated program, in cells.
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

/// Depth of the statements directly inside the generated `main` body.
pub const BASE_DEPTH: isize = 1;

/// One level of indentation in the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Indent {
    Tab,
    Spaces(usize),
}

impl Indent {
    fn unit(self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(n),
        }
    }
}

impl std::str::FromStr for Indent {
    type Err = String;

    /// Accepts `tab` or a number of spaces (`0` disables indentation).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") {
            return Ok(Indent::Tab);
        }
        s.parse::<usize>()
            .map(Indent::Spaces)
            .map_err(|_| format!("invalid indent '{}': expected 'tab' or a number of spaces", s))
    }
}

impl TryFrom<String> for Indent {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Indent> for String {
    fn from(indent: Indent) -> Self {
        match indent {
            Indent::Tab => "tab".to_string(),
            Indent::Spaces(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOptions {
    pub tape_size: usize,
    pub indent: Indent,
    /// Reject unbalanced loop delimiters instead of emitting them as-is.
    pub strict: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            indent: Indent::Tab,
            strict: false,
        }
    }
}

/// The generated C source plus the nesting depth it ended at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub code: String,
    pub final_depth: isize,
}

impl Translation {
    pub fn is_balanced(&self) -> bool {
        self.final_depth == BASE_DEPTH
    }
}

/// Header declaring the tape and the pointer, opening `main`.
pub fn prologue(options: &TranslateOptions) -> String {
    let i = options.indent.unit();
    format!(
        "#include <stdio.h>\n\
         #include <stdlib.h>\n\
         \n\
         int main() {{\n\
         {i}char* tape = calloc({}, sizeof(char));\n\
         {i}char* p = tape;\n",
        options.tape_size
    )
}

/// Trailer releasing the tape and closing `main`. No trailing newline.
pub fn epilogue(options: &TranslateOptions) -> String {
    let i = options.indent.unit();
    format!("{i}free(tape);\n}}")
}

fn statement(token: Token) -> &'static str {
    use Token::*;
    match token {
        Right => "++p;",
        Left => "--p;",
        Inc => "++*p;",
        Dec => "--*p;",
        Output => "putchar(*p);",
        Input => "*p = getchar();",
        LoopOpen => "while (*p) {",
        LoopClose => "}",
    }
}

/// Single-pass Brainfuck to C translator.
///
/// A translator is consumed by [`Translator::translate`], so the depth
/// counter and the output buffer never outlive one translation.
pub struct Translator {
    options: TranslateOptions,
    unit: String,

    /// Generated text, append-only
    out: String,

    /// Current block level; `]` may drive it below zero in permissive mode
    depth: isize,

    /// Spans of the loops opened and not yet closed
    open_loops: Vec<Span>,

    lines: usize,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            unit: options.indent.unit(),
            options,
            out: String::new(),
            depth: BASE_DEPTH,
            open_loops: Vec::new(),
            lines: 0,
        }
    }

    pub fn translate(mut self, source: &[u8]) -> Result<Translation, TranslateError> {
        self.out.push_str(&prologue(&self.options));

        for spanned in Lexer::new(source) {
            self.emit(spanned)?;
        }

        if self.options.strict {
            if let Some(span) = self.open_loops.last() {
                return Err(TranslateError::unclosed_open(*span, self.open_loops.len()));
            }
        }

        self.out.push_str(&epilogue(&self.options));

        debug!(
            "translated {} bytes into {} statements (final depth {})",
            source.len(),
            self.lines,
            self.depth
        );

        Ok(Translation {
            code: self.out,
            final_depth: self.depth,
        })
    }

    fn emit(&mut self, spanned: Spanned) -> Result<(), TranslateError> {
        match spanned.token {
            Token::LoopOpen => {
                self.push_line(statement(spanned.token));
                self.open_loops.push(spanned.span);
                self.depth += 1;
            }
            Token::LoopClose => {
                if self.open_loops.pop().is_none() && self.options.strict {
                    return Err(TranslateError::unmatched_close(spanned.span));
                }
                // The closer lines up with its opener, one level above the body.
                self.depth -= 1;
                self.push_line(statement(spanned.token));
            }
            token => self.push_line(statement(token)),
        }
        Ok(())
    }

    fn push_line(&mut self, stmt: &str) {
        for _ in 0..self.depth.max(0) {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(stmt);
        self.out.push('\n');
        self.lines += 1;
    }
}
