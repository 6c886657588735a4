use crate::frontend::lexer::Spanned;
use crate::frontend::token::Token;

pub struct TokenDumper {
    pub color: bool,
}

impl Default for TokenDumper {
    fn default() -> Self {
        Self { color: true }
    }
}

impl TokenDumper {
    // ANSI colors
    const RESET: &'static str = "\x1b[0m";
    const GRN: &'static str = "\x1b[32m";
    const YEL: &'static str = "\x1b[33m";
    const CYN: &'static str = "\x1b[36m";
    const MAG: &'static str = "\x1b[35m";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn dump(&self, tokens: &[Spanned]) {
        for s in tokens {
            println!("{}", self.render_one(s));
        }
    }

    fn render_one(&self, s: &Spanned) -> String {
        let kind = self.kind(&s.token);
        let colr = if self.color { self.color(&s.token) } else { "" };
        let reset = if self.color { Self::RESET } else { "" };

        format!(
            "[{:02}:{:02}] {}{:<5} {} {:?}{}",
            s.span.line, s.span.col, colr, kind, s.token, s.token, reset
        )
    }

    fn kind(&self, t: &Token) -> &'static str {
        use Token::*;
        match t {
            Right | Left => "MOVE",
            Inc | Dec => "CELL",
            Output | Input => "IO",
            LoopOpen | LoopClose => "LOOP",
        }
    }

    fn color(&self, t: &Token) -> &'static str {
        use Token::*;
        match t {
            Right | Left => Self::YEL,
            Inc | Dec => Self::CYN,
            Output | Input => Self::GRN,
            LoopOpen | LoopClose => Self::MAG,
        }
    }
}
