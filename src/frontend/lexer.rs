use crate::frontend::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

/// Walks a byte slice once and yields the recognized instructions.
///
/// Lines and columns are 1-based and count raw bytes, so a multi-byte UTF-8
/// comment character advances the column by more than one.
pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Lexer {
            source,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn current(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.current();
        if byte == Some(b'\n') {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.pos += 1;
        byte
    }

    fn span(&self) -> Span {
        Span {
            line: self.line,
            col: self.col,
        }
    }

    pub fn tokenize(&mut self) -> Vec<Spanned> {
        self.by_ref().collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Spanned> {
        loop {
            let span = self.span();
            let byte = self.advance()?;
            if let Some(token) = Token::from_byte(byte) {
                return Some(Spanned { token, span });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Lexer::new(source.as_bytes()).map(|s| s.token).collect()
    }

    #[test]
    fn test_all_instructions() {
        let t = tokens("><+-.,[]");
        assert_eq!(
            t,
            vec![
                Token::Right,
                Token::Left,
                Token::Inc,
                Token::Dec,
                Token::Output,
                Token::Input,
                Token::LoopOpen,
                Token::LoopClose
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let t = tokens("add two: ++ then print .");
        assert_eq!(t, vec![Token::Inc, Token::Inc, Token::Output]);
    }

    #[test]
    fn test_only_comments() {
        assert!(tokens("hello world").is_empty());
    }

    #[test]
    fn test_spans_follow_lines() {
        let spanned = Lexer::new(b"a+\n  [x]").tokenize();
        let spans: Vec<(usize, usize)> = spanned
            .iter()
            .map(|s| (s.span.line, s.span.col))
            .collect();
        assert_eq!(spans, vec![(1, 2), (2, 3), (2, 5)]);
    }

    #[test]
    fn test_non_utf8_bytes() {
        let spanned = Lexer::new(&[0xff, b'+', 0xfe, b'-']).tokenize();
        assert_eq!(spanned.len(), 2);
        assert_eq!(spanned[0].span.col, 2);
        assert_eq!(spanned[1].token, Token::Dec);
    }
}
