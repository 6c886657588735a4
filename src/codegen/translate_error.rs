use crate::frontend::Span;

/// A structural error found while translating in strict mode.
///
/// Positions are the 1-based spans reported by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A `]` with no open loop to close
    UnmatchedClose { line: usize, col: usize },
    /// A `[` still open at end of input (the innermost one is reported)
    UnclosedOpen {
        line: usize,
        col: usize,
        open_loops: usize,
    },
}

impl TranslateError {
    pub fn unmatched_close(span: Span) -> Self {
        TranslateError::UnmatchedClose {
            line: span.line,
            col: span.col,
        }
    }

    pub fn unclosed_open(span: Span, open_loops: usize) -> Self {
        TranslateError::UnclosedOpen {
            line: span.line,
            col: span.col,
            open_loops,
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            TranslateError::UnmatchedClose { .. } => {
                "remove the extra ']' or add a matching '[' before it"
            }
            TranslateError::UnclosedOpen { .. } => "add a matching ']' after the loop body",
        }
    }
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::UnmatchedClose { line, col } => {
                write!(f, "{}:{}: unmatched ']'", line, col)?;
            }
            TranslateError::UnclosedOpen {
                line,
                col,
                open_loops,
            } => {
                write!(f, "{}:{}: unclosed '['", line, col)?;
                if *open_loops > 1 {
                    write!(f, " ({} loops left open)", open_loops)?;
                }
            }
        }
        write!(f, "\n  hint: {}", self.hint())
    }
}

impl std::error::Error for TranslateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unmatched_close() {
        let err = TranslateError::unmatched_close(Span { line: 3, col: 7 });
        assert_eq!(
            err.to_string(),
            "3:7: unmatched ']'\n  hint: remove the extra ']' or add a matching '[' before it"
        );
    }

    #[test]
    fn test_display_unclosed_open_counts_loops() {
        let err = TranslateError::unclosed_open(Span { line: 1, col: 2 }, 3);
        assert!(err.to_string().starts_with("1:2: unclosed '[' (3 loops left open)"));

        let single = TranslateError::unclosed_open(Span { line: 1, col: 1 }, 1);
        assert!(single.to_string().starts_with("1:1: unclosed '['\n"));
    }
}
