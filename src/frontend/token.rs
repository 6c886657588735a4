#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // Pointer movement
    Right, // >
    Left,  // <

    // Cell arithmetic
    Inc, // +
    Dec, // -

    // I/O
    Output, // .
    Input,  // ,

    // Loops
    LoopOpen,  // [
    LoopClose, // ]
}

impl Token {
    /// Map a source byte to its instruction. Every other byte is a comment.
    pub fn from_byte(byte: u8) -> Option<Token> {
        use Token::*;
        Some(match byte {
            b'>' => Right,
            b'<' => Left,
            b'+' => Inc,
            b'-' => Dec,
            b'.' => Output,
            b',' => Input,
            b'[' => LoopOpen,
            b']' => LoopClose,
            _ => return None,
        })
    }

    pub fn as_byte(self) -> u8 {
        use Token::*;
        match self {
            Right => b'>',
            Left => b'<',
            Inc => b'+',
            Dec => b'-',
            Output => b'.',
            Input => b',',
            LoopOpen => b'[',
            LoopClose => b']',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}
