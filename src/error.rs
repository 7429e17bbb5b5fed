use std::fmt;

/// Errors raised by the interpreter. Every error unwinds to the read loop,
/// which reports it and resumes; none is recoverable mid-evaluation.
#[derive(Debug, Clone)]
pub enum LispError {
    /// Token-level trouble: bad number syntax, bad token boundary.
    Lex(String),

    /// Structural errors from the recursive-descent parser.
    Parse(String),

    /// Binding violations: rebinding a constant, malformed defn.
    Binding(String),

    /// Application failures: undefined function, arity mismatch,
    /// applying something that is not a function.
    Apply(String),

    /// Evaluation errors: cond exhausted, division by zero, a number
    /// expected where none was given.
    Eval(String),

    /// The configured maximum call depth was exceeded.
    StackTooDeep,

    /// End of input. Not a failure: tells the read loop to finish.
    Eof,
}

impl fmt::Display for LispError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LispError::Lex(msg)
            | LispError::Parse(msg)
            | LispError::Binding(msg)
            | LispError::Apply(msg)
            | LispError::Eval(msg) => write!(f, "{}", msg),
            LispError::StackTooDeep => write!(f, "stack too deep"),
            LispError::Eof => write!(f, "eof"),
        }
    }
}

impl std::error::Error for LispError {}

pub type LispResult<T> = Result<T, LispError>;
