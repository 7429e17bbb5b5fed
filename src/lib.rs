//! An interpreter for the language defined on page 13 of the LISP 1.5
//! Programmer's Manual (McCarthy, Abrahams, Edwards, Hart, and Levin,
//! MIT, 1962): eval and apply over S-expressions with a fixed set of
//! elementary functions.
//!
//! The pieces fit together the way the book describes them. The lexer
//! turns runes into tokens, interning every named atom so that identity
//! comparison is a handle comparison. The parser builds expressions from
//! either explicit dotted pairs or list notation with quote sugar. The
//! evaluator is the page-13 mutual recursion of apply, eval, evcon, and
//! evlis, with the book's association list replaced by a stack of frames
//! whose bottom frame holds the globals and the definitions created by
//! defn. Numbers are arbitrary-precision integers.
//!
//! Departures from a modern Lisp are deliberate: no assignment, no
//! sequencing, no macros, no closures beyond capture of the global
//! frame, and strictly two-element cond clauses.

pub mod atom;
pub mod elementary;
pub mod error;
pub mod eval;
pub mod expr;
pub mod lex;
pub mod math;
pub mod parse;
pub mod print;

pub use error::{LispError, LispResult};
pub use eval::Context;
pub use parse::Parser;
