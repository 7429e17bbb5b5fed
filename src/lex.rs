use std::io::{BufRead, Read};

use num_bigint::BigInt;

use crate::atom::{AtomId, AtomKind, AtomTable};
use crate::error::{LispError, LispResult};

/// A rune read from the input; None is end of input.
pub type Rune = Option<char>;

/// One lexical token. Named atoms are interned, so the identity of an
/// atom or constant token is its AtomId. Number tokens carry their value
/// and have no interned text.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Eof,
    Newline,
    Lpar,
    Rpar,
    Dot,
    Quote,
    Atom(AtomId),
    Const(AtomId),
    Number(BigInt),
    /// Any rune that starts no other token.
    Char(char),
}

impl Token {
    /// The user-facing text of the token, for error messages.
    pub fn text(&self, atoms: &AtomTable) -> String {
        match self {
            Token::Eof => "EOF".to_string(),
            Token::Newline => "\n".to_string(),
            Token::Lpar => "(".to_string(),
            Token::Rpar => ")".to_string(),
            Token::Dot => ".".to_string(),
            Token::Quote => "'".to_string(),
            Token::Atom(id) | Token::Const(id) => atoms.text(*id).to_string(),
            Token::Number(n) => n.to_string(),
            Token::Char(c) => c.to_string(),
        }
    }
}

/// The lexer turns a stream of runes into tokens. It reads runes one at a
/// time from any buffered reader, with a single rune of lookahead.
pub struct Lexer<'a> {
    rd: Box<dyn BufRead + 'a>,
    peeking: bool,
    peek_rune: Rune,
    last: Rune,
    buf: String,
}

fn is_space(r: char) -> bool {
    r == ' ' || r == '\t' || r == '\n' || r == '\r'
}

fn is_alphanum(r: char) -> bool {
    r == '_' || r.is_ascii_digit() || r.is_alphabetic()
}

impl<'a> Lexer<'a> {
    pub fn new(rd: Box<dyn BufRead + 'a>) -> Self {
        Lexer {
            rd,
            peeking: false,
            peek_rune: None,
            last: Some('\0'),
            buf: String::new(),
        }
    }

    /// Read the next rune from the underlying reader. Read failures are
    /// treated as end of input.
    fn next_rune(&mut self) -> Rune {
        let mut buf = [0u8; 4];
        match self.rd.read(&mut buf[..1]) {
            Ok(1) => {}
            _ => {
                self.last = None;
                return None;
            }
        }
        let b = buf[0];
        let ch = match utf8_len(b) {
            1 => b as char,
            0 => char::REPLACEMENT_CHARACTER,
            n => {
                if self.rd.read_exact(&mut buf[1..n]).is_err() {
                    char::REPLACEMENT_CHARACTER
                } else {
                    std::str::from_utf8(&buf[..n])
                        .ok()
                        .and_then(|s| s.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER)
                }
            }
        };
        self.last = Some(ch);
        Some(ch)
    }

    fn read(&mut self) -> Rune {
        if self.peeking {
            self.peeking = false;
            return self.peek_rune;
        }
        self.next_rune()
    }

    fn peek(&mut self) -> Rune {
        if self.peeking {
            return self.peek_rune;
        }
        let r = self.read();
        self.peeking = true;
        self.peek_rune = r;
        r
    }

    fn back(&mut self, r: Rune) {
        self.peeking = true;
        self.peek_rune = r;
    }

    /// Skip leading spaces and comments. The next non-space rune is
    /// returned unconsumed, except that a newline or end of input is
    /// consumed and returned.
    pub fn skip_space(&mut self) -> Rune {
        let mut comment = false;
        loop {
            let r = self.read();
            match r {
                None => return None,
                Some('\n') => return r,
                Some(';') => comment = true,
                Some(c) => {
                    if !comment && !is_space(c) {
                        self.back(r);
                        return r;
                    }
                }
            }
        }
    }

    /// Consume runes up through the next newline or end of input.
    /// Used for error recovery.
    pub fn skip_to_newline(&mut self) {
        while self.last != Some('\n') && self.last.is_some() {
            self.next_rune();
        }
        self.peeking = false;
    }

    /// Consume a comment, leaving the terminating newline to be lexed.
    fn skip_comment(&mut self) {
        loop {
            match self.read() {
                None => return,
                Some('\n') => {
                    self.back(Some('\n'));
                    return;
                }
                Some(_) => {}
            }
        }
    }

    /// Return the next token.
    pub fn next(&mut self, atoms: &mut AtomTable) -> LispResult<Token> {
        loop {
            let r = match self.read() {
                None => return Ok(Token::Eof),
                Some(r) => r,
            };
            match r {
                '\n' => return Ok(Token::Newline),
                c if is_space(c) => {}
                ';' => self.skip_comment(),
                '(' => return Ok(Token::Lpar),
                ')' => return Ok(Token::Rpar),
                '.' => return Ok(Token::Dot),
                '\'' => return Ok(Token::Quote),
                c @ ('+' | '-') => {
                    if !matches!(self.peek(), Some(p) if p.is_ascii_digit()) {
                        return Ok(Token::Char(c));
                    }
                    return self.number(c);
                }
                c if c.is_ascii_digit() => return self.number(c),
                c if c == '_' || c.is_alphabetic() => return self.alphanum(c, atoms),
                c => return Ok(Token::Char(c)),
            }
        }
    }

    /// Accumulate a token's text starting with r, as long as runes
    /// satisfy valid.
    fn accum(&mut self, r: char, valid: fn(char) -> bool) {
        self.buf.clear();
        self.buf.push(r);
        loop {
            match self.read() {
                None => return,
                Some(c) if valid(c) => self.buf.push(c),
                r => {
                    self.back(r);
                    return;
                }
            }
        }
    }

    /// Guarantee that the following rune separates this token from the next.
    fn end_token(&mut self) -> LispResult<()> {
        if let Some(r) = self.peek() {
            if is_alphanum(r) || (!is_space(r) && r != '(' && r != ')' && r != '.') {
                return Err(LispError::Lex(format!("invalid token after {}", self.buf)));
            }
        }
        Ok(())
    }

    /// Lex an integer literal. The sign, if any, has been read as r.
    fn number(&mut self, r: char) -> LispResult<Token> {
        self.accum(r, is_alphanum);
        self.end_token()?;
        match parse_int(&self.buf) {
            Some(n) => Ok(Token::Number(n)),
            None => Err(LispError::Lex(format!("bad number syntax: {}", self.buf))),
        }
    }

    /// Lex an identifier: underscore or letter, then underscores, letters,
    /// and digits.
    fn alphanum(&mut self, r: char, atoms: &mut AtomTable) -> LispResult<Token> {
        self.accum(r, is_alphanum);
        self.end_token()?;
        let id = atoms.intern(&self.buf);
        if atoms.kind(id) == AtomKind::Const {
            Ok(Token::Const(id))
        } else {
            Ok(Token::Atom(id))
        }
    }
}

/// The byte length of a UTF-8 sequence given its leading byte;
/// 0 for a stray continuation byte.
fn utf8_len(b: u8) -> usize {
    match b {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 0,
    }
}

/// Parse an integer literal with an optional sign and base prefix:
/// 0x/0X hex, 0o/0O octal, 0b/0B binary, a bare leading 0 octal,
/// otherwise decimal.
fn parse_int(text: &str) -> Option<BigInt> {
    let (neg, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (digits, radix) = if let Some(rest) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (rest, 16)
    } else if let Some(rest) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        (rest, 8)
    } else if let Some(rest) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (rest, 2)
    } else if body.len() > 1 && body.starts_with('0') {
        (&body[1..], 8)
    } else {
        (body, 10)
    };
    if digits.is_empty() {
        return None;
    }
    let n = BigInt::parse_bytes(digits.as_bytes(), radix)?;
    Some(if neg { -n } else { n })
}
