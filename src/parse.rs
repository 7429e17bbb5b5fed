use std::io::BufRead;

use crate::atom::{tok, AtomTable};
use crate::error::{LispError, LispResult};
use crate::expr::{cons, Expr};
use crate::lex::{Lexer, Rune, Token};

/// The recursive-descent parser. It owns the lexer and therefore the
/// input stream; the atom table is supplied per call so that the parser
/// and the evaluation context can share one table.
pub struct Parser<'a> {
    lex: Lexer<'a>,
    peek_tok: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(rd: Box<dyn BufRead + 'a>) -> Self {
        Parser {
            lex: Lexer::new(rd),
            peek_tok: None,
        }
    }

    /// Skip leading spaces, returning the rune that follows. A newline or
    /// end of input is consumed and returned.
    pub fn skip_space(&mut self) -> Rune {
        self.lex.skip_space()
    }

    /// Advance the input past the next newline.
    pub fn skip_to_end_of_line(&mut self) {
        self.lex.skip_to_newline();
    }

    /// Fetch the next significant token. Newline tokens separate nothing
    /// at this level and are skipped.
    fn next(&mut self, atoms: &mut AtomTable) -> LispResult<Token> {
        if let Some(tok) = self.peek_tok.take() {
            return Ok(tok);
        }
        loop {
            match self.lex.next(atoms)? {
                Token::Newline => continue,
                tok => return Ok(tok),
            }
        }
    }

    fn back(&mut self, tok: Token) {
        self.peek_tok = Some(tok);
    }

    /// Parse an S-Expression.
    /// SExpr:
    ///	Atom
    ///	Lpar SExpr Dot SExpr Rpar
    pub fn sexpr(&mut self, atoms: &mut AtomTable) -> LispResult<Expr> {
        let tok = self.next(atoms)?;
        match tok {
            Token::Eof => Err(LispError::Eof),
            Token::Quote => self.quote(atoms),
            Token::Atom(_) | Token::Const(_) | Token::Number(_) => Ok(atom_expr(tok)),
            Token::Lpar => {
                let car = self.sexpr(atoms)?;
                let dot = self.next(atoms)?;
                if dot != Token::Dot {
                    return Err(LispError::Parse(format!(
                        "expected dot, found {:?}",
                        dot.text(atoms)
                    )));
                }
                let cdr = self.sexpr(atoms)?;
                let rpar = self.next(atoms)?;
                if rpar != Token::Rpar {
                    return Err(LispError::Parse(format!(
                        "expected ), found {:?}",
                        rpar.text(atoms)
                    )));
                }
                Ok(cons(car, cdr))
            }
            tok => Err(LispError::Parse(format!(
                "bad token in SExpr: {:?}",
                tok.text(atoms)
            ))),
        }
    }

    /// Parse a quoted expression. The leading quote has been consumed.
    /// 'X becomes (quote X).
    fn quote(&mut self, atoms: &mut AtomTable) -> LispResult<Expr> {
        let quoted = self.list(atoms)?;
        Ok(cons(Expr::Atom(tok::QUOTE), cons(quoted, Expr::Nil)))
    }

    /// Parse a list expression.
    pub fn list(&mut self, atoms: &mut AtomTable) -> LispResult<Expr> {
        let tok = self.next(atoms)?;
        match tok {
            Token::Eof => Err(LispError::Eof),
            Token::Quote => self.quote(atoms),
            Token::Atom(_) | Token::Const(_) | Token::Number(_) => Ok(atom_expr(tok)),
            Token::Lpar => {
                let expr = self.lpar_list(atoms)?;
                let tok = self.next(atoms)?;
                if tok == Token::Rpar {
                    Ok(expr)
                } else {
                    Err(LispError::Parse(format!(
                        "bad token in list: {:?}",
                        tok.text(atoms)
                    )))
                }
            }
            tok => Err(LispError::Parse(format!(
                "bad token in list: {:?}",
                tok.text(atoms)
            ))),
        }
    }

    /// Parse the innards of a list, up to the closing paren.
    /// The opening paren has been consumed.
    fn lpar_list(&mut self, atoms: &mut AtomTable) -> LispResult<Expr> {
        let tok = self.next(atoms)?;
        match tok {
            Token::Eof => Err(LispError::Eof),
            Token::Quote => {
                let head = self.quote(atoms)?;
                Ok(cons(head, self.lpar_list(atoms)?))
            }
            Token::Atom(_) | Token::Const(_) | Token::Number(_) => {
                let head = atom_expr(tok);
                Ok(cons(head, self.lpar_list(atoms)?))
            }
            Token::Dot => self.list(atoms),
            Token::Lpar => {
                self.back(tok);
                let head = self.list(atoms)?;
                Ok(cons(head, self.lpar_list(atoms)?))
            }
            Token::Rpar => {
                self.back(tok);
                Ok(Expr::Nil)
            }
            tok => Err(LispError::Parse(format!(
                "bad token parsing list: {:?}",
                tok.text(atoms)
            ))),
        }
    }
}

/// The expression for a single atom or number token.
fn atom_expr(tok: Token) -> Expr {
    match tok {
        Token::Atom(id) | Token::Const(id) => Expr::Atom(id),
        Token::Number(n) => crate::expr::number(n),
        _ => Expr::Nil,
    }
}
