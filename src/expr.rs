use std::rc::Rc;

use num_bigint::BigInt;

use crate::atom::{tok, AtomId};

/// An arbitrary expression: either an atom (named, constant, or numeric),
/// a pair, or the distinguished empty value. The empty value stands for
/// both the empty list and printed `nil`.
///
/// Pairs share structure through Rc. The evaluator only ever builds fresh
/// pairs and never rewires tails, so the graph is acyclic and plain
/// reference counting reclaims it.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Nil,
    Atom(AtomId),
    Number(Rc<BigInt>),
    Pair(Rc<Pair>),
}

/// One cons cell.
#[derive(PartialEq, Debug)]
pub struct Pair {
    pub car: Expr,
    pub cdr: Expr,
}

/// Cons implements the Lisp function CONS.
pub fn cons(car: Expr, cdr: Expr) -> Expr {
    Expr::Pair(Rc::new(Pair { car, cdr }))
}

/// Car implements the Lisp function CAR: the head of a pair, or the empty
/// value when the argument is an atom or empty. Car and cdr are functions,
/// not methods, so (CADR X) reads as car(cdr(x)).
pub fn car(e: &Expr) -> Expr {
    match e {
        Expr::Pair(p) => p.car.clone(),
        _ => Expr::Nil,
    }
}

/// Cdr implements the Lisp function CDR.
pub fn cdr(e: &Expr) -> Expr {
    match e {
        Expr::Pair(p) => p.cdr.clone(),
        _ => Expr::Nil,
    }
}

/// Wrap a big integer as a number atom.
pub fn number(n: BigInt) -> Expr {
    Expr::Number(Rc::new(n))
}

impl Expr {
    /// Whether this is the empty expression.
    pub fn is_nil(&self) -> bool {
        matches!(self, Expr::Nil)
    }

    /// Whether this expression is atom-shaped (named atom or number).
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Atom(_) | Expr::Number(_))
    }

    /// The atom id of a named atom, or None for anything else.
    pub fn atom_id(&self) -> Option<AtomId> {
        match self {
            Expr::Atom(id) => Some(*id),
            _ => None,
        }
    }

    /// The big-integer value of a number atom.
    pub fn as_number(&self) -> Option<&BigInt> {
        match self {
            Expr::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Whether the expression is the T constant. Truthiness is strict:
    /// nothing else counts as true.
    pub fn is_true(&self) -> bool {
        matches!(self, Expr::Atom(id) if *id == tok::T)
    }

    /// The number of items in the top level of a list. Used to check that
    /// arguments match formals.
    pub fn length(&self) -> usize {
        let mut n = 0;
        let mut e = self.clone();
        while let Expr::Pair(p) = e {
            n += 1;
            e = p.cdr.clone();
        }
        n
    }
}
