//! The non-math elementary (builtin) functions. Elementaries are
//! dispatched by token identity, not through bindings, so they cannot be
//! shadowed; the composite car/cdr accessors (cadr, caddr, ...) are
//! recognized by name shape instead of being registered one by one.

use crate::atom::{tok, AtomId, AtomTable};
use crate::error::{LispError, LispResult};
use crate::eval::Context;
use crate::expr::{car, cdr, cons, Expr};
use crate::math;

/// An elementary function: receives the interpreter context, its own
/// name, and the already-evaluated argument list.
pub type ElemFn = fn(&mut Context, AtomId, &Expr) -> LispResult<Expr>;

/// The function tied to an elementary name, or None for ordinary atoms.
pub fn lookup(atoms: &AtomTable, name: AtomId) -> Option<ElemFn> {
    match name {
        tok::ADD => Some(math::add_fn),
        tok::AND => Some(math::and_fn),
        tok::APPLY => Some(apply_fn),
        tok::ATOM => Some(atom_fn),
        tok::CAR => Some(car_fn),
        tok::CDR => Some(cdr_fn),
        tok::COND => Some(cond_fn),
        tok::CONS => Some(cons_fn),
        tok::DEFN => Some(defn_fn),
        tok::DIV => Some(math::div_fn),
        tok::EQ => Some(eq_fn),
        tok::GE => Some(math::ge_fn),
        tok::GT => Some(math::gt_fn),
        tok::LE => Some(math::le_fn),
        tok::LIST => Some(list_fn),
        tok::LT => Some(math::lt_fn),
        tok::MUL => Some(math::mul_fn),
        tok::NE => Some(math::ne_fn),
        tok::NULL => Some(null_fn),
        tok::OR => Some(math::or_fn),
        tok::QUOTE => Some(quote_fn),
        tok::REM => Some(math::rem_fn),
        tok::SUB => Some(math::sub_fn),
        _ if is_cad_r(atoms.text(name)) => Some(cadr_fn),
        _ => None,
    }
}

/// Whether the name is a run of car and cdr calls: at least one 'a' or
/// 'd' between a leading 'c' and a trailing 'r'.
pub fn is_cad_r(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 3 || b[0] != b'c' || b[b.len() - 1] != b'r' {
        return false;
    }
    b[1..b.len() - 1].iter().all(|&c| c == b'a' || c == b'd')
}

/// Convert a boolean to the constant atom T or F.
pub fn truth_expr(t: bool) -> Expr {
    Expr::Atom(if t { tok::T } else { tok::F })
}

/// (apply f args) — applies f to the argument list args, re-entering
/// apply with the name under which the elementary was called as the
/// trace label.
fn apply_fn(c: &mut Context, name: AtomId, expr: &Expr) -> LispResult<Expr> {
    let label = c.atoms.text(name).to_string();
    c.apply(&label, &car(expr), &car(&cdr(expr)))
}

/// (defn ((name lambda) ...)) — binds each name and returns the list of
/// names in input order.
fn defn_fn(c: &mut Context, _name: AtomId, expr: &Expr) -> LispResult<Expr> {
    let mut names = Vec::new();
    let mut e = car(expr);
    while !e.is_nil() {
        let f = car(&e);
        if f.is_nil() {
            return Err(LispError::Binding("empty function in defn".to_string()));
        }
        let name = car(&f);
        let id = name
            .atom_id()
            .ok_or_else(|| LispError::Binding("malformed defn".to_string()))?;
        names.push(name);
        c.set(id, car(&cdr(&f)))?;
        e = cdr(&e);
    }
    let mut result = Expr::Nil;
    for name in names.into_iter().rev() {
        result = cons(name, result);
    }
    Ok(result)
}

fn atom_fn(_c: &mut Context, _name: AtomId, expr: &Expr) -> LispResult<Expr> {
    Ok(truth_expr(car(expr).is_atom()))
}

fn car_fn(_c: &mut Context, _name: AtomId, expr: &Expr) -> LispResult<Expr> {
    Ok(car(&car(expr)))
}

fn cdr_fn(_c: &mut Context, _name: AtomId, expr: &Expr) -> LispResult<Expr> {
    Ok(cdr(&car(expr)))
}

/// The composite accessors: for each middle letter, right to left, apply
/// car for 'a' and cdr for 'd'. caaddr computes car(car(cdr(cdr(x)))).
fn cadr_fn(c: &mut Context, name: AtomId, expr: &Expr) -> LispResult<Expr> {
    let letters = c.atoms.text(name).as_bytes().to_vec();
    let mut e = car(expr);
    for &letter in letters[1..letters.len() - 1].iter().rev() {
        if e.is_nil() {
            break;
        }
        e = if letter == b'a' { car(&e) } else { cdr(&e) };
    }
    Ok(e)
}

fn cons_fn(_c: &mut Context, _name: AtomId, expr: &Expr) -> LispResult<Expr> {
    Ok(cons(car(expr), car(&cdr(expr))))
}

fn eq_fn(_c: &mut Context, _name: AtomId, expr: &Expr) -> LispResult<Expr> {
    Ok(truth_expr(eq(&car(expr), &car(&cdr(expr)))))
}

/// Atom identity: numbers compare by value, named atoms by interned
/// identity, and two empty expressions are equal. Anything involving a
/// pair is unequal.
fn eq(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Nil, Expr::Nil) => true,
        (Expr::Number(x), Expr::Number(y)) => x == y,
        (Expr::Atom(x), Expr::Atom(y)) => x == y,
        _ => false,
    }
}

/// (list ...) — the arguments have already been evaluated into a fresh
/// list by evlis, so list returns them re-consed onto that tail.
fn list_fn(_c: &mut Context, _name: AtomId, expr: &Expr) -> LispResult<Expr> {
    if expr.is_nil() {
        return Ok(Expr::Nil);
    }
    Ok(cons(car(expr), cdr(expr)))
}

fn null_fn(_c: &mut Context, _name: AtomId, expr: &Expr) -> LispResult<Expr> {
    Ok(truth_expr(car(expr).is_nil()))
}

/// cond and quote are handled inside eval before arguments are
/// evaluated; they are registered here only so their names are reserved
/// as elementaries. Reaching one through apply means the form escaped
/// its special handling.
fn cond_fn(c: &mut Context, name: AtomId, _expr: &Expr) -> LispResult<Expr> {
    Err(LispError::Apply(format!(
        "{} is not applicable",
        c.atoms.text(name)
    )))
}

fn quote_fn(c: &mut Context, name: AtomId, expr: &Expr) -> LispResult<Expr> {
    cond_fn(c, name, expr)
}
