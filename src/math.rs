//! The math elementary (builtin) functions: big-integer arithmetic and
//! comparison, plus the variadic logic operators.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::atom::AtomId;
use crate::elementary::truth_expr;
use crate::error::{LispError, LispResult};
use crate::eval::Context;
use crate::expr::{car, cdr, number, Expr};
use crate::print;

fn get_number(c: &Context, e: &Expr) -> LispResult<BigInt> {
    match e {
        Expr::Number(n) => Ok((**n).clone()),
        _ => Err(LispError::Eval(format!(
            "expect number; have {}",
            print::list_string(e, &c.atoms)
        ))),
    }
}

// Arithmetic.

fn math_fn(
    c: &mut Context,
    expr: &Expr,
    f: fn(BigInt, BigInt) -> LispResult<BigInt>,
) -> LispResult<Expr> {
    let a = get_number(c, &car(expr))?;
    let b = get_number(c, &car(&cdr(expr)))?;
    Ok(number(f(a, b)?))
}

fn add(a: BigInt, b: BigInt) -> LispResult<BigInt> {
    Ok(a + b)
}

fn sub(a: BigInt, b: BigInt) -> LispResult<BigInt> {
    Ok(a - b)
}

fn mul(a: BigInt, b: BigInt) -> LispResult<BigInt> {
    Ok(a * b)
}

/// Euclidean quotient: the remainder it pairs with is never negative.
fn div(a: BigInt, b: BigInt) -> LispResult<BigInt> {
    if b.is_zero() {
        return Err(LispError::Eval("division by zero".to_string()));
    }
    let q = &a / &b;
    let r = a - &q * &b;
    Ok(if r.is_negative() {
        if b.is_negative() {
            q + 1
        } else {
            q - 1
        }
    } else {
        q
    })
}

/// Truncated remainder, matching the sign of the dividend.
fn rem(a: BigInt, b: BigInt) -> LispResult<BigInt> {
    if b.is_zero() {
        return Err(LispError::Eval("rem by zero".to_string()));
    }
    Ok(a % b)
}

pub(crate) fn add_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    math_fn(c, x, add)
}

pub(crate) fn sub_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    math_fn(c, x, sub)
}

pub(crate) fn mul_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    math_fn(c, x, mul)
}

pub(crate) fn div_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    math_fn(c, x, div)
}

pub(crate) fn rem_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    math_fn(c, x, rem)
}

// Comparison.

fn bool_fn(c: &mut Context, expr: &Expr, f: fn(&BigInt, &BigInt) -> bool) -> LispResult<Expr> {
    let a = get_number(c, &car(expr))?;
    let b = get_number(c, &car(&cdr(expr)))?;
    Ok(truth_expr(f(&a, &b)))
}

pub(crate) fn ge_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    bool_fn(c, x, |a, b| a >= b)
}

pub(crate) fn gt_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    bool_fn(c, x, |a, b| a > b)
}

pub(crate) fn le_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    bool_fn(c, x, |a, b| a <= b)
}

pub(crate) fn lt_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    bool_fn(c, x, |a, b| a < b)
}

pub(crate) fn ne_fn(c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    bool_fn(c, x, |a, b| a != b)
}

// Logic. These receive the already-evaluated argument list, so the
// short circuit happens over values, not over unevaluated forms.

/// (and ...) — F at the first argument that is not T, else T.
pub(crate) fn and_fn(_c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    let mut e = x.clone();
    while !e.is_nil() {
        if !car(&e).is_true() {
            return Ok(truth_expr(false));
        }
        e = cdr(&e);
    }
    Ok(truth_expr(true))
}

/// (or ...) — T at the first argument that is T, else F.
pub(crate) fn or_fn(_c: &mut Context, _name: AtomId, x: &Expr) -> LispResult<Expr> {
    let mut e = x.clone();
    while !e.is_nil() {
        if car(&e).is_true() {
            return Ok(truth_expr(true));
        }
        e = cdr(&e);
    }
    Ok(truth_expr(false))
}
