use crate::atom::{tok, AtomTable};
use crate::expr::{car, cdr, Expr};

/// Render an expression as an S-Expression: every pair is explicit and
/// dotted, nil prints as nil.
pub fn sexpr_string(e: &Expr, atoms: &AtomTable) -> String {
    match e {
        Expr::Nil => "nil".to_string(),
        Expr::Atom(id) => atoms.text(*id).to_string(),
        Expr::Number(n) => n.to_string(),
        Expr::Pair(p) => format!(
            "({} . {})",
            sexpr_string(&p.car, atoms),
            sexpr_string(&p.cdr, atoms)
        ),
    }
}

/// Render an expression as a list: a right-spine of pairs is flattened,
/// a terminating nil is elided, and (quote x) prints as 'x.
pub fn list_string(e: &Expr, atoms: &AtomTable) -> String {
    let mut out = String::new();
    build_list(e, atoms, &mut out, true);
    out
}

/// The internals of list_string. simplify_quote specifies whether
/// (quote expr) should be printed as 'expr.
pub(crate) fn build_list(e: &Expr, atoms: &AtomTable, out: &mut String, simplify_quote: bool) {
    match e {
        Expr::Nil => out.push_str("nil"),
        Expr::Atom(id) => out.push_str(atoms.text(*id)),
        Expr::Number(n) => out.push_str(&n.to_string()),
        Expr::Pair(_) => {
            // Simplify (quote a) to 'a. The sugar only applies when the
            // tail is a one-element list, so malformed quote pairs still
            // print in full.
            if simplify_quote && car(e).atom_id() == Some(tok::QUOTE) {
                if let Expr::Pair(p) = &cdr(e) {
                    if p.cdr.is_nil() {
                        out.push('\'');
                        build_list(&p.car, atoms, out, simplify_quote);
                        return;
                    }
                }
            }
            out.push('(');
            let mut e = e.clone();
            loop {
                build_list(&car(&e), atoms, out, simplify_quote);
                let tail = cdr(&e);
                match &tail {
                    Expr::Nil => break,
                    Expr::Pair(_) => {
                        out.push(' ');
                        e = tail;
                    }
                    // A nil atom terminates the list like the empty value.
                    Expr::Atom(id) if *id == tok::NIL => break,
                    _ => {
                        out.push_str(" . ");
                        build_list(&tail, atoms, out, simplify_quote);
                        break;
                    }
                }
            }
            out.push(')');
        }
    }
}
