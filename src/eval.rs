use std::collections::HashMap;

use crate::atom::{tok, AtomId, AtomKind, AtomTable};
use crate::elementary;
use crate::error::{LispError, LispResult};
use crate::expr::{car, cdr, cons, Expr};
use crate::print;

/// Label identifying the global, outermost frame and the vacuous lambda
/// synthesized around top-level expressions. Frames carrying it are
/// hidden from stack traces.
const TOP: &str = "<top>";

/// One stack frame: the locals of a single function activation, plus the
/// call label and arguments recorded for tracebacks.
struct Frame {
    vars: HashMap<AtomId, Expr>,
    label: String,
    args: Expr,
}

/// A Context holds the state of an interpreter: the atom table, the stack
/// of call frames (the global frame at position 0), and the call-depth
/// accounting.
pub struct Context {
    pub atoms: AtomTable,
    frames: Vec<Frame>,
    stack_depth: usize,
    max_stack_depth: usize,
}

impl Context {
    /// Return a Context ready to execute. The argument specifies the
    /// maximum call depth to allow, with 0 meaning unlimited.
    pub fn new(max_depth: usize) -> Self {
        let mut c = Context {
            atoms: AtomTable::new(),
            frames: Vec::new(),
            stack_depth: 0,
            max_stack_depth: max_depth,
        };
        c.push(TOP, Expr::Nil);
        // Global constants. Inserted directly: set() refuses constants.
        let globals = &mut c.frames[0].vars;
        globals.insert(tok::T, Expr::Atom(tok::T));
        globals.insert(tok::F, Expr::Atom(tok::F));
        globals.insert(tok::NIL, Expr::Atom(tok::NIL));
        c
    }

    /// Push an execution frame onto the stack.
    fn push(&mut self, label: &str, args: Expr) {
        self.frames.push(Frame {
            vars: HashMap::new(),
            label: label.to_string(),
            args,
        });
    }

    /// Pop one frame of the execution stack.
    fn pop(&mut self) {
        self.frames.pop();
    }

    /// Reset the execution stack after an error, dropping every frame
    /// above the global one.
    pub fn pop_stack(&mut self) {
        self.stack_depth = 0;
        self.frames.truncate(1);
    }

    /// The index of the frame a lookup or rebind of the atom resolves to:
    /// the deepest frame that binds it, or the innermost frame when it is
    /// bound nowhere. A free variable in a nested lambda therefore sees
    /// the outermost enclosing definer, in practice the global frame.
    fn frame_index(&self, id: AtomId) -> usize {
        self.frames
            .iter()
            .position(|f| f.vars.contains_key(&id))
            .unwrap_or(self.frames.len() - 1)
    }

    /// Guarantee that the atom is not a constant.
    fn not_const(&self, id: AtomId) -> LispResult<()> {
        if self.atoms.is_const(id) {
            return Err(LispError::Binding(format!(
                "cannot set constant {}",
                self.atoms.text(id)
            )));
        }
        Ok(())
    }

    /// Bind the atom to the expression in the frame the scope walk
    /// selects. Used by defn; at the top level that is the global frame.
    pub(crate) fn set(&mut self, id: AtomId, expr: Expr) -> LispResult<()> {
        self.not_const(id)?;
        let idx = self.frame_index(id);
        self.frames[idx].vars.insert(id, expr);
        Ok(())
    }

    /// Bind the atom in the innermost frame. Used for formals, which are
    /// always fresh locals and never rebind an outer binding.
    fn set_local(&mut self, id: AtomId, expr: Expr) -> LispResult<()> {
        self.not_const(id)?;
        let last = self.frames.len() - 1;
        self.frames[last].vars.insert(id, expr);
        Ok(())
    }

    /// The bound value of the atom, or the empty expression when it is
    /// bound nowhere.
    fn get(&self, id: AtomId) -> Expr {
        let idx = self.frame_index(id);
        self.frames[idx].vars.get(&id).cloned().unwrap_or(Expr::Nil)
    }

    /// A printout of the execution stack, most recent call first. Long
    /// stacks are trimmed in the middle.
    pub fn stack_trace(&self) -> String {
        if self.frames[self.frames.len() - 1].label == TOP {
            return String::new();
        }
        let mut b = String::from("stack:\n");
        let n = self.frames.len();
        let mut i = n - 1;
        while i > 0 {
            if n - i > 20 && i > 20 {
                // Skip the middle bits.
                b.push_str("\t...\n");
                i = 19;
                continue;
            }
            let f = &self.frames[i];
            if f.label != TOP {
                b.push_str(&format!(
                    "\t({} {})\n",
                    f.label,
                    print::list_string(&car(&f.args), &self.atoms)
                ));
            }
            i -= 1;
        }
        b
    }

    /// Evaluate a top-level expression. The result depends on its shape:
    /// - for atoms, the value of the atom
    /// - for function definitions (defn ...), the list of defined names
    /// - for general expressions, the value of applying a vacuous lambda
    ///   with the expression as its body and no arguments.
    pub fn eval(&mut self, expr: &Expr) -> LispResult<Expr> {
        match expr {
            Expr::Number(_) => return Ok(expr.clone()),
            Expr::Atom(id) => {
                if elementary::lookup(&self.atoms, *id).is_some() {
                    return Err(LispError::Eval(format!(
                        "{} is elementary",
                        self.atoms.text(*id)
                    )));
                }
                return Ok(self.get(*id));
            }
            _ => {}
        }
        // Defn is very special.
        if car(expr).atom_id() == Some(tok::DEFN) {
            return self.apply("defn", &car(expr), &cdr(expr));
        }
        // General expression: treat as a function invocation by applying
        // (lambda () expr) to no arguments.
        let lambda = cons(
            Expr::Atom(tok::GREEK_LAMBDA),
            cons(Expr::Nil, cons(expr.clone(), Expr::Nil)),
        );
        self.apply(TOP, &lambda, &Expr::Nil)
    }

    /// Verify the function is defined and there is room on the stack.
    fn ok_to_call(&mut self, name: &str, f: &Expr, x: &Expr) -> LispResult<()> {
        if f.is_nil() {
            let id = self.atoms.intern(name);
            let call = cons(Expr::Atom(id), x.clone());
            return Err(LispError::Apply(format!(
                "undefined: {}",
                print::list_string(&call, &self.atoms)
            )));
        }
        if self.max_stack_depth > 0 {
            self.stack_depth += 1;
            if self.stack_depth > self.max_stack_depth {
                // Display this call at the top of the trace.
                self.push(name, x.clone());
                return Err(LispError::StackTooDeep);
            }
        }
        Ok(())
    }

    /// Apply f to the already-evaluated argument list x. The name labels
    /// the call in stack traces. This is page 13 of the Lisp 1.5 book,
    /// with the a-list replaced by the frame stack.
    pub(crate) fn apply(&mut self, name: &str, f: &Expr, x: &Expr) -> LispResult<Expr> {
        self.ok_to_call(name, f, x)?;
        let result = self.apply_inner(name, f, x)?;
        // An error skips the decrement; pop_stack resets the count.
        if self.max_stack_depth > 0 {
            self.stack_depth -= 1;
        }
        Ok(result)
    }

    fn apply_inner(&mut self, name: &str, f: &Expr, x: &Expr) -> LispResult<Expr> {
        match f {
            Expr::Atom(id) => {
                if let Some(elem) = elementary::lookup(&self.atoms, *id) {
                    return elem(self, *id, x);
                }
                if self.atoms.kind(*id) != AtomKind::Sym {
                    return Err(LispError::Apply(format!(
                        "{} is not a function",
                        self.atoms.text(*id)
                    )));
                }
                let resolved = self.get(*id);
                return self.apply(name, &resolved, x);
            }
            Expr::Number(n) => {
                return Err(LispError::Apply(format!("{} is not a function", n)));
            }
            _ => {}
        }
        let head = car(f).atom_id();
        if head == Some(tok::GREEK_LAMBDA) || head == Some(tok::LAMBDA) {
            let mut formals = car(&cdr(f));
            if x.length() != formals.length() {
                return Err(LispError::Apply(format!(
                    "args mismatch for {}: {} {}",
                    name,
                    print::list_string(&formals, &self.atoms),
                    print::list_string(x, &self.atoms)
                )));
            }
            self.push(name, x.clone());
            let mut args = x.clone();
            while !args.is_nil() {
                let param = car(&formals);
                formals = cdr(&formals);
                let id = param
                    .atom_id()
                    .ok_or_else(|| LispError::Eval("no atom".to_string()))?;
                self.set_local(id, car(&args))?;
                args = cdr(&args);
            }
            let body = car(&cdr(&cdr(f)));
            // On error the frame stays in place for the stack trace;
            // pop_stack clears it.
            let expr = self.eval_expr(&body)?;
            self.pop();
            return Ok(expr);
        }
        let id = self.atoms.intern(name);
        let call = cons(Expr::Atom(id), x.clone());
        Err(LispError::Apply(format!(
            "apply failed: {}",
            print::list_string(&call, &self.atoms)
        )))
    }

    /// Evaluate an expression inside a function body, as on page 13 of
    /// the Lisp 1.5 book.
    pub(crate) fn eval_expr(&mut self, e: &Expr) -> LispResult<Expr> {
        let p = match e {
            Expr::Nil => return Ok(Expr::Nil),
            Expr::Number(_) => return Ok(e.clone()),
            Expr::Atom(id) => return Ok(self.get(*id)),
            Expr::Pair(p) => p.clone(),
        };
        match &p.car {
            Expr::Atom(id) if *id == tok::QUOTE => Ok(car(&p.cdr)),
            Expr::Atom(id) if *id == tok::COND => self.evcon(&p.cdr),
            Expr::Atom(id) => {
                let name = self.atoms.text(*id).to_string();
                let args = self.evlis(&p.cdr)?;
                self.apply(&name, &p.car, &args)
            }
            Expr::Number(_) => {
                let args = self.evlis(&p.cdr)?;
                self.apply("", &p.car, &args)
            }
            _ => Err(LispError::Eval(format!(
                "cannot eval {}",
                print::list_string(e, &self.atoms)
            ))),
        }
    }

    /// Evaluate a cond body: each clause is a (test result) list, and the
    /// first clause whose test evaluates to T selects the result.
    fn evcon(&mut self, x: &Expr) -> LispResult<Expr> {
        if x.is_nil() {
            return Err(LispError::Eval("no true case in cond".to_string()));
        }
        let clause = car(x);
        if self.eval_expr(&car(&clause))?.is_true() {
            self.eval_expr(&car(&cdr(&clause)))
        } else {
            self.evcon(&cdr(x))
        }
    }

    /// Evaluate a list elementwise, head to tail, into a fresh list.
    fn evlis(&mut self, m: &Expr) -> LispResult<Expr> {
        if m.is_nil() {
            return Ok(Expr::Nil);
        }
        let head = self.eval_expr(&car(m))?;
        let tail = self.evlis(&cdr(m))?;
        Ok(cons(head, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Parser;

    fn parser(input: &'static str) -> Parser<'static> {
        Parser::new(Box::new(input.as_bytes()))
    }

    fn str_eval(c: &mut Context, input: &'static str) -> String {
        let expr = parser(input).list(&mut c.atoms).expect(input);
        let value = c.eval(&expr).expect(input);
        print::list_string(&value, &c.atoms)
    }

    fn str_eval_err(c: &mut Context, input: &'static str) -> LispError {
        let expr = parser(input).list(&mut c.atoms).expect(input);
        c.eval(&expr).expect_err(input)
    }

    /// Deeply recursive programs nest deep host recursion; run them on a
    /// thread with room to spare.
    fn with_large_stack<F>(f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = std::thread::Builder::new()
            .stack_size(16 * 1024 * 1024)
            .spawn(f)
            .expect("failed to spawn test thread with larger stack");
        handle.join().expect("test thread panicked");
    }

    #[test]
    fn cons_builds_dotted_pairs() {
        let cons_tests: &[(&str, &str, &str)] = &[
            ("a", "b", "(a . b)"),
            ("(a . b)", "c", "((a . b) . c)"),
        ];
        for (a, b, want) in cons_tests {
            let mut atoms = AtomTable::new();
            let left = parser(a).sexpr(&mut atoms).expect(a);
            let right = parser(b).sexpr(&mut atoms).expect(b);
            let pair = cons(left, right);
            assert_eq!(print::sexpr_string(&pair, &atoms), *want);
        }
    }

    #[test]
    fn cons_evaluation() {
        let cons_eval_tests: &[(&str, &str)] = &[
            ("(cons 1 2)", "(1 . 2)"),
            ("(cons 'a (cons 'b (cons 'c '())))", "(a b c)"),
            ("(list 'a 'b 'c)", "(a b c)"),
            ("(cons 1 '(2 3 4))", "(1 2 3 4)"),
            ("(cons '(a b c) ())", "((a b c))"),
            ("(cons '(a b c) '(d))", "((a b c) d)"),
            ("(list)", "nil"),
        ];
        for (input, want) in cons_eval_tests {
            let mut c = Context::new(0);
            assert_eq!(str_eval(&mut c, input), *want, "{}", input);
        }
    }

    #[test]
    fn apply_directly() {
        // Use both spellings of lambda.
        let want = "(a c d)";

        let mut c = Context::new(0);
        let lambda = parser("(λ (x y) (cons (car x) y))")
            .list(&mut c.atoms)
            .unwrap();
        let args = parser("((a b) (c d))").list(&mut c.atoms).unwrap();
        let expr = c.apply("test", &lambda, &args).unwrap();
        assert_eq!(print::list_string(&expr, &c.atoms), want);

        let mut c = Context::new(0);
        let lambda = parser("(lambda (x y) (cons (car x) y))")
            .list(&mut c.atoms)
            .unwrap();
        let args = parser("((a b) (c d))").list(&mut c.atoms).unwrap();
        let example = c.atoms.intern("example");
        c.set(example, lambda).unwrap();
        let expr = c.apply("example", &Expr::Atom(example), &args).unwrap();
        assert_eq!(print::list_string(&expr, &c.atoms), want);
    }

    #[test]
    fn examples() {
        let examples: &[(&str, &str, &str, &str)] = &[
            (
                "(fac)",
                "(defn(
                    (fac (lambda (n) (cond
                        ((eq n 0) 1)
                        (T (mul n (fac (sub n 1))))
                    )))
                ))",
                "(fac 100)",
                "93326215443944152681699238856266700490715968264381621468592963895217599993229915608941463976156518286253697920827223758251185210916864000000000000000000000000",
            ),
            (
                "(gcd)",
                "(defn(
                    (gcd (lambda (x y) (cond
                        ((gt x y) (gcd y x))
                        ((eq (rem y x) 0) x)
                        (T (gcd (rem y x) x))
                    )))
                ))",
                "(gcd 144 64)",
                "16",
            ),
            (
                "(ack)",
                "(defn(
                    (ack (lambda (m n) (cond
                        ((eq m 0) (add n 1))
                        ((eq n 0) (ack (sub m 1) 1))
                        (T (ack (sub m 1) (ack m (sub n 1))))
                    )))
                ))",
                "(ack 3 4)",
                "125",
            ),
            (
                "(one two three)",
                "(defn(
                    (one (lambda (x y) (cons (car x) y)))
                    (two (lambda (x y) (one x y)))
                    (three (lambda (x y) (two x y)))
                ))",
                "(three '(a b) '(c d))",
                "(a c d)",
            ),
            (
                "(testcaaaddr)",
                "(defn(
                    (testcaaaddr (lambda (x) (caaddr x)))
                ))",
                "(caaaddr '((1 2) (3 4) ((5 6)) (7 8)))",
                "5",
            ),
        ];
        with_large_stack(move || {
            for (name, fn_def, input, want) in examples {
                let mut c = Context::new(0);
                assert_eq!(str_eval(&mut c, fn_def), *name, "{}", fn_def);
                assert_eq!(str_eval(&mut c, input), *want, "{}", input);
            }
        });
    }

    #[test]
    fn variadic_and_or() {
        let logic_tests: &[(&str, &str)] = &[
            ("(and T T T F)", "F"),
            ("(and T T)", "T"),
            ("(and)", "T"),
            ("(or F F F T)", "T"),
            ("(or F F)", "F"),
            ("(or)", "F"),
        ];
        for (input, want) in logic_tests {
            let mut c = Context::new(0);
            assert_eq!(str_eval(&mut c, input), *want, "{}", input);
        }
    }

    #[test]
    fn stack_trace_on_error() {
        let mut c = Context::new(0);
        let got = str_eval(
            &mut c,
            "(defn(
                (error (lambda (x) (cond
                    ((eq x 0) (div 0 0))
                    (T (error (sub x 1)))
                )))
            ))",
        );
        assert_eq!(got, "(error)");
        let err = str_eval_err(&mut c, "(error 5)");
        assert!(
            matches!(&err, LispError::Eval(msg) if msg == "division by zero"),
            "{:?}",
            err
        );
        let flat = c
            .stack_trace()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(
            flat,
            "stack: (error 0) (error 1) (error 2) (error 3) (error 4) (error 5)"
        );
        c.pop_stack();
        assert_eq!(c.stack_trace(), "");
    }

    #[test]
    fn long_stack_traces_elide_the_middle() {
        let mut c = Context::new(0);
        str_eval(
            &mut c,
            "(defn(
                (sink (lambda (x) (cond
                    ((eq x 0) (div 0 0))
                    (T (sink (sub x 1)))
                )))
            ))",
        );
        str_eval_err(&mut c, "(sink 60)");
        let trace = c.stack_trace();
        assert!(trace.contains("..."));
        assert!(trace.contains("(sink 0)"));
        assert!(trace.contains("(sink 60)"));
        // 20 innermost, the elision line, and the outermost frames.
        assert!(trace.lines().count() < 45);
    }

    #[test]
    fn depth_cap_stops_runaway_recursion() {
        let mut c = Context::new(100);
        str_eval(&mut c, "(defn ((spin (lambda (x) (spin x)))))");
        let err = str_eval_err(&mut c, "(spin 1)");
        assert!(matches!(err, LispError::StackTooDeep), "{:?}", err);
        assert!(c.stack_trace().contains("(spin 1)"));
        c.pop_stack();
        // The counter was reset; the context still works.
        assert_eq!(str_eval(&mut c, "(add 1 2)"), "3");
    }

    #[test]
    fn scope_is_isolated() {
        let mut c = Context::new(0);
        str_eval(&mut c, "(defn ((ident (lambda (v) v))))");
        assert_eq!(str_eval(&mut c, "(ident 42)"), "42");
        // The local binding of v is gone after the call returns.
        assert_eq!(str_eval(&mut c, "v"), "nil");
    }

    #[test]
    fn deepest_binding_wins_over_a_formal() {
        let mut c = Context::new(0);
        str_eval(&mut c, "(defn ((shape (lambda (x) x))))");
        // The formal shares its name with the global; the scope walk
        // selects the global binding.
        assert_eq!(
            str_eval(&mut c, "(apply '(lambda (shape) shape) '(77))"),
            "(lambda (x) x)"
        );
        // An unshared formal resolves locally.
        assert_eq!(str_eval(&mut c, "(apply '(lambda (y) y) '(77))"), "77");
    }

    #[test]
    fn eq_is_value_based_for_numbers_only() {
        let eq_tests: &[(&str, &str)] = &[
            ("(eq 7 7)", "T"),
            ("(eq 7 8)", "F"),
            ("(eq 'a 'a)", "T"),
            ("(eq 'a 'b)", "F"),
            ("(eq '() '())", "T"),
            ("(eq 1 'a)", "F"),
            ("(eq '(1) '(1))", "F"),
            ("(null '())", "T"),
            ("(null 'a)", "F"),
            ("(atom 'a)", "T"),
            ("(atom 7)", "T"),
            ("(atom '(a))", "F"),
        ];
        for (input, want) in eq_tests {
            let mut c = Context::new(0);
            assert_eq!(str_eval(&mut c, input), *want, "{}", input);
        }
    }

    #[test]
    fn defn_returns_names_and_binds_globally() {
        let mut c = Context::new(0);
        let got = str_eval(
            &mut c,
            "(defn ((first (lambda (x) (car x))) (second (lambda (x) (car (cdr x))))))",
        );
        assert_eq!(got, "(first second)");
        assert_eq!(str_eval(&mut c, "(second '(a b c))"), "b");
    }

    #[test]
    fn defn_shape_errors() {
        let mut c = Context::new(0);
        let err = str_eval_err(&mut c, "(defn (()))");
        assert!(
            matches!(&err, LispError::Binding(msg) if msg == "empty function in defn"),
            "{:?}",
            err
        );
        let err = str_eval_err(&mut c, "(defn ((5 (lambda (x) x))))");
        assert!(
            matches!(&err, LispError::Binding(msg) if msg == "malformed defn"),
            "{:?}",
            err
        );
        let err = str_eval_err(&mut c, "(defn ((T (lambda (x) x))))");
        assert!(
            matches!(&err, LispError::Binding(msg) if msg == "cannot set constant T"),
            "{:?}",
            err
        );
    }

    #[test]
    fn elementaries_cannot_be_evaluated_by_name() {
        for input in ["car", "cons", "defn", "caddr", "quote"] {
            let mut c = Context::new(0);
            let err = str_eval_err(&mut c, input);
            assert!(
                matches!(&err, LispError::Eval(msg) if msg.ends_with("is elementary")),
                "{}: {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn literal_lambda_in_head_position_cannot_eval() {
        let mut c = Context::new(0);
        let err = str_eval_err(&mut c, "((lambda (x y) (cons (car x) y)) '(a b) '(c d))");
        assert!(
            matches!(&err, LispError::Eval(msg) if msg.starts_with("cannot eval")),
            "{:?}",
            err
        );
        // The same application phrased through apply works.
        let mut c = Context::new(0);
        assert_eq!(
            str_eval(&mut c, "(apply '(lambda (x y) (cons (car x) y)) '((a b) (c d)))"),
            "(a c d)"
        );
    }

    #[test]
    fn application_errors() {
        let mut c = Context::new(0);
        let err = str_eval_err(&mut c, "(nothing 1 2)");
        assert!(
            matches!(&err, LispError::Apply(msg) if msg == "undefined: (nothing 1 2)"),
            "{:?}",
            err
        );
        let err = str_eval_err(&mut c, "(1 2)");
        assert!(
            matches!(&err, LispError::Apply(msg) if msg == "1 is not a function"),
            "{:?}",
            err
        );
        let err = str_eval_err(&mut c, "(T 2)");
        assert!(
            matches!(&err, LispError::Apply(msg) if msg == "T is not a function"),
            "{:?}",
            err
        );
        let err = str_eval_err(&mut c, "(apply '(lambda (x y) x) '(1))");
        assert!(
            matches!(&err, LispError::Apply(msg) if msg.starts_with("args mismatch")),
            "{:?}",
            err
        );
        let err = str_eval_err(&mut c, "(cond (F 1))");
        assert!(
            matches!(&err, LispError::Eval(msg) if msg == "no true case in cond"),
            "{:?}",
            err
        );
    }

    #[test]
    fn composite_accessors() {
        let cadr_tests: &[(&str, &str)] = &[
            ("(cadr '(a b c))", "b"),
            ("(caddr '(a b c))", "c"),
            ("(caar '((a b) c))", "a"),
            ("(cddr '(a b c))", "(c)"),
            ("(cadar '((a b) c))", "b"),
            // Walking off the end stops at the empty expression.
            ("(caddddr '(a))", "nil"),
        ];
        for (input, want) in cadr_tests {
            let mut c = Context::new(0);
            assert_eq!(str_eval(&mut c, input), *want, "{}", input);
        }
    }

    #[test]
    fn math_through_evaluation() {
        let math_tests: &[(&str, &str)] = &[
            ("(add 1 2)", "3"),
            ("(sub 1 2)", "-1"),
            ("(mul 6 7)", "42"),
            ("(div 7 2)", "3"),
            ("(rem 7 2)", "1"),
            ("(lt 1 2)", "T"),
            ("(le 2 2)", "T"),
            ("(gt 1 2)", "F"),
            ("(ge 2 3)", "F"),
            ("(ne 1 2)", "T"),
            ("(eq 2 2)", "T"),
        ];
        for (input, want) in math_tests {
            let mut c = Context::new(0);
            assert_eq!(str_eval(&mut c, input), *want, "{}", input);
        }
        let mut c = Context::new(0);
        let err = str_eval_err(&mut c, "(add 'a 1)");
        assert!(
            matches!(&err, LispError::Eval(msg) if msg == "expect number; have a"),
            "{:?}",
            err
        );
    }

    #[test]
    fn numbers_are_self_evaluating() {
        let mut c = Context::new(0);
        assert_eq!(str_eval(&mut c, "42"), "42");
        assert_eq!(str_eval(&mut c, "-7"), "-7");
        assert_eq!(str_eval(&mut c, "T"), "T");
        assert_eq!(str_eval(&mut c, "nil"), "nil");
    }

    #[test]
    fn quote_returns_the_argument_verbatim() {
        let mut c = Context::new(0);
        assert_eq!(str_eval(&mut c, "'(add 1 2)"), "(add 1 2)");
        assert_eq!(str_eval(&mut c, "''a"), "'a");
    }
}
