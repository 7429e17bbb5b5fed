use std::collections::HashMap;

/// Unique identifier for an interned atom.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AtomId(pub u32);

/// What sort of atom an id names. Constants are non-rebindable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AtomKind {
    Sym,
    Const,
}

/// Interned atom table. Each distinct atom text maps to a unique AtomId,
/// so identity comparison is id equality: `(eq 'foo 'foo)` is true because
/// both occurrences resolve to the same id. Numbers bypass this table and
/// carry their own big-integer value.
pub struct AtomTable {
    name_to_id: HashMap<String, AtomId>,
    names: Vec<String>,
    kinds: Vec<AtomKind>,
}

/// Well-known atom ids, pre-interned at startup.
/// These must match the order of interning in AtomTable::new().
pub mod tok {
    use super::AtomId;

    // Reserved constants.
    pub const T: AtomId = AtomId(0);
    pub const F: AtomId = AtomId(1);
    pub const NIL: AtomId = AtomId(2);

    // Elementary function names and the two spellings of lambda.
    pub const ADD: AtomId = AtomId(3);
    pub const AND: AtomId = AtomId(4);
    pub const APPLY: AtomId = AtomId(5);
    pub const ATOM: AtomId = AtomId(6);
    pub const CAR: AtomId = AtomId(7);
    pub const CDR: AtomId = AtomId(8);
    pub const COND: AtomId = AtomId(9);
    pub const CONS: AtomId = AtomId(10);
    pub const DEFN: AtomId = AtomId(11);
    pub const DIV: AtomId = AtomId(12);
    pub const EQ: AtomId = AtomId(13);
    pub const GE: AtomId = AtomId(14);
    pub const GT: AtomId = AtomId(15);
    pub const LAMBDA: AtomId = AtomId(16);
    pub const GREEK_LAMBDA: AtomId = AtomId(17);
    pub const LE: AtomId = AtomId(18);
    pub const LIST: AtomId = AtomId(19);
    pub const LT: AtomId = AtomId(20);
    pub const MUL: AtomId = AtomId(21);
    pub const NE: AtomId = AtomId(22);
    pub const NULL: AtomId = AtomId(23);
    pub const OR: AtomId = AtomId(24);
    pub const QUOTE: AtomId = AtomId(25);
    pub const REM: AtomId = AtomId(26);
    pub const SUB: AtomId = AtomId(27);
}

impl AtomTable {
    /// Create a table with all well-known atoms pre-interned.
    /// The order MUST match the constants in the `tok` module above.
    pub fn new() -> Self {
        let constants = ["T", "F", "nil"];
        let names = [
            "add", "and", "apply", "atom", "car", "cdr", "cond", "cons",
            "defn", "div", "eq", "ge", "gt", "lambda", "λ", "le", "list",
            "lt", "mul", "ne", "null", "or", "quote", "rem", "sub",
        ];

        let mut table = AtomTable {
            name_to_id: HashMap::new(),
            names: Vec::new(),
            kinds: Vec::new(),
        };
        for name in constants {
            table.put(name, AtomKind::Const);
        }
        for name in names {
            table.put(name, AtomKind::Sym);
        }
        table
    }

    fn put(&mut self, name: &str, kind: AtomKind) -> AtomId {
        let id = AtomId(self.names.len() as u32);
        self.name_to_id.insert(name.to_string(), id);
        self.names.push(name.to_string());
        self.kinds.push(kind);
        id
    }

    /// Intern an atom text. Returns the existing id if already interned,
    /// or creates a new ordinary atom.
    pub fn intern(&mut self, name: &str) -> AtomId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        self.put(name, AtomKind::Sym)
    }

    /// The text of an atom.
    pub fn text(&self, id: AtomId) -> &str {
        &self.names[id.0 as usize]
    }

    /// The kind of an atom.
    pub fn kind(&self, id: AtomId) -> AtomKind {
        self.kinds[id.0 as usize]
    }

    /// Whether the atom is a reserved constant (T, F, nil).
    pub fn is_const(&self, id: AtomId) -> bool {
        self.kind(id) == AtomKind::Const
    }

    /// Total number of interned atoms.
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

impl Default for AtomTable {
    fn default() -> Self {
        AtomTable::new()
    }
}
