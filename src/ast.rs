//! Contains the `Node` enum, the abstract syntax tree of a Lua literal.
//!
//! A tree is built by the `Parser` during a single `parse()` call and is
//! owned by the caller afterwards. Tables own their entries and entries own
//! their key and value nodes, so the tree never shares or cycles.

use std::fmt;

/// 2^63, the first float past `i64::MAX`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// A Lua number, kept without precision loss.
///
/// Lua 5.3+ distinguishes integers from floats; a numeral without a
/// decimal point or exponent is an integer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LuaNumber {
    /// Represents a 64-bit integer, e.g., `1337` or `0xFF`.
    Integer(i64),
    /// Represents a 64-bit float, e.g., `1.5` or `1e10`.
    Float(f64),
}

impl LuaNumber {
    /// The value as an `f64`. Large integers may round.
    pub fn as_f64(&self) -> f64 {
        match *self {
            LuaNumber::Integer(n) => n as f64,
            LuaNumber::Float(f) => f,
        }
    }

    /// The value as an `i64`, only if it is exactly representable.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            LuaNumber::Integer(n) => Some(n),
            LuaNumber::Float(f) if f.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&f) => {
                Some(f as i64)
            }
            LuaNumber::Float(_) => None,
        }
    }

    /// Flips the sign, as a leading `-` does.
    pub(crate) fn negate(self) -> LuaNumber {
        match self {
            LuaNumber::Integer(n) => LuaNumber::Integer(n.wrapping_neg()),
            LuaNumber::Float(f) => LuaNumber::Float(-f),
        }
    }
}

impl fmt::Display for LuaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuaNumber::Integer(n) => write!(f, "{}", n),
            // Lua prints integral floats with a trailing `.0`.
            LuaNumber::Float(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 => {
                write!(f, "{:.1}", n)
            }
            LuaNumber::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for LuaNumber {
    fn from(n: i64) -> Self {
        LuaNumber::Integer(n)
    }
}

impl From<f64> for LuaNumber {
    fn from(n: f64) -> Self {
        LuaNumber::Float(n)
    }
}

/// A node of the literal AST.
///
/// The variant set is closed: consumers match on it exhaustively.
#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    /// The `nil` literal.
    Nil,
    /// A numeric literal.
    Number(LuaNumber),
    /// A string literal with its escapes resolved.
    String(String),
    /// A table constructor. Entry order is the source order.
    Table(Vec<TableEntry>),
}

impl Node {
    pub const NIL_NAME: &'static str = "nil";
    pub const NUMBER_NAME: &'static str = "number";
    pub const STRING_NAME: &'static str = "string";
    pub const TABLE_NAME: &'static str = "table";

    /// The stable discriminant name of this node's variant.
    pub fn name(&self) -> &'static str {
        match self {
            Node::Nil => Self::NIL_NAME,
            Node::Number(_) => Self::NUMBER_NAME,
            Node::String(_) => Self::STRING_NAME,
            Node::Table(_) => Self::TABLE_NAME,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Node::Nil)
    }

    pub fn as_number(&self) -> Option<LuaNumber> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// The entries of a table, in source order.
    pub fn entries(&self) -> Option<&[TableEntry]> {
        match self {
            Node::Table(entries) => Some(entries),
            _ => None,
        }
    }
}

/// One entry of a table constructor.
///
/// Entries without a key are positional (`{ 1, 2 }`); entries with a key are
/// keyed (`{ a = 1 }` or `{ ["a"] = 1 }`). Duplicate keys are kept as
/// separate entries.
#[derive(Debug, PartialEq, Clone)]
pub struct TableEntry {
    pub key: Option<Node>,
    pub value: Node,
}

impl TableEntry {
    pub fn positional(value: Node) -> Self {
        TableEntry { key: None, value }
    }

    pub fn keyed(key: Node, value: Node) -> Self {
        TableEntry {
            key: Some(key),
            value,
        }
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    pub fn key(&self) -> Option<&Node> {
        self.key.as_ref()
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}
