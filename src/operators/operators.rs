use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::MK_OPERATOR;

/// Precedence levels, lowest first.
///
/// Each level parses its operands through `next()`; the last level hands off
/// to the prefix rule.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Level {
    Comma,
    Assignment,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
    Factorial,
}

impl Level {
    pub const LOWEST: Level = Level::Comma;

    pub fn next(self) -> Option<Level> {
        match self {
            Level::Comma => Some(Level::Assignment),
            Level::Assignment => Some(Level::LogicalOr),
            Level::LogicalOr => Some(Level::LogicalAnd),
            Level::LogicalAnd => Some(Level::BitwiseOr),
            Level::BitwiseOr => Some(Level::BitwiseXor),
            Level::BitwiseXor => Some(Level::BitwiseAnd),
            Level::BitwiseAnd => Some(Level::Equality),
            Level::Equality => Some(Level::Relational),
            Level::Relational => Some(Level::Shift),
            Level::Shift => Some(Level::Additive),
            Level::Additive => Some(Level::Multiplicative),
            Level::Multiplicative => Some(Level::Exponent),
            Level::Exponent => Some(Level::Factorial),
            Level::Factorial => None,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// Where an operator sits in the grammar.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Placement {
    /// Before an operand, binding tighter than every level.
    Prefix,
    /// `++`/`--` directly after a variable.
    Postfix,
    Leveled(Level),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct OperatorInfo {
    pub symbol: &'static str,
    pub arity: usize,
    pub associativity: Associativity,
    pub placement: Placement,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Operator {
    Comma,

    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    PowAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
    BitAndAssign,
    BitXorAssign,
    BitOrAssign,

    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,

    Equals,
    StrictEquals,
    NotEquals,
    StrictNotEquals,

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Shl,
    Shr,
    UShr,

    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,

    Factorial,

    PreIncrement,
    PreDecrement,
    Plus,
    Negate,
    Not,
    BitNot,

    PostIncrement,
    PostDecrement,
}

impl Operator {
    pub const ALL: [Operator; 45] = [
        Operator::Comma,
        Operator::Assign,
        Operator::AddAssign,
        Operator::SubAssign,
        Operator::MulAssign,
        Operator::DivAssign,
        Operator::RemAssign,
        Operator::PowAssign,
        Operator::ShlAssign,
        Operator::ShrAssign,
        Operator::UShrAssign,
        Operator::BitAndAssign,
        Operator::BitXorAssign,
        Operator::BitOrAssign,
        Operator::Or,
        Operator::And,
        Operator::BitOr,
        Operator::BitXor,
        Operator::BitAnd,
        Operator::Equals,
        Operator::StrictEquals,
        Operator::NotEquals,
        Operator::StrictNotEquals,
        Operator::Less,
        Operator::LessEquals,
        Operator::Greater,
        Operator::GreaterEquals,
        Operator::Shl,
        Operator::Shr,
        Operator::UShr,
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
        Operator::Pow,
        Operator::Factorial,
        Operator::PreIncrement,
        Operator::PreDecrement,
        Operator::Plus,
        Operator::Negate,
        Operator::Not,
        Operator::BitNot,
        Operator::PostIncrement,
        Operator::PostDecrement,
    ];

    pub fn info(self) -> OperatorInfo {
        match self {
            Operator::Comma => MK_OPERATOR!(",", 2, Left, Comma),

            Operator::Assign => MK_OPERATOR!("=", 2, Right, Assignment),
            Operator::AddAssign => MK_OPERATOR!("+=", 2, Right, Assignment),
            Operator::SubAssign => MK_OPERATOR!("-=", 2, Right, Assignment),
            Operator::MulAssign => MK_OPERATOR!("*=", 2, Right, Assignment),
            Operator::DivAssign => MK_OPERATOR!("/=", 2, Right, Assignment),
            Operator::RemAssign => MK_OPERATOR!("%=", 2, Right, Assignment),
            Operator::PowAssign => MK_OPERATOR!("**=", 2, Right, Assignment),
            Operator::ShlAssign => MK_OPERATOR!("<<=", 2, Right, Assignment),
            Operator::ShrAssign => MK_OPERATOR!(">>=", 2, Right, Assignment),
            Operator::UShrAssign => MK_OPERATOR!(">>>=", 2, Right, Assignment),
            Operator::BitAndAssign => MK_OPERATOR!("&=", 2, Right, Assignment),
            Operator::BitXorAssign => MK_OPERATOR!("^=", 2, Right, Assignment),
            Operator::BitOrAssign => MK_OPERATOR!("|=", 2, Right, Assignment),

            Operator::Or => MK_OPERATOR!("||", 2, Left, LogicalOr),
            Operator::And => MK_OPERATOR!("&&", 2, Left, LogicalAnd),
            Operator::BitOr => MK_OPERATOR!("|", 2, Left, BitwiseOr),
            Operator::BitXor => MK_OPERATOR!("^", 2, Left, BitwiseXor),
            Operator::BitAnd => MK_OPERATOR!("&", 2, Left, BitwiseAnd),

            Operator::Equals => MK_OPERATOR!("==", 2, Left, Equality),
            Operator::StrictEquals => MK_OPERATOR!("===", 2, Left, Equality),
            Operator::NotEquals => MK_OPERATOR!("!=", 2, Left, Equality),
            Operator::StrictNotEquals => MK_OPERATOR!("!==", 2, Left, Equality),

            Operator::Less => MK_OPERATOR!("<", 2, Left, Relational),
            Operator::LessEquals => MK_OPERATOR!("<=", 2, Left, Relational),
            Operator::Greater => MK_OPERATOR!(">", 2, Left, Relational),
            Operator::GreaterEquals => MK_OPERATOR!(">=", 2, Left, Relational),

            Operator::Shl => MK_OPERATOR!("<<", 2, Left, Shift),
            Operator::Shr => MK_OPERATOR!(">>", 2, Left, Shift),
            Operator::UShr => MK_OPERATOR!(">>>", 2, Left, Shift),

            Operator::Add => MK_OPERATOR!("+", 2, Left, Additive),
            Operator::Sub => MK_OPERATOR!("-", 2, Left, Additive),
            Operator::Mul => MK_OPERATOR!("*", 2, Left, Multiplicative),
            Operator::Div => MK_OPERATOR!("/", 2, Left, Multiplicative),
            Operator::Rem => MK_OPERATOR!("%", 2, Left, Multiplicative),
            Operator::Pow => MK_OPERATOR!("**", 2, Right, Exponent),

            Operator::Factorial => MK_OPERATOR!("!", 1, Left, Factorial),

            Operator::PreIncrement => MK_OPERATOR!("++", 1, Right, Prefix),
            Operator::PreDecrement => MK_OPERATOR!("--", 1, Right, Prefix),
            Operator::Plus => MK_OPERATOR!("+", 1, Right, Prefix),
            Operator::Negate => MK_OPERATOR!("-", 1, Right, Prefix),
            Operator::Not => MK_OPERATOR!("!", 1, Right, Prefix),
            Operator::BitNot => MK_OPERATOR!("~", 1, Right, Prefix),

            Operator::PostIncrement => MK_OPERATOR!("++", 1, Left, Postfix),
            Operator::PostDecrement => MK_OPERATOR!("--", 1, Left, Postfix),
        }
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    /// The arithmetic behind a compound assignment, e.g. `Add` for `+=`.
    pub fn compound_base(self) -> Option<Operator> {
        match self {
            Operator::AddAssign => Some(Operator::Add),
            Operator::SubAssign => Some(Operator::Sub),
            Operator::MulAssign => Some(Operator::Mul),
            Operator::DivAssign => Some(Operator::Div),
            Operator::RemAssign => Some(Operator::Rem),
            Operator::PowAssign => Some(Operator::Pow),
            Operator::ShlAssign => Some(Operator::Shl),
            Operator::ShrAssign => Some(Operator::Shr),
            Operator::UShrAssign => Some(Operator::UShr),
            Operator::BitAndAssign => Some(Operator::BitAnd),
            Operator::BitXorAssign => Some(Operator::BitXor),
            Operator::BitOrAssign => Some(Operator::BitOr),
            _ => None,
        }
    }
}

pub type OperatorLookup = HashMap<&'static str, Operator>;

fn create_lookup<F>(keep: F) -> OperatorLookup
where
    F: Fn(Placement) -> bool,
{
    Operator::ALL
        .iter()
        .filter(|operator| keep(operator.info().placement))
        .map(|operator| (operator.symbol(), *operator))
        .collect()
}

lazy_static! {
    /// Symbols of every operator at some precedence level.
    pub static ref LEVELED_LOOKUP: OperatorLookup =
        create_lookup(|placement| matches!(placement, Placement::Leveled(_)));
    pub static ref PREFIX_LOOKUP: OperatorLookup =
        create_lookup(|placement| placement == Placement::Prefix);
    pub static ref POSTFIX_LOOKUP: OperatorLookup =
        create_lookup(|placement| placement == Placement::Postfix);
    /// Every operator symbol, for longest-match scanning.
    pub static ref ALL_SYMBOLS: Vec<&'static str> =
        Operator::ALL.iter().map(|operator| operator.symbol()).collect();
}

/// Finds the operator `symbol` denotes at `level`, if any.
pub fn leveled_operator(symbol: &str, level: Level) -> Option<Operator> {
    LEVELED_LOOKUP
        .get(symbol)
        .copied()
        .filter(|operator| operator.info().placement == Placement::Leveled(level))
}
