use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;

/// Binary connectives of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Iff,
}

impl BinaryOp {
    /// The order in which the parser scans for a split point.
    ///
    /// The first operator in this list with a top-level occurrence becomes
    /// the root of the subtree, regardless of where it sits in the text.
    pub const SCAN_ORDER: [BinaryOp; 4] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Implies,
        BinaryOp::Iff,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Implies => "->",
            BinaryOp::Iff => "<->",
        }
    }
}

/// A parsed expression.
///
/// Trees are immutable once built and own their operands, so a tree can be
/// evaluated any number of times, against different worlds. The derived
/// [Debug] output is the nested-record projection used for tree inspection;
/// [Display] renders the canonical infix form, which reparses to a
/// structurally identical tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Binary {
        op: BinaryOp,
        lhs: Box<SyntaxNode>,
        rhs: Box<SyntaxNode>,
    },
    Not(Box<SyntaxNode>),
    Predicate { name: String, args: Vec<String> },
}

impl SyntaxNode {
    pub fn binary(op: BinaryOp, lhs: SyntaxNode, rhs: SyntaxNode) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn and(lhs: SyntaxNode, rhs: SyntaxNode) -> Self {
        Self::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: SyntaxNode, rhs: SyntaxNode) -> Self {
        Self::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn implies(lhs: SyntaxNode, rhs: SyntaxNode) -> Self {
        Self::binary(BinaryOp::Implies, lhs, rhs)
    }

    pub fn iff(lhs: SyntaxNode, rhs: SyntaxNode) -> Self {
        Self::binary(BinaryOp::Iff, lhs, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: SyntaxNode) -> Self {
        Self::Not(Box::new(operand))
    }

    pub fn pred(name: &str, args: &[&str]) -> Self {
        Self::Predicate {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

// A binary operand gets one pair of parentheses so the canonical form
// reparses to the same tree under the top-level split scan.
fn write_operand(f: &mut fmt::Formatter<'_>, node: &SyntaxNode) -> fmt::Result {
    if matches!(node, SyntaxNode::Binary { .. }) {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary { op, lhs, rhs } => {
                write_operand(f, lhs)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, rhs)
            }
            Self::Not(operand) => {
                f.write_str("~")?;
                write_operand(f, operand)
            }
            Self::Predicate { name, args } => {
                write!(f, "{}({})", name, args.iter().join(", "))
            }
        }
    }
}
