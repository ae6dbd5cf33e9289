#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod evaluation;
pub mod parser;
pub mod predicate;
pub mod syntax;
pub mod world;

pub use evaluation::{evaluate, EvalError};
pub use parser::{parse, ParseError};
pub use predicate::{PredicateFn, PredicateLookup, PredicateTable};
pub use syntax::{BinaryOp, SyntaxNode};
pub use world::{AttributeError, ObjectLookup, Position, Shape, Size, World, WorldObject};
