use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::predicate::PredicateLookup;
use crate::syntax::{BinaryOp, SyntaxNode};
use crate::world::ObjectLookup;

/// A syntax tree that cannot be evaluated against the given world and
/// predicate table. Terminal for the evaluation call; nothing is guessed
/// or defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The predicate name is absent from the table.
    UnknownPredicate(String),
    /// An argument name does not name an object in the world.
    UnresolvedObject(String),
    /// The predicate was applied to the wrong number of objects.
    ArityMismatch {
        predicate: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownPredicate(name) => write!(f, "unknown predicate {:?}", name),
            EvalError::UnresolvedObject(name) => {
                write!(f, "no object named {:?} in the world", name)
            }
            EvalError::ArityMismatch {
                predicate,
                expected,
                found,
            } => write!(
                f,
                "predicate {:?} takes {} objects, got {}",
                predicate, expected, found
            ),
        }
    }
}

/// Evaluates a syntax tree against a world and a predicate table.
///
/// Both operands of a binary node are evaluated, left before right, so the
/// first failure in left-to-right depth-first order is the one reported.
/// Neither the world nor the table is ever mutated; the same tree can be
/// re-evaluated against other worlds.
pub fn evaluate(
    node: &SyntaxNode,
    world: &impl ObjectLookup,
    predicates: &impl PredicateLookup,
) -> Result<bool, EvalError> {
    match node {
        SyntaxNode::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs, world, predicates)?;
            let rhs = evaluate(rhs, world, predicates)?;
            Ok(match op {
                BinaryOp::And => lhs && rhs,
                BinaryOp::Or => lhs || rhs,
                BinaryOp::Implies => !lhs || rhs,
                BinaryOp::Iff => lhs == rhs,
            })
        }
        SyntaxNode::Not(operand) => evaluate(operand, world, predicates).map(|value| !value),
        SyntaxNode::Predicate { name, args } => {
            let Some(predicate) = predicates.get_predicate(name) else {
                return Err(EvalError::UnknownPredicate(name.clone()));
            };

            let objects = args
                .iter()
                .map(|arg| {
                    world
                        .get_object(arg)
                        .ok_or_else(|| EvalError::UnresolvedObject(arg.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let Some(verdict) = predicate.invoke(&objects) else {
                return Err(EvalError::ArityMismatch {
                    predicate: name.clone(),
                    expected: predicate.arity(),
                    found: objects.len(),
                });
            };

            log::trace!("{} -> {}", node, verdict);
            Ok(verdict)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::predicate::PredicateTable;
    use crate::world::{Position, Shape, Size, World, WorldObject};

    use SyntaxNode as N;

    // The three-object scenario world: two cubes and a tetrahedron.
    fn scenario_world() -> World {
        let mut world = World::new();
        world.add_object(WorldObject::new(
            "a",
            Shape::Cube,
            Size::Medium,
            Position::new(1, 1),
        ));
        world.add_object(WorldObject::new(
            "b",
            Shape::Cube,
            Size::Small,
            Position::new(3, 2),
        ));
        world.add_object(WorldObject::new(
            "c",
            Shape::Tetrahedron,
            Size::Medium,
            Position::new(2, 3),
        ));
        world
    }

    fn eval(expression: &str) -> Result<bool, EvalError> {
        let tree = parse(expression).unwrap();
        evaluate(&tree, &scenario_world(), &PredicateTable::standard())
    }

    #[test]
    fn test_scenario_expressions() {
        assert_eq!(eval("IsCube(a)"), Ok(true));
        assert_eq!(eval("IsCube(a) & IsCube(b)"), Ok(true));
        assert_eq!(eval("IsTetrahedron(c) & ~IsCube(c)"), Ok(true));
        assert_eq!(eval("IsSameShape(a, c)"), Ok(false));
        assert_eq!(eval("IsLeftOf(a, b) & IsLeftOf(a, c)"), Ok(true));
        assert_eq!(eval("IsSmaller(b, a) & IsSameSize(a, c)"), Ok(true));
    }

    #[test]
    fn test_connective_semantics() {
        assert_eq!(eval("IsCube(a) | IsCube(c)"), Ok(true));
        assert_eq!(eval("IsCube(c) | IsCube(a)"), Ok(true));
        assert_eq!(eval("IsCube(c) | IsTetrahedron(a)"), Ok(false));
        assert_eq!(eval("IsCube(c) -> IsCube(a)"), Ok(true));
        assert_eq!(eval("IsCube(a) -> IsCube(c)"), Ok(false));
        assert_eq!(eval("IsCube(a) <-> IsCube(b)"), Ok(true));
        assert_eq!(eval("IsCube(a) <-> IsCube(c)"), Ok(false));
        assert_eq!(eval("IsCube(c) <-> IsTetrahedron(b)"), Ok(true));
    }

    #[test]
    fn test_iff_is_symmetric() {
        let world = scenario_world();
        let table = PredicateTable::standard();
        let operands = [
            N::pred("IsCube", &["a"]),
            N::pred("IsCube", &["c"]),
            N::not(N::pred("IsSmall", &["b"])),
            N::and(N::pred("IsCube", &["a"]), N::pred("IsMedium", &["c"])),
        ];

        for x in &operands {
            for y in &operands {
                assert_eq!(
                    evaluate(&N::iff(x.clone(), y.clone()), &world, &table),
                    evaluate(&N::iff(y.clone(), x.clone()), &world, &table),
                );
            }
        }
    }

    #[test]
    fn test_implication_is_negated_disjunction() {
        let world = scenario_world();
        let table = PredicateTable::standard();
        let operands = [
            N::pred("IsCube", &["a"]),
            N::pred("IsCube", &["c"]),
            N::pred("IsSmall", &["b"]),
            N::not(N::pred("IsLarge", &["a"])),
        ];

        for x in &operands {
            for y in &operands {
                let implication = N::implies(x.clone(), y.clone());
                let disjunction = N::or(N::not(x.clone()), y.clone());
                assert_eq!(
                    evaluate(&implication, &world, &table),
                    evaluate(&disjunction, &world, &table),
                );
            }
        }
    }

    #[test]
    fn test_unknown_predicate_is_an_error() {
        assert_eq!(
            eval("IsSphere(a)"),
            Err(EvalError::UnknownPredicate("IsSphere".into()))
        );
        // Case matters; no fallback to a default verdict.
        assert_eq!(
            eval("iscube(a)"),
            Err(EvalError::UnknownPredicate("iscube".into()))
        );
    }

    #[test]
    fn test_unresolved_object_is_an_error() {
        assert_eq!(
            eval("IsCube(z)"),
            Err(EvalError::UnresolvedObject("z".into()))
        );
        assert_eq!(
            eval("IsSameShape(a, z)"),
            Err(EvalError::UnresolvedObject("z".into()))
        );
    }

    #[test]
    fn test_arity_mismatch_is_an_error() {
        assert_eq!(
            eval("IsCube(a, b)"),
            Err(EvalError::ArityMismatch {
                predicate: "IsCube".into(),
                expected: 1,
                found: 2,
            })
        );
        assert_eq!(
            eval("IsBetween(a, b)"),
            Err(EvalError::ArityMismatch {
                predicate: "IsBetween".into(),
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_failures_report_left_to_right() {
        // Both operands fail; the left one is reported. A short-circuiting
        // `|` would also mask the right-hand failure after a true left.
        assert_eq!(
            eval("IsCube(y) & IsCube(z)"),
            Err(EvalError::UnresolvedObject("y".into()))
        );
        assert_eq!(
            eval("IsCube(a) | Mystery(a)"),
            Err(EvalError::UnknownPredicate("Mystery".into()))
        );
        // Arguments resolve left to right within one atom, too.
        assert_eq!(
            eval("IsSameShape(y, z)"),
            Err(EvalError::UnresolvedObject("y".into()))
        );
    }

    #[test]
    fn test_tree_reuse_across_worlds() {
        let tree = parse("IsCube(a)").unwrap();
        let table = PredicateTable::standard();

        assert_eq!(evaluate(&tree, &scenario_world(), &table), Ok(true));

        let mut other = World::new();
        other.add_object(WorldObject::new(
            "a",
            Shape::Dodecahedron,
            Size::Large,
            Position::new(0, 0),
        ));
        assert_eq!(evaluate(&tree, &other, &table), Ok(false));
    }

    #[test]
    fn test_between_round_trip() {
        let mut world = World::new();
        world.add_object(WorldObject::new(
            "left",
            Shape::Cube,
            Size::Small,
            Position::new(0, 0),
        ));
        world.add_object(WorldObject::new(
            "mid",
            Shape::Cube,
            Size::Small,
            Position::new(1, 0),
        ));
        world.add_object(WorldObject::new(
            "right",
            Shape::Cube,
            Size::Small,
            Position::new(2, 0),
        ));
        let table = PredicateTable::standard();

        let forward = parse("IsBetween(mid, left, right)").unwrap();
        let backward = parse("IsBetween(mid, right, left)").unwrap();
        assert_eq!(evaluate(&forward, &world, &table), Ok(true));
        assert_eq!(evaluate(&backward, &world, &table), Ok(true));

        let off_line = parse("IsBetween(left, mid, right)").unwrap();
        assert_eq!(evaluate(&off_line, &world, &table), Ok(false));
    }
}
