use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::world::{Position, Shape, Size, WorldObject};

/// A named boolean test over one, two, or three world objects.
///
/// The arity is part of the function value; the evaluator checks the
/// resolved argument count against it before invoking.
#[derive(Debug, Clone, Copy)]
pub enum PredicateFn {
    Unary(fn(&WorldObject) -> bool),
    Binary(fn(&WorldObject, &WorldObject) -> bool),
    Ternary(fn(&WorldObject, &WorldObject, &WorldObject) -> bool),
}

impl PredicateFn {
    pub fn arity(&self) -> usize {
        match self {
            PredicateFn::Unary(_) => 1,
            PredicateFn::Binary(_) => 2,
            PredicateFn::Ternary(_) => 3,
        }
    }

    /// Applies the predicate, or `None` when the argument count is wrong.
    pub fn invoke(&self, objects: &[&WorldObject]) -> Option<bool> {
        match (*self, objects) {
            (PredicateFn::Unary(f), &[a]) => Some(f(a)),
            (PredicateFn::Binary(f), &[a, b]) => Some(f(a, b)),
            (PredicateFn::Ternary(f), &[a, b, c]) => Some(f(a, b, c)),
            _ => None,
        }
    }
}

/// The narrow predicate-table interface the evaluator consumes.
pub trait PredicateLookup {
    fn get_predicate(&self, name: &str) -> Option<&PredicateFn>;
}

/// Predicate storage.
///
/// An explicitly constructed, read-only table passed into evaluation.
/// Lookup is by case-significant name.
#[derive(Debug, Clone, Default)]
pub struct PredicateTable {
    predicates: BTreeMap<String, PredicateFn>,
}

impl PredicateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, predicate: PredicateFn) {
        let _ = self.predicates.insert(String::from(name), predicate);
    }

    pub fn get(&self, name: &str) -> Option<&PredicateFn> {
        self.predicates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }

    /// The reference predicate set over shapes, sizes, and positions.
    pub fn standard() -> Self {
        let mut table = Self::new();

        table.insert("IsCube", PredicateFn::Unary(is_cube));
        table.insert("IsTetrahedron", PredicateFn::Unary(is_tetrahedron));
        table.insert("IsDodecahedron", PredicateFn::Unary(is_dodecahedron));
        table.insert("IsSmall", PredicateFn::Unary(is_small));
        table.insert("IsMedium", PredicateFn::Unary(is_medium));
        table.insert("IsLarge", PredicateFn::Unary(is_large));

        table.insert("IsSameShape", PredicateFn::Binary(is_same_shape));
        table.insert("IsSameSize", PredicateFn::Binary(is_same_size));
        table.insert("IsSmaller", PredicateFn::Binary(is_smaller));
        table.insert("IsLarger", PredicateFn::Binary(is_larger));
        table.insert("IsLeftOf", PredicateFn::Binary(is_left_of));
        table.insert("IsRightOf", PredicateFn::Binary(is_right_of));
        table.insert("IsFrontOf", PredicateFn::Binary(is_front_of));
        table.insert("IsBackOf", PredicateFn::Binary(is_back_of));
        table.insert("IsSameRow", PredicateFn::Binary(is_same_row));
        table.insert("IsSameCol", PredicateFn::Binary(is_same_col));
        table.insert("IsAdjacent", PredicateFn::Binary(is_adjacent));

        table.insert("IsBetween", PredicateFn::Ternary(is_between));

        table
    }
}

impl PredicateLookup for PredicateTable {
    fn get_predicate(&self, name: &str) -> Option<&PredicateFn> {
        self.predicates.get(name)
    }
}

fn is_cube(object: &WorldObject) -> bool {
    *object.shape() == Shape::Cube
}

fn is_tetrahedron(object: &WorldObject) -> bool {
    *object.shape() == Shape::Tetrahedron
}

fn is_dodecahedron(object: &WorldObject) -> bool {
    *object.shape() == Shape::Dodecahedron
}

fn is_small(object: &WorldObject) -> bool {
    *object.size() == Size::Small
}

fn is_medium(object: &WorldObject) -> bool {
    *object.size() == Size::Medium
}

fn is_large(object: &WorldObject) -> bool {
    *object.size() == Size::Large
}

fn is_same_shape(a: &WorldObject, b: &WorldObject) -> bool {
    a.shape() == b.shape()
}

fn is_same_size(a: &WorldObject, b: &WorldObject) -> bool {
    a.size() == b.size()
}

fn is_smaller(a: &WorldObject, b: &WorldObject) -> bool {
    a.size() < b.size()
}

fn is_larger(a: &WorldObject, b: &WorldObject) -> bool {
    a.size() > b.size()
}

fn is_left_of(a: &WorldObject, b: &WorldObject) -> bool {
    a.position().x < b.position().x
}

fn is_right_of(a: &WorldObject, b: &WorldObject) -> bool {
    a.position().x > b.position().x
}

fn is_front_of(a: &WorldObject, b: &WorldObject) -> bool {
    a.position().y > b.position().y
}

fn is_back_of(a: &WorldObject, b: &WorldObject) -> bool {
    a.position().y < b.position().y
}

// Axis convention: a row shares x, a column shares y.
fn is_same_row(a: &WorldObject, b: &WorldObject) -> bool {
    a.position().x == b.position().x
}

fn is_same_col(a: &WorldObject, b: &WorldObject) -> bool {
    a.position().y == b.position().y
}

fn is_adjacent(a: &WorldObject, b: &WorldObject) -> bool {
    let (pa, pb) = (a.position(), b.position());
    (pa.x - pb.x).abs() == 1 || (pa.y - pb.y).abs() == 1
}

/// Whether `target` lies strictly between `a` and `b` on a shared row,
/// a shared column, or a slope-±1 diagonal. Symmetric in `a` and `b`.
fn is_between(target: &WorldObject, a: &WorldObject, b: &WorldObject) -> bool {
    let (t, a, b) = (target.position(), a.position(), b.position());

    if t.x == a.x && a.x == b.x {
        strictly_between(a.y, t.y, b.y)
    } else if t.y == a.y && a.y == b.y {
        strictly_between(a.x, t.x, b.x)
    } else if on_unit_diagonal(a, b) && on_unit_diagonal(a, t) {
        strictly_between(a.x, t.x, b.x) && strictly_between(a.y, t.y, b.y)
    } else {
        false
    }
}

fn strictly_between(lo: i32, mid: i32, hi: i32) -> bool {
    (lo < mid && mid < hi) || (hi < mid && mid < lo)
}

// Equality of absolute coordinate differences stands in for the slope
// division, which is undefined when the points share a column.
fn on_unit_diagonal(a: &Position, b: &Position) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx != 0 && dx.abs() == dy.abs()
}
