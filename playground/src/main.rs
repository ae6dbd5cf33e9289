use tarski::{evaluate, parse, Position, PredicateTable, Shape, Size, World, WorldObject};

// Two cubes and a tetrahedron on a small grid.
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

// The six-block world, with three dodecahedra on a diagonal.
fn block_world() -> World {
    let mut world = World::new();
    world.add_object(WorldObject::new(
        "A",
        Shape::Cube,
        Size::Small,
        Position::new(0, 0),
    ));
    world.add_object(WorldObject::new(
        "B",
        Shape::Tetrahedron,
        Size::Medium,
        Position::new(1, 0),
    ));
    world.add_object(WorldObject::new(
        "C",
        Shape::Dodecahedron,
        Size::Large,
        Position::new(2, 0),
    ));
    world.add_object(WorldObject::new(
        "D",
        Shape::Dodecahedron,
        Size::Large,
        Position::new(2, 0),
    ));
    world.add_object(WorldObject::new(
        "E",
        Shape::Dodecahedron,
        Size::Large,
        Position::new(3, 1),
    ));
    world.add_object(WorldObject::new(
        "F",
        Shape::Dodecahedron,
        Size::Large,
        Position::new(4, 2),
    ));
    world
}

const SCENARIO_EXPRESSIONS: &[&str] = &[
    "IsCube(a)",
    "IsCube(a) & IsCube(b)",
    "IsTetrahedron(c) & ~IsCube(c)",
    "IsSameShape(a, c)",
    "IsLeftOf(a, b) & IsLeftOf(b, c)",
    "IsSmall(b) -> IsSmaller(b, a)",
];

const BLOCK_EXPRESSIONS: &[&str] = &[
    "IsBetween(B, C, A) & ~IsCube(B)",
    "IsRightOf(B, A) & IsLeftOf(B, C)",
    "IsSameCol(A, B) & IsSameCol(B, C)",
    "IsSameRow(A, B)",
    "IsSameShape(A, C)",
    "IsAdjacent(A, B) <-> IsAdjacent(B, A)",
    "IsBetween(E, D, F) & IsBetween(E, F, D) & IsSameShape(D, E) & IsDodecahedron(F) & ~IsLeftOf(F, A)",
    "IsCube(G)",
];

fn check(title: &str, world: &World, expressions: &[&str], predicates: &PredicateTable) {
    println!("== {} ==", title);
    print!("{}", world);
    println!();

    for expression in expressions {
        match parse(expression) {
            Ok(tree) => {
                log::debug!("{:?}", tree);
                match evaluate(&tree, world, predicates) {
                    Ok(verdict) => println!("{} - {}", tree, verdict),
                    Err(e) => println!("{} - error: {}", tree, e),
                }
            }
            Err(e) => println!("{} - error: {}", expression, e),
        }
    }
    println!();
}

fn main() {
    env_logger::init();
    log::info!("Preparing worlds");

    let predicates = PredicateTable::standard();

    check("scenario", &scenario_world(), SCENARIO_EXPRESSIONS, &predicates);
    check("blocks", &block_world(), BLOCK_EXPRESSIONS, &predicates);
}
