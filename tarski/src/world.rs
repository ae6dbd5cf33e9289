use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use getset::Getters;

/// The shape or size spelling is not one this world knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    UnknownShape(String),
    UnknownSize(String),
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::UnknownShape(s) => write!(f, "unknown shape {:?}", s),
            AttributeError::UnknownSize(s) => write!(f, "unknown size {:?}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Shape {
    Cube,
    Tetrahedron,
    Dodecahedron,
}

impl FromStr for Shape {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(Shape::Cube),
            "tet" | "tetrahedron" => Ok(Shape::Tetrahedron),
            "dodec" | "dodecahedron" => Ok(Shape::Dodecahedron),
            _ => Err(AttributeError::UnknownShape(s.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Cube => "cube",
            Shape::Tetrahedron => "tetrahedron",
            Shape::Dodecahedron => "dodecahedron",
        })
    }
}

/// Object sizes, ordered smallest first so that size comparisons are the
/// derived ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl FromStr for Size {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(AttributeError::UnknownSize(s.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        })
    }
}

/// A grid position. `x` grows to the right, `y` grows frontward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A shape placed in the world. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct WorldObject {
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    shape: Shape,
    #[getset(get = "pub")]
    size: Size,
    #[getset(get = "pub")]
    position: Position,
}

impl WorldObject {
    pub fn new(name: &str, shape: Shape, size: Size, position: Position) -> Self {
        Self {
            name: name.to_string(),
            shape,
            size,
            position,
        }
    }
}

/// The narrow world interface the evaluator consumes: lookup by unique name
/// is the only access path predicates use.
pub trait ObjectLookup {
    fn get_object(&self, name: &str) -> Option<&WorldObject>;
}

/// Object storage.
///
/// Holds all objects of one world, keyed by their unique name.
#[derive(Debug, Clone, Default)]
pub struct World {
    objects: BTreeMap<String, WorldObject>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object. A name that is already taken keeps its first object.
    pub fn add_object(&mut self, object: WorldObject) {
        let _ = self.objects.entry(object.name().clone()).or_insert(object);
    }

    pub fn get_object(&self, name: &str) -> Option<&WorldObject> {
        self.objects.get(name)
    }

    pub fn objects(&self) -> impl Iterator<Item = &WorldObject> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectLookup for World {
    fn get_object(&self, name: &str) -> Option<&WorldObject> {
        self.objects.get(name)
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shapes: {}", self.len())?;
        for object in self.objects.values() {
            writeln!(
                f,
                "{} -> {} {} at {}",
                object.name(),
                object.size(),
                object.shape(),
                object.position()
            )?;
        }
        Ok(())
    }
}
