//! Particle emission profiles.
//!
//! A profile decides where a new particle starts relative to the emitter and
//! which way it initially heads. The set of shapes is closed.

use std::fmt;

/// A 2D vector of `f32` components.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const UNIT_X: Vector2 = Vector2::new(1.0, 0.0);
    pub const UNIT_Y: Vector2 = Vector2::new(0.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Parses two whitespace-separated floats, e.g. `"1 0"`.
    ///
    /// Returns `None` unless the text holds exactly two numbers. Components
    /// such as `"inf"` or `"1e39"` parse to non-finite values; callers that
    /// need finite vectors check [`Vector2::is_finite`].
    pub fn parse(s: &str) -> Option<Vector2> {
        let mut parts = s.split_whitespace();
        let x = parts.next()?.parse::<f32>().ok()?;
        let y = parts.next()?.parse::<f32>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Vector2::new(x, y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Initial heading of particles emitted from a ring or circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Radiation {
    /// Heading is left as chosen by the emitter.
    #[default]
    None = 0,
    /// Heading points toward the centre.
    In = 1,
    /// Heading points away from the centre.
    Out = 2,
}

impl Radiation {
    /// Creates a Radiation from its wire ordinal.
    pub fn from_i32(v: i32) -> Option<Radiation> {
        match v {
            0 => Some(Radiation::None),
            1 => Some(Radiation::In),
            2 => Some(Radiation::Out),
            _ => None,
        }
    }

    /// Returns the wire ordinal.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// A particle emission profile.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Profile {
    /// Every particle starts at the emitter position.
    #[default]
    Point,
    /// Particles start along a segment of `length` centred on the emitter.
    Line { axis: Vector2, length: f32 },
    /// Particles start on the edge of a ring.
    Ring { radius: f32, radiate: Radiation },
    /// Particles start on the outline of a box.
    Box { width: f32, height: f32 },
    /// Particles start anywhere inside a box.
    BoxFill { width: f32, height: f32 },
    /// Particles start on the outline of a box, spread evenly by perimeter.
    BoxUniform { width: f32, height: f32 },
    /// Particles start anywhere inside a circle.
    Circle { radius: f32, radiate: Radiation },
    /// Particles head in `direction`, jittered by up to `spread` radians.
    Spray { direction: Vector2, spread: f32 },
}

impl Profile {
    /// Variant names as they appear in the `type` property.
    pub const NAMES: [&'static str; 8] = [
        "Point",
        "Line",
        "Ring",
        "Box",
        "BoxFill",
        "BoxUniform",
        "Circle",
        "Spray",
    ];

    pub fn point() -> Self {
        Profile::Point
    }

    pub fn line(axis: Vector2, length: f32) -> Self {
        Profile::Line { axis, length }
    }

    pub fn ring(radius: f32, radiate: Radiation) -> Self {
        Profile::Ring { radius, radiate }
    }

    pub fn rect(width: f32, height: f32) -> Self {
        Profile::Box { width, height }
    }

    pub fn rect_fill(width: f32, height: f32) -> Self {
        Profile::BoxFill { width, height }
    }

    pub fn rect_uniform(width: f32, height: f32) -> Self {
        Profile::BoxUniform { width, height }
    }

    pub fn circle(radius: f32, radiate: Radiation) -> Self {
        Profile::Circle { radius, radiate }
    }

    pub fn spray(direction: Vector2, spread: f32) -> Self {
        Profile::Spray { direction, spread }
    }

    /// Returns the variant name used by the `type` property.
    pub fn name(&self) -> &'static str {
        match self {
            Profile::Point => "Point",
            Profile::Line { .. } => "Line",
            Profile::Ring { .. } => "Ring",
            Profile::Box { .. } => "Box",
            Profile::BoxFill { .. } => "BoxFill",
            Profile::BoxUniform { .. } => "BoxUniform",
            Profile::Circle { .. } => "Circle",
            Profile::Spray { .. } => "Spray",
        }
    }

    /// Returns the fully qualified path of the variant, e.g.
    /// `game_shapes::model::profile::Line`.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", module_path!(), self.name())
    }

    /// Returns true if the variant carries no parameters.
    pub fn is_unit(&self) -> bool {
        matches!(self, Profile::Point)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Point => write!(f, "Point"),
            Profile::Line { axis, length } => write!(f, "Line(axis={axis}, length={length})"),
            Profile::Ring { radius, radiate } => {
                write!(f, "Ring(radius={radius}, radiate={radiate:?})")
            }
            Profile::Box { width, height } => write!(f, "Box({width}x{height})"),
            Profile::BoxFill { width, height } => write!(f, "BoxFill({width}x{height})"),
            Profile::BoxUniform { width, height } => write!(f, "BoxUniform({width}x{height})"),
            Profile::Circle { radius, radiate } => {
                write!(f, "Circle(radius={radius}, radiate={radiate:?})")
            }
            Profile::Spray { direction, spread } => {
                write!(f, "Spray(direction={direction}, spread={spread})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_parse() {
        assert_eq!(Vector2::parse("1 0"), Some(Vector2::UNIT_X));
        assert_eq!(Vector2::parse("  -2.5   3 "), Some(Vector2::new(-2.5, 3.0)));
        assert_eq!(Vector2::parse("1"), None);
        assert_eq!(Vector2::parse("1 2 3"), None);
        assert_eq!(Vector2::parse("1 x"), None);
        assert_eq!(Vector2::parse(""), None);
    }

    #[test]
    fn test_vector_display_parses_back() {
        let v = Vector2::new(0.5, -1.25);
        assert_eq!(v.to_string(), "0.5 -1.25");
        assert_eq!(Vector2::parse(&v.to_string()), Some(v));
    }

    #[test]
    fn test_radiation_ordinals() {
        for r in [Radiation::None, Radiation::In, Radiation::Out] {
            assert_eq!(Radiation::from_i32(r.as_i32()), Some(r));
        }
        assert_eq!(Radiation::from_i32(1), Some(Radiation::In));
        assert_eq!(Radiation::from_i32(3), None);
        assert_eq!(Radiation::from_i32(-1), None);
    }

    #[test]
    fn test_names_match_variants() {
        let profiles = [
            Profile::point(),
            Profile::line(Vector2::UNIT_X, 1.0),
            Profile::ring(1.0, Radiation::Out),
            Profile::rect(1.0, 2.0),
            Profile::rect_fill(1.0, 2.0),
            Profile::rect_uniform(1.0, 2.0),
            Profile::circle(1.0, Radiation::In),
            Profile::spray(Vector2::UNIT_Y, 0.5),
        ];
        for (profile, name) in profiles.iter().zip(Profile::NAMES) {
            assert_eq!(profile.name(), name);
        }
    }

    #[test]
    fn test_qualified_name() {
        let name = Profile::line(Vector2::UNIT_X, 1.0).qualified_name();
        assert!(name.ends_with("::Line"));
        assert!(name.starts_with("game_shapes::"));
    }
}
