//! Edge offsets (margins and padding) for GUI layout.
//!
//! A [`Thickness`] holds four independent signed offsets. Its text form is a
//! comma-separated list of one, two or four integers:
//!
//! - `"4"`: all sides
//! - `"4, 7"` (or the compact `"4 7"`): left/right, then top/bottom
//! - `"1, 2, 3, 4"`: left, top, right, bottom
//!
//! [`Display`](std::fmt::Display) emits the shortest form, but the four-value
//! form is written left, right, top, bottom. Existing skin files depend on that
//! order, so it is kept; use [`Thickness::to_ltrb_string`] when the text must
//! parse back to the same value.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::ThicknessParseError;
use crate::limits::MAX_THICKNESS_LEN;

/// Four edge offsets: left, top, right, bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Thickness {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Thickness {
    /// Zero on every side.
    pub const ZERO: Thickness = Thickness::new(0, 0, 0, 0);

    /// Creates a thickness from explicit left, top, right and bottom offsets.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a thickness with the same offset on every side.
    pub const fn uniform(all: i32) -> Self {
        Self::new(all, all, all, all)
    }

    /// Creates a thickness from a horizontal (left/right) and vertical (top/bottom) pair.
    pub const fn symmetric(left_right: i32, top_bottom: i32) -> Self {
        Self::new(left_right, top_bottom, left_right, top_bottom)
    }

    /// Total horizontal offset (left + right), wrapping on overflow.
    pub fn horizontal(&self) -> i32 {
        self.left.wrapping_add(self.right)
    }

    /// Total vertical offset (top + bottom), wrapping on overflow.
    pub fn vertical(&self) -> i32 {
        self.top.wrapping_add(self.bottom)
    }

    /// Parses a thickness from its text form.
    ///
    /// The text is split on commas and each token is trimmed. Text without any
    /// comma is split on whitespace instead, which accepts the compact
    /// `"{left} {top}"` form produced by `Display`. One, two or four integers
    /// are accepted; any other count is an error naming the input.
    pub fn parse(s: &str) -> Result<Thickness, ThicknessParseError> {
        if s.len() > MAX_THICKNESS_LEN {
            return Err(ThicknessParseError::LengthExceedsLimit {
                len: s.len(),
                max: MAX_THICKNESS_LEN,
            });
        }

        let tokens: Vec<&str> = if s.contains(',') {
            s.split(',').map(str::trim).collect()
        } else {
            s.split_whitespace().collect()
        };

        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            let value = token.parse::<i32>().map_err(|_| ThicknessParseError::InvalidInteger {
                input: s.to_string(),
                token: token.to_string(),
            })?;
            values.push(value);
        }

        match values[..] {
            [all] => Ok(Thickness::uniform(all)),
            [left_right, top_bottom] => Ok(Thickness::symmetric(left_right, top_bottom)),
            [left, top, right, bottom] => Ok(Thickness::new(left, top, right, bottom)),
            _ => Err(ThicknessParseError::InvalidTokenCount {
                input: s.to_string(),
                count: values.len(),
            }),
        }
    }

    /// Formats all four offsets as `"left, top, right, bottom"`.
    ///
    /// Unlike `Display`, this always parses back to the same value.
    pub fn to_ltrb_string(&self) -> String {
        format!("{}, {}, {}, {}", self.left, self.top, self.right, self.bottom)
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.left == self.right && self.top == self.bottom {
            if self.left == self.top {
                write!(f, "{}", self.left)
            } else {
                write!(f, "{} {}", self.left, self.top)
            }
        } else {
            // Left, right, top, bottom: not the constructor order.
            write!(f, "{}, {}, {}, {}", self.left, self.right, self.top, self.bottom)
        }
    }
}

impl FromStr for Thickness {
    type Err = ThicknessParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Thickness::parse(s)
    }
}

impl From<i32> for Thickness {
    fn from(all: i32) -> Self {
        Thickness::uniform(all)
    }
}

// Offsets are unchecked 32-bit integers: arithmetic wraps in every build profile.

impl Add for Thickness {
    type Output = Thickness;

    fn add(self, rhs: Thickness) -> Thickness {
        Thickness::new(
            self.left.wrapping_add(rhs.left),
            self.top.wrapping_add(rhs.top),
            self.right.wrapping_add(rhs.right),
            self.bottom.wrapping_add(rhs.bottom),
        )
    }
}

impl Sub for Thickness {
    type Output = Thickness;

    fn sub(self, rhs: Thickness) -> Thickness {
        Thickness::new(
            self.left.wrapping_sub(rhs.left),
            self.top.wrapping_sub(rhs.top),
            self.right.wrapping_sub(rhs.right),
            self.bottom.wrapping_sub(rhs.bottom),
        )
    }
}

impl Neg for Thickness {
    type Output = Thickness;

    fn neg(self) -> Thickness {
        Thickness::new(
            self.left.wrapping_neg(),
            self.top.wrapping_neg(),
            self.right.wrapping_neg(),
            self.bottom.wrapping_neg(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Thickness::uniform(3), Thickness::new(3, 3, 3, 3));
        assert_eq!(Thickness::symmetric(1, 2), Thickness::new(1, 2, 1, 2));
        assert_eq!(Thickness::from(5), Thickness::uniform(5));
        assert_eq!(Thickness::default(), Thickness::ZERO);
    }

    #[test]
    fn test_parse_token_counts() {
        assert_eq!(Thickness::parse("4").unwrap(), Thickness::uniform(4));
        assert_eq!(Thickness::parse("4,7").unwrap(), Thickness::symmetric(4, 7));
        assert_eq!(Thickness::parse("4 7").unwrap(), Thickness::symmetric(4, 7));
        assert_eq!(Thickness::parse("1, 2, 3, 4").unwrap(), Thickness::new(1, 2, 3, 4));
        assert_eq!(Thickness::parse(" -1,-2 ").unwrap(), Thickness::symmetric(-1, -2));
    }

    #[test]
    fn test_parse_rejects_three_values() {
        let err = Thickness::parse("1,2,3").unwrap_err();
        assert_eq!(
            err,
            ThicknessParseError::InvalidTokenCount {
                input: "1,2,3".to_string(),
                count: 3,
            }
        );
        assert!(err.to_string().contains("1,2,3"));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!(matches!(
            Thickness::parse("1,x"),
            Err(ThicknessParseError::InvalidInteger { token, .. }) if token == "x"
        ));
        assert!(matches!(
            Thickness::parse("1,,2"),
            Err(ThicknessParseError::InvalidInteger { token, .. }) if token.is_empty()
        ));
        assert!(matches!(
            Thickness::parse(""),
            Err(ThicknessParseError::InvalidTokenCount { count: 0, .. })
        ));
        assert!(matches!(
            Thickness::parse("99999999999"),
            Err(ThicknessParseError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_parse_length_limit() {
        let long = "1".repeat(MAX_THICKNESS_LEN + 1);
        assert!(matches!(
            Thickness::parse(&long),
            Err(ThicknessParseError::LengthExceedsLimit { .. })
        ));
    }

    #[test]
    fn test_display_compact_forms() {
        assert_eq!(Thickness::uniform(4).to_string(), "4");
        assert_eq!(Thickness::symmetric(4, 7).to_string(), "4 7");
        assert_eq!(Thickness::new(1, 2, 3, 4).to_string(), "1, 3, 2, 4");
    }

    #[test]
    fn test_display_parse_canonical_forms() {
        for s in ["4", "4 7", "-3 0"] {
            assert_eq!(Thickness::parse(s).unwrap().to_string(), s);
        }
        // Four values come back left, right, top, bottom.
        assert_eq!(Thickness::parse("1, 2, 3, 4").unwrap().to_string(), "1, 3, 2, 4");
    }

    #[test]
    fn test_ltrb_string_parses_back() {
        let t = Thickness::new(1, 2, 3, 4);
        assert_eq!(t.to_ltrb_string(), "1, 2, 3, 4");
        assert_eq!(Thickness::parse(&t.to_ltrb_string()).unwrap(), t);
    }

    #[test]
    fn test_equality_per_field() {
        let base = Thickness::new(1, 2, 3, 4);
        assert_eq!(base, Thickness::new(1, 2, 3, 4));
        assert_ne!(base, Thickness::new(0, 2, 3, 4));
        assert_ne!(base, Thickness::new(1, 0, 3, 4));
        assert_ne!(base, Thickness::new(1, 2, 0, 4));
        assert_ne!(base, Thickness::new(1, 2, 3, 0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Thickness::new(1, 2, 3, 4);
        let b = Thickness::uniform(1);
        assert_eq!(a + b, Thickness::new(2, 3, 4, 5));
        assert_eq!(a - b, Thickness::new(0, 1, 2, 3));
        assert_eq!(-a, Thickness::new(-1, -2, -3, -4));
        assert_eq!(a.horizontal(), 4);
        assert_eq!(a.vertical(), 6);
    }

    #[test]
    fn test_arithmetic_wraps_at_i32_bounds() {
        let max = Thickness::uniform(i32::MAX);
        assert_eq!(max.horizontal(), -2);
        assert_eq!(max.vertical(), -2);
        assert_eq!(max + Thickness::uniform(1), Thickness::uniform(i32::MIN));
        assert_eq!(
            Thickness::uniform(i32::MIN) - Thickness::new(1, 0, 0, 0),
            Thickness::new(i32::MAX, i32::MIN, i32::MIN, i32::MIN)
        );
        assert_eq!(-Thickness::uniform(i32::MIN), Thickness::uniform(i32::MIN));
        assert_eq!(Thickness::new(i32::MIN, 0, -1, 0).horizontal(), i32::MAX);
    }
}
