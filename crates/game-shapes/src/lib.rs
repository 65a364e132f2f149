//! Layout thickness values and a JSON codec for particle emission profiles.
//!
//! Two independent pieces live here:
//!
//! - [`Thickness`]: four edge offsets used for GUI margins and padding, with a
//!   compact text form (`"4"`, `"4 7"`, `"1, 2, 3, 4"`).
//! - [`Profile`]: the closed set of particle emission shapes and a reader and
//!   writer for their tagged JSON form.
//!
//! # Quick Start
//!
//! ```rust
//! use game_shapes::{decode_profile, Profile, Thickness, Vector2};
//!
//! let margin: Thickness = "4, 7".parse().unwrap();
//! assert_eq!(margin, Thickness::new(4, 7, 4, 7));
//! assert_eq!(margin.to_string(), "4 7");
//!
//! let profile = decode_profile(r#"{"type":"Line","axis":"1 0","length":5.0}"#).unwrap();
//! assert_eq!(profile, Some(Profile::line(Vector2::new(1.0, 0.0), 5.0)));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Thickness, Profile, Radiation, Vector2
//! - [`codec`]: Profile JSON reader/writer and `serde` impls
//! - [`error`]: Error types
//! - [`limits`]: Input limits and property names
//!
//! # Lossy encoding
//!
//! [`encode_profile`] writes only the `type` tag (the variant's qualified
//! path), so its output does not decode back to the same profile. Pass
//! [`EncodeOptions::lossless`] to [`encode_profile_with_options`] to keep the
//! variant's fields.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    decode_profile, decode_profile_value, decode_profile_with_options, encode_profile,
    encode_profile_value, encode_profile_with_options, DecodeOptions, EncodeOptions, FieldOrder,
    MissingTypePolicy, TagStyle,
};
pub use error::{DecodeError, EncodeError, ErrorCode, ThicknessParseError};
pub use model::{Profile, Radiation, Thickness, Vector2};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
