//! Data model types.
//!
//! - Thickness (layout edge offsets)
//! - Profiles (particle emission shapes)

pub mod profile;
pub mod thickness;

pub use profile::{Profile, Radiation, Vector2};
pub use thickness::Thickness;
