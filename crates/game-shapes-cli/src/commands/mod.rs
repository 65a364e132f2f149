pub mod profile;
pub mod thickness;
