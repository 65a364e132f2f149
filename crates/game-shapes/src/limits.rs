//! Input limits and wire constants.

/// Maximum accepted length of a profile JSON document, in bytes.
pub const MAX_PROFILE_JSON_LEN: usize = 64 * 1024;

/// Maximum accepted length of a thickness string, in bytes.
pub const MAX_THICKNESS_LEN: usize = 256;

/// Discriminator property on every profile object (matched case-insensitively).
pub const TYPE_PROPERTY: &str = "type";

/// Field names in the order the fixed-order reader expects them.
pub mod fields {
    pub const LINE: [&str; 2] = ["axis", "length"];
    pub const RING: [&str; 2] = ["radius", "radiate"];
    pub const BOX: [&str; 2] = ["width", "height"];
    pub const CIRCLE: [&str; 2] = ["radius", "radiate"];
    pub const SPRAY: [&str; 2] = ["direction", "spread"];
}
