//! JSON encoding/decoding for particle emission profiles.
//!
//! Also hosts the `serde` impls for [`Profile`](crate::Profile) and
//! [`Thickness`](crate::Thickness).

pub mod primitives;
pub mod profile;
pub mod serde_impl;

pub use primitives::{
    FieldSource, PropertyReader, PropertyTable, PropertyWriter, RawDocument, RawObject,
};
pub use profile::{
    decode_profile, decode_profile_value, decode_profile_with_options, encode_profile,
    encode_profile_value, encode_profile_with_options, DecodeOptions, EncodeOptions, FieldOrder,
    MissingTypePolicy, TagStyle,
};
