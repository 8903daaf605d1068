//! Static portfolio content: the domain records every view renders from,
//! the built-in profile, and the optional TOML override loader.

pub mod domain;
mod load;
pub mod profile;

pub use load::{load_profile, ContentError};
pub use profile::builtin_profile;
