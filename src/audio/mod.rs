pub mod filename;
pub mod metadata;
pub mod probe;
