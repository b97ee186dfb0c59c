//! Component 4 – write generated artifacts to disk.
pub mod header;
