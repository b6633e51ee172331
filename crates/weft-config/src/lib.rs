mod common;
mod descriptor;

pub use descriptor::{DEFAULT_DESCRIPTOR_FILE, load_descriptor, load_descriptor_from};
