pub mod descriptor;

pub use descriptor::{ConfigError, ContainerConfig, Descriptor, PluginRef, ThemeConfig};
