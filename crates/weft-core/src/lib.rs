use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::{Arc, Once};
use weft_config::{load_descriptor, load_descriptor_from};
use weft_types::{ConfigError, Descriptor, PluginRef, ThemeConfig};

static INIT: Once = Once::new();

pub fn init_logger() {
  INIT.call_once(|| {
    env_logger::Builder::from_default_env()
      .filter_level(log::LevelFilter::Info)
      .format_timestamp_secs()
      .format_module_path(true)
      .format_target(false)
      .init();

    info!("The initialization of the log system is complete");
    debug!("Debug level log is enabled");
  });
}

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// BuildContext builder.
///
/// By default the descriptor is resolved against the current directory,
/// the way the build tool runs from a project root. Embedders that run
/// elsewhere can point the builder at an explicit descriptor path.
///
/// # Examples
///
/// ```no_run
/// use weft_core::BuildContext;
///
/// let context = BuildContext::builder().build()?;
/// for plugin in context.plugin_order() {
///   println!("will apply {plugin}");
/// }
/// # Ok::<(), weft_core::CoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct BuildContextBuilder {
  descriptor_path: Option<PathBuf>,
}

impl BuildContextBuilder {
  #[must_use]
  pub fn new() -> Self {
    BuildContextBuilder {
      descriptor_path: None,
    }
  }

  /// Override the conventional `weft.config.json` location.
  #[must_use]
  pub fn descriptor_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.descriptor_path = Some(path.into());
    self
  }

  /// Build a BuildContext instance.
  ///
  /// Steps performed:
  /// 1. Initialize the logging system
  /// 2. Load the configuration descriptor (fresh on every invocation)
  /// 3. Raise the downstream warning for an empty content list
  ///
  /// # Errors
  ///
  /// - `CoreError::Config` - Descriptor loading failed
  pub fn build(self) -> Result<BuildContext, CoreError> {
    init_logger();
    info!("BuildContext Start Init");

    let descriptor = match &self.descriptor_path {
      Some(path) => load_descriptor_from(path)?,
      None => load_descriptor()?,
    };
    info!("Descriptor: {:?}", descriptor);

    if descriptor.content.is_empty() {
      warn!("'content' lists no glob patterns; the scan step will find no templates");
    }

    Ok(BuildContext {
      descriptor: Arc::new(descriptor),
    })
  }
}

/// BuildContext instance.
///
/// Holds the loaded descriptor behind `Arc` so the embedding tool can
/// hand it to its scanning and generation stages without cloning. The
/// descriptor has exactly one state once built and is never mutated.
pub struct BuildContext {
  descriptor: Arc<Descriptor>,
}

impl BuildContext {
  /// Create a BuildContext builder (recommended construction method).
  pub fn builder() -> BuildContextBuilder {
    BuildContextBuilder::new()
  }

  /// Shared handle to the full descriptor.
  #[must_use]
  pub fn descriptor(&self) -> Arc<Descriptor> {
    Arc::clone(&self.descriptor)
  }

  /// Glob patterns naming the template files to scan, in listed order.
  #[must_use]
  pub fn content_globs(&self) -> &[String] {
    &self.descriptor.content
  }

  /// Plugin references in application order.
  #[must_use]
  pub fn plugin_order(&self) -> &[PluginRef] {
    &self.descriptor.plugins
  }

  /// Whether layout containers are centered.
  #[must_use]
  pub fn container_centered(&self) -> bool {
    self.descriptor.theme.container.center
  }

  /// Theme overrides to merge into the default style vocabulary.
  #[must_use]
  pub fn theme(&self) -> &ThemeConfig {
    &self.descriptor.theme
  }
}
