pub mod bundle;
pub mod plugin;
pub mod provider;
pub mod store;

pub use bundle::LanguageBundle;
pub use plugin::{ID_PREFIX, LanguageDir, LocalizationPlugin};
pub use provider::{BundleProvider, DirBundleProvider, ResourceLoadError};
pub use store::{FormattingError, Localization};
