pub mod forms_config;
pub mod paths;

pub use forms_config::{CancelPolicy, ConfigLoadError, FormsConfig};
pub use paths::ProjectPaths;
