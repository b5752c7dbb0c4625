//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::CentavosPaths;
pub use settings::Settings;
