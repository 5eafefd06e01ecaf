//! Configuration for EEA
//!
//! Path resolution and the JSON settings file.

pub mod paths;
pub mod settings;

pub use paths::EeaPaths;
pub use settings::Settings;
