pub mod cli;
pub mod engine;
pub mod invoker;
pub mod manifest;

pub use engine::{ConfigureEngine, EngineSettings, PythonConfigure};
pub use invoker::{invoke, Invoker};
pub use manifest::{arch_gcc64_complex_o, ConfigOption, OptionForm, OptionManifest};
