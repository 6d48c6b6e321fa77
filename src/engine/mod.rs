//! The configure engine seam
//!
//! The invoker only knows this trait. `PythonConfigure` is the real PETSc engine; tests
//! substitute a recording fake.

pub mod python;

pub use python::{EngineSettings, PythonConfigure, ENGINE_MODULE_FILE};

/// An entry point that accepts an ordered list of option strings
pub trait ConfigureEngine {
    type Outcome;
    type Error;

    fn configure(&self, options: &[String]) -> Result<Self::Outcome, Self::Error>;
}

impl<E: ConfigureEngine + ?Sized> ConfigureEngine for &E {
    type Outcome = E::Outcome;
    type Error = E::Error;

    fn configure(&self, options: &[String]) -> Result<Self::Outcome, Self::Error> {
        (**self).configure(options)
    }
}
