use crate::engine::ConfigureEngine;
use crate::manifest::OptionManifest;
use log::{debug, trace};

/// Pairs a manifest with the engine it is handed to
pub struct Invoker<E> {
    manifest: OptionManifest,
    engine: E,
}

impl<E: ConfigureEngine> Invoker<E> {
    pub fn new(manifest: OptionManifest, engine: E) -> Self {
        Self { manifest, engine }
    }

    pub fn manifest(&self) -> &OptionManifest {
        &self.manifest
    }

    /// Hand the manifest to the engine once and return whatever it returns.
    pub fn run(self) -> Result<E::Outcome, E::Error> {
        invoke(&self.manifest, &self.engine)
    }
}

/// Same as [`Invoker::run`] for borrowed inputs
pub fn invoke<E: ConfigureEngine>(
    manifest: &OptionManifest,
    engine: &E,
) -> Result<E::Outcome, E::Error> {
    debug!("Passing {} options to configure: {}", manifest.len(), manifest);
    for option in manifest.iter() {
        trace!("{:?} {} = {:?}", option.form(), option.name(), option.value());
    }
    engine.configure(manifest.as_slice())
}
