use super::ConfigureEngine;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// File that marks the engine directory
pub const ENGINE_MODULE_FILE: &str = "configure.py";

// argv[1] is the engine directory, argv[2:] the options. petsc_configure merges
// sys.argv into its options, so argv is cut back to the interpreter slot first.
const BOOTSTRAP: &str = "import sys\n\
engine_dir = sys.argv[1]\n\
options = sys.argv[2:]\n\
del sys.argv[1:]\n\
sys.path.insert(0, engine_dir)\n\
import configure\n\
configure.petsc_configure(options)\n";

#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Python interpreter used to host the engine
    pub interpreter: PathBuf,
    /// Engine directory, relative to the PETSc root
    pub engine_dir: PathBuf,
    /// Directory the search starts from; `None` means the current directory
    pub search_root: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("python3"),
            engine_dir: PathBuf::from("config"),
            search_root: None,
        }
    }
}

/// PETSc's `configure.petsc_configure`, hosted by an external Python interpreter
#[derive(Debug, Clone)]
pub struct PythonConfigure {
    interpreter: PathBuf,
    engine_dir: PathBuf,
}

impl PythonConfigure {
    /// Locate the engine directory, starting at the search root and walking up its ancestors.
    pub fn resolve(settings: EngineSettings) -> Result<Self> {
        let start = match settings.search_root {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to get current directory")?,
        };
        let start = std::path::absolute(&start)
            .with_context(|| format!("Failed to make search root absolute: {:?}", start))?;

        let mut searched = Vec::new();
        for root in start.ancestors() {
            let candidate = root.join(&settings.engine_dir);
            debug!("Looking for {} in {:?}", ENGINE_MODULE_FILE, candidate);

            if candidate.join(ENGINE_MODULE_FILE).is_file() {
                info!("Using configure engine at {:?}", candidate);
                return Ok(Self {
                    interpreter: settings.interpreter,
                    engine_dir: candidate,
                });
            }
            searched.push(candidate.display().to_string());
        }

        anyhow::bail!(
            "Cannot locate configure engine '{}'. Searched: {}",
            ENGINE_MODULE_FILE,
            searched.join(", ")
        )
    }

    pub fn engine_dir(&self) -> &Path {
        &self.engine_dir
    }

    /// PETSc root the engine runs from
    pub fn root_dir(&self) -> &Path {
        self.engine_dir.parent().unwrap_or(&self.engine_dir)
    }

    /// The interpreter invocation for one configure run
    pub fn command(&self, options: &[String]) -> Command {
        let mut command = Command::new(&self.interpreter);
        command
            .arg("-c")
            .arg(BOOTSTRAP)
            .arg(&self.engine_dir)
            .args(options)
            .current_dir(self.root_dir());
        command
    }
}

impl ConfigureEngine for PythonConfigure {
    type Outcome = ExitStatus;
    type Error = anyhow::Error;

    fn configure(&self, options: &[String]) -> Result<ExitStatus> {
        debug!("Launching {:?} with {} options", self.interpreter, options.len());

        let status = self
            .command(options)
            .status()
            .with_context(|| format!("Failed to launch interpreter: {:?}", self.interpreter))?;

        if status.success() {
            info!("Configure engine finished: {}", status);
        } else {
            warn!("Configure engine failed: {}", status);
        }
        Ok(status)
    }
}
