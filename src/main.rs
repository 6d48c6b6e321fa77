use anyhow::Result;
use clap::Parser;
use log::info;
use std::process::ExitCode;

use petsc_arch::cli::{exit_code, Cli};
use petsc_arch::manifest::ARCH_GCC64_COMPLEX_O;
use petsc_arch::{arch_gcc64_complex_o, EngineSettings, Invoker, PythonConfigure};

fn main() -> Result<ExitCode> {
    // RUST_LOG only changes diagnostic verbosity, never the options or the engine
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let _cli = Cli::parse();
    info!("Starting petsc-arch");

    let engine = PythonConfigure::resolve(EngineSettings::default())?;
    let invoker = Invoker::new(arch_gcc64_complex_o(), engine);
    info!(
        "Configuring {} with {} options",
        ARCH_GCC64_COMPLEX_O,
        invoker.manifest().len()
    );
    let status = invoker.run()?;

    Ok(exit_code(status))
}
