use clap::Parser;

/// The embedded options are the whole configuration surface; no arguments are accepted.
#[derive(Parser, Debug)]
#[command(name = "petsc-arch")]
#[command(version)]
#[command(about = "Configure PETSc as arch-gcc64-complex-O (gcc, 64-bit indices, complex, optimized)")]
pub struct Cli {}
