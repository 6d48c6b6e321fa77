pub mod app;
pub mod exit;

pub use app::Cli;
pub use exit::exit_code;
