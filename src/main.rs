use anyhow::Result;
use habita::commands::Cli;
use habita::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // With HABITA_DEBUG or RUST_LOG set, messages route through tracing
    // instead of plain console output.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
