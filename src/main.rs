use clap::Parser;
use tracing_subscriber::EnvFilter;
use vigorish::cli::{run, Cli};

fn main() {
    // Diagnostics go to stderr so stdout stays exactly the result lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run::execute(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
