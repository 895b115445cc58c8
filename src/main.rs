mod state;
mod data;
mod processing;
mod ui;
mod app;
mod error;

use app::EnrollmentApp;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging on stderr so it stays out of the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let app = match EnrollmentApp::new() {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = app.run(&mut stdin.lock(), &mut stdout.lock()) {
        tracing::error!("Terminal I/O failed: {e}");
        std::process::exit(1);
    }
}
