/// Render a progress percentage as a fixed-width log prefix, e.g. `[ 40%]`.
pub fn progress_line(percent: u8) -> String {
    format!("[{:>3}%]", percent.min(100))
}


/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
