use anyhow::Result;

/// Logs go to stderr so that stdout stays a clean report.
#[cfg(feature = "with-tracing")]
pub fn init(verbosity: u8) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("init logging: {err}"))
}

#[cfg(not(feature = "with-tracing"))]
pub fn init(_verbosity: u8) -> Result<()> {
    Ok(())
}
