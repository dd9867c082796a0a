use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "TRAPWISE_LOG";

/// `{base}.{timestamp}.{pid}`, so two quiz windows never share a file.
pub fn log_file_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}.{}", base, timestamp, pid))
}

/// Installs the global subscriber when `TRAPWISE_LOG` is set and returns
/// the file it writes to.
///
/// Nothing is ever written to the terminal: the quiz owns the screen.
/// `RUST_LOG` filters as usual, defaulting to `info`.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var(LOG_ENV).ok().filter(|value| !value.is_empty())?;
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&base, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339()),
        )
        .init();
    Some(path)
}
