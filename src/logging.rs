use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "PHONEBOOK_LOG";

/// Install the file logger when `PHONEBOOK_LOG` is set.
///
/// Without it nothing is installed, since output on the terminal would
/// tear the UI. Each process writes to `{path}.{timestamp}.{pid}`.
pub fn init_tracing() {
    let Some(prefix) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let path = log_file_name(&prefix.to_string_lossy(), std::process::id());
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {path}: {err}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn log_file_name(prefix: &str, pid: u32) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("{prefix}.{timestamp}.{pid}")
}
