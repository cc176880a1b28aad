//! Crash reports and diagnostic logging.
//!
//! The panic hook prints a boxed report that names the command phase and the
//! dataset being processed when the crash happened. [`init_tracing`] wires
//! the `tracing` spans emitted by the engine, plus `log` records from the
//! config and loader layers, to stderr.
//!
//! ```ignore
//! use biasmap::observability::{install_panic_hook, set_current_file, set_phase, CommandPhase};
//!
//! install_panic_hook();
//! let _phase = set_phase(CommandPhase::Loading);
//! let _file = set_current_file("hr.csv");
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, set_current_file, set_phase,
    set_progress, CommandContext, CommandPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
