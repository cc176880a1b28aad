//! Thread-local context tracking for crash reports.
//!
//! Records which command phase is running and which dataset is open, plus
//! global counters for multi-file runs. Guards restore the previous context
//! on drop so phases and files can nest.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static FILES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<CommandContext> = const { RefCell::new(CommandContext::new()) };
}

/// What biasmap was doing when an error occurred.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub phase: Option<CommandPhase>,
    pub current_file: Option<PathBuf>,
}

impl CommandContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
        }
    }
}

/// Major stages of a CLI run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandPhase {
    /// Reading configuration files
    ConfigLoading,
    /// Reading and decoding a dataset
    Loading,
    /// Running the bias engine
    Analysis,
    /// Rendering reports
    OutputGeneration,
}

impl std::fmt::Display for CommandPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigLoading => write!(f, "config_loading"),
            Self::Loading => write!(f, "loading"),
            Self::Analysis => write!(f, "analysis"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard that restores the previous context on drop.
pub struct ContextGuard {
    previous: CommandContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

#[must_use]
pub fn set_phase(phase: CommandPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_file = Some(path.into());
        ContextGuard { previous }
    })
}

pub fn set_progress(processed: usize, total: usize) {
    FILES_PROCESSED.store(processed, Ordering::Relaxed);
    FILES_TOTAL.store(total, Ordering::Relaxed);
}

pub fn increment_processed() {
    FILES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// Snapshot of the current thread's context, read by the panic hook.
#[must_use]
pub fn get_current_context() -> CommandContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Files processed so far and total files in the run.
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        FILES_PROCESSED.load(Ordering::Relaxed),
        FILES_TOTAL.load(Ordering::Relaxed),
    )
}

#[cfg(test)]
pub(crate) fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = CommandContext::new();
    });
}
