//! One-time process setup (logging) as an explicit state machine.

use env_logger::Env;
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Initializing,
    Ready,
}

static STATE: Lazy<Mutex<InitState>> = Lazy::new(|| Mutex::new(InitState::Uninitialized));
static SETUP: OnceCell<()> = OnceCell::new();

fn set_state(next: InitState) {
    let mut guard = STATE.lock().unwrap_or_else(|e| e.into_inner());
    *guard = next;
}

pub fn state() -> InitState {
    *STATE.lock().unwrap_or_else(|e| e.into_inner())
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Run the setup once. Later calls only report the state.
///
/// `RUST_LOG` wins over `verbosity` when set.
pub fn init(verbosity: u8) -> InitState {
    SETUP.get_or_init(|| {
        set_state(InitState::Initializing);

        let env = Env::default().default_filter_or(default_level(verbosity));
        // Fails only if a logger is already installed (e.g. by a test harness)
        if let Err(e) = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .try_init()
        {
            eprintln!("logger already initialized: {}", e);
        }

        set_state(InitState::Ready);
        log::debug!("bootstrap complete (verbosity {})", verbosity);
    });
    state()
}
