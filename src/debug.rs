//! Opt-in diagnostic logging on stderr.
//!
//! Output is off unless `ASTGEN_DEBUG` is present in the environment or the
//! embedding program calls [`enable_debug`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

pub const DEBUG_ENV_VAR: &str = "ASTGEN_DEBUG";

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static ENV_READ: Once = Once::new();

fn read_env_once() {
    ENV_READ.call_once(|| {
        if std::env::var_os(DEBUG_ENV_VAR).is_some() {
            DEBUG_ENABLED.store(true, Ordering::Relaxed);
        }
    });
}

/// Turn debug output on regardless of the environment.
pub fn enable_debug() {
    read_env_once();
    DEBUG_ENABLED.store(true, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    read_env_once();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// `eprintln!` with an `[astgen]` prefix, emitted only when debugging is on.
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[astgen] {}", format_args!($($arg)*));
        }
    };
}
