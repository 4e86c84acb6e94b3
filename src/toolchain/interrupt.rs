//! SIGINT handling while a tool runs in the foreground.
//!
//! Ctrl+C reaches the whole foreground process group. The profiler is
//! expected to flush its bundle and exit, so the driver must survive the
//! signal and go on to inspect the output path.

use log::warn;
use signal_hook::consts::SIGINT;
use signal_hook::SigId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Records SIGINT in a flag for as long as it is alive.
///
/// The handler is unregistered on drop. Handlers do not survive exec, so a
/// spawned tool still receives the signal normally.
pub struct InterruptGuard {
    flag: Arc<AtomicBool>,
    id: Option<SigId>,
}

impl InterruptGuard {
    pub fn install() -> Self {
        let flag = Arc::new(AtomicBool::new(false));
        let id = match signal_hook::flag::register(SIGINT, Arc::clone(&flag)) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Could not install SIGINT handler: {}", e);
                None
            }
        };
        Self { flag, id }
    }

    pub fn interrupted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            signal_hook::low_level::unregister(id);
        }
    }
}
