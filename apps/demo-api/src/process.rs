//! Memory figures for the running process, as reported by `/health`.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::warn;

/// Memory used by this process, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    /// Resident set size.
    pub rss_bytes: u64,
    pub virtual_bytes: u64,
}

/// Samples memory usage of the current process.
///
/// Holds one [`System`] for the life of the server; each sample refreshes
/// only this process.
pub struct ProcessMonitor {
    pid: Option<Pid>,
    system: Mutex<System>,
}

impl ProcessMonitor {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                warn!(error = e, "Process id unavailable, memory will not be reported");
                None
            }
        };

        ProcessMonitor {
            pid,
            system: Mutex::new(System::new()),
        }
    }

    /// Current memory usage, `None` where the platform does not expose it.
    pub fn memory(&self) -> Option<MemoryUsage> {
        let pid = self.pid?;
        let mut system = self.system.lock().unwrap_or_else(PoisonError::into_inner);

        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        system.process(pid).map(|process| MemoryUsage {
            rss_bytes: process.memory(),
            virtual_bytes: process.virtual_memory(),
        })
    }
}

impl Default for ProcessMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProcessMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessMonitor")
            .field("pid", &self.pid)
            .finish_non_exhaustive()
    }
}
