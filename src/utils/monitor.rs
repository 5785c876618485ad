#[cfg(feature = "cli")]
use std::sync::atomic::{AtomicU64, Ordering};
#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};

/// 某個階段結束時的程序資源快照
#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct StageSnapshot {
    pub cpu_percent: f32,
    pub rss_mb: u64,
    pub peak_rss_mb: u64,
    pub since_start: Duration,
}

#[cfg(feature = "cli")]
pub struct SystemMonitor {
    sampler: Option<(Pid, Mutex<System>)>,
    started: Instant,
    peak_rss_mb: AtomicU64,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let sampler = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => {
                    let mut system = System::new();
                    // 第一次刷新只建立 CPU 基準
                    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
                    Some((pid, Mutex::new(system)))
                }
                Err(e) => {
                    tracing::warn!("Monitoring disabled, current PID unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            sampler,
            started: Instant::now(),
            peak_rss_mb: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> Option<StageSnapshot> {
        let (pid, system) = self.sampler.as_ref()?;
        let mut system = system.lock().ok()?;
        system.refresh_processes(ProcessesToUpdate::Some(&[*pid]), true);
        let process = system.process(*pid)?;

        let rss_mb = process.memory() / (1024 * 1024);
        let peak = self.peak_rss_mb.fetch_max(rss_mb, Ordering::Relaxed).max(rss_mb);

        Some(StageSnapshot {
            cpu_percent: process.cpu_usage(),
            rss_mb,
            peak_rss_mb: peak,
            since_start: self.started.elapsed(),
        })
    }

    pub fn log_stats(&self, stage: &str) {
        if let Some(s) = self.snapshot() {
            tracing::info!(
                "📊 [{}] cpu {:.1}% | rss {}MB (peak {}MB) | {:?}",
                stage,
                s.cpu_percent,
                s.rss_mb,
                s.peak_rss_mb,
                s.since_start
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(s) = self.snapshot() {
            tracing::info!(
                "📊 Run finished in {:?}, peak rss {}MB",
                s.since_start,
                s.peak_rss_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sampler.is_some()
    }
}

#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _stage: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
