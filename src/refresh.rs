//! Auto-refresh controller.
//!
//! A single stop flag gates a background cycle loop. Each cycle fires one
//! sample on its own short-lived thread and then waits out the cycle in
//! 100 ms slices, so a stop request takes effect within ~100 ms instead of
//! at cycle boundaries. Completed samples travel back to the render loop
//! over an mpsc channel; no display state is touched off the render
//! thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use crate::system::cpu::UtilizationSample;
use crate::system::sampler::UsageProbe;

/// How often the cycle loop re-checks the stop flag while waiting
const POLL_STEP: Duration = Duration::from_millis(100);

/// Messages drained by the render loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    Sample(UtilizationSample),
    Rating(String),
}

pub struct RefreshController {
    probe: Arc<dyn UsageProbe>,
    tx: Sender<AppEvent>,
    /// Run token owned by the active cycle loop. A fresh token is minted
    /// per start(), so a loop that outlives its stop() by a poll step can
    /// never be revived by a later start().
    run: Arc<AtomicBool>,
    /// Blocking window handed to the probe on each sample
    sample_interval: Duration,
    /// Full auto-refresh cycle length, sampling time included
    cycle: Duration,
}

impl RefreshController {
    pub fn new(
        probe: Arc<dyn UsageProbe>,
        tx: Sender<AppEvent>,
        sample_interval: Duration,
        cycle: Duration,
    ) -> Self {
        Self {
            probe,
            tx,
            run: Arc::new(AtomicBool::new(false)),
            sample_interval,
            cycle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.load(Ordering::Relaxed)
    }

    /// Publish handle for other background work (rating lookup)
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    /// Probe handle for synchronous one-off sampling (report export)
    pub fn probe(&self) -> Arc<dyn UsageProbe> {
        Arc::clone(&self.probe)
    }

    /// Begin auto-refresh. Idempotent: calling while Running does nothing.
    pub fn start(&mut self) {
        if self.run.load(Ordering::Relaxed) {
            return;
        }
        let token = Arc::new(AtomicBool::new(true));
        self.run = Arc::clone(&token);

        let probe = Arc::clone(&self.probe);
        let tx = self.tx.clone();
        let sample_interval = self.sample_interval;
        let slices = (self.cycle.as_millis() / POLL_STEP.as_millis()).max(1) as u32;

        std::thread::spawn(move || {
            'cycle: while token.load(Ordering::Relaxed) {
                spawn_sample(Arc::clone(&probe), tx.clone(), sample_interval);
                for _ in 0..slices {
                    if !token.load(Ordering::Relaxed) {
                        break 'cycle;
                    }
                    std::thread::sleep(POLL_STEP);
                }
            }
        });
    }

    /// Stop auto-refresh. Idempotent. Returns immediately; the cycle loop
    /// observes the flag within ~100 ms. An in-flight sample may still
    /// publish once; the render loop overwrites it on the next update.
    pub fn stop(&mut self) {
        self.run.store(false, Ordering::Relaxed);
    }

    /// One sample-and-publish, independent of Running/Idle. Does not alter
    /// the controller state; may overlap with an auto cycle.
    pub fn refresh_once(&self) {
        spawn_sample(
            Arc::clone(&self.probe),
            self.tx.clone(),
            self.sample_interval,
        );
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fire-and-forget sampling thread; the blocking OS call never runs on the
/// render thread.
fn spawn_sample(probe: Arc<dyn UsageProbe>, tx: Sender<AppEvent>, interval: Duration) {
    std::thread::spawn(move || {
        let sample = probe.sample(interval);
        // Receiver gone means the app is shutting down
        let _ = tx.send(AppEvent::Sample(sample));
    });
}
