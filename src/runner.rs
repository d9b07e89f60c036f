//! Fixed-rate tick loop
//!
//! One iteration: poll input, step the simulation, build the frame, submit
//! it, then sleep out the rest of the tick interval. Input and output are
//! external collaborators behind [`InputSource`] and [`FrameSink`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::render::{Frame, build_frame};
use crate::sim::{GameState, TickInput, Viewport, tick};

/// Produces the intent flags for the next tick
pub trait InputSource {
    /// `None` means quit: the loop stops before stepping this tick
    fn poll(&mut self, state: &GameState) -> Option<TickInput>;
}

/// Consumes finished frames
pub trait FrameSink {
    /// Current drawing surface size, queried once per tick
    fn viewport(&self) -> Viewport;

    fn submit(&mut self, frame: &Frame);
}

/// What happened during a run of the loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub losses: u32,
    /// Ticks whose work took longer than the interval
    pub overruns: u64,
}

/// Drives update then render once per interval until stopped
#[derive(Debug, Clone)]
pub struct FixedTickRunner {
    interval: Duration,
    max_ticks: Option<u64>,
    running: Arc<AtomicBool>,
}

impl FixedTickRunner {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_ticks: None,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Stop on its own after `ticks` iterations
    pub fn with_max_ticks(mut self, ticks: Option<u64>) -> Self {
        self.max_ticks = ticks;
        self
    }

    /// Shared termination flag; storing `false` ends the loop at the next check
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn run(
        &self,
        state: &mut GameState,
        input: &mut impl InputSource,
        sink: &mut impl FrameSink,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        let dt = state.config.dt();
        log::info!(
            "Tick loop started ({} ms per tick, {} orbs max)",
            self.interval.as_millis(),
            state.orbs.capacity()
        );

        while self.is_running() {
            if self.max_ticks.is_some_and(|max| summary.ticks >= max) {
                break;
            }
            let started = Instant::now();

            let Some(tick_input) = input.poll(state) else {
                log::info!("Quit requested");
                self.running.store(false, Ordering::Relaxed);
                break;
            };

            let was_over = state.is_game_over();
            tick(state, &tick_input, dt);
            if !was_over && state.is_game_over() {
                summary.losses += 1;
            }

            let frame = build_frame(state, sink.viewport());
            sink.submit(&frame);
            summary.ticks += 1;

            let elapsed = started.elapsed();
            match self.interval.checked_sub(elapsed) {
                Some(remaining) => thread::sleep(remaining),
                None => {
                    summary.overruns += 1;
                    log::warn!(
                        "Tick {} overran: {:?} > {:?}",
                        summary.ticks,
                        elapsed,
                        self.interval
                    );
                }
            }
        }

        log::info!(
            "Tick loop stopped after {} ticks ({} losses)",
            summary.ticks,
            summary.losses
        );
        summary
    }
}

/// Sink without a display: keeps the last frame's stats and logs the HUD
#[derive(Debug, Clone)]
pub struct HeadlessSink {
    viewport: Viewport,
    log_every: u64,
    pub frames: u64,
    pub last_triangles: usize,
    pub last_hud: Vec<String>,
}

impl HeadlessSink {
    pub fn new(viewport: Viewport, log_every: u64) -> Self {
        Self {
            viewport,
            log_every: log_every.max(1),
            frames: 0,
            last_triangles: 0,
            last_hud: Vec::new(),
        }
    }
}

impl FrameSink for HeadlessSink {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn submit(&mut self, frame: &Frame) {
        self.frames += 1;
        self.last_triangles = frame.triangle_count();
        self.last_hud = frame.hud.iter().map(|line| line.text.clone()).collect();
        if self.frames % self.log_every == 0 {
            log::info!(
                "{} | {} | {} orbs drawn",
                self.last_hud.join(" | "),
                self.last_triangles,
                frame.orbs_drawn
            );
        }
    }
}
