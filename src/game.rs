//! The fixed-rate loop
//!
//! Wires the collaborators around the simulation: wait for the frame
//! boundary, poll input, tick, draw. Stops cleanly between ticks on quit.

use crate::error::ConfigError;
use crate::platform::{Clock, InputSource};
use crate::renderer::{Renderer, build_frame, render_frame};
use crate::settings::Settings;
use crate::sim::{SimState, tick};

/// Game instance holding all state
pub struct Game<I, C, R> {
    pub state: SimState,
    input: I,
    clock: C,
    renderer: R,
    /// Last measured frame rate
    pub fps: f32,
}

impl<I: InputSource, C: Clock, R: Renderer> Game<I, C, R> {
    pub fn new(
        settings: Settings,
        seed: u64,
        input: I,
        clock: C,
        renderer: R,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            state: SimState::new(settings, seed)?,
            input,
            clock,
            renderer,
            fps: 0.0,
        })
    }

    /// Run one tick. Returns false once input asks to quit.
    pub fn step(&mut self) -> bool {
        self.fps = self.clock.tick(self.state.settings.target_tick_rate);

        let keys = self.input.poll(&self.state);
        if keys.quit {
            return false;
        }

        let input = keys.to_tick_input(&self.state.settings);
        let summary = tick(&mut self.state, &input);
        if !summary.hits.is_empty() || summary.fragments > 0 {
            log::debug!(
                "Tick {}: {} hits, {} fragments, {} rocks",
                self.state.time_ticks,
                summary.hits.len(),
                summary.fragments,
                self.state.rocks.len()
            );
        }

        let frame = build_frame(&self.state, self.fps);
        render_frame(&mut self.renderer, &frame);
        true
    }

    /// Tick until quit; returns the number of ticks run
    pub fn run(&mut self) -> u64 {
        let start = self.state.time_ticks;
        while self.step() {}

        let ticks = self.state.time_ticks - start;
        log::info!(
            "Stopped after {} ticks: {} rocks, {} bullets, {:.1} fps",
            ticks,
            self.state.rocks.len(),
            self.state.bullets.len(),
            self.fps
        );
        ticks
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
