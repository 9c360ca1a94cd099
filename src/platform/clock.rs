//! Frame pacing

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Blocks until the next frame boundary and reports measured FPS
pub trait Clock {
    fn tick(&mut self, target_rate: f32) -> f32;
}

/// Wall-clock pacing with a rolling FPS average
#[derive(Debug)]
pub struct FrameClock {
    /// Sleep to hold the target rate; unthrottled runs as fast as possible
    pub throttle: bool,
    next_frame: Option<Instant>,
    frame_times: VecDeque<Instant>,
}

impl FrameClock {
    pub fn new(throttle: bool) -> Self {
        Self {
            throttle,
            next_frame: None,
            frame_times: VecDeque::with_capacity(FPS_WINDOW + 1),
        }
    }

    /// Average FPS over the recorded window (0 until two frames are seen)
    pub fn fps(&self) -> f32 {
        match (self.frame_times.front(), self.frame_times.back()) {
            (Some(oldest), Some(newest)) if self.frame_times.len() > 1 => {
                let elapsed = newest.duration_since(*oldest).as_secs_f32();
                if elapsed > 0.0 {
                    (self.frame_times.len() - 1) as f32 / elapsed
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_rate: f32) -> f32 {
        // Unrepresentable frame lengths run unthrottled
        let frame = Duration::try_from_secs_f32(1.0 / target_rate).unwrap_or(Duration::ZERO);

        if self.throttle {
            if let Some(next) = self.next_frame {
                let now = Instant::now();
                if next > now {
                    thread::sleep(next - now);
                }
            }
        }

        let now = Instant::now();
        // Fall behind rather than burst to catch up
        self.next_frame = Some(match self.next_frame {
            Some(next) if next + frame > now => next + frame,
            _ => now + frame,
        });

        self.frame_times.push_back(now);
        if self.frame_times.len() > FPS_WINDOW {
            self.frame_times.pop_front();
        }
        self.fps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttled_clock_holds_rate() {
        let mut clock = FrameClock::new(true);
        let start = Instant::now();
        for _ in 0..6 {
            clock.tick(100.0);
        }
        // Five full frame gaps at 10ms each
        assert!(start.elapsed() >= Duration::from_millis(45));
        assert!(clock.fps() > 0.0);
    }

    #[test]
    fn test_degenerate_rate_does_not_panic() {
        let mut clock = FrameClock::new(true);
        for rate in [1e-20, 0.0, -5.0, f32::NAN] {
            clock.tick(rate);
        }
        assert_eq!(clock.frame_times.len(), 4);
    }

    #[test]
    fn test_fps_window() {
        let mut clock = FrameClock::new(false);
        assert_eq!(clock.fps(), 0.0);
        for _ in 0..(FPS_WINDOW * 2) {
            clock.tick(30.0);
        }
        assert_eq!(clock.frame_times.len(), FPS_WINDOW);
    }
}
