// Fixed-timestep frame clock
//
// The simulation runs at a fixed cadence (one tick per frame at the
// target rate); rendering happens once per winit redraw. An accumulator
// converts wall-clock time into whole simulation steps.

use std::time::{Duration, Instant};

/// Maximum simulation steps per redraw, to prevent a spiral of death
/// after a long stall
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Window for the rolling FPS average
const FPS_WINDOW_SIZE: usize = 60;

/// Frame pacing and timing state
pub struct FrameClock {
    timestep: Duration,
    accumulator: Duration,
    last_frame_time: Instant,
    paused: bool,
    frame_times: Vec<Duration>,
    frame_count: u64,
    tick_count: u64,
}

impl FrameClock {
    /// Create a clock targeting `frame_rate` simulation steps per second
    pub fn new(frame_rate: u32) -> Self {
        Self {
            timestep: Duration::from_secs_f64(1.0 / frame_rate as f64),
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new rendered frame; returns how many simulation steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.timestep && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.timestep;
            steps += 1;
        }

        self.tick_count += steps as u64;
        steps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.paused = false;
            // Drop accumulated time so resuming does not burst-step
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        } else {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Rolling average frames per second
    pub fn fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: Duration = self.frame_times.iter().sum();
        let avg = total / self.frame_times.len() as u32;
        if avg.as_secs_f32() > 0.0 {
            1.0 / avg.as_secs_f32()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick_count(), 0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_frame_counting() {
        let mut clock = FrameClock::new(60);
        clock.begin_frame();
        clock.begin_frame();
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_paused_runs_no_steps() {
        let mut clock = FrameClock::new(60);
        clock.toggle_pause();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(clock.begin_frame(), 0);
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = FrameClock::new(60);
        clock.toggle_pause();
        assert!(clock.is_paused());
        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_steps_capped_after_stall() {
        let mut clock = FrameClock::new(60);
        // 300ms would otherwise be worth 18 steps
        thread::sleep(Duration::from_millis(300));
        assert!(clock.begin_frame() <= MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn test_accumulated_time_yields_steps() {
        let mut clock = FrameClock::new(60);
        thread::sleep(Duration::from_millis(40));
        let steps = clock.begin_frame();
        assert!(steps >= 1 && steps <= MAX_STEPS_PER_FRAME);
    }
}
