//! Tick driver - turns host wall-clock time into engine ticks.
//!
//! The engine has no clock. A host feeds elapsed time into [`TickDriver`],
//! which runs every tick that came due and halts itself for good once the
//! engine reports game over. Pausing simply stops time from accumulating.
//!
//! Catch-up is bounded: after a stall (suspended process, slow terminal) at
//! most [`MAX_CATCH_UP_TICKS`] ticks run in one call and the rest of the
//! backlog is dropped.

use std::time::Duration;

use log::info;

use crate::engine::{Engine, TickOutcome};

/// Upper bound on ticks run by a single [`TickDriver::advance`] call.
pub const MAX_CATCH_UP_TICKS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickDriver {
    interval: Duration,
    accumulated: Duration,
    paused: bool,
    halted: bool,
}

impl TickDriver {
    /// A driver ticking once per `interval`. A zero interval is clamped to 1ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
            paused: false,
            halted: false,
        }
    }

    /// Driver using the engine's configured tick interval.
    pub fn for_engine(engine: &Engine) -> Self {
        Self::new(engine.config().tick_interval)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Ticking and neither paused nor halted.
    pub fn is_running(&self) -> bool {
        !self.paused && !self.halted
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Time left until the next tick is due.
    ///
    /// Hosts use this as their input poll timeout.
    pub fn until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    /// Account for `elapsed` wall time and run every tick that came due.
    ///
    /// Returns the number of ticks run, never more than [`MAX_CATCH_UP_TICKS`].
    /// Stops early (and halts) on game over.
    pub fn advance(&mut self, engine: &mut Engine, elapsed: Duration) -> usize {
        if !self.is_running() {
            return 0;
        }
        if engine.is_game_over() {
            self.halted = true;
            return 0;
        }

        let backlog_cap = self.interval * MAX_CATCH_UP_TICKS;
        self.accumulated = self.accumulated.saturating_add(elapsed).min(backlog_cap);
        let mut ran = 0;
        while self.accumulated >= self.interval && ran < MAX_CATCH_UP_TICKS as usize {
            self.accumulated -= self.interval;
            ran += 1;
            if matches!(engine.tick(), TickOutcome::GameOver | TickOutcome::Halted) {
                info!("tick driver halted after game over");
                self.halted = true;
                self.accumulated = Duration::ZERO;
                break;
            }
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::types::PieceKind;

    fn engine() -> Engine {
        Engine::with_sequence(EngineConfig::default(), &[PieceKind::O]).unwrap()
    }

    #[test]
    fn runs_due_ticks_and_keeps_remainder() {
        let mut engine = engine();
        let mut driver = TickDriver::for_engine(&engine);
        assert_eq!(driver.interval(), Duration::from_millis(500));

        assert_eq!(driver.advance(&mut engine, Duration::from_millis(400)), 0);
        assert_eq!(driver.until_next_tick(), Duration::from_millis(100));
        assert_eq!(driver.advance(&mut engine, Duration::from_millis(700)), 2);
        assert_eq!(driver.until_next_tick(), Duration::from_millis(400));
        // Spawn, then one fall.
        assert_eq!(engine.active().unwrap().origin().row, 20);
    }

    #[test]
    fn paused_driver_does_not_tick() {
        let mut engine = engine();
        let mut driver = TickDriver::new(Duration::from_millis(10));
        driver.pause();
        assert!(!driver.is_running());
        assert_eq!(driver.advance(&mut engine, Duration::from_secs(5)), 0);
        assert!(engine.active().is_none());

        driver.toggle_pause();
        assert_eq!(driver.advance(&mut engine, Duration::from_millis(10)), 1);
        assert!(engine.active().is_some());
    }

    #[test]
    fn long_stall_runs_a_bounded_burst() {
        let mut engine = engine();
        let mut driver = TickDriver::for_engine(&engine);
        assert_eq!(driver.advance(&mut engine, Duration::from_millis(500)), 1);

        let ran = driver.advance(&mut engine, Duration::from_secs(3600));
        assert_eq!(ran, MAX_CATCH_UP_TICKS as usize);
        assert!(!engine.is_game_over());
        assert_eq!(engine.active().unwrap().origin().row, 21 - ran as i32);
        // The backlog is gone; the next tick is a full interval away.
        assert_eq!(driver.until_next_tick(), driver.interval());

        assert_eq!(driver.advance(&mut engine, Duration::from_millis(499)), 0);
        assert_eq!(driver.advance(&mut engine, Duration::from_millis(1)), 1);
    }

    #[test]
    fn halts_for_good_on_game_over() {
        let mut engine = Engine::with_sequence(
            EngineConfig::default().with_dimensions(2, 4),
            &[PieceKind::O],
        )
        .unwrap();
        let mut driver = TickDriver::new(Duration::from_millis(1));

        // 2-row board: O spawns, cannot fall and settles, next spawn collides.
        let ran = driver.advance(&mut engine, Duration::from_millis(100));
        assert_eq!(ran, 3);
        assert!(engine.is_game_over());
        assert!(driver.is_halted());

        driver.resume();
        assert_eq!(driver.advance(&mut engine, Duration::from_millis(100)), 0);
    }
}
