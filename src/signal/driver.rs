//! Pulse choreography for the three indicator lines.

use std::time::Duration;

use tokio::time;

use crate::gpio::bank::{LedBank, LedLine};

/// Active window of one pulse.
pub const PULSE_ACTIVE: Duration = Duration::from_millis(300);

/// Inactive gap after each pulse.
pub const PULSE_INACTIVE: Duration = Duration::from_millis(800);

/// Outcome of one check cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    /// Local segment reachable; score hosts answered.
    LocalOk { score: usize },
    /// Only the wan segment reachable; score hosts answered.
    WanOk { score: usize },
    /// Nothing answered.
    NoneOk,
}

/// Drive the line matching `state`.
///
/// Pulsing blocks until complete; the other two lines are not touched
/// (the monitor resets all lines at the start of each cycle).
pub async fn drive(bank: &mut dyn LedBank, state: SignalState) {
    match state {
        SignalState::LocalOk { score } => pulse_then_hold(bank, LedLine::Local, score).await,
        SignalState::WanOk { score } => pulse_then_hold(bank, LedLine::Wan, score).await,
        SignalState::NoneOk => bank.set(LedLine::Unreachable, true),
    }
}

/// Pulse `line` once per score point, then leave it lit.
async fn pulse_then_hold(bank: &mut dyn LedBank, line: LedLine, score: usize) {
    for _ in 0..score {
        bank.set(line, true);
        time::sleep(PULSE_ACTIVE).await;
        bank.set(line, false);
        time::sleep(PULSE_INACTIVE).await;
    }
    bank.set(line, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::bank::MemoryLedBank;

    #[tokio::test(start_paused = true)]
    async fn local_ok_pulses_score_times_then_holds() {
        let mut bank = MemoryLedBank::new();
        let observer = bank.clone();

        drive(&mut bank, SignalState::LocalOk { score: 3 }).await;

        // Three pulses plus the final hold.
        assert_eq!(observer.rising_edges(LedLine::Local), 4);
        assert!(observer.is_on(LedLine::Local));
        assert!(!observer.is_on(LedLine::Wan));
        assert!(!observer.is_on(LedLine::Unreachable));
    }

    #[tokio::test(start_paused = true)]
    async fn wan_ok_drives_only_the_wan_line() {
        let mut bank = MemoryLedBank::new();
        let observer = bank.clone();

        drive(&mut bank, SignalState::WanOk { score: 1 }).await;

        assert_eq!(observer.rising_edges(LedLine::Wan), 2);
        assert!(observer.is_on(LedLine::Wan));
        assert_eq!(observer.rising_edges(LedLine::Local), 0);
        assert_eq!(observer.rising_edges(LedLine::Unreachable), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn none_ok_lights_unreachable_with_zero_pulses() {
        let mut bank = MemoryLedBank::new();
        let observer = bank.clone();

        let before = time::Instant::now();
        drive(&mut bank, SignalState::NoneOk).await;

        // Immediate: no pulse delays at all.
        assert_eq!(before.elapsed(), Duration::ZERO);
        assert_eq!(
            observer.transitions(),
            vec![(LedLine::Unreachable, true)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn pulse_timing_is_active_then_inactive_per_point() {
        let mut bank = MemoryLedBank::new();

        let before = time::Instant::now();
        drive(&mut bank, SignalState::LocalOk { score: 2 }).await;

        // Two full 300 ms + 800 ms pulse windows.
        assert_eq!(before.elapsed(), Duration::from_millis(2200));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_score_just_holds_the_line() {
        // Not produced by the monitor (zero scores lose precedence), but
        // the driver contract is well defined anyway.
        let mut bank = MemoryLedBank::new();
        let observer = bank.clone();

        drive(&mut bank, SignalState::WanOk { score: 0 }).await;

        assert_eq!(observer.transitions(), vec![(LedLine::Wan, true)]);
    }
}
