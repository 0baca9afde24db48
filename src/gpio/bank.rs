//! The three-line LED bank abstraction.

use std::sync::{Arc, Mutex};

/// One of the three indicator lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedLine {
    /// Local/primary segment reachable (green).
    Local,
    /// Only the wider-internet segment reachable (yellow).
    Wan,
    /// Nothing reachable (red).
    Unreachable,
}

impl LedLine {
    /// All lines, in reset order.
    pub const ALL: [LedLine; 3] = [LedLine::Local, LedLine::Wan, LedLine::Unreachable];

    fn index(self) -> usize {
        match self {
            LedLine::Local => 0,
            LedLine::Wan => 1,
            LedLine::Unreachable => 2,
        }
    }
}

/// Three independent binary output lines.
///
/// The monitor is the only writer; implementations need no internal
/// synchronization beyond what sharing with test observers requires.
pub trait LedBank: Send {
    /// Drive one line active (`true`) or inactive (`false`).
    fn set(&mut self, line: LedLine, on: bool);

    /// Drive all three lines inactive.
    fn all_off(&mut self) {
        for line in LedLine::ALL {
            self.set(line, false);
        }
    }
}

/// Bank that only traces transitions.
///
/// Default when the crate is built without the `rpi` feature, so the
/// daemon can run on a development host with no hardware attached.
#[derive(Debug, Default)]
pub struct LogLedBank;

impl LogLedBank {
    pub fn new() -> Self {
        Self
    }
}

impl LedBank for LogLedBank {
    fn set(&mut self, line: LedLine, on: bool) {
        tracing::debug!(?line, on, "led transition");
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    states: [bool; 3],
    transitions: Vec<(LedLine, bool)>,
}

/// In-memory bank that records every transition.
///
/// Cloning yields another handle to the same recording, so a test can
/// keep one clone while the monitor owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedBank {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemoryLedBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of one line.
    pub fn is_on(&self, line: LedLine) -> bool {
        self.inner.lock().unwrap().states[line.index()]
    }

    /// Snapshot of all three line states, in `LedLine::ALL` order.
    pub fn states(&self) -> [bool; 3] {
        self.inner.lock().unwrap().states
    }

    /// Every transition recorded so far, in order.
    pub fn transitions(&self) -> Vec<(LedLine, bool)> {
        self.inner.lock().unwrap().transitions.clone()
    }

    /// Number of inactive→active edges seen on one line.
    pub fn rising_edges(&self, line: LedLine) -> usize {
        self.inner
            .lock()
            .unwrap()
            .transitions
            .iter()
            .filter(|(l, on)| *l == line && *on)
            .count()
    }
}

impl LedBank for MemoryLedBank {
    fn set(&mut self, line: LedLine, on: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.states[line.index()] = on;
        inner.transitions.push((line, on));
    }
}
