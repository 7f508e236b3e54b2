// src/sim/philosopher.rs
//! Philosopher: the per-seat state machine
//!
//! Each philosopher runs an unbounded cycle on its own thread:
//! think (random sleep) → hungry (fork acquisition) → dine (random sleep,
//! both forks held) → release both → think again. Every transition is
//! recorded in the shared event log.
//!
//! # Fork acquisition
//!
//! Both forks are claimed as an all-or-nothing unit: claim the left, then
//! the right, and on a partial failure release the left again immediately.
//! A philosopher therefore never holds one fork while blocked on the other,
//! and the ring cannot reach the circular-wait state where everyone holds
//! exactly one fork. Between attempts the philosopher waits on the ring's
//! shared freed notification with a bounded timeout, which also gives the
//! starvation watchdog its periodic check.

use crate::monitor::event_log::EventLog;
use crate::table::ring::ForkRing;
use crate::utils::config::SimConfig;
use crate::utils::stop::StopToken;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Nap length of a dead philosopher between stop checks
const DEAD_NAP: Duration = Duration::from_secs(60);

/// Observable states of a philosopher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhilosopherState {
    Thinking,
    Hungry,
    Dining,
    /// Terminal; only reachable from `Hungry` with the starvation watchdog on
    Dead,
}

impl PhilosopherState {
    /// Waterfall symbol for this state
    pub fn symbol(self) -> char {
        match self {
            Self::Thinking => ' ',
            Self::Hungry => '-',
            Self::Dining => '|',
            Self::Dead => '#',
        }
    }
}

impl fmt::Display for PhilosopherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Thinking => "thinks",
            Self::Hungry => "hungry",
            Self::Dining => "dines",
            Self::Dead => "died",
        };
        f.write_str(name)
    }
}

/// One seat at the table
pub struct Philosopher {
    /// Seat ordinal, doubles as the event id
    seat: usize,

    /// Ring indices of the two shared forks
    left: usize,
    right: usize,

    /// The fork ring, owned by the canteen
    ring: Arc<ForkRing>,

    /// Producer side of the observation pipeline
    log: Arc<EventLog>,

    /// Cooperative shutdown, checked at the top of each cycle
    stop: StopToken,

    /// Independently seeded generator for interval sampling
    rng: SmallRng,

    /// Upper bound for thinking/dining intervals
    max_interval_ms: u64,

    /// Bounded wait between acquisition attempts
    retry_interval: Duration,

    /// Starvation limit since the last meal, `None` when the watchdog is off
    death_after: Option<Duration>,

    last_dined: Instant,
    state: PhilosopherState,
}

impl Philosopher {
    pub fn new(
        seat: usize,
        ring: Arc<ForkRing>,
        log: Arc<EventLog>,
        stop: StopToken,
        config: &SimConfig,
    ) -> Self {
        let (left, right) = ring.neighbors(seat);
        let death_after = config
            .starvation_watchdog
            .then(|| config.max_interval() * config.death_threshold);

        Self {
            seat,
            left,
            right,
            ring,
            log,
            stop,
            rng: SmallRng::from_entropy(),
            max_interval_ms: config.max_interval_ms,
            retry_interval: config.max_interval(),
            death_after,
            last_dined: Instant::now(),
            state: PhilosopherState::Thinking,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn state(&self) -> PhilosopherState {
        self.state
    }

    /// Cycle until stopped (or dead).
    ///
    /// A panicking cycle is absorbed here and the philosopher restarts from
    /// thinking; nothing propagates to the neighbors or the monitor.
    pub fn run(&mut self) {
        debug!("Philosopher #{} seated", self.seat);

        while !self.stop.is_set() {
            if self.state == PhilosopherState::Dead {
                break;
            }
            if panic::catch_unwind(AssertUnwindSafe(|| self.cycle())).is_err() {
                warn!("Philosopher #{} cycle panicked, back to thinking", self.seat);
            }
        }

        debug!("Philosopher #{} left the table", self.seat);
    }

    fn cycle(&mut self) {
        self.think();
        if self.stop.is_set() {
            return;
        }
        if self.acquire_forks() {
            self.dine();
        }
    }

    fn think(&mut self) {
        self.transition(PhilosopherState::Thinking);
        thread::sleep(self.random_interval());
    }

    /// Returns true once both forks are held.
    fn acquire_forks(&mut self) -> bool {
        self.transition(PhilosopherState::Hungry);

        loop {
            if self.claim_both() {
                return true;
            }
            if self.starving() {
                self.die();
                return false;
            }
            if self.stop.is_set() {
                return false;
            }
            self.ring.wait_freed(self.retry_interval);
        }
    }

    /// All-or-nothing claim of both forks; never leaves one held on failure.
    fn claim_both(&self) -> bool {
        let left = self.ring.fork(self.left);
        if !left.try_acquire() {
            return false;
        }
        if self.ring.fork(self.right).try_acquire() {
            return true;
        }
        left.release();
        false
    }

    fn dine(&mut self) {
        self.transition(PhilosopherState::Dining);
        thread::sleep(self.random_interval());

        self.ring.fork(self.right).release();
        self.ring.fork(self.left).release();
        self.ring.notify_freed();
        self.last_dined = Instant::now();
    }

    fn starving(&self) -> bool {
        match self.death_after {
            Some(limit) => self.last_dined.elapsed() > limit,
            None => false,
        }
    }

    /// Terminal state: one final event, then nap until the simulation stops.
    fn die(&mut self) {
        warn!("Philosopher #{} starved", self.seat);
        self.transition(PhilosopherState::Dead);

        while !self.stop.is_set() {
            thread::sleep(DEAD_NAP);
        }
    }

    fn transition(&mut self, state: PhilosopherState) {
        self.state = state;
        self.log.record(self.seat, state);
    }

    fn random_interval(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(1..=self.max_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::event_log::StateEvent;

    fn test_config(max_interval_ms: u64) -> SimConfig {
        SimConfig {
            philosophers: 2,
            max_interval_ms,
            ..Default::default()
        }
    }

    fn drain_states(log: &EventLog, seat: usize, window: Duration) -> Vec<PhilosopherState> {
        let deadline = Instant::now() + window;
        let mut states = Vec::new();
        while Instant::now() < deadline {
            if let Some(batch) = log.take_batch(Duration::from_millis(20)) {
                states.extend(
                    batch
                        .iter()
                        .filter(|event| event.seat == seat)
                        .map(|event| event.state),
                );
            }
        }
        states
    }

    fn assert_legal_cycle(states: &[PhilosopherState]) {
        use PhilosopherState::*;
        assert_eq!(states.first(), Some(&Thinking));
        for pair in states.windows(2) {
            let legal = matches!(
                (pair[0], pair[1]),
                (Thinking, Hungry) | (Hungry, Dining) | (Dining, Thinking) | (Hungry, Dead)
            );
            assert!(legal, "illegal transition {:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_uncontended_philosopher_cycles() {
        let ring = Arc::new(ForkRing::new(2));
        let log = Arc::new(EventLog::new());
        let stop = StopToken::new();

        let mut philosopher = Philosopher::new(
            0,
            Arc::clone(&ring),
            Arc::clone(&log),
            stop.clone(),
            &test_config(2),
        );
        let handle = thread::spawn(move || philosopher.run());

        let states = drain_states(&log, 0, Duration::from_millis(300));
        stop.set();
        handle.join().unwrap();

        assert_legal_cycle(&states);
        let dined = states
            .iter()
            .filter(|&&s| s == PhilosopherState::Dining)
            .count();
        assert!(dined >= 2, "expected repeated dining, saw {}", dined);

        // Both forks back on the table once the philosopher left
        assert!(ring.fork(0).is_available());
        assert!(ring.fork(1).is_available());
    }

    #[test]
    fn test_starves_to_death_when_forks_never_free() {
        let ring = Arc::new(ForkRing::new(2));
        let log = Arc::new(EventLog::new());
        let stop = StopToken::new();

        // The table keeps both forks for itself
        assert!(ring.fork(0).try_acquire());
        assert!(ring.fork(1).try_acquire());

        let config = SimConfig {
            philosophers: 2,
            max_interval_ms: 5,
            starvation_watchdog: true,
            death_threshold: 2,
            ..Default::default()
        };
        let mut philosopher =
            Philosopher::new(0, Arc::clone(&ring), Arc::clone(&log), stop.clone(), &config);
        // Dead philosophers nap for a long time, so let the thread go
        let _detached = thread::spawn(move || philosopher.run());

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut states: Vec<PhilosopherState> = Vec::new();
        while !states.contains(&PhilosopherState::Dead) {
            assert!(Instant::now() < deadline, "philosopher never starved");
            if let Some(batch) = log.take_batch(Duration::from_millis(20)) {
                states.extend(batch.iter().map(|event: &StateEvent| event.state));
            }
        }

        assert_legal_cycle(&states);
        assert_eq!(states.last(), Some(&PhilosopherState::Dead));

        // Terminal: no further events after death
        assert!(log.take_batch(Duration::from_millis(100)).is_none());
        stop.set();
    }
}
