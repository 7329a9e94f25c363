//! Pausable periodic clock driving the generations.
//!
//! Time comes from the host (frame delta or native timer) through
//! [`TurnScheduler::advance`]; the scheduler turns it into tick events one at
//! a time. Ticks are dropped while stopped and after teardown. A long stall
//! replays at most [`MAX_FIRES_PER_ADVANCE`] ticks; the rest is skipped.

use std::time::Duration;

use crate::domain::{LifeError, Result};

/// Upper bound on fires produced by one [`PeriodicSource::advance`] call
pub const MAX_FIRES_PER_ADVANCE: u32 = 8;

/// Progress carried by a scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerState {
    pub counter: u64,
    pub running: bool,
}

/// Fires every `period` after an initial `start_delay`.
#[derive(Debug)]
pub struct PeriodicSource {
    period: Duration,
    until_next: Duration,
    cancelled: bool,
}

impl PeriodicSource {
    pub fn new(period: Duration, start_delay: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(LifeError::InvalidConfiguration(
                "tick period must be positive".to_owned(),
            ));
        }
        Ok(Self {
            period,
            until_next: start_delay,
            cancelled: false,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Let `elapsed` pass and return how many fires fell inside it, capped at
    /// [`MAX_FIRES_PER_ADVANCE`]. Past the cap the backlog is dropped and the
    /// next fire is one full period away.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.cancelled {
            return 0;
        }
        let mut remaining = elapsed;
        let mut fires = 0;
        while remaining >= self.until_next {
            if fires == MAX_FIRES_PER_ADVANCE {
                log::debug!("Skipping {remaining:?} of clock backlog");
                self.until_next = self.period;
                return fires;
            }
            remaining -= self.until_next;
            self.until_next = self.period;
            fires += 1;
        }
        self.until_next -= remaining;
        fires
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

pub type SubscriptionId = u64;

type CounterObserver = Box<dyn FnMut(u64)>;

/// Stopped/Running state machine with a generation counter.
///
/// Counter observers are called in registration order with the new value
/// after every committed tick, on `pause` and on `reset`.
pub struct TurnScheduler {
    state: TimerState,
    source: PeriodicSource,
    observers: Vec<(SubscriptionId, CounterObserver)>,
    next_subscription: SubscriptionId,
}

impl TurnScheduler {
    /// `initial` lets a replacement scheduler continue where the old one was
    pub fn new(period: Duration, start_delay: Duration, initial: TimerState) -> Result<Self> {
        Ok(Self {
            state: initial,
            source: PeriodicSource::new(period, start_delay)?,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn counter(&self) -> u64 {
        self.state.counter
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn period(&self) -> Duration {
        self.source.period()
    }

    pub fn is_torn_down(&self) -> bool {
        self.source.is_cancelled()
    }

    pub fn resume(&mut self) {
        self.state.running = true;
    }

    pub fn pause(&mut self) {
        self.state.running = false;
        self.broadcast();
    }

    pub fn reset(&mut self) {
        self.state = TimerState::default();
        self.broadcast();
    }

    /// Handle one tick event.
    ///
    /// While running: bump the counter, run `on_commit` exactly once with the
    /// new value, then notify observers. Otherwise nothing happens.
    pub fn tick<F: FnOnce(u64)>(&mut self, on_commit: F) -> Option<u64> {
        if !self.state.running || self.is_torn_down() {
            return None;
        }
        self.state.counter += 1;
        let counter = self.state.counter;
        on_commit(counter);
        self.broadcast();
        Some(counter)
    }

    /// Feed elapsed host time; returns the number of committed ticks
    pub fn advance<F: FnMut(u64)>(&mut self, elapsed: Duration, mut on_commit: F) -> u32 {
        let fires = self.source.advance(elapsed);
        (0..fires)
            .filter(|_| self.tick(&mut on_commit).is_some())
            .count() as u32
    }

    pub fn subscribe(&mut self, observer: impl FnMut(u64) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether the subscription existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Cancel the periodic source and drop observers. Idempotent.
    pub fn teardown(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.source.cancel();
        self.observers.clear();
        log::info!("Turn scheduler torn down at generation {}", self.state.counter);
    }

    /// Build a scheduler with a new cadence that keeps this one's progress
    /// and observers. `self` is torn down before the replacement exists.
    /// A scheduler that is already torn down cannot be carried over.
    pub fn carry_over(
        &mut self,
        period: Duration,
        start_delay: Duration,
    ) -> Result<TurnScheduler> {
        if self.is_torn_down() {
            return Err(LifeError::TornDown { counter: self.state.counter });
        }
        let source = PeriodicSource::new(period, start_delay)?;
        let observers = std::mem::take(&mut self.observers);
        self.teardown();
        Ok(TurnScheduler {
            state: self.state,
            source,
            observers,
            next_subscription: self.next_subscription,
        })
    }

    fn broadcast(&mut self) {
        if self.is_torn_down() {
            return;
        }
        let counter = self.state.counter;
        for (_, observer) in self.observers.iter_mut() {
            observer(counter);
        }
    }
}

impl Drop for TurnScheduler {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const PERIOD: Duration = Duration::from_millis(100);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn scheduler() -> TurnScheduler {
        TurnScheduler::new(PERIOD, ms(50), TimerState::default()).unwrap()
    }

    fn recorder(scheduler: &mut TurnScheduler) -> Rc<RefCell<Vec<u64>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        scheduler.subscribe(move |counter| sink.borrow_mut().push(counter));
        seen
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            TurnScheduler::new(Duration::ZERO, ms(0), TimerState::default()),
            Err(LifeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_source_honours_start_delay() {
        let mut source = PeriodicSource::new(PERIOD, ms(50)).unwrap();
        assert_eq!(source.advance(ms(49)), 0);
        assert_eq!(source.advance(ms(1)), 1);
        assert_eq!(source.advance(ms(99)), 0);
        assert_eq!(source.advance(ms(1)), 1);
        assert_eq!(source.advance(ms(350)), 3);
        assert_eq!(source.advance(ms(50)), 1);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut source = PeriodicSource::new(ms(10), ms(0)).unwrap();
        assert_eq!(source.advance(Duration::from_secs(30)), MAX_FIRES_PER_ADVANCE);
        // backlog dropped, next fire a full period later
        assert_eq!(source.advance(ms(9)), 0);
        assert_eq!(source.advance(ms(1)), 1);
    }

    #[test]
    fn test_cancelled_source_stays_silent() {
        let mut source = PeriodicSource::new(PERIOD, ms(0)).unwrap();
        source.cancel();
        assert_eq!(source.advance(ms(10_000)), 0);
    }

    #[test]
    fn test_ticks_ignored_while_stopped() {
        let mut scheduler = scheduler();
        let mut commits = 0;
        for _ in 0..10 {
            assert_eq!(scheduler.tick(|_| commits += 1), None);
        }
        assert_eq!(scheduler.advance(ms(5_000), |_| commits += 1), 0);
        assert_eq!(commits, 0);
        assert_eq!(scheduler.counter(), 0);
    }

    #[test]
    fn test_running_tick_commits_once_then_broadcasts() {
        let mut scheduler = scheduler();
        let seen = recorder(&mut scheduler);
        scheduler.resume();

        let order = Rc::new(RefCell::new(Vec::new()));
        let commit_log = Rc::clone(&order);
        scheduler.subscribe({
            let order = Rc::clone(&order);
            move |c| order.borrow_mut().push(format!("observe {c}"))
        });

        let committed = scheduler.tick(|c| commit_log.borrow_mut().push(format!("commit {c}")));
        assert_eq!(committed, Some(1));
        assert_eq!(*order.borrow(), vec!["commit 1", "observe 1"]);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_pause_resume_continues_without_gaps() {
        let mut scheduler = scheduler();
        let seen = recorder(&mut scheduler);
        scheduler.resume();

        let mut generations = Vec::new();
        scheduler.advance(ms(250), |c| generations.push(c));
        scheduler.pause();
        scheduler.advance(ms(1_000), |c| generations.push(c));
        scheduler.resume();
        scheduler.advance(ms(200), |c| generations.push(c));

        assert_eq!(generations, vec![1, 2, 3, 4, 5]);
        // pause rebroadcasts the held value
        assert_eq!(*seen.borrow(), vec![1, 2, 3, 3, 4, 5]);
    }

    #[test]
    fn test_reset_stops_and_zeroes() {
        let initial = TimerState { counter: 41, running: true };
        let mut scheduler = TurnScheduler::new(PERIOD, ms(0), initial).unwrap();
        let seen = recorder(&mut scheduler);
        scheduler.tick(|_| {});
        scheduler.reset();

        assert_eq!(scheduler.state(), TimerState { counter: 0, running: false });
        assert_eq!(*seen.borrow(), vec![42, 0]);
        assert_eq!(scheduler.tick(|_| {}), None);
    }

    #[test]
    fn test_unsubscribe() {
        let mut scheduler = scheduler();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = scheduler.subscribe(move |c| sink.borrow_mut().push(c));
        scheduler.resume();
        scheduler.tick(|_| {});
        assert!(scheduler.unsubscribe(id));
        assert!(!scheduler.unsubscribe(id));
        scheduler.tick(|_| {});
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_no_delivery_after_teardown() {
        let mut scheduler = scheduler();
        let seen = recorder(&mut scheduler);
        scheduler.resume();
        scheduler.teardown();

        let mut commits = 0;
        assert_eq!(scheduler.tick(|_| commits += 1), None);
        assert_eq!(scheduler.advance(ms(1_000), |_| commits += 1), 0);
        scheduler.reset();
        assert_eq!(commits, 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_carry_over_keeps_progress_and_observers() {
        let mut old = scheduler();
        let seen = recorder(&mut old);
        old.resume();
        old.advance(ms(150), |_| {});
        assert_eq!(old.counter(), 2);

        let mut new = old.carry_over(ms(10), ms(5)).unwrap();
        assert!(old.is_torn_down());
        assert_eq!(old.advance(ms(1_000), |_| {}), 0);

        assert_eq!(new.state(), TimerState { counter: 2, running: true });
        assert_eq!(new.period(), ms(10));
        assert_eq!(new.advance(ms(25), |_| {}), 3);
        assert_eq!(*seen.borrow(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_torn_down_scheduler_cannot_be_carried_over() {
        let mut old = scheduler();
        old.resume();
        old.teardown();
        assert!(matches!(
            old.carry_over(ms(10), ms(0)),
            Err(LifeError::TornDown { counter: 0 })
        ));
        assert!(old.is_torn_down());
        assert_eq!(old.advance(ms(1_000), |_| {}), 0);
    }

    #[test]
    fn test_failed_carry_over_leaves_old_scheduler_alive() {
        let mut old = scheduler();
        old.resume();
        assert!(old.carry_over(Duration::ZERO, ms(0)).is_err());
        assert!(!old.is_torn_down());
        assert_eq!(old.tick(|_| {}), Some(1));
    }
}
