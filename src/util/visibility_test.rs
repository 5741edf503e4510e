use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

/// In-memory stand-in for the browser observer: subscriptions are held in a
/// list and fractions are pushed by hand.
struct FakeIntersections {
    subs: RefCell<Vec<FakeSub>>,
    next: Cell<u64>,
}

struct FakeSub {
    token: u64,
    threshold: f64,
    callback: FractionCallback,
}

impl FakeIntersections {
    fn new() -> Self {
        Self {
            subs: RefCell::new(Vec::new()),
            next: Cell::new(0),
        }
    }

    /// Reports `fraction` to every live subscription, dropping those whose
    /// callbacks ask to stop.
    fn emit(&self, fraction: f64) {
        self.subs
            .borrow_mut()
            .retain_mut(|sub| (sub.callback)(fraction) == Watch::Keep);
    }

    fn active(&self) -> usize {
        self.subs.borrow().len()
    }

    fn thresholds(&self) -> Vec<f64> {
        self.subs.borrow().iter().map(|sub| sub.threshold).collect()
    }
}

impl IntersectionSource for FakeIntersections {
    type Target = ();

    fn subscribe(
        &self,
        _target: (),
        threshold: f64,
        callback: FractionCallback,
    ) -> CancelToken {
        let token = self.next.get();
        self.next.set(token + 1);
        self.subs.borrow_mut().push(FakeSub {
            token,
            threshold,
            callback,
        });
        CancelToken(token)
    }

    fn cancel(&self, token: CancelToken) {
        self.subs
            .borrow_mut()
            .retain(|sub| CancelToken(sub.token) != token);
    }
}

fn counting_reveal(count: &Rc<Cell<usize>>) -> impl FnOnce() + 'static {
    let count = Rc::clone(count);
    move || count.set(count.get() + 1)
}

// ============================================================
// RevealLatch
// ============================================================

#[test]
fn latch_starts_hidden() {
    let latch = RevealLatch::new(0.3);
    assert!(!latch.is_visible());
}

#[test]
fn latch_fires_at_exactly_the_threshold() {
    let mut latch = RevealLatch::new(0.3);
    assert_eq!(latch.observe(0.3), Watch::Stop);
    assert!(latch.is_visible());
}

#[test]
fn latch_ignores_fractions_below_the_threshold() {
    let mut latch = RevealLatch::new(0.3);
    assert_eq!(latch.observe(0.29), Watch::Keep);
    assert!(!latch.is_visible());
}

#[test]
fn latch_never_resets_once_visible() {
    let mut latch = RevealLatch::new(0.3);
    latch.observe(0.4);
    assert!(latch.is_visible());
    assert_eq!(latch.observe(0.0), Watch::Stop);
    assert!(latch.is_visible());
}

#[test]
fn zero_fraction_never_reveals() {
    // The initial report for an off-screen element is a fraction of zero.
    let mut latch = RevealLatch::new(0.0);
    assert_eq!(latch.observe(0.0), Watch::Keep);
    assert!(!latch.is_visible());
}

#[test]
fn zero_threshold_reveals_on_the_first_visible_sliver() {
    let mut latch = RevealLatch::new(0.0);
    assert_eq!(latch.observe(0.01), Watch::Stop);
    assert!(latch.is_visible());
}

#[test]
fn thresholds_above_one_clamp_to_full_visibility() {
    let mut latch = RevealLatch::new(2.5);
    assert_eq!(latch.observe(0.99), Watch::Keep);
    assert_eq!(latch.observe(1.0), Watch::Stop);
}

#[test]
fn negative_and_nan_thresholds_clamp_to_zero() {
    let mut negative = RevealLatch::new(-3.0);
    assert_eq!(negative.observe(0.001), Watch::Stop);

    let mut nan = RevealLatch::new(f64::NAN);
    assert_eq!(nan.observe(0.0), Watch::Keep);
    assert_eq!(nan.observe(0.001), Watch::Stop);
}

// ============================================================
// observe_once against a fake source
// ============================================================

#[test]
fn observe_once_fires_exactly_once() {
    let fake = FakeIntersections::new();
    let fired = Rc::new(Cell::new(0));
    observe_once(&fake, (), 0.3, counting_reveal(&fired));

    fake.emit(0.5);
    fake.emit(0.9);
    assert_eq!(fired.get(), 1);
}

#[test]
fn observe_once_unsubscribes_after_revealing() {
    let fake = FakeIntersections::new();
    let fired = Rc::new(Cell::new(0));
    observe_once(&fake, (), 0.3, counting_reveal(&fired));

    assert_eq!(fake.active(), 1);
    fake.emit(0.5);
    assert_eq!(fake.active(), 0);
}

#[test]
fn observe_once_keeps_watching_below_the_threshold() {
    let fake = FakeIntersections::new();
    let fired = Rc::new(Cell::new(0));
    observe_once(&fake, (), 0.3, counting_reveal(&fired));

    fake.emit(0.1);
    assert_eq!(fired.get(), 0);
    assert_eq!(fake.active(), 1);

    fake.emit(0.3);
    assert_eq!(fired.get(), 1);
    assert_eq!(fake.active(), 0);
}

#[test]
fn cancelling_the_token_stops_reporting() {
    let fake = FakeIntersections::new();
    let fired = Rc::new(Cell::new(0));
    let token = observe_once(&fake, (), 0.3, counting_reveal(&fired));

    fake.cancel(token);
    fake.emit(1.0);
    assert_eq!(fired.get(), 0);
    assert_eq!(fake.active(), 0);
}

#[test]
fn cancelling_an_unknown_token_is_ignored() {
    let fake = FakeIntersections::new();
    let fired = Rc::new(Cell::new(0));
    observe_once(&fake, (), 0.3, counting_reveal(&fired));

    fake.cancel(CancelToken(999));
    assert_eq!(fake.active(), 1);
}

#[test]
fn tokens_are_unique_per_source() {
    let fake = FakeIntersections::new();
    let fired = Rc::new(Cell::new(0));
    let first = observe_once(&fake, (), 0.2, counting_reveal(&fired));
    let second = observe_once(&fake, (), 0.2, counting_reveal(&fired));
    assert_ne!(first, second);
}

#[test]
fn trackers_reveal_independently() {
    let fake = FakeIntersections::new();
    let eager = Rc::new(Cell::new(0));
    let picky = Rc::new(Cell::new(0));
    observe_once(&fake, (), 0.2, counting_reveal(&eager));
    observe_once(&fake, (), 0.8, counting_reveal(&picky));

    fake.emit(0.5);
    assert_eq!(eager.get(), 1);
    assert_eq!(picky.get(), 0);
    assert_eq!(fake.active(), 1);
}

#[test]
fn scrolling_out_after_revealing_keeps_it_revealed() {
    let fake = FakeIntersections::new();
    let visible = Rc::new(Cell::new(false));
    let flag = Rc::clone(&visible);
    observe_once(&fake, (), 0.3, move || flag.set(true));

    fake.emit(0.4);
    assert!(visible.get());

    fake.emit(0.0);
    assert!(visible.get());
}

#[test]
fn clamped_threshold_is_what_the_source_sees() {
    // A raw out-of-range threshold would make the browser observer throw.
    let fake = FakeIntersections::new();
    let fired = Rc::new(Cell::new(0));
    observe_once(&fake, (), 7.0, counting_reveal(&fired));

    let thresholds = fake.thresholds();
    assert_eq!(thresholds.len(), 1);
    assert!(thresholds[0] <= 1.0);

    fake.emit(1.0);
    assert_eq!(fired.get(), 1);
}
