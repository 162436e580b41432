use super::*;

#[test]
fn release_can_be_called_repeatedly() {
    let mut sub = ClickAwaySubscription::register(|| {});
    sub.release();
    sub.release();
}

#[test]
fn dropping_an_active_subscription_does_not_panic() {
    let sub = ClickAwaySubscription::register(|| {});
    drop(sub);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn registration_off_browser_never_invokes_callback() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let sub = ClickAwaySubscription::register(move || counter.set(counter.get() + 1));
    drop(sub);
    assert_eq!(calls.get(), 0);
}
