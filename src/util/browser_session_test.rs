#![cfg(not(feature = "browser"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;

#[test]
fn missing_token_reports_invalid_immediately() {
    let auth = BrowserAuth::new(ConsoleConfig::default());
    let seen = Arc::new(AtomicBool::new(true));
    let sink = Arc::clone(&seen);
    auth.is_session_valid(Box::new(move |valid| sink.store(valid, Ordering::SeqCst)));
    assert!(!seen.load(Ordering::SeqCst));
}

#[test]
fn delete_credential_is_callable_outside_the_browser() {
    BrowserAuth::new(ConsoleConfig::default()).delete_credential();
}

#[test]
fn scheduler_returns_armed_handle_without_ticking() {
    let ticked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ticked);
    let handle = BrowserScheduler.every(Duration::from_millis(5000), Arc::new(move || flag.store(true, Ordering::SeqCst)));
    assert!(handle.is_armed());
    assert!(!ticked.load(Ordering::SeqCst));
    handle.cancel();
    assert!(!handle.is_armed());
}

#[test]
fn gate_stays_optimistic_until_started_without_a_token() {
    use crate::state::session::{CheckHandle, SessionGate, SessionState};
    use std::sync::Mutex;

    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let gate = SessionGate::new(
        Arc::new(BrowserAuth::new(ConsoleConfig::default())),
        Arc::new(BrowserScheduler),
        CheckHandle::default(),
        move |state| sink.lock().unwrap().push(state),
    );

    // Building the gate (what `App` does before its first render) must not
    // check; the first render always sees the optimistic shell.
    assert_eq!(gate.state(), SessionState { valid: true });
    assert!(changes.lock().unwrap().is_empty());

    // Without a token the check resolves inside `start()`, which is why `App`
    // defers it to an effect.
    gate.start();
    assert_eq!(gate.state(), SessionState { valid: false });
    assert_eq!(*changes.lock().unwrap(), vec![SessionState { valid: false }]);
    gate.stop();
}
