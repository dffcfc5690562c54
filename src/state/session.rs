//! Session gate: polled JWT validity driving the login/shell switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns one [`SessionGate`] for its lifetime. The gate asks a
//! [`SessionAuth`] collaborator whether the stored credential is still
//! accepted, once on start and then on every interval tick, and publishes
//! the boolean outcome to the rendering layer through a change callback.
//!
//! DESIGN
//! ======
//! The logout route has no direct reference to the gate. Instead the gate
//! registers its check function into a [`CheckHandle`] that is handed to
//! components through context; the handle is cleared again on `stop()`, at
//! which point calling through it does nothing.
//!
//! Completions are tagged with the activation generation they were issued
//! under. A completion that lands after `stop()` (or after a stop/start
//! cycle) is dropped instead of mutating torn-down state.
//!
//! Values here are `Send + Sync` because Leptos context and cleanup
//! closures require it, even though the browser runs a single thread.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

/// Default period between background validity checks.
pub const SESSION_POLL_PERIOD: Duration = Duration::from_millis(5000);

/// Completion callback passed to [`SessionAuth::is_session_valid`].
pub type ValidityCallback = Box<dyn FnOnce(bool) + Send + 'static>;

/// Repeating callback armed through an [`IntervalScheduler`].
pub type TickFn = Arc<dyn Fn() + Send + Sync + 'static>;

type CheckFn = Arc<dyn Fn() + Send + Sync + 'static>;
type ChangeFn = Arc<dyn Fn(SessionState) + Send + Sync + 'static>;

/// Observable session validity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub valid: bool,
}

impl Default for SessionState {
    /// Optimistically valid until the first check completes.
    fn default() -> Self {
        Self { valid: true }
    }
}

/// External authority deciding whether the stored credential is accepted.
pub trait SessionAuth: Send + Sync + 'static {
    /// Ask whether the current credential is valid. `done` is invoked
    /// exactly once, possibly after the caller has returned.
    fn is_session_valid(&self, done: ValidityCallback);

    /// Remove the locally stored credential.
    fn delete_credential(&self);
}

/// Arms repeating callbacks.
pub trait IntervalScheduler: Send + Sync + 'static {
    /// Invoke `tick` every `period` until the returned handle is cancelled.
    fn every(&self, period: Duration, tick: TickFn) -> IntervalHandle;
}

/// Cancellation token for an armed interval.
///
/// Schedulers must test [`IntervalHandle::is_armed`] before each tick.
#[derive(Clone, Debug)]
pub struct IntervalHandle {
    armed: Arc<AtomicBool>,
}

impl IntervalHandle {
    pub fn new() -> Self {
        Self { armed: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.armed.store(false, Ordering::Release);
    }
}

impl Default for IntervalHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot holding the active gate's check function.
///
/// Cloning shares the slot. At most one function is registered at a time.
#[derive(Clone, Default)]
pub struct CheckHandle {
    slot: Arc<Mutex<Option<CheckFn>>>,
}

impl CheckHandle {
    pub fn is_registered(&self) -> bool {
        self.lock().is_some()
    }

    /// Run the registered check, if any. Returns whether a check ran.
    pub fn check(&self) -> bool {
        let current = self.lock().clone();
        match current {
            Some(check) => {
                check();
                true
            }
            None => false,
        }
    }

    fn register(&self, check: CheckFn) {
        let previous = self.lock().replace(check);
        if previous.is_some() {
            log::warn!("session check handle replaced while another gate was active");
        }
    }

    fn clear(&self) {
        self.lock().take();
    }

    fn lock(&self) -> MutexGuard<'_, Option<CheckFn>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CheckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckHandle").field("registered", &self.is_registered()).finish()
    }
}

/// Delete the stored credential and force a re-check through `handle`.
///
/// With no active gate this only deletes the credential.
pub fn logout(auth: &dyn SessionAuth, handle: &CheckHandle) {
    auth.delete_credential();
    if !handle.check() {
        log::debug!("logout with no active session gate");
    }
}

/// Session operations available to pages through context.
#[derive(Clone)]
pub struct SessionContext {
    auth: Arc<dyn SessionAuth>,
    handle: CheckHandle,
}

impl SessionContext {
    pub fn new(auth: Arc<dyn SessionAuth>, handle: CheckHandle) -> Self {
        Self { auth, handle }
    }

    pub fn logout(&self) {
        logout(self.auth.as_ref(), &self.handle);
    }

    /// Re-check validity now, e.g. after a successful login.
    pub fn recheck(&self) {
        self.handle.check();
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").field("handle", &self.handle).finish_non_exhaustive()
    }
}

/// Polls session validity while active and publishes changes.
#[derive(Clone)]
pub struct SessionGate {
    inner: Arc<GateInner>,
}

struct GateInner {
    auth: Arc<dyn SessionAuth>,
    scheduler: Arc<dyn IntervalScheduler>,
    handle: CheckHandle,
    period: Duration,
    on_change: ChangeFn,
    state: Mutex<SessionState>,
    active: AtomicBool,
    generation: AtomicU64,
    interval: Mutex<Option<IntervalHandle>>,
}

impl SessionGate {
    /// Create an inactive gate. `on_change` receives every state transition.
    pub fn new<F>(
        auth: Arc<dyn SessionAuth>,
        scheduler: Arc<dyn IntervalScheduler>,
        handle: CheckHandle,
        on_change: F,
    ) -> Self
    where
        F: Fn(SessionState) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(GateInner {
                auth,
                scheduler,
                handle,
                period: SESSION_POLL_PERIOD,
                on_change: Arc::new(on_change),
                state: Mutex::new(SessionState::default()),
                active: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                interval: Mutex::new(None),
            }),
        }
    }

    /// Override the polling period. Only meaningful before `start()`.
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        match Arc::get_mut(&mut self.inner) {
            Some(inner) => inner.period = period,
            None => log::warn!("session gate already shared; poll period unchanged"),
        }
        self
    }

    pub fn state(&self) -> SessionState {
        *self.inner.lock_state()
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::Acquire)
    }

    pub fn period(&self) -> Duration {
        self.inner.period
    }

    /// Check immediately, register the check handle, and arm the interval.
    pub fn start(&self) {
        if self.inner.active.swap(true, Ordering::AcqRel) {
            log::warn!("session gate started twice without stop");
            return;
        }
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
        log::debug!("session gate started, polling every {:?}", self.inner.period);

        GateInner::check_validity(&self.inner);

        let weak = Arc::downgrade(&self.inner);
        self.inner.handle.register(Arc::new(move || GateInner::check_weak(&weak)));

        let weak = Arc::downgrade(&self.inner);
        let tick: TickFn = Arc::new(move || GateInner::check_weak(&weak));
        let interval = self.inner.scheduler.every(self.inner.period, tick);
        if let Some(stale) = self.inner.lock_interval().replace(interval) {
            stale.cancel();
        }
    }

    /// Cancel the interval and clear the check handle.
    pub fn stop(&self) {
        if !self.inner.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(interval) = self.inner.lock_interval().take() {
            interval.cancel();
        }
        self.inner.handle.clear();
        log::debug!("session gate stopped");
    }

    /// Ask the collaborator for validity and apply the outcome when it lands.
    pub fn check_validity(&self) {
        GateInner::check_validity(&self.inner);
    }

    /// Delete the credential and re-check through the shared handle.
    pub fn logout(&self) {
        logout(self.inner.auth.as_ref(), &self.inner.handle);
    }
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("state", &self.state())
            .field("active", &self.is_active())
            .field("period", &self.inner.period)
            .finish_non_exhaustive()
    }
}

impl GateInner {
    fn check_weak(weak: &Weak<GateInner>) {
        if let Some(inner) = weak.upgrade() {
            GateInner::check_validity(&inner);
        }
    }

    fn check_validity(inner: &Arc<GateInner>) {
        if !inner.active.load(Ordering::Acquire) {
            log::debug!("skipping session check on inactive gate");
            return;
        }
        let generation = inner.generation.load(Ordering::Acquire);
        let weak = Arc::downgrade(inner);
        inner.auth.is_session_valid(Box::new(move |valid| {
            if let Some(inner) = weak.upgrade() {
                inner.apply(generation, valid);
            }
        }));
    }

    fn apply(&self, generation: u64, valid: bool) {
        if !self.active.load(Ordering::Acquire) || self.generation.load(Ordering::Acquire) != generation {
            log::debug!("discarding session check result from a stopped gate");
            return;
        }
        let next = SessionState { valid };
        {
            let mut state = self.lock_state();
            if *state == next {
                return;
            }
            *state = next;
        }
        if valid {
            log::info!("session is valid");
        } else {
            log::info!("session is no longer valid");
        }
        (self.on_change)(next);
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_interval(&self) -> MutexGuard<'_, Option<IntervalHandle>> {
        self.interval.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
