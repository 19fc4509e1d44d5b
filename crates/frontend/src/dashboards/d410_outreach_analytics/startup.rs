//! Startup loading gate.
//!
//! The dashboard opens on a short loading screen. A one-shot timer flips the
//! phase to `Ready`; the timer is owned by the mounting component and cleared
//! on cleanup, so it never fires after the dashboard is torn down.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay before the loading screen is replaced by the dashboard.
pub const STARTUP_DELAY_MS: u32 = 1000;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadPhase {
    /// Transition taken when the startup timer fires. `Ready` is absorbing.
    pub fn settle(self) -> Self {
        LoadPhase::Ready
    }

    pub fn is_loading(self) -> bool {
        self == LoadPhase::Loading
    }
}

/// Schedule the startup timer for the current component and return its phase.
///
/// Must be called inside a component body: the pending timer is cancelled in
/// `on_cleanup` of the current owner.
pub fn use_startup_gate() -> ReadSignal<LoadPhase> {
    let (phase, set_phase) = signal(LoadPhase::default());

    let timer = Timeout::new(STARTUP_DELAY_MS, move || {
        set_phase.update(|phase| *phase = phase.settle());
        log::debug!("startup gate settled after {} ms", STARTUP_DELAY_MS);
    });
    let pending = StoredValue::new_local(Some(timer));

    on_cleanup(move || {
        let Some(timer) = pending.try_update_value(Option::take).flatten() else {
            return;
        };
        if phase.try_get_untracked().is_some_and(LoadPhase::is_loading) {
            log::debug!("startup gate torn down before settling, cancelling timer");
        }
        // dropping a gloo Timeout clears the pending timeout
        drop(timer);
    });

    phase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        assert_eq!(LoadPhase::default(), LoadPhase::Loading);
        assert!(LoadPhase::default().is_loading());
    }

    #[test]
    fn test_settle_is_idempotent() {
        let once = LoadPhase::Loading.settle();
        assert_eq!(once, LoadPhase::Ready);
        assert_eq!(once.settle(), LoadPhase::Ready);
        assert!(!once.is_loading());
    }
}
