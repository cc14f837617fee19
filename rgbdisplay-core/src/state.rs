//! Display lifecycle
//!
//! A controller is unusable between power-up (or a hardware reset) and the
//! end of its init sequence. Drawing is only allowed in [`Lifecycle::Ready`].

/// Lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Powered or reset, registers in their default state
    #[default]
    Uninitialized,
    /// Init sequence replayed, drawing allowed
    Ready,
}

/// Lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifecycleEvent {
    /// Init sequence and post-init writes completed
    InitComplete,
    /// Init sequence aborted by a bus error
    InitFailed,
    /// Hardware reset pulse issued
    Reset,
}

impl Lifecycle {
    /// Process an event and return the new state
    pub fn transition(self, event: LifecycleEvent) -> Self {
        use Lifecycle::*;
        use LifecycleEvent::*;

        match (self, event) {
            (_, InitComplete) => Ready,
            // A half-written register set is not trustworthy
            (_, InitFailed) => Uninitialized,
            (_, Reset) => Uninitialized,
        }
    }

    /// Check if drawing operations are allowed
    pub fn is_ready(&self) -> bool {
        matches!(self, Lifecycle::Ready)
    }
}
