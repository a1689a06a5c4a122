//! Change deduplication and the haptic side effect.

/// Out-of-domain placeholder so the first resolved value always counts as a change.
pub const NO_PREVIOUS_VALUE: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticFeedbackType {
    /// Short tick used while a handle or selection moves.
    TextHandleMove,
}

/// Sink for the perceptual cue fired on each value transition.
pub trait HapticFeedback {
    fn perform_haptic_feedback(&self, kind: HapticFeedbackType);
}

/// Haptics for hosts without a vibration motor.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn perform_haptic_feedback(&self, _kind: HapticFeedbackType) {}
}

impl<F: Fn(HapticFeedbackType)> HapticFeedback for F {
    fn perform_haptic_feedback(&self, kind: HapticFeedbackType) {
        self(kind)
    }
}

/// Stateless form: returns whether the side effect fires and the new previous value.
pub fn notify(new_value: i32, previous_value: i32) -> (bool, i32) {
    if new_value != previous_value {
        (true, new_value)
    } else {
        (false, previous_value)
    }
}

/// Tracks the last value that fired the side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeNotifier {
    previous: i32,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            previous: NO_PREVIOUS_VALUE,
        }
    }

    pub fn previous(&self) -> i32 {
        self.previous
    }

    /// Records `new_value`; returns `true` when it differs from the previous one.
    pub fn notify(&mut self, new_value: i32) -> bool {
        let (fire, previous) = notify(new_value, self.previous);
        self.previous = previous;
        fire
    }

    /// Forgets the previous value so the next one fires again.
    pub fn reset(&mut self) {
        self.previous = NO_PREVIOUS_VALUE;
    }
}
