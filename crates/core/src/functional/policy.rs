//! Failure policy shared by the tap-style combinators

/// What a tap-style combinator does when the caller's action fails.
///
/// Only [`SequenceExt::tap_each`](super::SequenceExt::tap_each) and
/// [`ValueExt::try_tap`](super::ValueExt::try_tap) accept a policy. Folds,
/// mutations and async mutations always propagate.
///
/// # Usability hazard
///
/// [`FailurePolicy::Suppress`] throws the failure away. Nothing is logged and
/// nothing is recorded, so a broken action becomes invisible. Callers that
/// need to know an action failed must use [`FailurePolicy::Propagate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Return the failure to the caller and stop
    #[default]
    Propagate,
    /// Discard the failure and carry on with the original value
    Suppress,
}

impl FailurePolicy {
    /// Whether failures are discarded under this policy
    #[must_use]
    pub fn suppresses(self) -> bool {
        matches!(self, FailurePolicy::Suppress)
    }
}

/// `true` means "suppress failures", matching the conventional flag form.
impl From<bool> for FailurePolicy {
    fn from(suppress: bool) -> Self {
        if suppress {
            FailurePolicy::Suppress
        } else {
            FailurePolicy::Propagate
        }
    }
}
