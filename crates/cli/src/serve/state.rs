//! Application state.

/// Settings shared by every request handler. Immutable after startup.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    /// Redirect visitors without the `visited` cookie to `/onboarding`.
    pub(crate) onboarding_gate: bool,
}
