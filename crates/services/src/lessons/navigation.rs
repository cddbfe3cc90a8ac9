/// Directionless requests the lesson flow sends to the host router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationSignal {
    /// Go back one step.
    Back,
    /// Leave the session for the post-lesson dashboard.
    Dashboard,
}
