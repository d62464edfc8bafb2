/// Opaque handle to the platform's UI root
///
/// The rendering engine behind it is external; the bridge only forwards the
/// handle into the application's `start` hook. The small surface here is
/// what the hooks need to act on: a title and visibility.
#[derive(Debug, Default)]
pub struct Stage {
    title: String,
    showing: bool,
}

impl Stage {
    /// Create a hidden, untitled stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stage title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Current stage title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Make the stage visible
    pub fn show(&mut self) {
        self.showing = true;
    }

    /// Hide the stage
    pub fn hide(&mut self) {
        self.showing = false;
    }

    /// Check whether the stage is visible
    pub fn is_showing(&self) -> bool {
        self.showing
    }
}
