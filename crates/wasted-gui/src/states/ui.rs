/// Which page fills the central panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Catalog,
    Viewer,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Catalog => write!(f, "Catalog"),
            Route::Viewer => write!(f, "3D Shirt Viewer"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub route: Route,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
