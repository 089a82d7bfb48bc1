//! Route Table
//!
//! Client-side routes and their navigation labels.

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Todo,
    Dashboard,
}

impl AppRoute {
    pub const ALL: [AppRoute; 2] = [AppRoute::Todo, AppRoute::Dashboard];

    /// Route name
    pub fn name(self) -> &'static str {
        match self {
            AppRoute::Todo => "todo",
            AppRoute::Dashboard => "dashboard",
        }
    }

    /// Full path used for links
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Todo => "/",
            AppRoute::Dashboard => "/dashboard",
        }
    }

    /// Path without the leading slash, as matched by the router
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Todo => "Todos",
            AppRoute::Dashboard => "Dashboard",
        }
    }
}
