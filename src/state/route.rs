#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Screens the client can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Login,
    Articles,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Articles => "/articles",
        }
    }

    /// Private routes fall back to `Login` without a session.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Articles)
    }

    /// Apply the private-route guard.
    #[must_use]
    pub fn guard(self, authenticated: bool) -> Self {
        if self.requires_auth() && !authenticated { Self::Login } else { self }
    }
}
