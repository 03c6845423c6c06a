use crate::models::UserRole;

/// The screens the client can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Content,
    Community,
    Agent,
    Admin,
}

/// What actually renders, given the view and the session signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Paywall,
    View(View),
}

/// Auth and subscription signals the client fetched from the server. A
/// snapshot, refreshed on login and on subscription changes.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub authenticated: bool,
    pub role: UserRole,
    pub has_subscription: bool,
}

/// Client-side view routing: the same gates the server enforces decide what
/// the user sees.
#[derive(Debug)]
pub struct ViewRouter {
    current: View,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            current: View::Content,
        }
    }
}

impl ViewRouter {
    pub fn current(&self) -> View {
        self.current
    }

    /// A non-admin asking for the admin view is ignored, mirroring the admin
    /// gate server-side.
    pub fn navigate(&mut self, view: View, session: &Session) {
        if view == View::Admin && session.role != UserRole::Admin {
            return;
        }
        self.current = view;
    }

    pub fn screen(&self, session: &Session) -> Screen {
        if !session.authenticated {
            return Screen::Landing;
        }
        if self.current == View::Agent && !session.has_subscription {
            return Screen::Paywall;
        }
        Screen::View(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(authenticated: bool, role: UserRole, has_subscription: bool) -> Session {
        Session {
            authenticated,
            role,
            has_subscription,
        }
    }

    #[test]
    fn unauthenticated_sessions_land_on_the_landing_page() {
        let router = ViewRouter::default();
        let s = session(false, UserRole::User, false);
        assert_eq!(router.screen(&s), Screen::Landing);
    }

    #[test]
    fn non_admins_cannot_navigate_to_the_admin_view() {
        let mut router = ViewRouter::default();
        let s = session(true, UserRole::User, true);
        router.navigate(View::Admin, &s);
        assert_eq!(router.current(), View::Content);

        let admin = session(true, UserRole::Admin, true);
        router.navigate(View::Admin, &admin);
        assert_eq!(router.current(), View::Admin);
    }

    #[test]
    fn agent_view_is_paywalled_without_a_subscription() {
        let mut router = ViewRouter::default();
        let s = session(true, UserRole::User, false);
        router.navigate(View::Agent, &s);
        assert_eq!(router.screen(&s), Screen::Paywall);

        let subscribed = session(true, UserRole::User, true);
        assert_eq!(router.screen(&subscribed), Screen::View(View::Agent));
    }
}
