//! Roles and Landing Routes

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
    Doctor,
    Nurse,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::User, Role::Doctor, Role::Nurse];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Exact match; `"Admin"` is not a role
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Role to post-login destination
#[derive(Debug, Clone)]
pub struct LandingRoutes {
    routes: [(Role, String); 4],
}

impl Default for LandingRoutes {
    fn default() -> Self {
        Self {
            routes: Role::ALL.map(|role| (role, format!("/{}/dashboard", role.as_str()))),
        }
    }
}

impl LandingRoutes {
    pub fn with_route(mut self, role: Role, path: impl Into<String>) -> Self {
        let path = path.into();
        for (r, p) in self.routes.iter_mut() {
            if *r == role {
                *p = path.clone();
            }
        }
        self
    }

    pub fn route(&self, role: Role) -> &str {
        self.routes
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, p)| p.as_str())
            .unwrap_or_default()
    }

    /// `None` for anything that isn't a known role
    pub fn resolve(&self, role: &str) -> Option<&str> {
        match role.parse::<Role>() {
            Ok(role) => Some(self.route(role)),
            Err(e) => {
                tracing::warn!(role, error = %e, "No landing route for role");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        for bad in ["superadmin", "Admin", " nurse", ""] {
            assert_eq!(bad.parse::<Role>(), Err(UnknownRole(bad.to_string())));
        }
    }

    #[test]
    fn test_default_routes() {
        let routes = LandingRoutes::default();
        assert_eq!(routes.resolve("admin"), Some("/admin/dashboard"));
        assert_eq!(routes.resolve("user"), Some("/user/dashboard"));
        assert_eq!(routes.resolve("doctor"), Some("/doctor/dashboard"));
        assert_eq!(routes.resolve("nurse"), Some("/nurse/dashboard"));
        assert_eq!(routes.resolve("superadmin"), None);
    }

    #[test]
    fn test_override_route() {
        let routes = LandingRoutes::default().with_route(Role::Nurse, "/ward");
        assert_eq!(routes.resolve("nurse"), Some("/ward"));
        assert_eq!(routes.route(Role::Doctor), "/doctor/dashboard");
    }
}
