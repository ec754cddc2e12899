use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role. Decides which dashboard a client lands on after login.
///
/// Signup always creates `User`; clinical and admin roles are granted
/// out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum UserRole {
    #[default]
    User = 0,
    Admin = 1,
    Doctor = 2,
    Nurse = 3,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            User => "user",
            Admin => "admin",
            Doctor => "doctor",
            Nurse => "nurse",
        }
    }

    #[inline]
    pub const fn from_id(id: i16) -> Option<Self> {
        use UserRole::*;
        match id {
            0 => Some(User),
            1 => Some(Admin),
            2 => Some(Doctor),
            3 => Some(Nurse),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "user" => Some(User),
            "admin" => Some(Admin),
            "doctor" => Some(Doctor),
            "nurse" => Some(Nurse),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [UserRole; 4] = [
        UserRole::User,
        UserRole::Admin,
        UserRole::Doctor,
        UserRole::Nurse,
    ];

    #[test]
    fn test_user_role_from_id() {
        for role in ALL {
            assert_eq!(UserRole::from_id(role.id()), Some(role));
        }
        assert_eq!(UserRole::from_id(-1), None);
        assert_eq!(UserRole::from_id(4), None);
    }

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("doctor"), Some(UserRole::Doctor));
        assert_eq!(UserRole::from_code("nurse"), Some(UserRole::Nurse));
        assert_eq!(UserRole::from_code("superadmin"), None);
        assert_eq!(UserRole::from_code("Admin"), None);
    }

    #[test]
    fn test_user_role_display_matches_serde() {
        for role in ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }

    #[test]
    fn test_default_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }
}
