use crate::domain::UserRole;

/// Listing filters for the user directory.
#[derive(Debug, Clone)]
pub enum UserQuery {
    /// The login lookup: email compared case-insensitively, role exactly.
    Credentials { email: String, role: UserRole },
    /// Everyone holding a given role.
    Role(UserRole),
}
