use std::fmt;

/// The three roles a person can hold in the system.
///
/// Role is fixed at account creation; every lifecycle decision point matches
/// on it exhaustively so adding a role forces each call site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Student,
    Vendor,
    Rider,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Student => write!(f, "Student"),
            UserRole::Vendor => write!(f, "Vendor"),
            UserRole::Rider => write!(f, "Rider"),
        }
    }
}

/// A registered account: student, vendor staff, or delivery rider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Prepaid wallet in whole currency units. Only students carry one.
    pub wallet_balance: Option<u32>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        wallet_balance: Option<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            wallet_balance,
        }
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub wallet_balance: Option<u32>,
}

/// Payload for updating an existing user. Role is immutable.
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}
