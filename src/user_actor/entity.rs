use super::queries::UserQuery;
use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};
use crate::error::UserError;

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Action = ();
    type ActionResult = ();
    type Query = UserQuery;
    type Error = UserError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            role: params.role,
            wallet_balance: params.wallet_balance,
        })
    }

    /// Updates name and/or email. Role is immutable after creation, so the
    /// patch cannot carry one.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), UserError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), UserError> {
        Ok(())
    }

    fn matches(&self, query: &UserQuery) -> bool {
        match query {
            UserQuery::Credentials { email, role } => {
                self.role == *role && self.email.eq_ignore_ascii_case(email)
            }
            UserQuery::Role(role) => self.role == *role,
        }
    }

    fn not_found(id: &String) -> UserError {
        UserError::NotFound(id.clone())
    }

    fn channel_closed() -> UserError {
        UserError::ActorClosed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;

    #[test]
    fn credentials_query_ignores_email_case_but_not_role() {
        let user = User::new(
            "u1",
            "Tunde",
            "student@bellachow.com",
            UserRole::Student,
            Some(5000),
        );

        assert!(user.matches(&UserQuery::Credentials {
            email: "STUDENT@BellaChow.com".into(),
            role: UserRole::Student,
        }));
        assert!(!user.matches(&UserQuery::Credentials {
            email: "student@bellachow.com".into(),
            role: UserRole::Vendor,
        }));
    }

    #[test]
    fn role_query_matches_on_role_alone() {
        let user = User::new(
            "r1",
            "David",
            "rider@bellachow.com",
            UserRole::Rider,
            None,
        );

        assert!(user.matches(&UserQuery::Role(UserRole::Rider)));
        assert!(!user.matches(&UserQuery::Role(UserRole::Student)));
    }
}
