//! User CRUD service implementing the driving ports.
//!
//! The service validates names, performs one repository call per successful
//! operation and translates persistence failures into domain errors. It holds
//! no per-request state, so one instance can serve every request.
//!
//! A rename carrying a blank name first confirms the target exists: a missing
//! user is reported as not found before the name is judged.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserId, UserName, UserValidationError};

/// User service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn parse_name(raw: &str) -> Result<UserName, Error> {
    UserName::new(raw).map_err(|err| match err {
        UserValidationError::EmptyName => Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "name", "code": "empty_name" })),
    })
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + 'static,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .list()
            .await
            .map_err(map_persistence_error)?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, Error> {
        let user = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %id, found = user.is_some(), "looked up user");
        Ok(user)
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + 'static,
{
    async fn create_user(&self, name: &str) -> Result<User, Error> {
        let name = parse_name(name)?;
        let user = self
            .repository
            .insert(&name)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "created user");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, name: &str) -> Result<Option<User>, Error> {
        let name = match parse_name(name) {
            Ok(name) => name,
            Err(err) => {
                let existing = self
                    .repository
                    .find_by_id(id)
                    .await
                    .map_err(map_persistence_error)?;
                if existing.is_none() {
                    debug!(user_id = %id, "update skipped, user not found");
                    return Ok(None);
                }
                return Err(err);
            }
        };
        let updated = self
            .repository
            .update_name(id, &name)
            .await
            .map_err(map_persistence_error)?;
        match &updated {
            Some(_) => info!(user_id = %id, "updated user"),
            None => debug!(user_id = %id, "update skipped, user not found"),
        }
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if deleted {
            info!(user_id = %id, "deleted user");
        } else {
            debug!(user_id = %id, "delete skipped, user not found");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    //! Service behaviour against a mocked repository.

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use rstest::rstest;

    fn user(id: i32, name: &str) -> User {
        User::try_from_parts(id, name).expect("valid user")
    }

    fn service(repository: MockUserRepository) -> UserService<MockUserRepository> {
        UserService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn list_users_returns_repository_rows() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_list()
            .times(1)
            .return_once(|| Ok(vec![user(1, "Alice"), user(2, "Bob")]));

        let users = service(repository).list_users().await.expect("list succeeds");

        assert_eq!(users, vec![user(1, "Alice"), user(2, "Bob")]);
    }

    #[tokio::test]
    async fn list_users_on_empty_store_is_empty() {
        let mut repository = MockUserRepository::new();
        repository.expect_list().return_once(|| Ok(Vec::new()));

        let users = service(repository).list_users().await.expect("list succeeds");

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn create_user_persists_validated_name() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_insert()
            .withf(|name| name.as_str() == "Alice")
            .times(1)
            .return_once(|_| Ok(user(1, "Alice")));

        let created = service(repository)
            .create_user("Alice")
            .await
            .expect("create succeeds");

        assert_eq!(created, user(1, "Alice"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn create_user_rejects_blank_names_without_writing(#[case] raw: &str) {
        let mut repository = MockUserRepository::new();
        repository.expect_insert().never();

        let err = service(repository)
            .create_user(raw)
            .await
            .expect_err("blank names are rejected");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "name must not be empty");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "name", "code": "empty_name" }))
        );
    }

    #[rstest]
    #[case(Some(user(4, "Dora")))]
    #[case(None)]
    #[tokio::test]
    async fn get_user_passes_through_lookup(#[case] stored: Option<User>) {
        let expected = stored.clone();
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId::new(4))
            .return_once(move |_| Ok(stored));

        let found = service(repository)
            .get_user(UserId::new(4))
            .await
            .expect("lookup succeeds");

        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn update_user_returns_none_for_missing_record() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_update_name()
            .withf(|id, name| *id == UserId::new(9) && name.as_str() == "Zed")
            .return_once(|_, _| Ok(None));

        let updated = service(repository)
            .update_user(UserId::new(9), "Zed")
            .await
            .expect("update call succeeds");

        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn update_user_rejects_blank_names_without_writing() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId::new(1))
            .return_once(|_| Ok(Some(user(1, "Alice"))));
        repository.expect_update_name().never();

        let err = service(repository)
            .update_user(UserId::new(1), " ")
            .await
            .expect_err("blank names are rejected");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn update_user_with_blank_name_on_missing_record_is_not_found() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId::new(999))
            .return_once(|_| Ok(None));
        repository.expect_update_name().never();

        let updated = service(repository)
            .update_user(UserId::new(999), "")
            .await
            .expect("missing record is not an error");

        assert!(updated.is_none());
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    #[tokio::test]
    async fn delete_user_reports_whether_a_row_was_removed(#[case] removed: bool) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_delete()
            .withf(|id| *id == UserId::new(2))
            .return_once(move |_| Ok(removed));

        let deleted = service(repository)
            .delete_user(UserId::new(2))
            .await
            .expect("delete call succeeds");

        assert_eq!(deleted, removed);
    }

    #[rstest]
    #[case(
        UserPersistenceError::connection("refused"),
        ErrorCode::ServiceUnavailable
    )]
    #[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn persistence_failures_map_to_domain_errors(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockUserRepository::new();
        repository.expect_list().return_once(move || Err(failure));

        let err = service(repository)
            .list_users()
            .await
            .expect_err("failures propagate");

        assert_eq!(err.code(), expected);
    }
}
