//! User data model.
//!
//! A user is an integer identifier assigned by the store plus a mutable name.
//! The identifier never changes once assigned; only the name is updated.

use std::fmt;

/// Validation errors returned when constructing user components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The name was empty or contained only whitespace.
    #[error("name must not be empty")]
    EmptyName,
}

/// Store-assigned user identifier.
///
/// Any 32-bit integer is accepted here; lookups for identifiers the store
/// never issued simply find nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name stored on a user record.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace. The original text, including any
///   surrounding whitespace, is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    ///
    /// # Examples
    /// ```
    /// use users_backend::domain::{UserName, UserValidationError};
    ///
    /// assert!(UserName::new("Alice").is_ok());
    /// assert_eq!(UserName::new("  "), Err(UserValidationError::EmptyName));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl UserName {
    /// Borrow the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    /// Build a [`User`] from validated components.
    #[must_use]
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Fallible constructor for raw values read back from a store.
    pub fn try_from_parts(id: i32, name: impl Into<String>) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id), UserName::new(name)?))
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Current name.
    #[must_use]
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Return a copy carrying `name` and the same identifier.
    #[must_use]
    pub fn renamed(&self, name: UserName) -> Self {
        Self::new(self.id, name)
    }
}
