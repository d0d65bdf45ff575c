//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the DDL applied by
//! [`super::bootstrap::ensure_schema`].

diesel::table! {
    /// User records.
    ///
    /// `id` is a `SERIAL` primary key assigned by the database and never
    /// reused.
    users (id) {
        id -> Int4,
        name -> Text,
    }
}
