//! Diesel table definitions.
//!
//! Kept in step with `CREATE_USERS_TABLE`, which creates the same table at
//! runtime.

diesel::table! {
    /// Directory accounts. `id` is a `SERIAL` primary key.
    users (id) {
        /// Directory-issued identifier.
        id -> Int4,
        /// Unique login name.
        username -> Varchar,
    }
}
