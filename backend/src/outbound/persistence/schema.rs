//! Diesel table definitions for the order and user databases.
//!
//! The schema is provisioned outside this crate. These definitions must match
//! it; `diesel print-schema` against a live database regenerates them.

diesel::table! {
    /// Orders owned by the order service.
    orders (id) {
        /// Storage-assigned identity.
        id -> Int8,
        /// Identity of the user in the user service; not a foreign key.
        user_id -> Int8,
        amount -> Float8,
        status -> Varchar,
    }
}

diesel::table! {
    /// Users owned by the user service.
    users (id) {
        /// Storage-assigned identity.
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
    }
}
