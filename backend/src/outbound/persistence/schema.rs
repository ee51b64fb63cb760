//! Diesel table definitions. Keep in step with `backend/migrations`.

diesel::table! {
    /// Registered accounts.
    users (id) {
        id -> Uuid,
        username -> Text,
        /// Argon2 PHC string.
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Book reviews, each owned by exactly one user.
    books (id) {
        id -> Uuid,
        owner_id -> Uuid,
        title -> Text,
        author -> Text,
        review -> Text,
        /// Monotonic insertion counter used for display order.
        position -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(books -> users (owner_id));
diesel::allow_tables_to_appear_in_same_query!(books, users);
