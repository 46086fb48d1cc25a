//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Registered accounts keyed by email.
    users (email) {
        /// Login email; unique by construction.
        email -> Text,
        /// bcrypt hash including its salt and cost.
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Blog posts. `comment_ids` preserves link order.
    posts (id) {
        id -> Uuid,
        title -> Text,
        content -> Text,
        image_url -> Text,
        /// Free text; only the fixed labels form list buckets.
        category -> Text,
        comment_ids -> Array<Uuid>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Standalone comments referenced from `posts.comment_ids`.
    comments (id) {
        id -> Uuid,
        text -> Text,
        author -> Text,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(comments, posts, users);
