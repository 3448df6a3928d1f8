//! Diesel table definitions. Must match `migrations/` exactly.

diesel::table! {
    /// Employee records. `updated_at` is maintained by a trigger.
    employees (id) {
        id -> Int8,
        name -> Varchar,
        age -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
