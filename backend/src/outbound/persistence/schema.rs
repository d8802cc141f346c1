//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the migrations exactly; `diesel print-schema` can
//! regenerate them from a live database after a migration change.

diesel::table! {
    customers (id) {
        id -> Uuid,
        name -> Varchar,
        contact -> Varchar,
        energy_needs -> Float8,
        customer_type -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    quotes (id) {
        id -> Uuid,
        customer_id -> Uuid,
        system_size -> Float8,
        cost -> Float8,
        subsidy_applied -> Float8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    subsidies (id) {
        id -> Uuid,
        name -> Varchar,
        eligibility_criteria -> Text,
        amount -> Float8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    projects (id) {
        id -> Uuid,
        customer_id -> Uuid,
        status -> Varchar,
        milestones -> Array<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    inventory_items (id) {
        id -> Uuid,
        item_name -> Varchar,
        stock_level -> Int4,
        threshold -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    users (id) {
        id -> Uuid,
        email -> Varchar,
        password_hash -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(quotes -> customers (customer_id));
diesel::joinable!(projects -> customers (customer_id));

diesel::allow_tables_to_appear_in_same_query!(
    customers,
    quotes,
    subsidies,
    projects,
    inventory_items,
    users,
);
