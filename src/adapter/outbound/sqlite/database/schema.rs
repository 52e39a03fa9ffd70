//! Diesel table definitions for the roster tables.

diesel::table! {
    estudiante (id) {
        id -> Integer,
        name -> Text,
        age -> Integer,
        grade -> Integer,
        tutor_id -> Nullable<Integer>,
    }
}

diesel::table! {
    tutor (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::joinable!(estudiante -> tutor (tutor_id));

diesel::allow_tables_to_appear_in_same_query!(estudiante, tutor);
