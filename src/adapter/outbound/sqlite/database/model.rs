//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{estudiante, tutor};

/// Database row for a tutor (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = tutor)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TutorRow {
    pub id: i32,
    pub name: String,
}

/// Database row for a tutor (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tutor)]
pub struct NewTutorRow<'a> {
    pub name: &'a str,
}

/// Database row for a student (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = estudiante)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub grade: i32,
    pub tutor_id: Option<i32>,
}

/// Database row for a student (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = estudiante)]
pub struct NewStudentRow<'a> {
    pub name: &'a str,
    pub age: i32,
    pub grade: i32,
    pub tutor_id: Option<i32>,
}
