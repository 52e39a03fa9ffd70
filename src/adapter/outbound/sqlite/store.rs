//! SQLite roster store implementation.
//!
//! Provides persistent storage for tutors and students using SQLite and
//! Diesel ORM. Each operation checks a connection out of the pool for its
//! own duration.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::{self, DbPool};
use crate::adapter::outbound::sqlite::database::model::{
    NewStudentRow, NewTutorRow, StudentRow, TutorRow,
};
use crate::adapter::outbound::sqlite::database::schema::{estudiante, tutor};
use crate::domain::{NewStudent, Student, StudentId, Tutor, TutorId};
use crate::error::{Error, Result, RosterError};
use crate::infrastructure::config::database::DatabaseConfig;
use crate::port::outbound::store::RosterStore;

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite-backed roster store.
///
/// Implements the [`RosterStore`] trait over a shared connection pool.
pub struct SqliteRosterStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteRosterStore {
    /// Create a new SQLite roster store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the configured database, creating the tables if they are missing.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or the DDL fails.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let pool = connection::create_pool(config)?;
        connection::ensure_schema(&pool)?;
        Ok(Self::new(pool))
    }

    /// A private in-memory database with empty tables.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or the DDL fails.
    pub fn in_memory() -> Result<Self> {
        Self::open(&DatabaseConfig::in_memory())
    }

    fn conn(&self) -> Result<Conn> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    /// First tutor with exactly this name, in id order.
    fn find_tutor(conn: &mut SqliteConnection, name: &str) -> QueryResult<Option<TutorRow>> {
        tutor::table
            .filter(tutor::name.eq(name))
            .order(tutor::id.asc())
            .select(TutorRow::as_select())
            .first(conn)
            .optional()
    }

    fn tutor_from_row(row: TutorRow) -> Tutor {
        Tutor {
            id: TutorId::new(row.id),
            name: row.name,
        }
    }

    fn student_from_row(row: StudentRow, tutor: Option<String>) -> Student {
        Student {
            id: StudentId::new(row.id),
            name: row.name,
            age: row.age,
            grade: row.grade,
            tutor,
        }
    }
}

impl RosterStore for SqliteRosterStore {
    fn reset_schema(&self) -> Result<()> {
        connection::reset_schema(&self.pool)?;
        debug!("roster schema reset");
        Ok(())
    }

    fn insert_tutor(&self, name: &str) -> Result<Tutor> {
        let mut conn = self.conn()?;

        let row: TutorRow = diesel::insert_into(tutor::table)
            .values(&NewTutorRow { name })
            .returning(TutorRow::as_returning())
            .get_result(&mut conn)?;

        debug!(id = row.id, name = %row.name, "tutor inserted");
        Ok(Self::tutor_from_row(row))
    }

    fn insert_student(&self, student: &NewStudent) -> Result<Student> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        let tutor = Self::find_tutor(conn, &student.tutor)?.ok_or_else(|| {
            RosterError::TutorNotFound {
                name: student.tutor.clone(),
            }
        })?;

        let row: StudentRow = diesel::insert_into(estudiante::table)
            .values(&NewStudentRow {
                name: &student.name,
                age: student.age,
                grade: student.grade,
                tutor_id: Some(tutor.id),
            })
            .returning(StudentRow::as_returning())
            .get_result(conn)?;

        debug!(id = row.id, name = %row.name, tutor = %tutor.name, "student inserted");
        Ok(Self::student_from_row(row, Some(tutor.name)))
    }

    fn tutors(&self) -> Result<Vec<Tutor>> {
        let mut conn = self.conn()?;

        let rows: Vec<TutorRow> = tutor::table
            .order(tutor::id.asc())
            .select(TutorRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Self::tutor_from_row).collect())
    }

    fn students(&self) -> Result<Vec<Student>> {
        let mut conn = self.conn()?;

        let rows: Vec<(StudentRow, Option<String>)> = estudiante::table
            .left_join(tutor::table)
            .order(estudiante::id.asc())
            .select((StudentRow::as_select(), tutor::name.nullable()))
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(row, tutor)| Self::student_from_row(row, tutor))
            .collect())
    }

    fn students_by_tutor(&self, name: &str) -> Result<Vec<Student>> {
        let mut conn = self.conn()?;

        let rows: Vec<(StudentRow, String)> = estudiante::table
            .inner_join(tutor::table)
            .filter(tutor::name.eq(name))
            .order(estudiante::id.asc())
            .select((StudentRow::as_select(), tutor::name))
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(row, tutor)| Self::student_from_row(row, Some(tutor)))
            .collect())
    }

    fn reassign_tutor(&self, id: StudentId, name: &str) -> Result<Student> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, Error, _>(|conn| {
            let tutor = Self::find_tutor(conn, name)?.ok_or_else(|| RosterError::TutorNotFound {
                name: name.to_string(),
            })?;

            let row: StudentRow = estudiante::table
                .find(id.get())
                .select(StudentRow::as_select())
                .first(conn)
                .optional()?
                .ok_or(RosterError::StudentNotFound { id })?;

            diesel::update(estudiante::table.find(id.get()))
                .set(estudiante::tutor_id.eq(Some(tutor.id)))
                .execute(conn)?;

            debug!(student = %id, tutor = %tutor.name, "tutor reassigned");
            Ok(Self::student_from_row(
                StudentRow {
                    tutor_id: Some(tutor.id),
                    ..row
                },
                Some(tutor.name),
            ))
        })
    }

    fn count_by_grade(&self, grade: i32) -> Result<i64> {
        let mut conn = self.conn()?;

        let count = estudiante::table
            .filter(estudiante::grade.eq(grade))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::create_pool;

    fn setup_store() -> SqliteRosterStore {
        let pool = create_pool(&DatabaseConfig::in_memory()).unwrap();
        let store = SqliteRosterStore::new(pool);
        store.reset_schema().unwrap();
        store
    }

    fn seeded_store() -> SqliteRosterStore {
        let store = setup_store();
        store.insert_tutor("Ana").unwrap();
        store.insert_tutor("Luis").unwrap();
        store
            .insert_student(&NewStudent::new("Sol", 14, 2, "Ana"))
            .unwrap();
        store
            .insert_student(&NewStudent::new("Mia", 15, 3, "Luis"))
            .unwrap();
        store
    }

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    // -------------------------------------------------------------------------
    // Tutors
    // -------------------------------------------------------------------------

    #[test]
    fn insert_tutor_then_fetch_yields_one_row() {
        let store = setup_store();

        let tutor = store.insert_tutor("Ana").unwrap();
        let tutors = store.tutors().unwrap();

        assert_eq!(tutors, vec![tutor]);
        assert_eq!(tutors[0].name, "Ana");
    }

    #[test]
    fn insert_tutor_accepts_duplicate_names() {
        let store = setup_store();

        let first = store.insert_tutor("Ana").unwrap();
        let second = store.insert_tutor("Ana").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.tutors().unwrap().len(), 2);
    }

    // -------------------------------------------------------------------------
    // Students
    // -------------------------------------------------------------------------

    #[test]
    fn insert_student_resolves_tutor() {
        let store = setup_store();
        store.insert_tutor("Ana").unwrap();

        let student = store
            .insert_student(&NewStudent::new("Sol", 14, 2, "Ana"))
            .unwrap();

        assert_eq!(student.name, "Sol");
        assert_eq!(student.tutor.as_deref(), Some("Ana"));
    }

    #[test]
    fn insert_student_with_unknown_tutor_writes_nothing() {
        let store = setup_store();
        store.insert_tutor("Ana").unwrap();

        let err = store
            .insert_student(&NewStudent::new("Sol", 14, 2, "Carlos"))
            .unwrap_err();

        assert_eq!(
            err.as_roster(),
            Some(&RosterError::TutorNotFound {
                name: "Carlos".into()
            })
        );
        assert!(store.students().unwrap().is_empty());
    }

    #[test]
    fn insert_student_with_duplicate_tutor_uses_first_match() {
        let store = setup_store();
        let first = store.insert_tutor("Ana").unwrap();
        store.insert_tutor("Ana").unwrap();

        store
            .insert_student(&NewStudent::new("Sol", 14, 2, "Ana"))
            .unwrap();

        let mut conn = store.conn().unwrap();
        let tutor_id: Option<i32> = estudiante::table
            .select(estudiante::tutor_id)
            .first(&mut conn)
            .unwrap();
        assert_eq!(tutor_id, Some(first.id.get()));
    }

    #[test]
    fn students_returns_every_row_with_tutor_name() {
        let store = seeded_store();

        let students = store.students().unwrap();

        assert_eq!(names(&students), vec!["Sol", "Mia"]);
        assert_eq!(students[0].tutor.as_deref(), Some("Ana"));
        assert_eq!(students[1].tutor.as_deref(), Some("Luis"));
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    #[test]
    fn students_by_tutor_filters_on_exact_name() {
        let store = seeded_store();

        assert_eq!(names(&store.students_by_tutor("Ana").unwrap()), vec!["Sol"]);
        assert!(store.students_by_tutor("Carlos").unwrap().is_empty());
    }

    #[test]
    fn students_by_tutor_is_case_sensitive() {
        let store = seeded_store();

        assert!(store.students_by_tutor("ana").unwrap().is_empty());
    }

    #[test]
    fn students_by_tutor_matches_every_tutor_sharing_the_name() {
        let store = setup_store();
        store.insert_tutor("Ana").unwrap();
        store
            .insert_student(&NewStudent::new("Sol", 14, 2, "Ana"))
            .unwrap();
        let second = store.insert_tutor("Ana").unwrap();
        store
            .insert_student(&NewStudent::new("Mia", 15, 3, "Ana"))
            .unwrap();

        let found = store.students_by_tutor("Ana").unwrap();

        assert_eq!(found.len(), 2);
        assert!(second.id.get() > 1);
    }

    // -------------------------------------------------------------------------
    // Reassign
    // -------------------------------------------------------------------------

    #[test]
    fn reassign_tutor_moves_student() {
        let store = seeded_store();
        let sol = store.students_by_tutor("Ana").unwrap().remove(0);

        let updated = store.reassign_tutor(sol.id, "Luis").unwrap();

        assert_eq!(updated.tutor.as_deref(), Some("Luis"));
        assert_eq!(names(&store.students_by_tutor("Luis").unwrap()), vec!["Sol", "Mia"]);
        assert!(store.students_by_tutor("Ana").unwrap().is_empty());
    }

    #[test]
    fn reassign_tutor_with_unknown_student_changes_nothing() {
        let store = seeded_store();
        let before = store.students().unwrap();

        let err = store
            .reassign_tutor(StudentId::new(9999), "Ana")
            .unwrap_err();

        assert_eq!(
            err.as_roster(),
            Some(&RosterError::StudentNotFound {
                id: StudentId::new(9999)
            })
        );
        assert_eq!(store.students().unwrap(), before);
    }

    #[test]
    fn reassign_tutor_checks_tutor_before_student() {
        let store = seeded_store();

        let err = store
            .reassign_tutor(StudentId::new(9999), "Carlos")
            .unwrap_err();

        assert!(matches!(
            err.as_roster(),
            Some(RosterError::TutorNotFound { .. })
        ));
    }

    #[test]
    fn reassign_tutor_with_unknown_tutor_changes_nothing() {
        let store = seeded_store();
        let before = store.students().unwrap();

        let result = store.reassign_tutor(before[0].id, "Carlos");

        assert!(result.is_err());
        assert_eq!(store.students().unwrap(), before);
    }

    // -------------------------------------------------------------------------
    // Count
    // -------------------------------------------------------------------------

    #[test]
    fn count_by_grade_counts_exact_matches() {
        let store = seeded_store();

        assert_eq!(store.count_by_grade(2).unwrap(), 1);
        assert_eq!(store.count_by_grade(3).unwrap(), 1);
        assert_eq!(store.count_by_grade(9).unwrap(), 0);
    }

    // -------------------------------------------------------------------------
    // Schema
    // -------------------------------------------------------------------------

    #[test]
    fn opened_store_answers_queries_before_any_reset() {
        let store = SqliteRosterStore::in_memory().unwrap();

        assert!(store.tutors().unwrap().is_empty());
        assert!(store.students_by_tutor("Ana").unwrap().is_empty());
        assert_eq!(store.count_by_grade(2).unwrap(), 0);
    }

    #[test]
    fn open_keeps_rows_of_an_existing_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: dir.path().join("roster.db").display().to_string(),
            ..DatabaseConfig::default()
        };
        SqliteRosterStore::open(&config)
            .unwrap()
            .insert_tutor("Ana")
            .unwrap();

        let reopened = SqliteRosterStore::open(&config).unwrap();

        assert_eq!(reopened.tutors().unwrap().len(), 1);
    }

    #[test]
    fn reset_schema_clears_both_tables() {
        let store = seeded_store();

        store.reset_schema().unwrap();

        assert!(store.tutors().unwrap().is_empty());
        assert!(store.students().unwrap().is_empty());
    }

    #[test]
    fn ids_restart_after_reset() {
        let store = seeded_store();
        store.reset_schema().unwrap();

        let tutor = store.insert_tutor("Ana").unwrap();

        assert_eq!(tutor.id, TutorId::new(1));
    }
}
