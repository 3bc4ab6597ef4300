//! Schema migrations.
//!
//! The schema version lives in SQLite's `user_version` pragma: migration `n`
//! in [`MIGRATIONS`] brings the database to version `n + 1`. Each pending
//! migration and its version bump commit together.

use anyhow::{Context, Result};
use rusqlite::Connection;

const MIGRATIONS: &[(&str, &str)] = &[("initial", include_str!("migrations/001_initial.sql"))];

/// The version a fully migrated database reports.
pub fn latest_version() -> u32 {
    MIGRATIONS.len() as u32
}

pub fn current_version(conn: &Connection) -> Result<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .context("Failed to read schema version")
}

pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    let current = current_version(conn)?;
    if current > latest_version() {
        anyhow::bail!(
            "Database schema version {} is newer than this build supports ({})",
            current,
            latest_version()
        );
    }

    for (index, (name, sql)) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let version = index as u32 + 1;
        tracing::info!("Migrating schema to version {} ({})", version, name);

        let tx = conn.transaction()?;
        tx.execute_batch(sql)
            .with_context(|| format!("Failed to apply migration {} ({})", version, name))?;
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_reaches_latest_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(current_version(&conn).unwrap(), 0);

        run_migrations(&mut conn).unwrap();

        assert_eq!(current_version(&conn).unwrap(), latest_version());
        let count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='places'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn running_twice_is_a_no_op() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        conn.execute("INSERT INTO places (name) VALUES ('Lisbon')", [])
            .unwrap();

        run_migrations(&mut conn).unwrap();

        assert_eq!(current_version(&conn).unwrap(), latest_version());
        let count: i32 = conn
            .query_row("SELECT COUNT(*) FROM places", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn refuses_a_newer_schema() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", latest_version() + 1)
            .unwrap();

        assert!(run_migrations(&mut conn).is_err());
    }

    #[test]
    fn visited_column_rejects_other_values() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();

        let result = conn.execute("INSERT INTO places (name, visited) VALUES ('Oslo', 2)", []);
        assert!(result.is_err());
    }
}
