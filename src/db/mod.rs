mod schema;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::models::*;

/// Handle to the place store.
///
/// Cloning is cheap and every clone shares the same connection, so one
/// `Database` is opened at startup and handed to each request.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        tracing::debug!("Opened database at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(default_path()?)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let mut conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&mut conn)
    }

    // ============================================================
    // Place operations
    // ============================================================

    /// All places with the given visited flag, oldest first.
    pub fn list_places(&self, visited: bool) -> Result<Vec<Place>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt =
            conn.prepare("SELECT id, name, visited FROM places WHERE visited = ? ORDER BY id")?;

        let places = stmt
            .query_map([visited], place_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(places)
    }

    pub fn get_place(&self, id: i64) -> Result<Option<Place>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let place = conn
            .query_row(
                "SELECT id, name, visited FROM places WHERE id = ?",
                [id],
                place_from_row,
            )
            .optional()?;
        Ok(place)
    }

    pub fn create_place(&self, input: CreatePlaceInput) -> Result<Place> {
        let conn = self.conn.lock().expect("database lock poisoned");

        conn.execute(
            "INSERT INTO places (name, visited) VALUES (?, ?)",
            (&input.name, input.visited),
        )?;

        Ok(Place {
            id: conn.last_insert_rowid(),
            name: input.name,
            visited: input.visited,
        })
    }

    /// Set the visited flag of one place. Returns `None` when no place has
    /// this id, in which case nothing was written.
    pub fn set_visited(&self, id: i64, visited: bool) -> Result<Option<Place>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let place = conn
            .query_row(
                "UPDATE places SET visited = ? WHERE id = ? RETURNING id, name, visited",
                (visited, id),
                place_from_row,
            )
            .optional()?;
        Ok(place)
    }

    // ============================================================
    // Fixtures
    // ============================================================

    /// Upsert fixture records by primary key in a single transaction.
    ///
    /// A record for any model other than a place aborts the whole load.
    pub fn load_fixture(&self, records: &[FixtureRecord]) -> Result<usize> {
        let mut conn = self.conn.lock().expect("database lock poisoned");
        let tx = conn.transaction()?;

        for record in records {
            if !record.is_place() {
                anyhow::bail!(
                    "Fixture record {} has unsupported model '{}'",
                    record.pk,
                    record.model
                );
            }

            tx.execute(
                "INSERT INTO places (id, name, visited) VALUES (?, ?, ?)
                 ON CONFLICT(id) DO UPDATE SET name = excluded.name, visited = excluded.visited",
                (record.pk, &record.fields.name, record.fields.visited),
            )?;
        }

        tx.commit()?;
        Ok(records.len())
    }

    pub fn load_fixture_json(&self, json: &str) -> Result<usize> {
        let records: Vec<FixtureRecord> =
            serde_json::from_str(json).context("Failed to parse fixture JSON")?;
        self.load_fixture(&records)
    }

    pub fn load_fixture_file(&self, path: &Path) -> Result<usize> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        let count = self
            .load_fixture_json(&json)
            .with_context(|| format!("Failed to load fixture {}", path.display()))?;
        tracing::info!("Loaded {} place(s) from {}", count, path.display());
        Ok(count)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

/// Location of the database when none is configured.
pub fn default_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "travel-wishlist")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("wishlist.db"))
}

fn place_from_row(row: &Row<'_>) -> rusqlite::Result<Place> {
    Ok(Place {
        id: row.get(0)?,
        name: row.get(1)?,
        visited: row.get(2)?,
    })
}
