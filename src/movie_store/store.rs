//! SQLite-backed movie store.

use super::models::{DeleteOutcome, InsertOutcome, Movie, UpdateOutcome};
use super::schema::MOVIE_VERSIONED_SCHEMAS;
use super::trait_def::MovieStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone, Debug)]
pub struct SqliteMovieStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteMovieStore {
    pub fn new<T: AsRef<Path>>(db_path: T) -> Result<Self> {
        let conn = if db_path.as_ref().exists() {
            Connection::open_with_flags(
                &db_path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                    | rusqlite::OpenFlags::SQLITE_OPEN_URI
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .with_context(|| format!("Failed to open catalog db {:?}", db_path.as_ref()))?
        } else {
            let conn = Connection::open(&db_path)
                .with_context(|| format!("Failed to create catalog db {:?}", db_path.as_ref()))?;
            MOVIE_VERSIONED_SCHEMAS.last().unwrap().create(&conn)?;
            conn
        };

        let store = Self::from_connection(conn)?;

        let count = store.count()?;
        info!("Opened movie catalog: {} movies", count);

        Ok(store)
    }

    /// Validates the schema at the stored version and applies any pending
    /// migrations. Shared by the file-backed constructor and tests.
    fn from_connection(conn: Connection) -> Result<Self> {
        let db_version = conn
            .query_row("PRAGMA user_version;", [], |row| row.get::<usize, i64>(0))
            .context("Failed to read database version")?
            - BASE_DB_VERSION as i64;

        if db_version < 0 {
            bail!(
                "Database version {} is too old, does not contain base db version {}",
                db_version,
                BASE_DB_VERSION
            );
        }
        let version = db_version as usize;

        if version >= MOVIE_VERSIONED_SCHEMAS.len() {
            bail!("Database version {} is too new", version);
        }
        MOVIE_VERSIONED_SCHEMAS
            .get(version)
            .context("Failed to get schema")?
            .validate(&conn)?;

        Self::migrate_if_needed(&conn, version)?;

        Ok(SqliteMovieStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn migrate_if_needed(conn: &Connection, version: usize) -> Result<()> {
        let mut latest_from = version;
        for schema in MOVIE_VERSIONED_SCHEMAS.iter().skip(version + 1) {
            if let Some(migration_fn) = schema.migration {
                info!(
                    "Migrating catalog db from version {} to {}",
                    latest_from, schema.version
                );
                migration_fn(conn)?;
                latest_from = schema.version;
            }
        }
        conn.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + latest_from),
            [],
        )?;

        Ok(())
    }

    fn parse_movie_row(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        let poster: Option<String> = row.get(3)?;
        Ok(Movie {
            title: row.get(0)?,
            year: row.get(1)?,
            rating: row.get(2)?,
            poster: poster.filter(|p| !p.is_empty()),
        })
    }
}

impl MovieStore for SqliteMovieStore {
    fn list(&self) -> Result<Vec<Movie>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare_cached("SELECT title, year, rating, poster FROM movies ORDER BY id")?;
        let movies = stmt
            .query_map([], Self::parse_movie_row)?
            .collect::<Result<Vec<Movie>, _>>()?;
        Ok(movies)
    }

    fn get(&self, title: &str) -> Result<Option<Movie>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare_cached("SELECT title, year, rating, poster FROM movies WHERE title = ?1")?;
        match stmt.query_row(params![title], Self::parse_movie_row) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to look up '{}'", title)),
        }
    }

    fn insert(&self, movie: &Movie) -> Result<InsertOutcome> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        // Title comparison is NOCASE at the storage layer, so this also
        // catches duplicates that differ only in casing.
        let existing: Option<String> = match tx.query_row(
            "SELECT title FROM movies WHERE title = ?1",
            params![movie.title],
            |row| row.get(0),
        ) {
            Ok(title) => Some(title),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(e.into()),
        };
        if let Some(stored_title) = existing {
            return Ok(InsertOutcome::AlreadyExists(stored_title));
        }

        tx.execute(
            "INSERT INTO movies (title, year, rating, poster) VALUES (?1, ?2, ?3, ?4)",
            params![movie.title, movie.year, movie.rating, movie.poster],
        )
        .with_context(|| format!("Failed to insert '{}'", movie.title))?;
        tx.commit()?;

        Ok(InsertOutcome::Inserted)
    }

    fn delete(&self, title: &str) -> Result<DeleteOutcome> {
        let conn = self.conn.lock().unwrap();
        let removed = conn
            .execute("DELETE FROM movies WHERE title = ?1", params![title])
            .with_context(|| format!("Failed to delete '{}'", title))?;
        if removed > 0 {
            Ok(DeleteOutcome::Deleted(removed))
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }

    fn update_rating(&self, title: &str, rating: f64) -> Result<UpdateOutcome> {
        let conn = self.conn.lock().unwrap();
        let updated = conn
            .execute(
                "UPDATE movies SET rating = ?1 WHERE title = ?2",
                params![rating, title],
            )
            .with_context(|| format!("Failed to update rating of '{}'", title))?;
        if updated > 0 {
            Ok(UpdateOutcome::Updated)
        } else {
            Ok(UpdateOutcome::NotFound)
        }
    }

    fn update_poster(&self, title: &str, poster: &str) -> Result<UpdateOutcome> {
        let conn = self.conn.lock().unwrap();
        let updated = conn
            .execute(
                "UPDATE movies SET poster = ?1 WHERE title = ?2",
                params![poster, title],
            )
            .with_context(|| format!("Failed to update poster of '{}'", title))?;
        if updated > 0 {
            Ok(UpdateOutcome::Updated)
        } else {
            Ok(UpdateOutcome::NotFound)
        }
    }

    fn count(&self) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
