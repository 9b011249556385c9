//! Versioned schema for the movies table.
//!
//! v0 predates poster support; v1 adds the poster column fetched from OMDb.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};
use rusqlite::Connection;

/// V 0
const MOVIES_TABLE_V_0: Table = Table {
    name: "movies",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!(
            "title",
            &SqlType::Text,
            non_null = true,
            is_unique = true,
            collate_nocase = true
        ),
        sqlite_column!("year", &SqlType::Integer),
        sqlite_column!("rating", &SqlType::Real),
    ],
    indices: &[("idx_movies_title", "title")],
};

/// V 1
const MOVIES_TABLE_V_1: Table = Table {
    name: "movies",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!(
            "title",
            &SqlType::Text,
            non_null = true,
            is_unique = true,
            collate_nocase = true
        ),
        sqlite_column!("year", &SqlType::Integer),
        sqlite_column!("rating", &SqlType::Real),
        sqlite_column!("poster", &SqlType::Text),
    ],
    indices: &[("idx_movies_title", "title")],
};

pub const MOVIE_VERSIONED_SCHEMAS: &[VersionedSchema] = &[
    VersionedSchema {
        version: 0,
        tables: &[MOVIES_TABLE_V_0],
        migration: None,
    },
    VersionedSchema {
        version: 1,
        tables: &[MOVIES_TABLE_V_1],
        migration: Some(|conn: &Connection| {
            conn.execute("ALTER TABLE movies ADD COLUMN poster TEXT", [])?;
            Ok(())
        }),
    },
];
