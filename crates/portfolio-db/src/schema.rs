//! Schema runner
//!
//! Applies the fixed DDL in dependency order. Every statement is
//! `IF NOT EXISTS`, so running it against an existing database is a no-op.

use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

const STATEMENTS: &[(&str, &str)] = &[
    (
        "skill_categories",
        r"
        CREATE TABLE IF NOT EXISTS skill_categories (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT    NOT NULL UNIQUE,
            deleted     INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT    NOT NULL,
            updated_at  TEXT    NOT NULL,
            deleted_at  TEXT
        )
        ",
    ),
    (
        "skills",
        r"
        CREATE TABLE IF NOT EXISTS skills (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT    NOT NULL,
            category_id  INTEGER NOT NULL REFERENCES skill_categories (id),
            description  TEXT    NOT NULL DEFAULT '',
            icon_url     TEXT    NOT NULL DEFAULT '',
            proficiency  INTEGER NOT NULL CHECK (proficiency BETWEEN 0 AND 100),
            deleted      INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT    NOT NULL,
            updated_at   TEXT    NOT NULL,
            deleted_at   TEXT
        )
        ",
    ),
    (
        "idx_skills_category",
        "CREATE INDEX IF NOT EXISTS idx_skills_category ON skills (category_id)",
    ),
    (
        "projects",
        r"
        CREATE TABLE IF NOT EXISTS projects (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            title        TEXT    NOT NULL,
            description  TEXT    NOT NULL DEFAULT '',
            long_desc    TEXT    NOT NULL DEFAULT '',
            image_url    TEXT    NOT NULL DEFAULT '',
            repo_url     TEXT    NOT NULL DEFAULT '',
            live_url     TEXT    NOT NULL DEFAULT '',
            deleted      INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT    NOT NULL,
            updated_at   TEXT    NOT NULL,
            deleted_at   TEXT
        )
        ",
    ),
    (
        "skill_uses",
        r"
        CREATE TABLE IF NOT EXISTS skill_uses (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            skill_id    INTEGER NOT NULL REFERENCES skills (id) ON DELETE CASCADE,
            project_id  INTEGER NOT NULL REFERENCES projects (id) ON DELETE CASCADE,
            UNIQUE (skill_id, project_id)
        )
        ",
    ),
    (
        "idx_skill_uses_project",
        "CREATE INDEX IF NOT EXISTS idx_skill_uses_project ON skill_uses (project_id)",
    ),
    (
        "experiences",
        r"
        CREATE TABLE IF NOT EXISTS experiences (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            title        TEXT    NOT NULL,
            company      TEXT    NOT NULL,
            start_date   TEXT    NOT NULL,
            end_date     TEXT    NOT NULL DEFAULT '',
            description  TEXT    NOT NULL DEFAULT '',
            deleted      INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT    NOT NULL,
            updated_at   TEXT    NOT NULL,
            deleted_at   TEXT
        )
        ",
    ),
    (
        "education",
        r"
        CREATE TABLE IF NOT EXISTS education (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            degree       TEXT    NOT NULL,
            college      TEXT    NOT NULL,
            gpa          REAL    NOT NULL DEFAULT 0,
            in_progress  INTEGER NOT NULL DEFAULT 0
        )
        ",
    ),
    (
        "blog_posts",
        r"
        CREATE TABLE IF NOT EXISTS blog_posts (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT    NOT NULL,
            slug        TEXT    NOT NULL UNIQUE,
            excerpt     TEXT    NOT NULL DEFAULT '',
            content     TEXT    NOT NULL DEFAULT '',
            tags        TEXT    NOT NULL DEFAULT '',
            published   INTEGER NOT NULL DEFAULT 0,
            deleted     INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT    NOT NULL,
            updated_at  TEXT    NOT NULL,
            deleted_at  TEXT
        )
        ",
    ),
    (
        "sessions",
        r"
        CREATE TABLE IF NOT EXISTS sessions (
            token       TEXT PRIMARY KEY,
            expires_at  TEXT NOT NULL
        )
        ",
    ),
    (
        "idx_sessions_expires",
        "CREATE INDEX IF NOT EXISTS idx_sessions_expires ON sessions (expires_at)",
    ),
];

/// Create every table and index that does not exist yet
///
/// Stops at the first failing statement.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for &(name, ddl) in STATEMENTS {
        debug!(object = name, "Applying schema");
        sqlx::query(ddl).execute(pool).await?;
    }
    info!(objects = STATEMENTS.len(), "Schema is up to date");
    Ok(())
}
