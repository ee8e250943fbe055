use rusqlite::{params, Connection, OptionalExtension};

use crate::error::DevotrackError;

/// String-keyed storage for serialized values.
///
/// Implementations report failures; deciding whether a failure matters is
/// left to the caller.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DevotrackError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), DevotrackError>;
    fn remove_items(&self, keys: &[&str]) -> Result<(), DevotrackError>;
}

pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>, DevotrackError> {
    let value = conn
        .query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set_value(conn: &Connection, key: &str, value: &str) -> Result<(), DevotrackError> {
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value],
    )?;
    Ok(())
}

/// Remove several keys atomically. Missing keys are ignored.
pub fn remove_values(conn: &Connection, keys: &[&str]) -> Result<(), DevotrackError> {
    conn.execute_batch("BEGIN IMMEDIATE")?;
    let result = (|| -> Result<(), DevotrackError> {
        for key in keys {
            conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => conn.execute_batch("COMMIT")?,
        Err(e) => {
            let _ = conn.execute_batch("ROLLBACK");
            return Err(e);
        }
    }
    Ok(())
}

impl KeyValueStore for Connection {
    fn get_item(&self, key: &str) -> Result<Option<String>, DevotrackError> {
        get_value(self, key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), DevotrackError> {
        set_value(self, key, value)
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), DevotrackError> {
        remove_values(self, keys)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, DevotrackError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), DevotrackError> {
        (**self).set_item(key, value)
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), DevotrackError> {
        (**self).remove_items(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        migrations::run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_key_is_none() {
        let conn = memory_db();
        assert_eq!(conn.get_item("user_progress").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let conn = memory_db();
        conn.set_item("last_active", "2025-01-01T00:00:00Z").unwrap();
        conn.set_item("last_active", "2025-01-02T00:00:00Z").unwrap();
        assert_eq!(
            conn.get_item("last_active").unwrap().as_deref(),
            Some("2025-01-02T00:00:00Z")
        );
    }

    #[test]
    fn test_remove_items_ignores_missing() {
        let conn = memory_db();
        conn.set_item("a", "1").unwrap();
        conn.set_item("b", "2").unwrap();
        conn.remove_items(&["a", "never-written"]).unwrap();
        assert_eq!(conn.get_item("a").unwrap(), None);
        assert_eq!(conn.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_table_surfaces_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.get_item("user_progress").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::StorageError);
    }
}
