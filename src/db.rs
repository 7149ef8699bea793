// Pokedex - Favorites Store
// One SQLite table; uniqueness lives in the schema, not application logic

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::creature::display_name;
use crate::error::PokedexError;

/// One stored favorite: the normalized name plus its display variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub raw: String,
    pub display: String,
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // Enable WAL mode for crash recovery
    conn.pragma_update(None, "journal_mode", "WAL")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    Ok(())
}

/// Trim and lower-case a submitted name; blank input is an error
pub fn normalize_name(raw: &str) -> Result<String, PokedexError> {
    let name = raw.trim().to_lowercase();

    if name.is_empty() {
        return Err(PokedexError::EmptyName);
    }

    Ok(name)
}

/// Insert a favorite. Returns `true` when a row was added, `false` when the
/// name was already stored; the duplicate case is a successful no-op.
pub fn add_favorite(conn: &Connection, raw: &str) -> Result<bool> {
    let name = normalize_name(raw)?;

    let result = conn.execute("INSERT INTO favorites (name) VALUES (?1)", params![name]);

    match result {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a favorite. Removing a name that was never stored is a no-op.
pub fn remove_favorite(conn: &Connection, raw: &str) -> Result<bool> {
    let name = normalize_name(raw)?;

    let deleted = conn.execute("DELETE FROM favorites WHERE name = ?1", params![name])?;

    Ok(deleted > 0)
}

/// All favorites in lexicographic order, paired with display formatting
pub fn list_favorites(conn: &Connection) -> Result<Vec<FavoriteEntry>> {
    let mut stmt = conn.prepare("SELECT name FROM favorites ORDER BY name ASC")?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<String>, _>>()?;

    Ok(names
        .into_iter()
        .map(|raw| FavoriteEntry {
            display: display_name(&raw),
            raw,
        })
        .collect())
}

/// Membership test used to render the "already favorited" state
pub fn is_favorite(conn: &Connection, raw: &str) -> Result<bool> {
    let name = match normalize_name(raw) {
        Ok(name) => name,
        Err(_) => return Ok(false),
    };

    let found: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM favorites WHERE name = ?1)",
        params![name],
        |row| row.get(0),
    )?;

    Ok(found != 0)
}

pub fn count_favorites(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM favorites", [], |row| row.get(0))?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        setup_database(&conn).unwrap();
        conn
    }

    #[test]
    fn test_add_then_list() {
        let conn = test_conn();

        assert!(add_favorite(&conn, "Pikachu").unwrap());

        let entries = list_favorites(&conn).unwrap();
        assert_eq!(
            entries,
            vec![FavoriteEntry {
                raw: "pikachu".to_string(),
                display: "Pikachu".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let conn = test_conn();

        assert!(add_favorite(&conn, "Pikachu").unwrap());
        assert!(!add_favorite(&conn, "pikachu").unwrap());
        assert!(!add_favorite(&conn, "  PIKACHU  ").unwrap());

        assert_eq!(count_favorites(&conn).unwrap(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let conn = test_conn();

        let err = add_favorite(&conn, "   ").unwrap_err();
        assert_eq!(
            err.downcast::<PokedexError>().unwrap(),
            PokedexError::EmptyName
        );
        assert_eq!(count_favorites(&conn).unwrap(), 0);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let conn = test_conn();

        assert!(!remove_favorite(&conn, "missingno").unwrap());
    }

    #[test]
    fn test_remove_deletes_row() {
        let conn = test_conn();

        add_favorite(&conn, "eevee").unwrap();
        assert!(remove_favorite(&conn, "Eevee").unwrap());
        assert_eq!(count_favorites(&conn).unwrap(), 0);
    }

    #[test]
    fn test_listing_is_lexicographic() {
        let conn = test_conn();

        add_favorite(&conn, "Squirtle").unwrap();
        add_favorite(&conn, "Bulbasaur").unwrap();
        add_favorite(&conn, "Charmander").unwrap();

        let raw: Vec<String> = list_favorites(&conn)
            .unwrap()
            .into_iter()
            .map(|entry| entry.raw)
            .collect();

        assert_eq!(raw, vec!["bulbasaur", "charmander", "squirtle"]);
    }

    #[test]
    fn test_membership_predicate() {
        let conn = test_conn();

        add_favorite(&conn, "mr-mime").unwrap();

        assert!(is_favorite(&conn, "MR-MIME").unwrap());
        assert!(!is_favorite(&conn, "ditto").unwrap());
        assert!(!is_favorite(&conn, "").unwrap());
    }

    #[test]
    fn test_setup_is_idempotent() {
        let conn = test_conn();

        add_favorite(&conn, "pikachu").unwrap();
        setup_database(&conn).unwrap();

        assert_eq!(count_favorites(&conn).unwrap(), 1);
    }
}
