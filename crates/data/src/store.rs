//! Local key-value persistence.
//!
//! A small embedded store standing in for the dashboard's browser storage:
//! one `entries` table of string keys to string values, with typed wrappers
//! for the two keys the dashboard actually persists (the saved deposit and
//! the last selected pool).

use crate::error::StoreError;
use dlmm_scout_domain::PoolInfo;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Opening retries before the store is declared unavailable.
const MAX_OPEN_ATTEMPTS: u32 = 3;

const KEY_DEPOSIT: &str = "user_tvl";
const KEY_SELECTED_POOL: &str = "selected_pool";

/// Embedded key-value store.
#[derive(Debug)]
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Opens (and migrates) the store at `path`.
    ///
    /// A busy or locked database file is retried a bounded number of
    /// times; after [`MAX_OPEN_ATTEMPTS`] failures the store is reported as
    /// unavailable instead of retrying forever.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let mut attempt = 0;
        loop {
            attempt += 1;
            match Self::try_open(path) {
                Ok(store) => return Ok(store),
                Err(err) if is_busy(&err) => {
                    if attempt >= MAX_OPEN_ATTEMPTS {
                        return Err(StoreError::Unavailable { attempts: attempt });
                    }
                    warn!(attempt, error = %err, "store busy, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::migrate(&conn)?;
        Ok(Self { conn })
    }

    fn try_open(path: &Path) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_millis(250))?;
        Self::migrate(&conn)?;
        Ok(Self { conn })
    }

    fn migrate(conn: &Connection) -> Result<(), rusqlite::Error> {
        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version < 1 {
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS entries (k TEXT PRIMARY KEY, v TEXT NOT NULL);
                 PRAGMA user_version = 1;",
            )?;
        }
        Ok(())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT v FROM entries WHERE k = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO entries (k, v) VALUES (?1, ?2)
             ON CONFLICT(k) DO UPDATE SET v = excluded.v",
            params![key, value],
        )?;
        Ok(())
    }

    /// Deletes `key`, reporting whether it existed.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM entries WHERE k = ?1", params![key])?;
        Ok(affected > 0)
    }

    /// Lists every key, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT k FROM entries ORDER BY k")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    /// Returns every entry as `(key, value)` pairs, sorted by key.
    pub fn get_all(&self) -> Result<Vec<(String, String)>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT k, v FROM entries ORDER BY k")?;
        let entries = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<(String, String)>, _>>()?;
        Ok(entries)
    }

    /// Removes every entry.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM entries", [])?;
        Ok(())
    }

    /// Persists the user's deposit amount.
    pub fn save_deposit(&self, amount: Decimal) -> Result<(), StoreError> {
        self.set(KEY_DEPOSIT, &amount.to_string())
    }

    /// Loads the persisted deposit amount. A value that no longer parses
    /// is treated as absent.
    pub fn load_deposit(&self) -> Result<Option<Decimal>, StoreError> {
        Ok(self
            .get(KEY_DEPOSIT)?
            .and_then(|raw| Decimal::from_str(&raw).ok()))
    }

    /// Persists the last selected pool snapshot.
    pub fn save_selected_pool(&self, pool: &PoolInfo) -> Result<(), StoreError> {
        let json = serde_json::to_string(pool).map_err(|source| StoreError::Codec {
            key: KEY_SELECTED_POOL.to_string(),
            source,
        })?;
        self.set(KEY_SELECTED_POOL, &json)
    }

    /// Loads the last selected pool snapshot, if one was saved.
    pub fn load_selected_pool(&self) -> Result<Option<PoolInfo>, StoreError> {
        match self.get(KEY_SELECTED_POOL)? {
            Some(json) => {
                let pool = serde_json::from_str(&json).map_err(|source| StoreError::Codec {
                    key: KEY_SELECTED_POOL.to_string(),
                    source,
                })?;
                Ok(Some(pool))
            }
            None => Ok(None),
        }
    }
}

fn is_busy(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_pool() -> PoolInfo {
        PoolInfo {
            address: "addr".to_string(),
            name: "SOL-USDC".to_string(),
            mint_x: "x".to_string(),
            mint_y: "y".to_string(),
            bin_step: 10,
            base_fee_percentage: dec!(0.25),
            liquidity: dec!(1000),
            trade_volume_24h: dec!(500),
            fees_24h: dec!(10),
            cumulative_trade_volume: Decimal::ZERO,
            cumulative_fee_volume: Decimal::ZERO,
        }
    }

    #[test]
    fn test_set_get_roundtrip_and_overwrite() {
        let store = LocalStore::open_in_memory().unwrap();

        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "one").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("one".to_string()));
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("two".to_string()));
    }

    #[test]
    fn test_delete_reports_existence() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set("k", "v").unwrap();

        assert!(store.delete("k").unwrap());
        assert!(!store.delete("k").unwrap());
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_keys_and_get_all_are_sorted() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "1").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
        assert_eq!(
            store.get_all().unwrap(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.clear().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_deposit_roundtrip() {
        let store = LocalStore::open_in_memory().unwrap();

        assert_eq!(store.load_deposit().unwrap(), None);
        store.save_deposit(dec!(1234.56)).unwrap();
        assert_eq!(store.load_deposit().unwrap(), Some(dec!(1234.56)));
    }

    #[test]
    fn test_garbage_deposit_reads_as_absent() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set(KEY_DEPOSIT, "not a number").unwrap();

        assert_eq!(store.load_deposit().unwrap(), None);
    }

    #[test]
    fn test_selected_pool_roundtrip() {
        let store = LocalStore::open_in_memory().unwrap();

        assert!(store.load_selected_pool().unwrap().is_none());
        store.save_selected_pool(&sample_pool()).unwrap();
        let loaded = store.load_selected_pool().unwrap().unwrap();
        assert_eq!(loaded.address, "addr");
        assert_eq!(loaded.liquidity, dec!(1000));
    }

    #[test]
    fn test_locked_database_becomes_unavailable_after_bounded_retries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scout.db");

        // A second connection holding an exclusive lock keeps every open
        // attempt busy until the retry budget runs out.
        let blocker = Connection::open(&path).unwrap();
        blocker
            .execute_batch("PRAGMA locking_mode = EXCLUSIVE; BEGIN EXCLUSIVE;")
            .unwrap();

        let err = LocalStore::open(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Unavailable {
                attempts: MAX_OPEN_ATTEMPTS
            }
        ));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scout.db");

        {
            let store = LocalStore::open(&path).unwrap();
            store.save_deposit(dec!(500)).unwrap();
        }
        let store = LocalStore::open(&path).unwrap();
        assert_eq!(store.load_deposit().unwrap(), Some(dec!(500)));
    }
}
