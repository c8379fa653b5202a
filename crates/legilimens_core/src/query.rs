//! Runs the fixed table queries against an extracted database image.
//!
//! The image is written to a temporary file and opened with SQLite for the
//! duration of one run. Each table is queried independently; a table whose
//! query can't be prepared or stepped is recorded as failed and the rest
//! carry on.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::PathBuf;

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tempfile::NamedTempFile;

use crate::catalog::{Table, TableSpec};
use crate::core_api::{CoreError, CoreErrorCode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Directory for the temporary database file. Defaults to the system
    /// temp dir.
    pub temp_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableResult {
    Keys(BTreeSet<String>),
    Failed(CoreError),
}

/// Per-table results of one run. A table is either collected or failed,
/// never both; a table that was never recorded counts as unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    tables: BTreeMap<Table, TableResult>,
}

impl QueryOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys<I, S>(mut self, table: Table, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record(
            table,
            TableResult::Keys(keys.into_iter().map(Into::into).collect()),
        );
        self
    }

    pub fn with_failure(mut self, table: Table, cause: impl Into<String>) -> Self {
        self.record(
            table,
            TableResult::Failed(CoreError::new(CoreErrorCode::QueryPrepareFailure, cause)),
        );
        self
    }

    pub fn record(&mut self, table: Table, result: TableResult) {
        self.tables.insert(table, result);
    }

    pub fn get(&self, table: Table) -> Option<&TableResult> {
        self.tables.get(&table)
    }

    /// Keys of a successfully queried table.
    pub fn keys(&self, table: Table) -> Option<&BTreeSet<String>> {
        match self.tables.get(&table)? {
            TableResult::Keys(keys) => Some(keys),
            TableResult::Failed(_) => None,
        }
    }

    pub fn failure(&self, table: Table) -> Option<&CoreError> {
        match self.tables.get(&table)? {
            TableResult::Failed(error) => Some(error),
            TableResult::Keys(_) => None,
        }
    }

    pub fn failed_tables(&self) -> impl Iterator<Item = Table> + '_ {
        self.tables
            .iter()
            .filter(|(_, result)| matches!(result, TableResult::Failed(_)))
            .map(|(table, _)| *table)
    }

    /// Labels of everything whose results can't be trusted, in table order.
    pub fn unreliable_types(&self) -> Vec<&'static str> {
        self.failed_tables()
            .flat_map(|table| table.spec().affected_types.iter().copied())
            .collect()
    }

    pub fn all_failed(&self) -> bool {
        !self.tables.is_empty()
            && self
                .tables
                .values()
                .all(|result| matches!(result, TableResult::Failed(_)))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// A database image materialized on disk. The connection is declared
/// first so it closes before the file is removed.
struct EphemeralStore {
    conn: Connection,
    file: NamedTempFile,
}

impl EphemeralStore {
    fn materialize(bytes: &[u8], options: &QueryOptions) -> Result<Self, CoreError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("legilimens-").suffix(".db");
        let created = match &options.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut file = created.map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("unable to create a temporary database file: {e}"),
            )
        })?;
        file.write_all(bytes)
            .and_then(|_| file.flush())
            .map_err(|e| {
                CoreError::new(
                    CoreErrorCode::Io,
                    format!("unable to write the database to a temporary file: {e}"),
                )
            })?;
        log::debug!(
            "wrote {} byte database image to {}",
            bytes.len(),
            file.path().display()
        );

        let conn = Connection::open(file.path()).map_err(|e| {
            CoreError::new(
                CoreErrorCode::AllTablesFailed,
                format!("SQLite could not open the database: {e}"),
            )
        })?;

        Ok(Self { conn, file })
    }

    fn close(self) {
        let Self { conn, file } = self;
        if let Err((_, e)) = conn.close() {
            log::warn!("error closing temporary database: {e}");
        }
        let path = file.path().to_path_buf();
        if let Err(e) = file.close() {
            log::warn!("error removing database file {}: {e}", path.display());
        }
    }
}

/// Runs every spec against `database`, in order. Fails only when the store
/// can't be created or when every table failed.
pub fn run_queries(
    database: &[u8],
    specs: &[TableSpec],
    options: &QueryOptions,
) -> Result<QueryOutcome, CoreError> {
    let store = EphemeralStore::materialize(database, options)?;

    let mut outcome = QueryOutcome::new();
    for spec in specs {
        let result = match query_table(&store.conn, spec) {
            Ok(keys) => {
                log::debug!("{}: {} keys", spec.name, keys.len());
                TableResult::Keys(keys)
            }
            Err(e) => {
                log::warn!("query on {} failed: {e}", spec.name);
                TableResult::Failed(CoreError::new(
                    CoreErrorCode::QueryPrepareFailure,
                    format!("{}: {e}", spec.name),
                ))
            }
        };
        outcome.record(spec.table, result);
    }

    store.close();

    if outcome.all_failed() {
        let cause = outcome
            .failed_tables()
            .next()
            .and_then(|table| outcome.failure(table))
            .map(|error| error.message.clone())
            .unwrap_or_default();
        return Err(CoreError::new(
            CoreErrorCode::AllTablesFailed,
            format!("every database query failed; SQLite error: {cause}"),
        ));
    }

    Ok(outcome)
}

fn query_table(conn: &Connection, spec: &TableSpec) -> rusqlite::Result<BTreeSet<String>> {
    let mut stmt = conn.prepare(spec.query)?;
    let mut rows = stmt.query([])?;
    let mut keys = BTreeSet::new();

    if spec.aggregate_row {
        if let Some(row) = rows.next()?
            && let Some(text) = column_text(row.get_ref(0)?)
        {
            keys.extend(word_tokens(&text).map(str::to_string));
        }
        return Ok(keys);
    }

    while let Some(row) = rows.next()? {
        if let Some(key) = column_text(row.get_ref(0)?) {
            keys.insert(key);
        }
    }
    Ok(keys)
}

fn column_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Maximal runs of ASCII letters, digits and underscores.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{QueryOutcome, word_tokens};
    use crate::catalog::Table;

    #[test]
    fn word_tokens_split_delimited_rows() {
        let tokens: Vec<&str> = word_tokens("Landing_01, Landing_02;;Astro-3 ").collect();
        assert_eq!(tokens, vec!["Landing_01", "Landing_02", "Astro", "3"]);
        assert_eq!(word_tokens(" ,, ").count(), 0);
    }

    #[test]
    fn failure_replaces_keys_for_the_same_table() {
        let outcome = QueryOutcome::new()
            .with_keys(Table::CollectionDynamic, ["a", "b"])
            .with_failure(Table::CollectionDynamic, "no such table");

        assert!(outcome.keys(Table::CollectionDynamic).is_none());
        assert!(outcome.failure(Table::CollectionDynamic).is_some());
        assert_eq!(outcome.len(), 1);
        assert!(outcome.all_failed());
    }

    #[test]
    fn unreliable_types_follow_table_order() {
        let outcome = QueryOutcome::new()
            .with_failure(Table::MiscDataDynamic, "x")
            .with_keys(Table::CollectionDynamic, Vec::<String>::new())
            .with_failure(Table::EconomicExpiryDynamic, "y");

        assert_eq!(
            outcome.unreliable_types(),
            vec![
                "Vivarium Chests",
                "Landing Platforms",
                "Astronomy Tables",
                "Ancient Magic Hotspots"
            ]
        );
        assert!(!outcome.all_failed());
        assert!(!QueryOutcome::new().all_failed());
    }
}
