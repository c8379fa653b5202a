use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, FilterSelection, TABLE_SPECS};
use crate::container::{self, ExtractedDatabase, SaveInfo};
use crate::query::{self, QueryOptions, QueryOutcome};
use crate::reconcile::Reconciler;

use super::error::{CoreError, CoreErrorCode};
use super::types::Report;

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// A parsed save: its metadata and the database image pulled out of it.
#[derive(Debug)]
pub struct Session {
    info: SaveInfo,
    database: ExtractedDatabase,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Session, CoreError> {
        let bytes = bytes.as_ref();
        let info = container::parse_save_info(bytes)?;
        let database = container::extract_database(bytes)?;

        Ok(Session { info, database })
    }

    pub fn open_path(&self, path: &Path) -> Result<Session, CoreError> {
        if !path.exists() {
            return Err(CoreError::new(
                CoreErrorCode::Io,
                format!("unable to find the file \"{}\"", path.display()),
            ));
        }
        let bytes = fs::read(path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("error reading the file \"{}\": {e}", path.display()),
            )
        })?;
        self.open_bytes(bytes)
    }
}

impl Session {
    pub fn save_info(&self) -> &SaveInfo {
        &self.info
    }

    pub fn database(&self) -> &ExtractedDatabase {
        &self.database
    }

    pub fn query(&self, options: &QueryOptions) -> Result<QueryOutcome, CoreError> {
        query::run_queries(&self.database.bytes, &TABLE_SPECS, options)
    }

    pub fn reconcile(&self, outcome: &QueryOutcome, selection: &FilterSelection) -> Report {
        self.reconcile_with(Catalog::builtin(), outcome, selection)
    }

    pub fn reconcile_with(
        &self,
        catalog: &Catalog,
        outcome: &QueryOutcome,
        selection: &FilterSelection,
    ) -> Report {
        let reconciliation = Reconciler::new(catalog).reconcile(outcome, selection);
        Report::new(
            self.info.clone(),
            reconciliation,
            outcome.unreliable_types(),
        )
    }

    /// Query then reconcile against the built-in catalog.
    pub fn run(
        &self,
        selection: &FilterSelection,
        options: &QueryOptions,
    ) -> Result<Report, CoreError> {
        let outcome = self.query(options)?;
        Ok(self.reconcile(&outcome, selection))
    }
}
