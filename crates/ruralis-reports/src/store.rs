//! Report storage collaborator.
//!
//! The core treats storage as an opaque CRUD surface. `list_recent` is a
//! fetch-all-then-sort contract: the backend needs no indexes and no query
//! planning, ordering happens client-side.

use crate::error::ReportError;
use crate::record::{ReportData, ReportPatch, ReportRecord};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a new report and return its id.
    async fn save(
        &self,
        owner_id: &str,
        tool_type: &str,
        title: &str,
        data: ReportData,
        client_name: Option<String>,
    ) -> Result<Uuid, ReportError>;

    /// Replace the patched fields of an existing report. Owner-checked.
    async fn update(&self, id: Uuid, owner_id: &str, patch: ReportPatch)
    -> Result<(), ReportError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ReportRecord>, ReportError>;

    /// The owner's reports, most recently updated first.
    async fn list_recent(&self, owner_id: &str, limit: usize)
    -> Result<Vec<ReportRecord>, ReportError>;

    /// Remove a report. Owner-checked.
    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<(), ReportError>;
}

fn sort_recent(mut records: Vec<ReportRecord>, limit: usize) -> Vec<ReportRecord> {
    records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    records.truncate(limit);
    records
}

fn apply_patch(record: &mut ReportRecord, patch: ReportPatch) {
    if let Some(title) = patch.title {
        record.title = title;
    }
    if let Some(client_name) = patch.client_name {
        record.client_name = Some(client_name);
    }
    if let Some(data) = patch.data {
        record.data = data;
    }
    record.updated_at = Utc::now();
}

/// In-memory store. Process-lifetime persistence, used by tests and as the
/// default collaborator in embedded setups.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    records: DashMap<Uuid, ReportRecord>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    #[instrument(skip(self, data))]
    async fn save(
        &self,
        owner_id: &str,
        tool_type: &str,
        title: &str,
        data: ReportData,
        client_name: Option<String>,
    ) -> Result<Uuid, ReportError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let record = ReportRecord {
            id,
            owner_id: owner_id.to_string(),
            tool_type: tool_type.to_string(),
            title: title.to_string(),
            client_name,
            data,
            created_at: now,
            updated_at: now,
        };
        self.records.insert(id, record);
        info!(%id, owner_id, tool_type, "report saved");
        Ok(id)
    }

    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        id: Uuid,
        owner_id: &str,
        patch: ReportPatch,
    ) -> Result<(), ReportError> {
        let mut entry = self
            .records
            .get_mut(&id)
            .ok_or(ReportError::NotFound { id })?;
        if entry.owner_id != owner_id {
            warn!(%id, owner_id, "update refused: not the owner");
            return Err(ReportError::Forbidden { id, owner_id: owner_id.to_string() });
        }
        apply_patch(&mut entry, patch);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ReportRecord>, ReportError> {
        Ok(self.records.get(&id).map(|r| r.value().clone()))
    }

    async fn list_recent(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<ReportRecord>, ReportError> {
        let records = self
            .records
            .iter()
            .filter(|r| r.value().owner_id == owner_id)
            .map(|r| r.value().clone())
            .collect();
        Ok(sort_recent(records, limit))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<(), ReportError> {
        let owned = match self.records.get(&id) {
            Some(record) => record.owner_id == owner_id,
            None => return Err(ReportError::NotFound { id }),
        };
        if !owned {
            return Err(ReportError::Forbidden { id, owner_id: owner_id.to_string() });
        }
        self.records.remove(&id);
        info!(%id, "report deleted");
        Ok(())
    }
}

/// File-backed store for the CLI: the whole collection lives in one JSON
/// document, loaded and rewritten per operation. Fine for the report
/// volumes a single account produces.
#[derive(Debug)]
pub struct JsonFileReportStore {
    path: PathBuf,
    guard: tokio::sync::Mutex<()>,
}

impl JsonFileReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), guard: tokio::sync::Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<ReportRecord>, ReportError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| ReportError::serialization(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ReportError::backend("load", e.to_string())),
        }
    }

    async fn persist(&self, records: &[ReportRecord]) -> Result<(), ReportError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ReportError::backend("persist", e.to_string()))?;
            }
        }
        let raw = serde_json::to_string_pretty(records)
            .map_err(|e| ReportError::serialization(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| ReportError::backend("persist", e.to_string()))
    }
}

#[async_trait]
impl ReportStore for JsonFileReportStore {
    #[instrument(skip(self, data))]
    async fn save(
        &self,
        owner_id: &str,
        tool_type: &str,
        title: &str,
        data: ReportData,
        client_name: Option<String>,
    ) -> Result<Uuid, ReportError> {
        let _guard = self.guard.lock().await;
        let mut records = self.load().await?;
        let id = Uuid::new_v4();
        let now = Utc::now();
        records.push(ReportRecord {
            id,
            owner_id: owner_id.to_string(),
            tool_type: tool_type.to_string(),
            title: title.to_string(),
            client_name,
            data,
            created_at: now,
            updated_at: now,
        });
        self.persist(&records).await?;
        info!(%id, owner_id, tool_type, path = %self.path.display(), "report saved");
        Ok(id)
    }

    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        id: Uuid,
        owner_id: &str,
        patch: ReportPatch,
    ) -> Result<(), ReportError> {
        let _guard = self.guard.lock().await;
        let mut records = self.load().await?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReportError::NotFound { id })?;
        if record.owner_id != owner_id {
            return Err(ReportError::Forbidden { id, owner_id: owner_id.to_string() });
        }
        apply_patch(record, patch);
        self.persist(&records).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ReportRecord>, ReportError> {
        let _guard = self.guard.lock().await;
        Ok(self.load().await?.into_iter().find(|r| r.id == id))
    }

    async fn list_recent(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<ReportRecord>, ReportError> {
        let _guard = self.guard.lock().await;
        let records = self
            .load()
            .await?
            .into_iter()
            .filter(|r| r.owner_id == owner_id)
            .collect();
        Ok(sort_recent(records, limit))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<(), ReportError> {
        let _guard = self.guard.lock().await;
        let mut records = self.load().await?;
        let record = records
            .iter()
            .find(|r| r.id == id)
            .ok_or(ReportError::NotFound { id })?;
        if record.owner_id != owner_id {
            return Err(ReportError::Forbidden { id, owner_id: owner_id.to_string() });
        }
        records.retain(|r| r.id != id);
        self.persist(&records).await
    }
}
