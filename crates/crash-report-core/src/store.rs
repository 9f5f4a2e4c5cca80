use crate::entities::{CrashReportData, ReportField};
use crate::error::ReporterError;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PENDING_DIR: &str = "pending";
const APPROVED_DIR: &str = "approved";

/// File-backed report storage.
///
/// Reports are written as pretty JSON under the store root, in `pending/`
/// until approved for sending and in `approved/` afterwards. File names start
/// with a UTC timestamp so lexicographic order is chronological order.
pub struct FileReportStore {
    root: PathBuf,
}

impl FileReportStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a report awaiting approval.
    pub fn save_pending(&self, report: &CrashReportData) -> Result<PathBuf, ReporterError> {
        self.save_in(PENDING_DIR, report)
    }

    /// Write a report already approved for sending.
    pub fn save_approved(&self, report: &CrashReportData) -> Result<PathBuf, ReporterError> {
        self.save_in(APPROVED_DIR, report)
    }

    pub fn list_pending(&self) -> Result<Vec<PathBuf>, ReporterError> {
        self.list_in(PENDING_DIR)
    }

    pub fn list_approved(&self) -> Result<Vec<PathBuf>, ReporterError> {
        self.list_in(APPROVED_DIR)
    }

    pub fn load(&self, path: &Path) -> Result<CrashReportData, ReporterError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn delete(&self, path: &Path) -> Result<(), ReporterError> {
        fs::remove_file(path)?;
        Ok(())
    }

    /// Move one pending report to the approved directory.
    pub fn approve(&self, path: &Path) -> Result<PathBuf, ReporterError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ReporterError::Configuration(format!("not a report file: {}", path.display())))?;
        let approved_dir = self.root.join(APPROVED_DIR);
        fs::create_dir_all(&approved_dir)?;
        let destination = approved_dir.join(file_name);
        fs::rename(path, &destination)?;
        Ok(destination)
    }

    /// Approve every pending report. Returns how many were promoted.
    pub fn approve_all(&self) -> Result<usize, ReporterError> {
        let pending = self.list_pending()?;
        let count = pending.len();
        for path in pending {
            self.approve(&path)?;
        }
        Ok(count)
    }

    /// Delete all pending reports except the most recent one. The newest
    /// report is kept because it is most likely the crash that just happened.
    /// Returns how many were deleted.
    pub fn sweep_pending_on_start(&self) -> Result<usize, ReporterError> {
        let mut pending = self.list_pending()?;
        pending.pop();
        let count = pending.len();
        for path in pending {
            self.delete(&path)?;
        }
        Ok(count)
    }

    /// Delete the oldest approved reports so at most `keep` remain. Returns
    /// how many were deleted.
    pub fn prune_approved(&self, keep: usize) -> Result<usize, ReporterError> {
        let approved = self.list_approved()?;
        let excess = approved.len().saturating_sub(keep);
        for path in &approved[..excess] {
            self.delete(path)?;
        }
        Ok(excess)
    }

    fn save_in(&self, sub: &str, report: &CrashReportData) -> Result<PathBuf, ReporterError> {
        let dir = self.root.join(sub);
        fs::create_dir_all(&dir)?;
        let path = dir.join(Self::file_name_for(report));
        fs::write(&path, report.to_json()?)?;
        Ok(path)
    }

    fn list_in(&self, sub: &str) -> Result<Vec<PathBuf>, ReporterError> {
        let dir = self.root.join(sub);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        entries.sort();
        Ok(entries)
    }

    fn file_name_for(report: &CrashReportData) -> String {
        let id = report
            .get(ReportField::ReportId)
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        format!("{}-{}.json", Utc::now().format("%Y%m%dT%H%M%S%3fZ"), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str) -> CrashReportData {
        let mut data = CrashReportData::new();
        data.put(ReportField::ReportId, id);
        data.put(ReportField::AppName, "demo");
        data
    }

    /// File names carry millisecond timestamps; spacing saves out keeps the
    /// chronological order assertions deterministic.
    fn tick() {
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    #[test]
    fn test_save_and_load_pending() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path());

        let path = store.save_pending(&report("r1")).unwrap();
        assert!(path.exists());

        let loaded = store.load(&path).unwrap();
        assert_eq!(
            loaded.get(ReportField::ReportId),
            Some(&serde_json::Value::from("r1"))
        );
    }

    #[test]
    fn test_file_name_contains_report_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path());
        let path = store.save_pending(&report("my-report-id")).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .contains("my-report-id"));
    }

    #[test]
    fn test_listing_missing_directories_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path().join("nowhere"));
        assert!(store.list_pending().unwrap().is_empty());
        assert!(store.list_approved().unwrap().is_empty());
    }

    #[test]
    fn test_approve_moves_report() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path());

        let pending = store.save_pending(&report("r1")).unwrap();
        let approved = store.approve(&pending).unwrap();

        assert!(!pending.exists());
        assert!(approved.exists());
        assert_eq!(store.list_pending().unwrap().len(), 0);
        assert_eq!(store.list_approved().unwrap().len(), 1);
    }

    #[test]
    fn test_approve_all_counts_promotions() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path());
        store.save_pending(&report("r1")).unwrap();
        store.save_pending(&report("r2")).unwrap();

        assert_eq!(store.approve_all().unwrap(), 2);
        assert_eq!(store.list_approved().unwrap().len(), 2);
    }

    #[test]
    fn test_sweep_keeps_only_newest_pending() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path());
        store.save_pending(&report("old-1")).unwrap();
        tick();
        store.save_pending(&report("old-2")).unwrap();
        tick();
        let newest = store.save_pending(&report("new")).unwrap();

        let removed = store.sweep_pending_on_start().unwrap();

        assert_eq!(removed, 2);
        let remaining = store.list_pending().unwrap();
        assert_eq!(remaining, vec![newest]);
    }

    #[test]
    fn test_sweep_on_empty_store_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path());
        assert_eq!(store.sweep_pending_on_start().unwrap(), 0);
    }

    #[test]
    fn test_prune_approved_deletes_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path());
        let oldest = store.save_approved(&report("r1")).unwrap();
        tick();
        store.save_approved(&report("r2")).unwrap();
        tick();
        store.save_approved(&report("r3")).unwrap();

        let removed = store.prune_approved(2).unwrap();

        assert_eq!(removed, 1);
        assert!(!oldest.exists());
        assert_eq!(store.list_approved().unwrap().len(), 2);
    }

    #[test]
    fn test_prune_with_enough_room_deletes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReportStore::new(dir.path());
        store.save_approved(&report("r1")).unwrap();
        assert_eq!(store.prune_approved(5).unwrap(), 0);
    }
}
