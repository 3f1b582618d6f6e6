//! Assessment and draft persistence behind injectable store traits.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use teamassess_scoring::{Assessment, AssessmentId, Draft};
use thiserror::Error;

const ASSESSMENTS_FILE: &str = "assessments.json";
const DRAFT_FILE: &str = "draft.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("assessment {0} already exists")]
    Duplicate(AssessmentId),
    #[error("replacement for {expected} carries id {actual}")]
    IdMismatch {
        expected: AssessmentId,
        actual: AssessmentId,
    },
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse store file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize store contents")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Collection of submitted assessments, in insertion order.
pub trait AssessmentStore: Send + Sync {
    fn list(&self) -> StoreResult<Vec<Assessment>>;

    fn get(&self, id: &AssessmentId) -> StoreResult<Option<Assessment>> {
        Ok(self.list()?.into_iter().find(|a| &a.id == id))
    }

    /// Add a new assessment. Fails if the id is already stored.
    fn append(&self, assessment: Assessment) -> StoreResult<()>;

    /// Replace the assessment stored under `id` in place. `false` when unknown.
    fn update(&self, id: &AssessmentId, assessment: Assessment) -> StoreResult<bool>;

    /// `false` when unknown.
    fn delete(&self, id: &AssessmentId) -> StoreResult<bool>;

    /// Add the samples whose ids are not stored yet; returns how many were added.
    fn load_samples(&self, samples: &[Assessment]) -> StoreResult<usize>;

    /// Replace the whole collection (import).
    fn replace_all(&self, assessments: Vec<Assessment>) -> StoreResult<()>;

    /// Pretty-printed JSON array of every stored assessment.
    fn export_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.list()?)?)
    }

    /// Remove every assessment and the draft.
    fn clear(&self) -> StoreResult<()>;
}

/// Single in-progress draft.
pub trait DraftStore: Send + Sync {
    fn get_draft(&self) -> StoreResult<Option<Draft>>;
    fn set_draft(&self, draft: &Draft) -> StoreResult<()>;
    /// `false` when there was no draft.
    fn clear_draft(&self) -> StoreResult<bool>;
}

/// In-memory contents shared by both store implementations.
#[derive(Debug, Default, Clone)]
struct Contents {
    assessments: Vec<Assessment>,
    draft: Option<Draft>,
}

impl Contents {
    fn position(&self, id: &AssessmentId) -> Option<usize> {
        self.assessments.iter().position(|a| &a.id == id)
    }

    fn append(&mut self, assessment: Assessment) -> StoreResult<()> {
        if self.position(&assessment.id).is_some() {
            return Err(StoreError::Duplicate(assessment.id));
        }
        self.assessments.push(assessment);
        Ok(())
    }

    fn update(&mut self, id: &AssessmentId, assessment: Assessment) -> StoreResult<bool> {
        if &assessment.id != id {
            return Err(StoreError::IdMismatch {
                expected: id.clone(),
                actual: assessment.id,
            });
        }
        match self.position(id) {
            Some(index) => {
                self.assessments[index] = assessment;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: &AssessmentId) -> bool {
        let before = self.assessments.len();
        self.assessments.retain(|a| &a.id != id);
        self.assessments.len() != before
    }

    fn load_samples(&mut self, samples: &[Assessment]) -> usize {
        let mut added = 0;
        for sample in samples {
            if self.position(&sample.id).is_none() {
                self.assessments.push(sample.clone());
                added += 1;
            }
        }
        added
    }

    fn replace_all(&mut self, assessments: Vec<Assessment>) -> StoreResult<()> {
        let mut seen = HashSet::new();
        for a in &assessments {
            if !seen.insert(&a.id) {
                return Err(StoreError::Duplicate(a.id.clone()));
            }
        }
        self.assessments = assessments;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Contents>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssessmentStore for MemoryStore {
    fn list(&self) -> StoreResult<Vec<Assessment>> {
        Ok(self.inner.lock().assessments.clone())
    }

    fn append(&self, assessment: Assessment) -> StoreResult<()> {
        self.inner.lock().append(assessment)
    }

    fn update(&self, id: &AssessmentId, assessment: Assessment) -> StoreResult<bool> {
        self.inner.lock().update(id, assessment)
    }

    fn delete(&self, id: &AssessmentId) -> StoreResult<bool> {
        Ok(self.inner.lock().delete(id))
    }

    fn load_samples(&self, samples: &[Assessment]) -> StoreResult<usize> {
        Ok(self.inner.lock().load_samples(samples))
    }

    fn replace_all(&self, assessments: Vec<Assessment>) -> StoreResult<()> {
        self.inner.lock().replace_all(assessments)
    }

    fn clear(&self) -> StoreResult<()> {
        *self.inner.lock() = Contents::default();
        Ok(())
    }
}

impl DraftStore for MemoryStore {
    fn get_draft(&self) -> StoreResult<Option<Draft>> {
        Ok(self.inner.lock().draft.clone())
    }

    fn set_draft(&self, draft: &Draft) -> StoreResult<()> {
        self.inner.lock().draft = Some(draft.clone());
        Ok(())
    }

    fn clear_draft(&self) -> StoreResult<bool> {
        Ok(self.inner.lock().draft.take().is_some())
    }
}

/// Disk-backed store: a directory holding `assessments.json` and `draft.json`.
///
/// Contents are loaded on [`JsonFileStore::open`] and every mutation is
/// written back before returning.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    fresh: bool,
    inner: Mutex<Contents>,
}

impl JsonFileStore {
    /// Open (creating if needed) the store directory and load its contents.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io("create store directory", &dir, e))?;
        let assessments_path = dir.join(ASSESSMENTS_FILE);
        let fresh = !assessments_path.exists();
        let assessments = read_assessments(&assessments_path)?;
        let draft = read_draft(&dir.join(DRAFT_FILE));
        tracing::debug!(
            dir = %dir.display(),
            assessments = assessments.len(),
            has_draft = draft.is_some(),
            fresh,
            "store opened"
        );
        Ok(Self {
            dir,
            fresh,
            inner: Mutex::new(Contents { assessments, draft }),
        })
    }

    /// True when no assessments file existed at open, i.e. first use.
    ///
    /// A cleared store is not fresh: clearing writes an empty collection.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    fn assessments_path(&self) -> PathBuf {
        self.dir.join(ASSESSMENTS_FILE)
    }

    fn draft_path(&self) -> PathBuf {
        self.dir.join(DRAFT_FILE)
    }

    fn persist_assessments(&self, contents: &Contents) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(&contents.assessments)?;
        write_atomic(&self.dir, &self.assessments_path(), &data)?;
        tracing::info!(count = contents.assessments.len(), "assessments saved");
        Ok(())
    }

    /// Apply `change` to a copy of the contents and swap it in only once the
    /// copy is on disk. `change` returns its result and whether to persist.
    fn commit<T>(
        &self,
        change: impl FnOnce(&mut Contents) -> StoreResult<(T, bool)>,
    ) -> StoreResult<T> {
        let mut guard = self.inner.lock();
        let mut next = guard.clone();
        let (result, dirty) = change(&mut next)?;
        if dirty {
            self.persist_assessments(&next)?;
            *guard = next;
        }
        Ok(result)
    }

    fn remove_draft_file(&self) -> StoreResult<()> {
        let path = self.draft_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io("remove", &path, e)),
        }
    }
}

impl AssessmentStore for JsonFileStore {
    fn list(&self) -> StoreResult<Vec<Assessment>> {
        Ok(self.inner.lock().assessments.clone())
    }

    fn append(&self, assessment: Assessment) -> StoreResult<()> {
        self.commit(|next| next.append(assessment).map(|()| ((), true)))
    }

    fn update(&self, id: &AssessmentId, assessment: Assessment) -> StoreResult<bool> {
        self.commit(|next| next.update(id, assessment).map(|updated| (updated, updated)))
    }

    fn delete(&self, id: &AssessmentId) -> StoreResult<bool> {
        self.commit(|next| {
            let deleted = next.delete(id);
            Ok((deleted, deleted))
        })
    }

    fn load_samples(&self, samples: &[Assessment]) -> StoreResult<usize> {
        self.commit(|next| {
            let added = next.load_samples(samples);
            Ok((added, added > 0))
        })
    }

    fn replace_all(&self, assessments: Vec<Assessment>) -> StoreResult<()> {
        self.commit(|next| next.replace_all(assessments).map(|()| ((), true)))
    }

    fn clear(&self) -> StoreResult<()> {
        let mut guard = self.inner.lock();
        self.persist_assessments(&Contents::default())?;
        guard.assessments.clear();
        self.remove_draft_file()?;
        guard.draft = None;
        Ok(())
    }
}

impl DraftStore for JsonFileStore {
    fn get_draft(&self) -> StoreResult<Option<Draft>> {
        Ok(self.inner.lock().draft.clone())
    }

    fn set_draft(&self, draft: &Draft) -> StoreResult<()> {
        let mut guard = self.inner.lock();
        let data = serde_json::to_string_pretty(draft)?;
        write_atomic(&self.dir, &self.draft_path(), &data)?;
        guard.draft = Some(draft.clone());
        tracing::info!("draft saved");
        Ok(())
    }

    fn clear_draft(&self) -> StoreResult<bool> {
        let mut guard = self.inner.lock();
        self.remove_draft_file()?;
        Ok(guard.draft.take().is_some())
    }
}

fn read_assessments(path: &Path) -> StoreResult<Vec<Assessment>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(|e| StoreError::io("read", path, e))?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// A missing or unreadable draft is treated as no draft.
fn read_draft(path: &Path) -> Option<Draft> {
    let text = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&text) {
        Ok(draft) => Some(draft),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable draft");
            None
        }
    }
}

/// Write to a temp file in `dir` then rename over `path`.
fn write_atomic(dir: &Path, path: &Path, data: &str) -> StoreResult<()> {
    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| StoreError::io("create temp file in", dir, e))?;
    temp.write_all(data.as_bytes())
        .map_err(|e| StoreError::io("write temp file for", path, e))?;
    temp.persist(path)
        .map_err(|e| StoreError::io("replace", path, e.error))?;
    Ok(())
}
