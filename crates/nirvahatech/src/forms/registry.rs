use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use super::domain::FormKind;
use super::gateway::IntakeGateway;
use super::submission::{FormPhase, SubmissionController};
use crate::config::FormsConfig;

/// Controller type shared between the registry and request handlers.
pub type SharedController = Arc<SubmissionController<dyn IntakeGateway>>;

/// Identifier embedded in every rendered form as a hidden field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub Uuid);

impl FormId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

struct RegistryEntry {
    controller: SharedController,
    last_seen: Instant,
}

/// Live form instances keyed by the id rendered into the page.
///
/// Repeated posts of the same rendered form reach the same controller, which
/// is what stops a double click from sending two requests.
pub struct FormRegistry {
    gateway: Arc<dyn IntakeGateway>,
    config: FormsConfig,
    entries: Mutex<HashMap<FormId, RegistryEntry>>,
}

impl FormRegistry {
    pub fn new(gateway: Arc<dyn IntakeGateway>, config: FormsConfig) -> Self {
        Self {
            gateway,
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &FormsConfig {
        &self.config
    }

    /// Create a fresh instance under a new id.
    pub fn open(&self, kind: FormKind) -> (FormId, SharedController) {
        self.claim(FormId::generate(), kind)
    }

    /// Look up a live instance of the given kind.
    pub fn get(&self, id: &FormId, kind: FormKind) -> Option<SharedController> {
        self.find(id)
            .filter(|controller| controller.kind() == kind)
    }

    /// Look up a live instance of any kind and mark it as recently used.
    pub fn find(&self, id: &FormId) -> Option<SharedController> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(Arc::clone(&entry.controller))
    }

    /// Instance to render on a page view.
    ///
    /// Nothing is stored here. A page either shows the live instance its
    /// `form_id` names or a fresh id that is only claimed when posted.
    pub fn peek(&self, raw_id: Option<&str>, kind: FormKind) -> (FormId, Option<SharedController>) {
        if let Some(id) = raw_id.and_then(FormId::parse) {
            if let Some(controller) = self.get(&id, kind) {
                return (id, Some(controller));
            }
        }
        (FormId::generate(), None)
    }

    /// Instance a form post belongs to, created on its first post.
    ///
    /// An id that is malformed or already taken by the other form kind is
    /// replaced with a new one.
    pub fn resolve(&self, raw_id: Option<&str>, kind: FormKind) -> (FormId, SharedController) {
        let id = raw_id
            .and_then(FormId::parse)
            .unwrap_or_else(FormId::generate);
        self.claim(id, kind)
    }

    fn claim(&self, id: FormId, kind: FormKind) -> (FormId, SharedController) {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        let id = match entries.get_mut(&id) {
            Some(entry) if entry.controller.kind() == kind => {
                entry.last_seen = now;
                return (id, Arc::clone(&entry.controller));
            }
            Some(_) => FormId::generate(),
            None => id,
        };

        evict_idle(&mut entries, now, self.config.instance_ttl);
        make_room(&mut entries, self.config.max_instances);

        let controller: SharedController = Arc::new(SubmissionController::with_success_display(
            kind,
            Arc::clone(&self.gateway),
            self.config.success_display,
        ));
        entries.insert(
            id,
            RegistryEntry {
                controller: Arc::clone(&controller),
                last_seen: now,
            },
        );
        debug!(form = %kind, %id, live = entries.len(), "opened form instance");
        (id, controller)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn evict_idle(entries: &mut HashMap<FormId, RegistryEntry>, now: Instant, ttl: Duration) {
    entries.retain(|_, entry| {
        entry.controller.phase() == FormPhase::Submitting
            || now.duration_since(entry.last_seen) < ttl
    });
}

/// Drop least recently used instances until one more fits. In-flight
/// submissions are never dropped, so the cap can be exceeded while they run.
fn make_room(entries: &mut HashMap<FormId, RegistryEntry>, max: usize) {
    while entries.len() >= max.max(1) {
        let oldest = entries
            .iter()
            .filter(|(_, entry)| entry.controller.phase() != FormPhase::Submitting)
            .min_by_key(|(_, entry)| entry.last_seen)
            .map(|(id, _)| *id);

        match oldest {
            Some(id) => {
                entries.remove(&id);
                debug!(%id, "form instance cap reached, dropped least recently used");
            }
            None => break,
        }
    }
}
