//! In-memory port implementations shared by the use case tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{
    StackDescription, StackEvent, StackRequest, StackSummary, Template,
};
use crate::domain::ports::{BlobStore, Clock, ControlPlane, TailEvent, TailEventSink, TemplateLoader};
use crate::domain::value_objects::StackStatus;
use crate::error::{StackError, StackResult};

pub fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

pub fn at(secs: i64) -> DateTime<Utc> {
    epoch() + chrono::Duration::seconds(secs)
}

pub fn event(id: &str, resource: &str, status: &str, secs: i64) -> StackEvent {
    StackEvent::new(id, resource, status, at(secs))
}

/// One scripted answer of the control plane: status plus event feed
pub enum Poll {
    Stack(&'static str, Vec<StackEvent>),
    Missing,
    Failure,
}

/// Control plane that replays a script, one entry per describe call.
/// The last entry repeats once the script is exhausted.
pub struct ScriptedControlPlane {
    script: Vec<Poll>,
    cursor: Cell<usize>,
    pub stored: RefCell<Option<StackDescription>>,
    pub created: RefCell<Vec<StackRequest>>,
    pub updated: RefCell<Vec<StackRequest>>,
}

impl ScriptedControlPlane {
    pub fn new(script: Vec<Poll>) -> Self {
        Self {
            script,
            cursor: Cell::new(0),
            stored: RefCell::new(None),
            created: RefCell::new(Vec::new()),
            updated: RefCell::new(Vec::new()),
        }
    }

    /// Stack returned to lookups made before any poll
    pub fn with_stored(self, stack: StackDescription) -> Self {
        *self.stored.borrow_mut() = Some(stack);
        self
    }

    fn current(&self) -> &Poll {
        let index = self.cursor.get().saturating_sub(1);
        &self.script[index.min(self.script.len() - 1)]
    }
}

impl ControlPlane for ScriptedControlPlane {
    fn list_stacks(&self, filter: &[StackStatus]) -> StackResult<Vec<StackSummary>> {
        Ok(self
            .stored
            .borrow()
            .iter()
            .filter(|s| filter.contains(&s.status))
            .map(|s| StackSummary {
                name: s.name.clone(),
                status: s.status.clone(),
            })
            .collect())
    }

    fn describe_stack(&self, name: &str) -> StackResult<StackDescription> {
        if let Some(stored) = self.stored.borrow_mut().take() {
            return Ok(stored);
        }
        self.cursor.set(self.cursor.get() + 1);
        match self.current() {
            Poll::Stack(status, _) => Ok(StackDescription::new(name, *status)),
            Poll::Missing => Err(StackError::StackNotFound {
                name: name.to_string(),
            }),
            Poll::Failure => Err(StackError::remote("cloudformation describe-stacks", "Rate exceeded")),
        }
    }

    fn describe_stack_events(&self, _name: &str) -> StackResult<Vec<StackEvent>> {
        match self.current() {
            Poll::Stack(_, events) => Ok(events.clone()),
            Poll::Missing | Poll::Failure => Ok(Vec::new()),
        }
    }

    fn create_stack(&self, request: &StackRequest) -> StackResult<()> {
        self.created.borrow_mut().push(request.clone());
        Ok(())
    }

    fn update_stack(&self, request: &StackRequest) -> StackResult<()> {
        self.updated.borrow_mut().push(request.clone());
        Ok(())
    }
}

/// Clock whose sleeps advance time instantly
pub struct FakeClock {
    now: Cell<DateTime<Utc>>,
    pub sleeps: RefCell<Vec<Duration>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(epoch()),
            sleeps: RefCell::new(Vec::new()),
        }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
        let step = chrono::Duration::from_std(duration).unwrap();
        self.now.set(self.now.get() + step);
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub objects: RefCell<HashMap<String, Vec<u8>>>,
}

impl BlobStore for MemoryStore {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> StackResult<()> {
        self.objects
            .borrow_mut()
            .insert(format!("{}/{}", bucket, key), body.to_vec());
        Ok(())
    }

    fn resolve_location(&self, _bucket: &str) -> StackResult<String> {
        Ok("eu-west-1".to_string())
    }

    fn endpoint(&self, location: &str) -> String {
        format!("s3-{}.amazonaws.com", location)
    }
}

pub struct StaticLoader(pub Template);

impl TemplateLoader for StaticLoader {
    fn load(&self, _path: &std::path::Path) -> StackResult<Template> {
        Ok(self.0.clone())
    }
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    pub events: Arc<Mutex<Vec<TailEvent>>>,
}

impl RecordingSink {
    pub fn reported_ids(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                TailEvent::Event(event) => Some(event.event_id.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TailEventSink for RecordingSink {
    fn on_event(&self, event: TailEvent) {
        self.events.lock().unwrap().push(event);
    }
}
