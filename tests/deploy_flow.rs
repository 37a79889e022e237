//! End-to-end deploy flow through the public API with in-memory adapters.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use stackctl::application::{DeployOptions, DeployUseCase, TailOptions, TemplatePublisher, TemplateSource};
use stackctl::domain::entities::{StackDescription, StackSummary};
use stackctl::domain::ports::{
    BlobStore, Clock, ControlPlane, TailEvent, TailEventSink, TemplateLoader,
};
use stackctl::infrastructure::templates::TemplateFormat;
use stackctl::infrastructure::FsTemplateLoader;
use stackctl::{
    Capability, ParameterOverrides, ReconciledParameter, StackError, StackEvent, StackRequest,
    StackResult, StackStatus, Template,
};

const TEMPLATE: &str = r#"{"Parameters":{"Env":{"Type":"String"},"Size":{"Type":"Number"}},"Resources":{}}"#;

fn start() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn template() -> Template {
    FsTemplateLoader::parse(TEMPLATE, TemplateFormat::Json).unwrap()
}

/// Stacks keyed by name; each describe advances the stack through `progress`
#[derive(Default)]
struct InMemoryControlPlane {
    stacks: RefCell<BTreeMap<String, StackDescription>>,
    progress: RefCell<Vec<&'static str>>,
    events: RefCell<Vec<StackEvent>>,
    submitted: RefCell<Vec<(&'static str, StackRequest)>>,
}

impl InMemoryControlPlane {
    fn with_stack(self, description: StackDescription) -> Self {
        self.stacks
            .borrow_mut()
            .insert(description.name.clone(), description);
        self
    }

    fn submit(&self, operation: &'static str, request: &StackRequest, status: &str) {
        self.submitted.borrow_mut().push((operation, request.clone()));
        self.stacks.borrow_mut().insert(
            request.stack_name.clone(),
            StackDescription::new(request.stack_name.as_str(), StackStatus::new(status)),
        );
    }
}

impl ControlPlane for InMemoryControlPlane {
    fn list_stacks(&self, filter: &[StackStatus]) -> StackResult<Vec<StackSummary>> {
        Ok(self
            .stacks
            .borrow()
            .values()
            .filter(|s| filter.contains(&s.status))
            .map(|s| StackSummary {
                name: s.name.clone(),
                status: s.status.clone(),
            })
            .collect())
    }

    fn describe_stack(&self, name: &str) -> StackResult<StackDescription> {
        let mut stacks = self.stacks.borrow_mut();
        let stack = stacks.get_mut(name).ok_or(StackError::StackNotFound {
            name: name.to_string(),
        })?;

        let mut progress = self.progress.borrow_mut();
        if !progress.is_empty() && !self.submitted.borrow().is_empty() {
            stack.status = StackStatus::new(progress.remove(0));
        }
        Ok(stack.clone())
    }

    fn describe_stack_events(&self, _name: &str) -> StackResult<Vec<StackEvent>> {
        Ok(self.events.borrow().clone())
    }

    fn create_stack(&self, request: &StackRequest) -> StackResult<()> {
        self.submit("create", request, "CREATE_IN_PROGRESS");
        Ok(())
    }

    fn update_stack(&self, request: &StackRequest) -> StackResult<()> {
        self.submit("update", request, "UPDATE_IN_PROGRESS");
        Ok(())
    }
}

#[derive(Default)]
struct MemoryStore {
    objects: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl BlobStore for MemoryStore {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> StackResult<()> {
        self.objects
            .borrow_mut()
            .insert(format!("{}/{}", bucket, key), body.to_vec());
        Ok(())
    }

    fn resolve_location(&self, _bucket: &str) -> StackResult<String> {
        Ok("us-east-1".to_string())
    }

    fn endpoint(&self, location: &str) -> String {
        if location == "us-east-1" {
            "s3.amazonaws.com".to_string()
        } else {
            format!("s3-{}.amazonaws.com", location)
        }
    }
}

struct StepClock {
    now: Cell<DateTime<Utc>>,
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.now
            .set(self.now.get() + chrono::Duration::from_std(duration).unwrap());
    }
}

#[derive(Default)]
struct CollectingSink {
    events: Mutex<Vec<TailEvent>>,
}

impl TailEventSink for CollectingSink {
    fn on_event(&self, event: TailEvent) {
        self.events.lock().unwrap().push(event);
    }
}

struct NoLoader;

impl TemplateLoader for NoLoader {
    fn load(&self, path: &std::path::Path) -> StackResult<Template> {
        Err(StackError::TemplateLoad {
            path: path.to_path_buf(),
            message: "not expected".to_string(),
        })
    }
}

#[test]
fn update_reuses_stored_values_and_tails_to_completion() {
    let control_plane = InMemoryControlPlane::default().with_stack(
        StackDescription::new("web", StackStatus::new("CREATE_COMPLETE"))
            .with_parameter("Env", "prod")
            .with_parameter("Size", "2"),
    );
    *control_plane.progress.borrow_mut() = vec!["UPDATE_IN_PROGRESS", "UPDATE_COMPLETE"];
    *control_plane.events.borrow_mut() = vec![
        StackEvent::new("old", "web", "CREATE_COMPLETE", start() - chrono::Duration::hours(1)),
    ];

    let store = MemoryStore::default();
    let clock = StepClock {
        now: Cell::new(start()),
    };
    let use_case = DeployUseCase::new(
        &control_plane,
        TemplatePublisher::new(&store, "templates"),
        NoLoader,
        &clock,
    );

    let options = DeployOptions::update("web", TemplateSource::Loaded(template()))
        .with_overrides(ParameterOverrides::from_pairs([("Size", "3")]))
        .with_capability(Some(Capability::NamedIam))
        .with_tail(Some(TailOptions::default()));

    let running = AtomicBool::new(true);
    let sink = CollectingSink::default();
    let result = use_case
        .execute_with_events(&options, &running, &sink)
        .unwrap();

    assert_eq!(
        result.template.url,
        "https://s3.amazonaws.com/templates/web.template"
    );
    assert_eq!(
        store.objects.borrow().get("templates/web.template").unwrap(),
        &template().to_compact_json().unwrap().into_bytes()
    );

    let submitted = control_plane.submitted.borrow();
    assert_eq!(submitted.len(), 1);
    let (operation, request) = &submitted[0];
    assert_eq!(*operation, "update");
    assert_eq!(
        request.parameters,
        vec![
            ReconciledParameter::UsePrevious {
                key: "Env".to_string()
            },
            ReconciledParameter::Value {
                key: "Size".to_string(),
                value: "3".to_string()
            },
        ]
    );
    assert_eq!(request.capabilities, Some(vec![Capability::NamedIam]));

    let outcome = result.tail.as_ref().unwrap();
    assert_eq!(outcome.final_status.as_str(), "UPDATE_COMPLETE");
    assert_eq!(outcome.events_reported, 0);
    assert!(!result.rolled_back());

    // The pre-existing event is outside the session window
    let events = sink.events.lock().unwrap();
    assert!(matches!(events.first(), Some(TailEvent::Started { .. })));
    assert!(matches!(events.last(), Some(TailEvent::Finished { .. })));
    assert!(!events.iter().any(|e| matches!(e, TailEvent::Event(_))));
}

#[test]
fn create_without_stored_stack_sends_only_overrides() {
    let control_plane = InMemoryControlPlane::default();
    let store = MemoryStore::default();
    let clock = StepClock {
        now: Cell::new(start()),
    };
    let use_case = DeployUseCase::new(
        &control_plane,
        TemplatePublisher::new(&store, "templates"),
        NoLoader,
        &clock,
    );

    let options = DeployOptions::create("api", TemplateSource::Loaded(template()))
        .with_overrides(ParameterOverrides::from_pairs([("Env", "stage"), ("Env", "prod")]));

    let result = use_case.execute(&options).unwrap();

    assert_eq!(
        result.request.parameters,
        vec![ReconciledParameter::Value {
            key: "Env".to_string(),
            value: "prod".to_string()
        }]
    );
    assert_eq!(result.request.capabilities, None);
    assert!(result.tail.is_none());
    assert_eq!(control_plane.submitted.borrow()[0].0, "create");
}
