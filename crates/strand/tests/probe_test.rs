use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use strand::probe::{self, NamedState, NamedValue, ProbeRequest, State};
use strand::step::build_chain;
use strand_core::{Criterion, ElementHandle, ElementProvider, ProviderError, Selection};

/// A flat page: the root answers every criterion with the same buttons and
/// buttons have no children.
struct Page {
    buttons: Vec<Button>,
    requests: Mutex<Vec<Criterion>>,
}

#[derive(Clone)]
struct Button {
    label: &'static str,
    enabled: bool,
    clicked: Arc<AtomicBool>,
}

impl Button {
    fn new(label: &'static str, enabled: bool) -> Self {
        Self {
            label,
            enabled,
            clicked: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl ElementProvider for Page {
    type Handle = Button;

    async fn resolve_criterion(
        &self,
        criterion: &Criterion,
    ) -> Result<Vec<Button>, ProviderError> {
        self.requests.lock().unwrap().push(criterion.clone());
        Ok(self.buttons.clone())
    }
}

#[async_trait]
impl ElementProvider for Button {
    type Handle = Button;

    async fn resolve_criterion(
        &self,
        _criterion: &Criterion,
    ) -> Result<Vec<Button>, ProviderError> {
        Ok(vec![])
    }
}

#[async_trait]
impl ElementHandle for Button {
    async fn is_equal_to(&self, other: &Self) -> Result<bool, ProviderError> {
        Ok(self.label == other.label)
    }

    async fn text(&self) -> Result<String, ProviderError> {
        Ok(self.label.to_string())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, ProviderError> {
        Ok((name == "type").then(|| "button".to_string()))
    }

    async fn is_enabled(&self) -> Result<bool, ProviderError> {
        Ok(self.enabled)
    }

    async fn click(&self) -> Result<(), ProviderError> {
        self.clicked.store(true, Ordering::SeqCst);
        Ok(())
    }
}

fn page(buttons: Vec<Button>) -> Arc<Page> {
    Arc::new(Page {
        buttons,
        requests: Mutex::new(vec![]),
    })
}

#[tokio::test]
async fn test_probe_reads_single_element() {
    let ok = Button::new("OK", true);
    let root = page(vec![Button::new("Cancel", true), ok.clone()]);
    let chain = build_chain(&["css=button", "at=1"]).unwrap();
    let selection = Selection::with_chain(Arc::clone(&root), chain);
    let request = ProbeRequest {
        text: true,
        attribute: Some("type".into()),
        state: Some(State::Enabled),
        click: true,
        ..ProbeRequest::default()
    };

    let report = probe::run(&selection, &request).await.unwrap();

    assert_eq!(report.selection, "CSS: button [1]");
    assert_eq!(report.count, 1);
    assert_eq!(report.text.as_deref(), Some("OK"));
    assert_eq!(
        report.attribute,
        Some(NamedValue {
            name: "type".into(),
            value: "button".into()
        })
    );
    assert_eq!(
        report.state,
        Some(NamedState {
            name: "enabled",
            value: true
        })
    );
    assert!(report.clicked);
    assert!(ok.clicked.load(Ordering::SeqCst));
    assert_eq!(root.requests.lock().unwrap()[0], Criterion::css("button").at(1));
}

#[tokio::test]
async fn test_probe_state_over_all_elements() {
    let root = page(vec![Button::new("A", true), Button::new("B", false)]);
    let chain = build_chain(&["css=button", "all"]).unwrap();
    let selection = Selection::with_chain(root, chain);
    let request = ProbeRequest {
        state: Some(State::Enabled),
        ..ProbeRequest::default()
    };

    let report = probe::run(&selection, &request).await.unwrap();

    assert_eq!(report.count, 2);
    assert_eq!(report.state.map(|s| s.value), Some(false));
}

#[tokio::test]
async fn test_probe_stops_on_cardinality_error() {
    let first = Button::new("A", true);
    let root = page(vec![first.clone(), Button::new("B", true)]);
    let selection = Selection::with_chain(root, build_chain(&["css=button"]).unwrap());
    let request = ProbeRequest {
        text: true,
        click: true,
        ..ProbeRequest::default()
    };

    let err = probe::run(&selection, &request).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to retrieve element with 'CSS: button': multiple elements (2) were selected"
    );
    assert!(!first.clicked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_report_omits_unrequested_fields() {
    let root = page(vec![Button::new("A", true)]);
    let selection = Selection::with_chain(root, build_chain(&["css=button"]).unwrap());

    let report = probe::run(&selection, &ProbeRequest::default()).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "selection": "CSS: button", "count": 1 })
    );
}

#[tokio::test]
async fn test_close_runs_when_navigation_fails() {
    let closed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&closed);
    let outcome: anyhow::Result<()> =
        Err(anyhow::anyhow!("Navigation failed: http://unreachable.invalid"));

    let err = probe::close_after(outcome, async move {
        flag.store(true, Ordering::SeqCst);
        Ok::<(), String>(())
    })
    .await
    .unwrap_err();

    assert!(closed.load(Ordering::SeqCst));
    assert_eq!(err.to_string(), "Navigation failed: http://unreachable.invalid");
}

#[tokio::test]
async fn test_close_failure_keeps_report() {
    let root = page(vec![Button::new("A", true)]);
    let selection = Selection::with_chain(root, build_chain(&["css=button"]).unwrap());
    let outcome = probe::run(&selection, &ProbeRequest::default())
        .await
        .map_err(anyhow::Error::from);

    let report = probe::close_after(outcome, async { Err::<(), _>("session already gone") })
        .await
        .unwrap();

    assert_eq!(report.count, 1);
}
