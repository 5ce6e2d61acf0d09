#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use strand_core::{Criterion, ElementHandle, ElementProvider, ProviderError};

/// Records every criterion it is asked to resolve and answers with a fixed
/// list of children, or a fixed error.
#[derive(Default)]
pub struct Responder {
    children: Mutex<Vec<MockElement>>,
    error: Mutex<Option<String>>,
    requests: Mutex<Vec<Criterion>>,
}

impl Responder {
    fn respond(&self, criterion: &Criterion) -> Result<Vec<MockElement>, ProviderError> {
        self.requests.lock().unwrap().push(criterion.clone());
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(ProviderError::backend(message));
        }
        Ok(self.children.lock().unwrap().clone())
    }

    pub fn returns(&self, children: Vec<MockElement>) {
        *self.children.lock().unwrap() = children;
    }

    pub fn fails_with(&self, message: &str) {
        *self.error.lock().unwrap() = Some(message.to_string());
    }

    pub fn requests(&self) -> Vec<Criterion> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct MockRoot {
    pub responder: Responder,
}

impl MockRoot {
    pub fn returning(children: Vec<MockElement>) -> Arc<Self> {
        let root = Self::default();
        root.responder.returns(children);
        Arc::new(root)
    }
}

#[async_trait]
impl ElementProvider for MockRoot {
    type Handle = MockElement;

    async fn resolve_criterion(
        &self,
        criterion: &Criterion,
    ) -> Result<Vec<MockElement>, ProviderError> {
        self.responder.respond(criterion)
    }
}

#[derive(Default)]
pub struct ElementState {
    pub responder: Responder,
    pub text: Mutex<Option<Result<String, ProviderError>>>,
    pub attribute: Mutex<Option<Result<Option<String>, ProviderError>>>,
    pub css: Mutex<Option<Result<String, ProviderError>>>,
    pub selected: Mutex<Option<Result<bool, ProviderError>>>,
    pub enabled: Mutex<Option<Result<bool, ProviderError>>>,
    pub equal: Mutex<Option<Result<bool, ProviderError>>>,
    pub compared_with: Mutex<Option<String>>,
    pub queried: Mutex<Vec<String>>,
    pub clicked: Mutex<bool>,
}

/// Cheaply clonable element handle; clones share state.
#[derive(Clone)]
pub struct MockElement {
    pub name: String,
    pub state: Arc<ElementState>,
}

impl std::fmt::Debug for MockElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockElement").field("name", &self.name).finish()
    }
}

impl MockElement {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: Arc::new(ElementState::default()),
        }
    }

    pub fn with_children(name: &str, children: Vec<MockElement>) -> Self {
        let element = Self::new(name);
        element.state.responder.returns(children);
        element
    }

    pub fn requests(&self) -> Vec<Criterion> {
        self.state.responder.requests()
    }

    pub fn was_clicked(&self) -> bool {
        *self.state.clicked.lock().unwrap()
    }

    fn take<T: Clone>(
        slot: &Mutex<Option<Result<T, ProviderError>>>,
        default: T,
    ) -> Result<T, ProviderError> {
        slot.lock().unwrap().clone().unwrap_or(Ok(default))
    }
}

pub fn names(elements: &[MockElement]) -> Vec<&str> {
    elements.iter().map(|e| e.name.as_str()).collect()
}

#[async_trait]
impl ElementProvider for MockElement {
    type Handle = MockElement;

    async fn resolve_criterion(
        &self,
        criterion: &Criterion,
    ) -> Result<Vec<MockElement>, ProviderError> {
        self.state.responder.respond(criterion)
    }
}

#[async_trait]
impl ElementHandle for MockElement {
    async fn is_equal_to(&self, other: &Self) -> Result<bool, ProviderError> {
        *self.state.compared_with.lock().unwrap() = Some(other.name.clone());
        Self::take(&self.state.equal, self.name == other.name)
    }

    async fn text(&self) -> Result<String, ProviderError> {
        self.state.queried.lock().unwrap().push("text".into());
        Self::take(&self.state.text, String::new())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, ProviderError> {
        self.state.queried.lock().unwrap().push(format!("attribute:{}", name));
        Self::take(&self.state.attribute, None)
    }

    async fn css_value(&self, property: &str) -> Result<String, ProviderError> {
        self.state.queried.lock().unwrap().push(format!("css:{}", property));
        Self::take(&self.state.css, String::new())
    }

    async fn is_selected(&self) -> Result<bool, ProviderError> {
        Self::take(&self.state.selected, true)
    }

    async fn is_enabled(&self) -> Result<bool, ProviderError> {
        Self::take(&self.state.enabled, true)
    }

    async fn click(&self) -> Result<(), ProviderError> {
        *self.state.clicked.lock().unwrap() = true;
        Ok(())
    }
}
