//! Runs one selection against a provider and collects the results into a
//! report.

use serde::Serialize;
use std::fmt::Display;
use std::future::Future;
use strand_core::{ElementProvider, Error, Selection};
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum State {
    Visible,
    Enabled,
    Selected,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Visible => "visible",
            State::Enabled => "enabled",
            State::Selected => "selected",
        }
    }
}

/// What to read from the selection besides its match count.
#[derive(Debug, Clone, Default)]
pub struct ProbeRequest {
    pub text: bool,
    pub attribute: Option<String>,
    pub css_property: Option<String>,
    pub state: Option<State>,
    pub click: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub selection: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<NamedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<NamedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<NamedState>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub clicked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedState {
    pub name: &'static str,
    pub value: bool,
}

/// Count the selection, then run each requested read in a fixed order. The
/// click, if requested, runs last.
pub async fn run<P>(selection: &Selection<P>, request: &ProbeRequest) -> Result<Report, Error>
where
    P: ElementProvider + ?Sized,
{
    debug!(selection = %selection, "probing");

    let mut report = Report {
        selection: selection.to_string(),
        count: selection.count().await?,
        ..Report::default()
    };

    if request.text {
        report.text = Some(selection.text().await?);
    }

    if let Some(name) = &request.attribute {
        report.attribute = Some(NamedValue {
            name: name.clone(),
            value: selection.attribute(name).await?,
        });
    }

    if let Some(name) = &request.css_property {
        report.css = Some(NamedValue {
            name: name.clone(),
            value: selection.css(name).await?,
        });
    }

    if let Some(state) = request.state {
        let value = match state {
            State::Visible => selection.visible().await?,
            State::Enabled => selection.enabled().await?,
            State::Selected => selection.selected().await?,
        };
        report.state = Some(NamedState {
            name: state.name(),
            value,
        });
    }

    if request.click {
        selection.click().await?;
        report.clicked = true;
    }

    Ok(report)
}

/// Awaits `close` whether or not `outcome` failed, then returns `outcome`.
/// A failing close is logged and never replaces the outcome.
pub async fn close_after<T, C, E>(outcome: anyhow::Result<T>, close: C) -> anyhow::Result<T>
where
    C: Future<Output = Result<(), E>>,
    E: Display,
{
    if let Err(e) = close.await {
        error!("{}", e);
    }
    outcome
}
