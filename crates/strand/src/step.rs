//! Command-line chain steps.
//!
//! Each step is one builder call: `css=<sel>`, `xpath=<expr>`, `link=<text>`,
//! `label=<text>`, `at=<n>` or `all`. Steps apply left to right.

use std::str::FromStr;
use strand_core::Chain;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Css(String),
    XPath(String),
    Link(String),
    Label(String),
    At(usize),
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("unknown step '{0}' (expected css=, xpath=, link=, label=, at= or all)")]
    Unknown(String),
    #[error("invalid index '{0}'")]
    InvalidIndex(String),
    #[error("step '{0}' needs a value")]
    MissingValue(String),
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Step::All);
        }

        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| StepError::Unknown(s.to_string()))?;

        if value.is_empty() {
            return Err(StepError::MissingValue(kind.to_string()));
        }

        match kind {
            "css" => Ok(Step::Css(value.to_string())),
            "xpath" => Ok(Step::XPath(value.to_string())),
            "link" => Ok(Step::Link(value.to_string())),
            "label" => Ok(Step::Label(value.to_string())),
            "at" => value
                .parse()
                .map(Step::At)
                .map_err(|_| StepError::InvalidIndex(value.to_string())),
            _ => Err(StepError::Unknown(s.to_string())),
        }
    }
}

impl Step {
    pub fn apply(&self, chain: &Chain) -> Chain {
        match self {
            Step::Css(selector) => chain.find(selector),
            Step::XPath(selector) => chain.find_xpath(selector),
            Step::Link(text) => chain.find_link(text),
            Step::Label(text) => chain.find_by_label(text),
            Step::At(index) => chain.at(*index),
            Step::All => chain.all(),
        }
    }
}

/// Parse and apply steps to the empty chain.
pub fn build_chain<S: AsRef<str>>(steps: &[S]) -> Result<Chain, StepError> {
    steps.iter().try_fold(Chain::new(), |chain, raw| {
        let step: Step = raw.as_ref().parse()?;
        Ok(step.apply(&chain))
    })
}
