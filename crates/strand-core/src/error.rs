use thiserror::Error;

/// Failure reported by a provider or element handle.
///
/// The engine never inspects or reclassifies these, it only wraps them with
/// the rendering of the selection involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport or remote-side failure, rendered verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}

impl ProviderError {
    pub fn backend(message: impl Into<String>) -> Self {
        ProviderError::Backend(message.into())
    }
}

/// Why a chain could not be turned into the requested elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("empty selection")]
    EmptySelection,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("element index {index} out of range (>{max})", max = last_index(.count))]
    IndexOutOfRange { index: usize, count: usize },

    #[error("no elements found")]
    NoElementsFound,

    #[error("no element found")]
    NoElementFound,

    #[error("multiple elements ({count}) were selected")]
    MultipleElements { count: usize },

    #[error("method requires All() for multiple elements ({count})")]
    RequiresAll { count: usize },

    #[error("method does not support All()")]
    AllNotSupported,
}

fn last_index(count: &usize) -> i64 {
    *count as i64 - 1
}

/// Public error type. Every variant carries the rendering of the selection it
/// concerns.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("failed to retrieve element with '{selection}': {source}")]
    Element {
        selection: String,
        source: SelectionError,
    },

    #[error("failed to retrieve elements with '{selection}': {source}")]
    Elements {
        selection: String,
        source: SelectionError,
    },

    #[error("failed to compare '{selection}' to '{other}': {source}")]
    Compare {
        selection: String,
        other: String,
        source: ProviderError,
    },

    #[error("provided object is not a selection")]
    NotComparable,

    #[error("failed to retrieve text for '{selection}': {source}")]
    Text {
        selection: String,
        source: ProviderError,
    },

    #[error("failed to retrieve {property} value for '{selection}': {source}")]
    Property {
        property: &'static str,
        selection: String,
        source: ProviderError,
    },

    #[error("failed to determine whether some '{selection}' is {state}: {source}")]
    State {
        state: &'static str,
        selection: String,
        source: ProviderError,
    },

    #[error("failed to click on '{selection}': {source}")]
    Click {
        selection: String,
        source: ProviderError,
    },
}

impl Error {
    /// The underlying selection failure, for errors raised while resolving.
    pub fn selection_error(&self) -> Option<&SelectionError> {
        match self {
            Error::Element { source, .. } | Error::Elements { source, .. } => Some(source),
            _ => None,
        }
    }
}
