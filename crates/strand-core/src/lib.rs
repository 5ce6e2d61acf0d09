pub mod chain;
pub mod criterion;
pub mod describe;
pub mod error;
pub mod guard;
pub mod provider;
pub mod resolver;
pub mod selection;

pub use chain::Chain;
pub use criterion::{Criterion, Strategy};
pub use describe::render;
pub use error::{Error, ProviderError, SelectionError};
pub use guard::{select_multiple, select_one};
pub use provider::{ElementHandle, ElementProvider};
pub use resolver::resolve;
pub use selection::Selection;
