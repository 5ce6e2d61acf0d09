pub mod provider;
pub mod session;

pub use provider::{WebDriverElement, WebDriverRoot};
pub use session::{SessionError, WebDriverSession};
