//! Cardinality checks between the resolver and element consumers.

use crate::chain::Chain;
use crate::error::{Error, SelectionError};
use crate::provider::ElementProvider;
use crate::resolver::resolve;

/// Resolve a chain that must match exactly one element.
///
/// Chains in All mode are rejected before anything is resolved.
pub async fn select_one<P>(root: &P, chain: &Chain) -> Result<P::Handle, Error>
where
    P: ElementProvider + ?Sized,
{
    single(root, chain).await.map_err(|source| Error::Element {
        selection: chain.to_string(),
        source,
    })
}

/// Resolve a chain that must match at least one element, and more than one
/// only in All mode.
pub async fn select_multiple<P>(root: &P, chain: &Chain) -> Result<Vec<P::Handle>, Error>
where
    P: ElementProvider + ?Sized,
{
    multiple(root, chain).await.map_err(|source| Error::Elements {
        selection: chain.to_string(),
        source,
    })
}

async fn single<P>(root: &P, chain: &Chain) -> Result<P::Handle, SelectionError>
where
    P: ElementProvider + ?Sized,
{
    if chain.accepts_all() {
        return Err(SelectionError::AllNotSupported);
    }

    let mut elements = resolve(root, chain).await?;
    match elements.len() {
        0 => Err(SelectionError::NoElementFound),
        1 => Ok(elements.remove(0)),
        count => Err(SelectionError::MultipleElements { count }),
    }
}

async fn multiple<P>(root: &P, chain: &Chain) -> Result<Vec<P::Handle>, SelectionError>
where
    P: ElementProvider + ?Sized,
{
    let elements = resolve(root, chain).await?;
    match elements.len() {
        0 => Err(SelectionError::NoElementsFound),
        count if count > 1 && !chain.accepts_all() => Err(SelectionError::RequiresAll { count }),
        _ => Ok(elements),
    }
}
