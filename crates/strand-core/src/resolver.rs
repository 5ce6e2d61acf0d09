use crate::chain::Chain;
use crate::criterion::Criterion;
use crate::error::SelectionError;
use crate::provider::ElementProvider;
use tracing::{debug, trace};

/// Resolve a chain against a root provider.
///
/// The first criterion is resolved under `root`. Each following criterion is
/// resolved under every element of the previous level, in order, and the
/// results are concatenated parent by parent. Providers are queried one at a
/// time and nothing is cached between calls.
pub async fn resolve<P>(root: &P, chain: &Chain) -> Result<Vec<P::Handle>, SelectionError>
where
    P: ElementProvider + ?Sized,
{
    let (first, rest) = chain
        .criteria()
        .split_first()
        .ok_or(SelectionError::EmptySelection)?;

    debug!(selection = %chain, levels = chain.criteria().len(), "resolving selection");

    let mut current = resolve_level(root, first).await?;
    trace!(level = 0, candidates = current.len());

    for (depth, criterion) in rest.iter().enumerate() {
        let mut next = Vec::new();
        for parent in &current {
            next.extend(resolve_level(parent, criterion).await?);
        }
        trace!(level = depth + 1, candidates = next.len());
        current = next;
    }

    Ok(current)
}

/// Resolve one criterion under `provider` and apply its index, if any.
async fn resolve_level<P>(
    provider: &P,
    criterion: &Criterion,
) -> Result<Vec<P::Handle>, SelectionError>
where
    P: ElementProvider + ?Sized,
{
    let mut elements = provider.resolve_criterion(criterion).await?;

    let Some(index) = criterion.index else {
        return Ok(elements);
    };

    if index >= elements.len() {
        return Err(SelectionError::IndexOutOfRange {
            index,
            count: elements.len(),
        });
    }

    Ok(vec![elements.swap_remove(index)])
}
