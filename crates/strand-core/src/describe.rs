use crate::chain::Chain;

/// Renders a chain for diagnostics, e.g. `CSS: #a [1] | XPath: //b - All`.
///
/// Every error produced by this crate embeds this rendering verbatim.
pub fn render(chain: &Chain) -> String {
    let rendered = chain
        .criteria()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ");

    if chain.accepts_all() {
        format!("{} - All", rendered)
    } else {
        rendered
    }
}
