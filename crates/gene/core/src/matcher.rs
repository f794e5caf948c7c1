//! Pattern matcher: locates catalog fragments inside a symbol sequence.
//!
//! Every template is tried at every offset and every exact match is kept,
//! overlapping ones included: a four-symbol template built from a repeated
//! shorter pattern matches alongside it.

use crate::base::BasePair;
use crate::catalog::CatalogOracle;
use crate::sequence::{FragmentInstanceId, GeneFragmentInstance};

/// Returns every exact template match in `bases`.
///
/// Results are ordered by catalog template order, then by ascending offset.
/// Instance ids are assigned sequentially starting at `first_id`.
pub fn find_fragments<C>(
    bases: &[BasePair],
    catalog: &C,
    first_id: FragmentInstanceId,
) -> Vec<GeneFragmentInstance>
where
    C: CatalogOracle + ?Sized,
{
    let mut next_id = first_id.0;
    let mut fragments = Vec::new();

    for template in catalog.templates() {
        let pattern = template.pattern.as_slice();
        if pattern.is_empty() || pattern.len() > bases.len() {
            continue;
        }

        for (start, window) in bases.windows(pattern.len()).enumerate() {
            if window == pattern {
                fragments.push(GeneFragmentInstance::new(
                    template.clone(),
                    FragmentInstanceId(next_id),
                    start,
                ));
                next_id = next_id.wrapping_add(1);
            }
        }
    }

    fragments
}
