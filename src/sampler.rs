use rand::Rng;

use crate::catalog::Merchant;

/// Pick one merchant, biased by frequency class: cumulative weights over the
/// catalog, one uniform draw scaled by the total. Over many calls the
/// selection probability of each merchant is its weight over the catalog
/// total. If rounding leaves the draw past every cumulative weight, the
/// first entry wins.
///
/// Precondition: `catalog` is non-empty (enforced by `catalog::validate`).
pub fn sample_merchant<'a>(catalog: &'a [Merchant], rng: &mut impl Rng) -> &'a Merchant {
    let total: f64 = catalog.iter().map(|m| m.frequency.weight()).sum();
    let draw = rng.gen_range(0.0..total);

    let mut cumulative = 0.0;
    for merchant in catalog {
        cumulative += merchant.frequency.weight();
        if draw <= cumulative {
            return merchant;
        }
    }
    &catalog[0]
}
