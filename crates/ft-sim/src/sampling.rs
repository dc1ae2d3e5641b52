use ft_core::NedVector;
use rand::Rng;
use rand::rngs::StdRng;
use rand_distr::StandardNormal;

/// Draw an independent Gaussian offset per axis, each with the given
/// standard deviation.
pub fn gaussian_offset(rng: &mut StdRng, std: f64) -> NedVector {
    NedVector::new(
        std * standard_normal(rng),
        std * standard_normal(rng),
        std * standard_normal(rng),
    )
}

/// Draw a travel distance from `Normal(mean, std)`, clamping negative
/// draws to zero. Clamped draws are kept, not resampled, so the empirical
/// mean sits slightly above `mean` when `mean` is small relative to `std`.
pub fn travel_distance(rng: &mut StdRng, mean: f64, std: f64) -> f64 {
    (mean + std * standard_normal(rng)).max(0.0)
}

/// Draw a direction as an independent Gaussian triple normalized to unit
/// length. This is not a uniform sampling of the sphere; downstream
/// output depends on this exact draw sequence.
pub fn unit_direction(rng: &mut StdRng) -> NedVector {
    let raw = NedVector::new(
        standard_normal(rng),
        standard_normal(rng),
        standard_normal(rng),
    );
    raw * (1.0 / raw.norm())
}

fn standard_normal(rng: &mut StdRng) -> f64 {
    rng.sample(StandardNormal)
}
