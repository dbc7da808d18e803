use rand::rngs::StdRng;

/// A source of initial parameter values.
///
/// The random number generator is owned by the initialization run and lent on every call, so
/// the order in which generators are drained fixes the values each one gets.
pub trait ParamGen {
    /// Draws at most `n` values, `None` once the generator has nothing left.
    fn sample(&mut self, rng: &mut StdRng, n: usize) -> Option<Vec<f32>>;
}
