use rand::rngs::StdRng;

use super::ParamGen;

/// A parameter generator that delegates the generation to a chain of parameter generators.
///
/// Each generator in the chain knows how many values it owns, once it runs out the next one
/// takes over, so a single `sample` call may be served by several generators.
pub struct ChainedParamGen {
    param_gens: Vec<Box<dyn ParamGen>>,
    curr: usize,
}

impl ChainedParamGen {
    /// Creates a new `ChainedParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `param_gens` - The generators to drain, in order.
    pub fn new(param_gens: Vec<Box<dyn ParamGen>>) -> Self {
        Self {
            param_gens,
            curr: 0,
        }
    }
}

impl ParamGen for ChainedParamGen {
    fn sample(&mut self, rng: &mut StdRng, n: usize) -> Option<Vec<f32>> {
        if self.curr == self.param_gens.len() {
            return None;
        }

        let mut sample = Vec::with_capacity(n);

        while sample.len() < n && self.curr < self.param_gens.len() {
            let missing = n - sample.len();

            match self.param_gens[self.curr].sample(rng, missing) {
                Some(values) if values.len() == missing => sample.extend(values),
                Some(values) => {
                    sample.extend(values);
                    self.curr += 1;
                }
                None => self.curr += 1,
            }
        }

        (n == 0 || !sample.is_empty()).then_some(sample)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::{
        super::{ParamBlock, Sampler},
        *,
    };

    fn consts(values: &[(f32, usize)]) -> Vec<Box<dyn ParamGen>> {
        values
            .iter()
            .map(|&(value, len)| {
                Box::new(ParamBlock::new(Sampler::Const(value), len)) as Box<dyn ParamGen>
            })
            .collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn empty() {
        let mut param_gen = ChainedParamGen::new(vec![]);
        assert!(param_gen.sample(&mut rng(), 1).is_none());
    }

    #[test]
    fn crosses_boundaries() {
        let mut rng = rng();
        let mut param_gen = ChainedParamGen::new(consts(&[(0., 2), (1., 3)]));

        assert_eq!(param_gen.sample(&mut rng, 5).unwrap(), [0., 0., 1., 1., 1.]);
        assert!(param_gen.sample(&mut rng, 1).is_none());
    }

    #[test]
    fn partial() {
        let mut rng = rng();
        let mut param_gen = ChainedParamGen::new(consts(&[(0., 1), (1., 3)]));

        assert_eq!(param_gen.sample(&mut rng, 3).unwrap(), [0., 1., 1.]);
        assert_eq!(param_gen.sample(&mut rng, 3).unwrap(), [1.]);
        assert!(param_gen.sample(&mut rng, 1).is_none());
    }

    #[test]
    fn skips_exhausted() {
        let mut param_gen = ChainedParamGen::new(consts(&[(0., 0), (1., 2)]));
        assert_eq!(param_gen.sample(&mut rng(), 2).unwrap(), [1., 1.]);
    }

    #[test]
    fn nested() {
        let mut rng = rng();
        let inner = ChainedParamGen::new(consts(&[(1., 1), (2., 1)]));

        let mut param_gens = consts(&[(0., 1)]);
        param_gens.push(Box::new(inner));
        param_gens.extend(consts(&[(3., 1)]));

        let mut param_gen = ChainedParamGen::new(param_gens);
        assert_eq!(param_gen.sample(&mut rng, 4).unwrap(), [0., 1., 2., 3.]);
        assert!(param_gen.sample(&mut rng, 1).is_none());
    }
}
