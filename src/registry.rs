//! Registry of benchmarkable kernels.
//!
//! Each kernel exposes its implementation variants through
//! [`AlgorithmRunner`] so the CLI can verify and measure them uniformly.

use crate::utils::bench::Measurement;

pub use crate::utils::timer::VariantResult as BenchmarkResult;

/// One timed execution of a variant, as handed to the timer.
pub struct VariantClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Returns (measurement, optional result value)
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

impl<'a> From<VariantClosure<'a>> for crate::utils::timer::Variant<'a> {
    fn from(c: VariantClosure<'a>) -> Self {
        Self {
            name: c.name,
            description: c.description,
            run: c.run,
        }
    }
}

pub trait AlgorithmRunner: Send + Sync {
    /// Name of the kernel (e.g. "dot_product")
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Category (e.g. "math")
    fn category(&self) -> &'static str;

    fn available_variants(&self) -> Vec<&'static str>;

    /// Closures executing each variant once on inputs of `size` elements
    /// generated from `seed`. Warmup and repetition belong to the timer.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>>;

    /// Check every variant against the reference implementation
    fn verify(&self) -> Result<(), String>;
}

pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding every kernel of this crate
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::math::dot_product::DotProductRunner);
    registry.register(crate::math::simple_ols::SimpleOlsRunner);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = build_registry();
        assert_eq!(registry.list_names(), vec!["dot_product", "simple_ols"]);
        assert!(registry.find("simple_ols").is_some());
        assert!(registry.find("unknown").is_none());
        assert_eq!(registry.by_category("math").len(), 2);
        assert!(registry.by_category("random").is_empty());
    }

    #[test]
    fn test_every_algorithm_has_reference_variant() {
        for algo in build_registry().all() {
            assert_eq!(
                algo.available_variants().first(),
                Some(&"original"),
                "{} must list 'original' first",
                algo.name()
            );
        }
    }

    #[test]
    fn test_variant_closures_match_variant_list() {
        for algo in build_registry().all() {
            let names: Vec<_> = algo.get_variant_closures(64, 1).iter().map(|c| c.name).collect();
            assert_eq!(names, algo.available_variants());
        }
    }
}
