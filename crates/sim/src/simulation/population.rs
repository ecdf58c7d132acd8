//! Population management and operations.
//!
//! A population is a fixed number of lineage slots. Extinction marks slots
//! dead and recolonization overwrites dead slots in place, so the slot count
//! never changes over a run.

use crate::genome::Lineage;
use crate::simulation::ExtinctionPolicy;
use rand::Rng;

/// A fixed-capacity population of lineages.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    lineages: Vec<Lineage>,
}

impl Population {
    /// Create a population from explicit lineages.
    pub fn new(lineages: Vec<Lineage>) -> Self {
        Self { lineages }
    }

    /// Sample `size` living founder lineages.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        size: usize,
        trait_space: u64,
        cryptic_size: usize,
    ) -> Self {
        let lineages = (0..size)
            .map(|_| Lineage::random(rng, trait_space, cryptic_size))
            .collect();
        Self { lineages }
    }

    /// Number of slots, alive or dead.
    pub fn capacity(&self) -> usize {
        self.lineages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineages.is_empty()
    }

    pub fn lineages(&self) -> &[Lineage] {
        &self.lineages
    }

    /// Mutable access to the slots. The slot count cannot be changed through it.
    pub fn lineages_mut(&mut self) -> &mut [Lineage] {
        &mut self.lineages
    }

    pub fn get(&self, index: usize) -> Option<&Lineage> {
        self.lineages.get(index)
    }

    /// Overwrite slot `index` with `lineage`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, lineage: Lineage) {
        self.lineages[index] = lineage;
    }

    /// Count of living lineages.
    pub fn diversity(&self) -> usize {
        self.lineages.iter().filter(|l| l.is_alive()).count()
    }

    /// Count of dead slots.
    pub fn empty_slots(&self) -> usize {
        self.capacity() - self.diversity()
    }

    /// Total expressed traits beyond baseline, over living lineages.
    pub fn innovation(&self) -> usize {
        self.lineages
            .iter()
            .filter(|l| l.is_alive())
            .map(Lineage::innovation)
            .sum()
    }

    /// Slot indices of living lineages, in slot order.
    pub fn alive_indices(&self) -> Vec<usize> {
        self.indices_where(true)
    }

    /// Slot indices of dead lineages, in slot order.
    pub fn dead_indices(&self) -> Vec<usize> {
        self.indices_where(false)
    }

    fn indices_where(&self, alive: bool) -> Vec<usize> {
        self.lineages
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_alive() == alive)
            .map(|(i, _)| i)
            .collect()
    }

    /// Kill a fraction of the living lineages. Returns the number killed.
    pub fn extinction_pulse<R: Rng + ?Sized>(
        &mut self,
        policy: ExtinctionPolicy,
        fraction: f64,
        rng: &mut R,
    ) -> usize {
        match policy {
            ExtinctionPolicy::Bernoulli => {
                let mut killed = 0;
                for lineage in self.lineages.iter_mut().filter(|l| l.is_alive()) {
                    if rng.random::<f64>() < fraction {
                        lineage.kill();
                        killed += 1;
                    }
                }
                killed
            }
            ExtinctionPolicy::Truncation => {
                let quota = (self.diversity() as f64 * fraction).floor() as usize;
                let mut killed = 0;
                for lineage in self
                    .lineages
                    .iter_mut()
                    .filter(|l| l.is_alive())
                    .take(quota)
                {
                    lineage.kill();
                    killed += 1;
                }
                killed
            }
        }
    }
}

/// Number of dead slots refilled in one generation.
///
/// `round(rate * empty_slots)`, rounding halves to even, capped at
/// `empty_slots`.
pub fn birth_quota(empty_slots: usize, rate: f64) -> usize {
    let target = (rate * empty_slots as f64).round_ties_even();
    if target <= 0.0 {
        0
    } else {
        (target as usize).min(empty_slots)
    }
}
