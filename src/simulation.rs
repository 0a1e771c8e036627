//! Smooth Gaussian fields and Monte-Carlo null distributions of max d.
//!
//! Used to check field-maximum probabilities empirically: simulate many
//! null experiments, record the largest d-value of each, and compare the
//! empirical survival curve with [`d2p`](crate::d2p).

use nalgebra::DMatrix;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::constants::FOUR_LN2;
use crate::error::{Error, Result};
use crate::statistics::{d_one_sample, d_two_sample};
use crate::thread_pool;
use crate::types::{Design, SampleSize};

/// Kernel half-widths beyond this many domain lengths are truncated.
const MAX_KERNEL_SPAN: usize = 8;

/// Counter-based seed derivation (SplitMix64).
///
/// Gives each simulation iteration an independent, reproducible stream
/// regardless of how iterations are scheduled across threads.
#[inline]
pub fn counter_rng_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Draw `n` smooth, unit-variance Gaussian fields of length `q`.
///
/// White noise is convolved with a Gaussian kernel of standard deviation
/// `fwhm / sqrt(8 ln 2)` and rescaled to unit variance. `fwhm = 0` gives
/// white noise and `fwhm = ∞` gives rows that are constant along the domain.
///
/// # Errors
///
/// `InvalidSmoothness` for a negative or NaN FWHM.
pub fn randn1d<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    q: usize,
    fwhm: f64,
) -> Result<DMatrix<f64>> {
    if fwhm.is_nan() || fwhm < 0.0 {
        return Err(Error::InvalidSmoothness { q, fwhm });
    }
    if fwhm == 0.0 {
        return Ok(DMatrix::from_fn(n, q, |_, _| rng.sample(StandardNormal)));
    }
    if fwhm.is_infinite() {
        let levels: Vec<f64> = (0..n).map(|_| rng.sample(StandardNormal)).collect();
        return Ok(DMatrix::from_fn(n, q, |i, _| levels[i]));
    }

    let sigma = fwhm / (2.0 * FOUR_LN2).sqrt();
    let half = ((4.0 * sigma).ceil() as usize).clamp(1, MAX_KERNEL_SPAN * q.max(1));
    let kernel: Vec<f64> = (0..=2 * half)
        .map(|j| {
            let x = j as f64 - half as f64;
            (-0.5 * (x / sigma).powi(2)).exp()
        })
        .collect();
    let scale = kernel.iter().map(|k| k * k).sum::<f64>().sqrt();

    let mut y = DMatrix::zeros(n, q);
    let mut noise = vec![0.0_f64; q + 2 * half];
    for i in 0..n {
        noise.iter_mut().for_each(|z| *z = rng.sample(StandardNormal));
        for j in 0..q {
            let s: f64 = kernel
                .iter()
                .zip(&noise[j..j + kernel.len()])
                .map(|(k, z)| k * z)
                .sum();
            y[(i, j)] = s / scale;
        }
    }
    Ok(y)
}

/// Monte-Carlo null distribution of the maximum d-value over a smooth
/// Gaussian field.
#[derive(Debug, Clone)]
pub struct MaxEffectSimulation {
    design: Design,
    sample_size: SampleSize,
    q: usize,
    fwhm: f64,
    iterations: usize,
    seed: u64,
}

impl MaxEffectSimulation {
    /// Simulate `design` with `sample_size` observations over `q` nodes.
    ///
    /// Defaults: FWHM 20, 1000 iterations, seed 42.
    pub fn new(design: Design, sample_size: impl Into<SampleSize>, q: usize) -> Self {
        Self {
            design,
            sample_size: sample_size.into(),
            q,
            fwhm: 20.0,
            iterations: 1000,
            seed: 42,
        }
    }

    /// Set the field smoothness.
    pub fn fwhm(mut self, fwhm: f64) -> Self {
        self.fwhm = fwhm;
        self
    }

    /// Set the number of simulated experiments.
    pub fn iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Set the base seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn groups(&self) -> Result<(usize, usize)> {
        self.sample_size.dof(self.design)?;
        let (n0, n1) = self.sample_size.groups(self.design)?;
        Ok((n0 as usize, n1 as usize))
    }

    fn max_d(&self, iteration: u64, n0: usize, n1: usize) -> Result<f64> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(self.seed, iteration));
        let d = match self.design {
            Design::OneSample => d_one_sample(&randn1d(&mut rng, n0, self.q, self.fwhm)?, 0.0)?,
            Design::TwoSample => {
                let y0 = randn1d(&mut rng, n0, self.q, self.fwhm)?;
                let y1 = randn1d(&mut rng, n1, self.q, self.fwhm)?;
                d_two_sample(&y0, &y1)?
            }
        };
        Ok(d.max())
    }

    /// Run the simulation, returning the maximum d of each experiment.
    ///
    /// Results depend only on the seed, not on thread scheduling.
    pub fn run(&self) -> Result<Vec<f64>> {
        if self.q == 0 {
            return Err(Error::InvalidSmoothness {
                q: self.q,
                fwhm: self.fwhm,
            });
        }
        let (n0, n1) = self.groups()?;

        tracing::debug!(
            design = %self.design,
            n0,
            n1,
            q = self.q,
            fwhm = self.fwhm,
            iterations = self.iterations,
            "running max-d simulation"
        );

        #[cfg(feature = "parallel")]
        let samples = thread_pool::install(|| {
            (0..self.iterations as u64)
                .into_par_iter()
                .map(|i| self.max_d(i, n0, n1))
                .collect::<Result<Vec<f64>>>()
        });

        #[cfg(not(feature = "parallel"))]
        let samples = thread_pool::install(|| {
            (0..self.iterations as u64)
                .map(|i| self.max_d(i, n0, n1))
                .collect::<Result<Vec<f64>>>()
        });

        samples
    }
}

/// Fraction of `samples` strictly above each threshold.
pub fn empirical_sf(samples: &[f64], thresholds: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return vec![f64::NAN; thresholds.len()];
    }
    let n = samples.len() as f64;
    thresholds
        .iter()
        .map(|&u| samples.iter().filter(|&&x| x > u).count() as f64 / n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_seeds_distinct() {
        let a = counter_rng_seed(42, 0);
        let b = counter_rng_seed(42, 1);
        let c = counter_rng_seed(43, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, counter_rng_seed(42, 0));
    }

    #[test]
    fn test_randn1d_shapes_and_limits() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let y = randn1d(&mut rng, 5, 30, 10.0).unwrap();
        assert_eq!(y.shape(), (5, 30));

        let flat = randn1d(&mut rng, 3, 10, f64::INFINITY).unwrap();
        for i in 0..3 {
            assert!(flat.row(i).iter().all(|&x| x == flat[(i, 0)]));
        }

        assert!(randn1d(&mut rng, 3, 10, -1.0).is_err());
    }

    #[test]
    fn test_randn1d_unit_variance() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let y = randn1d(&mut rng, 2000, 20, 5.0).unwrap();
        let var = y.iter().map(|x| x * x).sum::<f64>() / y.len() as f64;
        assert!((var - 1.0).abs() < 0.1, "variance {}", var);
    }

    #[test]
    fn test_simulation_deterministic() {
        let sim = MaxEffectSimulation::new(Design::OneSample, 8_usize, 21)
            .fwhm(5.0)
            .iterations(16)
            .seed(9);
        let a = sim.run().unwrap();
        let b = sim.run().unwrap();
        assert_eq!(a.len(), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulation_rejects_odd_total() {
        let sim = MaxEffectSimulation::new(Design::TwoSample, 9_usize, 21);
        assert_eq!(sim.run(), Err(Error::InvalidSampleSizeParity(9)));
    }

    #[test]
    fn test_empirical_sf() {
        let samples = [0.1, 0.5, 0.9, 1.3];
        assert_eq!(empirical_sf(&samples, &[0.0, 0.5, 2.0]), vec![1.0, 0.5, 0.0]);
    }
}
