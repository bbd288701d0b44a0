use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating an approximation domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("domain bounds must be finite: [{a}, {b}]")]
    NonFinite { a: f64, b: f64 },

    #[error("domain must satisfy a < b: [{a}, {b}]")]
    Empty { a: f64, b: f64 },
}

/// Checks that `[a, b]` is a finite interval with `a < b`.
pub(super) fn check_domain(domain: [f64; 2]) -> Result<(), DomainError> {
    let [a, b] = domain;
    if !a.is_finite() || !b.is_finite() {
        return Err(DomainError::NonFinite { a, b });
    }
    if a >= b {
        return Err(DomainError::Empty { a, b });
    }
    Ok(())
}

/// A Chebyshev series `Σ cᵢ Tᵢ(z)` on the interval `[a, b]`.
///
/// Points of `[a, b]` are mapped onto `[-1, 1]` by
/// `z = 2 (x - a) / (b - a) - 1` before the series is evaluated.
///
/// Deserialization goes through [`Chebyshev::new`], so a series read from
/// data has a valid domain and at least one coefficient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "SeriesData")
)]
pub struct Chebyshev {
    domain: [f64; 2],
    coefficients: Vec<f64>,
}

/// Unchecked fields of a serialized [`Chebyshev`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SeriesData {
    domain: [f64; 2],
    coefficients: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<SeriesData> for Chebyshev {
    type Error = DomainError;

    fn try_from(data: SeriesData) -> Result<Self, Self::Error> {
        Self::new(data.domain, data.coefficients)
    }
}

impl Chebyshev {
    /// Creates a series from its coefficients, lowest degree first.
    ///
    /// An empty coefficient list is the zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns an error if `domain` is not a finite interval with `a < b`.
    pub fn new(domain: [f64; 2], coefficients: Vec<f64>) -> Result<Self, DomainError> {
        check_domain(domain)?;
        let coefficients = if coefficients.is_empty() {
            vec![0.0]
        } else {
            coefficients
        };
        Ok(Self {
            domain,
            coefficients,
        })
    }

    /// Returns the Chebyshev nodes of order `count` mapped onto `domain`.
    ///
    /// These are the zeros of `T_count`, in increasing order.
    #[must_use]
    pub fn nodes(count: usize, domain: [f64; 2]) -> Vec<f64> {
        let [a, b] = domain;
        unit_nodes(count)
            .map(|z| a + 0.5 * (z + 1.0) * (b - a))
            .collect()
    }

    /// Fits a degree-`degree` series to `values` sampled at the nodes of
    /// order `values.len()` on `domain`.
    ///
    /// With `degree + 1 == values.len()` this interpolates; with more values
    /// it is the least-squares fit, which the node orthogonality reduces to
    /// `cᵢ = Σ yₖ Tᵢ(zₖ) / Σ Tᵢ(zₖ)²`.
    pub(super) fn regress(domain: [f64; 2], degree: usize, values: &[f64]) -> Self {
        let mut numer = vec![0.0; degree + 1];
        let mut denom = vec![0.0; degree + 1];
        for (z, y) in unit_nodes(values.len()).zip(values) {
            // [T_i(z), T_{i+1}(z)]
            let mut t = [1.0, z];
            for (n, d) in numer.iter_mut().zip(&mut denom) {
                *n += y * t[0];
                *d += t[0] * t[0];
                t = [t[1], 2.0 * z * t[1] - t[0]];
            }
        }

        let coefficients = numer
            .iter()
            .zip(&denom)
            .map(|(n, d)| if *d > 0.0 { n / d } else { 0.0 })
            .collect();

        Self {
            domain,
            coefficients,
        }
    }

    /// Returns the approximation interval `[a, b]`.
    #[must_use]
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Returns the series coefficients, lowest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree of the series.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the series at `x` using Clenshaw's recurrence.
    ///
    /// Points outside the domain are extrapolated.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let z = self.to_unit(x);
        let (mut b1, mut b2) = (0.0, 0.0);
        for c in self.coefficients[1..].iter().rev() {
            (b1, b2) = (c + 2.0 * z * b1 - b2, b1);
        }
        self.coefficients[0] + z * b1 - b2
    }

    /// Returns the derivative series with respect to `x`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let n = self.degree();
        if n == 0 {
            return Self {
                domain: self.domain,
                coefficients: vec![0.0],
            };
        }

        let c = &self.coefficients;
        let mut d = vec![0.0; n + 1];
        for i in (1..=n).rev() {
            d[i - 1] = d.get(i + 1).copied().unwrap_or(0.0) + 2.0 * i as f64 * c[i];
        }
        d[0] *= 0.5;
        d.truncate(n);

        let [a, b] = self.domain;
        let scale = 2.0 / (b - a);
        for coefficient in &mut d {
            *coefficient *= scale;
        }

        Self {
            domain: self.domain,
            coefficients: d,
        }
    }

    fn to_unit(&self, x: f64) -> f64 {
        let [a, b] = self.domain;
        2.0 * (x - a) / (b - a) - 1.0
    }
}

/// Zeros of `T_count` on `[-1, 1]`, in increasing order.
fn unit_nodes(count: usize) -> impl Iterator<Item = f64> {
    let m = count as f64;
    (1..=count).map(move |k| -((2.0 * k as f64 - 1.0) * PI / (2.0 * m)).cos())
}
