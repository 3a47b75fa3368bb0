use std::ops::{Deref, RangeInclusive};

use rand::Rng;

/// Stores an integer polynomial in dense coefficient form.
///
/// The coefficient of `x^i` is stored at location `i` in `self.coeffs`. The
/// list is always normalized: either it is empty (the zero polynomial) or its
/// last entry is non-zero, so the degree can be read off as `len - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polynomial {
    /// Coefficients in order of ascending degree, trailing zeros removed.
    coeffs: Vec<i64>,
}

impl Polynomial {
    /// Constructs a new polynomial from a list of coefficients.
    ///
    /// Trailing zero coefficients are removed, so an all-zero input collapses
    /// to the zero polynomial rather than keeping a phantom degree.
    #[must_use]
    pub fn new(coeffs: Vec<i64>) -> Self {
        let mut result = Self { coeffs };
        result.truncate_trailing_zeros();
        result
    }

    /// Constructs a new polynomial from a slice of coefficients.
    #[must_use]
    pub fn from_coefficients_slice(coeffs: &[i64]) -> Self {
        Self::new(coeffs.to_vec())
    }

    /// The zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// While there are zeros at the end of the coefficient vector, pop them off.
    fn truncate_trailing_zeros(&mut self) {
        while self.coeffs.last().is_some_and(|&c| c == 0) {
            self.coeffs.pop();
        }
    }

    /// Checks if the given polynomial is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Highest exponent with a non-zero coefficient.
    ///
    /// The zero polynomial reports degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Coefficients in order of ascending degree.
    #[must_use]
    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Evaluates `self` at the given `point` using Horner's method.
    #[must_use]
    pub fn evaluate(&self, point: i64) -> i64 {
        self.coeffs
            .iter()
            .rfold(0, |result, &coeff| result * point + coeff)
    }

    /// Draws a random polynomial whose degree is uniform in `degrees` and
    /// whose coefficients are uniform in `coefficients`.
    ///
    /// The leading coefficient is redrawn until it is non-zero, so the drawn
    /// degree is the true degree. If the coefficient range only contains
    /// zero, the result degenerates to the zero polynomial.
    pub fn random<R: Rng>(
        rng: &mut R,
        degrees: RangeInclusive<usize>,
        coefficients: RangeInclusive<i64>,
    ) -> Self {
        let degree = rng.random_range(degrees);
        let mut coeffs: Vec<i64> = (0..=degree)
            .map(|_| rng.random_range(coefficients.clone()))
            .collect();
        if *coefficients.start() != 0 || *coefficients.end() != 0 {
            while coeffs[degree] == 0 {
                coeffs[degree] = rng.random_range(coefficients.clone());
            }
        }
        Self::new(coeffs)
    }
}

impl Deref for Polynomial {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        &self.coeffs
    }
}
