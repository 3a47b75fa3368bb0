//! Recursive radix-2 Fast Fourier Transform and the polynomial
//! multiplication built on top of it.
//!
//! Multiplication runs in O(n log n): both operands are zero-padded to the
//! next power of two, transformed, multiplied pointwise and transformed
//! back. The true product coefficients are integers and the round-trip
//! error stays well below 0.5 for the supported degree and coefficient
//! ranges, so rounding the real parts recovers the exact result.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::poly::dense::Polynomial;

/// Multiplies two integer polynomials via transform-domain convolution.
#[must_use]
pub fn multiply(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
    if lhs.is_zero() || rhs.is_zero() {
        return Polynomial::zero();
    }

    // Smallest power of two that holds the full convolution.
    let size = (lhs.len() + rhs.len()).next_power_of_two();
    let lhs_transformed = forward(&pad(lhs.coeffs(), size));
    let rhs_transformed = forward(&pad(rhs.coeffs(), size));

    let pointwise: Vec<Complex64> = lhs_transformed
        .iter()
        .zip(&rhs_transformed)
        .map(|(a, b)| a * b)
        .collect();

    // Round on the full length; trimming is left to the normalizing
    // constructor.
    let coeffs: Vec<i64> = inverse(&pointwise)
        .iter()
        .map(|value| value.re.round() as i64)
        .collect();
    Polynomial::new(coeffs)
}

/// Computes the forward transform of `values` by recursive radix-2
/// decimation in time.
///
/// The length must be a power of two. A length-1 sequence is its own
/// transform; longer sequences split by index parity, transform both
/// halves, and recombine with the butterfly
/// `even[k] ± ω^k · odd[k]` where `ω^k = exp(2πik/len)`.
#[must_use]
pub fn forward(values: &[Complex64]) -> Vec<Complex64> {
    let size = values.len();
    debug_assert!(size.is_power_of_two());
    if size == 1 {
        return values.to_vec();
    }

    let even: Vec<Complex64> = values.iter().copied().step_by(2).collect();
    let odd: Vec<Complex64> = values.iter().copied().skip(1).step_by(2).collect();
    let even = forward(&even);
    let odd = forward(&odd);

    let mut result = vec![Complex64::new(0.0, 0.0); size];
    for k in 0..size / 2 {
        let twisted = root_of_unity(size, k) * odd[k];
        result[k] = even[k] + twisted;
        result[k + size / 2] = even[k] - twisted;
    }
    result
}

/// Computes the inverse transform of `values`.
///
/// Uses the conjugation identity: conjugate the input, apply the forward
/// transform, conjugate again and scale by `1/len`. This avoids a second,
/// separately coded transform routine.
#[must_use]
pub fn inverse(values: &[Complex64]) -> Vec<Complex64> {
    let scale = values.len() as f64;
    let conjugated: Vec<Complex64> = values.iter().map(|value| value.conj()).collect();
    forward(&conjugated)
        .iter()
        .map(|value| value.conj() / scale)
        .collect()
}

/// The k-th power of the primitive `size`-th root of unity, `exp(2πik/size)`.
fn root_of_unity(size: usize, k: usize) -> Complex64 {
    Complex64::from_polar(1.0, 2.0 * PI * k as f64 / size as f64)
}

/// Zero-pads a copy of `coeffs` to `size` complex entries.
///
/// Padding works on a fresh buffer so callers never observe their
/// coefficient data being resized.
fn pad(coeffs: &[i64], size: usize) -> Vec<Complex64> {
    debug_assert!(size >= coeffs.len());
    let mut padded = vec![Complex64::new(0.0, 0.0); size];
    for (slot, &coeff) in padded.iter_mut().zip(coeffs) {
        *slot = Complex64::new(coeff as f64, 0.0);
    }
    padded
}
