use super::dense::Polynomial;

/// Multiplies two polynomials through the `polynomial` crate.
///
/// This delegates to an independently implemented polynomial arithmetic
/// primitive and is treated as the trusted baseline: the task generator uses
/// it to compute the product stored with every task, and the verifier can
/// select it as a third cross-check next to the naive and FFT routines.
#[must_use]
pub fn multiply(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
    let a = polynomial::Polynomial::new(lhs.coeffs().to_vec());
    let b = polynomial::Polynomial::new(rhs.coeffs().to_vec());
    Polynomial::from_coefficients_slice((a * b).data())
}
