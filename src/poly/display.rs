use core::fmt::{self, Write as _};

use crate::traits::FloatScalar;

use super::Polynomial;

const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn write_exponent(f: &mut fmt::Formatter<'_>, n: usize) -> fmt::Result {
    if n >= 10 {
        write_exponent(f, n / 10)?;
    }
    f.write_char(SUPERSCRIPTS[n % 10])
}

/// Human-readable form, highest degree first: `x² - 3x + 2`.
///
/// Zero coefficients are skipped, unit coefficients are omitted on
/// non-constant terms, and a precision (`{:.3}`) applies to every
/// coefficient.
///
/// ```
/// use polyroot::Polynomial;
/// let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
/// assert_eq!(p.to_string(), "x² - 3x + 2");
/// let q = Polynomial::new(&[-2.0_f64, 0.0, 1.0, 0.0]);
/// assert_eq!(q.to_string(), "-2x³ + x");
/// ```
impl<T: FloatScalar + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, &c) in self.coeffs[..=self.degree()].iter().enumerate().rev() {
            if c == T::zero() {
                continue;
            }
            let negative = c < T::zero();
            if first {
                if negative {
                    f.write_char('-')?;
                }
            } else {
                f.write_str(if negative { " - " } else { " + " })?;
            }
            first = false;

            let magnitude = c.abs();
            if power == 0 || magnitude != T::one() {
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, magnitude)?,
                    None => write!(f, "{}", magnitude)?,
                }
            }
            if power >= 1 {
                f.write_char('x')?;
            }
            if power >= 2 {
                write_exponent(f, power)?;
            }
        }
        if first {
            f.write_char('0')?;
        }
        Ok(())
    }
}
