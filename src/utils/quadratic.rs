//! Real roots of quadratic equations

/// Up to two real roots, sorted in ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Roots {
    values: [f32; 2],
    len: usize,
}

impl Roots {
    const NONE: Roots = Roots {
        values: [0.0; 2],
        len: 0,
    };

    fn one(r: f32) -> Self {
        Self {
            values: [r, 0.0],
            len: 1,
        }
    }

    fn two(r0: f32, r1: f32) -> Self {
        Self {
            values: [r0.min(r1), r0.max(r1)],
            len: 2,
        }
    }

    /// Returns the roots as an ascending slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values[..self.len]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the smallest root strictly inside `(t_min, t_max)` which also satisfies `accept`.
    pub fn nearest_within<F>(&self, t_min: f32, t_max: f32, mut accept: F) -> Option<f32>
    where
        F: FnMut(f32) -> bool,
    {
        self.as_slice()
            .iter()
            .copied()
            .find(|&t| t > t_min && t < t_max && accept(t))
    }
}

/// Solves `a*t^2 + b*t + c = 0` for real `t`.
///
/// * a negative discriminant yields no roots
/// * a zero discriminant yields one root
/// * otherwise two roots, in ascending order
///
/// With `a == 0` the equation degrades to the linear `b*t + c = 0`.
pub fn quadratic(a: f32, b: f32, c: f32) -> Roots {
    if a == 0.0 {
        return if b == 0.0 {
            Roots::NONE
        } else {
            Roots::one(-c / b)
        };
    }

    let radicand = b * b - 4.0 * a * c;
    if radicand < 0.0 {
        return Roots::NONE;
    }

    let sqrt_rad = radicand.sqrt();
    let r0 = (-b + sqrt_rad) / (2.0 * a);
    let r1 = (-b - sqrt_rad) / (2.0 * a);

    if r0 == r1 {
        Roots::one(r0)
    } else {
        Roots::two(r0, r1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sorted_roots() {
        let roots = quadratic(1.0, 4.0, 3.0);
        assert_eq!(roots.as_slice(), &[-3.0, -1.0], "got roots {roots:?}");
    }

    #[test]
    fn negative_discriminant_has_no_roots() {
        let roots = quadratic(1.0, 0.0, 1.0);
        assert!(roots.is_empty(), "expected no roots, got {roots:?}");
    }

    #[test]
    fn zero_discriminant_has_one_root() {
        let roots = quadratic(1.0, -2.0, 1.0);
        assert_eq!(roots.as_slice(), &[1.0], "got roots {roots:?}");
    }

    #[test]
    fn negative_leading_coefficient_still_ascending() {
        let roots = quadratic(-1.0, 0.0, 4.0);
        assert_eq!(roots.as_slice(), &[-2.0, 2.0], "got roots {roots:?}");
    }

    #[test]
    fn linear_fallback() {
        assert_eq!(quadratic(0.0, 2.0, -4.0).as_slice(), &[2.0]);
        assert!(quadratic(0.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn nearest_within_skips_out_of_range_roots() {
        let roots = quadratic(1.0, 0.0, -1.0);
        assert_eq!(roots.nearest_within(0.0, f32::INFINITY, |_| true), Some(1.0));
        assert_eq!(roots.nearest_within(-5.0, 0.5, |_| true), Some(-1.0));
        assert_eq!(roots.nearest_within(-5.0, 5.0, |t| t > 0.0), Some(1.0));
        assert_eq!(roots.nearest_within(1.0, 5.0, |_| true), None);
    }
}
