//! Scalar-or-per-site drive parameters.
//!
//! Each of the three drive parameters (coupling magnitude Ω, coupling
//! phase ϕ, detuning Δ) may be given either as a single scalar applied
//! uniformly to every site, or as one value per site. The tagged
//! representation keeps that choice to a single dispatch instead of
//! type-based branching scattered through the fill loops.

use super::error::RydbergError;

/// A drive parameter: uniform scalar, or one value per site.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// The same value at every site.
    Scalar(f64),
    /// One value per site; length must equal the site count.
    PerSite(Vec<f64>),
}

impl Param {
    /// Value of the parameter at site `k` (1-indexed).
    ///
    /// A scalar is returned unchanged regardless of `k`. Callers
    /// guarantee `1 <= k <= nsites` after [`Param::validate`] has
    /// accepted the parameter.
    #[inline]
    pub fn site(&self, k: usize) -> f64 {
        match self {
            Param::Scalar(v) => *v,
            Param::PerSite(vs) => vs[k - 1],
        }
    }

    /// Checks that a per-site sequence has exactly `nsites` entries.
    ///
    /// Called once at the builder boundary so that no matrix write can
    /// happen against a malformed parameter.
    pub fn validate(&self, nsites: usize) -> Result<(), RydbergError> {
        match self {
            Param::Scalar(_) => Ok(()),
            Param::PerSite(vs) if vs.len() == nsites => Ok(()),
            Param::PerSite(vs) => Err(RydbergError::ParameterLength {
                expected: nsites,
                actual: vs.len(),
            }),
        }
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Scalar(v)
    }
}

impl From<Vec<f64>> for Param {
    fn from(vs: Vec<f64>) -> Self {
        Param::PerSite(vs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_ignores_site_index() {
        let p = Param::Scalar(2.5);
        assert_eq!(p.site(1), 2.5);
        assert_eq!(p.site(17), 2.5);
    }

    #[test]
    fn per_site_is_one_indexed() {
        let p = Param::PerSite(vec![1.0, 2.0, 3.0]);
        assert_eq!(p.site(1), 1.0);
        assert_eq!(p.site(3), 3.0);
    }

    #[test]
    fn validate_checks_length() {
        assert!(Param::Scalar(0.0).validate(5).is_ok());
        assert!(Param::PerSite(vec![1.0, 2.0]).validate(2).is_ok());
        assert_eq!(
            Param::PerSite(vec![1.0, 2.0]).validate(3),
            Err(RydbergError::ParameterLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn conversions() {
        assert_eq!(Param::from(1.5), Param::Scalar(1.5));
        assert_eq!(Param::from(vec![1.0]), Param::PerSite(vec![1.0]));
    }
}
