//! Vector norms.

/// The norm used to measure a vector (or the distance between two vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Norm {
    /// Sum of absolute values.
    L1,
    /// Euclidean length.
    #[default]
    L2,
    /// Largest absolute value.
    Inf,
}

impl Norm {
    /// Evaluates this norm over a slice of coordinates.
    pub fn of(self, coords: &[f64]) -> f64 {
        match self {
            Norm::L1 => coords.iter().map(|c| c.abs()).sum(),
            Norm::L2 => coords.iter().map(|c| c * c).sum::<f64>().sqrt(),
            Norm::Inf => coords.iter().fold(0.0, |acc, c| acc.max(c.abs())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norms_of_three_four() {
        let coords = [3.0, -4.0];
        assert_eq!(Norm::L1.of(&coords), 7.0);
        assert_eq!(Norm::L2.of(&coords), 5.0);
        assert_eq!(Norm::Inf.of(&coords), 4.0);
    }

    #[test]
    fn zero_vector_has_zero_norm() {
        let coords = [0.0; 4];
        for norm in [Norm::L1, Norm::L2, Norm::Inf] {
            assert_eq!(norm.of(&coords), 0.0);
        }
    }
}
