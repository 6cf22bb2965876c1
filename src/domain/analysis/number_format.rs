//! Number rendering for derivation strings.

/// How numbers appear in human-readable derivations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_places: Option<usize>,
}

impl NumberFormat {
    /// Shortest representation that round-trips (`6`, `5.75`, `0.1`).
    pub fn shortest() -> Self {
        Self::default()
    }

    /// Always exactly `places` digits after the decimal point.
    pub fn fixed(places: usize) -> Self {
        Self {
            decimal_places: Some(places),
        }
    }

    /// Uses fixed places when given, otherwise the shortest form.
    pub fn from_places(places: Option<usize>) -> Self {
        Self {
            decimal_places: places,
        }
    }

    /// Renders a single number.
    pub fn number(&self, value: f64) -> String {
        match self.decimal_places {
            Some(places) => format!("{:.*}", places, value),
            None => format!("{}", value),
        }
    }

    /// Renders numbers joined by `separator`.
    pub fn join(&self, values: &[f64], separator: &str) -> String {
        values
            .iter()
            .map(|v| self.number(*v))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
