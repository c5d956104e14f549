use std::fmt::{Debug, Display, Formatter};

/// Relative change as a signed percentage, `n/a` when undefined.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() { write!(f, "{:+.1}%", self.0 * 100.0) } else { write!(f, "n/a") }
    }
}
