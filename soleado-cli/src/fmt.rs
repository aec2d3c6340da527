use std::fmt::{Debug, Display, Formatter};

use soleado_quantities::currency::Pesos;

/// Colombian peso amount in the `es-CO` currency style: `$ 1.234.567`, no decimals.
pub struct FormattedPesos(pub Pesos);

impl Debug for FormattedPesos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPesos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let amount = self.0.0.round();
        let digits = format!("{:.0}", amount.abs());
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        let sign = if amount < 0.0 { "-" } else { "" };
        write!(f, "{sign}$ {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(FormattedPesos(Pesos(0.0)).to_string(), "$ 0");
        assert_eq!(FormattedPesos(Pesos(650.0)).to_string(), "$ 650");
        assert_eq!(FormattedPesos(Pesos(1_000.0)).to_string(), "$ 1.000");
        assert_eq!(FormattedPesos(Pesos(64_820_000.0)).to_string(), "$ 64.820.000");
        assert_eq!(FormattedPesos(Pesos(123_456_789.0)).to_string(), "$ 123.456.789");
    }

    #[test]
    fn rounding() {
        assert_eq!(FormattedPesos(Pesos(999.5)).to_string(), "$ 1.000");
        assert_eq!(FormattedPesos(Pesos(4_320_441.125)).to_string(), "$ 4.320.441");
    }

    #[test]
    fn negative() {
        assert_eq!(FormattedPesos(Pesos(-1_500.0)).to_string(), "-$ 1.500");
    }
}
