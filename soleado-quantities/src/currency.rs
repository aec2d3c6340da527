//! Colombian pesos and per-unit prices.
//!
//! Amounts are kept as `f64`: every default price is a whole number of pesos, so sums stay exact,
//! and rounding happens only where a total is reported.

use crate::{energy::KilowattHours, length::Metres, power::Kilowatts};

quantity!(
    /// Colombian peso (COP).
    Pesos, suffix: "COP", precision: 0
);

quantity!(
    /// Energy tariff or storage price per kilowatt-hour.
    PesosPerKilowattHour, suffix: "COP/kWh", precision: 0
);

quantity!(
    /// Price per kilowatt of rated power.
    PesosPerKilowatt, suffix: "COP/kW", precision: 0
);

quantity!(
    /// Price per metre of cable or conduit.
    PesosPerMetre, suffix: "COP/m", precision: 0
);

implement_mul!(KilowattHours, PesosPerKilowattHour, Pesos);
implement_mul!(Kilowatts, PesosPerKilowatt, Pesos);
implement_mul!(Metres, PesosPerMetre, Pesos);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_per_unit() {
        assert_eq!(KilowattHours(18.0) * PesosPerKilowattHour(2_000_000.0), Pesos(36_000_000.0));
        assert_eq!(PesosPerKilowatt(300_000.0) * Kilowatts(5.0), Pesos(1_500_000.0));
        assert_eq!(Metres(28.0) * PesosPerMetre(25_000.0), Pesos(700_000.0));
    }

    #[test]
    fn display() {
        assert_eq!(Pesos(1_234_567.4).to_string(), "1234567 COP");
        assert_eq!(PesosPerKilowattHour(650.0).to_string(), "650 COP/kWh");
    }
}
