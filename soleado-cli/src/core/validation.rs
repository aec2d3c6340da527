//! Collection rules for the consumer and consumption records.

use crate::core::{
    error::InvalidInput,
    profile::{ConsumerProfile, ConsumptionProfile},
};

/// Fail unless the value is finite and strictly positive.
pub fn ensure_positive(field: &'static str, value: f64) -> Result<(), InvalidInput> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidInput::new(field, "must be a positive number"))
    }
}

/// Fail unless the value is finite and not negative.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), InvalidInput> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidInput::new(field, "must not be negative"))
    }
}

fn ensure_within(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    reason: &'static str,
) -> Result<(), InvalidInput> {
    if (min..=max).contains(&value) { Ok(()) } else { Err(InvalidInput::new(field, reason)) }
}

fn ensure_present(field: &'static str, value: &str) -> Result<(), InvalidInput> {
    if value.trim().is_empty() { Err(InvalidInput::new(field, "is required")) } else { Ok(()) }
}

/// Accept `local@domain.tld` where the top-level domain has at least two letters.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && local.chars().all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
        && !host.is_empty()
        && host.chars().all(|c| c.is_ascii_alphanumeric() || ".-".contains(c))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

impl ConsumerProfile {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        ensure_present("name", &self.name)?;
        ensure_present("address", &self.address)?;
        ensure_present("city", &self.city)?;
        if !(1..=6).contains(&self.stratum) {
            return Err(InvalidInput::new("stratum", "must be between 1 and 6"));
        }
        ensure_present("email", &self.email)?;
        if !is_email(self.email.trim()) {
            return Err(InvalidInput::new("email", "is not a valid address"));
        }
        ensure_present("phone", &self.phone)
    }
}

impl ConsumptionProfile {
    /// Apply the collection rules, which are stricter than the sizing precondition.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        ensure_within(
            "average_consumption",
            self.average_consumption.0,
            1.0,
            f64::MAX,
            "must be at least 1 kWh",
        )?;
        ensure_within(
            "peak_hours",
            self.peak_hours.0,
            1.0,
            24.0,
            "must be between 1 and 24 hours",
        )?;
        ensure_within("roof_area", self.roof_area.0, 1.0, f64::MAX, "must be at least 1 m²")
    }
}

#[cfg(test)]
mod tests {
    use soleado_quantities::{area::SquareMetres, energy::KilowattHours, time::Hours};

    use super::*;
    use crate::core::profile::{BillingPeriod, RoofType};

    fn consumer() -> ConsumerProfile {
        ConsumerProfile::builder()
            .name("Ana María Restrepo")
            .address("Calle 10 # 43-12")
            .city("Medellín")
            .stratum(4)
            .email("ana.restrepo@example.com.co")
            .phone("+57 300 123 4567")
            .build()
    }

    fn consumption() -> ConsumptionProfile {
        ConsumptionProfile::builder()
            .average_consumption(KilowattHours(450.0))
            .billing_period(BillingPeriod::Monthly)
            .peak_hours(Hours(6.0))
            .roof_area(SquareMetres(40.0))
            .roof_type(RoofType::Sloped)
            .build()
    }

    #[test]
    fn valid_consumer() {
        assert_eq!(consumer().validate(), Ok(()));
    }

    #[test]
    fn blank_name() {
        let consumer = ConsumerProfile { name: "   ".into(), ..consumer() };
        assert_eq!(consumer.validate().unwrap_err().field, "name");
    }

    #[test]
    fn stratum_out_of_range() {
        for stratum in [0, 7] {
            let consumer = ConsumerProfile { stratum, ..consumer() };
            assert_eq!(consumer.validate().unwrap_err().field, "stratum");
        }
    }

    #[test]
    fn emails() {
        assert!(is_email("someone@example.co"));
        assert!(is_email("First.Last+tag@sub-domain.example.COM"));
        assert!(!is_email("someone@example"));
        assert!(!is_email("someone@example.c"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("some one@example.com"));
        assert!(!is_email("someone@@example.com"));
        assert!(!is_email("someone@example.c0m"));
        assert!(!is_email("someone@.com"));
    }

    #[test]
    fn invalid_email() {
        let consumer = ConsumerProfile { email: "ana.restrepo".into(), ..consumer() };
        assert_eq!(consumer.validate().unwrap_err().field, "email");
    }

    #[test]
    fn valid_consumption() {
        assert_eq!(consumption().validate(), Ok(()));
    }

    #[test]
    fn consumption_below_one_kilowatt_hour() {
        let consumption =
            ConsumptionProfile { average_consumption: KilowattHours(0.5), ..consumption() };
        assert_eq!(consumption.validate().unwrap_err().field, "average_consumption");
    }

    #[test]
    fn peak_hours_out_of_range() {
        let over = ConsumptionProfile { peak_hours: Hours(25.0), ..consumption() };
        assert_eq!(over.validate().unwrap_err().field, "peak_hours");
        let zero = ConsumptionProfile { peak_hours: Hours(0.0), ..consumption() };
        assert_eq!(zero.validate().unwrap_err().field, "peak_hours");
    }

    #[test]
    fn not_a_number_roof_area() {
        let consumption = ConsumptionProfile { roof_area: SquareMetres(f64::NAN), ..consumption() };
        assert_eq!(consumption.validate().unwrap_err().field, "roof_area");
    }

    #[test]
    fn positivity() {
        assert!(ensure_positive("x", 0.1).is_ok());
        assert!(ensure_positive("x", 0.0).is_err());
        assert!(ensure_positive("x", -1.0).is_err());
        assert!(ensure_positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn non_negativity() {
        assert!(ensure_non_negative("x", 0.0).is_ok());
        assert!(ensure_non_negative("x", 1.5).is_ok());
        assert!(ensure_non_negative("x", -0.01).is_err());
        assert!(ensure_non_negative("x", f64::NAN).is_err());
    }
}
