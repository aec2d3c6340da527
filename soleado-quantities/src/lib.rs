//! Strongly typed physical and monetary quantities.
//!
//! Every quantity is a transparent `f64` newtype that knows its unit suffix and display precision.
//! Conversions between units are explicit, and cross-unit arithmetic is only implemented where it
//! makes physical sense (for example, kilowatt-hours times a per-kilowatt-hour price gives pesos).

#[macro_use]
mod macros;

pub mod area;
pub mod currency;
pub mod electric;
pub mod energy;
pub mod length;
pub mod power;
pub mod time;

#[cfg(test)]
mod tests {
    use crate::{energy::KilowattHours, power::Watts};

    #[test]
    fn test_min() {
        assert_eq!(Watts(1.0).min(Watts(2.0)), Watts(1.0));
        assert_eq!(Watts(2.0).min(Watts(1.0)), Watts(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(Watts(1.0).max(Watts(2.0)), Watts(2.0));
        assert_eq!(Watts(2.0).max(Watts(1.0)), Watts(2.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Watts(1.0).clamp(Watts(2.0), Watts(3.0)), Watts(2.0));
        assert_eq!(Watts(4.0).clamp(Watts(2.0), Watts(3.0)), Watts(3.0));
        assert_eq!(Watts(2.0).clamp(Watts(1.0), Watts(3.0)), Watts(2.0));
    }

    #[test]
    fn test_sum() {
        let total: KilowattHours = [KilowattHours(1.5), KilowattHours(2.5)].into_iter().sum();
        assert_eq!(total, KilowattHours(4.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours(18.0).to_string(), "18.0 kWh");
        assert_eq!(format!("{:?}", Watts(550.0)), "550W");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("37.5".parse::<Watts>().unwrap(), Watts(37.5));
        assert!("abc".parse::<Watts>().is_err());
    }

    #[test]
    fn test_ceil_floor() {
        assert_eq!(KilowattHours(17.2).ceil(), KilowattHours(18.0));
        assert_eq!(KilowattHours(17.8).floor(), KilowattHours(17.0));
    }
}
