quantity!(Watts, suffix: "W", precision: 0);
quantity!(Kilowatts, suffix: "kW", precision: 2);

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self(watts.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilowatts_from_watts() {
        assert_eq!(Kilowatts::from(Watts(3850.0)), Kilowatts(3.85));
    }
}
