use crate::power::Watts;

quantity!(Volts, suffix: "V", precision: 1);
quantity!(Amperes, suffix: "A", precision: 1);

implement_div!(Watts, Volts, Amperes);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn current_from_power() {
        assert_abs_diff_eq!((Watts(550.0) / Volts(37.5)).0, 14.666_666, epsilon = 1e-6);
    }
}
