#![forbid(unsafe_code)]

//! Deterministic tax estimation.
//!
//! The assistant's only computation: split a gross monthly amount into
//! social charges and net at a fixed rate, then annualize the net linearly.
//! Rates are plain fields so hosts serving other regimes can swap them.

/// Rates for the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxRates {
    /// Fraction of the gross amount withheld as social charges
    /// (default: 0.22).
    pub charge_rate: f64,
    /// Linear annualization factor applied to the net (default: 12, monthly
    /// to yearly).
    pub months_per_year: f64,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            charge_rate: 0.22,
            months_per_year: 12.0,
        }
    }
}

impl TaxRates {
    /// Estimate the breakdown for a gross monthly amount.
    ///
    /// Returns `None` for amounts that are not finite positive numbers;
    /// the caller turns that into a prompt for valid input, never an error.
    #[must_use]
    pub fn estimate(&self, gross: f64) -> Option<TaxBreakdown> {
        if !gross.is_finite() || gross <= 0.0 {
            return None;
        }
        let charges = gross * self.charge_rate;
        let net = gross - charges;
        Some(TaxBreakdown {
            gross,
            charges,
            net,
            annual_net: net * self.months_per_year,
        })
    }
}

/// Result of a tax estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBreakdown {
    /// The gross monthly amount the estimate was computed from.
    pub gross: f64,
    /// Social charges withheld.
    pub charges: f64,
    /// Net monthly amount after charges.
    pub net: f64,
    /// Net amount annualized.
    pub annual_net: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_rates_split() {
        let breakdown = TaxRates::default().estimate(1000.0).unwrap();
        assert_eq!(breakdown.gross, 1000.0);
        assert_eq!(breakdown.charges, 220.0);
        assert_eq!(breakdown.net, 780.0);
        assert_eq!(breakdown.annual_net, 9360.0);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(TaxRates::default().estimate(0.0), None);
    }

    #[test]
    fn negative_is_rejected() {
        assert_eq!(TaxRates::default().estimate(-50.0), None);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert_eq!(TaxRates::default().estimate(f64::NAN), None);
        assert_eq!(TaxRates::default().estimate(f64::INFINITY), None);
    }

    #[test]
    fn custom_rates_apply() {
        let rates = TaxRates {
            charge_rate: 0.5,
            months_per_year: 4.0,
        };
        let breakdown = rates.estimate(200.0).unwrap();
        assert_eq!(breakdown.charges, 100.0);
        assert_eq!(breakdown.net, 100.0);
        assert_eq!(breakdown.annual_net, 400.0);
    }

    proptest! {
        #[test]
        fn components_sum_to_gross(gross in 0.01f64..1e9) {
            let breakdown = TaxRates::default().estimate(gross).unwrap();
            prop_assert!((breakdown.charges + breakdown.net - breakdown.gross).abs() < 1e-6);
            prop_assert!(breakdown.charges >= 0.0);
            prop_assert!(breakdown.net >= 0.0);
        }
    }
}
