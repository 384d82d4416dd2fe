use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SampleError;
use crate::metals::{MetalSymbol, MetalTable};

/// Measured concentrations in mg/L for one water sample.
///
/// All five fields are required when deserializing, so a record with a
/// missing metal never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(non_snake_case)]
pub struct Sample {
    pub Pb: f64,
    pub Cd: f64,
    pub As: f64,
    pub Cr: f64,
    pub Se: f64,
}

impl Sample {
    /// Sample with every concentration at zero.
    pub const ZERO: Sample = Sample {
        Pb: 0.0,
        Cd: 0.0,
        As: 0.0,
        Cr: 0.0,
        Se: 0.0,
    };

    pub fn get(&self, metal: MetalSymbol) -> f64 {
        match metal {
            MetalSymbol::Pb => self.Pb,
            MetalSymbol::Cd => self.Cd,
            MetalSymbol::As => self.As,
            MetalSymbol::Cr => self.Cr,
            MetalSymbol::Se => self.Se,
        }
    }

    /// Copy of this sample with one concentration replaced.
    pub fn with(mut self, metal: MetalSymbol, value: f64) -> Self {
        match metal {
            MetalSymbol::Pb => self.Pb = value,
            MetalSymbol::Cd => self.Cd = value,
            MetalSymbol::As => self.As = value,
            MetalSymbol::Cr => self.Cr = value,
            MetalSymbol::Se => self.Se = value,
        }
        self
    }

    pub fn as_table(&self) -> MetalTable<f64> {
        MetalTable::new([self.Pb, self.Cd, self.As, self.Cr, self.Se])
    }

    /// Contamination factor `concentration / standard` for one metal.
    pub fn contamination_factor(&self, metal: MetalSymbol) -> f64 {
        self.get(metal) / metal.standard()
    }

    /// Check the input contract: every concentration finite and `>= 0`.
    ///
    /// Reports the first offending metal in canonical order.
    pub fn validate(&self) -> Result<(), SampleError> {
        for metal in MetalSymbol::ALL {
            let value = self.get(metal);
            if !value.is_finite() {
                return Err(SampleError::NotFinite { metal });
            }
            if value < 0.0 {
                return Err(SampleError::Negative { metal, value });
            }
        }
        Ok(())
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl From<MetalTable<f64>> for Sample {
    fn from(table: MetalTable<f64>) -> Self {
        Sample {
            Pb: table[MetalSymbol::Pb],
            Cd: table[MetalSymbol::Cd],
            As: table[MetalSymbol::As],
            Cr: table[MetalSymbol::Cr],
            Se: table[MetalSymbol::Se],
        }
    }
}

/// A sample as collected at a monitoring station.
/// The engine only looks at `metals`; the rest is carried through to reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSample {
    pub station: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sampled_on: NaiveDate,
    pub metals: Sample,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sample_is_valid() {
        assert_eq!(Sample::ZERO.validate(), Ok(()));
    }

    #[test]
    fn negative_concentration_is_rejected() {
        let sample = Sample::ZERO.with(MetalSymbol::As, -0.2);
        assert_eq!(
            sample.validate(),
            Err(SampleError::Negative {
                metal: MetalSymbol::As,
                value: -0.2
            })
        );
    }

    #[test]
    fn nan_is_rejected_before_sign_check() {
        let sample = Sample::ZERO
            .with(MetalSymbol::Cd, f64::NAN)
            .with(MetalSymbol::Cr, -1.0);
        assert_eq!(
            sample.validate(),
            Err(SampleError::NotFinite {
                metal: MetalSymbol::Cd
            })
        );
    }

    #[test]
    fn missing_metal_fails_to_deserialize() {
        let raw = r#"{"Pb":0.01,"Cd":0.003,"As":0.01,"Cr":0.05}"#;
        assert!(serde_json::from_str::<Sample>(raw).is_err());
    }

    #[test]
    fn station_sample_round_trips_metadata() {
        let raw = r#"{
            "station": "Yamuna-Okhla",
            "latitude": 28.54,
            "longitude": 77.31,
            "sampled_on": "2024-03-18",
            "metals": {"Pb":0.02,"Cd":0.001,"As":0.0,"Cr":0.04,"Se":0.005}
        }"#;
        let parsed: StationSample = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.station, "Yamuna-Okhla");
        assert_eq!(parsed.sampled_on, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        assert_eq!(parsed.metals.get(MetalSymbol::Pb), 0.02);
    }

    #[test]
    fn table_conversion_keeps_positions() {
        let sample = Sample {
            Pb: 1.0,
            Cd: 2.0,
            As: 3.0,
            Cr: 4.0,
            Se: 5.0,
        };
        assert_eq!(Sample::from(sample.as_table()), sample);
    }
}
