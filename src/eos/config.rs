// src/eos/config.rs
/*!
Parameters of the adiabatic equation of state, as found in the `hydro` block of a
parameter file:

```json
{ "hydro": { "gamma": 1.6666666666666667, "dfloor": 1e-8, "pfloor": 1e-10 } }
```

- `gamma` is required.
- `dfloor`, `pfloor`, `sfloor` are optional; a missing floor takes the default
  `sqrt(1024 * f32::MIN_POSITIVE)` when the EOS is built.
*/

use serde::{Deserialize, Serialize};

use crate::error::{EosError, Result};

/// Configuration of an `EquationOfState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EosConfig {
    /// Adiabatic index (ratio of specific heats), `> 1`.
    pub gamma: f64,
    #[serde(rename = "dfloor", default, skip_serializing_if = "Option::is_none")]
    pub density_floor: Option<f64>,
    #[serde(rename = "pfloor", default, skip_serializing_if = "Option::is_none")]
    pub pressure_floor: Option<f64>,
    #[serde(rename = "sfloor", default, skip_serializing_if = "Option::is_none")]
    pub scalar_floor: Option<f64>,
}

impl EosConfig {
    /// Config with default floors.
    #[inline]
    pub fn new(gamma: f64) -> Self {
        Self { gamma, density_floor: None, pressure_floor: None, scalar_floor: None }
    }

    #[inline]
    pub fn with_density_floor(mut self, dfloor: f64) -> Self {
        self.density_floor = Some(dfloor);
        self
    }

    #[inline]
    pub fn with_pressure_floor(mut self, pfloor: f64) -> Self {
        self.pressure_floor = Some(pfloor);
        self
    }

    #[inline]
    pub fn with_scalar_floor(mut self, sfloor: f64) -> Self {
        self.scalar_floor = Some(sfloor);
        self
    }

    /// Parse a JSON document holding either the parameters themselves or an object
    /// with the parameters under a `"hydro"` key.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(s)?;
        if let Some(hydro) = value.get_mut("hydro") {
            value = hydro.take();
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Reject a non-finite `gamma <= 1` and any supplied floor that is not finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(EosError::InvalidGamma { gamma: self.gamma });
        }
        let floors = [
            ("dfloor", self.density_floor),
            ("pfloor", self.pressure_floor),
            ("sfloor", self.scalar_floor),
        ];
        for (name, floor) in floors {
            if let Some(value) = floor {
                if !(value.is_finite() && value > 0.0) {
                    return Err(EosError::InvalidFloor { name, value });
                }
            }
        }
        Ok(())
    }
}
