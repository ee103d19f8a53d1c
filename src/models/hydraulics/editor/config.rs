use serde::Deserialize;
use thiserror::Error;

use crate::models::hydraulics::hose_lay::{
    Configuration, EditState, HoseDiameter, InvalidInput, LineSegment, Nozzle, flow_rate_from_gpm,
    pressure_from_psi,
};

use super::NozzleCatalog;

/// Errors that can occur while loading an [`EditorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse editor config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid editor config: {0}")]
    Invalid(#[from] InvalidInput),
}

/// Editor settings, in field units.
///
/// Every field has a default, so an empty document is a valid config:
///
/// ```
/// use hoselay_models::models::hydraulics::editor::EditorConfig;
///
/// let config = EditorConfig::from_toml_str(
///     r#"
///     elevation_ft = -20.0
///
///     [default_main]
///     diameter = "2.5"
///
///     [[nozzles]]
///     id = "fog-150"
///     label = "Fog 150 gpm @ 100 psi"
///     flow_gpm = 150.0
///     pressure_psi = 100.0
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.default_main.flow_gpm, 150.0);
/// assert_eq!(config.nozzles.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Main line a new or reset configuration starts with.
    pub default_main: MainLineConfig,

    /// Elevation change a new or reset configuration starts with.
    pub elevation_ft: f64,

    /// Nozzles available for assignment.
    pub nozzles: Vec<NozzleConfig>,

    /// Capacity of each subscriber's notification channel.
    pub channel_capacity: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_main: MainLineConfig::default(),
            elevation_ft: 0.0,
            nozzles: Vec::new(),
            channel_capacity: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MainLineConfig {
    pub flow_gpm: f64,
    pub length_ft: f64,
    /// Diameter tag, e.g. `"1.75"`.
    pub diameter: String,
}

impl Default for MainLineConfig {
    fn default() -> Self {
        Self {
            flow_gpm: 150.0,
            length_ft: 200.0,
            diameter: HoseDiameter::OneAndThreeQuarter.tag().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NozzleConfig {
    pub id: String,
    pub label: String,
    pub flow_gpm: f64,
    pub pressure_psi: f64,
}

impl NozzleConfig {
    /// Checks the rated flow and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Field`] for a negative, non-finite or
    /// out-of-range value.
    pub fn to_nozzle(&self) -> Result<Nozzle, InvalidInput> {
        let flow_rate = flow_rate_from_gpm(self.flow_gpm)?;
        let pressure = pressure_from_psi(self.pressure_psi)?;

        Ok(Nozzle {
            id: self.id.clone(),
            label: self.label.clone(),
            flow_rate,
            pressure,
        })
    }
}

impl EditorConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Builds the state a new or reset editor starts in.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInput`] for an unknown diameter or a bad number.
    pub fn initial_state(&self) -> Result<EditState, InvalidInput> {
        let main = &self.default_main;
        let diameter = main.diameter.parse::<HoseDiameter>()?;
        let segment = LineSegment::from_field_units(main.flow_gpm, diameter, main.length_ft)?;

        let configuration = Configuration::new(segment).with_elevation_ft(self.elevation_ft)?;
        Ok(EditState::new(configuration))
    }

    /// Builds the nozzle catalog.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInput`] for a bad nozzle or a duplicate id.
    pub fn catalog(&self) -> Result<NozzleCatalog, InvalidInput> {
        let nozzles = self
            .nozzles
            .iter()
            .map(NozzleConfig::to_nozzle)
            .collect::<Result<Vec<_>, _>>()?;
        NozzleCatalog::new(nozzles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::foot, volume_rate::gallon_per_minute};

    use crate::{
        models::hydraulics::hose_lay::{FieldName, SegmentKey},
        support::constraint::ConstraintError,
    };

    #[test]
    fn empty_document_uses_defaults() {
        let config = EditorConfig::from_toml_str("").unwrap();
        assert_eq!(config, EditorConfig::default());

        let state = config.initial_state().unwrap();
        let main = state.configuration().main();
        assert_eq!(state.active(), SegmentKey::Main);
        assert_eq!(main.diameter(), HoseDiameter::OneAndThreeQuarter);
        assert_relative_eq!(main.flow_rate().get::<gallon_per_minute>(), 150.0);
        assert_relative_eq!(main.length().get::<foot>(), 200.0);
        assert!(!state.configuration().wye_enabled());
        assert!(config.catalog().unwrap().is_empty());
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        let err = EditorConfig::from_toml_str("pump = \"engine 7\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_values_are_reported_by_field() {
        let config = EditorConfig::from_toml_str(
            r#"
            [default_main]
            length_ft = -50.0
            "#,
        )
        .unwrap();
        assert_eq!(
            config.initial_state(),
            Err(InvalidInput::Field {
                field: FieldName::Length,
                source: ConstraintError::Negative,
            })
        );

        let nozzle = NozzleConfig {
            id: "broken".into(),
            label: "Broken".into(),
            flow_gpm: 95.0,
            pressure_psi: -1.0,
        };
        assert_eq!(
            nozzle.to_nozzle(),
            Err(InvalidInput::Field {
                field: FieldName::NozzlePressure,
                source: ConstraintError::Negative,
            })
        );
    }

    #[test]
    fn duplicate_nozzles_are_rejected() {
        let config = EditorConfig::from_toml_str(
            r#"
            [[nozzles]]
            id = "fog"
            label = "Fog 95"
            flow_gpm = 95.0
            pressure_psi = 100.0

            [[nozzles]]
            id = "fog"
            label = "Fog 125"
            flow_gpm = 125.0
            pressure_psi = 100.0
            "#,
        )
        .unwrap();
        assert_eq!(
            config.catalog(),
            Err(InvalidInput::DuplicateNozzle { id: "fog".into() })
        );
    }
}
