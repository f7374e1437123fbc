//! Flat key→value parameters for callers outside Rust.
//!
//! Request handlers and scripts exchange heat-sink inputs and results as flat
//! JSON objects keyed by SI-suffixed names (`q_w`, `sink_width_m`, …). The
//! allowed keys form a fixed schema, [`INPUT_FIELDS`], and every key not in the
//! schema is rejected:
//!
//! ```
//! use serde_json::json;
//! use twine_heatsink::models::thermal::heat_sink::{Inputs, ParamError};
//!
//! let params = json!({ "q_w": 95.0, "n_fins": 40 });
//! let inputs = Inputs::from_json(&params).unwrap();
//! assert_eq!(inputs.sink.n_fins, 40);
//!
//! let params = json!({ "bogus_field": 1 });
//! match Inputs::from_json(&params) {
//!     Err(ParamError::UnknownFields { unknown, .. }) => assert_eq!(unknown, ["bogus_field"]),
//!     other => panic!("expected rejection, got {other:?}"),
//! }
//! ```
//!
//! Numbers are written as JSON numbers. JSON has no infinity or NaN, so those
//! values, which degenerate inputs produce, are written as the strings `"inf"`,
//! `"-inf"`, and `"nan"`.

use log::debug;
use serde_json::{Map, Value, json};
use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Length, Power, Ratio, ThermalConductivity, Velocity},
    length::meter,
    power::watt,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::support::units::{Celsius, from_si};

use super::{GeometryError, Inputs, Results, solve};

/// Errors raised while reading flat parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// The parameters were not a JSON object.
    #[error("parameters must be a JSON object")]
    NotAnObject,

    /// One or more keys are not part of the schema.
    #[error("unknown fields: {}", .unknown.join(", "))]
    UnknownFields {
        /// Rejected keys, sorted.
        unknown: Vec<String>,

        /// Every accepted key, sorted.
        allowed: Vec<&'static str>,
    },

    /// A known key holds a value of the wrong type.
    #[error("invalid value for `{field}`: expected {expected}, found {found}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

/// Errors from [`solve_params`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveParamsError {
    /// The parameters were rejected before solving.
    #[error("invalid parameters")]
    Params(#[from] ParamError),

    /// The parameters describe an unsolvable geometry.
    #[error("unsolvable geometry")]
    Geometry(#[from] GeometryError),
}

/// Type of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON number.
    Real,
    /// A non-negative JSON integer that fits in `u32`.
    Count,
}

impl FieldKind {
    fn expected(self) -> &'static str {
        match self {
            Self::Real => "a number",
            Self::Count => "a non-negative integer",
        }
    }
}

/// One entry of the input parameter schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    name: &'static str,
    slot: Slot,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Real {
        get: fn(&Inputs) -> f64,
        set: fn(&mut Inputs, f64),
    },
    Count {
        get: fn(&Inputs) -> u32,
        set: fn(&mut Inputs, u32),
    },
}

impl Field {
    /// Parameter key.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type of value this key accepts.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self.slot {
            Slot::Real { .. } => FieldKind::Real,
            Slot::Count { .. } => FieldKind::Count,
        }
    }

    /// Value used when the key is missing, taken from [`Inputs::default`].
    #[must_use]
    pub fn default_value(&self) -> Value {
        self.read(&Inputs::default())
    }

    fn read(&self, inputs: &Inputs) -> Value {
        match self.slot {
            Slot::Real { get, .. } => number(get(inputs)),
            Slot::Count { get, .. } => Value::from(get(inputs)),
        }
    }

    fn write(&self, inputs: &mut Inputs, value: &Value) -> Result<(), ParamError> {
        match self.slot {
            Slot::Real { set, .. } => {
                let number = value.as_f64().ok_or_else(|| self.invalid(value))?;
                set(inputs, number);
            }
            Slot::Count { set, .. } => {
                let count = value
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| self.invalid(value))?;
                set(inputs, count);
            }
        }
        Ok(())
    }

    fn invalid(&self, value: &Value) -> ParamError {
        ParamError::InvalidValue {
            field: self.name,
            expected: self.kind().expected(),
            found: value.to_string(),
        }
    }
}

/// Input parameter schema.
pub static INPUT_FIELDS: [Field; 18] = [
    Field {
        name: "q_w",
        slot: Slot::Real {
            get: |i| i.heat_load.get::<watt>(),
            set: |i, v| i.heat_load = Power::new::<watt>(v),
        },
    },
    Field {
        name: "t_ambient_c",
        slot: Slot::Real {
            get: |i| i.ambient.value(),
            set: |i, v| i.ambient = Celsius::new(v),
        },
    },
    Field {
        name: "die_length_m",
        slot: Slot::Real {
            get: |i| i.die.length.get::<meter>(),
            set: |i, v| i.die.length = Length::new::<meter>(v),
        },
    },
    Field {
        name: "die_width_m",
        slot: Slot::Real {
            get: |i| i.die.width.get::<meter>(),
            set: |i, v| i.die.width = Length::new::<meter>(v),
        },
    },
    Field {
        name: "sink_length_m",
        slot: Slot::Real {
            get: |i| i.sink.length.get::<meter>(),
            set: |i, v| i.sink.length = Length::new::<meter>(v),
        },
    },
    Field {
        name: "sink_width_m",
        slot: Slot::Real {
            get: |i| i.sink.width.get::<meter>(),
            set: |i, v| i.sink.width = Length::new::<meter>(v),
        },
    },
    Field {
        name: "base_thickness_m",
        slot: Slot::Real {
            get: |i| i.sink.base_thickness.get::<meter>(),
            set: |i, v| i.sink.base_thickness = Length::new::<meter>(v),
        },
    },
    Field {
        name: "n_fins",
        slot: Slot::Count {
            get: |i| i.sink.n_fins,
            set: |i, n| i.sink.n_fins = n,
        },
    },
    Field {
        name: "fin_thickness_m",
        slot: Slot::Real {
            get: |i| i.sink.fin_thickness.get::<meter>(),
            set: |i, v| i.sink.fin_thickness = Length::new::<meter>(v),
        },
    },
    Field {
        name: "fin_height_m",
        slot: Slot::Real {
            get: |i| i.sink.fin_height.get::<meter>(),
            set: |i, v| i.sink.fin_height = Length::new::<meter>(v),
        },
    },
    Field {
        name: "k_al_w_mk",
        slot: Slot::Real {
            get: |i| i.materials.base_conductivity.get::<watt_per_meter_kelvin>(),
            set: |i, v| {
                i.materials.base_conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(v);
            },
        },
    },
    Field {
        name: "r_jc_c_w",
        slot: Slot::Real {
            get: |i| i.materials.junction_to_case.value,
            set: |i, v| i.materials.junction_to_case = from_si(v),
        },
    },
    Field {
        name: "k_tim_w_mk",
        slot: Slot::Real {
            get: |i| i.tim.conductivity.get::<watt_per_meter_kelvin>(),
            set: |i, v| i.tim.conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(v),
        },
    },
    Field {
        name: "tim_thickness_m",
        slot: Slot::Real {
            get: |i| i.tim.thickness.get::<meter>(),
            set: |i, v| i.tim.thickness = Length::new::<meter>(v),
        },
    },
    Field {
        name: "air_k_w_mk",
        slot: Slot::Real {
            get: |i| i.air.conductivity.get::<watt_per_meter_kelvin>(),
            set: |i, v| i.air.conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(v),
        },
    },
    Field {
        name: "air_nu_m2_s",
        slot: Slot::Real {
            get: |i| i.air.kinematic_viscosity.value,
            set: |i, v| i.air.kinematic_viscosity = from_si(v),
        },
    },
    Field {
        name: "air_pr",
        slot: Slot::Real {
            get: |i| i.air.prandtl.get::<ratio>(),
            set: |i, v| i.air.prandtl = Ratio::new::<ratio>(v),
        },
    },
    Field {
        name: "air_velocity_m_s",
        slot: Slot::Real {
            get: |i| i.air.velocity.get::<meter_per_second>(),
            set: |i, v| i.air.velocity = Velocity::new::<meter_per_second>(v),
        },
    },
];

/// Renders a number, tagging the values JSON cannot represent.
fn number(value: f64) -> Value {
    if value.is_nan() {
        json!("nan")
    } else if value == f64::INFINITY {
        json!("inf")
    } else if value == f64::NEG_INFINITY {
        json!("-inf")
    } else {
        json!(value)
    }
}

/// Every accepted input key, sorted.
#[must_use]
pub fn allowed_input_fields() -> Vec<&'static str> {
    sorted_names(INPUT_FIELDS.iter().map(Field::name))
}

/// Sorted copy of a set of schema names.
pub(super) fn sorted_names(names: impl IntoIterator<Item = &'static str>) -> Vec<&'static str> {
    let mut names: Vec<_> = names.into_iter().collect();
    names.sort_unstable();
    names
}

/// Rejects keys that are not in `allowed`.
pub(super) fn reject_unknown(
    params: &Map<String, Value>,
    allowed: Vec<&'static str>,
) -> Result<(), ParamError> {
    let mut unknown: Vec<String> = params
        .keys()
        .filter(|key| !allowed.iter().any(|name| *name == key.as_str()))
        .cloned()
        .collect();

    if unknown.is_empty() {
        return Ok(());
    }

    unknown.sort_unstable();
    debug!("rejecting unknown parameter fields: {unknown:?}");
    Err(ParamError::UnknownFields { unknown, allowed })
}

impl Inputs {
    /// Builds inputs from a flat parameter map.
    ///
    /// Missing keys keep their [`Inputs::default`] values.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::UnknownFields`] if any key is outside
    /// [`INPUT_FIELDS`], or [`ParamError::InvalidValue`] if a value has the
    /// wrong type for its key.
    pub fn from_params(params: &Map<String, Value>) -> Result<Self, ParamError> {
        reject_unknown(params, allowed_input_fields())?;

        let mut inputs = Self::default();
        for field in &INPUT_FIELDS {
            if let Some(value) = params.get(field.name) {
                field.write(&mut inputs, value)?;
            }
        }
        Ok(inputs)
    }

    /// Builds inputs from a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::NotAnObject`] for any other JSON value, otherwise
    /// as [`Inputs::from_params`].
    pub fn from_json(value: &Value) -> Result<Self, ParamError> {
        let params = value.as_object().ok_or(ParamError::NotAnObject)?;
        Self::from_params(params)
    }

    /// Renders these inputs as a flat parameter map.
    #[must_use]
    pub fn to_params(&self) -> Map<String, Value> {
        INPUT_FIELDS
            .iter()
            .map(|field| (field.name.to_owned(), field.read(self)))
            .collect()
    }
}

impl Results {
    /// Renders these results as a flat map keyed by result field name.
    ///
    /// Values are in SI units with temperatures in °C; `flow_regime` is a
    /// string. Non-finite values are tagged as described in the module docs.
    #[must_use]
    pub fn to_params(&self) -> Map<String, Value> {
        let r = &self.resistances;
        [
            ("die_area_m2", number(self.die_area.get::<square_meter>())),
            ("fin_spacing_m", number(self.fin_spacing.get::<meter>())),
            ("re", number(self.reynolds.get::<ratio>())),
            ("nu", number(self.nusselt.get::<ratio>())),
            ("h_w_m2k", number(self.h.value)),
            ("a_total_m2", number(self.convective_area.get::<square_meter>())),
            ("r_jc_c_w", number(r.junction_case.value)),
            ("r_tim_c_w", number(r.tim.value)),
            ("r_cond_c_w", number(r.conduction.value)),
            ("r_conv_c_w", number(r.convection.value)),
            ("r_hs_c_w", number(r.heat_sink.value)),
            ("r_total_c_w", number(r.total.value)),
            ("t_junction_c", number(self.t_junction.value())),
            ("flow_regime", json!(self.regime.as_str())),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
    }
}

/// Parses, solves, and renders a flat parameter map in one call.
///
/// The returned object has an `inputs` map with every parameter (defaults
/// filled in) and a `results` map.
///
/// # Errors
///
/// Returns [`SolveParamsError::Params`] if the parameters are rejected, or
/// [`SolveParamsError::Geometry`] if the geometry cannot be solved.
pub fn solve_params(params: &Map<String, Value>) -> Result<Value, SolveParamsError> {
    let inputs = Inputs::from_params(params)?;
    let results = solve(&inputs)?;
    Ok(json!({
        "inputs": inputs.to_params(),
        "results": results.to_params(),
    }))
}
