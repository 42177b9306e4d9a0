//! Tool catalog and dispatch.
//!
//! The heater exposes three tools:
//!
//! | Tool | Arguments | Result |
//! |------|-----------|--------|
//! | `get_setpoint` | none | [`SetpointReading`] |
//! | `modify_setpoint` | `temperature: int` in `[8, 25]` | [`SetpointChange`] |
//! | `get_consumption` | `days: int` in `[1, 365]` | [`ConsumptionReport`] |
//!
//! Arguments arrive as untyped JSON. Anything that is not a JSON integer
//! (strings, floats, booleans, null) is rejected before range checks.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::consumption::{ConsumptionDays, ConsumptionReport};
use crate::error::ToolError;
use crate::setpoint::{Setpoint, SetpointChange, SetpointReading};
use crate::state::AppState;

/// The tools this server offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Read the current setpoint.
    GetSetpoint,
    /// Replace the setpoint.
    ModifySetpoint,
    /// Estimate energy use over the last N days.
    GetConsumption,
}

impl Tool {
    /// Every tool, in catalog order.
    pub const ALL: [Self; 3] = [Self::GetSetpoint, Self::ModifySetpoint, Self::GetConsumption];

    /// Look a tool up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Wire name of the tool.
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetSetpoint => "get_setpoint",
            Self::ModifySetpoint => "modify_setpoint",
            Self::GetConsumption => "get_consumption",
        }
    }

    /// Human-readable description shown to clients.
    pub const fn description(self) -> &'static str {
        match self {
            Self::GetSetpoint => "Get the current heater setpoint temperature.",
            Self::ModifySetpoint => {
                "Set heater target temperature. Returns the previous setpoint, \
                 the new setpoint, and status. Temperature is in Celsius and \
                 must be between 8 and 25."
            }
            Self::GetConsumption => {
                "Get energy consumption for the last N days (1-365). Returns \
                 the daily consumption list, total kWh and average kWh per day."
            }
        }
    }

    /// JSON Schema for the tool arguments.
    pub fn input_schema(self) -> Value {
        match self {
            Self::GetSetpoint => json!({
                "type": "object",
                "properties": {},
            }),
            Self::ModifySetpoint => json!({
                "type": "object",
                "properties": {
                    "temperature": {
                        "type": "integer",
                        "minimum": Setpoint::MIN,
                        "maximum": Setpoint::MAX,
                        "description": "Target temperature in Celsius",
                    },
                },
                "required": ["temperature"],
            }),
            Self::GetConsumption => json!({
                "type": "object",
                "properties": {
                    "days": {
                        "type": "integer",
                        "minimum": ConsumptionDays::MIN,
                        "maximum": ConsumptionDays::MAX,
                        "description": "Number of days to retrieve consumption for",
                    },
                },
                "required": ["days"],
            }),
        }
    }

    /// Catalog entry for `tools/list`.
    pub fn descriptor(self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

/// One entry of the tool catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Wire name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
    /// Argument schema.
    pub input_schema: Value,
}

/// Successful result of a tool call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    /// `get_setpoint` result.
    Setpoint(SetpointReading),
    /// `modify_setpoint` result.
    Change(SetpointChange),
    /// `get_consumption` result.
    Consumption(ConsumptionReport),
}

/// Run `tool` with `args` against `state`.
///
/// Validation failures leave the state untouched.
pub async fn call_tool(
    state: &AppState,
    tool: Tool,
    args: &Map<String, Value>,
) -> Result<ToolOutput, ToolError> {
    match tool {
        Tool::GetSetpoint => Ok(ToolOutput::Setpoint(state.setpoint.reading().await)),
        Tool::ModifySetpoint => {
            let requested = integer_arg(args, "temperature", "Temperature")?;
            let next = Setpoint::new(requested)?;
            Ok(ToolOutput::Change(state.setpoint.update(next).await))
        }
        Tool::GetConsumption => {
            let requested = integer_arg(args, "days", "Days")?;
            let days = ConsumptionDays::new(requested)?;
            Ok(ToolOutput::Consumption(state.consumption(days).await))
        }
    }
}

/// Extract an integer argument.
///
/// Unsigned values too large for `i64` are clamped to `i64::MAX` so they
/// fail the range check rather than the type check.
fn integer_arg(
    args: &Map<String, Value>,
    key: &'static str,
    label: &'static str,
) -> Result<i64, ToolError> {
    let value = args.get(key).ok_or(ToolError::MissingArgument(key))?;
    match value.as_i64() {
        Some(n) => Ok(n),
        None if value.is_u64() => Ok(i64::MAX),
        None => Err(ToolError::NotAnInteger(label)),
    }
}
