use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::ChartConfiguration;

pub const CHART_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisting or shipping a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartConfigurationJsonContractV1 {
    pub schema_version: u32,
    pub options: ChartConfiguration,
}

impl ChartConfiguration {
    /// Renderer option object, ready to pass as `options` to the chart call.
    pub fn to_json_value(&self) -> ChartResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Serializes the renderer option object to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Parses a renderer option object. Unknown keys are rejected and the
    /// result is validated.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options: {e}")))?;
        config.validated()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigurationJsonContractV1 {
            schema_version: CHART_CONFIGURATION_JSON_SCHEMA_V1,
            options: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize options contract v1: {e}"))
        })
    }

    /// Accepts either a bare option object or a versioned envelope.
    ///
    /// The shape is picked by the presence of a top-level `schema_version` key,
    /// so decoding errors always refer to the shape the caller sent.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse options json payload: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return Self::from_json_str(input);
        }
        debug!("decoding options contract envelope");

        let payload: ChartConfigurationJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse options json payload: {e}"))
            })?;
        if payload.schema_version != CHART_CONFIGURATION_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported options schema version: {}",
                payload.schema_version
            )));
        }
        payload.options.validated()
    }
}
