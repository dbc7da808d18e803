use serde::{Deserialize, Serialize};

use crate::initialization::InitSpec;

/// A layer as a caller describes it, before any validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerConfig {
    Dense {
        width: i64,
        #[serde(default)]
        activation: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        kernel_init: Option<InitSpec>,
        #[serde(default)]
        bias_init: Option<InitSpec>,
    },
}

impl LayerConfig {
    /// A dense layer with the default initializers.
    pub fn dense(width: i64, activation: &str, name: Option<&str>) -> Self {
        LayerConfig::Dense {
            width,
            activation: Some(activation.to_string()),
            name: name.map(str::to_string),
            kernel_init: None,
            bias_init: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelConfig {
    Sequential { layers: Vec<LayerConfig> },
}
