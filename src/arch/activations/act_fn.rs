use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ModelErr, Result};

/// The nonlinearity applied elementwise after a layer's linear transformation.
///
/// This is a tag only: nothing in the crate evaluates it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFn {
    #[default]
    Linear,
    Relu,
    Sigmoid,
    Tanh,
    Softmax,
    Softplus,
    Softsign,
    Elu,
    Selu,
    Exponential,
}
use ActFn::*;

impl ActFn {
    /// Every supported activation, in declaration order.
    pub const ALL: [ActFn; 10] = [
        Linear,
        Relu,
        Sigmoid,
        Tanh,
        Softmax,
        Softplus,
        Softsign,
        Elu,
        Selu,
        Exponential,
    ];

    /// Returns the identifier of this activation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Linear => "linear",
            Relu => "relu",
            Sigmoid => "sigmoid",
            Tanh => "tanh",
            Softmax => "softmax",
            Softplus => "softplus",
            Softsign => "softsign",
            Elu => "elu",
            Selu => "selu",
            Exponential => "exponential",
        }
    }
}

impl FromStr for ActFn {
    type Err = ModelErr;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|act_fn| act_fn.as_str() == s)
            .ok_or_else(|| ModelErr::UnknownActivation {
                layer: None,
                got: s.to_string(),
            })
    }
}

impl fmt::Display for ActFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known() {
        for act_fn in ActFn::ALL {
            assert_eq!(act_fn.as_str().parse::<ActFn>().unwrap(), act_fn);
        }
    }

    #[test]
    fn parse_unknown() {
        let err = "ReLU".parse::<ActFn>().unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            ModelErr::UnknownActivation { layer: None, ref got } if got == "ReLU"
        ));
    }

    #[test]
    fn serde_identifiers() {
        let act_fn: ActFn = serde_json::from_str("\"relu\"").unwrap();
        assert_eq!(act_fn, Relu);
        assert_eq!(serde_json::to_string(&Softmax).unwrap(), "\"softmax\"");
    }
}
