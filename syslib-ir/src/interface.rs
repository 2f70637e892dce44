//! Functions and errors exposed by a system contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Parameter;

/// Declared state mutability of a system function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    /// ABI tooling often reports non-payable functions with an empty string.
    #[default]
    #[serde(alias = "")]
    Nonpayable,
    Payable,
}

impl StateMutability {
    /// Get the ABI name of this mutability.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::Nonpayable => "nonpayable",
            StateMutability::Payable => "payable",
        }
    }

    /// Returns true for `pure` and `view`.
    pub fn is_read_only(&self) -> bool {
        matches!(self, StateMutability::Pure | StateMutability::View)
    }

    /// Returns true only for `nonpayable`.
    pub fn is_nonpayable(&self) -> bool {
        matches!(self, StateMutability::Nonpayable)
    }
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A callable function of a system contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceFunction {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub state_mutability: StateMutability,
    #[serde(default, alias = "returns")]
    pub return_parameters: Vec<Parameter>,
}

impl InterfaceFunction {
    /// Create a non-payable function without parameters or return values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            state_mutability: StateMutability::default(),
            return_parameters: Vec::new(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn mutability(mut self, state_mutability: StateMutability) -> Self {
        self.state_mutability = state_mutability;
        self
    }

    pub fn returns(mut self, param: Parameter) -> Self {
        self.return_parameters.push(param);
        self
    }

    /// Returns true if the function declares at least one return value.
    pub fn has_returns(&self) -> bool {
        !self.return_parameters.is_empty()
    }
}

/// A custom error declared by a system contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceError {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl InterfaceError {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }
}
