//! Typed parameter declarations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Data location keyword attached to reference-type parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataLocation {
    Memory,
    Calldata,
    Storage,
}

impl DataLocation {
    /// Get the Solidity keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataLocation::Memory => "memory",
            DataLocation::Calldata => "calldata",
            DataLocation::Storage => "storage",
        }
    }

    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "memory" => Some(DataLocation::Memory),
            "calldata" => Some(DataLocation::Calldata),
            "storage" => Some(DataLocation::Storage),
            _ => None,
        }
    }
}

/// A single `(type, name)` declaration such as `uint256 amount` or
/// `string memory label`.
///
/// Return parameters are frequently unnamed, so `name` is optional. The type
/// string is kept verbatim and never interpreted, apart from folding the
/// `payable` modifier into `address payable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Parameter {
    pub ty: String,
    pub location: Option<DataLocation>,
    pub name: Option<String>,
}

/// Error produced when a declaration string cannot be split into parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseParameterError {
    pub declaration: String,
    pub reason: &'static str,
}

impl fmt::Display for ParseParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid parameter declaration '{}': {}",
            self.declaration, self.reason
        )
    }
}

impl std::error::Error for ParseParameterError {}

impl Parameter {
    /// Create an unnamed parameter of the given type.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            location: None,
            name: None,
        }
    }

    /// Create a named parameter.
    pub fn named(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ty).with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_location(mut self, location: DataLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// The parameter name, if declared.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ty)?;
        if let Some(location) = self.location {
            write!(f, " {}", location.as_str())?;
        }
        if let Some(name) = &self.name {
            write!(f, " {}", name)?;
        }
        Ok(())
    }
}

impl FromStr for Parameter {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = |reason| ParseParameterError {
            declaration: s.to_string(),
            reason,
        };

        let mut tokens = s.split_whitespace();
        let ty = tokens.next().ok_or_else(|| error("declaration is empty"))?;
        if DataLocation::from_keyword(ty).is_some() {
            return Err(error("declaration must start with a type"));
        }

        let mut next = tokens.next();
        let mut param = if ty == "address" && next == Some("payable") {
            next = tokens.next();
            Parameter::new("address payable")
        } else {
            Parameter::new(ty)
        };
        if let Some(location) = next.and_then(DataLocation::from_keyword) {
            param.location = Some(location);
            next = tokens.next();
        }
        if let Some(name) = next {
            param.name = Some(name.to_string());
        }
        if tokens.next().is_some() {
            return Err(error("expected '<type> [location] [name]'"));
        }

        Ok(param)
    }
}

impl TryFrom<String> for Parameter {
    type Error = ParseParameterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Parameter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
