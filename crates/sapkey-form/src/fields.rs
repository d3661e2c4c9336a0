//! The six credit memo fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One form field, identified by its SAP code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Field {
    /// Sales Document Type
    Auart,
    /// Sales Organization
    Vkorg,
    /// Distribution Channel
    Vtweg,
    /// Division
    Spart,
    /// Material
    Matnr,
    /// Order Quantity
    Zmeng,
}

impl Field {
    /// Every field in display order
    pub const ALL: [Field; 6] = [
        Field::Auart,
        Field::Vkorg,
        Field::Vtweg,
        Field::Spart,
        Field::Matnr,
        Field::Zmeng,
    ];

    /// SAP field code
    #[inline]
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Field::Auart => "AUART",
            Field::Vkorg => "VKORG",
            Field::Vtweg => "VTWEG",
            Field::Spart => "SPART",
            Field::Matnr => "MATNR",
            Field::Zmeng => "ZMENG",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Auart => "Sales Document Type",
            Field::Vkorg => "Sales Organization",
            Field::Vtweg => "Distribution Channel",
            Field::Spart => "Division",
            Field::Matnr => "Material",
            Field::Zmeng => "Order Quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for an unknown field code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field code: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Values typed into the form.
///
/// Stored exactly as entered; only validation trims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct FormData {
    pub auart: String,
    pub vkorg: String,
    pub vtweg: String,
    pub spart: String,
    pub matnr: String,
    pub zmeng: String,
}

impl FormData {
    /// Create an empty form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a field value
    #[inline]
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Auart => &self.auart,
            Field::Vkorg => &self.vkorg,
            Field::Vtweg => &self.vtweg,
            Field::Spart => &self.spart,
            Field::Matnr => &self.matnr,
            Field::Zmeng => &self.zmeng,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Auart => &mut self.auart,
            Field::Vkorg => &mut self.vkorg,
            Field::Vtweg => &mut self.vtweg,
            Field::Spart => &mut self.spart,
            Field::Matnr => &mut self.matnr,
            Field::Zmeng => &mut self.zmeng,
        };
        *slot = value.into();
    }

    /// Fields that are empty after trimming, in display order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Check if every field holds a non-blank value
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|f| !self.get(f).trim().is_empty())
    }
}
