//! Conversion options.
//!
//! Options are plain data so they can be loaded from a JSON file by the CLI
//! or passed across the wasm boundary. Every field has a default, so `{}` is a
//! valid options document.

use serde::{Deserialize, Serialize};

use crate::shapes::NumberFormat;
use crate::ConvertError;

/// Namespace declared on the synthetic root wrapped around bare fragments.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Tunables for [`convert_with`](crate::convert_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Decimal places for computed coordinates. `None` keeps full precision.
    pub precision: Option<u8>,
    /// Indent the output document by this many spaces per level.
    pub indent: Option<usize>,
    /// `xmlns` for the root wrapped around bare fragments.
    pub namespace: String,
    /// Fill applied when no shape declares `fill` or `stroke`.
    pub default_fill: String,
    /// Stroke applied when no shape declares `fill` or `stroke`.
    pub default_stroke: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            precision: None,
            indent: None,
            namespace: SVG_NAMESPACE.to_string(),
            default_fill: "none".to_string(),
            default_stroke: "currentColor".to_string(),
        }
    }
}

impl Options {
    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn number_format(&self) -> NumberFormat {
        NumberFormat {
            precision: self.precision,
        }
    }
}
