use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - numeric bounds applied by the filter stage.
/// `None` means no constraint on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,
}

impl FilterCriteria {
    pub fn is_unbounded(&self) -> bool {
        *self == Self::default()
    }
}

/// The four filter inputs exactly as typed, bound two-way to the text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub start_year: String,
    pub end_year: String,
    pub min_revenue: String,
    pub max_revenue: String,
}

impl FilterForm {
    /// Lenient conversion: blank or non-numeric text leaves the bound unset.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            start_year: parse_year(&self.start_year),
            end_year: parse_year(&self.end_year),
            min_revenue: parse_amount(&self.min_revenue),
            max_revenue: parse_amount(&self.max_revenue),
        }
    }
}

/// Leading integer of the input, the way `parseInt` reads it:
/// "2021.7" -> 2021, "2e3" -> 2, "abc" -> unset.
fn parse_year(input: &str) -> Option<i32> {
    let input = input.trim_start();
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let sign_len = input.len() - unsigned.len();
    input[..sign_len + digits].parse().ok()
}

fn parse_amount(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Value Object - sort order selected by the user
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum SortKey {
    #[default]
    #[strum(serialize = "")]
    #[serde(rename = "")]
    None,

    #[strum(serialize = "date")]
    #[serde(rename = "date")]
    Date,

    #[strum(serialize = "revenue")]
    #[serde(rename = "revenue")]
    Revenue,

    #[strum(serialize = "netIncome")]
    #[serde(rename = "netIncome")]
    NetIncome,
}

impl SortKey {
    /// Unknown selector values fall back to the unsorted order
    pub fn parse_lenient(value: &str) -> Self {
        Self::from_str(value).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "Sort By",
            SortKey::Date => "Date",
            SortKey::Revenue => "Revenue",
            SortKey::NetIncome => "Net Income",
        }
    }
}

/// Loader lifecycle: `Idle -> Loading -> Ready | Stalled`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    /// The request failed. Rendered exactly like `Loading`.
    Stalled,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        !matches!(self, LoadPhase::Ready)
    }
}
