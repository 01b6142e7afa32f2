//! Typed view of the `summoners` object returned by the simulation service
//!
//! The service does not publish a schema. Every recognized key is optional,
//! unknown keys are ignored, and `null` counts as absent.

use crate::core::error::{Result, SimError};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A single value from the payload
///
/// The service sends strings for narrative text and numbers for stats,
/// but nothing stops it from sending either in either place.
///
/// Display is JSON text, not a host-language repr: strings verbatim,
/// numbers as sent (`5.0` stays `5.0`), booleans as `true`/`false`, arrays
/// and objects compact (`[1,2]`). A `null` never gets here; it counts as
/// absent and shows the placeholder instead of `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Other(Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Which summoner a stat belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn label(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

/// The six per-summoner averages shown in each stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Kills,
    Assists,
    Deaths,
    Kda,
    DamageDealt,
    WinRate,
}

impl StatField {
    /// Display order within a stat block
    pub const ALL: [StatField; 6] = [
        StatField::Kills,
        StatField::Assists,
        StatField::Deaths,
        StatField::Kda,
        StatField::DamageDealt,
        StatField::WinRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatField::Kills => "Average Kills",
            StatField::Assists => "Average Assists",
            StatField::Deaths => "Average Deaths",
            StatField::Kda => "Average KDA",
            StatField::DamageDealt => "Average Damage Dealt",
            StatField::WinRate => "Win Rate",
        }
    }

    /// Suffix printed after the value, placeholder included
    pub fn unit(self) -> &'static str {
        match self {
            StatField::WinRate => "%",
            _ => "",
        }
    }

    /// Payload key for this stat on the given side
    pub fn key(self, side: Side) -> &'static str {
        match (self, side) {
            (StatField::Kills, Side::A) => "avg_kills",
            (StatField::Assists, Side::A) => "avg_assists",
            (StatField::Deaths, Side::A) => "avg_deaths",
            (StatField::Kda, Side::A) => "avg_kda",
            (StatField::DamageDealt, Side::A) => "avg_deal",
            (StatField::WinRate, Side::A) => "win_rate",
            (StatField::Kills, Side::B) => "avg_kills_b",
            (StatField::Assists, Side::B) => "avg_assists_b",
            (StatField::Deaths, Side::B) => "avg_deaths_b",
            (StatField::Kda, Side::B) => "avg_kda_b",
            (StatField::DamageDealt, Side::B) => "avg_deal_b",
            (StatField::WinRate, Side::B) => "win_rate_b",
        }
    }
}

/// A narrative phase line: the number shown and the key it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub number: u8,
    pub key: &'static str,
}

/// Phases in display order. The service never fills a third phase, so
/// there is no `p3` entry.
pub const PHASES: [Phase; 9] = [
    Phase { number: 1, key: "p1" },
    Phase { number: 2, key: "p2" },
    Phase { number: 4, key: "p4" },
    Phase { number: 5, key: "p5" },
    Phase { number: 6, key: "p6" },
    Phase { number: 7, key: "p7" },
    Phase { number: 8, key: "p8" },
    Phase { number: 9, key: "p9" },
    Phase { number: 10, key: "p10" },
];

/// Stats and narrative for one simulated match
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SummonerSheet {
    avg_kills: Option<FieldValue>,
    avg_assists: Option<FieldValue>,
    avg_deaths: Option<FieldValue>,
    avg_kda: Option<FieldValue>,
    avg_deal: Option<FieldValue>,
    win_rate: Option<FieldValue>,
    avg_kills_b: Option<FieldValue>,
    avg_assists_b: Option<FieldValue>,
    avg_deaths_b: Option<FieldValue>,
    avg_kda_b: Option<FieldValue>,
    avg_deal_b: Option<FieldValue>,
    win_rate_b: Option<FieldValue>,
    p1: Option<FieldValue>,
    p2: Option<FieldValue>,
    p4: Option<FieldValue>,
    p5: Option<FieldValue>,
    p6: Option<FieldValue>,
    p7: Option<FieldValue>,
    p8: Option<FieldValue>,
    p9: Option<FieldValue>,
    p10: Option<FieldValue>,
}

impl SummonerSheet {
    /// Extract the sheet from a full response body
    ///
    /// A body without `summoners` yields an empty sheet. A body that is not
    /// an object, or a `summoners` member that is not an object, is an
    /// unexpected shape.
    pub fn from_body(body: Value) -> Result<Self> {
        let Value::Object(mut top) = body else {
            return Err(SimError::Unexpected(
                "response body is not a JSON object".into(),
            ));
        };

        match top.remove("summoners") {
            None => Ok(Self::default()),
            Some(summoners @ Value::Object(_)) => Ok(serde_json::from_value(summoners)?),
            Some(other) => Err(SimError::Unexpected(format!(
                "'summoners' is not a JSON object (got {})",
                json_kind(&other)
            ))),
        }
    }

    pub fn stat(&self, side: Side, field: StatField) -> Option<&FieldValue> {
        let slot = match (field, side) {
            (StatField::Kills, Side::A) => &self.avg_kills,
            (StatField::Assists, Side::A) => &self.avg_assists,
            (StatField::Deaths, Side::A) => &self.avg_deaths,
            (StatField::Kda, Side::A) => &self.avg_kda,
            (StatField::DamageDealt, Side::A) => &self.avg_deal,
            (StatField::WinRate, Side::A) => &self.win_rate,
            (StatField::Kills, Side::B) => &self.avg_kills_b,
            (StatField::Assists, Side::B) => &self.avg_assists_b,
            (StatField::Deaths, Side::B) => &self.avg_deaths_b,
            (StatField::Kda, Side::B) => &self.avg_kda_b,
            (StatField::DamageDealt, Side::B) => &self.avg_deal_b,
            (StatField::WinRate, Side::B) => &self.win_rate_b,
        };
        slot.as_ref()
    }

    pub fn phase(&self, phase: Phase) -> Option<&FieldValue> {
        let slot = match phase.number {
            1 => &self.p1,
            2 => &self.p2,
            4 => &self.p4,
            5 => &self.p5,
            6 => &self.p6,
            7 => &self.p7,
            8 => &self.p8,
            9 => &self.p9,
            10 => &self.p10,
            _ => return None,
        };
        slot.as_ref()
    }

    /// Number of recognized keys that carry a value
    pub fn filled_count(&self) -> usize {
        let stats = Side::BOTH
            .into_iter()
            .flat_map(|side| StatField::ALL.into_iter().map(move |f| (side, f)))
            .filter(|&(side, f)| self.stat(side, f).is_some())
            .count();
        let phases = PHASES.iter().filter(|&&p| self.phase(p).is_some()).count();
        stats + phases
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
