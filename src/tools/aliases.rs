//! Declarative table of externally visible tool names
//!
//! Every entry maps its own parameter names onto [`MatchRequest`] and carries
//! its own default language. Entries hold no logic; all of them end up in
//! [`crate::matchup::MatchService::run`].

use crate::core::types::{MatchRequest, LANG_EN, LANG_ENGLISH, SUPPORTED_LANGUAGES};
use crate::tools::ToolError;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Name of the tool whose parameters match the service's form fields
pub const CANONICAL_TOOL: &str = "league_of_legends_summoner_vs_match";

/// One named entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolAlias {
    pub name: &'static str,
    pub description: &'static str,
    /// Parameter names for identity A, tag A, identity B, tag B
    pub identity_params: [&'static str; 4],
    pub identity_docs: [&'static str; 4],
    pub language_param: &'static str,
    pub language_doc: &'static str,
    pub default_language: &'static str,
}

/// Tool definition in the shape hosts expect from `tools/list`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub static TOOL_ALIASES: [ToolAlias; 6] = [
    ToolAlias {
        name: CANONICAL_TOOL,
        description: "Simulate a League of Legends mock match between two summoners. \
                      Returns detailed match simulation with summoner statistics and match progression.",
        identity_params: ["uidA", "tagA", "uidB", "tagB"],
        identity_docs: [
            "Riot ID of the first summoner",
            "Tag of the first summoner",
            "Riot ID of the second summoner",
            "Tag of the second summoner",
        ],
        language_param: "lang",
        language_doc: "Language for the simulation",
        default_language: LANG_EN,
    },
    ToolAlias {
        name: "lol_summoner_mock_battle",
        description: "Create a League of Legends mock battle simulation between two summoners. \
                      Returns complete battle simulation with stats and match progression.",
        identity_params: ["summoner1_id", "summoner1_tag", "summoner2_id", "summoner2_tag"],
        identity_docs: [
            "First summoner's Riot ID",
            "First summoner's tag",
            "Second summoner's Riot ID",
            "Second summoner's tag",
        ],
        language_param: "language",
        language_doc: "Simulation language",
        default_language: LANG_ENGLISH,
    },
    ToolAlias {
        name: "league_summoner_comparison",
        description: "Compare two League of Legends summoners and simulate their matchup. \
                      Returns detailed comparison and mock match simulation.",
        identity_params: ["player1_riot_id", "player1_tag", "player2_riot_id", "player2_tag"],
        identity_docs: [
            "First player's Riot ID",
            "First player's tag",
            "Second player's Riot ID",
            "Second player's tag",
        ],
        language_param: "output_language",
        language_doc: "Language for output",
        default_language: LANG_EN,
    },
    ToolAlias {
        name: "summoners_rift_simulation",
        description: "Run a Summoner's Rift simulation between two League of Legends players. \
                      Returns full Summoner's Rift match simulation with phase-by-phase breakdown.",
        identity_params: ["riot_id_a", "tag_a", "riot_id_b", "tag_b"],
        identity_docs: [
            "Riot ID of first summoner",
            "Tag of first summoner",
            "Riot ID of second summoner",
            "Tag of second summoner",
        ],
        language_param: "sim_language",
        language_doc: "Language for simulation text",
        default_language: LANG_EN,
    },
    ToolAlias {
        name: "lol_player_vs_player_match",
        description: "Generate a League of Legends player vs player match simulation. \
                      Returns complete PvP match simulation with statistics and battle progression.",
        identity_params: [
            "first_summoner_id",
            "first_summoner_tag",
            "second_summoner_id",
            "second_summoner_tag",
        ],
        identity_docs: [
            "First summoner's Riot ID",
            "First summoner's tag",
            "Second summoner's Riot ID",
            "Second summoner's tag",
        ],
        language_param: "match_language",
        language_doc: "Language for match narration",
        default_language: LANG_EN,
    },
    ToolAlias {
        name: "league_match_predictor",
        description: "Predict the outcome of a League of Legends match between two summoners. \
                      Returns match prediction with detailed analysis and simulation.",
        identity_params: ["summoner_a_id", "summoner_a_tag", "summoner_b_id", "summoner_b_tag"],
        identity_docs: [
            "First summoner's Riot ID",
            "First summoner's tag",
            "Second summoner's Riot ID",
            "Second summoner's tag",
        ],
        language_param: "prediction_language",
        language_doc: "Language for prediction output",
        default_language: LANG_ENGLISH,
    },
];

/// Look up an entry by its external name
pub fn find_alias(name: &str) -> Option<&'static ToolAlias> {
    TOOL_ALIASES.iter().find(|a| a.name == name)
}

impl ToolAlias {
    /// Map this alias's arguments onto the canonical request
    ///
    /// Identity arguments are required strings and pass through untouched.
    /// A missing or `null` language takes this alias's default.
    pub fn bind(&self, args: &Value) -> Result<MatchRequest, ToolError> {
        let empty = Map::new();
        let args = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(ToolError::InvalidArguments(
                    "arguments must be a JSON object".into(),
                ))
            }
        };

        let [a, ta, b, tb] = self.identity_params;
        let language = match args.get(self.language_param) {
            None | Some(Value::Null) => self.default_language.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(ToolError::InvalidArguments(format!(
                    "argument '{}' must be a string",
                    self.language_param
                )))
            }
        };

        Ok(MatchRequest {
            identity_a: required_str(args, a)?,
            tag_a: required_str(args, ta)?,
            identity_b: required_str(args, b)?,
            tag_b: required_str(args, tb)?,
            language,
        })
    }

    pub fn definition(&self) -> ToolDefinition {
        let mut properties = Map::new();
        for (param, doc) in self.identity_params.iter().zip(self.identity_docs.iter()) {
            properties.insert(
                (*param).to_string(),
                json!({ "type": "string", "description": doc }),
            );
        }
        properties.insert(
            self.language_param.to_string(),
            json!({
                "type": "string",
                "description": format!(
                    "{} ({})",
                    self.language_doc,
                    SUPPORTED_LANGUAGES.join(", ")
                ),
                "default": self.default_language,
            }),
        );

        ToolDefinition {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": Value::Object(properties),
                "required": self.identity_params,
            }),
        }
    }
}

fn required_str(args: &Map<String, Value>, name: &str) -> Result<String, ToolError> {
    match args.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ToolError::InvalidArguments(format!(
            "argument '{}' must be a string",
            name
        ))),
        None => Err(ToolError::InvalidArguments(format!(
            "missing required argument '{}'",
            name
        ))),
    }
}
