//! Fixed-layout text report for one simulated match
//!
//! Rendering is total: every stat and phase line is always printed, with a
//! placeholder standing in for any value the service left out.

use crate::core::types::MatchRequest;
use crate::report::payload::{Side, StatField, SummonerSheet, PHASES};

/// Shown for a missing stat
pub const STAT_PLACEHOLDER: &str = "N/A";

/// Shown for a missing narrative phase
pub const PHASE_PLACEHOLDER: &str = "Loading...";

const RULE: &str = "════════════════════════════════════════════";

/// Render the report for `request` from the service's `sheet`
///
/// Identity and tag are interpolated as given. The language tag plays no part
/// here; labels are always English.
pub fn render(request: &MatchRequest, sheet: &SummonerSheet) -> String {
    let mut s = String::with_capacity(1024);

    s.push('\n');
    s.push_str("🎮 **League of Legends Mock Match Simulation**\n");
    s.push_str(RULE);
    s.push_str("\n\n");

    for side in Side::BOTH {
        let riot_id = match side {
            Side::A => request.riot_id_a(),
            Side::B => request.riot_id_b(),
        };
        s.push_str(&format!(
            "**📊 Summoner {} ({}) - Last 10 Games Statistics:**\n",
            side.label(),
            riot_id
        ));
        for field in StatField::ALL {
            s.push_str(&stat_line(sheet, side, field));
            s.push('\n');
        }
        s.push('\n');
    }

    s.push_str("**🎯 Mock Match Simulation - Summoner's Rift:**\n");
    s.push_str(RULE);
    s.push_str("\n\n");

    for phase in PHASES {
        let text = sheet
            .phase(phase)
            .map(|v| v.to_string())
            .unwrap_or_else(|| PHASE_PLACEHOLDER.to_string());
        s.push_str(&format!("**Phase {}:** {}\n\n", phase.number, text));
    }

    s
}

/// One bullet line of a stat block, without the trailing newline
pub fn stat_line(sheet: &SummonerSheet, side: Side, field: StatField) -> String {
    let value = sheet
        .stat(side, field)
        .map(|v| v.to_string())
        .unwrap_or_else(|| STAT_PLACEHOLDER.to_string());
    format!("• {}: {}{}", field.label(), value, field.unit())
}
