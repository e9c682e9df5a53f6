use crate::intervention::Intervention;
use serde::{Deserialize, Serialize};

/// Everything a control surface can ask the session to do.
/// Variants are appended only, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Clock control ─────────────────────────────
    Pause,
    Resume,
    SetTimeSpeed { speed: u32 },

    // ── Interventions ─────────────────────────────
    SetIntervention {
        intervention: Intervention,
        enabled:      bool,
    },
}
