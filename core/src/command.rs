use serde::{Deserialize, Serialize};

/// All player intents the presentation layer can forward.
/// Variants are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Session ───────────────────────────────────
    Start,
    Reset,

    // ── Pan ───────────────────────────────────────
    AddIngredient { id: String },
    SetFireLevel { level: i32 },
    Stir,
    ToggleCover,
    Serve,
}

impl PlayerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start              => "start",
            Self::Reset              => "reset",
            Self::AddIngredient { .. } => "add_ingredient",
            Self::SetFireLevel { .. }  => "set_fire_level",
            Self::Stir               => "stir",
            Self::ToggleCover        => "toggle_cover",
            Self::Serve              => "serve",
        }
    }
}
