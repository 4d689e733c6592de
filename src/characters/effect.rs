//! Status effect tags attached to abilities.
//!
//! Abilities are authored with string tags such as `BUFF_ATK_30` or
//! `STUN_1`. They are parsed into [`EffectTag`] so they can be described
//! and inspected, but the battle engine resolves no mechanics from them:
//! using an ability with effects only produces a log line.
//!
//! Parsing never fails. Anything unrecognised is kept verbatim in
//! [`EffectTag::Unknown`], and `Display` reproduces the authored text.

use serde::{Deserialize, Serialize};

/// Stat touched by a buff or debuff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    Attack,
    Defense,
    Speed,
    Accuracy,
    Evasion,
}

impl Stat {
    fn code(self) -> &'static str {
        match self {
            Stat::Attack => "ATK",
            Stat::Defense => "DEF",
            Stat::Speed => "SPD",
            Stat::Accuracy => "ACC",
            Stat::Evasion => "EVASION",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "ATK" => Some(Stat::Attack),
            "DEF" => Some(Stat::Defense),
            "SPD" => Some(Stat::Speed),
            "ACC" => Some(Stat::Accuracy),
            "EVASION" => Some(Stat::Evasion),
            _ => None,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Speed => "speed",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }
}

/// A parsed status effect tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectTag {
    Buff { stat: Stat, percent: u32 },
    Debuff { stat: Stat, percent: u32 },
    Stun { turns: u32 },
    DrainKi(u32),
    RestoreKi(u32),
    NegateEnergyAttack,
    Unknown(String),
}

impl EffectTag {
    /// Parse an authored tag.
    ///
    /// ```
    /// use strategy_arena::characters::{EffectTag, Stat};
    ///
    /// assert_eq!(
    ///     EffectTag::parse("BUFF_ATK_30"),
    ///     EffectTag::Buff { stat: Stat::Attack, percent: 30 }
    /// );
    /// assert_eq!(EffectTag::parse("WOBBLE"), EffectTag::Unknown("WOBBLE".into()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('_').collect();
        let parsed = match parts.as_slice() {
            ["BUFF", stat, n] => Stat::from_code(stat)
                .zip(n.parse().ok())
                .map(|(stat, percent)| EffectTag::Buff { stat, percent }),
            ["DEBUFF", stat, n] => Stat::from_code(stat)
                .zip(n.parse().ok())
                .map(|(stat, percent)| EffectTag::Debuff { stat, percent }),
            ["STUN", n] => n.parse().ok().map(|turns| EffectTag::Stun { turns }),
            ["DRAIN", "KI", n] => n.parse().ok().map(EffectTag::DrainKi),
            ["RESTORE", "KI", n] => n.parse().ok().map(EffectTag::RestoreKi),
            ["NEGATE", "ENERGY", "ATTACK"] => Some(EffectTag::NegateEnergyAttack),
            _ => None,
        };
        parsed.unwrap_or_else(|| EffectTag::Unknown(raw.to_string()))
    }

    /// Human-readable description for battle log lines.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            EffectTag::Buff { stat, percent } => format!("{} +{}%", stat.name(), percent),
            EffectTag::Debuff { stat, percent } => format!("{} -{}%", stat.name(), percent),
            EffectTag::Stun { turns } => format!("stun for {} turn(s)", turns),
            EffectTag::DrainKi(amount) => format!("drain {} ki", amount),
            EffectTag::RestoreKi(amount) => format!("restore {} ki", amount),
            EffectTag::NegateEnergyAttack => "negate energy attack".to_string(),
            EffectTag::Unknown(raw) => raw.to_lowercase(),
        }
    }
}

impl std::fmt::Display for EffectTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectTag::Buff { stat, percent } => write!(f, "BUFF_{}_{}", stat.code(), percent),
            EffectTag::Debuff { stat, percent } => write!(f, "DEBUFF_{}_{}", stat.code(), percent),
            EffectTag::Stun { turns } => write!(f, "STUN_{}", turns),
            EffectTag::DrainKi(amount) => write!(f, "DRAIN_KI_{}", amount),
            EffectTag::RestoreKi(amount) => write!(f, "RESTORE_KI_{}", amount),
            EffectTag::NegateEnergyAttack => f.write_str("NEGATE_ENERGY_ATTACK"),
            EffectTag::Unknown(raw) => f.write_str(raw),
        }
    }
}

impl From<String> for EffectTag {
    fn from(raw: String) -> Self {
        EffectTag::parse(&raw)
    }
}

impl From<EffectTag> for String {
    fn from(tag: EffectTag) -> Self {
        tag.to_string()
    }
}
