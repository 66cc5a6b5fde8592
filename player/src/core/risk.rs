//! Risk bands offered with each task and their fixed success probabilities.

use serde::{Deserialize, Deserializer, Serialize};

/// Ordered success-probability tier, safest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    #[serde(rename = "Sure Thing")]
    SureThing,
    #[serde(rename = "Piece of Cake")]
    PieceOfCake,
    #[serde(rename = "Walk in the park")]
    WalkInThePark,
    #[serde(rename = "Quite likely")]
    QuiteLikely,
    #[serde(rename = "Hmmm....")]
    Hmmm,
    #[serde(rename = "Risky")]
    Risky,
    #[serde(rename = "Playing with fire")]
    PlayingWithFire,
    #[serde(rename = "Suicide mission")]
    SuicideMission,
    #[serde(rename = "Impossible")]
    Impossible,
}

impl RiskBand {
    /// All tiers ordered from safest to most dangerous.
    pub const ALL: [RiskBand; 9] = [
        RiskBand::SureThing,
        RiskBand::PieceOfCake,
        RiskBand::WalkInThePark,
        RiskBand::QuiteLikely,
        RiskBand::Hmmm,
        RiskBand::Risky,
        RiskBand::PlayingWithFire,
        RiskBand::SuicideMission,
        RiskBand::Impossible,
    ];

    /// Success probability in `[0, 1]`, strictly decreasing along [`RiskBand::ALL`].
    pub const fn probability(self) -> f64 {
        match self {
            RiskBand::SureThing => 1.0,
            RiskBand::PieceOfCake => 0.95,
            RiskBand::WalkInThePark => 0.85,
            RiskBand::QuiteLikely => 0.70,
            RiskBand::Hmmm => 0.50,
            RiskBand::Risky => 0.35,
            RiskBand::PlayingWithFire => 0.20,
            RiskBand::SuicideMission => 0.05,
            RiskBand::Impossible => 0.0,
        }
    }

    /// Label used by the game service.
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::SureThing => "Sure Thing",
            RiskBand::PieceOfCake => "Piece of Cake",
            RiskBand::WalkInThePark => "Walk in the park",
            RiskBand::QuiteLikely => "Quite likely",
            RiskBand::Hmmm => "Hmmm....",
            RiskBand::Risky => "Risky",
            RiskBand::PlayingWithFire => "Playing with fire",
            RiskBand::SuicideMission => "Suicide mission",
            RiskBand::Impossible => "Impossible",
        }
    }

    /// Parse a service label, ignoring surrounding whitespace and ASCII case.
    pub fn from_label(label: &str) -> Option<RiskBand> {
        let label = label.trim();
        RiskBand::ALL
            .into_iter()
            .find(|band| band.label().eq_ignore_ascii_case(label))
    }

    /// The `count` safest tiers.
    pub fn safest(count: usize) -> &'static [RiskBand] {
        &RiskBand::ALL[..count.min(RiskBand::ALL.len())]
    }

    /// Whether this tier is one of the `count` most dangerous tiers.
    pub fn is_among_most_dangerous(self, count: usize) -> bool {
        let cutoff = RiskBand::ALL.len().saturating_sub(count);
        RiskBand::ALL[cutoff..].contains(&self)
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Decode an optional label, mapping unknown labels to `None` instead of failing.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<RiskBand>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(RiskBand::from_label))
}
