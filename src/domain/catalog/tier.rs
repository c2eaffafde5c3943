//! Listing visibility tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration applied when an activation carries an unrecognized tier id.
///
/// A paid purchase is never rejected over a cosmetic metadata defect;
/// it falls back to the shortest duration instead.
pub const DEFAULT_DURATION_DAYS: i64 = 30;

/// A purchasable visibility level for a listing.
///
/// Precedence for display is premium over featured over basic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Featured,
    Premium,
}

impl Tier {
    /// How long a listing in this tier stays active, in days.
    pub fn duration_days(&self) -> i64 {
        match self {
            Tier::Basic => 30,
            Tier::Featured => 45,
            Tier::Premium => 60,
        }
    }

    /// Parses a tier id, returning `None` for unrecognized values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Tier::Basic),
            "featured" => Some(Tier::Featured),
            "premium" => Some(Tier::Premium),
            _ => None,
        }
    }

    /// Parses the tier preselection query parameter used by the
    /// listing-creation entry point. Unrecognized or absent values
    /// default to basic.
    pub fn from_query_param(param: Option<&str>) -> Self {
        param.and_then(Self::parse).unwrap_or(Tier::Basic)
    }

    /// Resolves the duration for a declared tier id from event metadata,
    /// falling back to [`DEFAULT_DURATION_DAYS`] for unknown ids.
    pub fn duration_days_for(tier_id: Option<&str>) -> i64 {
        tier_id
            .and_then(Self::parse)
            .map(|t| t.duration_days())
            .unwrap_or(DEFAULT_DURATION_DAYS)
    }

    /// The canonical string form of the tier id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Featured => "featured",
            Tier::Premium => "premium",
        }
    }

    /// Sort key for display ordering. Premium sorts first.
    pub fn display_rank(&self) -> u8 {
        match self {
            Tier::Premium => 0,
            Tier::Featured => 1,
            Tier::Basic => 2,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_match_tier_pricing() {
        assert_eq!(Tier::Basic.duration_days(), 30);
        assert_eq!(Tier::Featured.duration_days(), 45);
        assert_eq!(Tier::Premium.duration_days(), 60);
    }

    #[test]
    fn parse_recognizes_all_tiers() {
        assert_eq!(Tier::parse("basic"), Some(Tier::Basic));
        assert_eq!(Tier::parse("featured"), Some(Tier::Featured));
        assert_eq!(Tier::parse("premium"), Some(Tier::Premium));
    }

    #[test]
    fn parse_rejects_unknown_and_cased_values() {
        assert_eq!(Tier::parse("platinum"), None);
        assert_eq!(Tier::parse("Premium"), None);
        assert_eq!(Tier::parse(""), None);
    }

    #[test]
    fn unknown_tier_falls_back_to_thirty_days() {
        assert_eq!(Tier::duration_days_for(Some("gold")), 30);
        assert_eq!(Tier::duration_days_for(None), 30);
        assert_eq!(Tier::duration_days_for(Some("premium")), 60);
    }

    #[test]
    fn query_param_defaults_to_basic() {
        assert_eq!(Tier::from_query_param(None), Tier::Basic);
        assert_eq!(Tier::from_query_param(Some("deluxe")), Tier::Basic);
        assert_eq!(Tier::from_query_param(Some("featured")), Tier::Featured);
    }

    #[test]
    fn display_rank_puts_premium_first() {
        assert!(Tier::Premium.display_rank() < Tier::Featured.display_rank());
        assert!(Tier::Featured.display_rank() < Tier::Basic.display_rank());
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        assert_eq!(serde_json::to_string(&Tier::Premium).unwrap(), "\"premium\"");
        let t: Tier = serde_json::from_str("\"featured\"").unwrap();
        assert_eq!(t, Tier::Featured);
    }
}
