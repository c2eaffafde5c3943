//! Read-side presentation logic over listing snapshots.
//!
//! Pure functions only: activity partitioning, tier grouping, display
//! ranking, and the round-robin window math used by the premium
//! carousel. Rendering itself is an external concern.

use chrono::{DateTime, Utc};

use super::model::Listing;
use crate::domain::catalog::Tier;

/// Active listings grouped by tier for the public board.
#[derive(Debug, Clone, Default)]
pub struct TierBoard {
    pub premium: Vec<Listing>,
    pub featured: Vec<Listing>,
    pub basic: Vec<Listing>,
}

impl TierBoard {
    /// Total number of listings across all tiers.
    pub fn total(&self) -> usize {
        self.premium.len() + self.featured.len() + self.basic.len()
    }
}

/// Splits listings into (active, expired) at `now`.
///
/// Exhaustive and disjoint: a listing is active iff `expires_at > now`
/// strictly, so the boundary instant counts as expired.
pub fn partition_by_activity(
    listings: Vec<Listing>,
    now: DateTime<Utc>,
) -> (Vec<Listing>, Vec<Listing>) {
    listings.into_iter().partition(|l| l.is_active(now))
}

/// Groups active listings by tier, preserving input order within each
/// group.
pub fn partition_by_tier(active: Vec<Listing>) -> TierBoard {
    let mut board = TierBoard::default();
    for listing in active {
        match listing.tier {
            Tier::Premium => board.premium.push(listing),
            Tier::Featured => board.featured.push(listing),
            Tier::Basic => board.basic.push(listing),
        }
    }
    board
}

/// Orders listings for a flat display: premium first, then featured,
/// then basic; newest first within a tier.
///
/// The sort is stable, so equal-tier equal-timestamp inputs keep their
/// relative order and repeated calls never shuffle.
pub fn rank_for_display(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| {
        a.tier
            .display_rank()
            .cmp(&b.tier.display_rank())
            .then(b.created_at.cmp(&a.created_at))
    });
    listings
}

/// The carousel's visible window at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationWindow {
    /// Index of the foregrounded listing.
    pub active: usize,
    /// Peek panel before the active card, if shown.
    pub prev: Option<usize>,
    /// Peek panel (or second card) after the active one, if shown.
    pub next: Option<usize>,
}

/// Computes the round-robin carousel window for `len` listings at tick
/// `tick`.
///
/// The active index is `tick % len`; adjacent peeks are the
/// neighbouring indices modulo `len`. Edge cases:
/// - `len == 0`: nothing to show, `None`.
/// - `len == 1`: static single card, no rotation, no peeks.
/// - `len == 2`: two-way alternation, active plus next, no peek panels.
pub fn rotation_window(len: usize, tick: u64) -> Option<RotationWindow> {
    match len {
        0 => None,
        1 => Some(RotationWindow {
            active: 0,
            prev: None,
            next: None,
        }),
        2 => {
            let active = (tick % 2) as usize;
            Some(RotationWindow {
                active,
                prev: None,
                next: Some((active + 1) % 2),
            })
        }
        n => {
            let active = (tick % n as u64) as usize;
            Some(RotationWindow {
                active,
                prev: Some((active + n - 1) % n),
                next: Some((active + 1) % n),
            })
        }
    }
}
