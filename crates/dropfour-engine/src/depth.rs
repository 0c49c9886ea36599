//! Depth policy: how deep to search given the state of the game.

use crate::config::DepthPolicy;

/// Target search depth.
///
/// A step function on `piece_count`, plus `threat_bonus` when `threat_signal`
/// is set (either side holds an open three) and `narrow_bonus` when at most
/// `narrow_columns` columns are playable. Never exceeds `empty_cells` and
/// never drops below 1.
pub fn target_depth(
    piece_count: usize,
    threat_signal: bool,
    legal_count: usize,
    empty_cells: usize,
    policy: &DepthPolicy,
) -> u8 {
    let base = policy
        .steps
        .iter()
        .find(|&&(below, _)| piece_count < below)
        .map_or(policy.endgame_depth, |&(_, depth)| depth);

    let mut depth = base;
    if threat_signal {
        depth = depth.saturating_add(policy.threat_bonus);
    }
    if legal_count <= policy.narrow_columns {
        depth = depth.saturating_add(policy.narrow_bonus);
    }

    let cap = u8::try_from(empty_cells).unwrap_or(u8::MAX);
    depth.min(cap).max(1)
}
