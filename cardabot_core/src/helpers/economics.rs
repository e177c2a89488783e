//! Stake-pool economics. Inputs come straight from upstream snapshots;
//! callers validate denominators are non-zero before invoking.

/// Block slots available per epoch on this ledger.
pub const BLOCKS_PER_EPOCH: u64 = 21_600;

/// Slots per epoch, shown in the epoch reply.
pub const SLOTS_PER_EPOCH: u64 = 432_000;

/// Ratio of the pool stake to the optimal per-pool stake point
/// (`circulating_supply / n_opt`). Not clamped: an over-saturated pool
/// yields a value above 1.0.
pub fn calc_pool_saturation(pool_stake: f64, circulating_supply: f64, n_opt: f64) -> f64 {
    let saturation_point = circulating_supply / n_opt;
    pool_stake / saturation_point
}

/// Blocks a pool can expect this epoch from its share of the active stake,
/// given the fraction of blocks the protocol still reserves for core nodes.
pub fn calc_expected_blocks(pool_stake: f64, total_stake: f64, d_param: f64) -> f64 {
    let blocks_available = BLOCKS_PER_EPOCH as f64 * (1.0 - d_param);
    blocks_available * (pool_stake / total_stake)
}
