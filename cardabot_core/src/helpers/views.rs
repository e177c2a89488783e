use anyhow::{ensure, Result};

use crate::helpers::backend::MetricsProvider;
use crate::helpers::dto::PoolData;
use crate::helpers::economics::{calc_expected_blocks, calc_pool_saturation};

/// Everything the pool reply needs, derived figures included. Built fresh
/// per request and discarded after the reply is sent.
#[derive(Debug, Clone)]
pub struct PoolView {
    pub data: PoolData,
    pub saturation: f64,
    pub expected_blocks: f64,
}

/// Fetch a pool and derive its saturation and expected-blocks figures.
///
/// Returns `Ok(None)` when the upstream does not know the pool. Zero
/// denominators in the upstream snapshots are rejected here so the
/// economics functions never divide by zero; the rejection surfaces as a
/// normal request failure.
pub async fn build_pool_view<M: MetricsProvider>(
    provider: &M,
    pool_id: &str,
) -> Result<Option<PoolView>> {
    let Some(data) = provider.pool(pool_id).await? else {
        return Ok(None);
    };

    let params = provider.netparams().await?;
    let stats = provider.netstats().await?;
    let epoch = provider.epoch().await?;

    ensure!(params.n_opt > 0, "netparams reported n_opt = 0");
    ensure!(
        stats.circulating_supply > 0,
        "netstats reported an empty circulating supply"
    );
    ensure!(
        epoch.active_stake > 0,
        "epoch reported zero total active stake"
    );

    // Saturation is measured on live stake against the circulating supply;
    // the block estimate uses active stake against the epoch's active total.
    let saturation = calc_pool_saturation(
        data.live_stake as f64,
        stats.circulating_supply as f64,
        params.n_opt as f64,
    );
    let expected_blocks = calc_expected_blocks(
        data.active_stake_amount as f64,
        epoch.active_stake as f64,
        params.decentralisation_param,
    );

    Ok(Some(PoolView {
        data,
        saturation,
        expected_blocks,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::dto::{EpochData, NetParamsData, NetStatsData, PotsData};
    use async_trait::async_trait;

    struct FakeProvider {
        pool: Option<PoolData>,
        circulating_supply: u64,
        n_opt: u64,
        d_param: f64,
        total_active_stake: u64,
    }

    impl FakeProvider {
        fn with_pool(pool: PoolData) -> Self {
            Self {
                pool: Some(pool),
                circulating_supply: 32_000_000_000_000_000,
                n_opt: 500,
                d_param: 0.0,
                total_active_stake: 23_000_000_000_000_000,
            }
        }
    }

    fn sample_pool() -> PoolData {
        PoolData {
            ticker: "EBS".to_string(),
            name: "EveryBlock Studio".to_string(),
            description: "A pool".to_string(),
            homepage: "https://everyblock.studio".to_string(),
            pool_id: "pool1ndtsklata6rphamr6jw2p3ltnzayq3pezhg0djvn7n5js8rqlzh".to_string(),
            pledge: 100_000_000_000,
            fixed_cost: 340_000_000,
            margin: 0.02,
            live_stake: 48_000_000_000_000,
            active_stake_amount: 46_000_000_000_000,
            delegators_count: 120,
            epoch_blocks_count: 2,
            lifetime_blocks_count: 350,
        }
    }

    #[async_trait]
    impl MetricsProvider for FakeProvider {
        async fn epoch(&self) -> Result<EpochData> {
            Ok(EpochData {
                current_epoch: 299,
                current_slot: 39_916_800,
                slot_in_epoch: 237_600,
                percentage: 55.0,
                txs_in_epoch: 41_233,
                fees_in_epoch: 48_231_450_000,
                active_stake: self.total_active_stake,
                n_active_stake_pools: 3001,
                remaining_time: 194_400,
            })
        }

        async fn pool(&self, _pool_id: &str) -> Result<Option<PoolData>> {
            Ok(self.pool.clone())
        }

        async fn pots(&self) -> Result<PotsData> {
            unimplemented!("not used by the view builder tests")
        }

        async fn netparams(&self) -> Result<NetParamsData> {
            Ok(NetParamsData {
                a0: 0.3,
                min_pool_cost: 340_000_000,
                min_utxo_value: 1_000_000,
                n_opt: self.n_opt,
                rho: 0.003,
                tau: 0.2,
                decentralisation_param: self.d_param,
            })
        }

        async fn netstats(&self) -> Result<NetStatsData> {
            Ok(NetStatsData {
                circulating_supply: self.circulating_supply,
                percentage_in_stake: 71.2,
                stakepools: 3100,
                delegations: 800_000,
                load_15m: 0.4,
                load_1h: 0.5,
                load_24h: 0.6,
            })
        }
    }

    #[tokio::test]
    async fn test_build_pool_view_derives_saturation_and_blocks() {
        let mut provider = FakeProvider::with_pool(sample_pool());
        provider.circulating_supply = 1000;
        provider.n_opt = 1;
        provider.d_param = 0.1;
        provider.total_active_stake = 1000;

        let mut pool = sample_pool();
        pool.live_stake = 750;
        pool.active_stake_amount = 100;
        provider.pool = Some(pool);

        let view = build_pool_view(&provider, "EBS").await.unwrap().unwrap();
        assert_eq!(view.saturation, 0.75);
        assert!(
            (view.expected_blocks - 1944.0).abs() < 1e-9,
            "got {}",
            view.expected_blocks
        );
    }

    #[tokio::test]
    async fn test_build_pool_view_passes_not_found_through() {
        let mut provider = FakeProvider::with_pool(sample_pool());
        provider.pool = None;

        let view = build_pool_view(&provider, "NOPE").await.unwrap();
        assert!(view.is_none());
    }

    #[tokio::test]
    async fn test_build_pool_view_rejects_zero_denominators() {
        let mut provider = FakeProvider::with_pool(sample_pool());
        provider.n_opt = 0;
        assert!(build_pool_view(&provider, "EBS").await.is_err());

        let mut provider = FakeProvider::with_pool(sample_pool());
        provider.circulating_supply = 0;
        assert!(build_pool_view(&provider, "EBS").await.is_err());

        let mut provider = FakeProvider::with_pool(sample_pool());
        provider.total_active_stake = 0;
        assert!(build_pool_view(&provider, "EBS").await.is_err());
    }
}
