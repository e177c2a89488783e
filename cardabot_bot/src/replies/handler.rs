use cardabot_core::helpers::dto::{EpochData, NetParamsData, NetStatsData, PotsData};
use cardabot_core::helpers::economics::SLOTS_PER_EPOCH;
use cardabot_core::helpers::format::{
    block_symbol, fmt_ada, fmt_time, lovelace_to_ada, progress_bar, saturation_icon,
};
use cardabot_core::helpers::i18n::Language;
use cardabot_core::helpers::views::PoolView;
use teloxide::utils::html;

use crate::replies::templates::{self, Translations};
use crate::utils::MIN_TIP_ADA;

/// Renders every user-facing HTML reply in the chat's language.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReplies {
    language: Language,
}

impl HtmlReplies {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn text(&self, translations: &Translations) -> &'static str {
        match self.language {
            Language::En => translations.en,
            Language::Pt => translations.pt,
            Language::Kr => translations.kr,
            Language::Jp => translations.jp,
        }
    }

    fn day_label(&self, days: u64) -> &'static str {
        if days == 1 {
            self.text(&templates::DAY)
        } else {
            self.text(&templates::DAYS)
        }
    }

    pub fn welcome(&self) -> String {
        self.text(&templates::WELCOME).to_string()
    }

    pub fn help(&self) -> String {
        self.text(&templates::HELP)
            .replace("{languages}", &Language::supported_codes())
    }

    pub fn something_went_wrong(&self) -> String {
        self.text(&templates::SOMETHING_WENT_WRONG).to_string()
    }

    pub fn not_authorized(&self) -> String {
        self.text(&templates::NOT_AUTHORIZED).to_string()
    }

    pub fn change_lang_success(&self) -> String {
        self.text(&templates::CHANGE_LANG_SUCCESS).to_string()
    }

    pub fn change_lang_error(&self, code: &str) -> String {
        self.text(&templates::CHANGE_LANG_ERROR)
            .replace("{code}", &html::escape(code))
    }

    pub fn change_default_pool_success(&self) -> String {
        self.text(&templates::CHANGE_POOL_SUCCESS).to_string()
    }

    pub fn pool_wait(&self) -> String {
        self.text(&templates::POOL_WAIT).to_string()
    }

    pub fn pool_not_found(&self, ticker: &str) -> String {
        self.text(&templates::POOL_NOT_FOUND)
            .replace("{ticker}", &html::escape(ticker))
    }

    pub fn pool_info(&self, view: &PoolView) -> String {
        let data = &view.data;
        self.text(&templates::POOL_INFO)
            .replace("{ticker}", &html::escape(&data.ticker))
            .replace("{name}", &html::escape(&data.name))
            .replace("{description}", &html::escape(&data.description))
            .replace("{homepage}", &data.homepage)
            .replace("{pool_id}", &data.pool_id)
            .replace("{pledge}", &fmt_ada(lovelace_to_ada(data.pledge)))
            .replace("{fixed_cost}", &fmt_ada(lovelace_to_ada(data.fixed_cost)))
            .replace("{margin}", &format!("{:.2}", data.margin * 100.0))
            .replace("{saturation}", &format!("{:.2}", view.saturation * 100.0))
            .replace("{saturation_icon}", saturation_icon(view.saturation))
            .replace("{live_stake}", &fmt_ada(lovelace_to_ada(data.live_stake)))
            .replace(
                "{active_stake}",
                &fmt_ada(lovelace_to_ada(data.active_stake_amount)),
            )
            .replace("{delegators}", &data.delegators_count.to_string())
            .replace("{expected_blocks}", &format!("{:.1}", view.expected_blocks))
            .replace("{epoch_blocks}", &data.epoch_blocks_count.to_string())
            .replace("{block_symbol}", block_symbol(data.epoch_blocks_count))
            .replace("{lifetime_blocks}", &data.lifetime_blocks_count.to_string())
    }

    pub fn epoch_info(&self, epoch: &EpochData) -> String {
        let remaining_days = epoch.remaining_time / 86_400;
        self.text(&templates::EPOCH_INFO)
            .replace("{progress_bar}", &progress_bar(epoch.percentage))
            .replace("{percentage}", &format!("{:.1}", epoch.percentage))
            .replace("{current_epoch}", &epoch.current_epoch.to_string())
            .replace("{slot_in_epoch}", &epoch.slot_in_epoch.to_string())
            .replace("{slots_per_epoch}", &SLOTS_PER_EPOCH.to_string())
            .replace("{txs}", &epoch.txs_in_epoch.to_string())
            .replace("{fees}", &fmt_ada(lovelace_to_ada(epoch.fees_in_epoch)))
            .replace(
                "{active_stake}",
                &fmt_ada(lovelace_to_ada(epoch.active_stake)),
            )
            .replace("{pools}", &epoch.n_active_stake_pools.to_string())
            .replace(
                "{remaining_time}",
                &fmt_time(epoch.remaining_time, self.day_label(remaining_days)),
            )
    }

    pub fn pots(&self, pots: &PotsData) -> String {
        self.text(&templates::POTS)
            .replace("{treasury}", &fmt_ada(lovelace_to_ada(pots.treasury)))
            .replace("{reserves}", &fmt_ada(lovelace_to_ada(pots.reserves)))
            .replace("{fees}", &fmt_ada(lovelace_to_ada(pots.fees)))
            .replace("{rewards}", &fmt_ada(lovelace_to_ada(pots.rewards)))
            .replace("{utxo}", &fmt_ada(lovelace_to_ada(pots.utxo)))
            .replace("{deposits}", &fmt_ada(lovelace_to_ada(pots.deposits)))
    }

    pub fn netparams(&self, params: &NetParamsData) -> String {
        self.text(&templates::NETPARAMS)
            .replace("{a0}", &params.a0.to_string())
            .replace(
                "{min_pool_cost}",
                &fmt_ada(lovelace_to_ada(params.min_pool_cost)),
            )
            .replace("{min_utxo_value}", &params.min_utxo_value.to_string())
            .replace("{n_opt}", &params.n_opt.to_string())
            .replace("{rho}", &params.rho.to_string())
            .replace("{tau}", &params.tau.to_string())
            .replace("{d}", &params.decentralisation_param.to_string())
    }

    pub fn netstats(&self, stats: &NetStatsData) -> String {
        self.text(&templates::NETSTATS)
            .replace(
                "{circulating}",
                &fmt_ada(lovelace_to_ada(stats.circulating_supply)),
            )
            .replace(
                "{staked_percentage}",
                &format!("{:.1}", stats.percentage_in_stake),
            )
            .replace("{stakepools}", &stats.stakepools.to_string())
            .replace("{delegations}", &stats.delegations.to_string())
            .replace("{load_15m}", &format!("{:.1}", stats.load_15m * 100.0))
            .replace("{load_1h}", &format!("{:.1}", stats.load_1h * 100.0))
            .replace("{load_24h}", &format!("{:.1}", stats.load_24h * 100.0))
    }

    pub fn tip_refused(&self) -> String {
        self.text(&templates::TIP_REFUSED)
            .replace("{min_tip}", &format!("{}", MIN_TIP_ADA))
    }

    pub fn tip_sign_prompt(&self) -> String {
        self.text(&templates::TIP_SIGN_PROMPT).to_string()
    }

    pub fn tip_submitted(&self) -> String {
        self.text(&templates::TIP_SUBMITTED).to_string()
    }

    pub fn tip_fail(&self) -> String {
        self.text(&templates::TIP_FAIL).to_string()
    }

    pub fn connect_prompt(&self) -> String {
        self.text(&templates::CONNECT_PROMPT).to_string()
    }

    pub fn connection_success(&self) -> String {
        self.text(&templates::CONNECTION_SUCCESS).to_string()
    }

    pub fn connection_refused(&self) -> String {
        self.text(&templates::CONNECTION_REFUSED).to_string()
    }

    pub fn endpoint_refused(&self) -> String {
        self.text(&templates::ENDPOINT_REFUSED).to_string()
    }

    pub fn claim_wait(&self) -> String {
        self.text(&templates::CLAIM_WAIT).to_string()
    }

    pub fn claim_success(&self) -> String {
        self.text(&templates::CLAIM_SUCCESS).to_string()
    }

    pub fn end_of_epoch_summary(&self, epoch: u64) -> String {
        self.text(&templates::END_OF_EPOCH_SUMMARY)
            .replace("{epoch}", &epoch.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardabot_core::helpers::dto::PoolData;

    fn sample_view() -> PoolView {
        PoolView {
            data: PoolData {
                ticker: "EBS".to_string(),
                name: "EveryBlock Studio".to_string(),
                description: "Every block counts <3".to_string(),
                homepage: "https://everyblock.studio".to_string(),
                pool_id: "pool1ndtsklata6rphamr6jw2p3ltnzayq3pezhg0djvn7n5js8rqlzh"
                    .to_string(),
                pledge: 100_000_000_000,
                fixed_cost: 340_000_000,
                margin: 0.02,
                live_stake: 48_000_000_000_000,
                active_stake_amount: 46_000_000_000_000,
                delegators_count: 120,
                epoch_blocks_count: 2,
                lifetime_blocks_count: 350,
            },
            saturation: 0.8,
            expected_blocks: 33.4,
        }
    }

    #[test]
    fn test_pool_info_substitutes_and_escapes() {
        let reply = HtmlReplies::new(Language::En).pool_info(&sample_view());

        assert!(reply.contains("<code>EBS</code>"));
        assert!(reply.contains("100.00K ₳")); // pledge
        assert!(reply.contains("340 ₳")); // fixed cost
        assert!(reply.contains("2.00%")); // margin
        assert!(reply.contains("80.00%")); // saturation
        assert!(reply.contains("🟡")); // saturation icon for 0.8
        assert!(reply.contains("33.4")); // expected blocks
        assert!(reply.contains(" 🎉")); // blocks produced this epoch
        assert!(reply.contains("Every block counts &lt;3")); // escaped description
        assert!(!reply.contains('{'), "unsubstituted placeholder: {}", reply);
    }

    #[test]
    fn test_epoch_info_renders_bar_and_remaining_time() {
        let epoch = EpochData {
            current_epoch: 299,
            current_slot: 39_916_800,
            slot_in_epoch: 237_600,
            percentage: 55.0,
            txs_in_epoch: 41_233,
            fees_in_epoch: 48_231_450_000,
            active_stake: 23_916_812_345_678_901,
            n_active_stake_pools: 3001,
            remaining_time: 2 * 86_400 + 3600,
        };

        let reply = HtmlReplies::new(Language::En).epoch_info(&epoch);
        assert!(reply.contains("▰▰▰▰▰▱▱▱▱▱ 55.0%"));
        assert!(reply.contains("237600/432000"));
        assert!(reply.contains("2 days, 1h0m"));
        assert!(!reply.contains('{'), "unsubstituted placeholder: {}", reply);

        let reply_pt = HtmlReplies::new(Language::Pt).epoch_info(&epoch);
        assert!(reply_pt.contains("2 dias, 1h0m"));
    }

    #[test]
    fn test_help_lists_supported_languages() {
        let reply = HtmlReplies::new(Language::En).help();
        assert!(reply.contains("EN, PT, KR, JP"));
    }

    #[test]
    fn test_change_lang_error_names_the_rejected_code() {
        let reply = HtmlReplies::new(Language::En).change_lang_error("XX");
        assert!(reply.contains("<code>XX</code>"));
    }

    #[test]
    fn test_unlocalized_templates_fall_back_to_english() {
        let en = HtmlReplies::new(Language::En).not_authorized();
        let jp = HtmlReplies::new(Language::Jp).not_authorized();
        assert_eq!(en, jp);
    }

    #[test]
    fn test_localized_templates_differ_per_language() {
        let en = HtmlReplies::new(Language::En).pool_wait();
        let pt = HtmlReplies::new(Language::Pt).pool_wait();
        assert_ne!(en, pt);
    }

    #[test]
    fn test_end_of_epoch_summary_names_the_epoch() {
        let reply = HtmlReplies::default().end_of_epoch_summary(299);
        assert!(reply.contains("<code>299</code>"));
    }
}
