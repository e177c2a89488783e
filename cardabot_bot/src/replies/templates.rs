//! Reply template texts, one record per template with all four languages.
//! Texts the original bot only ever shipped in English fall back to the
//! English string for every code, mirroring its template lookup rule.
//! Placeholders use `{name}` markers substituted by `replies::handler`.

pub struct Translations {
    pub en: &'static str,
    pub pt: &'static str,
    pub kr: &'static str,
    pub jp: &'static str,
}

impl Translations {
    const fn en_only(text: &'static str) -> Self {
        Self {
            en: text,
            pt: text,
            kr: text,
            jp: text,
        }
    }
}

pub const WELCOME: Translations = Translations {
    en: "Hello! I'm <b>CardaBot</b> 🤖, a Cardano information bot developed by <b>EveryBlock Studio</b> (ticker: <code>EBS</code>).",
    pt: "Olá! Sou o <b>CardaBot</b> 🤖, um bot de informações da rede Cardano desenvolvido pela <b>EveryBlock Studio</b> (ticker: <code>EBS</code>).",
    kr: "안녕하세요 저는 <b>CardaBot</b> 🤖입니다. 저는 <b>EveryBlock Studio</b> (ticker: <code>EBS</code>) 가 개발한 카르다노 정보 봇입니다.",
    jp: "こんにちは! 私は <b>CardaBot</b> 🤖です。<b>EveryBlock Studio</b> (ticker: <code>EBS</code>)が開発したカルダノ情報ボットです。",
};

pub const HELP: Translations = Translations {
    en: "These are the commands I understand for now:

/start
/help
/pool TICKER
/epoch
/pots
/netparams
/netstats
/setpool TICKER
/tip AMOUNT
/connect
/claim
/ebs
/language LANG
<code>   : LANG = [{languages}]</code>",
    pt: "Esses são os comandos que eu entendo por enquanto:

/start
/help
/pool TICKER
/epoch
/pots
/netparams
/netstats
/setpool TICKER
/tip AMOUNT
/connect
/claim
/ebs
/language LANG
<code>   : LANG = [{languages}]</code>",
    kr: "아래의 명령어를 입력하실 수 있습니다.

/start
/help
/pool 풀 티커
/epoch
/pots
/netparams
/netstats
/setpool 풀 티커
/tip 금액
/connect
/claim
/ebs
/language 언어
<code>   : LANG = [{languages}]</code>",
    jp: "いま使えるコマンドはこちらです。:

/start
/help
/pool ティッカー
/epoch
/pots
/netparams
/netstats
/setpool ティッカー
/tip 金額
/connect
/claim
/ebs
/language 言語
<code>   : LANG = [{languages}]</code>",
};

pub const SOMETHING_WENT_WRONG: Translations =
    Translations::en_only("Sorry, something went wrong 😔");

pub const NOT_AUTHORIZED: Translations =
    Translations::en_only("🚫 Sorry, only group administrators can do that.");

pub const CHANGE_LANG_SUCCESS: Translations = Translations {
    en: "✅ Your language was modified successfully!",
    pt: "✅ Seu idioma foi alterado com sucesso!",
    kr: "✅ 한국어로의 전환이 성공했습니다!",
    jp: "✅ 言語の切り替えに成功しました!",
};

pub const CHANGE_LANG_ERROR: Translations =
    Translations::en_only("Sorry, I don't speak <code>{code}</code> yet 😞");

pub const CHANGE_POOL_SUCCESS: Translations =
    Translations::en_only("✅ Your default pool was updated successfully!");

pub const POOL_WAIT: Translations = Translations {
    en: "I'm searching for the pool, one moment please... ⌛",
    pt: "Estou procurando a pool, um momento por favor... ⌛",
    kr: "풀을 검색하는 중... 조금만 기다려 주세요. ⌛",
    jp: "プールを探しています、少々お待ちください... ⌛",
};

pub const POOL_NOT_FOUND: Translations = Translations {
    en: "Sorry, I didn't find the <code>{ticker}</code> pool 😞",
    pt: "Desculpa, não achei a pool <code>{ticker}</code> 😞",
    kr: "죄송합니다 풀 <code>{ticker}</code> 를 찾을 수 없습니다 😞",
    jp: "ごめんなさい! <code>{ticker}</code> プールは見つかりませんでした 😞",
};

pub const POOL_INFO: Translations = Translations {
    en: "<b><code>{ticker}</code> {name}</b>
<i>{description}</i>
🌐 {homepage}

<b>ℹ️ Pool info</b>
    id: <code>{pool_id}</code>
    pledge: <code>{pledge} ₳</code>
    cost: <code>{fixed_cost} ₳</code>
    margin: <code>{margin}%</code>

<b>📈 Metrics</b>
    saturation: <code>{saturation}%</code> {saturation_icon}
    live stake: <code>{live_stake} ₳</code>
    active stake: <code>{active_stake} ₳</code>
    delegators: <code>{delegators}</code>
    expected blocks: <code>{expected_blocks}</code>
    blocks this epoch: <code>{epoch_blocks}</code>{block_symbol}
    lifetime blocks: <code>{lifetime_blocks}</code>",
    pt: "<b><code>{ticker}</code> {name}</b>
<i>{description}</i>
🌐 {homepage}

<b>ℹ️ Informações da pool</b>
    id: <code>{pool_id}</code>
    pledge: <code>{pledge} ₳</code>
    custo: <code>{fixed_cost} ₳</code>
    margem: <code>{margin}%</code>

<b>📈 Métricas</b>
    saturação: <code>{saturation}%</code> {saturation_icon}
    stake vivo: <code>{live_stake} ₳</code>
    stake ativo: <code>{active_stake} ₳</code>
    delegadores: <code>{delegators}</code>
    blocos esperados: <code>{expected_blocks}</code>
    blocos nesta época: <code>{epoch_blocks}</code>{block_symbol}
    blocos no total: <code>{lifetime_blocks}</code>",
    kr: "<b><code>{ticker}</code> {name}</b>
<i>{description}</i>
🌐 {homepage}

<b>ℹ️ 풀 정보</b>
    id: <code>{pool_id}</code>
    담보량: <code>{pledge} ₳</code>
    고정수수료: <code>{fixed_cost} ₳</code>
    상대수수료: <code>{margin}%</code>

<b>📈 상세정보</b>
    포화도: <code>{saturation}%</code> {saturation_icon}
    라이브 스테이크: <code>{live_stake} ₳</code>
    액티브 스테이크: <code>{active_stake} ₳</code>
    위임자 수: <code>{delegators}</code>
    예상 블록 수: <code>{expected_blocks}</code>
    이번 에포크 블록: <code>{epoch_blocks}</code>{block_symbol}
    생성 블록 수: <code>{lifetime_blocks}</code>",
    jp: "<b><code>{ticker}</code> {name}</b>
<i>{description}</i>
🌐 {homepage}

<b>ℹ️ プール情報</b>
    id: <code>{pool_id}</code>
    誓約（資本）: <code>{pledge} ₳</code>
    固定費: <code>{fixed_cost} ₳</code>
    変動費: <code>{margin}%</code>

<b>📈 メトリクス</b>
    飽和: <code>{saturation}%</code> {saturation_icon}
    ライブステーク: <code>{live_stake} ₳</code>
    アクティブステーク: <code>{active_stake} ₳</code>
    委任者数: <code>{delegators}</code>
    予想ブロック: <code>{expected_blocks}</code>
    今エポックのブロック: <code>{epoch_blocks}</code>{block_symbol}
    生成ブロック: <code>{lifetime_blocks}</code>",
};

pub const EPOCH_INFO: Translations = Translations {
    en: "Here what I got:

🔄 <b>Epoch progress</b>
<code>{progress_bar} {percentage}%</code>
    Current epoch: <code>{current_epoch}</code>
    Slots: <code>{slot_in_epoch}/{slots_per_epoch}</code>
    Txs in epoch: <code>{txs}</code>
    Fees in epoch: <code>{fees} ₳</code>
    Active stake: <code>{active_stake} ₳</code>
    Active pools: <code>{pools}</code>
    Remaining time: <code>{remaining_time}</code>",
    pt: "Aqui o que eu encontrei:

🔄 <b>Progresso da época</b>
<code>{progress_bar} {percentage}%</code>
    Época atual: <code>{current_epoch}</code>
    Slots: <code>{slot_in_epoch}/{slots_per_epoch}</code>
    Txs na época: <code>{txs}</code>
    Taxas na época: <code>{fees} ₳</code>
    Stake ativo: <code>{active_stake} ₳</code>
    Pools ativas: <code>{pools}</code>
    Tempo restante: <code>{remaining_time}</code>",
    kr: "검색 결과:

🔄 <b>에포크 진행 상황</b>
<code>{progress_bar} {percentage}%</code>
    현재 에포크: <code>{current_epoch}</code>
    슬롯: <code>{slot_in_epoch}/{slots_per_epoch}</code>
    에포크 트랜잭션: <code>{txs}</code>
    에포크 수수료: <code>{fees} ₳</code>
    액티브 스테이크: <code>{active_stake} ₳</code>
    활성 풀: <code>{pools}</code>
    에포크 남은 시간: <code>{remaining_time}</code>",
    jp: "取得した情報:

🔄 <b>エポックの進捗</b>
<code>{progress_bar} {percentage}%</code>
    現在のエポック: <code>{current_epoch}</code>
    スロット: <code>{slot_in_epoch}/{slots_per_epoch}</code>
    エポック内の取引: <code>{txs}</code>
    エポック内の手数料: <code>{fees} ₳</code>
    アクティブステーク: <code>{active_stake} ₳</code>
    アクティブプール: <code>{pools}</code>
    残りの期間: <code>{remaining_time}</code>",
};

pub const POTS: Translations = Translations::en_only(
    "🏦 <b>Cardano pots</b>
    treasury: <code>{treasury} ₳</code>
    reserves: <code>{reserves} ₳</code>
    fees: <code>{fees} ₳</code>
    rewards: <code>{rewards} ₳</code>
    utxo: <code>{utxo} ₳</code>
    deposits: <code>{deposits} ₳</code>",
);

pub const NETPARAMS: Translations = Translations::en_only(
    "⚙️ <b>Network parameters</b>
    a0: <code>{a0}</code>
    min pool cost: <code>{min_pool_cost} ₳</code>
    min utxo value: <code>{min_utxo_value}</code>
    nOpt: <code>{n_opt}</code>
    rho: <code>{rho}</code>
    tau: <code>{tau}</code>
    d: <code>{d}</code>",
);

pub const NETSTATS: Translations = Translations::en_only(
    "📊 <b>Network statistics</b>
    ₳ in circulation: <code>{circulating} ₳</code>
    percentage in stake: <code>{staked_percentage}%</code>
    stake pools: <code>{stakepools}</code>
    delegations: <code>{delegations}</code>
    load 15m: <code>{load_15m}%</code>
    load 1h: <code>{load_1h}%</code>
    load 24h: <code>{load_24h}%</code>",
);

pub const TIP_REFUSED: Translations = Translations::en_only(
    "To tip someone, reply to one of their messages with /tip AMOUNT (more than {min_tip} ₳) 💸",
);

pub const TIP_SIGN_PROMPT: Translations = Translations::en_only(
    "⬇️ Click the button below to sign your transaction using your web wallet:",
);

pub const TIP_SUBMITTED: Translations =
    Translations::en_only("✅ Your transaction was submitted!");

pub const TIP_FAIL: Translations =
    Translations::en_only("⌛ Your tip expired before it was signed. Please try again.");

pub const CONNECT_PROMPT: Translations = Translations::en_only(
    "⬇️ Click the button below to connect your web wallet to CardaBot, so you can start tipping",
);

pub const CONNECTION_SUCCESS: Translations =
    Translations::en_only("✅ Your wallet is now connected to CardaBot!");

pub const CONNECTION_REFUSED: Translations =
    Translations::en_only("🔒 Wallet connection only works in a private chat with me.");

pub const ENDPOINT_REFUSED: Translations =
    Translations::en_only("🚫 You are not allowed to use this command.");

pub const CLAIM_WAIT: Translations =
    Translations::en_only("⌛️ We're transfering your funds, please wait...");

pub const CLAIM_SUCCESS: Translations =
    Translations::en_only("✅ Your funds were successfuly transfered to you!");

pub const END_OF_EPOCH_SUMMARY: Translations = Translations::en_only(
    "🎉 Epoch <code>{epoch}</code> has ended! Here's to another one 🥂",
);

pub const DAY: Translations = Translations {
    en: "day",
    pt: "dia",
    kr: "일",
    jp: "日",
};

pub const DAYS: Translations = Translations {
    en: "days",
    pt: "dias",
    kr: "일",
    jp: "日",
};
