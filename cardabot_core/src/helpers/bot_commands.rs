use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "Say hello and show the command list.")]
    Start,
    #[command(description = "Display this text.")]
    Help,
    #[command(description = "Change the chat language, e.g. /language PT. No argument resets to EN.")]
    Language(String),
    #[command(description = "Set the chat's default pool (group admins only).")]
    Setpool(String),
    #[command(description = "Show info about a pool, e.g. /pool EBS. No argument uses the chat default.")]
    Pool(String),
    #[command(description = "Show the current epoch progress.")]
    Epoch,
    #[command(description = "Show the protocol pot balances.")]
    Pots,
    #[command(description = "Show the network parameters.")]
    Netparams,
    #[command(description = "Show network statistics.")]
    Netstats,
    #[command(description = "Tip the user you are replying to, e.g. /tip 5.")]
    Tip(String),
    #[command(description = "Connect your web wallet (DM only).")]
    Connect,
    #[command(description = "Claim funds held for you.")]
    Claim,
    #[command(description = "Broadcast a message to all users (operator only).")]
    Alert(String),
    #[command(description = "EveryBlock Studio social links.")]
    Ebs,
}
