use crate::locator;
use anyhow::anyhow;
use clap::Args;
use infrastructure::discord::DiscordAdapter;
use infrastructure::storage::JsonBindingRepository;
use poise::serenity_prelude as serenity;
use presentation::discord::run_bot;
use serenity::all::{ClientBuilder, GuildId};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::instrument;

#[derive(Args)]
pub struct ServeArgs {
    /// The token for the Discord bot
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    pub discord_bot_token: String,
    /// The ID of the Discord guild (server) for the bot to serve in
    #[arg(long, env = "DISCORD_GUILD_ID")]
    pub guild: u64,
    /// The JSON file the message bindings are persisted in
    #[arg(long, env = "STORAGE_PATH", default_value = "storage.json")]
    pub storage_path: PathBuf,
}

#[instrument(level = "trace", skip(args))]
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let ServeArgs {
        discord_bot_token,
        guild,
        storage_path,
    } = args;
    let guild = GuildId::new(guild);
    let intents = serenity::GatewayIntents::non_privileged();

    let serenity_client = ClientBuilder::new(&discord_bot_token, intents).await?.http;

    let discord_adapter = Arc::new(DiscordAdapter::new(serenity_client, guild));
    let binding_repository = Arc::new(JsonBindingRepository::new(storage_path));

    let locator = locator::ApplicationPortLocator::new(discord_adapter, binding_repository);

    let bot = tokio::spawn(run_bot(locator, discord_bot_token, intents, guild));

    bot.await?.map_err(|e| anyhow!(e))?;

    Ok(())
}
