use crate::application_ports::Locator;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use rand::Rng;
use tracing::instrument;

/// Create a custom embed
#[poise::command(slash_command, rename = "embed", required_permissions = "ADMINISTRATOR")]
#[instrument(level = "info", skip(ctx))]
pub async fn command<D: Sync + Locator>(
    ctx: Context<'_, D>,
    #[description = "Embed title"] title: String,
    #[description = "Embed description"] description: String,
) -> Result<(), Error> {
    let colour = serenity::Colour::new(rand::thread_rng().gen_range(0..=0x00FF_FFFFu32));
    let embed = serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(colour);

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}
