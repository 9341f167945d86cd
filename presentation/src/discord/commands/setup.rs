use crate::application_ports::Locator;
use crate::discord::{response, Context, Error};
use application_ports::component_registry::ComponentRegistryError;
use domain_shared::discord::ChannelId;
use poise::CreateReply;
use tracing::{info, instrument};

/// Create a multi-role selector
#[poise::command(slash_command, rename = "setup", required_permissions = "ADMINISTRATOR")]
#[instrument(level = "info", skip(ctx, roles))]
pub async fn command<D: Sync + Locator>(
    ctx: Context<'_, D>,
    #[description = "Comma-separated role mentions"] roles: String,
) -> Result<(), Error> {
    info!(
        channel_id = ctx.channel_id().get(),
        user_id = ctx.author().id.get(),
        "Creating a role selector message",
    );

    let registry_port = ctx.data().get_component_registry_port();

    let response = match registry_port
        .create_setup(ChannelId(ctx.channel_id().get()), &roles)
        .await
    {
        Ok(()) => CreateReply::default()
            .content("✅ Setup message created.")
            .ephemeral(true),
        Err(ComponentRegistryError::NoValidRoles | ComponentRegistryError::RoleNotFound) => {
            CreateReply::default()
                .content("❌ No valid roles found.")
                .ephemeral(true)
        }
        Err(ComponentRegistryError::TemporaryUnavailable) => {
            response::unavailable::temporary_unavailable()
        }
    };

    ctx.send(response).await?;

    Ok(())
}
