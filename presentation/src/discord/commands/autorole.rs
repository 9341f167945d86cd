use crate::application_ports::Locator;
use crate::discord::{response, Context, Error};
use application_ports::component_registry::ComponentRegistryError;
use domain_shared::discord::{ChannelId, RoleId};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use tracing::{error, info, instrument};

/// Send an auto role message
#[poise::command(
    slash_command,
    rename = "autorole",
    required_permissions = "ADMINISTRATOR"
)]
#[instrument(level = "info", skip(ctx, role))]
pub async fn command<D: Sync + Locator>(
    ctx: Context<'_, D>,
    #[description = "Role handed out by the button"] role: serenity::Role,
) -> Result<(), Error> {
    info!(
        channel_id = ctx.channel_id().get(),
        role_id = role.id.get(),
        user_id = ctx.author().id.get(),
        "Creating an autorole message",
    );

    let registry_port = ctx.data().get_component_registry_port();

    let response = match registry_port
        .create_autorole(
            ChannelId(ctx.channel_id().get()),
            RoleId(role.id.get()),
        )
        .await
    {
        Ok(()) => CreateReply::default()
            .content("✅ Autorole message created.")
            .ephemeral(true),
        Err(ComponentRegistryError::RoleNotFound) => CreateReply::default()
            .content("❌ Role not found.")
            .ephemeral(true),
        Err(ComponentRegistryError::NoValidRoles) => {
            error!("Unreachable: Got a no-valid-roles error from the single-role path");
            response::unavailable::temporary_unavailable()
        }
        Err(ComponentRegistryError::TemporaryUnavailable) => {
            response::unavailable::temporary_unavailable()
        }
    };

    ctx.send(response).await?;

    Ok(())
}
