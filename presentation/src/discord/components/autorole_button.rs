use crate::application_ports::Locator;
use crate::discord::components::respond_ephemeral;
use crate::discord::Error;
use application_ports::interaction::{InteractionError, ToggleOutcomeDto};
use domain::components::is_autorole_button_id;
use domain_shared::discord::{MessageId, UserId};
use poise::serenity_prelude as serenity;
use tracing::{info, instrument, warn};

#[instrument(level = "info", skip(ctx, interaction, locator))]
pub async fn handle_button_press<L: Locator>(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    locator: &L,
) -> Result<(), Error> {
    if !is_autorole_button_id(&interaction.data.custom_id) {
        return Ok(());
    }

    info!(
        user_id = interaction.user.id.get(),
        message_id = interaction.message.id.get(),
        "User pressed an autorole button",
    );

    let interaction_port = locator.get_component_interaction_port();

    let outcome = match interaction_port
        .handle_button_press(
            UserId(interaction.user.id.get()),
            MessageId(interaction.message.id.get()),
        )
        .await
    {
        Ok(outcome) => outcome,
        Err(InteractionError::UnknownComponent) => {
            // Stale message the store never knew about, or one whose
            // binding was skipped at reattachment.
            warn!(
                message_id = interaction.message.id.get(),
                "Button press on a message with no live binding"
            );
            return Ok(());
        }
        Err(InteractionError::TemporaryUnavailable) => {
            return respond_ephemeral(
                ctx,
                interaction,
                "⚠️ The service is temporarily unavailable. Please try again later.".to_string(),
            )
            .await;
        }
    };

    let content = match outcome {
        ToggleOutcomeDto::Granted { role_name } => format!("✅ You got {role_name}!"),
        ToggleOutcomeDto::Revoked { role_name } => format!("❌ Removed {role_name}."),
        ToggleOutcomeDto::RoleNotFound => "❌ Role not found.".to_string(),
    };

    respond_ephemeral(ctx, interaction, content).await
}
