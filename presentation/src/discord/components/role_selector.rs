use crate::application_ports::Locator;
use crate::discord::components::respond_ephemeral;
use crate::discord::Error;
use application_ports::interaction::InteractionError;
use domain::components::ROLE_SELECTOR_ID;
use domain_shared::discord::{MessageId, RoleId, UserId};
use poise::serenity_prelude as serenity;
use tracing::{info, instrument, warn};

#[instrument(level = "info", skip(ctx, interaction, values, locator))]
pub async fn handle_selection<L: Locator>(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    values: &[String],
    locator: &L,
) -> Result<(), Error> {
    if interaction.data.custom_id != ROLE_SELECTOR_ID {
        return Ok(());
    }

    info!(
        user_id = interaction.user.id.get(),
        message_id = interaction.message.id.get(),
        submitted = values.len(),
        "User submitted a role selection",
    );

    let submitted: Vec<RoleId> = values
        .iter()
        .filter_map(|value| value.parse::<u64>().ok().map(RoleId))
        .collect();

    let interaction_port = locator.get_component_interaction_port();

    let outcome = match interaction_port
        .handle_selection(
            UserId(interaction.user.id.get()),
            MessageId(interaction.message.id.get()),
            submitted,
        )
        .await
    {
        Ok(outcome) => outcome,
        Err(InteractionError::UnknownComponent) => {
            warn!(
                message_id = interaction.message.id.get(),
                "Selection on a message with no live binding"
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

    let content = if outcome.is_no_op() {
        "ℹ️ No changes.".to_string()
    } else {
        let mut content = String::new();
        if !outcome.added.is_empty() {
            content.push_str(&format!("✅ Added: {}\n", outcome.added.join(", ")));
        }
        if !outcome.removed.is_empty() {
            content.push_str(&format!("❌ Removed: {}", outcome.removed.join(", ")));
        }
        content
    };

    respond_ephemeral(ctx, interaction, content).await
}
