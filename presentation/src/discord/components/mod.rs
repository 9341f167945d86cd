pub mod autorole_button;
pub mod role_selector;

use crate::discord::Error;
use poise::serenity_prelude as serenity;
use tracing::warn;

/// Sends an ephemeral reply to a component interaction. A failure here
/// usually means the interaction token expired; the window to respond is
/// fixed, so the failure is logged and swallowed rather than retried.
pub(super) async fn respond_ephemeral(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    content: String,
) -> Result<(), Error> {
    let response = serenity::CreateInteractionResponse::Message(
        serenity::CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );

    if let Err(err) = interaction.create_response(ctx, response).await {
        warn!(
            user_id = interaction.user.id.get(),
            message_id = interaction.message.id.get(),
            error = ?err,
            "Failed to respond to a component interaction"
        );
    }

    Ok(())
}
