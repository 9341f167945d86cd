use poise::CreateReply;
use tracing::instrument;

#[instrument(level = "debug", skip_all)]
pub fn temporary_unavailable() -> CreateReply {
    CreateReply::default()
        .content("⚠️ The service is temporarily unavailable. Please try again later.")
        .ephemeral(true)
        .reply(true)
}
