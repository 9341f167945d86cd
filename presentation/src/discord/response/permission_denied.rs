use poise::CreateReply;
use tracing::instrument;

#[instrument(level = "debug", skip_all)]
pub fn administrator_required() -> CreateReply {
    CreateReply::default()
        .content("❌ You must be an **Administrator** to use this command.")
        .ephemeral(true)
        .reply(true)
}
