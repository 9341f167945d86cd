use domain_shared::discord::MessageId;
use poise::serenity_prelude as serenity;

pub fn serenity_to_domain_message_id(message_id: serenity::MessageId) -> MessageId {
    MessageId(message_id.get())
}
