use crate::discord::create_action_row::domain_to_serenity_action_row;
use domain::ports::discord::CreateMessage;
use poise::serenity_prelude as serenity;

pub fn domain_to_serenity_create_message(message: CreateMessage) -> serenity::CreateMessage {
    let CreateMessage {
        content,
        action_rows,
    } = message;

    let mut message = serenity::CreateMessage::default();

    if let Some(content) = content {
        message = message.content(content);
    }

    if !action_rows.is_empty() {
        message = message.components(
            action_rows
                .into_iter()
                .map(domain_to_serenity_action_row)
                .collect(),
        );
    }

    message
}
