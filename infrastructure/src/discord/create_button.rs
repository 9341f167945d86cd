use domain::ports::discord::CreateButton;
use poise::serenity_prelude as serenity;

pub fn domain_to_serenity_create_button(button: CreateButton) -> serenity::CreateButton {
    let CreateButton { label, button_id } = button;

    serenity::CreateButton::new(button_id.0)
        .style(serenity::ButtonStyle::Primary)
        .label(label)
}
