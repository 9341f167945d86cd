use crate::discord::create_button::domain_to_serenity_create_button;
use crate::discord::create_select_menu::domain_to_serenity_create_select_menu;
use domain::ports::discord::CreateActionRow;
use poise::serenity_prelude as serenity;

pub fn domain_to_serenity_action_row(action_row: CreateActionRow) -> serenity::CreateActionRow {
    match action_row {
        CreateActionRow::Buttons { components } => serenity::CreateActionRow::Buttons(
            components
                .into_iter()
                .map(domain_to_serenity_create_button)
                .collect(),
        ),
        CreateActionRow::SelectMenu { menu } => {
            serenity::CreateActionRow::SelectMenu(domain_to_serenity_create_select_menu(menu))
        }
    }
}
