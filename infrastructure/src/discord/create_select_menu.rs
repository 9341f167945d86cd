use domain::ports::discord::CreateSelectMenu;
use poise::serenity_prelude as serenity;

pub fn domain_to_serenity_create_select_menu(menu: CreateSelectMenu) -> serenity::CreateSelectMenu {
    let CreateSelectMenu {
        menu_id,
        placeholder,
        min_values,
        max_values,
        options,
    } = menu;

    let options = options
        .into_iter()
        .map(|option| serenity::CreateSelectMenuOption::new(option.label, option.value))
        .collect();

    serenity::CreateSelectMenu::new(
        menu_id,
        serenity::CreateSelectMenuKind::String { options },
    )
    .placeholder(placeholder)
    .min_values(min_values)
    .max_values(max_values)
}
