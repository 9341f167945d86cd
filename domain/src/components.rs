use crate::ports::discord::{
    CreateActionRow, CreateButton, CreateMessage, CreateSelectMenu, Role, SelectOption,
};
use domain_shared::discord::RoleId;
use tracing::instrument;

/// Every selector shares this custom id; routing between simultaneous
/// selectors relies on the message-id binding, not on a per-instance key.
pub const ROLE_SELECTOR_ID: &str = "role_selector";

const AUTOROLE_BUTTON_PREFIX: &str = "autorole-";

/// Deterministic routing key for an autorole button, unique even across
/// multiple autorole messages for the same role.
pub fn autorole_button_id(role_id: RoleId) -> String {
    format!("{AUTOROLE_BUTTON_PREFIX}{}", role_id.0)
}

pub fn is_autorole_button_id(custom_id: &str) -> bool {
    custom_id.starts_with(AUTOROLE_BUTTON_PREFIX)
}

#[instrument(level = "trace", skip(role))]
pub fn autorole_message(role: &Role) -> CreateMessage {
    CreateMessage::default()
        .content(format!(
            "Click below to get the **{}** role:",
            role.name
        ))
        .action_rows(vec![CreateActionRow::buttons(vec![CreateButton::new(
            format!("Get Role {}", role.role_id.0),
            autorole_button_id(role.role_id),
        )])])
}

#[instrument(level = "trace", skip(roles))]
pub fn setup_message(roles: &[Role]) -> CreateMessage {
    let options = roles
        .iter()
        .map(|role| SelectOption {
            label: role.name.clone(),
            value: role.role_id.0.to_string(),
        })
        .collect::<Vec<_>>();

    let menu = CreateSelectMenu {
        menu_id: ROLE_SELECTOR_ID.to_string(),
        placeholder: "Choose your roles...".to_string(),
        min_values: 1,
        max_values: options.len() as u8,
        options,
    };

    CreateMessage::default()
        .content("📌 Select your roles below:")
        .action_rows(vec![CreateActionRow::select_menu(menu)])
}
