use crate::ports::discord::{CreateButton, CreateSelectMenu};

#[derive(Debug)]
pub enum CreateActionRow {
    Buttons { components: Vec<CreateButton> },
    SelectMenu { menu: CreateSelectMenu },
}

impl CreateActionRow {
    pub fn buttons(components: Vec<CreateButton>) -> Self {
        CreateActionRow::Buttons { components }
    }

    pub fn select_menu(menu: CreateSelectMenu) -> Self {
        CreateActionRow::SelectMenu { menu }
    }
}
