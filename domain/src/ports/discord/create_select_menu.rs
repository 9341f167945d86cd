#[derive(Debug)]
pub struct CreateSelectMenu {
    pub menu_id: String,
    pub placeholder: String,
    pub min_values: u8,
    pub max_values: u8,
    pub options: Vec<SelectOption>,
}

#[derive(Debug)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}
