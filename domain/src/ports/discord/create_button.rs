#[derive(Debug)]
pub struct CreateButton {
    pub label: String,
    pub button_id: ButtonId,
}

impl CreateButton {
    pub fn new(label: impl Into<String>, button_id: impl Into<String>) -> Self {
        CreateButton {
            label: label.into(),
            button_id: ButtonId(button_id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct ButtonId(pub String);
