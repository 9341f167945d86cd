use crate::ports::discord::CreateActionRow;

#[derive(Default, Debug)]
pub struct CreateMessage {
    pub content: Option<String>,
    pub action_rows: Vec<CreateActionRow>,
}

impl CreateMessage {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn action_rows(mut self, action_rows: Vec<CreateActionRow>) -> Self {
        self.action_rows = action_rows;
        self
    }
}
