use poise::serenity_prelude::{CreateActionRow, CreateButton, CreateMessage, EditMessage};

/// Builders that can carry one row of buttons.
pub trait WithButtons: Sized {
    fn components(self, rows: Vec<CreateActionRow>) -> Self;

    /// Replaces the message's components with a single row of `buttons`.
    fn with_buttons(self, buttons: Vec<CreateButton>) -> Self {
        if buttons.is_empty() {
            self.components(Vec::new())
        } else {
            self.components(vec![CreateActionRow::Buttons(buttons)])
        }
    }
}

impl WithButtons for CreateMessage {
    fn components(self, rows: Vec<CreateActionRow>) -> Self {
        CreateMessage::components(self, rows)
    }
}

impl WithButtons for EditMessage {
    fn components(self, rows: Vec<CreateActionRow>) -> Self {
        EditMessage::components(self, rows)
    }
}
