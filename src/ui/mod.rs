pub mod dialogs;
pub mod messages;
