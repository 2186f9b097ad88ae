pub mod message_box;
pub mod pagination_controls;
pub mod ui;
