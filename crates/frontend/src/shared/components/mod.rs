pub mod message_boxes;
pub mod search_bar;
