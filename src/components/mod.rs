pub mod header;
pub mod pagination;
pub mod settings_modal;
pub mod toolbar;
pub mod video_card;
