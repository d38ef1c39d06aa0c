pub mod admin_nav;
pub mod auth_header;
pub mod filters_panel;
pub mod login;
pub mod register;
pub mod review_history;
pub mod review_modal;
pub mod review_moderation;
pub mod star_rating;
pub mod tool_card;
pub mod tool_modal;
