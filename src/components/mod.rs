pub mod access_denied;
pub mod analytics_card;
pub mod captcha;
pub mod category_filter;
pub mod feedback_form;
pub mod footer;
pub mod hero_section;
pub mod navbar;
pub mod preview_modal;
pub mod resource_card;
pub mod review_table;
pub mod search_bar;
