pub mod blog_service;
pub mod booking_service;
pub mod catalog_service;
pub mod faq_service;
pub mod message_service;
pub mod portfolio_service;
pub mod review_service;
pub mod settings_service;
