pub mod db;
pub mod errors;
pub mod types;
pub mod validate;

pub mod blog_post;
pub mod booking;
pub mod faq;
pub mod message;
pub mod portfolio_item;
pub mod review;
pub mod service;
pub mod setting;

#[cfg(test)]
mod tests;
