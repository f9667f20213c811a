// src/gui/components/mod.rs
pub mod banner;
pub mod footer;
pub mod header;
pub mod news_form;
pub mod result_card;
