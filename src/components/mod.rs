pub mod app;
pub mod benefits;
pub mod demo;
pub mod download;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod nav;
pub mod pricing;
pub mod store_buttons;
pub mod testimonials;
