pub mod blogs;
pub mod corporate_services;
pub mod cta;
pub mod faq;
pub mod hero;
pub mod services;
pub mod why_us;
