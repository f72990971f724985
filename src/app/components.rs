pub mod cta;
pub mod footer;
pub mod hero;
pub mod portfolio;
pub mod services;
pub mod tech_stack;
pub mod testimonials;
pub mod why_choose_us;
