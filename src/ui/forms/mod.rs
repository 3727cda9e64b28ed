//! Form rendering module
//!
//! - `field_renderer`: input boxes with inline errors
//! - `signup_form`: the sign-up card

mod field_renderer;
mod signup_form;

pub use signup_form::draw as draw_signup;
