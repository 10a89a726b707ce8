pub mod dom_validity;
pub mod registration_form;
