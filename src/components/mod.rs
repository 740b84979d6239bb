pub mod faq;
pub mod footer;
pub mod lead_form;
pub mod modal;
pub mod nav;
pub mod toast;
