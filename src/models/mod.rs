mod inquiry;

pub use inquiry::{ContactForm, Inquiry, InquiryStatus, NewInquiry};
