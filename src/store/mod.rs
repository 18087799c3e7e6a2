mod inquiries;

pub use inquiries::InquiryStore;
