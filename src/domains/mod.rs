pub mod emailer;
pub mod seo;
