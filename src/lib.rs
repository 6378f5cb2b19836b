pub mod arithmetic;
pub mod checks;
pub mod company;
pub mod config;

pub use arithmetic::{average, is_valid_age, minutes_to_seconds};
pub use company::{format_company, print_company, write_company, Company};
