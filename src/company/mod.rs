mod format;
mod input;
mod record;

pub use format::{format_company, print_company, write_company};
pub use input::{parse_companies, read_companies};
pub use record::Company;
