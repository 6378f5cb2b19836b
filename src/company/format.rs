use std::fmt;
use std::io::{self, Write};

use super::Company;

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | Setor: {} | Faturamento: R$ {:.2}",
            self.id, self.name, self.sector, self.monthly_revenue
        )
    }
}

/// Renders a company as a single line, without the trailing newline.
pub fn format_company(company: &Company) -> String {
    company.to_string()
}

/// Writes the rendered line followed by a newline.
pub fn write_company<W: Write + ?Sized>(out: &mut W, company: &Company) -> io::Result<()> {
    writeln!(out, "{}", company)
}

/// Prints the rendered line to standard output.
pub fn print_company(company: &Company) {
    println!("{}", company);
}
