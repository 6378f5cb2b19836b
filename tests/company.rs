use algi_exercises::company::{
    format_company, parse_companies, print_company, read_companies, write_company, Company,
};
use anyhow::Result;
use std::io::Write;

const SAMPLE_LINE: &str = "[1] Cooperativa Horizonte | Setor: Serviços | Faturamento: R$ 18500.00";

#[test]
fn test_sample_company_format() {
    let company = Company::new(1, "Cooperativa Horizonte", "Serviços", 18500.0);
    assert_eq!(format_company(&company), SAMPLE_LINE);
    assert_eq!(Company::sample(), company);
}

#[test]
fn test_write_company_appends_newline() -> Result<()> {
    let mut out = Vec::new();
    write_company(&mut out, &Company::sample())?;
    assert_eq!(String::from_utf8(out)?, format!("{}\n", SAMPLE_LINE));
    Ok(())
}

#[test]
fn test_revenue_rounds_to_two_decimals() {
    let company = Company::new(7, "Padaria Central", "Alimentos", 1234.567);
    assert_eq!(
        format_company(&company),
        "[7] Padaria Central | Setor: Alimentos | Faturamento: R$ 1234.57"
    );
}

#[test]
fn test_fields_are_not_validated() {
    let company = Company::new(-3, "", "", 0.0);
    assert_eq!(format_company(&company), "[-3]  | Setor:  | Faturamento: R$ 0.00");
}

#[test]
fn test_format_is_repeatable() {
    let company = Company::sample();
    assert_eq!(format_company(&company), format_company(&company));
}

#[test]
fn test_oversized_fields() {
    assert!(Company::sample().oversized_fields().is_empty());

    let company = Company::new(2, "n".repeat(63), "s".repeat(31), 1.0);
    assert!(company.oversized_fields().is_empty());

    let company = Company::new(2, "n".repeat(64), "s".repeat(32), 1.0);
    assert_eq!(company.oversized_fields(), vec!["name", "sector"]);

    // "ç" takes two bytes.
    let company = Company::new(2, "a", format!("{}ç", "s".repeat(30)), 1.0);
    assert_eq!(company.oversized_fields(), vec!["sector"]);
}

#[test]
fn test_parse_single_company() -> Result<()> {
    let companies = parse_companies(
        r#"{"id": 1, "name": "Cooperativa Horizonte", "sector": "Serviços", "monthly_revenue": 18500.0}"#,
    )?;
    assert_eq!(companies, vec![Company::sample()]);
    Ok(())
}

#[test]
fn test_parse_company_list_preserves_order() -> Result<()> {
    let companies = parse_companies(
        r#"[
            {"id": 2, "name": "B", "sector": "Indústria", "monthly_revenue": 10},
            {"id": 1, "name": "A", "sector": "Comércio", "monthly_revenue": 2.5}
        ]"#,
    )?;
    let ids: Vec<i32> = companies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(
        format_company(&companies[1]),
        "[1] A | Setor: Comércio | Faturamento: R$ 2.50"
    );
    Ok(())
}

#[test]
fn test_parse_rejects_missing_fields() {
    let err = parse_companies(r#"{"id": 1, "name": "A"}"#).unwrap_err();
    assert!(err.to_string().contains("Failed to parse company records"));
    assert!(format!("{:#}", err).contains("missing field `sector`"));
}

#[test]
fn test_parse_list_reports_bad_field() {
    let err = parse_companies(
        r#"[{"id": 1, "name": "A", "sector": "B", "monthly_revenue": "muito"}]"#,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("invalid type: string \"muito\""));
}

#[test]
fn test_parse_rejects_other_json_values() {
    let err = parse_companies("42").unwrap_err();
    assert!(format!("{:#}", err).contains("invalid type: integer `42`"));
}

#[test]
fn test_print_company_writes_to_stdout() {
    print_company(&Company::sample());
}

#[test]
fn test_read_companies_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{}", serde_json::to_string(&vec![Company::sample()])?)?;

    let companies = read_companies(file.path())?;
    assert_eq!(companies, vec![Company::sample()]);
    Ok(())
}

#[test]
fn test_read_companies_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = read_companies(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read company records"));
}
