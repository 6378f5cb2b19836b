/// Smallest age accepted by the age validator.
pub const MIN_VALID_AGE: i32 = 1;

/// Largest age accepted by the age validator.
pub const MAX_VALID_AGE: i32 = 130;

/// Number of seconds in one minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Returned by the minutes converter for negative input.
pub const INVALID_MINUTES_SENTINEL: i64 = -1;

/// Returned by the average calculator when the count is zero.
pub const ZERO_COUNT_AVERAGE: f64 = 0.0;

/// Tolerance used when comparing computed averages.
pub const AVERAGE_TOLERANCE: f64 = 1e-4;

/// Bytes reserved for a company name, terminator included.
pub const NAME_CAPACITY: usize = 64;

/// Bytes reserved for a company sector, terminator included.
pub const SECTOR_CAPACITY: usize = 32;

/// Printed by `algi check` once every assertion holds.
pub const CHECKS_PASSED_MESSAGE: &str = "✅ Todos os testes passaram. Ajuste as implementações para falhas.";

/// Identifier of the sample record printed by `algi company`.
pub const SAMPLE_COMPANY_ID: i32 = 1;

/// Name of the sample record.
pub const SAMPLE_COMPANY_NAME: &str = "Cooperativa Horizonte";

/// Sector of the sample record.
pub const SAMPLE_COMPANY_SECTOR: &str = "Serviços";

/// Monthly revenue of the sample record, in reais.
pub const SAMPLE_COMPANY_REVENUE: f64 = 18500.0;
