pub mod use_cases;

pub use use_cases::age_report::AgeReportUseCase;
pub use use_cases::csv_load::CsvLoadUseCase;
