use chrono::{Local, NaiveDate};
use serde::Serialize;

pub const TITLE: &str = "Hello World Angular";
pub const VERSION: &str = "1.0.0";
pub const ENVIRONMENT: &str = "EKS Production";
pub const STATUS: &str = "RUNNING";

/// The record shown on the status card. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    title: String,
    version: String,
    environment: String,
    build_date: String,
    status: String,
}

impl AppInfo {
    /// Reads the local clock once for the build date.
    pub fn new() -> Self {
        Self::with_build_date(Local::now().date_naive())
    }

    pub fn with_build_date(date: NaiveDate) -> Self {
        Self {
            title: TITLE.to_string(),
            version: VERSION.to_string(),
            environment: ENVIRONMENT.to_string(),
            build_date: format_build_date(date),
            status: STATUS.to_string(),
        }
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn version(&self) -> &str { &self.version }
    pub fn environment(&self) -> &str { &self.environment }
    pub fn build_date(&self) -> &str { &self.build_date }
    pub fn status(&self) -> &str { &self.status }

    /// Label/value pairs below the heading, in display order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Version", self.version()),
            ("Environment", self.environment()),
            ("Build date", self.build_date()),
            ("Status", self.status()),
        ]
    }
}

impl Default for AppInfo {
    fn default() -> Self { Self::new() }
}

// French short date, e.g. 07/03/2024
pub fn format_build_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
