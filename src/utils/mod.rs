use anyhow::{anyhow, Result};
use chrono::Local;

pub fn today_dmy() -> String {
    Local::now().format("%d-%m-%Y").to_string()
}

pub fn parse_decimal(value: &str) -> Result<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|e| anyhow!("Parse decimal: {}", e))
}
