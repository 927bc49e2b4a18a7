// src/utils.rs
use chrono::{DateTime, Utc};

use crate::types::PersonalInfo;

/// Replace every whitespace run with a single `_`
pub fn underscore_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Download name of the exported PDF, `CV` standing in for a missing first name
pub fn pdf_file_name(info: &PersonalInfo) -> String {
    let first_name = if info.first_name.is_empty() {
        "CV"
    } else {
        info.first_name.as_str()
    };
    underscore_whitespace(&format!("{}_{}_CV.pdf", first_name, info.last_name))
}

/// Download name of the JSON export, stamped with unix milliseconds
pub fn json_export_file_name(now: DateTime<Utc>) -> String {
    format!("cv_data_{}.json", now.timestamp_millis())
}
