//! Report & Display Helpers

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{Application, ValidationReport};

/// `report_status` value of a filed report
pub const SUBMITTED: &str = "submitted";

/// Placeholder for empty report fields
pub const NOT_AVAILABLE: &str = "N/A";

/// PS report rows in form order: (label, record field)
pub const REPORT_ROWS: &[(&str, &str)] = &[
    ("1. आवेदक का नाम", "applicant_name"),
    ("2. पिता/पति-पत्नी का नाम", "father_spouse_name"),
    ("3. वर्तमान पता", "current_address"),
    ("वर्तमान पता का नजदीक पुलिस थाना", "nearest_police_station"),
    ("4. क्या आवेदक कभी दोषसिद्ध हुआ है?", "ever_convicted"),
    ("(क) यदि हां, अपराध, दंडादेश और दंडादेश की तारीख", "conviction_details"),
    ("(ख) क्या आवेदक पर डीपी एक्ट लगाया गया है?", "dp_act_applied"),
    ("यदि हाँ, तो विवरण", "dp_act_details"),
    ("(ग) क्या आवेदक पर आर्म्स एक्ट लगाया गया है?", "arms_act_applied"),
    ("यदि हाँ, तो विवरण", "arms_act_details"),
    ("5. क्या आवेदक का किसी से शत्रुता है?", "has_enemy"),
    ("यदि हाँ, ब्यौरा दीजिए।", "enemy_details"),
    ("6. क्या आवेदक का पता सत्यापित किया गया है?", "address_verified"),
    ("पता सत्यापन का विवरण", "address_verification_details"),
    ("7. क्या आवेदक का व्यवसाय सत्यापित किया गया है?", "business_verified"),
    ("व्यवसाय सत्यापन का विवरण", "business_verification_details"),
    ("8. क्या आवेदक के विरूद्ध कोई शिकायत दर्ज है?", "complaint_registered"),
    ("शिकायत का विवरण", "complaint_details"),
    ("9. क्या आवेदक किसी अपराध में संलिप्त रहा है?", "involved_in_crime"),
    ("अपराध का विवरण", "crime_details"),
    ("10. क्या आवेदक कभी गिरफ्तार हुआ है?", "ever_arrested"),
    ("गिरफ्तारी का विवरण", "arrest_details"),
    ("11. क्या आवेदक का नाम खराब चरित्र रजिस्टर में है?", "bad_character_register"),
    ("खराब चरित्र का विवरण", "bad_character_details"),
    ("12. क्या सरकारी मामला दर्ज है?", "govt_case_registered"),
    ("सरकारी मामले का विवरण", "govt_case_details"),
    ("13. क्या जान से मारने की धमकी है?", "life_threat"),
    ("जान से मारने की धमकी का विवरण", "life_threat_details"),
    ("14. राजनीतिक संगठन का विवरण", "political_organization_details"),
];

/// Whether a submitted report exists for the application
pub fn is_report_submitted(reports: &[ValidationReport], application_id: u32) -> bool {
    reports.iter().any(|r| {
        r.application_id == application_id && r.report_status.as_deref() == Some(SUBMITTED)
    })
}

/// Ids the server already reports as forwarded to DCRB
pub fn forwarded_ids(apps: &[Application]) -> HashSet<u32> {
    apps.iter()
        .filter(|app| app.forwarded_to_dcrb)
        .map(|app| app.id)
        .collect()
}

/// Application date as `d/m/yyyy`; unparseable values are shown unchanged
pub fn format_created_at(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%-d/%-m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `YYYY-MM-DD...` → `DD/MM/YYYY`, `N/A` when absent
pub fn format_report_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    let day = raw.get(..10).unwrap_or(raw);
    let mut parts: Vec<&str> = day.split('-').collect();
    parts.reverse();
    parts.join("/")
}
