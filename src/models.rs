//! Frontend Models
//!
//! Records returned by the Arms License API.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

/// Arms license application as listed for the LIU
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Application {
    pub id: u32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub applicant_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mobile_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ps_remarks: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub forwarded_to_dcrb: bool,
}

/// Order applications highest id first; equal ids keep their order
pub fn sort_newest_first(apps: &mut [Application]) {
    apps.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Validation report list entry, only used to find submitted reports
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationReport {
    pub application_id: u32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub report_status: Option<String>,
}

/// Police station validation report.
///
/// Kept as the raw JSON object: the form only ever reads fields by name
/// and the server adds fields freely.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PsReport(Map<String, Value>);

impl PsReport {
    /// Field as display text. Null, missing, blank, `false` and `0` are
    /// `None`, so the form shows them as not available.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            value => value_text(value).filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn report_date(&self) -> Option<String> {
        self.text("report_date")
    }

    /// Officer signature, server-relative path
    pub fn signature_path(&self) -> Option<String> {
        self.text("signature_path")
    }

    pub fn acp_signature(&self) -> Option<String> {
        self.text("ACPSignature")
    }

    pub fn liu_signature(&self) -> Option<String> {
        self.text("LIUSignature")
    }
}

/// `{ status, data, message }` wrapper around every API payload
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Payload of an accepted response, `Rejected` otherwise
    pub fn accepted(self, what: &str) -> ApiResult<Option<T>> {
        if self.status {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| format!("{} refused by server", what)),
            ))
        }
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Accept strings, numbers and booleans for free-text fields
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text))
}

/// `true` or `"true"`; everything else is false
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_lenient_fields() {
        let app: Application = serde_json::from_value(json!({
            "id": 12,
            "applicant_name": "Ram Kumar",
            "mobile_number": 9876543210u64,
            "status": "pending",
            "ps_remarks": null,
            "forwarded_to_dcrb": "true"
        }))
        .unwrap();

        assert_eq!(app.id, 12);
        assert_eq!(app.mobile_number.as_deref(), Some("9876543210"));
        assert_eq!(app.ps_remarks, None);
        assert_eq!(app.service, None);
        assert!(app.forwarded_to_dcrb);
    }

    #[test]
    fn test_forwarded_flag_variants() {
        let parse = |v: Value| -> bool {
            serde_json::from_value::<Application>(json!({ "id": 1, "forwarded_to_dcrb": v }))
                .unwrap()
                .forwarded_to_dcrb
        };
        assert!(parse(json!(true)));
        assert!(parse(json!("true")));
        assert!(!parse(json!(false)));
        assert!(!parse(json!("false")));
        assert!(!parse(json!(1)));
        assert!(!parse(Value::Null));
    }

    #[test]
    fn test_ps_report_text() {
        let report: PsReport = serde_json::from_value(json!({
            "applicant_name": "Sita",
            "ever_convicted": false,
            "has_enemy": true,
            "complaint_registered": 0,
            "life_threat": "नहीं",
            "enemy_details": "  ",
            "LIUSignature": "/uploads/liu.png",
            "ACPSignature": null
        }))
        .unwrap();

        assert_eq!(report.text("applicant_name").as_deref(), Some("Sita"));
        assert_eq!(report.text("ever_convicted"), None);
        assert_eq!(report.text("complaint_registered"), None);
        assert_eq!(report.text("has_enemy").as_deref(), Some("true"));
        assert_eq!(report.text("life_threat").as_deref(), Some("नहीं"));
        assert_eq!(report.text("enemy_details"), None);
        assert_eq!(report.text("not_there"), None);
        assert_eq!(report.liu_signature().as_deref(), Some("/uploads/liu.png"));
        assert_eq!(report.acp_signature(), None);
    }

    #[test]
    fn test_envelope_accepted() {
        let ok: Envelope<Vec<ValidationReport>> = serde_json::from_value(json!({
            "status": true,
            "data": [{ "application_id": 3, "report_status": "submitted" }]
        }))
        .unwrap();
        let data = ok.accepted("list").unwrap().unwrap();
        assert_eq!(data[0].application_id, 3);

        let refused: Envelope<Value> =
            serde_json::from_value(json!({ "status": false, "message": "not allowed" })).unwrap();
        match refused.accepted("forward") {
            Err(ApiError::Rejected(msg)) => assert_eq!(msg, "not allowed"),
            other => panic!("unexpected {:?}", other),
        }

        let bare: Envelope<Value> = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(bare.accepted("upload"), Err(ApiError::Rejected(_))));
    }

    #[test]
    fn test_envelope_accepted_without_data() {
        let empty: Envelope<PsReport> =
            serde_json::from_value(json!({ "status": true, "data": null })).unwrap();
        assert_eq!(empty.accepted("PS report").unwrap(), None);

        let missing: Envelope<PsReport> = serde_json::from_value(json!({ "status": true })).unwrap();
        assert_eq!(missing.accepted("PS report").unwrap(), None);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut apps: Vec<Application> = serde_json::from_value(json!([
            { "id": 4, "applicant_name": "a" },
            { "id": 11, "applicant_name": "b" },
            { "id": 4, "applicant_name": "c" },
            { "id": 7, "applicant_name": "d" },
            { "id": 1, "applicant_name": "e" }
        ]))
        .unwrap();

        sort_newest_first(&mut apps);

        let order: Vec<(u32, &str)> = apps
            .iter()
            .map(|a| (a.id, a.applicant_name.as_deref().unwrap_or("")))
            .collect();
        assert_eq!(order, vec![(11, "b"), (7, "d"), (4, "a"), (4, "c"), (1, "e")]);

        let mut none: Vec<Application> = Vec::new();
        sort_newest_first(&mut none);
        assert!(none.is_empty());
    }
}
