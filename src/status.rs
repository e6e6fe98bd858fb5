//! Status Filter & Search
//!
//! Client-side filtering of the application list. Application statuses are
//! free text from the server, so both sides are compared after removing
//! whitespace and lowercasing.

use crate::models::Application;

/// Status filter dropdown entries: (option value, label)
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("Select Status", "Select Status"),
    ("All", "All"),
    ("Pending", "Pending"),
    ("Inprogress", "In Progress"),
    ("Under Review", "Under Review"),
    ("Return", "Returned"),
];

pub const DEFAULT_STATUS_OPTION: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    InProgress,
    UnderReview,
    Returned,
    /// Unrecognised option value, matches nothing
    Unknown,
}

impl StatusFilter {
    /// Parse a dropdown option value
    pub fn parse(value: &str) -> Self {
        match normalize(value).as_str() {
            "all" | "selectstatus" => StatusFilter::All,
            "pending" => StatusFilter::Pending,
            "inprogress" => StatusFilter::InProgress,
            "underreview" => StatusFilter::UnderReview,
            "returned" | "return" => StatusFilter::Returned,
            _ => StatusFilter::Unknown,
        }
    }

    pub fn matches(self, status: Option<&str>) -> bool {
        let status = normalize(status.unwrap_or(""));
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == "pending",
            StatusFilter::InProgress => status == "inprogress" || status == "underreview",
            StatusFilter::UnderReview => status == "underreview",
            StatusFilter::Returned => status == "returned" || status == "return",
            StatusFilter::Unknown => false,
        }
    }
}

/// Strip all whitespace and lowercase
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Display file number: `F` + id padded to three digits
pub fn file_number(id: u32) -> String {
    format!("F{:03}", id)
}

/// Case-insensitive substring search over name, mobile and file number.
/// A blank term matches everything.
pub fn matches_search(app: &Application, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .map(|v| v.to_lowercase().contains(&term))
            .unwrap_or(false)
    };
    contains(&app.applicant_name)
        || contains(&app.mobile_number)
        || file_number(app.id).to_lowercase().contains(&term)
}

/// Applications passing both the status filter and the search term, order kept
pub fn filter_applications(apps: &[Application], filter: StatusFilter, term: &str) -> Vec<Application> {
    apps.iter()
        .filter(|app| filter.matches(app.status.as_deref()) && matches_search(app, term))
        .cloned()
        .collect()
}

/// Bootstrap badge classes for a raw status value
pub fn badge_class(status: Option<&str>) -> &'static str {
    match status.unwrap_or("") {
        "pending" => "bg-warning text-dark",
        "under review" => "bg-info text-white",
        "approved" => "bg-success text-white",
        "rejected" => "bg-danger text-white",
        _ => "bg-secondary text-white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app(id: u32, name: &str, mobile: &str, status: &str) -> Application {
        Application {
            id,
            applicant_name: Some(name.to_string()),
            mobile_number: Some(mobile.to_string()),
            service: Some("New Arms License".to_string()),
            category: None,
            created_at: None,
            status: Some(status.to_string()),
            ps_remarks: None,
            forwarded_to_dcrb: false,
        }
    }

    #[test]
    fn test_parse_option_values() {
        for (value, _) in STATUS_OPTIONS {
            assert_ne!(StatusFilter::parse(value), StatusFilter::Unknown, "{}", value);
        }
        assert_eq!(StatusFilter::parse("Select Status"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("Inprogress"), StatusFilter::InProgress);
        assert_eq!(StatusFilter::parse("Under Review"), StatusFilter::UnderReview);
        assert_eq!(StatusFilter::parse("Return"), StatusFilter::Returned);
        assert_eq!(StatusFilter::parse("Approved"), StatusFilter::Unknown);
    }

    #[test]
    fn test_status_matching_is_loose() {
        assert!(StatusFilter::Pending.matches(Some(" Pending ")));
        assert!(StatusFilter::InProgress.matches(Some("In Progress")));
        assert!(StatusFilter::InProgress.matches(Some("under review")));
        assert!(StatusFilter::UnderReview.matches(Some("Under Review")));
        assert!(!StatusFilter::UnderReview.matches(Some("inprogress")));
        assert!(StatusFilter::Returned.matches(Some("return")));
        assert!(StatusFilter::Returned.matches(Some("RETURNED")));
        assert!(StatusFilter::All.matches(None));
        assert!(!StatusFilter::Pending.matches(None));
        assert!(!StatusFilter::Unknown.matches(Some("pending")));
    }

    #[test]
    fn test_file_number() {
        assert_eq!(file_number(7), "F007");
        assert_eq!(file_number(123), "F123");
        assert_eq!(file_number(1234), "F1234");
    }

    #[test]
    fn test_search() {
        let app = make_app(7, "Ram Kumar", "9876500000", "pending");
        assert!(matches_search(&app, ""));
        assert!(matches_search(&app, "   "));
        assert!(matches_search(&app, "kumar"));
        assert!(matches_search(&app, " RAM "));
        assert!(matches_search(&app, "98765"));
        assert!(matches_search(&app, "f007"));
        assert!(matches_search(&app, "F00"));
        assert!(!matches_search(&app, "sita"));

        let mut anonymous = app.clone();
        anonymous.applicant_name = None;
        anonymous.mobile_number = None;
        assert!(!matches_search(&anonymous, "ram"));
    }

    #[test]
    fn test_filter_applications_combines_status_and_search() {
        let apps = vec![
            make_app(3, "Ram", "111", "pending"),
            make_app(2, "Shyam", "222", "under review"),
            make_app(1, "Ramesh", "333", "returned"),
        ];

        let pending_ram = filter_applications(&apps, StatusFilter::Pending, "ram");
        assert_eq!(pending_ram.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3]);

        let all_ram = filter_applications(&apps, StatusFilter::All, "ram");
        assert_eq!(all_ram.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3, 1]);

        let in_progress = filter_applications(&apps, StatusFilter::InProgress, "");
        assert_eq!(in_progress.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(Some("pending")), "bg-warning text-dark");
        assert_eq!(badge_class(Some("under review")), "bg-info text-white");
        assert_eq!(badge_class(Some("approved")), "bg-success text-white");
        assert_eq!(badge_class(Some("rejected")), "bg-danger text-white");
        assert_eq!(badge_class(Some("Pending")), "bg-secondary text-white");
        assert_eq!(badge_class(None), "bg-secondary text-white");
    }
}
