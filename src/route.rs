//! Hash Routes
//!
//! The bundle is served as a single page; views are selected by the URL
//! fragment so the host server needs no routing rules.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    PsReport(u32),
    NotFound,
}

impl Route {
    /// Parse `location.hash` (with or without the leading `#`)
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.split('?').next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["dashboard"] => Route::Dashboard,
            ["ps-report", id] => id.parse().map(Route::PsReport).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Dashboard | Route::NotFound => "#/dashboard".to_string(),
            Route::PsReport(id) => format!("#/ps-report/{}", id),
        }
    }

    /// Route for the current browser location
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| Route::parse(&h))
            .unwrap_or(Route::Dashboard)
    }
}

/// Filled application PDF, served by the portal
pub fn filled_pdf_href(id: u32) -> String {
    format!("/filled-pdf/{}", id)
}

/// Validation report entry form, served by the portal
pub fn validation_report_href(id: u32) -> String {
    format!("/validation-report/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("#/"), Route::Dashboard);
        assert_eq!(Route::parse("#/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("#/ps-report/42"), Route::PsReport(42));
        assert_eq!(Route::parse("#/ps-report/42/"), Route::PsReport(42));
        assert_eq!(Route::parse("#/ps-report/42?print=1"), Route::PsReport(42));
        assert_eq!(Route::parse("#/ps-report/abc"), Route::NotFound);
        assert_eq!(Route::parse("#/ps-report"), Route::NotFound);
        assert_eq!(Route::parse("#/settings"), Route::NotFound);
    }

    #[test]
    fn test_href_round_trips() {
        assert_eq!(Route::parse(&Route::PsReport(7).href()), Route::PsReport(7));
        assert_eq!(Route::parse(&Route::Dashboard.href()), Route::Dashboard);
    }

    #[test]
    fn test_portal_links() {
        assert_eq!(filled_pdf_href(5), "/filled-pdf/5");
        assert_eq!(validation_report_href(5), "/validation-report/5");
    }
}
