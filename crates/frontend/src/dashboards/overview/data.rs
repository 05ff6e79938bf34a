//! Sample series behind the statistics page.
//!
//! The dashboard visualizes representative numbers only; it calls no
//! endpoint and owns no business logic.

/// (month, records created) over the last year
pub const RECORDS_PER_MONTH: [(&str, f64); 12] = [
    ("Sep", 14.0),
    ("Oct", 22.0),
    ("Nov", 19.0),
    ("Dec", 31.0),
    ("Jan", 27.0),
    ("Feb", 18.0),
    ("Mar", 35.0),
    ("Apr", 29.0),
    ("May", 41.0),
    ("Jun", 33.0),
    ("Jul", 38.0),
    ("Aug", 44.0),
];

/// (month, content page views in thousands)
pub const PAGE_VIEWS_PER_MONTH: [(&str, f64); 12] = [
    ("Sep", 8.4),
    ("Oct", 9.1),
    ("Nov", 10.6),
    ("Dec", 12.9),
    ("Jan", 11.2),
    ("Feb", 10.8),
    ("Mar", 13.5),
    ("Apr", 14.1),
    ("May", 15.8),
    ("Jun", 15.2),
    ("Jul", 16.7),
    ("Aug", 17.3),
];

pub const TOTAL_CATEGORIES: f64 = 48.0;
pub const TOTAL_EMPLOYEES: f64 = 23.0;
pub const TOTAL_CONTENT_PAGES: f64 = 31.0;
pub const ACTIVE_SHARE_PERCENT: f64 = 86.4;

/// Month-over-month change of the records series, in percent
pub fn records_change_percent() -> Option<f64> {
    let values: Vec<f64> = RECORDS_PER_MONTH.iter().map(|(_, v)| *v).collect();
    let &[.., previous, latest] = values.as_slice() else {
        return None;
    };
    if previous == 0.0 {
        return None;
    }
    Some((latest - previous) / previous * 100.0)
}

pub fn series(raw: &[(&str, f64)]) -> Vec<(String, f64)> {
    raw.iter().map(|(label, v)| (label.to_string(), *v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_percent_uses_last_two_months() {
        // Jul 38 -> Aug 44
        let pct = records_change_percent().unwrap();
        assert!((pct - 15.789).abs() < 0.01);
    }

    #[test]
    fn series_preserves_order() {
        let s = series(&RECORDS_PER_MONTH);
        assert_eq!(s.len(), 12);
        assert_eq!(s[0].0, "Sep");
        assert_eq!(s[11].0, "Aug");
    }
}
