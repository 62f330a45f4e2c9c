use chrono::NaiveDate;

/// Daily and monthly identifiers for one calendar date
///
/// Every file touched while handling a single record is named from one
/// `PeriodKey`, so a record arriving at midnight cannot be split across days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodKey {
    date: NaiveDate,
    /// `YYYY-MM-DD`
    pub daily: String,
    /// `YYYY-MM`
    pub monthly: String,
}

impl PeriodKey {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            daily: date.format("%Y-%m-%d").to_string(),
            monthly: date.format("%Y-%m").to_string(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// "Apr 24, 2013", used in the HTML page title
    pub fn html_title_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }

    /// "April 24, 2013", the date stamp of a daily CSV
    pub fn long_date(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }

    /// "April, 2013", the date stamp of a monthly CSV
    pub fn long_month(&self) -> String {
        self.date.format("%B, %Y").to_string()
    }

    /// "24 Apr 2013", the link label of an index row
    pub fn index_label(&self) -> String {
        self.date.format("%d %b %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_keys() {
        let key = PeriodKey::new(NaiveDate::from_ymd_opt(2013, 4, 24).unwrap());
        assert_eq!(key.daily, "2013-04-24");
        assert_eq!(key.monthly, "2013-04");
    }

    #[test]
    fn test_period_keys_zero_padded() {
        let key = PeriodKey::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(key.daily, "2024-01-05");
        assert_eq!(key.monthly, "2024-01");
    }

    #[test]
    fn test_labels() {
        let key = PeriodKey::new(NaiveDate::from_ymd_opt(2013, 4, 4).unwrap());
        assert_eq!(key.html_title_date(), "Apr 04, 2013");
        assert_eq!(key.long_date(), "April 04, 2013");
        assert_eq!(key.long_month(), "April, 2013");
        assert_eq!(key.index_label(), "04 Apr 2013");
    }
}
