pub mod bottom_nav;
pub mod camera;
pub mod content_card;
pub mod detail_modal;
pub mod error_modal;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod page;

pub use bottom_nav::BottomNav;
pub use camera::CameraCapture;
pub use content_card::ContentCard;
pub use detail_modal::DetailModal;
pub use error_modal::ErrorModal;
pub use layout::AppLayout;
pub use modal::Modal;
pub use navbar::Navbar;
pub use page::Page;

/// `dd.mm.yyyy`, or an empty string when no date is set
pub fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|date| date.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

/// Date range shown on cards, the end date is omitted when absent
pub fn format_date_range(date: Option<chrono::NaiveDate>, end_date: Option<chrono::NaiveDate>) -> String {
    match (date, end_date) {
        (Some(_), Some(_)) => format!("{} - {}", format_date(date), format_date(end_date)),
        _ => format_date(date),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn formats_dates_day_first() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 24);
        let end = NaiveDate::from_ymd_opt(2025, 1, 3);

        assert_eq!(format_date(start), "24.12.2024");
        assert_eq!(format_date_range(start, end), "24.12.2024 - 03.01.2025");
        assert_eq!(format_date_range(start, None), "24.12.2024");
        assert_eq!(format_date(None), "");
    }
}
