use contracts::domain::a001_catalogue::aggregate::{Catalogue, CatalogueId};
use contracts::domain::common::AggregateRoot;

/// Одна строка таблицы каталогов, уже готовая к выводу
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogueRow {
    pub id: CatalogueId,
    pub id_label: String,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub status_class: &'static str,
}

impl From<&Catalogue> for CatalogueRow {
    fn from(c: &Catalogue) -> Self {
        Self {
            id: c.id(),
            id_label: c.id().to_string(),
            name: c.name.clone(),
            description: c.description.clone(),
            start_date: format_date(c.start_date),
            end_date: format_date(c.end_date),
            status: c.status.as_str().to_string(),
            // only "active" is highlighted, every other status shares one style
            status_class: if c.is_active() {
                "status-active"
            } else {
                "status-inactive"
            },
        }
    }
}

fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_catalogue::aggregate::CatalogueStatus;

    fn catalogue(status: CatalogueStatus) -> Catalogue {
        Catalogue {
            catalogue_id: CatalogueId(12),
            name: "Festive".into(),
            description: "Holiday picks".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            status,
        }
    }

    #[test]
    fn test_row_fields() {
        let row = CatalogueRow::from(&catalogue(CatalogueStatus::Active));
        assert_eq!(row.id, CatalogueId(12));
        assert_eq!(row.id_label, "12");
        assert_eq!(row.start_date, "2024-11-01");
        assert_eq!(row.end_date, "2025-01-05");
        assert_eq!(row.status, "active");
        assert_eq!(row.status_class, "status-active");
    }

    #[test]
    fn test_non_active_statuses_share_class() {
        for status in [
            CatalogueStatus::Inactive,
            CatalogueStatus::Upcoming,
            CatalogueStatus::Expired,
        ] {
            let row = CatalogueRow::from(&catalogue(status));
            assert_eq!(row.status_class, "status-inactive");
            assert_eq!(row.status, status.as_str());
        }
    }
}
