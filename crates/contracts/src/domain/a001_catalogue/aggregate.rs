use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::{AggregateId, AggregateRoot};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор каталога, назначается бэкендом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogueId(pub i64);

impl CatalogueId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CatalogueId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let value = i64::from_string(s)?;
        if value <= 0 {
            return Err(format!("Catalogue ID must be a positive number: {}", value));
        }
        Ok(CatalogueId(value))
    }
}

impl fmt::Display for CatalogueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Статус каталога (на проводе — строка в нижнем регистре)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogueStatus {
    Active,
    Inactive,
    Upcoming,
    Expired,
}

impl CatalogueStatus {
    pub const ALL: [CatalogueStatus; 4] = [
        CatalogueStatus::Active,
        CatalogueStatus::Inactive,
        CatalogueStatus::Upcoming,
        CatalogueStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogueStatus::Active => "active",
            CatalogueStatus::Inactive => "inactive",
            CatalogueStatus::Upcoming => "upcoming",
            CatalogueStatus::Expired => "expired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogueStatus::Active => "Active",
            CatalogueStatus::Inactive => "Inactive",
            CatalogueStatus::Upcoming => "Upcoming",
            CatalogueStatus::Expired => "Expired",
        }
    }

    /// Case-insensitive, surrounding whitespace ignored
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
    }
}

impl fmt::Display for CatalogueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Каталог в том виде, в котором его отдаёт `GET /api/catalogues`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub catalogue_id: CatalogueId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CatalogueStatus,
}

impl Catalogue {
    pub fn is_active(&self) -> bool {
        self.status == CatalogueStatus::Active
    }
}

impl AggregateRoot for Catalogue {
    type Id = CatalogueId;

    fn id(&self) -> Self::Id {
        self.catalogue_id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "catalogues"
    }

    fn element_name() -> &'static str {
        "Catalogue"
    }

    fn list_name() -> &'static str {
        "Catalogues"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /api/catalogues` and `PUT /api/catalogues/{id}`.
///
/// Fields keep the raw form text; [`CatalogueDto::validate`] decides whether
/// it is worth sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueDto {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

impl Default for CatalogueDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: CatalogueStatus::Active.as_str().to_string(),
        }
    }
}

impl From<&Catalogue> for CatalogueDto {
    fn from(c: &Catalogue) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
            start_date: c.start_date.format(DATE_FORMAT).to_string(),
            end_date: c.end_date.format(DATE_FORMAT).to_string(),
            status: c.status.as_str().to_string(),
        }
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const DESCRIPTION_PUNCTUATION: &str = " .,!?&'-()";

impl CatalogueDto {
    /// Копия с обрезанными пробелами, как её отправляет форма
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            status: self.status.trim().to_lowercase(),
        }
    }

    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name, "Catalogue Name")?;
        validate_description(&self.description, "Description")?;
        let start = parse_date(&self.start_date, "Start Date")?;
        let end = parse_date(&self.end_date, "End Date")?;
        if CatalogueStatus::parse(&self.status).is_none() {
            if self.status.trim().is_empty() {
                return Err("Status cannot be empty.".into());
            }
            let allowed: Vec<&str> = CatalogueStatus::ALL.iter().map(|s| s.as_str()).collect();
            return Err(format!(
                "Invalid status for Status! Please enter one from: ({}).",
                allowed.join("/")
            ));
        }
        if start > end {
            return Err("Start date cannot be after end date.".into());
        }
        Ok(())
    }
}

fn validate_name(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty.", field));
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(format!(
            "Invalid input for {}! Only letters and spaces are allowed.",
            field
        ));
    }
    Ok(())
}

fn validate_description(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty.", field));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || DESCRIPTION_PUNCTUATION.contains(c))
    {
        return Err(format!(
            "Invalid input for {}! Only letters, numbers, spaces, and common punctuation (.,!?-&'()) are allowed.",
            field
        ));
    }
    Ok(())
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty.", field));
    }
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        format!(
            "Invalid date format for {}! Please enter the date in YYYY-MM-DD format.",
            field
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CatalogueDto {
        CatalogueDto {
            name: "Summer Sale".into(),
            description: "Seasonal offers, up to half off!".into(),
            start_date: "2024-06-01".into(),
            end_date: "2024-08-31".into(),
            status: "active".into(),
        }
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "catalogue_id": 7,
            "name": "Winter",
            "description": "Cold season",
            "start_date": "2024-12-01",
            "end_date": "2025-02-28",
            "status": "inactive"
        }"#;
        let c: Catalogue = serde_json::from_str(json).unwrap();
        assert_eq!(c.catalogue_id, CatalogueId(7));
        assert_eq!(c.start_date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(c.status, CatalogueStatus::Inactive);
        assert!(!c.is_active());
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let null_id = r#"{"catalogue_id":null,"name":"A","description":"B",
            "start_date":"2024-01-01","end_date":"2024-01-02","status":"active"}"#;
        assert!(serde_json::from_str::<Catalogue>(null_id).is_err());

        let missing_id = r#"{"name":"A","description":"B",
            "start_date":"2024-01-01","end_date":"2024-01-02","status":"active"}"#;
        assert!(serde_json::from_str::<Catalogue>(missing_id).is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"catalogue_id":1,"name":"A","description":"B",
            "start_date":"2024-01-01","end_date":"2024-01-02","status":"archived"}"#;
        assert!(serde_json::from_str::<Catalogue>(json).is_err());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(CatalogueStatus::parse(" Active "), Some(CatalogueStatus::Active));
        assert_eq!(CatalogueStatus::parse("EXPIRED"), Some(CatalogueStatus::Expired));
        assert_eq!(CatalogueStatus::parse("paused"), None);
    }

    #[test]
    fn test_catalogue_id_from_string() {
        assert_eq!(CatalogueId::from_string(" 42 "), Ok(CatalogueId(42)));
        assert!(CatalogueId::from_string("0").is_err());
        assert!(CatalogueId::from_string("-3").is_err());
        assert!(CatalogueId::from_string("abc").is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Catalogue::full_name(), "a001_catalogues");
    }

    #[test]
    fn test_dto_from_catalogue() {
        let c = Catalogue {
            catalogue_id: CatalogueId(3),
            name: "Spring".into(),
            description: "New arrivals".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            status: CatalogueStatus::Upcoming,
        };
        let dto = CatalogueDto::from(&c);
        assert_eq!(dto.start_date, "2024-03-01");
        assert_eq!(dto.end_date, "2024-05-31");
        assert_eq!(dto.status, "upcoming");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_valid_dto_passes() {
        assert_eq!(valid_dto().validate(), Ok(()));
    }

    #[test]
    fn test_name_rules() {
        let mut dto = valid_dto();
        dto.name = "   ".into();
        assert_eq!(dto.validate(), Err("Catalogue Name cannot be empty.".into()));

        dto.name = "Sale 2024".into();
        assert!(dto.validate().unwrap_err().contains("Only letters and spaces"));
    }

    #[test]
    fn test_description_rules() {
        let mut dto = valid_dto();
        dto.description = "50% off".into();
        assert!(dto.validate().unwrap_err().contains("common punctuation"));

        dto.description = "Kids & Teens (ages 5-15), new!".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_date_rules() {
        let mut dto = valid_dto();
        dto.start_date = "01/06/2024".into();
        assert!(dto.validate().unwrap_err().contains("Start Date"));

        let mut dto = valid_dto();
        dto.end_date = String::new();
        assert_eq!(dto.validate(), Err("End Date cannot be empty.".into()));

        let mut dto = valid_dto();
        dto.start_date = "2024-09-01".into();
        assert_eq!(
            dto.validate(),
            Err("Start date cannot be after end date.".into())
        );
    }

    #[test]
    fn test_same_day_range_is_valid() {
        let mut dto = valid_dto();
        dto.end_date = dto.start_date.clone();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_status_rules() {
        let mut dto = valid_dto();
        dto.status = "Upcoming".into();
        assert!(dto.validate().is_ok());

        dto.status = "paused".into();
        assert!(dto
            .validate()
            .unwrap_err()
            .contains("active/inactive/upcoming/expired"));

        dto.status = " ".into();
        assert_eq!(dto.validate(), Err("Status cannot be empty.".into()));
    }

    #[test]
    fn test_trimmed() {
        let dto = CatalogueDto {
            name: "  Summer ".into(),
            description: " Hot deals ".into(),
            start_date: "2024-06-01 ".into(),
            end_date: " 2024-06-30".into(),
            status: " ACTIVE".into(),
        };
        let t = dto.trimmed();
        assert_eq!(t.name, "Summer");
        assert_eq!(t.description, "Hot deals");
        assert_eq!(t.status, "active");
        assert_eq!(t.end_date, "2024-06-30");
    }

    #[test]
    fn test_dto_serializes_to_form_payload() {
        let value = serde_json::to_value(valid_dto()).unwrap();
        assert_eq!(value["start_date"], "2024-06-01");
        assert_eq!(value["status"], "active");
    }
}
