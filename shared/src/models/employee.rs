//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as returned by `GET /api/employees`
///
/// `id` is assigned by the document store and never changes;
/// `employee_id` is the caller-chosen business identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub employee_position: String,
    /// Image URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create employee payload (`POST /api/employees`)
///
/// Absent fields decode as empty strings so that the handler, not the JSON
/// extractor, reports which required fields are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub employee_position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl EmployeeCreate {
    /// Required fields as `(json name, value)` pairs, in form order
    pub fn required_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("employeeId", &self.employee_id),
            ("name", &self.name),
            ("surname", &self.surname),
            ("email", &self.email),
            ("phoneNumber", &self.phone_number),
            ("employeePosition", &self.employee_position),
        ]
    }
}

/// Update employee payload (`PUT /api/employees/{id}`)
///
/// Carries no `employee_id`: the business identifier is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub employee_position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl EmployeeUpdate {
    /// Required fields as `(json name, value)` pairs, in form order
    pub fn required_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("surname", &self.surname),
            ("email", &self.email),
            ("phoneNumber", &self.phone_number),
            ("employeePosition", &self.employee_position),
        ]
    }
}

/// Blank image URLs are treated as "no image"
pub fn normalize_image(image: Option<String>) -> Option<String> {
    image.filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_uses_camel_case() {
        let employee = Employee {
            id: "0001".to_string(),
            employee_id: "E1".to_string(),
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "555".to_string(),
            employee_position: "Eng".to_string(),
            image: None,
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["employeeId"], "E1");
        assert_eq!(json["phoneNumber"], "555");
        assert_eq!(json["employeePosition"], "Eng");
        // Absent image is omitted rather than serialized as null
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_create_missing_fields_default_to_empty() {
        let payload: EmployeeCreate = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(payload.name, "Ann");
        assert!(payload.employee_id.is_empty());
        assert!(payload.image.is_none());

        let missing: Vec<&str> = payload
            .required_fields()
            .iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(
            missing,
            vec!["employeeId", "surname", "email", "phoneNumber", "employeePosition"]
        );
    }

    #[test]
    fn test_update_ignores_employee_id() {
        let payload: EmployeeUpdate =
            serde_json::from_str(r#"{"employeeId":"E9","name":"Anna"}"#).unwrap();
        assert_eq!(payload.name, "Anna");
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("employeeId").is_none());
    }

    #[test]
    fn test_normalize_image() {
        assert_eq!(normalize_image(None), None);
        assert_eq!(normalize_image(Some("  ".to_string())), None);
        assert_eq!(
            normalize_image(Some("http://img/1.png".to_string())),
            Some("http://img/1.png".to_string())
        );
    }
}
