use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::Job;
use crate::domain::value_objects::CompanyHandle;

/// Company in its public shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// Company together with the jobs it posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

/// Validated data for inserting a company
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub handle: CompanyHandle,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl CompanyDetail {
    pub fn new(company: Company, jobs: Vec<Job>) -> Self {
        Self { company, jobs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_serializes_in_public_shape() {
        let company = Company {
            handle: "c1".to_string(),
            name: "C1".to_string(),
            description: "Desc1".to_string(),
            num_employees: Some(1),
            logo_url: None,
        };

        assert_eq!(
            serde_json::to_value(&company).unwrap(),
            json!({
                "handle": "c1",
                "name": "C1",
                "description": "Desc1",
                "numEmployees": 1,
                "logoUrl": null,
            })
        );
    }

    #[test]
    fn test_company_detail_flattens_company_fields() {
        let detail = CompanyDetail::new(
            Company {
                handle: "c1".to_string(),
                name: "C1".to_string(),
                description: "Desc1".to_string(),
                num_employees: None,
                logo_url: None,
            },
            vec![],
        );

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["handle"], "c1");
        assert_eq!(value["jobs"], json!([]));
    }
}
