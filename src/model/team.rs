use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// A basketball team as listed by the roster endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Team {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo: None,
        }
    }
}

/// One page of the roster endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamsPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Team>,
}

/// The list of teams shown on the basketball screen.
pub type Roster = Vec<Team>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_teams_page() {
        let json = r#"{
            "pagination": {"limit": 10, "offset": 0, "totalCount": 2},
            "data": [
                {"id": 1, "name": "Perth", "logo": "https://img/perth.png"},
                {"id": 2, "name": "Lakers", "logo": null}
            ]
        }"#;
        let page: TeamsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].logo.as_deref(), Some("https://img/perth.png"));
        assert_eq!(page.data[1], Team::new(2, "Lakers"));
    }

    #[test]
    fn test_missing_data_is_empty() {
        let page: TeamsPage = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
    }
}
