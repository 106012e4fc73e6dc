use crate::domain::common::validation::check_name;
use crate::domain::common::{CatalogEntity, CodeRule, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};

/// Департамент: корень дерева классификации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "numero")]
    pub code: String,

    #[serde(rename = "nombre")]
    pub name: String,
}

impl Department {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        self.validate_code()?;
        check_name("department name", &self.name, MAX_NAME_LEN)
    }
}

impl CatalogEntity for Department {
    fn code(&self) -> &str {
        &self.code
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn table_name() -> &'static str {
        "departamentos"
    }

    fn element_name() -> &'static str {
        "department"
    }

    fn code_rule() -> CodeRule {
        CodeRule::Exact(1)
    }
}
