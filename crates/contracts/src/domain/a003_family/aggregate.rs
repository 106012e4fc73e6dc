use crate::domain::common::validation::check_name;
use crate::domain::common::{CatalogEntity, CodeRule, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};

/// Семейство: третий уровень классификации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    #[serde(rename = "numero")]
    pub code: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "departamento_numero")]
    pub department_code: String,

    #[serde(rename = "clase_numero")]
    pub class_code: String,
}

impl Family {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        department_code: impl Into<String>,
        class_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            department_code: department_code.into(),
            class_code: class_code.into(),
        }
    }

    /// Принадлежит ли семейство паре департамент/класс
    pub fn belongs_to(&self, department_code: &str, class_code: &str) -> bool {
        self.department_code == department_code && self.class_code == class_code
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        self.validate_code()?;
        check_name("family name", &self.name, MAX_NAME_LEN)
    }
}

impl CatalogEntity for Family {
    fn code(&self) -> &str {
        &self.code
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn table_name() -> &'static str {
        "familias"
    }

    fn element_name() -> &'static str {
        "family"
    }

    fn code_rule() -> CodeRule {
        CodeRule::Exact(3)
    }
}
