use crate::domain::common::validation::check_name;
use crate::domain::common::{CatalogEntity, CodeRule, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};

/// Класс: второй уровень классификации, принадлежит департаменту
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Код класса, начинается с кода департамента (например, "11")
    #[serde(rename = "numero")]
    pub code: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "departamento_numero")]
    pub department_code: String,
}

impl Class {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        department_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            department_code: department_code.into(),
        }
    }

    /// Принадлежит ли класс департаменту
    pub fn belongs_to(&self, department_code: &str) -> bool {
        self.department_code == department_code
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        self.validate_code()?;
        check_name("class name", &self.name, MAX_NAME_LEN)?;
        if !self.code.starts_with(self.department_code.as_str()) {
            return Err(format!(
                "class code '{}' must start with department code '{}'",
                self.code, self.department_code
            ));
        }
        Ok(())
    }
}

impl CatalogEntity for Class {
    fn code(&self) -> &str {
        &self.code
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn table_name() -> &'static str {
        "clases"
    }

    fn element_name() -> &'static str {
        "class"
    }

    fn code_rule() -> CodeRule {
        CodeRule::Exact(2)
    }
}
