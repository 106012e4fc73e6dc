use anyhow::Context;
use contracts::domain::a001_department::Department;
use contracts::domain::a002_class::Class;
use contracts::domain::a003_family::Family;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Начальный набор классификации (департаменты, классы, семейства)
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDataset {
    pub departamentos: Vec<Department>,
    #[serde(default)]
    pub clases: Vec<Class>,
    #[serde(default)]
    pub familias: Vec<Family>,
}

/// Dataset embedded in the binary, used when no seed file is configured
const DEFAULT_SEED: &str = r#"
{
  "departamentos": [
    {"numero": "1", "nombre": "Domésticos"},
    {"numero": "2", "nombre": "Electrónica"}
  ],
  "clases": [
    {"numero": "11", "nombre": "Comedores", "departamento_numero": "1"},
    {"numero": "12", "nombre": "Salas", "departamento_numero": "1"},
    {"numero": "21", "nombre": "Audio", "departamento_numero": "2"},
    {"numero": "22", "nombre": "Video", "departamento_numero": "2"}
  ],
  "familias": [
    {"numero": "111", "nombre": "Comedor completo", "departamento_numero": "1", "clase_numero": "11"},
    {"numero": "112", "nombre": "Sillas", "departamento_numero": "1", "clase_numero": "11"},
    {"numero": "121", "nombre": "Sofás", "departamento_numero": "1", "clase_numero": "12"},
    {"numero": "122", "nombre": "Mesas de centro", "departamento_numero": "1", "clase_numero": "12"},
    {"numero": "211", "nombre": "Bocinas", "departamento_numero": "2", "clase_numero": "21"},
    {"numero": "212", "nombre": "Audífonos", "departamento_numero": "2", "clase_numero": "21"},
    {"numero": "221", "nombre": "Televisores", "departamento_numero": "2", "clase_numero": "22"},
    {"numero": "222", "nombre": "Proyectores", "departamento_numero": "2", "clase_numero": "22"}
  ]
}
"#;

impl SeedDataset {
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(DEFAULT_SEED).context("embedded seed dataset is malformed")
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let dataset: SeedDataset = serde_json::from_str(text)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load the dataset from `path`, or the embedded one when `path` is `None`
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading seed dataset from: {}", path.display());
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read seed file {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("invalid seed file {}", path.display()))
            }
            None => {
                tracing::info!("Using embedded seed dataset");
                Self::embedded()
            }
        }
    }

    /// Проверка целостности набора до записи в БД
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut department_codes = HashSet::new();
        for d in &self.departamentos {
            d.validate().map_err(anyhow::Error::msg)?;
            if !department_codes.insert(d.code.as_str()) {
                anyhow::bail!("duplicate department code '{}'", d.code);
            }
        }

        let mut class_departments: HashMap<&str, &str> = HashMap::new();
        for c in &self.clases {
            c.validate().map_err(anyhow::Error::msg)?;
            if !department_codes.contains(c.department_code.as_str()) {
                anyhow::bail!(
                    "class '{}' references unknown department '{}'",
                    c.code,
                    c.department_code
                );
            }
            if class_departments
                .insert(c.code.as_str(), c.department_code.as_str())
                .is_some()
            {
                anyhow::bail!("duplicate class code '{}'", c.code);
            }
        }

        let mut family_codes = HashSet::new();
        for f in &self.familias {
            f.validate().map_err(anyhow::Error::msg)?;
            match class_departments.get(f.class_code.as_str()) {
                None => anyhow::bail!(
                    "family '{}' references unknown class '{}'",
                    f.code,
                    f.class_code
                ),
                Some(department) if *department != f.department_code => anyhow::bail!(
                    "family '{}': class '{}' does not belong to department '{}'",
                    f.code,
                    f.class_code,
                    f.department_code
                ),
                Some(_) => {}
            }
            if !family_codes.insert(f.code.as_str()) {
                anyhow::bail!("duplicate family code '{}'", f.code);
            }
        }

        Ok(())
    }
}
