use crate::domain::common::validation::{check_max_len, check_quantity};
use crate::domain::common::{int_flag, CatalogEntity, CodeRule};
use crate::domain::{a001_department::Department, a002_class::Class, a003_family::Family};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_ARTICLE_NAME_LEN: usize = 15;
pub const MAX_BRAND_LEN: usize = 15;
pub const MAX_MODEL_LEN: usize = 20;

pub const QUANTITY_EXCEEDS_STOCK: &str = "quantity cannot exceed stock";

/// Дата-заглушка `fecha_baja` для действующих артикулов
pub fn not_discontinued_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Артикул каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub sku: String,

    #[serde(rename = "articulo")]
    pub name: String,

    #[serde(rename = "marca")]
    pub brand: String,

    #[serde(rename = "modelo")]
    pub model: String,

    #[serde(rename = "departamento_numero")]
    pub department_code: String,

    #[serde(rename = "clase_numero")]
    pub class_code: String,

    #[serde(rename = "familia_numero")]
    pub family_code: String,

    /// Дата создания, не меняется
    #[serde(rename = "fecha_alta")]
    pub created_on: NaiveDate,

    pub stock: i64,

    #[serde(rename = "cantidad")]
    pub quantity: i64,

    #[serde(rename = "descontinuado", with = "int_flag")]
    pub discontinued: bool,

    /// Дата снятия с продажи; заглушка пока `discontinued == false`
    #[serde(rename = "fecha_baja")]
    pub discontinued_on: NaiveDate,
}

impl Article {
    /// Создать новый артикул для вставки в БД
    pub fn new_for_insert(dto: ArticleCreateDto, today: NaiveDate) -> Self {
        Self {
            sku: dto.sku,
            name: dto.name,
            brand: dto.brand,
            model: dto.model,
            department_code: dto.department_code,
            class_code: dto.class_code,
            family_code: dto.family_code,
            created_on: today,
            stock: dto.stock,
            quantity: dto.quantity,
            discontinued: false,
            discontinued_on: not_discontinued_date(),
        }
    }

    /// Тройка классификации (департамент, класс, семейство)
    pub fn classification(&self) -> (&str, &str, &str) {
        (&self.department_code, &self.class_code, &self.family_code)
    }

    /// Снять с продажи. Дата ставится только при переходе 0 -> 1.
    pub fn discontinue(&mut self, today: NaiveDate) {
        if !self.discontinued {
            self.discontinued = true;
            self.discontinued_on = today;
        }
    }

    pub fn check_quantity_within_stock(&self) -> Result<(), String> {
        if self.quantity > self.stock {
            return Err(QUANTITY_EXCEEDS_STOCK.into());
        }
        Ok(())
    }

    /// Применить частичное обновление: меняются только переданные поля
    ///
    /// При ошибке запись остается без изменений.
    pub fn apply_update(&mut self, dto: &ArticleUpdateDto, today: NaiveDate) -> Result<(), String> {
        dto.validate()?;
        let discontinue = dto
            .discontinued
            .map(|v| int_flag::from_int("descontinuado", v))
            .transpose()?;
        if self.discontinued && discontinue == Some(false) {
            return Err(format!(
                "article {} is discontinued and cannot be reactivated",
                self.sku
            ));
        }

        let mut next = self.clone();
        if let Some(v) = &dto.name {
            next.name = v.clone();
        }
        if let Some(v) = &dto.brand {
            next.brand = v.clone();
        }
        if let Some(v) = &dto.model {
            next.model = v.clone();
        }
        if let Some(v) = &dto.department_code {
            next.department_code = v.clone();
        }
        if let Some(v) = &dto.class_code {
            next.class_code = v.clone();
        }
        if let Some(v) = &dto.family_code {
            next.family_code = v.clone();
        }
        if let Some(v) = dto.stock {
            next.stock = v;
        }
        if let Some(v) = dto.quantity {
            next.quantity = v;
        }
        if discontinue == Some(true) {
            next.discontinue(today);
        }

        next.check_quantity_within_stock()?;
        *self = next;
        Ok(())
    }
}

impl CatalogEntity for Article {
    fn code(&self) -> &str {
        &self.sku
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn table_name() -> &'static str {
        "articulos"
    }

    fn element_name() -> &'static str {
        "article"
    }

    fn code_rule() -> CodeRule {
        CodeRule::UpTo(6)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания артикула
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArticleCreateDto {
    pub sku: String,

    #[serde(rename = "articulo")]
    pub name: String,

    #[serde(rename = "marca")]
    pub brand: String,

    #[serde(rename = "modelo")]
    pub model: String,

    #[serde(rename = "departamento_numero")]
    pub department_code: String,

    #[serde(rename = "clase_numero")]
    pub class_code: String,

    #[serde(rename = "familia_numero")]
    pub family_code: String,

    pub stock: i64,

    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

impl ArticleCreateDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        Article::code_rule().check(Article::element_name(), &self.sku)?;
        check_max_len("articulo", &self.name, MAX_ARTICLE_NAME_LEN)?;
        check_max_len("marca", &self.brand, MAX_BRAND_LEN)?;
        check_max_len("modelo", &self.model, MAX_MODEL_LEN)?;
        Department::code_rule().check(Department::element_name(), &self.department_code)?;
        Class::code_rule().check(Class::element_name(), &self.class_code)?;
        Family::code_rule().check(Family::element_name(), &self.family_code)?;
        check_quantity("stock", self.stock)?;
        check_quantity("cantidad", self.quantity)?;
        if self.quantity > self.stock {
            return Err(QUANTITY_EXCEEDS_STOCK.into());
        }
        Ok(())
    }
}

/// DTO для частичного обновления артикула
///
/// `sku` в теле запроса игнорируется: идентификатор берется из пути.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArticleUpdateDto {
    #[serde(rename = "articulo", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "marca", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(rename = "modelo", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(rename = "departamento_numero", default, skip_serializing_if = "Option::is_none")]
    pub department_code: Option<String>,

    #[serde(rename = "clase_numero", default, skip_serializing_if = "Option::is_none")]
    pub class_code: Option<String>,

    #[serde(rename = "familia_numero", default, skip_serializing_if = "Option::is_none")]
    pub family_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,

    #[serde(rename = "cantidad", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(rename = "descontinuado", default, skip_serializing_if = "Option::is_none")]
    pub discontinued: Option<i64>,
}

impl ArticleUpdateDto {
    /// Валидация переданных полей
    pub fn validate(&self) -> Result<(), String> {
        if let Some(v) = &self.name {
            check_max_len("articulo", v, MAX_ARTICLE_NAME_LEN)?;
        }
        if let Some(v) = &self.brand {
            check_max_len("marca", v, MAX_BRAND_LEN)?;
        }
        if let Some(v) = &self.model {
            check_max_len("modelo", v, MAX_MODEL_LEN)?;
        }
        if let Some(v) = &self.department_code {
            Department::code_rule().check(Department::element_name(), v)?;
        }
        if let Some(v) = &self.class_code {
            Class::code_rule().check(Class::element_name(), v)?;
        }
        if let Some(v) = &self.family_code {
            Family::code_rule().check(Family::element_name(), v)?;
        }
        if let Some(v) = self.stock {
            check_quantity("stock", v)?;
        }
        if let Some(v) = self.quantity {
            check_quantity("cantidad", v)?;
        }
        if let Some(v) = self.discontinued {
            int_flag::from_int("descontinuado", v)?;
        }
        Ok(())
    }

    /// Меняет ли обновление классификацию артикула
    pub fn touches_classification(&self) -> bool {
        self.department_code.is_some() || self.class_code.is_some() || self.family_code.is_some()
    }
}
