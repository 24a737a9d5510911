use crate::core::arithmetic::{DisplayFormat, DEFAULT_EXPONENT_DIGITS, DEFAULT_MAX_DISPLAY_DIGITS};
use crate::core::validator::ValidationRules;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_digits, validate_positive_number, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub max_display_digits: Option<usize>,
    pub exponent_digits: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub min_name_length: Option<usize>,
    pub min_password_length: Option<usize>,
    pub phone_digits: Option<usize>,
    pub rejected_phone: Option<String>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MIN_PASSWORD_LENGTH})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| AppError::ConfigError {
            message: format!("Regex error: {}", e),
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let name = &caps[1];
            std::env::var(name).unwrap_or_else(|_| {
                missing.push(name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(AppError::ConfigError {
                message: format!("Environment variable(s) not set: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }

    pub fn display_format(&self) -> DisplayFormat {
        DisplayFormat {
            max_digits: self
                .calculator
                .max_display_digits
                .unwrap_or(DEFAULT_MAX_DISPLAY_DIGITS),
            exponent_digits: self
                .calculator
                .exponent_digits
                .unwrap_or(DEFAULT_EXPONENT_DIGITS),
        }
    }

    pub fn validation_rules(&self) -> ValidationRules {
        let defaults = ValidationRules::default();
        let v = &self.validation;
        ValidationRules {
            min_name_length: v.min_name_length.unwrap_or(defaults.min_name_length),
            min_password_length: v.min_password_length.unwrap_or(defaults.min_password_length),
            phone_digits: v.phone_digits.unwrap_or(defaults.phone_digits),
            rejected_phone: v.rejected_phone.clone().unwrap_or(defaults.rejected_phone),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        let format = self.display_format();
        validate_range("calculator.max_display_digits", format.max_digits, 1, 20)?;
        validate_range("calculator.exponent_digits", format.exponent_digits, 0, 20)?;

        let rules = self.validation_rules();
        validate_positive_number("validation.min_name_length", rules.min_name_length, 1)?;
        validate_positive_number("validation.min_password_length", rules.min_password_length, 1)?;
        validate_positive_number("validation.phone_digits", rules.phone_digits, 1)?;
        validate_digits("validation.rejected_phone", &rules.rejected_phone)?;

        Ok(())
    }
}
