//! Comparison backend settings.

use serde::{Deserialize, Serialize};

/// Settings for the comparison provider (Value Object)
///
/// Tuning options are passed through only when set; see [`Self::has_options`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParams {
    /// Model identifier on the comparison backend
    pub model: String,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
    /// Maximum output length
    pub num_predict: Option<i64>,
    pub repeat_penalty: Option<f64>,
}

impl ComparisonParams {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: None,
            top_p: None,
            top_k: None,
            num_predict: None,
            repeat_penalty: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_num_predict(mut self, num_predict: i64) -> Self {
        self.num_predict = Some(num_predict);
        self
    }

    /// Whether any tuning option is set
    pub fn has_options(&self) -> bool {
        self.temperature.is_some()
            || self.top_p.is_some()
            || self.top_k.is_some()
            || self.num_predict.is_some()
            || self.repeat_penalty.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_options() {
        let params = ComparisonParams::new("llama3");
        assert!(!params.has_options());
        assert!(params.with_num_predict(256).has_options());
    }
}
