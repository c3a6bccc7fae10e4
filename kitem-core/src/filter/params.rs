use crate::error::ValidationError;
use chrono::NaiveDate;

/// Query-string pairs in request order; keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Appends a pair; handy when building params by hand.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// First non-blank value for `key`, trimmed. Blank values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
    }

    /// Every non-blank value for `key`, trimmed, in request order.
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub fn get_id(&self, key: &str) -> Result<Option<i32>, ValidationError> {
        self.get(key)
            .map(|value| {
                value
                    .parse::<i32>()
                    .map_err(|_| ValidationError::new(key, "Um número inteiro válido é necessário."))
            })
            .transpose()
    }

    pub fn get_date(&self, key: &str) -> Result<Option<NaiveDate>, ValidationError> {
        self.get(key)
            .map(|value| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                    ValidationError::new(
                        key,
                        "Formato inválido para data. Use o formato YYYY-MM-DD.",
                    )
                })
            })
            .transpose()
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_absent() {
        let params = QueryParams::default().with("tipo", "  ").with("tipo", "doce");
        assert_eq!(params.get("tipo"), Some("doce"));
        assert_eq!(params.get("categoria"), None);
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let params = QueryParams::default()
            .with("ingredientes", "ovo")
            .with("search", "bolo")
            .with("ingredientes", " farinha ")
            .with("ingredientes", "");
        assert_eq!(params.get_all("ingredientes"), vec!["ovo", "farinha"]);
    }

    #[test]
    fn test_typed_getters() {
        let params = QueryParams::default()
            .with("receita_id", "12")
            .with("usuario_id", "doze")
            .with("data_inicio", "2024-02-30");
        assert_eq!(params.get_id("receita_id").unwrap(), Some(12));
        assert_eq!(params.get_id("usuario_id").unwrap_err().field, "usuario_id");
        assert!(params.get_date("data_inicio").is_err());
        assert_eq!(params.get_date("data_fim").unwrap(), None);
    }
}
