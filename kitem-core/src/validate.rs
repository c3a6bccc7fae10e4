//! Field rules applied to submitted records before they are written.

use crate::choices::{Category, Choice, Difficulty, ReportReason};
use crate::error::ValidationError;
use crate::model::{Recipe, RecipeDraft, UserId};
use crate::prep_time::parse_prep_time;

pub const TITLE_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 1500;
pub const DIETARY_RESTRICTION_MAX: usize = 25;
pub const IMAGE_URL_MAX: usize = 600;
pub const UNIT_MAX: usize = 25;
pub const INGREDIENT_NAME_MAX: usize = 50;
pub const USERNAME_MAX: usize = 150;
pub const REPORT_DETAIL_MAX: usize = 280;
pub const LIST_NAME_MAX: usize = 100;

/// Largest price that fits ten digits with two decimals.
const PRICE_LIMIT: f64 = 100_000_000.0;

const REQUIRED: &str = "Este campo é obrigatório.";

/// Messages for one required text field.
pub struct TextRule {
    pub field: &'static str,
    pub max: usize,
    pub required: &'static str,
    pub blank: &'static str,
    pub too_long: &'static str,
}

impl TextRule {
    /// Trims the value and enforces presence and length.
    pub fn check(&self, value: Option<String>) -> Result<String, ValidationError> {
        let value = value.ok_or_else(|| ValidationError::new(self.field, self.required))?;
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(ValidationError::new(self.field, self.blank));
        }
        if value.chars().count() > self.max {
            return Err(ValidationError::new(self.field, self.too_long));
        }
        Ok(value)
    }
}

pub const TITLE: TextRule = TextRule {
    field: "titulo",
    max: TITLE_MAX,
    required: "O título da receita é obrigatório.",
    blank: "O título da receita não pode estar vazio.",
    too_long: "O título da receita não pode ter mais de 50 caracteres.",
};

pub const DESCRIPTION: TextRule = TextRule {
    field: "descricao",
    max: DESCRIPTION_MAX,
    required: "A descrição é obrigatória.",
    blank: "A descrição não pode estar vazia.",
    too_long: "A descrição não pode ter mais de 1500 caracteres.",
};

pub const UNIT: TextRule = TextRule {
    field: "unidade_medida",
    max: UNIT_MAX,
    required: "A unidade de medida é obrigatória.",
    blank: "A unidade de medida não pode estar vazia.",
    too_long: "A unidade de medida não pode ter mais de 25 caracteres.",
};

pub const INGREDIENT_NAME: TextRule = TextRule {
    field: "nome",
    max: INGREDIENT_NAME_MAX,
    required: "O nome do ingrediente é obrigatório.",
    blank: "O nome do ingrediente não pode estar vazio.",
    too_long: "O nome do ingrediente não pode ter mais de 50 caracteres.",
};

pub const USERNAME: TextRule = TextRule {
    field: "username",
    max: USERNAME_MAX,
    required: "O nome de usuário é obrigatório.",
    blank: "O nome de usuário não pode estar vazio.",
    too_long: "O nome de usuário não pode ter mais de 150 caracteres.",
};

/// Trims an optional text field; blank becomes absent.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("Certifique-se de que este campo não tenha mais de {max} caracteres."),
        ));
    }
    Ok(Some(value.to_string()))
}

pub fn report_detail(value: Option<String>) -> Result<Option<String>, ValidationError> {
    optional_text("detalhamento", value, REPORT_DETAIL_MAX).map_err(|_| {
        ValidationError::new(
            "detalhamento",
            "O detalhamento não pode ter mais de 280 caracteres.",
        )
    })
}

pub fn report_reason(field: &str, number: i64) -> Result<ReportReason, ValidationError> {
    i16::try_from(number)
        .ok()
        .and_then(ReportReason::from_number)
        .ok_or_else(|| ValidationError::new(field, "Motivo de denúncia inválido."))
}

pub fn quantity(value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::new(
            "quantidade",
            "A quantidade deve ser um número válido.",
        ))
    }
}

/// Rounds to cents and rejects negative or oversized prices.
pub fn price(value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    if !value.is_finite() || value < 0.0 || value >= PRICE_LIMIT {
        return Err(ValidationError::new(
            "preco",
            "Informe um preço válido com no máximo 10 dígitos.",
        ));
    }
    Ok(Some((value * 100.0).round() / 100.0))
}

/// Email is optional; when given it needs one `@`, a non-empty local part and
/// a dotted domain with no empty labels.
pub fn email(value: Option<String>) -> Result<String, ValidationError> {
    let value = value.unwrap_or_default().trim().to_string();
    if value.is_empty() || is_email(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(
            "email",
            "Insira um endereço de email válido.",
        ))
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

pub fn password(value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::new("password", REQUIRED)),
    }
}

/// Raw recipe fields as submitted. Absent fields keep their current value on update.
#[derive(Debug, Clone, Default)]
pub struct RecipeInput {
    pub user_id: Option<UserId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub prep_time: Option<String>,
    pub difficulty: Option<String>,
    pub kind: Option<String>,
    pub dietary_restriction: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl RecipeInput {
    /// Validates a new recipe; title, description, prep time, difficulty and owner are required.
    pub fn into_draft(self) -> Result<RecipeDraft, ValidationError> {
        let user_id = self
            .user_id
            .ok_or_else(|| ValidationError::new("id_usuario", REQUIRED))?;
        let prep_time = self
            .prep_time
            .as_deref()
            .ok_or_else(|| ValidationError::new("tempo_preparo", REQUIRED))
            .and_then(|value| parse_prep_time("tempo_preparo", value))?;
        let difficulty = self
            .difficulty
            .as_deref()
            .ok_or_else(|| ValidationError::new(Difficulty::FIELD, REQUIRED))
            .and_then(Difficulty::parse)?;

        Ok(RecipeDraft {
            user_id,
            title: TITLE.check(self.title)?,
            description: DESCRIPTION.check(self.description)?,
            prep_time,
            difficulty,
            kind: optional_choice(self.kind)?,
            dietary_restriction: optional_text(
                "restricao_alimentar",
                self.dietary_restriction,
                DIETARY_RESTRICTION_MAX,
            )?,
            category: optional_choice(self.category)?.unwrap_or_default(),
            image_url: optional_text("imagem", self.image_url, IMAGE_URL_MAX)?,
        })
    }

    /// Validates the supplied fields and merges them over `current`.
    pub fn apply(self, current: &Recipe) -> Result<RecipeDraft, ValidationError> {
        let mut draft = RecipeDraft::from(current);
        if let Some(user_id) = self.user_id {
            draft.user_id = user_id;
        }
        if self.title.is_some() {
            draft.title = TITLE.check(self.title)?;
        }
        if self.description.is_some() {
            draft.description = DESCRIPTION.check(self.description)?;
        }
        if let Some(prep_time) = self.prep_time.as_deref() {
            draft.prep_time = parse_prep_time("tempo_preparo", prep_time)?;
        }
        if let Some(difficulty) = self.difficulty.as_deref() {
            draft.difficulty = Difficulty::parse(difficulty)?;
        }
        if self.kind.is_some() {
            draft.kind = optional_choice(self.kind)?;
        }
        if self.dietary_restriction.is_some() {
            draft.dietary_restriction = optional_text(
                "restricao_alimentar",
                self.dietary_restriction,
                DIETARY_RESTRICTION_MAX,
            )?;
        }
        if self.category.is_some() {
            draft.category = optional_choice::<Category>(self.category)?.unwrap_or_default();
        }
        if self.image_url.is_some() {
            draft.image_url = optional_text("imagem", self.image_url, IMAGE_URL_MAX)?;
        }
        Ok(draft)
    }
}

fn optional_choice<C: Choice>(value: Option<String>) -> Result<Option<C>, ValidationError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => C::parse(value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::RecipeKind;
    use chrono::NaiveTime;

    fn input() -> RecipeInput {
        RecipeInput {
            user_id: Some(1),
            title: Some("  Bolo de cenoura ".to_string()),
            description: Some("Com cobertura de chocolate".to_string()),
            prep_time: Some("00:50:00".to_string()),
            difficulty: Some("fácil".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_into_draft_defaults() {
        let draft = input().into_draft().unwrap();
        assert_eq!(draft.title, "Bolo de cenoura");
        assert_eq!(draft.difficulty, Difficulty::Easy);
        assert_eq!(draft.category, Category::Other);
        assert_eq!(draft.kind, None);
        assert_eq!(draft.prep_time, NaiveTime::from_hms_opt(0, 50, 0).unwrap());
    }

    #[test]
    fn test_title_rules() {
        let err = RecipeInput {
            title: Some("   ".to_string()),
            ..input()
        }
        .into_draft()
        .unwrap_err();
        assert_eq!(err.field, "titulo");
        assert_eq!(err.message, "O título da receita não pode estar vazio.");

        let err = RecipeInput {
            title: Some("x".repeat(51)),
            ..input()
        }
        .into_draft()
        .unwrap_err();
        assert_eq!(err.message, "O título da receita não pode ter mais de 50 caracteres.");
    }

    #[test]
    fn test_missing_difficulty_is_required() {
        let err = RecipeInput {
            difficulty: None,
            ..input()
        }
        .into_draft()
        .unwrap_err();
        assert_eq!(err.field, "dificuldade");
    }

    #[test]
    fn test_invalid_category_rejected() {
        let err = RecipeInput {
            category: Some("churrasco".to_string()),
            ..input()
        }
        .into_draft()
        .unwrap_err();
        assert_eq!(err.field, "categoria");
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let draft = input().into_draft().unwrap();
        let recipe = Recipe {
            id: 7,
            user_id: draft.user_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            prep_time: draft.prep_time,
            difficulty: draft.difficulty,
            kind: draft.kind,
            dietary_restriction: None,
            category: draft.category,
            image_url: None,
            view_count: 12,
        };
        let updated = RecipeInput {
            kind: Some("doce".to_string()),
            ..Default::default()
        }
        .apply(&recipe)
        .unwrap();
        assert_eq!(updated.kind, Some(RecipeKind::Sweet));
        assert_eq!(updated.title, "Bolo de cenoura");
        assert_eq!(updated.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_report_detail_blank_becomes_absent() {
        assert_eq!(report_detail(Some("   ".to_string())).unwrap(), None);
        assert!(report_detail(Some("a".repeat(281))).is_err());
        assert_eq!(
            report_detail(Some(" cru ".to_string())).unwrap(),
            Some("cru".to_string())
        );
    }

    #[test]
    fn test_report_reason_range() {
        assert_eq!(report_reason("motivo_denuncia", 2).unwrap(), ReportReason::Spam);
        assert!(report_reason("motivo_denuncia", 8).is_err());
        assert!(report_reason("motivo_denuncia", 70_000).is_err());
    }

    #[test]
    fn test_price_rounds_to_cents() {
        assert_eq!(price(Some(3.456)).unwrap(), Some(3.46));
        assert_eq!(price(None).unwrap(), None);
        assert!(price(Some(-1.0)).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(email(None).unwrap(), "");
        assert_eq!(
            email(Some(" ana@kitem.com.br ".to_string())).unwrap(),
            "ana@kitem.com.br"
        );
        for bad in ["@", "ana@", "@kitem.com", "ana@kitem", "ana@@kitem.com", "ana@kitem..com", "a na@kitem.com"] {
            let err = email(Some(bad.to_string())).unwrap_err();
            assert_eq!(err.field, "email", "{bad}");
        }
    }
}
