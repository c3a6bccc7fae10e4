//! Closed sets of values accepted by enumerated recipe, report and list fields.
//!
//! Every set maps a stored code to a display label and validates raw input
//! the same way: trimmed, case-insensitive, and rejected with a message that
//! names the field and lists every allowed code.

use crate::error::ValidationError;
use std::fmt;

/// A closed set of codes with display labels.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Parameter name used in validation errors.
    const FIELD: &'static str;
    /// Lead-in of the validation message, e.g. "Dificuldade inválida".
    const INVALID: &'static str;

    /// Every value in declaration order.
    fn all() -> &'static [Self];

    /// Stored and wire representation.
    fn code(self) -> &'static str;

    fn label(self) -> &'static str {
        self.code()
    }

    fn allowed_values() -> String {
        Self::all()
            .iter()
            .map(|choice| choice.code())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::parse_field(Self::FIELD, value)
    }

    /// Like [`Choice::parse`] but reports the error against `field`.
    fn parse_field(field: &str, value: &str) -> Result<Self, ValidationError> {
        let wanted = value.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|choice| choice.code().to_lowercase() == wanted)
            .ok_or_else(|| {
                ValidationError::new(
                    field,
                    format!(
                        "{}. Valores permitidos: {}",
                        Self::INVALID,
                        Self::allowed_values()
                    ),
                )
            })
    }
}

macro_rules! display_as_code {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.code())
                }
            }
        )*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    MasterChef,
}

impl Choice for Difficulty {
    const FIELD: &'static str = "dificuldade";
    const INVALID: &'static str = "Dificuldade inválida";

    fn all() -> &'static [Self] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::MasterChef,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Média",
            Difficulty::Hard => "Difícil",
            Difficulty::MasterChef => "Master Chef",
        }
    }
}

/// Sweet or savoury ("tipo").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeKind {
    Sweet,
    Savory,
}

impl Choice for RecipeKind {
    const FIELD: &'static str = "tipo";
    const INVALID: &'static str = "Tipo inválido";

    fn all() -> &'static [Self] {
        &[RecipeKind::Sweet, RecipeKind::Savory]
    }

    fn code(self) -> &'static str {
        match self {
            RecipeKind::Sweet => "doce",
            RecipeKind::Savory => "salgado",
        }
    }
}

macro_rules! categories {
    ($($variant:ident => ($code:literal, $label:literal)),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Category {
            $($variant),*
        }

        impl Choice for Category {
            const FIELD: &'static str = "categoria";
            const INVALID: &'static str = "Categoria inválida";

            fn all() -> &'static [Self] {
                &[$(Category::$variant),*]
            }

            fn code(self) -> &'static str {
                match self {
                    $(Category::$variant => $code),*
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Category::$variant => $label),*
                }
            }
        }
    };
}

categories! {
    Pasta => ("massas", "Massas"),
    Meat => ("carnes", "Carnes"),
    Poultry => ("aves", "Aves"),
    Seafood => ("peixes_frutos_mar", "Peixes e Frutos do Mar"),
    Vegetarian => ("vegetarianos", "Pratos Vegetarianos"),
    Vegan => ("veganos", "Pratos Veganos"),
    Soups => ("sopas_caldos", "Sopas e Caldos"),
    Salads => ("saladas", "Saladas"),
    Risottos => ("risotos", "Risotos"),
    Pizzas => ("pizzas", "Pizzas"),
    Sandwiches => ("lanches_sanduiches", "Lanches e Sanduíches"),
    Appetizers => ("aperitivos", "Aperitivos"),
    Cakes => ("bolos", "Bolos"),
    SweetPies => ("tortas_doces", "Tortas Doces"),
    SavoryPies => ("tortas_salgadas", "Tortas Salgadas"),
    Desserts => ("sobremesas", "Sobremesas"),
    Sweets => ("doces_brigadeiros", "Doces e Brigadeiros"),
    Breads => ("paes", "Pães"),
    Cookies => ("biscoitos", "Biscoitos"),
    Drinks => ("bebidas", "Bebidas"),
    Juices => ("sucos_vitaminas", "Sucos e Vitaminas"),
    Sauces => ("molhos_temperos", "Molhos e Temperos"),
    SideDishes => ("acompanhamentos", "Acompanhamentos"),
    RiceAndBeans => ("arroz_feijao", "Arroz e Feijão"),
    Mineira => ("comida_mineira", "Comida Mineira"),
    Italian => ("comida_italiana", "Comida Italiana"),
    Japanese => ("comida_japonesa", "Comida Japonesa"),
    Mexican => ("comida_mexicana", "Comida Mexicana"),
    Chinese => ("comida_chinesa", "Comida Chinesa"),
    Arabic => ("comida_arabe", "Comida Árabe"),
    Light => ("fit_light", "Fit e Light"),
    GlutenFree => ("sem_gluten", "Sem Glúten"),
    LactoseFree => ("sem_lactose", "Sem Lactose"),
    Diabetic => ("diabeticos", "Para Diabéticos"),
    Kids => ("infantil", "Comida Infantil"),
    Birthday => ("festa_aniversario", "Festa e Aniversário"),
    Holidays => ("natal_ano_novo", "Natal e Ano Novo"),
    Easter => ("pascoa", "Páscoa"),
    FestaJunina => ("festa_junina", "Festa Junina"),
    Other => ("outros", "Outros"),
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

/// Coded reason a recipe was reported ("motivo").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportReason {
    Inappropriate,
    Spam,
    FalseInformation,
    Copyright,
    Offensive,
    Dangerous,
    Other,
}

impl ReportReason {
    pub fn number(self) -> i16 {
        match self {
            ReportReason::Inappropriate => 1,
            ReportReason::Spam => 2,
            ReportReason::FalseInformation => 3,
            ReportReason::Copyright => 4,
            ReportReason::Offensive => 5,
            ReportReason::Dangerous => 6,
            ReportReason::Other => 7,
        }
    }

    pub fn from_number(number: i16) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|reason| reason.number() == number)
    }
}

impl Choice for ReportReason {
    const FIELD: &'static str = "motivo";
    const INVALID: &'static str = "Motivo inválido";

    fn all() -> &'static [Self] {
        &[
            ReportReason::Inappropriate,
            ReportReason::Spam,
            ReportReason::FalseInformation,
            ReportReason::Copyright,
            ReportReason::Offensive,
            ReportReason::Dangerous,
            ReportReason::Other,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            ReportReason::Inappropriate => "1",
            ReportReason::Spam => "2",
            ReportReason::FalseInformation => "3",
            ReportReason::Copyright => "4",
            ReportReason::Offensive => "5",
            ReportReason::Dangerous => "6",
            ReportReason::Other => "7",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ReportReason::Inappropriate => "Conteúdo inadequado",
            ReportReason::Spam => "Spam",
            ReportReason::FalseInformation => "Informações falsas",
            ReportReason::Copyright => "Violação de direitos autorais",
            ReportReason::Offensive => "Conteúdo ofensivo",
            ReportReason::Dangerous => "Receita perigosa",
            ReportReason::Other => "Outros",
        }
    }
}

/// Accepted alongside a prep-time filter; it does not change which bucket matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrepTimeOperator {
    More,
    #[default]
    Less,
}

impl Choice for PrepTimeOperator {
    const FIELD: &'static str = "tempo_preparo_operador";
    const INVALID: &'static str = "Operador inválido";

    fn all() -> &'static [Self] {
        &[PrepTimeOperator::More, PrepTimeOperator::Less]
    }

    fn code(self) -> &'static str {
        match self {
            PrepTimeOperator::More => "mais",
            PrepTimeOperator::Less => "menos",
        }
    }
}

/// Purchase progress of a shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStatus {
    /// At least one item and every item purchased.
    Complete,
    /// At least one item still to buy.
    Incomplete,
    Empty,
}

impl ListStatus {
    pub fn from_counts(total: i64, purchased: i64) -> Self {
        if total == 0 {
            ListStatus::Empty
        } else if purchased >= total {
            ListStatus::Complete
        } else {
            ListStatus::Incomplete
        }
    }
}

impl Choice for ListStatus {
    const FIELD: &'static str = "status";
    const INVALID: &'static str = "Status inválido";

    fn all() -> &'static [Self] {
        &[ListStatus::Complete, ListStatus::Incomplete, ListStatus::Empty]
    }

    fn code(self) -> &'static str {
        match self {
            ListStatus::Complete => "completa",
            ListStatus::Incomplete => "incompleta",
            ListStatus::Empty => "vazia",
        }
    }
}

display_as_code!(
    Difficulty,
    RecipeKind,
    Category,
    ReportReason,
    PrepTimeOperator,
    ListStatus
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Difficulty::parse(" master chef "), Ok(Difficulty::MasterChef));
        assert_eq!(RecipeKind::parse("DOCE"), Ok(RecipeKind::Sweet));
        assert_eq!(Category::parse("Comida_Mineira"), Ok(Category::Mineira));
    }

    #[test]
    fn test_invalid_difficulty_names_field_and_values() {
        let err = Difficulty::parse("Lendário").unwrap_err();
        assert_eq!(err.field, "dificuldade");
        assert_eq!(
            err.message,
            "Dificuldade inválida. Valores permitidos: Fácil, Média, Difícil, Master Chef"
        );
    }

    #[test]
    fn test_parse_field_overrides_reported_field() {
        let err = ReportReason::parse_field("motivo_denuncia", "9").unwrap_err();
        assert_eq!(err.field, "motivo_denuncia");
        assert!(err.message.ends_with("1, 2, 3, 4, 5, 6, 7"));
    }

    #[test]
    fn test_category_table() {
        assert_eq!(Category::all().len(), 40);
        assert_eq!(Category::default().code(), "outros");
        assert_eq!(Category::Arabic.label(), "Comida Árabe");
    }

    #[test]
    fn test_report_reason_numbers_round_trip() {
        for reason in ReportReason::all() {
            assert_eq!(ReportReason::from_number(reason.number()), Some(*reason));
        }
        assert_eq!(ReportReason::from_number(0), None);
        assert_eq!(ReportReason::Dangerous.label(), "Receita perigosa");
    }

    #[test]
    fn test_list_status_from_counts() {
        assert_eq!(ListStatus::from_counts(0, 0), ListStatus::Empty);
        assert_eq!(ListStatus::from_counts(3, 3), ListStatus::Complete);
        assert_eq!(ListStatus::from_counts(3, 1), ListStatus::Incomplete);
    }
}
