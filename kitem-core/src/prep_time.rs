use crate::error::ValidationError;
use chrono::NaiveTime;

/// Fixed prep-time ranges a recipe search can ask for.
///
/// The first range includes its upper bound; every later range excludes its
/// lower bound and includes its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrepTimeBucket {
    UpTo20,
    From21To30,
    From31To40,
    From41To60,
    Over60,
}

impl PrepTimeBucket {
    pub const FIELD: &'static str = "tempo_preparo";

    /// Bucket that contains `minutes`.
    pub fn from_minutes(minutes: u32) -> Self {
        match minutes {
            0..=20 => PrepTimeBucket::UpTo20,
            21..=30 => PrepTimeBucket::From21To30,
            31..=40 => PrepTimeBucket::From31To40,
            41..=60 => PrepTimeBucket::From41To60,
            _ => PrepTimeBucket::Over60,
        }
    }

    /// Parses the integer-minutes query parameter.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .trim()
            .parse::<u32>()
            .map(Self::from_minutes)
            .map_err(|_| {
                ValidationError::new(
                    Self::FIELD,
                    "O tempo de preparo deve ser um número inteiro representando minutos.",
                )
            })
    }

    /// `(exclusive lower, inclusive upper)` bounds; `None` means unbounded.
    pub fn bounds(self) -> (Option<NaiveTime>, Option<NaiveTime>) {
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0);
        match self {
            PrepTimeBucket::UpTo20 => (None, at(0, 20)),
            PrepTimeBucket::From21To30 => (at(0, 20), at(0, 30)),
            PrepTimeBucket::From31To40 => (at(0, 30), at(0, 40)),
            PrepTimeBucket::From41To60 => (at(0, 40), at(1, 0)),
            PrepTimeBucket::Over60 => (at(1, 0), None),
        }
    }

    pub fn contains(self, prep_time: NaiveTime) -> bool {
        let (lower, upper) = self.bounds();
        lower.is_none_or(|lower| prep_time > lower) && upper.is_none_or(|upper| prep_time <= upper)
    }
}

/// Parses a stored or submitted prep time: `HH:MM:SS` or `HH:MM`.
pub fn parse_prep_time(field: &str, value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            ValidationError::new(
                field,
                "Formato de horário inválido. Use um dos formatos: hh:mm[:ss].",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap()
    }

    #[test]
    fn test_bucket_boundaries() {
        assert!(PrepTimeBucket::UpTo20.contains(minutes(20)));
        assert!(!PrepTimeBucket::UpTo20.contains(minutes(21)));
        assert!(!PrepTimeBucket::From21To30.contains(minutes(20)));
        assert!(PrepTimeBucket::From21To30.contains(minutes(30)));
        assert!(PrepTimeBucket::From41To60.contains(minutes(60)));
        assert!(PrepTimeBucket::Over60.contains(minutes(61)));
        assert!(!PrepTimeBucket::Over60.contains(minutes(60)));
    }

    #[test]
    fn test_twenty_five_minutes() {
        let recipe = minutes(25);
        assert!(PrepTimeBucket::parse("30").unwrap().contains(recipe));
        assert!(!PrepTimeBucket::parse("20").unwrap().contains(recipe));
    }

    #[test]
    fn test_query_value_selects_containing_bucket() {
        assert_eq!(PrepTimeBucket::from_minutes(0), PrepTimeBucket::UpTo20);
        assert_eq!(PrepTimeBucket::from_minutes(35), PrepTimeBucket::From31To40);
        assert_eq!(PrepTimeBucket::from_minutes(240), PrepTimeBucket::Over60);
    }

    #[test]
    fn test_non_integer_is_rejected() {
        let err = PrepTimeBucket::parse("meia hora").unwrap_err();
        assert_eq!(err.field, "tempo_preparo");
        assert!(PrepTimeBucket::parse("-5").is_err());
    }

    #[test]
    fn test_parse_prep_time_formats() {
        assert_eq!(parse_prep_time("tempo_preparo", "00:45:00").unwrap(), minutes(45));
        assert_eq!(parse_prep_time("tempo_preparo", "01:10").unwrap(), minutes(70));
        assert!(parse_prep_time("tempo_preparo", "70 min").is_err());
    }
}
