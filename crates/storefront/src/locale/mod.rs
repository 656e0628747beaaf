//! Locale registry and browsing-session locale state.
//!
//! The registry is a fixed, exhaustive mapping from [`LocaleId`] to a
//! [`Locale`] definition. Because the id is a closed enum and the registry
//! matches on it exhaustively, resolving a locale cannot fail and a locale
//! with an incomplete message bundle cannot compile. The only fallible edge
//! is parsing a locale id from untrusted text ([`LocaleId::from_str`]), which
//! callers must treat as a precondition violation.

pub mod messages;

use std::sync::LazyLock;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use shopsphere_core::CurrencyCode;

pub use messages::Messages;

/// Identifier of a supported locale. `en-US` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LocaleId {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "th-TH")]
    ThTh,
}

impl LocaleId {
    /// All supported locales, in selector display order.
    pub const ALL: [Self; 2] = [Self::EnUs, Self::ThTh];

    /// The BCP 47 tag for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ThTh => "th-TH",
        }
    }

    /// Resolve this id to its full definition.
    ///
    /// Infallible by construction: the registry covers every variant.
    #[must_use]
    pub fn resolve(self) -> &'static Locale {
        match self {
            Self::EnUs => &EN_US,
            Self::ThTh => &TH_TH,
        }
    }
}

impl std::fmt::Display for LocaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LocaleId {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| LocaleParseError(s.to_owned()))
    }
}

/// A caller passed a locale id outside the supported set.
///
/// The set of valid ids is statically known, so this indicates a defect in
/// the caller and must propagate rather than be silently substituted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct LocaleParseError(pub String);

/// Rounding applied to converted amounts before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round to the nearest whole unit, halves away from zero. Used for
    /// display currencies without minor units.
    NearestInteger,
}

impl Rounding {
    fn apply(self, amount: Decimal) -> Decimal {
        match self {
            Self::NearestInteger => {
                amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            }
        }
    }
}

/// Number formatting rules for a display currency: symbol placement, digit
/// grouping, and a fixed fractional digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub currency: CurrencyCode,
    pub fraction_digits: u32,
}

impl CurrencyFormat {
    /// Format a non-negative amount already denominated in this currency.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let precision = self.fraction_digits as usize;
        let rounded = amount
            .round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{rounded:.precision$}");

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits.as_str(), None),
        };
        let grouped = group_thousands(int_part);

        match frac_part {
            Some(frac_part) => format!("{}{grouped}.{frac_part}", self.currency.symbol()),
            None => format!("{}{grouped}", self.currency.symbol()),
        }
    }
}

/// Insert a `,` between each group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// A full locale definition: display metadata, currency conversion and
/// formatting rules, and the complete translated message bundle.
#[derive(Debug)]
pub struct Locale {
    pub id: LocaleId,
    /// Selector label, e.g. "ENG / USD".
    pub label: &'static str,
    pub language: &'static str,
    pub currency: CurrencyCode,
    /// Multiplier applied to reference-currency amounts.
    pub price_rate: Decimal,
    /// Applied after conversion, before formatting. Absent means the
    /// formatter's own fractional-digit rule is the only rounding.
    pub rounding: Option<Rounding>,
    pub format: CurrencyFormat,
    pub messages: Messages,
}

impl Locale {
    /// Convert a reference-currency amount into this locale's display
    /// currency and format it.
    ///
    /// Pure: no side effects, and any finite non-negative amount formats
    /// successfully.
    #[must_use]
    pub fn format_price(&self, amount: Decimal) -> String {
        let converted = amount * self.price_rate;
        let adjusted = match self.rounding {
            Some(rounding) => rounding.apply(converted),
            None => converted,
        };
        self.format.format(adjusted)
    }
}

static EN_US: LazyLock<Locale> = LazyLock::new(|| Locale {
    id: LocaleId::EnUs,
    label: "ENG / USD",
    language: "English",
    currency: CurrencyCode::USD,
    price_rate: Decimal::ONE,
    rounding: None,
    format: CurrencyFormat {
        currency: CurrencyCode::USD,
        fraction_digits: 2,
    },
    messages: messages::EN_US,
});

static TH_TH: LazyLock<Locale> = LazyLock::new(|| Locale {
    id: LocaleId::ThTh,
    label: "TH / THB",
    language: "Thai",
    currency: CurrencyCode::THB,
    price_rate: Decimal::from(35),
    rounding: Some(Rounding::NearestInteger),
    format: CurrencyFormat {
        currency: CurrencyCode::THB,
        fraction_digits: 0,
    },
    messages: messages::TH_TH,
});

/// Session-scoped locale state, passed explicitly to consumers.
///
/// Holds only the active id; switching is a single assignment, so a consumer
/// sees either the old locale's full bundle or the new one's, never a mix.
/// Nothing already rendered changes retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleSession {
    active: LocaleId,
}

impl LocaleSession {
    /// Create a session with the given active locale.
    #[must_use]
    pub const fn new(active: LocaleId) -> Self {
        Self { active }
    }

    /// The active locale id.
    #[must_use]
    pub const fn active(&self) -> LocaleId {
        self.active
    }

    /// The active locale definition.
    #[must_use]
    pub fn locale(&self) -> &'static Locale {
        self.active.resolve()
    }

    /// Switch the active locale. All subsequent lookups and price formats
    /// reflect the new locale.
    pub fn set_active(&mut self, id: LocaleId) {
        self.active = id;
    }

    /// Format a reference-currency amount in the active locale.
    #[must_use]
    pub fn format_currency(&self, amount: Decimal) -> String {
        self.locale().format_price(amount)
    }
}
