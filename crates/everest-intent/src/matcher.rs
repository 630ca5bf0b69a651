#![forbid(unsafe_code)]

//! Keyword intent matching.
//!
//! Classification is a single pass over an ordered rule list: the message
//! is lower-cased and the first rule with any matching keyword wins.
//! Purely numeric messages, and tax questions that carry an amount, route
//! to the tax estimate instead of keyword lookup.
//!
//! # Usage
//!
//! ```
//! use everest_intent::{Intent, IntentMatcher, Reply};
//!
//! let matcher = IntentMatcher::new();
//! assert_eq!(matcher.classify("Hello there!"), Intent::Greeting);
//! assert!(matches!(matcher.respond("2500"), Reply::Tax(_)));
//! assert_eq!(matcher.respond("how much tax?"), Reply::NeedAmount);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::tax::{TaxBreakdown, TaxRates};

/// The categories the assistant can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// A greeting ("hello", "bonjour").
    Greeting,
    /// A question about the services on offer.
    Services,
    /// A question about pricing.
    Pricing,
    /// A request for contact details.
    Contact,
    /// A tax-simulation request.
    TaxCalculation,
    /// Anything the rules do not cover.
    Fallback,
}

/// One keyword rule: the first rule whose keywords match decides the
/// intent.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The intent this rule classifies into.
    pub intent: Intent,
    /// Lower-case keywords matched as substrings of the message.
    pub keywords: Vec<String>,
}

impl Rule {
    /// Create a rule from string-like keywords.
    #[must_use]
    pub fn new<I, K>(intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            intent,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw.as_str()))
    }
}

/// The assistant's typed reply. Mapping replies to copy is the host's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    /// A canned answer for the matched category.
    Canned(Intent),
    /// A computed tax estimate.
    Tax(TaxBreakdown),
    /// The message asked for a tax estimate without a usable amount:
    /// prompt the visitor for a valid number.
    NeedAmount,
}

/// Stateless free-text classifier.
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    rules: Vec<Rule>,
    rates: TaxRates,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentMatcher {
    /// Create a matcher with the stock rule table (English and French
    /// keywords) and default tax rates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            rates: TaxRates::default(),
        }
    }

    /// Replace the rule table wholesale. Order is significant: earlier
    /// rules win.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the tax rates used for numeric replies.
    #[must_use]
    pub fn with_rates(mut self, rates: TaxRates) -> Self {
        self.rates = rates;
        self
    }

    /// Classify a message into its category. Keyword lookup only; numeric
    /// routing happens in [`respond`](Self::respond).
    #[must_use]
    pub fn classify(&self, input: &str) -> Intent {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(Intent::Fallback, |rule| rule.intent)
    }

    /// Produce the reply for a message.
    ///
    /// Purely numeric messages go straight to the tax estimate. Messages
    /// classified as [`Intent::TaxCalculation`] use the first parsable
    /// amount in the message, or ask for one. Everything else is a canned
    /// category reply.
    #[must_use]
    pub fn respond(&self, input: &str) -> Reply {
        let lowered = input.to_lowercase();

        if let Some(amount) = numeric_only_amount(&lowered) {
            return self.tax_reply(amount);
        }

        let intent = self
            .rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(Intent::Fallback, |rule| rule.intent);
        #[cfg(feature = "tracing")]
        tracing::debug!(?intent, "intent classified");

        if intent == Intent::TaxCalculation {
            return match first_amount(&lowered) {
                Some(amount) => self.tax_reply(amount),
                None => Reply::NeedAmount,
            };
        }

        Reply::Canned(intent)
    }

    fn tax_reply(&self, amount: f64) -> Reply {
        match self.rates.estimate(amount) {
            Some(breakdown) => Reply::Tax(breakdown),
            None => Reply::NeedAmount,
        }
    }
}

/// The stock rule table, in match order.
fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            Intent::Greeting,
            ["hello", "hi ", "hey", "bonjour", "salut", "good morning"],
        ),
        Rule::new(
            Intent::Services,
            [
                "service",
                "offer",
                "accounting",
                "audit",
                "advisory",
                "comptab",
                "expertise",
            ],
        ),
        Rule::new(
            Intent::Pricing,
            ["price", "pricing", "cost", "fee", "tarif", "quote", "devis"],
        ),
        Rule::new(
            Intent::Contact,
            [
                "contact",
                "email",
                "phone",
                "address",
                "appointment",
                "rendez-vous",
                "reach",
            ],
        ),
        Rule::new(
            Intent::TaxCalculation,
            ["tax", "impot", "impôt", "charges", "simulation", "calcul"],
        ),
    ]
}

/// Parse one token as an amount: currency symbols and thousands separators
/// are stripped, decimal commas accepted.
fn parse_amount(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| !matches!(c, '€' | '$' | '£' | ' ' | '\u{a0}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    // "3.500.50" after separator folding is not a number; reject rather
    // than guess.
    cleaned.parse::<f64>().ok()
}

/// The message's single amount, if the message is nothing but numbers.
fn numeric_only_amount(lowered: &str) -> Option<f64> {
    let mut words = lowered.unicode_words();
    let first = words.next()?;
    let amount = parse_amount(first)?;
    if words.next().is_some() {
        return None;
    }
    Some(amount)
}

/// First parsable amount anywhere in the message.
fn first_amount(lowered: &str) -> Option<f64> {
    lowered.unicode_words().find_map(parse_amount)
}
