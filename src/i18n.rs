// ABOUTME: Display languages and every fixed user-visible string, keyed by language.
// ABOUTME: All copy exists in exactly two languages, French (default) and English.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two display languages. French is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// Wire code sent to the chat endpoint.
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    /// Fixed strings for this language.
    pub fn strings(self) -> &'static Strings {
        match self {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }

    /// Canned suggestion questions for this language, in display order.
    pub fn suggestions(self) -> &'static [&'static str; 3] {
        &self.strings().suggestions
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-ca" | "fr-fr" => Ok(Language::Fr),
            "en" | "en-ca" | "en-us" | "en-gb" => Ok(Language::En),
            other => anyhow::bail!("Unknown language: '{}'. Expected: fr, en", other),
        }
    }
}

/// One language's worth of fixed copy.
#[derive(Debug)]
pub struct Strings {
    pub welcome: &'static str,
    pub placeholder: &'static str,
    pub suggestion_label: &'static str,
    pub suggestions: [&'static str; 3],
    pub error: &'static str,
    pub title: &'static str,
    pub send: &'static str,
    pub ready: &'static str,
    pub sending: &'static str,
    pub messages: &'static str,
    pub key_hints: &'static str,
}

static FR: Strings = Strings {
    welcome: "Bonjour ! Je suis un assistant expert sur le Régime enregistré d'épargne-invalidité (RDSP) canadien. Posez-moi vos questions !",
    placeholder: "Posez votre question sur le RDSP...",
    suggestion_label: "Essayez ces questions :",
    suggestions: [
        "Qu'est-ce que le RDSP ?",
        "Qui est éligible ?",
        "Quels sont les avantages fiscaux ?",
    ],
    error: "Désolé, une erreur s'est produite. Essayez à nouveau.",
    title: "Assistant RDSP",
    send: "Envoyer",
    ready: "prêt",
    sending: "envoi...",
    messages: "messages",
    key_hints: "Tab: naviguer | Ctrl+T: langue | Échap: quitter",
};

static EN: Strings = Strings {
    welcome: "Hello! I'm an expert assistant on the Canadian Registered Disability Savings Plan (RDSP). Ask me your questions!",
    placeholder: "Ask your RDSP question...",
    suggestion_label: "Try these questions:",
    suggestions: ["What is RDSP?", "Who is eligible?", "What are the tax benefits?"],
    error: "Sorry, an error occurred. Please try again.",
    title: "RDSP Assistant",
    send: "Send",
    ready: "ready",
    sending: "sending...",
    messages: "messages",
    key_hints: "Tab: navigate | Ctrl+T: language | Esc: quit",
};
