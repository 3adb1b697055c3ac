// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles for every embedded `.ftl` file.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else resolves.
pub const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match load_bundle(&locale, content.data.as_ref()) {
                Some(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => tracing::warn!(%locale, "failed to parse translation file"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(DEFAULT_LOCALE);
        tracing::debug!(locale = %current_locale, "resolved interface locale");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            tracing::info!(%locale, "interface locale changed");
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates `key` in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting Fluent variables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }

    /// Message ids defined for `locale`, sorted. Empty if the locale is unknown.
    #[must_use]
    pub fn message_ids(&self, locale: &LanguageIdentifier) -> Vec<String> {
        let Some(content) = Asset::get(&format!("{locale}.ftl")) else {
            return Vec::new();
        };
        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
        // Entries that fail to parse come back as junk and are skipped.
        let resource = FluentResource::try_new(source).unwrap_or_else(|(resource, _)| resource);
        let mut ids: Vec<String> = resource
            .entries()
            .filter_map(|entry| match entry {
                ast::Entry::Message(message) => Some(message.id.name.to_string()),
                _ => None,
            })
            .collect();
        ids.sort();
        ids
    }
}

fn load_bundle(locale: &LanguageIdentifier, data: &[u8]) -> Option<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(data).to_string();
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.general.language.clone(), os_locale]
        .into_iter()
        .flatten()
        .find_map(|raw| match_available(&raw, available))
}

/// Exact match first, then the first available locale sharing the language.
fn match_available(raw: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let wanted = raw.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&wanted) {
        return Some(wanted);
    }
    available
        .iter()
        .find(|candidate| candidate.language == wanted.language)
        .cloned()
}
