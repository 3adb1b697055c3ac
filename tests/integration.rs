// SPDX-License-Identifier: MPL-2.0
use logi_portal::app::config::{self, Config};
use logi_portal::domain::communication::{mark_all_read, sample_alerts, unread_count};
use logi_portal::domain::inventory::{sample_items, StockStatus};
use logi_portal::domain::registration::{password_strength, RegistrationForm, Role};
use logi_portal::domain::search::{RowFilter, Selection};
use logi_portal::domain::settings::{Currency, DateFormat, Timezone, UnitSystem};
use logi_portal::i18n::fluent::I18n;
use logi_portal::ui::documents;
use logi_portal::ui::inventory;
use logi_portal::ui::orders;
use logi_portal::ui::theming::ThemeMode;
use tempfile::tempdir;
use unic_langid::langid;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_with_override(&english, Some(dir.path().to_path_buf()))
        .expect("Failed to write initial config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut dutch = loaded.clone();
    dutch.general.language = Some("nl".to_string());
    config::save_with_override(&dutch, Some(dir.path().to_path_buf()))
        .expect("Failed to write updated config file");

    let (reloaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n_nl = I18n::new(None, &reloaded);
    assert_eq!(i18n_nl.current_locale().to_string(), "nl");
    assert_ne!(i18n_nl.tr("nav-inventory"), i18n_en.tr("nav-inventory"));
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("nl".to_string());

    let i18n = I18n::new(Some("de".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "de");
}

#[test]
fn every_preference_survives_a_restart() {
    let dir = tempdir().expect("temp dir");
    let base = Some(dir.path().to_path_buf());

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.notifications.sms = true;
    config.notifications.order_updates = false;
    config.regional.date_format = DateFormat::YearMonthDay;
    config.regional.currency = Currency::Gbp;
    config.regional.unit_system = UnitSystem::Imperial;
    config.regional.timezone = Timezone::London;
    config::save_with_override(&config, base.clone()).expect("save");

    let (loaded, warning) = config::load_with_override(base);
    assert!(warning.is_none());
    assert_eq!(loaded, config);
}

#[test]
fn unreadable_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("settings.toml"), "general = [not toml").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.map(|err| err.i18n_key()), Some("error-config"));
}

#[test]
fn every_locale_defines_the_same_messages() {
    let i18n = I18n::default();
    let reference = i18n.message_ids(&langid!("en-US"));
    assert!(!reference.is_empty());

    for locale in &i18n.available_locales {
        assert_eq!(
            i18n.message_ids(locale),
            reference,
            "{locale} is out of sync with en-US"
        );
    }
}

#[test]
fn inventory_filter_narrows_rows_and_clears_back() {
    let mut state = inventory::State::default();
    let total = state.visible_items().len();

    inventory::update(
        &mut state,
        inventory::Message::StatusSelected(Selection::Only(StockStatus::LowStock)),
    );
    inventory::update(
        &mut state,
        inventory::Message::SearchChanged("STEEL".to_string()),
    );
    let visible = state.visible_items();
    assert!(!visible.is_empty());
    assert!(visible.len() < total);
    assert!(visible
        .iter()
        .all(|item| item.status == StockStatus::LowStock
            && item.product.to_lowercase().contains("steel")));

    inventory::update(&mut state, inventory::Message::SearchChanged(String::new()));
    inventory::update(
        &mut state,
        inventory::Message::StatusSelected(Selection::All),
    );
    assert_eq!(state.visible_items().len(), total);
}

#[test]
fn filtering_never_invents_or_reorders_rows() {
    let items = sample_items();
    let mut filter = RowFilter::new();
    filter.query = "sku-00".to_string();

    let kept = filter.apply(&items);
    let mut cursor = items.iter();
    for row in kept {
        assert!(cursor.any(|candidate| std::ptr::eq(candidate, row)));
    }
}

#[test]
fn unknown_order_search_shows_nothing() {
    let mut state = orders::State::default();
    orders::update(
        &mut state,
        orders::Message::SearchChanged("no such order".to_string()),
    );
    assert!(state.visible_orders().is_empty());
}

#[test]
fn document_search_matches_order_number() {
    let mut state = documents::State::default();
    let order_number = state
        .visible_documents()
        .first()
        .map(|document| document.order_number.clone())
        .expect("sample documents");

    documents::update(
        &mut state,
        documents::Message::SearchChanged(order_number.to_lowercase()),
    );
    let visible = state.visible_documents();
    assert!(!visible.is_empty());
    assert!(visible
        .iter()
        .all(|document| document.order_number == order_number
            || document
                .name
                .to_lowercase()
                .contains(&order_number.to_lowercase())));
}

#[test]
fn strong_matching_registration_is_accepted() {
    let mut form = RegistrationForm {
        first_name: "Jane".to_string(),
        last_name: "Roe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "+31 20 123 4567".to_string(),
        company: "Roe Freight".to_string(),
        role: Some(Role::TransportCoordinator),
        password: "Harbour2024".to_string(),
        confirm_password: "Harbour2024".to_string(),
        accept_terms: true,
        accept_privacy: true,
    };
    assert_eq!(password_strength(&form.password), 100);
    assert!(form.is_valid());

    let profile = form.to_profile();
    assert_eq!(profile.name, "Jane Roe");
    assert_eq!(profile.company, "Roe Freight");

    form.confirm_password = "Harbour2025".to_string();
    assert!(!form.is_valid());
}

#[test]
fn mark_all_read_clears_the_badge() {
    let mut alerts = sample_alerts();
    assert!(unread_count(&alerts) > 0);

    mark_all_read(&mut alerts);
    assert_eq!(unread_count(&alerts), 0);
    assert_eq!(alerts.len(), sample_alerts().len());
}
