// ============================================================================
// XCKit - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // List related
    ("list.no_keys", "No keys found"),
    (
        "list.no_translated",
        "No keys are translated for language '{}'",
    ),
    ("list.header_all", "All keys with translation status:"),
    ("list.header_lang", "Keys translated in language '{}':"),
    // Untranslated related
    (
        "untranslated.none_prefix_lang",
        "No untranslated keys found with prefix '{}' for language '{}'",
    ),
    (
        "untranslated.none_prefix",
        "No untranslated keys found with prefix '{}'",
    ),
    (
        "untranslated.none_lang",
        "All keys are translated for language '{}'",
    ),
    (
        "untranslated.none_all",
        "All keys are fully translated in all languages",
    ),
    (
        "untranslated.header_prefix_lang",
        "Untranslated keys with prefix '{}' for language '{}':",
    ),
    (
        "untranslated.header_prefix",
        "Untranslated keys with prefix '{}':",
    ),
    (
        "untranslated.header_lang",
        "Untranslated keys for language '{}':",
    ),
    ("untranslated.header_all", "Keys with untranslated content:"),
    // Set related
    (
        "set.success",
        "Successfully set translation for key '{}' in language '{}'",
    ),
    // Status related
    ("status.title", "Translation Status"),
    ("status.source_language", "Source Language: {}"),
    ("status.total_keys", "Total Keys: {}"),
    ("status.languages", "Languages: {}"),
    ("status.no_languages", "(none)"),
    ("status.progress_title", "Progress by Language:"),
    ("status.progress_row", "{}: {}/{} translated ({}%)"),
    // Key details
    ("display.missing", "missing"),
    ("display.empty", "(empty)"),
    // Config related
    (
        "config.unknown_language",
        "Unknown interface language '{}', falling back to en_us",
    ),
];
