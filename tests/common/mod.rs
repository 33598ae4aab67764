//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod runtime;

use std::path::Path;
use std::time::Duration;

/// Create a test timeout duration
pub fn test_timeout() -> Duration {
    Duration::from_secs(2)
}

/// Hebrew catalog used by the integration tests
pub const HEBREW_CATALOG: &str = r#"{
    "header": { "title": "קליטת פניות", "login": "התחברות" },
    "ticketForm": {
        "name": "שם הלקוח",
        "submit": "שליחה",
        "success": "הפנייה נשלחה בהצלחה",
        "required": "שדה חובה",
        "urgencyHigh": "מועד דיון קרוב"
    }
}"#;

/// Russian catalog, intentionally missing some keys
pub const RUSSIAN_CATALOG: &str = r#"{
    "header": { "title": "Приём заявок" },
    "ticketForm": {
        "name": "Имя клиента",
        "submit": "Отправить",
        "urgencyHigh": "Скоро заседание суда"
    }
}"#;

/// Write both catalogs under `root` using the default layout
pub fn write_locales(root: &Path) {
    for (code, json) in [("he", HEBREW_CATALOG), ("ru", RUSSIAN_CATALOG)] {
        let dir = root.join("locales").join(code);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("translation.json"), json).unwrap();
    }
}
