use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use steamshots::{App, Catalog, Config, Error};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn catalog() -> Catalog {
    Catalog::load(&fixture("apps-list.json")).unwrap()
}

fn config_with(name: &str) -> Config {
    Config {
        apps_list_path: Some(fixture(name)),
        ..Config::default()
    }
}

#[test]
fn search_matches_substrings_case_insensitively() {
    let apps = catalog().search("witcher 3");
    assert_eq!(apps, vec![App::new(292030, "The Witcher 3: Wild Hunt")]);
}

#[test]
fn search_preserves_catalog_order() {
    let apps = catalog().search("skyrim");
    assert_eq!(
        apps,
        vec![
            App::new(489830, "The Elder Scrolls V: Skyrim Special Edition"),
            App::new(72850, "The Elder Scrolls V: Skyrim"),
        ]
    );
}

#[test]
fn search_with_empty_query_matches_nothing() {
    assert!(catalog().search("").is_empty());
}

#[test]
fn search_ignores_the_catalog_when_query_is_empty() {
    // A malformed snapshot must not matter if there is nothing to look for.
    let apps = steamshots::apps::search("", &config_with("not-json.txt")).unwrap();
    assert!(apps.is_empty());
}

#[test]
fn search_requires_a_configured_path() {
    let err = steamshots::apps::search("witcher 3", &Config::default()).unwrap_err();
    assert!(matches!(err, Error::AppsListPathNotConfigured));
    assert_eq!(err.to_string(), "no path configured for JSON apps list");
}

#[test]
fn search_rejects_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-apps-list.json");
    let config = Config {
        apps_list_path: Some(path.clone()),
        ..Config::default()
    };

    let err = steamshots::apps::search("witcher 3", &config).unwrap_err();
    assert!(matches!(err, Error::AppsListNotAFile { .. }));
    assert_eq!(err.to_string(), format!("{} is not a file", path.display()));
}

#[test]
fn search_rejects_invalid_json() {
    let err = steamshots::apps::search("witcher 3", &config_with("not-json.txt")).unwrap_err();
    assert!(matches!(err, Error::AppsListNotJson { .. }));
    assert_eq!(
        err.to_string(),
        format!("{} is not a valid JSON file", fixture("not-json.txt").display())
    );
}

#[test]
fn search_rejects_a_snapshot_without_applist() {
    let err =
        steamshots::apps::search("witcher 3", &config_with("bad-apps-list1.json")).unwrap_err();
    assert!(matches!(err, Error::AppsListBadFormat { .. }));
    assert_eq!(
        err.to_string(),
        format!(
            "{} does not have expected JSON format",
            fixture("bad-apps-list1.json").display()
        )
    );
}

#[test]
fn search_rejects_a_snapshot_without_apps() {
    let err =
        steamshots::apps::search("witcher 3", &config_with("bad-apps-list2.json")).unwrap_err();
    assert!(matches!(err, Error::AppsListBadFormat { .. }));
}

#[test]
fn find_by_id_accepts_integer_and_string_forms() {
    let by_int = catalog().find_by_id(22330u32);
    let by_str = catalog().find_by_id("22330");

    assert_eq!(by_int, by_str);
    let app = by_int.unwrap();
    assert_eq!(app.id, 22330);
    // trailing space comes straight from the snapshot
    assert_eq!(app.name, "The Elder Scrolls IV: Oblivion ");
}

#[test]
fn find_by_id_with_no_match_is_none() {
    assert_eq!(catalog().find_by_id(1u32), None);
    assert_eq!(catalog().find_by_id(-1i64), None);
    assert_eq!(catalog().find_by_id("not a number"), None);
}

#[test]
fn find_by_id_coerces_string_ids_in_the_snapshot() {
    let app = catalog().find_by_id(1091500u32).unwrap();
    assert_eq!(app.name, "Cyberpunk 2077");
}

#[test]
fn find_by_name_prefers_an_exact_match_over_catalog_order() {
    let app = catalog().find_by_name("the elder scrolls v: skyrim").unwrap();
    assert_eq!(app, App::new(72850, "The Elder Scrolls V: Skyrim"));
}

#[test]
fn find_by_name_falls_back_to_first_match_in_catalog_order() {
    // "Oblivion " comes before "Oblivion Trailer" in the snapshot, so the
    // trailer never wins.
    let app = catalog().find_by_name("oblivion").unwrap();
    assert_eq!(app.id, 22330);
    assert_eq!(app.name, "The Elder Scrolls IV: Oblivion ");
}

#[test]
fn find_by_name_with_no_match_is_none() {
    assert_eq!(catalog().find_by_name("holy smokes this is not a game"), None);
}

#[test]
fn app_serializes_to_id_and_name() {
    let app = App::new(377160, "Fallout 4");
    assert_eq!(
        serde_json::to_value(&app).unwrap(),
        serde_json::json!({"id": 377160, "name": "Fallout 4"})
    );
}
