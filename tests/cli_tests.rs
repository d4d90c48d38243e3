use rampage_site::{is_version_like, ChangelogStore, CHANGELOG_FILE_NAME};

#[test]
fn test_version_flagging_for_listing() {
    // Keys the `versions` subcommand prints without a marker
    let plain = vec!["0.9.7", "1.0.889.22", "1.0.0-alpha"];
    for key in plain {
        assert!(is_version_like(key), "key {} should pass the shape check", key);
    }

    // Keys it annotates as unrecognized
    let flagged = vec!["latest", "beta", "next"];
    for key in flagged {
        assert!(
            !is_version_like(key),
            "key {} should be flagged as not version-like",
            key
        );
    }
}

#[test]
fn test_add_flow_persists_release() {
    let data_dir = tempfile::tempdir().unwrap();
    let data_path = data_dir.path().join(CHANGELOG_FILE_NAME);

    let mut store = ChangelogStore::new();
    store.load(&data_path).unwrap();
    assert!(store
        .changelogs
        .insert("0.9.8".to_string(), vec!["Added freecam".to_string()]));
    store.save().unwrap();

    let mut reloaded = ChangelogStore::new();
    reloaded.load(&data_path).unwrap();
    assert_eq!(reloaded.changelogs.items("0.9.8"), ["Added freecam".to_string()]);
}

#[test]
fn test_add_flow_rejects_duplicate_version() {
    let data_dir = tempfile::tempdir().unwrap();
    let data_path = data_dir.path().join(CHANGELOG_FILE_NAME);

    let mut store = ChangelogStore::new();
    store.load(&data_path).unwrap();
    assert!(store
        .changelogs
        .insert("0.9.8".to_string(), vec!["Added freecam".to_string()]));
    assert!(!store
        .changelogs
        .insert("0.9.8".to_string(), vec!["Something else".to_string()]));
    assert_eq!(store.changelogs.items("0.9.8"), ["Added freecam".to_string()]);
}
