use raw_locator::{
    FileMatcher, LocalCopier, LocalDirectory, Locator, RequestedTimestamp, Settings,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), format!("snapshot {}", name)).unwrap();
    }
}

fn requests(inputs: &[&str]) -> Vec<RequestedTimestamp> {
    inputs
        .iter()
        .map(|i| RequestedTimestamp::parse(i).unwrap())
        .collect()
}

#[test]
fn test_matcher_over_real_directory() {
    let source = TempDir::new().unwrap();
    touch(
        source.path(),
        &["PTI_SE_15012022_1500.raw", "PTI_SE_15012022_1200.raw"],
    );

    let matcher = FileMatcher::new(LocalDirectory::new(source.path()));

    let found = matcher
        .find(&RequestedTimestamp::parse("2022.01.15T13:45").unwrap())
        .unwrap();
    assert_eq!(found.unwrap().name, "PTI_SE_15012022_1200.raw");

    let found = matcher
        .find(&RequestedTimestamp::parse("15.01.2022T14:50").unwrap())
        .unwrap();
    assert_eq!(found.unwrap().name, "PTI_SE_15012022_1500.raw");

    let none = matcher
        .find(&RequestedTimestamp::parse("2022.02.02T00:00").unwrap())
        .unwrap();
    assert!(none.is_none());
}

#[test]
fn test_hour_tie_uses_alphabetical_listing() {
    let source = TempDir::new().unwrap();
    // Created in reverse order; the listing is still alphabetical.
    touch(
        source.path(),
        &["PTI_SE_01012022_1100.raw", "PTI_SE_01012022_0900.raw"],
    );

    let matcher = FileMatcher::new(LocalDirectory::new(source.path()));
    let found = matcher
        .find(&RequestedTimestamp::parse("01.01.2022T10:00").unwrap())
        .unwrap();
    assert_eq!(found.unwrap().name, "PTI_SE_01012022_0900.raw");

    touch(
        source.path(),
        &["PTI_SE_15012022_1400.raw", "PTI_SE_15012022_1200.raw"],
    );
    let found = matcher
        .find(&RequestedTimestamp::parse("2022.01.15T13:45").unwrap())
        .unwrap();
    assert_eq!(found.unwrap().name, "PTI_SE_15012022_1200.raw");
}

#[tokio::test]
async fn test_end_to_end_with_settings_file_and_copy() {
    let workspace = TempDir::new().unwrap();
    let source = workspace.path().join("raw");
    let destination = workspace.path().join("picked").join("today");
    fs::create_dir(&source).unwrap();
    touch(
        &source,
        &[
            "PTI_SE_31122022_2300.raw",
            "PTI_SE_31122022_2345.raw",
            "PTI_SE_01012023_0015.raw",
            "README.txt",
        ],
    );

    let settings_path = workspace.path().join("settings.toml");
    fs::write(
        &settings_path,
        format!(
            "[global]\nsource = {:?}\ndestination = {:?}\n",
            source.to_string_lossy(),
            destination.to_string_lossy()
        ),
    )
    .unwrap();

    let directories = Settings::from_file(&settings_path)
        .unwrap()
        .directories()
        .unwrap();

    let locator = Locator::new(LocalDirectory::new(&directories.source));
    let report = locator
        .run(
            &requests(&["31.12.2022T23:59", "01.01.2023T00:00", "02.01.2023T00:00"]),
            &directories,
            Some(&LocalCopier),
        )
        .await
        .unwrap();

    assert_eq!(
        report.matched,
        vec!["PTI_SE_31122022_2345.raw", "PTI_SE_01012023_0015.raw"]
    );
    assert_eq!(report.missing, vec!["02.01.2023T00:00"]);
    assert_eq!(report.copied.len(), 2);
    for name in &report.matched {
        let copied = destination.join(name);
        assert_eq!(
            fs::read_to_string(copied).unwrap(),
            format!("snapshot {}", name)
        );
    }
    assert!(!destination.join("PTI_SE_31122022_2300.raw").exists());
}

#[tokio::test]
async fn test_without_copy_destination_is_untouched() {
    let source = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    let target = destination.path().join("never-created");
    touch(source.path(), &["PTI_SE_05052022_0500.raw"]);

    let directories = Settings::default()
        .with_overrides(Some(source.path()), Some(&target))
        .directories()
        .unwrap();

    let locator = Locator::new(LocalDirectory::new(source.path()));
    let report = locator
        .run::<_, LocalCopier>(&requests(&["05.05.2022T06:30"]), &directories, None)
        .await
        .unwrap();

    assert_eq!(report.matched, vec!["PTI_SE_05052022_0500.raw"]);
    assert!(report.copied.is_empty());
    assert!(!target.exists());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["matched"][0], "PTI_SE_05052022_0500.raw");
}
