mod common;

use common::{dimensions, file_names, write_bytes, write_jpeg, write_oriented_jpeg, write_png};
use site_images_lib::{ConvertSettings, FormatConverter, OutcomeStatus, TargetFormat};

#[tokio::test]
async fn writes_webp_siblings_and_keeps_originals() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_png(dir.path(), "a.png", 640, 480);
    let c = write_jpeg(dir.path(), "c.JPG", 320, 200);
    let b = write_bytes(dir.path(), "b.txt", b"untouched");
    let a_before = std::fs::read(&a).unwrap();
    let c_before = std::fs::read(&c).unwrap();

    let report = FormatConverter::default().run(dir.path()).await.unwrap();

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 0);
    assert_eq!(std::fs::read(&a).unwrap(), a_before);
    assert_eq!(std::fs::read(&c).unwrap(), c_before);
    assert_eq!(std::fs::read(&b).unwrap(), b"untouched");

    assert_eq!(dimensions(&dir.path().join("a.webp")), (640, 480));
    assert_eq!(dimensions(&dir.path().join("c.webp")), (320, 200));
    assert_eq!(
        file_names(dir.path()),
        ["a.png", "a.webp", "b.txt", "c.JPG", "c.webp"]
    );
}

#[tokio::test]
async fn every_conversion_finishes_before_run_returns() {
    let dir = tempfile::tempdir().unwrap();
    let names: Vec<String> = (0..12).map(|i| format!("img{i:02}.png")).collect();
    for name in &names {
        write_png(dir.path(), name, 200, 100);
    }

    let settings = ConvertSettings { workers: 3, ..ConvertSettings::default() };
    let report = FormatConverter::new(settings).unwrap().run(dir.path()).await.unwrap();

    assert_eq!(report.succeeded(), 12);
    for (outcome, name) in report.outcomes.iter().zip(&names) {
        assert_eq!(outcome.input_path, dir.path().join(name));
        assert!(outcome.output_path.exists());
        assert!(outcome.output_size > 0);
    }
}

#[tokio::test]
async fn corrupt_file_fails_alone() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "a.png", 64, 64);
    write_bytes(dir.path(), "broken.png", b"\x89PNG but not really");
    write_jpeg(dir.path(), "c.jpeg", 64, 64);

    let report = FormatConverter::default().run(dir.path()).await.unwrap();

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.outcomes[1].status, OutcomeStatus::Failed);
    assert!(report.outcomes[1].error.is_some());
    assert!(!dir.path().join("broken.webp").exists());
    assert!(dir.path().join("c.webp").exists());
}

#[tokio::test]
async fn existing_target_is_overwritten_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "a.png", 50, 40);
    let stale = write_bytes(dir.path(), "a.webp", b"stale");

    let report = FormatConverter::default().run(dir.path()).await.unwrap();

    assert_eq!(report.succeeded(), 1);
    assert_ne!(std::fs::read(&stale).unwrap(), b"stale");
    assert_eq!(dimensions(&stale), (50, 40));
}

#[tokio::test]
async fn skip_existing_leaves_target_alone() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "a.png", 50, 40);
    write_png(dir.path(), "b.png", 50, 40);
    let stale = write_bytes(dir.path(), "a.webp", b"stale");

    let settings = ConvertSettings { skip_existing: true, ..ConvertSettings::default() };
    let report = FormatConverter::new(settings).unwrap().run(dir.path()).await.unwrap();

    assert_eq!(report.skipped(), 1);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.outcomes[0].status, OutcomeStatus::Skipped);
    assert_eq!(std::fs::read(&stale).unwrap(), b"stale");
    assert!(dir.path().join("b.webp").exists());
}

#[tokio::test]
async fn avif_target_writes_decodable_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_png(dir.path(), "a.png", 96, 64);
    let a_before = std::fs::read(&a).unwrap();

    let settings = ConvertSettings { target: TargetFormat::AVIF, ..ConvertSettings::default() };
    let report = FormatConverter::new(settings).unwrap().run(dir.path()).await.unwrap();

    assert_eq!(report.succeeded(), 1);
    let avif = dir.path().join("a.avif");
    assert_eq!(report.outcomes[0].output_path, avif);
    assert_eq!(&std::fs::read(&avif).unwrap()[4..8], b"ftyp");
    assert_eq!(dimensions(&avif), (96, 64));
    assert_eq!(std::fs::read(&a).unwrap(), a_before);
    assert!(!dir.path().join("a.webp").exists());
}

#[tokio::test]
async fn converted_sibling_is_upright() {
    let dir = tempfile::tempdir().unwrap();
    write_oriented_jpeg(dir.path(), "portrait.jpg", 300, 100, 6);

    FormatConverter::default().run(dir.path()).await.unwrap();

    assert_eq!(dimensions(&dir.path().join("portrait.webp")), (100, 300));
}
