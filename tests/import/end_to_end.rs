#![cfg(unix)]

use roster_importer::{
    app_state::{AppState, ImportConfig},
    services::{load_roster, ProcessCommandRunner, SuffixPasswordGenerator},
    Importer,
};
use std::sync::Arc;
use tokio::sync::RwLock;

const PASSWORD_ENV: &str = "ROSTER_IMPORTER_E2E_PASS";

// Stands in for the administration tool: echoes its arguments, the password
// it received and a line on stderr, and fails every settings change.
const STUB_TOOL: &str = r#"
echo "args: $*"
echo "password: ${ROSTER_IMPORTER_E2E_PASS:-unset}"
echo "stderr line" >&2
if [ "$1" = "user:setting" ]; then
    exit 2
fi
"#;

#[tokio::test]
async fn should_import_through_real_processes() {
    let dir = tempfile::tempdir().unwrap();
    let tool = dir.path().join("occ");
    std::fs::write(&tool, STUB_TOOL).unwrap();
    let roster_path = dir.path().join("roster.csv");
    std::fs::write(&roster_path, "john,doe,john@example.com\n").unwrap();

    let config = ImportConfig::new("sh", &tool, "Member", PASSWORD_ENV).unwrap();
    let importer = Importer::new(
        AppState::new(
            Arc::new(RwLock::new(ProcessCommandRunner::new())),
            Arc::new(SuffixPasswordGenerator::new("123")),
        ),
        config,
    );

    let roster = load_roster(&roster_path).await.unwrap();
    let mut transcript = Vec::new();
    let report = importer
        .run(&roster.members, &mut transcript)
        .await
        .expect("Import should succeed");
    let transcript = String::from_utf8(transcript).unwrap();

    assert!(transcript.contains(
        "Output of add user command: args: user:add \
         --display-name=John Doe --group=Member --password-from-env johndoe\n\
         password: johndoe123\n\
         stderr line\n"
    ));
    assert!(transcript.contains(
        "Output of set user email command: args: user:setting johndoe \
         settings email john@example.com\n\
         password: unset\n\
         stderr line\n"
    ));
    assert!(transcript.contains("Exit status of add user command: 0"));
    assert!(transcript.contains("Exit status of set user email command: 2"));
    assert_eq!(report.failed_commands(), 1);
    assert!(std::env::var(PASSWORD_ENV).is_err());
}

#[tokio::test]
async fn should_abort_when_interpreter_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("roster.csv");
    std::fs::write(
        &roster_path,
        "john,doe,john@example.com\nann,lee,ann@example.com\n",
    )
    .unwrap();

    let config = ImportConfig::new(
        "/nonexistent/roster-importer-php",
        &dir.path().join("occ"),
        "Member",
        PASSWORD_ENV,
    )
    .unwrap();
    let importer = Importer::new(
        AppState::new(
            Arc::new(RwLock::new(ProcessCommandRunner::new())),
            Arc::new(SuffixPasswordGenerator::new("123")),
        ),
        config,
    );

    let roster = load_roster(&roster_path).await.unwrap();
    let mut transcript = Vec::new();
    let result = importer.run(&roster.members, &mut transcript).await;

    assert!(result.is_err());
    let transcript = String::from_utf8(transcript).unwrap();
    assert_eq!(transcript.matches("Executing").count(), 1);
}
