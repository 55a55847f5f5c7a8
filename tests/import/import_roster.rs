use roster_importer::domain::{
    CommandRunnerError, ImportError, ImportStage,
};
use secrecy::ExposeSecret;
use test_context::test_context;

use crate::helpers::TestImporter;

const ROSTER: &str = "john,doe,john@example.com\n\
                      mary jane,smith-doe,mj@example.com\n";

#[test_context(TestImporter)]
#[tokio::test]
async fn should_run_commands_in_roster_order(app: &mut TestImporter) {
    let run = app.import(ROSTER).await;
    assert!(run.result.is_ok());

    assert_eq!(
        app.command_lines().await,
        vec![
            "php /srv/nextcloud/occ user:add --display-name=John Doe \
             --group=Member --password-from-env johndoe",
            "php /srv/nextcloud/occ user:setting johndoe settings email \
             john@example.com",
            "php /srv/nextcloud/occ user:add \
             --display-name=Mary Jane Smith-doe --group=Member \
             --password-from-env maryjanesmith-doe",
            "php /srv/nextcloud/occ user:setting maryjanesmith-doe settings \
             email mj@example.com",
        ]
    );
}

#[test_context(TestImporter)]
#[tokio::test]
async fn should_pass_password_to_add_user_only(app: &mut TestImporter) {
    let run = app.import("john,doe,john@example.com").await;
    assert!(run.result.is_ok());

    let runner = app.command_runner.read().await;
    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 2);

    assert_eq!(invocations[0].env.len(), 1);
    let (name, value) = &invocations[0].env[0];
    assert_eq!(name, "OC_PASS");
    assert_eq!(value.expose_secret(), "johndoe123");

    assert!(invocations[1].env.is_empty());
    assert!(!run.transcript.contains("johndoe123"));
}

#[test_context(TestImporter)]
#[tokio::test]
async fn should_print_add_user_output_before_set_email(app: &mut TestImporter) {
    {
        let mut runner = app.command_runner.write().await;
        runner.push_output("The user \"johndoe\" was created successfully\n", 0);
        runner.push_output("", 0);
    }

    let run = app.import("john,doe,john@example.com").await;
    assert!(run.result.is_ok());

    let lines: Vec<&str> = run.transcript.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Executing add user command: php /srv/nextcloud/occ user:add \
             --display-name=John Doe --group=Member --password-from-env \
             johndoe",
            "Output of add user command: The user \"johndoe\" was created \
             successfully",
            "Exit status of add user command: 0",
            "Executing set user email command: php /srv/nextcloud/occ \
             user:setting johndoe settings email john@example.com",
            "Output of set user email command: ",
            "Exit status of set user email command: 0",
            "Done.",
            "Imported 1 members, 0 commands exited unsuccessfully",
        ]
    );
}

#[test_context(TestImporter)]
#[tokio::test]
async fn should_continue_after_non_zero_exit(app: &mut TestImporter) {
    {
        let mut runner = app.command_runner.write().await;
        runner.push_output("The user \"johndoe\" already exists", 1);
    }

    let run = app.import(ROSTER).await;
    let report = run.result.expect("Import should not abort");

    assert_eq!(app.command_lines().await.len(), 4);
    assert_eq!(report.imported(), 2);
    assert_eq!(report.failed_commands(), 1);
    assert_eq!(report.outcomes[0].stage, ImportStage::Done);
    assert_eq!(
        report.outcomes[0].add_user_status.map(|status| status.code),
        Some(Some(1))
    );
    assert!(run
        .transcript
        .contains("Exit status of add user command: 1"));
    assert!(run
        .transcript
        .ends_with("Imported 2 members, 1 commands exited unsuccessfully\n"));
}

#[test_context(TestImporter)]
#[tokio::test]
async fn should_abort_on_launch_failure(app: &mut TestImporter) {
    {
        let mut runner = app.command_runner.write().await;
        runner.push_output("created", 0);
        runner.push_launch_failure();
    }

    let run = app.import(ROSTER).await;

    match run.result {
        Err(ImportError::CommandFailed(CommandRunnerError::LaunchFailed {
            command,
            ..
        })) => assert_eq!(
            command,
            "php /srv/nextcloud/occ user:setting johndoe settings email \
             john@example.com"
        ),
        other => panic!("Expected launch failure, got {other:?}"),
    }
    assert_eq!(app.command_lines().await.len(), 2);
    assert!(!run.transcript.contains("maryjanesmith-doe"));
    assert!(!run.transcript.contains("Done."));
}

#[test_context(TestImporter)]
#[tokio::test]
async fn should_skip_invalid_rows(app: &mut TestImporter) {
    let run = app
        .import(
            ",Doe,jdoe@example.com\n\
             john,doe,john@example.com\n\
             only,two\n\
             Jane,,jane@example.com\n",
        )
        .await;

    let report = run.result.expect("Import should succeed");
    assert_eq!(report.imported(), 1);
    assert_eq!(report.outcomes[0].username.as_ref(), "johndoe");
    assert_eq!(app.command_lines().await.len(), 2);
}

#[test_context(TestImporter)]
#[tokio::test]
async fn should_finish_empty_roster(app: &mut TestImporter) {
    let run = app.import("").await;

    let report = run.result.expect("Import should succeed");
    assert!(report.outcomes.is_empty());
    assert!(app.command_lines().await.is_empty());
    assert_eq!(
        run.transcript,
        "Done.\nImported 0 members, 0 commands exited unsuccessfully\n"
    );
}

#[test_context(TestImporter)]
#[tokio::test]
async fn should_keep_quoted_commas_in_one_field(app: &mut TestImporter) {
    let run = app.import(r#"John,"Smith, Jr.",john@example.com"#).await;
    assert!(run.result.is_ok());

    let lines = app.command_lines().await;
    assert_eq!(
        lines[1],
        r#"php /srv/nextcloud/occ user:setting john"smith,jr." settings email john@example.com"#
    );
}

#[test_context(TestImporter)]
#[tokio::test]
async fn should_echo_tool_output_unchanged(app: &mut TestImporter) {
    {
        let mut runner = app.command_runner.write().await;
        runner.push_output("  indented\ttrailing  \n\n", 0);
        runner.push_output("no newline", 0);
    }

    let run = app.import("john,doe,john@example.com").await;
    assert!(run.result.is_ok());

    assert!(run.transcript.contains(
        "Output of add user command:   indented\ttrailing  \n\n\
         Exit status of add user command: 0\n"
    ));
    assert!(run.transcript.contains(
        "Output of set user email command: no newline\n\
         Exit status of set user email command: 0\n"
    ));
}
