use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use assert_cmd::Command;
use tempfile::TempDir;

/// Runs the binary against a throwaway data directory, far away from any
/// real registry.
struct CliTest {
    _tmp: TempDir,
    data_dir: PathBuf,
}

impl CliTest {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir().context("failed to create temp dir")?;
        let data_dir = tmp.path().join("registry");
        Ok(Self {
            _tmp: tmp,
            data_dir,
        })
    }

    fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("eventry")?;
        cmd.env("EVENTRY_DATA_DIR", &self.data_dir);
        Ok(cmd)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.command()?.args(args).output()?;
        anyhow::ensure!(
            output.status.success(),
            "command {:?} failed\nstdout:\n{}\nstderr:\n{}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(String::from_utf8(output.stdout)?)
    }

    fn run_failure(&self, args: &[&str]) -> Result<String> {
        let output = self.command()?.args(args).output()?;
        anyhow::ensure!(
            !output.status.success(),
            "command {:?} unexpectedly succeeded\nstdout:\n{}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        Ok(String::from_utf8_lossy(&output.stderr).to_string())
    }

    fn event_file(&self) -> PathBuf {
        self.data_dir.join("events.csv")
    }

    fn add_wedding(&self) -> Result<String> {
        self.run(&[
            "add",
            "--kind",
            "wedding",
            "--date",
            "01/06/2025",
            "--time",
            "14:00",
            "--location",
            "Paris, FR",
            "--role",
            "Alice and Bob",
        ])
    }

    fn add_business(&self) -> Result<String> {
        self.run(&[
            "add",
            "--kind",
            "business",
            "--name",
            "Q3 Summit",
            "--date",
            "02/07/2025",
            "--time",
            "09:30",
            "--location",
            "London",
            "--role",
            "Acme Ltd",
        ])
    }

    fn add_attendee(&self, event_id: &str) -> Result<String> {
        self.run(&[
            "attendee",
            "add",
            "--first-name",
            "Dana",
            "--surname",
            "Reyes",
            "--email",
            "dana@example.com",
            "--phone",
            "07000 000000",
            "--event-id",
            event_id,
        ])
    }
}

#[test]
fn add_event_writes_the_expected_record() -> Result<()> {
    let cli = CliTest::new()?;
    let stdout = cli.add_wedding()?;
    assert!(stdout.contains("Event added successfully!"), "got:\n{stdout}");

    let contents = fs::read_to_string(cli.event_file())?;
    assert_eq!(
        contents,
        "1,Wedding,wedding of Alice and Bob,01/06/2025,14:00,paris fr,Alice and Bob\n"
    );
    Ok(())
}

#[test]
fn list_renders_events_with_a_count() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    cli.add_business()?;

    let stdout = cli.run(&["list"])?;
    assert!(stdout.contains("wedding of Alice and Bob"), "got:\n{stdout}");
    assert!(stdout.contains("Q3 Summit"), "got:\n{stdout}");
    assert!(stdout.contains("Total events: 2"), "got:\n{stdout}");
    Ok(())
}

#[test]
fn list_of_missing_store_is_not_an_error() -> Result<()> {
    let cli = CliTest::new()?;
    let stdout = cli.run(&["list"])?;
    assert!(stdout.contains("No events found"), "got:\n{stdout}");
    Ok(())
}

#[test]
fn view_labels_the_role_by_kind() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    cli.add_business()?;

    let stdout = cli.run(&["view", "1"])?;
    assert!(stdout.contains("Bride and groom"), "got:\n{stdout}");
    assert!(stdout.contains("Alice and Bob"), "got:\n{stdout}");

    let stdout = cli.run(&["view", "2"])?;
    assert!(stdout.contains("Host"), "got:\n{stdout}");
    assert!(stdout.contains("Acme Ltd"), "got:\n{stdout}");
    Ok(())
}

#[test]
fn view_unknown_id_reports_not_found() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    let stderr = cli.run_failure(&["view", "99"])?;
    assert!(stderr.contains("Event not found"), "got:\n{stderr}");
    Ok(())
}

#[test]
fn view_compares_the_id_as_text() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    // "01" does not match the stored "1"
    let stderr = cli.run_failure(&["view", "01"])?;
    assert!(stderr.contains("Event not found"), "got:\n{stderr}");
    Ok(())
}

#[test]
fn edit_stores_the_location_verbatim() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;

    let stdout = cli.run(&[
        "edit",
        "1",
        "--attribute",
        "location",
        "--value",
        "New York, NY",
    ])?;
    assert!(stdout.contains("Event updated successfully!"), "got:\n{stdout}");

    // No lower-casing, no comma stripping on the edit path
    let stdout = cli.run(&["view", "1"])?;
    assert!(stdout.contains("New York, NY"), "got:\n{stdout}");
    Ok(())
}

#[test]
fn edit_rejects_an_unknown_attribute() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    let before = fs::read_to_string(cli.event_file())?;

    let stderr = cli.run_failure(&["edit", "1", "--attribute", "owner", "--value", "x"])?;
    assert!(stderr.contains("You can only amend"), "got:\n{stderr}");

    let after = fs::read_to_string(cli.event_file())?;
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn edit_rejects_a_malformed_date_value() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    let stderr = cli.run_failure(&["edit", "1", "--attribute", "date", "--value", "June 1st"])?;
    assert!(stderr.contains("DD/MM/YYYY"), "got:\n{stderr}");
    Ok(())
}

#[test]
fn delete_with_yes_removes_the_event() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    cli.add_business()?;

    let stdout = cli.run(&["delete", "1", "--yes"])?;
    assert!(stdout.contains("Event deleted successfully!"), "got:\n{stdout}");

    let stderr = cli.run_failure(&["view", "1"])?;
    assert!(stderr.contains("Event not found"), "got:\n{stderr}");

    // The other record is untouched
    let stdout = cli.run(&["view", "2"])?;
    assert!(stdout.contains("Q3 Summit"), "got:\n{stdout}");
    Ok(())
}

#[test]
fn delete_unknown_id_reports_not_found() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    let stderr = cli.run_failure(&["delete", "9", "--yes"])?;
    assert!(stderr.contains("Event not found"), "got:\n{stderr}");
    Ok(())
}

#[test]
fn attendee_round_trip() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;

    let stdout = cli.add_attendee("1")?;
    assert!(
        stdout.contains("Attendee added to the event successfully!"),
        "got:\n{stdout}"
    );

    let stdout = cli.run(&["attendee", "list", "1"])?;
    assert!(stdout.contains("Dana"), "got:\n{stdout}");
    assert!(stdout.contains("Total attendees: 1"), "got:\n{stdout}");

    let stdout = cli.run(&["attendee", "delete", "1", "1", "--yes"])?;
    assert!(
        stdout.contains("Attendee deleted from the event successfully!"),
        "got:\n{stdout}"
    );

    let stdout = cli.run(&["attendee", "list", "1"])?;
    assert!(stdout.contains("No attendees found"), "got:\n{stdout}");
    Ok(())
}

#[test]
fn attendees_of_other_events_are_filtered_out() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    cli.add_business()?;
    cli.add_attendee("2")?;

    let stdout = cli.run(&["attendee", "list", "1"])?;
    assert!(stdout.contains("No attendees found"), "got:\n{stdout}");
    Ok(())
}

#[test]
fn deleting_an_event_leaves_its_attendees_behind() -> Result<()> {
    let cli = CliTest::new()?;
    cli.add_wedding()?;
    cli.add_attendee("1")?;

    cli.run(&["delete", "1", "--yes"])?;

    // Orphaned, but still listed: accepted behavior
    let stdout = cli.run(&["attendee", "list", "1"])?;
    assert!(stdout.contains("Dana"), "got:\n{stdout}");
    Ok(())
}
