//! End-to-end tests for the full homesim stack.
//!
//! Each test wires the real pieces together the way `main` does — file log
//! sink in a temp directory, in-process event bus, controller task — and
//! drives everything through the [`ControllerHandle`]. Only the value source
//! is swapped for a scripted one so runs are deterministic.

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::path::Path;

use homesim_adapter_logfile::FileLogSink;
use homesim_app::controller::Controller;
use homesim_app::event_bus::InProcessEventBus;
use homesim_app::ports::ValueSource;
use homesim_app::runtime::{self, ControllerHandle};
use homesim_domain::automation::AutomationStatus;
use homesim_domain::device::MotionState;
use homesim_domain::event::Event;
use homesim_domain::snapshot::DeviceProperty;
use homesim_domain::time::TIMESTAMP_FORMAT;
use tokio::sync::broadcast;

/// Deterministic value source: scripted values first, range minimum after.
struct ScriptedValues {
    ints: VecDeque<i32>,
    motions: VecDeque<MotionState>,
}

impl ScriptedValues {
    fn new(ints: &[i32], motions: &[MotionState]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            motions: motions.iter().copied().collect(),
        }
    }
}

impl ValueSource for ScriptedValues {
    fn int_in_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.ints.pop_front().unwrap_or(*range.start())
    }

    fn motion(&mut self) -> MotionState {
        self.motions.pop_front().unwrap_or(MotionState::NoMotion)
    }
}

/// Build a fully-wired controller runtime logging into `dir`.
fn app(
    dir: &Path,
    ints: &[i32],
    motions: &[MotionState],
) -> (ControllerHandle, broadcast::Receiver<Event>) {
    let bus = InProcessEventBus::new(64);
    let feed = bus.subscribe();
    let controller = Controller::new(
        FileLogSink::new(dir.join("sensor_data.txt")),
        ScriptedValues::new(ints, motions),
        bus,
    );
    let (handle, _task) = runtime::spawn(controller);
    (handle, feed)
}

fn read_log(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("sensor_data.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Split a sensor log line into its timestamp and message, asserting the
/// exact `[YYYY-MM-DD HH:MM:SS] message` shape.
fn parse_line(line: &str) -> (chrono::NaiveDateTime, String) {
    let rest = line.strip_prefix('[').expect("line starts with '['");
    let (timestamp, message) = rest.split_once("] ").expect("line has '] ' separator");
    let parsed = chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .expect("timestamp matches the log format");
    (parsed, message.to_string())
}

// ---------------------------------------------------------------------------
// Startup and discovery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_discover_the_fixed_device_set_through_the_handle() {
    let dir = tempfile::tempdir().unwrap();
    let (handle, _feed) = app(dir.path(), &[60, 22], &[MotionState::NoMotion]);

    handle.discover_devices().await.unwrap();

    let snapshot = handle.snapshot();
    let ids: Vec<_> = snapshot
        .devices
        .iter()
        .map(|device| device.id.as_str().to_string())
        .collect();
    assert_eq!(
        ids,
        [
            "Living Room Light",
            "Living Room Thermostat",
            "Front Door Camera"
        ]
    );
    assert!(
        snapshot
            .devices
            .iter()
            .all(|device| device.status_text.ends_with("Status: On"))
    );
}

#[tokio::test]
async fn should_return_on_then_off_when_toggling_automation() {
    let dir = tempfile::tempdir().unwrap();
    let (handle, _feed) = app(dir.path(), &[], &[]);

    assert_eq!(
        handle.toggle_automation().await.unwrap(),
        AutomationStatus::On
    );
    assert_eq!(
        handle.toggle_automation().await.unwrap(),
        AutomationStatus::Off
    );
}

// ---------------------------------------------------------------------------
// Sensor log on disk
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_write_exactly_formatted_lines_for_every_device() {
    let dir = tempfile::tempdir().unwrap();
    let (handle, _feed) = app(dir.path(), &[60, 22], &[MotionState::NoMotion]);

    handle.discover_devices().await.unwrap();
    handle.log_all_devices().await.unwrap();

    let lines = read_log(dir.path());
    let messages: Vec<_> = lines
        .iter()
        .map(|line| parse_line(line).1)
        .collect();
    assert_eq!(
        messages,
        [
            "Living Room Light brightness set to 60%",
            "Living Room Thermostat temperature set to 22.0°C",
            "Front Door Camera security status set to NoMotion",
        ]
    );
}

#[tokio::test]
async fn should_record_a_full_cycle_of_ticks_and_edits() {
    let dir = tempfile::tempdir().unwrap();
    // Discovery: 60%, 22°C, no motion.
    // Tick: 30%, 25°C, motion detected → rule turns the light to 100%.
    let (handle, mut feed) = app(
        dir.path(),
        &[60, 22, 30, 25],
        &[MotionState::NoMotion, MotionState::MotionDetected],
    );

    handle.discover_devices().await.unwrap();
    handle.toggle_automation().await.unwrap();
    handle.tick().await.unwrap();
    handle.set_brightness(0, 55).await.unwrap();

    let messages: Vec<_> = read_log(dir.path())
        .iter()
        .map(|line| parse_line(line).1)
        .collect();
    assert_eq!(
        messages,
        [
            "Living Room Light brightness set to 30%",
            "Living Room Thermostat temperature set to 25.0°C",
            "Front Door Camera security status set to MotionDetected",
            "Living Room Light brightness set to 100%",
            "Living Room Light brightness set to 55%",
        ]
    );

    // The edit wins over the rule's full brightness.
    assert_eq!(
        handle.snapshot().devices[0].property,
        DeviceProperty::Brightness { percent: 55 }
    );

    // Every log line was mirrored on the live feed, in order.
    for expected in &messages {
        let event = feed.recv().await.unwrap();
        assert_eq!(&event.entry.message, expected);
    }
}

#[tokio::test]
async fn should_not_create_the_log_file_while_automation_is_off() {
    let dir = tempfile::tempdir().unwrap();
    let (handle, _feed) = app(dir.path(), &[60, 22], &[MotionState::MotionDetected]);

    handle.discover_devices().await.unwrap();
    handle.randomize_device_states().await.unwrap();

    // Randomization is a no-op while automation is off; nothing was logged,
    // so the sink never created the file.
    assert!(!dir.path().join("sensor_data.txt").exists());
}

// ---------------------------------------------------------------------------
// Dashboard-style interaction
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_apply_user_edits_and_power_toggles() {
    let dir = tempfile::tempdir().unwrap();
    let (handle, _feed) = app(dir.path(), &[60, 22], &[MotionState::NoMotion]);
    handle.discover_devices().await.unwrap();

    handle.set_temperature(1, 19.5).await.unwrap();
    handle.set_motion(2, MotionState::MotionDetected).await.unwrap();
    handle.toggle_device(0).await.unwrap();

    let snapshot = handle.snapshot();
    assert_eq!(
        snapshot.devices[1].label_text,
        "Living Room Thermostat - 19.5°C"
    );
    assert_eq!(
        snapshot.devices[2].label_text,
        "Front Door Camera - Motion: YES"
    );
    assert_eq!(snapshot.devices[0].status_text, "SmartLight Status: Off");

    let messages: Vec<_> = read_log(dir.path())
        .iter()
        .map(|line| parse_line(line).1)
        .collect();
    // Power toggles are not logged; the two property edits are.
    assert_eq!(
        messages,
        [
            "Living Room Thermostat temperature set to 19.5°C",
            "Front Door Camera security status set to MotionDetected",
        ]
    );
}

#[tokio::test]
async fn should_turn_lights_on_when_a_motion_edit_precedes_the_rule() {
    let dir = tempfile::tempdir().unwrap();
    let (handle, _feed) = app(dir.path(), &[60, 22], &[MotionState::NoMotion]);
    handle.discover_devices().await.unwrap();
    handle.toggle_device(0).await.unwrap(); // light off

    handle.set_motion(2, MotionState::MotionDetected).await.unwrap();
    handle.apply_automation_rule().await.unwrap();

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.devices[0].status_text, "SmartLight Status: On");
    assert_eq!(
        snapshot.devices[0].property,
        DeviceProperty::Brightness { percent: 100 }
    );
}
