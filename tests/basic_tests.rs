use nordvpn_toggle::command::{CommandRunner, DryRunRunner, VpnCommands};
use nordvpn_toggle::about::about;
use nordvpn_toggle::config::{bundled_data_dir, resolve_data_dir, ConfigData};
use nordvpn_toggle::indicator::Indicator;
use nordvpn_toggle::observable::Observable;
use nordvpn_toggle::session::Session;
use nordvpn_toggle::state::{ConnectionState, State};
use nordvpn_toggle::targets::{
    is_plain_name, load_targets, parse_target_names, resolve_icon, Target, TargetPolicy,
};
use nordvpn_toggle::util::icon_label;
use nordvpn_toggle::{Args, ToggleApp};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Clone, Default)]
struct RecordingRunner {
    issued: Rc<RefCell<Vec<String>>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command_line: &str) {
        self.issued.borrow_mut().push(command_line.to_string());
    }
}

fn write_countries(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("countries.json");
    fs::write(&path, contents).expect("write countries.json");
    path
}

#[test]
fn test_config_data_default() {
    let config = ConfigData::default();

    assert_eq!(config.commands, VpnCommands::default());
    assert_eq!(config.commands.connect(), "nordvpn connect");
    assert_eq!(config.commands.disconnect(), "nordvpn disconnect");
    assert_eq!(config.countries_file, "countries.json");
    assert_eq!(config.icons_dir, "icons");
    assert_eq!(config.target_policy, TargetPolicy::PassThrough);
}

#[test]
fn test_config_paths() {
    let config = ConfigData::default();
    let data_dir = Path::new("/opt/toggle");

    assert_eq!(config.countries_path(data_dir), PathBuf::from("/opt/toggle/countries.json"));
    assert_eq!(config.icons_path(data_dir), PathBuf::from("/opt/toggle/icons"));
    assert_eq!(
        resolve_data_dir(Some(data_dir), "countries.json"),
        PathBuf::from("/opt/toggle")
    );
}

#[test]
fn test_default_data_dir_finds_bundled_list() {
    let config = ConfigData::default();
    let data_dir = resolve_data_dir(None, &config.countries_file);
    assert!(config.countries_path(&data_dir).is_file());

    let session = Session::enable(&config, &data_dir, Box::new(DryRunRunner));
    assert!(!session.menu_items.is_empty());
    assert!(session.menu_items.iter().any(|m| m.label == "United States"));
}

#[test]
fn test_bundled_data_dir_holds_country_list() {
    let path = bundled_data_dir().join("countries.json");
    let targets = load_targets(&path, Path::new("icons"), TargetPolicy::RejectUnsafe);
    assert!(targets.iter().any(|t| t.id == "Germany"));
}

#[test]
fn test_partial_commands_config_fills_defaults() {
    let config: ConfigData =
        serde_json::from_str(r#"{"commands":{"program":"/usr/bin/nordvpn"}}"#)
            .expect("partial config parses");

    assert_eq!(config.commands.program, "/usr/bin/nordvpn");
    assert_eq!(config.commands.connect(), "/usr/bin/nordvpn connect");
    assert_eq!(config.commands.disconnect(), "/usr/bin/nordvpn disconnect");
    assert_eq!(config.countries_file, "countries.json");
    assert_eq!(config.target_policy, TargetPolicy::PassThrough);
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let args = Args {
        data_dir: None,
        dry_run: true,
    };
    let mut app = ToggleApp::with_config(&args, None);
    assert_eq!(app.config_data(), ConfigData::default());

    app.enable();
    assert_eq!(app.state, State::Running);
    assert!(app.session.is_some());

    app.shutdown_app();
    assert!(app.session.is_none());
}

#[test]
fn test_about_mentions_icons_are_not_shipped() {
    assert!(about().iter().any(|line| line.contains("icons/<Country>.svg")));
}

#[test]
fn test_state_enum() {
    assert_ne!(State::Initialising, State::Running);
    assert_ne!(State::Running, State::About);
    assert_eq!(State::About, State::About);
}

#[test]
fn test_connection_state_display() {
    let icons = Path::new("icons");
    assert_eq!(format!("{}", ConnectionState::disconnected()), "Disconnected");
    assert_eq!(format!("{}", ConnectionState::connected_to(None)), "Connected");
    assert_eq!(
        format!(
            "{}",
            ConnectionState::connected_to(Some(Target::new("United_Kingdom", icons)))
        ),
        "Connected (United Kingdom)"
    );
}

#[test]
fn test_target_label_and_icon() {
    let target = Target::new("Bosnia_and_Herzegovina", Path::new("icons"));

    assert_eq!(target.id, "Bosnia_and_Herzegovina");
    assert_eq!(target.label(), "Bosnia and Herzegovina");
    assert_eq!(target.icon, PathBuf::from("icons/Bosnia_and_Herzegovina.svg"));
    assert_eq!(resolve_icon(Path::new("icons"), "globe"), PathBuf::from("icons/globe.svg"));
    assert_eq!(icon_label(&target.icon), "Bosnia_and_Herzegovina");
}

#[test]
fn test_parse_target_names() {
    assert_eq!(parse_target_names(r#"["Japan","Germany"]"#), vec!["Japan", "Germany"]);
    assert!(parse_target_names("[]").is_empty());
    assert!(parse_target_names("not json").is_empty());
    assert!(parse_target_names(r#"{"countries":["Japan"]}"#).is_empty());
    assert!(parse_target_names(r#"["Japan", 3]"#).is_empty());
}

#[test]
fn test_load_targets_keeps_file_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_countries(dir.path(), r#"["Japan","Germany"]"#);

    let targets = load_targets(&path, Path::new("icons"), TargetPolicy::PassThrough);

    let ids: Vec<&str> = targets.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["Japan", "Germany"]);
}

#[test]
fn test_load_targets_missing_file_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let targets = load_targets(
        &dir.path().join("nope.json"),
        Path::new("icons"),
        TargetPolicy::PassThrough,
    );
    assert!(targets.is_empty());
}

#[test]
fn test_load_targets_malformed_file_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_countries(dir.path(), "[\"Japan\",");

    assert!(load_targets(&path, Path::new("icons"), TargetPolicy::PassThrough).is_empty());
}

#[test]
fn test_target_policy() {
    assert!(is_plain_name("United_States"));
    assert!(is_plain_name("Bosnia-Herzegovina"));
    assert!(!is_plain_name(""));
    assert!(!is_plain_name("Japan; rm -rf ~"));
    assert!(!is_plain_name("$(id)"));

    assert!(TargetPolicy::PassThrough.accepts("Japan; rm -rf ~"));
    assert!(!TargetPolicy::RejectUnsafe.accepts("Japan; rm -rf ~"));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_countries(dir.path(), r#"["Japan","Germany && reboot","Sweden"]"#);

    let all = load_targets(&path, Path::new("icons"), TargetPolicy::PassThrough);
    assert_eq!(all.len(), 3);

    let safe = load_targets(&path, Path::new("icons"), TargetPolicy::RejectUnsafe);
    let ids: Vec<&str> = safe.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["Japan", "Sweden"]);
}

#[test]
fn test_observable_publishes_to_all_subscribers() {
    let mut value = Observable::new(0u32);
    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&first);
    value.subscribe(move |v| sink.borrow_mut().push(*v));
    value.publish(1);
    let sink = Rc::clone(&second);
    value.subscribe(move |v| sink.borrow_mut().push(*v));
    value.publish(1);

    assert_eq!(*value.get(), 1);
    assert_eq!(value.subscriber_count(), 2);
    assert_eq!(*first.borrow(), vec![0, 1, 1]);
    assert_eq!(*second.borrow(), vec![1, 1]);

    value.clear_subscribers();
    value.publish(7);
    assert_eq!(*first.borrow(), vec![0, 1, 1]);
}

#[test]
fn test_indicator_apply() {
    let default_icon = PathBuf::from("icons/nordvpn-tray-white.svg");
    let mut indicator = Indicator::new(default_icon.clone());
    assert!(!indicator.visible);

    let japan = Target::new("Japan", Path::new("icons"));
    indicator.apply(&ConnectionState::connected_to(Some(japan.clone())), &default_icon);
    assert!(indicator.visible);
    assert_eq!(indicator.icon, japan.icon);

    indicator.apply(&ConnectionState::connected_to(None), &default_icon);
    assert!(indicator.visible);
    assert_eq!(indicator.icon, default_icon);

    indicator.apply(&ConnectionState::disconnected(), &default_icon);
    assert!(!indicator.visible);
}

#[test]
fn test_session_scenario_select_germany() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_countries(dir.path(), r#"["Japan","Germany"]"#);
    let runner = RecordingRunner::default();
    let issued = Rc::clone(&runner.issued);

    let mut session = Session::enable(&ConfigData::default(), dir.path(), Box::new(runner));

    let labels: Vec<&str> = session.menu_items.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, vec!["Japan", "Germany"]);
    assert!(!session.indicator().visible);

    session.activate_item(1);

    assert_eq!(*issued.borrow(), vec!["nordvpn connect Germany".to_string()]);
    assert_eq!(
        session.controller.active_target().map(|t| t.id.as_str()),
        Some("Germany")
    );
    let indicator = session.indicator();
    assert!(indicator.visible);
    assert_eq!(indicator.icon, dir.path().join("icons").join("Germany.svg"));

    session.disable();
}

#[test]
fn test_session_scenario_toggle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let runner = RecordingRunner::default();
    let issued = Rc::clone(&runner.issued);

    // No countries.json: the menu is simply empty
    let mut session = Session::enable(&ConfigData::default(), dir.path(), Box::new(runner));
    assert!(session.menu_items.is_empty());

    session.controller.toggle(true);
    let indicator = session.indicator();
    assert!(indicator.visible);
    assert_eq!(indicator.icon, session.header_icon().to_path_buf());

    session.controller.toggle(false);
    assert!(!session.indicator().visible);
    assert_eq!(*session.controller.state(), ConnectionState::disconnected());

    // Out of range selections are ignored
    session.activate_item(5);

    assert_eq!(
        *issued.borrow(),
        vec!["nordvpn connect".to_string(), "nordvpn disconnect".to_string()]
    );
    session.disable();
}

#[test]
fn test_session_icons() {
    let session = Session::enable(
        &ConfigData::default(),
        Path::new("/data"),
        Box::new(DryRunRunner),
    );
    assert_eq!(session.header_icon(), Path::new("/data/icons/nordvpn-tray-white.svg"));
    assert_eq!(session.submenu_icon(), Path::new("/data/icons/globe.svg"));
}
