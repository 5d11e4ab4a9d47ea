pub fn about() -> Vec<String> {
    vec![
        "A quick toggle for the NordVPN command-line client: connect, \
        disconnect, or pick a country from the bundled list.".to_string(),
        "\n".to_string(),
        "Commands are handed to the system shell and not monitored; \
        the status shown is the last command issued, not the tunnel state.".to_string(),
        "Country icons are referenced by name (icons/<Country>.svg) and are \
        not shipped; the panel shows the icon name as text.".to_string(),
        "This program comes with ABSOLUTELY NO WARRANTY.
        This is free software, and you are welcome to redistribute it
        under certain conditions.".to_string(),
        "License: GNU General Public License v2.0 or later".to_string(),
    ]
}
