use crate::domain::entities::MachineProfile;
use crate::domain::value_objects::ConsoleCommand;
use colored::Colorize;

/// Prints one line per machine. Passwords are never shown.
pub fn print_profiles(profiles: &[MachineProfile]) {
    println!("{}", render_profiles(profiles));
}

pub fn print_command(command: &ConsoleCommand) {
    println!("{}", command.to_string().green());
}

fn render_profiles(profiles: &[MachineProfile]) -> String {
    if profiles.is_empty() {
        return "No machines configured.".yellow().to_string();
    }

    profiles
        .iter()
        .map(profile_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn profile_line(profile: &MachineProfile) -> String {
    format!(
        "{}  {}@{}  {}",
        profile.name.bold().cyan(),
        profile.user,
        profile.host,
        profile.title.as_deref().unwrap_or("-").white()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_line_hides_the_password() {
        colored::control::set_override(false);
        let profile = MachineProfile::new("r720", "192.168.1.20", "root", "calvin", None);

        let line = profile_line(&profile);

        assert_eq!(line, "r720  root@192.168.1.20  -");
        assert!(!line.contains("calvin"));
    }

    #[test]
    fn empty_profile_list_prints_a_notice() {
        colored::control::set_override(false);

        assert_eq!(render_profiles(&[]), "No machines configured.");
    }

    #[test]
    fn one_line_per_profile_in_stored_order() {
        colored::control::set_override(false);
        let profiles = vec![
            MachineProfile::new("r720", "192.168.1.20", "root", "calvin", Some("R720".to_string())),
            MachineProfile::new("r610", "192.168.1.21", "root", "calvin", None),
        ];

        assert_eq!(
            render_profiles(&profiles),
            "r720  root@192.168.1.20  R720\nr610  root@192.168.1.21  -"
        );
    }
}
