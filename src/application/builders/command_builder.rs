use crate::domain::entities::{ConsoleSettings, MachineProfile};
use crate::domain::value_objects::ConsoleCommand;
use anyhow::{Result, anyhow};

const CLASSPATH: &str = "avctKVM.jar";
const LIBRARY_PATH_FLAG: &str = "-Djava.library.path=./lib";
const LANGUAGE_FLAG: &str = "-Duser.language=zh";
const MAIN_CLASS: &str = "com.avocent.idrac.kvm.Main";

/// Client parameters that never vary between machines, in the order the client expects them
const TUNING_PARAMS: &[(&str, &str)] = &[
    ("kmport", "5900"),
    ("vport", "5900"),
    ("apcp", "1"),
    ("reconnect", "2"),
    ("chat", "1"),
    ("F1", "0"),
    ("custom", "0"),
    ("scaling", "15"),
    ("minwinheight", "100"),
    ("minwinwidth", "100"),
    ("videoborder", "0"),
    ("version", "2"),
];

pub struct ConsoleCommandBuilder<'a> {
    jre_path: Option<&'a str>,
    profile: Option<&'a MachineProfile>,
}

impl<'a> ConsoleCommandBuilder<'a> {
    pub fn new() -> Self {
        Self {
            jre_path: None,
            profile: None,
        }
    }

    pub fn settings(mut self, settings: &'a ConsoleSettings) -> Self {
        self.jre_path = Some(settings.jre_path.as_str());
        self
    }

    pub fn profile(mut self, profile: &'a MachineProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn build(self) -> Result<ConsoleCommand> {
        let jre_path = self
            .jre_path
            .ok_or_else(|| anyhow!("Java runtime path is required"))?;
        let profile = self
            .profile
            .ok_or_else(|| anyhow!("Machine profile is required"))?;

        let mut args: Vec<String> = vec![
            "-cp".to_string(),
            CLASSPATH.to_string(),
            LIBRARY_PATH_FLAG.to_string(),
            LANGUAGE_FLAG.to_string(),
            MAIN_CLASS.to_string(),
            format!("ip={}", profile.host),
            "vm=1".to_string(),
            format!("title={}", profile.display_title()),
            format!("user={}", profile.user),
            format!("passwd={}", profile.password),
        ];
        args.extend(
            TUNING_PARAMS
                .iter()
                .map(|(key, value)| format!("{}={}", key, value)),
        );

        Ok(ConsoleCommand::new(jre_path, args))
    }
}

impl Default for ConsoleCommandBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
