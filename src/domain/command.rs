use std::fmt;

/// Commands understood by the `deploy` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Init,
    Generate,
    List,
    Status,
    Build,
    Deploy,
    Start,
    Stop,
    Restart,
    Upgrade,
    Rollback,
}

impl Command {
    /// All commands in help order.
    pub const ALL: [Command; 11] = [
        Command::Init,
        Command::Generate,
        Command::List,
        Command::Status,
        Command::Build,
        Command::Deploy,
        Command::Start,
        Command::Stop,
        Command::Restart,
        Command::Upgrade,
        Command::Rollback,
    ];

    /// Commands that run a playbook through the orchestration tool.
    pub const PLAYBOOK_ACTIONS: [Command; 8] = [
        Command::Status,
        Command::Build,
        Command::Deploy,
        Command::Start,
        Command::Stop,
        Command::Restart,
        Command::Upgrade,
        Command::Rollback,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Generate => "generate",
            Command::List => "list",
            Command::Status => "status",
            Command::Build => "build",
            Command::Deploy => "deploy",
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Restart => "restart",
            Command::Upgrade => "upgrade",
            Command::Rollback => "rollback",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn is_playbook_action(&self) -> bool {
        Command::PLAYBOOK_ACTIONS.contains(self)
    }

    /// Playbook file names tried for this command, most specific first:
    /// `<cmd>-<service>.yml`, `<cmd>-<environment>.yml`, `<cmd>.yml`.
    pub fn playbook_candidates(&self, environment: &str, service: Option<&str>) -> Vec<String> {
        let command = self.name();
        let mut names = Vec::with_capacity(3);
        if let Some(service) = service {
            names.push(format!("{command}-{service}.yml"));
        }
        names.push(format!("{command}-{environment}.yml"));
        names.push(format!("{command}.yml"));
        names
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
