use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "taskprompt")]
#[command(about = "An interactive, menu-driven task manager", long_about = None)]
pub struct Config {
    /// Name shown in the greeting
    #[arg(long, env = "TASKPROMPT_USER", default_value = "Usuario")]
    pub user: String,

    /// Start with an empty task list instead of the demo tasks
    #[arg(long, env = "TASKPROMPT_NO_DEMO")]
    pub no_demo: bool,

    /// Do not clear the screen or color output (useful when piping input)
    #[arg(long, env = "TASKPROMPT_PLAIN")]
    pub plain: bool,

    /// Log filter directive, e.g. `debug` or `taskprompt_core=trace`. Logs go to stderr.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}
