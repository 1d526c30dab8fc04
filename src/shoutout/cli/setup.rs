use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "shoutout")]
#[command(version)]
#[command(about = "Record and display shoutouts from the command line", long_about = None)]
pub struct Cli {
    /// Who the shoutout is for (multiple words are joined with spaces)
    #[arg(short, long, num_args = 1.., value_name = "NAME")]
    pub name: Vec<String>,

    /// The shoutout text (multiple words are joined with spaces)
    #[arg(short, long, num_args = 1.., value_name = "TEXT")]
    pub shout: Vec<String>,

    /// List all shoutouts, grouped by name
    #[arg(short, long)]
    pub list: bool,

    /// Delete ALL shoutouts
    #[arg(short, long)]
    pub reset: bool,
}

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Add { name: String, shout: String },
    List,
    Reset,
}

impl Cli {
    /// Resolve the flags into one mode. Reset wins over list, which wins over
    /// the default add mode; add carries whatever flag values were given,
    /// possibly empty.
    pub fn mode(&self) -> Mode {
        if self.reset {
            Mode::Reset
        } else if self.list {
            Mode::List
        } else {
            Mode::Add {
                name: self.name.join(" "),
                shout: self.shout.join(" "),
            }
        }
    }
}
