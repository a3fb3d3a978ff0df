use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// terrafactor generates terraform moved statements from a terraform state file.
#[derive(Parser, Debug)]
#[command(name = "terrafactor", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Work with resources found in a terraform state file
    Resources {
        #[command(subcommand)]
        command: ResourcesCommand,
    },
    /// Print the version of terrafactor
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ResourcesCommand {
    /// List managed resource instances found in the state
    List(ListArgs),
    /// Generate terraform moved directives
    Refactor(RefactorArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Path of the terraform state in json
    #[arg(short = 't', long, env = "TFCT_TFSTATE")]
    pub tfstate: PathBuf,

    /// Filter string to apply, e.g. aws_s3_bucket.logs or module.network.aws_vpc.main
    #[arg(short = 'f', long, env = "TFCT_FILTER", default_value = "")]
    pub filter: String,
}

#[derive(clap::Args, Debug)]
pub struct RefactorArgs {
    /// Path of the terraform state in json
    #[arg(short = 't', long, env = "TFCT_TFSTATE")]
    pub tfstate: PathBuf,

    /// Current address: type.name or module.module_name.type.name
    pub old_location: String,

    /// Address the resource moves to, used verbatim
    pub new_location: String,
}
