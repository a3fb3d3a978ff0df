mod args;

pub use args::{Cli, Command, ListArgs, RefactorArgs, ResourcesCommand};
