use clap::Parser;

#[derive(Parser, Default)]
#[clap(author, version, about, long_about=None)]
/// Semantic vocabulary of the Jasmin code generator
pub struct CliOption {
    /// Print the semantic types
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub types: bool,

    /// Print the operators
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub operators: bool,

    /// Print the Jasmin command states
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub commands: bool,

    /// Print the `.limit` directives of a method
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub limits: bool,

    /// Type-check an operator application, e.g. "int + float" or "! strong int"
    #[clap(long, value_parser)]
    pub check: Option<String>,

    #[clap(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

impl CliOption {
    pub fn prints_nothing(&self) -> bool {
        !(self.types || self.operators || self.commands || self.limits) && self.check.is_none()
    }
}
