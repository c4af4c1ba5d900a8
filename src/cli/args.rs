//! CLI argument parsing using clap.
//!
//! The operation and its operands are one trailing positional list. Once the
//! operation is seen every later token is a value, so `-abc`, `-inf`, `--` or
//! `-c` reach the operand parser instead of clap's flag matching. Missing
//! arguments are left to the dispatcher, which owns the usage message and exit
//! status.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

pub const USAGE: &str = "usage: calculator [add|subtract|multiply|divide] <num1> <num2>";

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Four-operation calculator
#[derive(Parser, Debug)]
#[command(
    name = "calculator",
    version = env!("CARGO_PKG_VERSION"),
    about = "Add, subtract, multiply or divide two numbers",
    override_usage = "calculator [OPTIONS] <OPERATION> <NUM1> <NUM2>",
    after_help = "Examples:\n  calculator add 2 3\n  calculator divide 10 4\n  calculator subtract -5 3\n\nOperations:\n  add, subtract, multiply, divide\n\nOptions are only recognized before the operation.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to a settings.toml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Operation (add, subtract, multiply, divide) followed by two operands
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Operation name and both operands, or `None` if any is missing.
    ///
    /// Tokens after the second operand are ignored.
    pub fn positionals(&self) -> Option<(&str, &str, &str)> {
        match self.args.as_slice() {
            [op, a, b, ..] => Some((op.as_str(), a.as_str(), b.as_str())),
            _ => None,
        }
    }
}
