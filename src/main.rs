use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;

use hed_validator::validation::{validate_hed_string, ValidationOptions};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt::init();

    let matches = Command::new("hed")
        .version(VERSION)
        .propagate_version(true)
        .about("Hierarchical Event Descriptor annotation strings.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given HED annotation string")
                .arg(
                    Arg::new("warnings")
                        .long("warnings")
                        .action(ArgAction::SetTrue)
                        .help("Include advisory issues in the report, not just errors."),
                )
                .arg(
                    Arg::new("placeholders")
                        .long("placeholders")
                        .action(ArgAction::SetTrue)
                        .help("Accept a literal '#' wherever a numeric value is required."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the validation result as JSON instead of a report."),
                )
                .arg(
                    Arg::new("string")
                        .required(true)
                        .help("The annotation string you want to check."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let options = ValidationOptions {
                check_for_warnings: submatches.get_flag("warnings"),
                allow_placeholders: submatches.get_flag("placeholders"),
            };

            if let Some(string) = submatches.get_one::<String>("string") {
                let result = validate_hed_string(string, None, &options);

                if submatches.get_flag("json") {
                    match serde_json::to_string_pretty(&result) {
                        Ok(json) => println!("{}", json),
                        Err(error) => eprintln!("error: {}", error),
                    }
                } else if result.is_valid {
                    println!("{}", "valid".bright_green());
                } else {
                    for issue in &result.issues {
                        let severity = if issue.is_warning() {
                            format!("{}", "warning".bright_yellow())
                        } else {
                            format!("{}", "error".bright_red())
                        };
                        println!("{}: {}", severity, issue);
                    }
                }

                if !result.is_valid {
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: hed [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}
