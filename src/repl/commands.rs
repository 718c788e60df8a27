//! Command parser for the terminal frontend
//!
//! Every input line is a slash command; anything else prints a hint.

use colored::*;

/// Frontend command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Set { field: String, value: String },
    Edit,
    Generate,
    Inputs,
    Results,
    Show,
    Exit,
    Unknown { input: String },
}

/// Check if input is a command
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Parse input string into a command
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(body) = trimmed.strip_prefix('/') else {
        return Command::Unknown {
            input: input.to_string(),
        };
    };

    let (name, rest) = split_word(body);
    let name = name.to_lowercase();

    match name.as_str() {
        "help" | "h" => Command::Help,
        "exit" | "quit" | "q" => Command::Exit,
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Command::Unknown {
                    input: input.to_string(),
                };
            }
            Command::Set {
                field: field.to_lowercase(),
                value: value.to_string(),
            }
        }
        "edit" | "e" => Command::Edit,
        "generate" | "gen" | "g" => Command::Generate,
        "inputs" | "input" | "i" => Command::Inputs,
        "results" | "r" => Command::Results,
        "show" | "s" => Command::Show,
        _ => Command::Unknown {
            input: input.to_string(),
        },
    }
}

/// Split off the first word; the remainder is trimmed
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(i) => (&text[..i], text[i..].trim()),
        None => (text, ""),
    }
}

/// Print the command summary
pub fn show_help() {
    println!("\n{}", "Available Commands:".bold().cyan());
    println!("  {}  Set one field, e.g. /set age 30", "/set <field> <value>".green());
    println!("  {}                 Walk through every field", "/edit".green());
    println!("  {}             Request diet and posture recommendations", "/generate".green());
    println!("  {}               Show the Input Parameters tab", "/inputs".green());
    println!("  {}              Show the Recommendations tab", "/results".green());
    println!("  {}                 Redraw the current tab", "/show".green());
    println!("  {}                 Show this help", "/help".green());
    println!("  {}                 Quit", "/exit".green());
    println!();
}
