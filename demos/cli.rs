//! Command-line interface for decor_colors
//!
//! Analyzes one or more hex colors and prints the result as JSON. With a
//! single color it runs the quick single-color analysis; with several it
//! derives the dominant-color aggregate for the whole palette.

use decor_colors::{analyze_color, analyze_palette};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        process::exit(if args.is_empty() { 1 } else { 0 });
    }

    if args.len() == 1 {
        let analysis = analyze_color(&args[0]);
        match serde_json::to_string_pretty(&analysis) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize analysis: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    match analyze_palette(&args) {
        Ok(aggregate) => {
            match serde_json::to_string_pretty(&aggregate) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: failed to serialize aggregate: {}", e);
                    process::exit(1);
                }
            }
            println!("mood: {}", aggregate.mood_tags().join(", "));
            println!("styles: {}", aggregate.style_compatibility().join(", "));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_help() {
    eprintln!("Usage: cli <hex-color> [hex-color ...]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  cli '#8B4513'                analyze a single color");
    eprintln!("  cli '#FF0000' '#00FFFF'      analyze a palette");
}
