//! Command-line interface for edge_tint
//!
//! Basic tool for inspecting the tint a given image would produce.

use edge_tint::{tint_from_file, Side, TintConfig};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = TintConfig::default();
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--side" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("Error: --side requires a value");
                    process::exit(1);
                };
                config.side = match value.as_str() {
                    "top" => Side::Top,
                    "bottom" => Side::Bottom,
                    "left" => Side::Left,
                    "right" => Side::Right,
                    other => {
                        eprintln!("Error: unknown side '{other}'");
                        process::exit(1);
                    }
                };
            }
            "--percent" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("Error: --percent requires a value");
                    process::exit(1);
                };
                config.darken_percentage = match value.parse() {
                    Ok(p) => p,
                    Err(_) => {
                        eprintln!("Error: invalid percentage '{value}'");
                        process::exit(1);
                    }
                };
            }
            "--config" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("Error: --config requires a path");
                    process::exit(1);
                };
                config = match TintConfig::from_json_file(Path::new(value)) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error: {e}");
                        process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(image_path) = image_path_arg else {
        print_help(&args[0]);
        process::exit(1);
    };

    match tint_from_file(Path::new(&image_path), &config) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize result: {e}");
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {program} [OPTIONS] <image>");
    println!();
    println!("Compute the average edge color of an image and its darkened");
    println!("gradient end stop.");
    println!();
    println!("Options:");
    println!("  --side <top|bottom|left|right>   Region to average (default: bottom)");
    println!("  --percent <f32>                  Darken percentage (default: 40)");
    println!("  --config <path>                  Load a JSON TintConfig");
    println!("  -h, --help                       Show this help");
}
