use anyhow::Result;
use std::env;

use shade::{detect_color_mode, load_theme, resolve, save_theme, ColorMode, FileStore, Theme};

enum Command {
    Get,
    Set(Theme),
    Resolve,
    Status,
}

struct Config {
    command: Command,
    file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            command: Command::Status,
            file: None,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "get" => {
                config.command = Command::Get;
            }
            "set" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("set requires a theme argument (light, dark, or system)");
                }
                let theme = args[i].parse().map_err(anyhow::Error::msg)?;
                config.command = Command::Set(theme);
            }
            "resolve" => {
                config.command = Command::Resolve;
            }
            "status" => {
                config.command = Command::Status;
            }
            "-file" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-file requires a file path argument");
                }
                config.file = Some(args[i].clone());
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Shade Theme Preference Tool");
    println!("Usage: shadectl [OPTIONS] [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("  get                    Print the persisted theme preference");
    println!("  set <THEME>            Persist a theme preference (light, dark, or system)");
    println!("                         and print the resulting effective mode");
    println!("  resolve                Print the effective mode for the persisted preference");
    println!("  status                 Print preference, ambient and effective modes, and the");
    println!("                         preference file in use (default command)");
    println!();
    println!("OPTIONS:");
    println!("  -file <FILE>           Preference file to use (default: per-user config dir)");
    println!("  -h, -help, --help      Show this help message");
}

fn mode_name(is_dark: bool) -> &'static str {
    if is_dark {
        "dark"
    } else {
        "light"
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args()?;

    let mut store = match &config.file {
        Some(path) => FileStore::open(path),
        None => FileStore::open_default(),
    };

    match config.command {
        Command::Get => {
            println!("{}", load_theme(&store));
        }
        Command::Set(theme) => {
            save_theme(&mut store, theme);
            println!("{}", mode_name(resolve(theme)));
        }
        Command::Resolve => {
            println!("{}", mode_name(resolve(load_theme(&store))));
        }
        Command::Status => {
            let theme = load_theme(&store);
            let ambient = match detect_color_mode() {
                ColorMode::Dark => "dark",
                ColorMode::Light => "light",
            };

            println!("Preference: {}", theme);
            println!("Ambient:    {}", ambient);
            println!("Effective:  {}", mode_name(resolve(theme)));
            match store.path() {
                Some(path) => println!("File:       {}", path.display()),
                None => println!("File:       (in memory)"),
            }
        }
    }

    Ok(())
}
