//! x11bare - Main entry point
//!
//! Opens a window on the local X server and runs a text input box in it.

use std::env;
use std::path::PathBuf;
use std::process;

use x11bare::{app, Config, VERSION};

fn print_usage() {
    println!("x11bare v{}", VERSION);
    println!("A minimal X11 client speaking the raw wire protocol");
    println!();
    println!("Usage: x11bare [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -display <n>          Display number (default: from $DISPLAY, else 0)");
    println!("  -socket <path>        Connect to this socket instead of /tmp/.X11-unix/X<n>");
    println!("  -auth <path>          Authority file (default: $XAUTHORITY, else ~/.Xauthority)");
    println!("  -size <w>x<h>         Window size (default: 1024x512)");
    println!("  -fps <n>              Frame rate (default: 60)");
    println!("  -h, --help            Show this help message");
    println!();
    println!("Type into the box; click anywhere in the window to change colours.");
    println!();
}

fn parse_size(value: &str) -> Result<(u16, u16), String> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("Invalid size: {}", value))?;
    let w = w.parse().map_err(|_| format!("Invalid width: {}", w))?;
    let h = h.parse().map_err(|_| format!("Invalid height: {}", h))?;
    Ok((w, h))
}

fn parse_args() -> Result<Config, String> {
    let mut config = Config::from_env();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-display" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for -display".to_string());
                }
                config.display = args[i]
                    .trim_start_matches(':')
                    .parse()
                    .map_err(|_| "Invalid display number".to_string())?;
            }
            "-socket" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for -socket".to_string());
                }
                config.socket_path = Some(PathBuf::from(&args[i]));
            }
            "-auth" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for -auth".to_string());
                }
                config.authority_path = PathBuf::from(&args[i]);
            }
            "-size" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for -size".to_string());
                }
                let (width, height) = parse_size(&args[i])?;
                config.window.width = width;
                config.window.height = height;
            }
            "-fps" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for -fps".to_string());
                }
                config.fps = args[i]
                    .parse()
                    .map_err(|_| "Invalid frame rate".to_string())?;
            }
            arg => {
                return Err(format!("Unknown option: {}", arg));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    log::info!("x11bare v{}", VERSION);
    log::info!("Socket: {}", config.socket_path().display());
    log::info!("Authority: {}", config.authority_path.display());
    log::info!(
        "Window: {}x{} at {} fps",
        config.window.width,
        config.window.height,
        config.fps
    );

    if let Err(e) = app::run(&config) {
        log::error!("{}", e);
        process::exit(1);
    }
}
