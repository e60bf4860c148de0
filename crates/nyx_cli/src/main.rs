use std::collections::HashMap;
use std::io::Write;

use nyx_launch::{Resolution, RuntimeConfig, SourceMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const USAGE: &str = "Usage: nyx [option] ... [-c cmd | -m mod | file | -] [arg] ...";

const HELP: &str = "\
Usage: nyx [option] ... [-c cmd | -m mod | file | -] [arg] ...
Options:
-B     : don't write bytecode caches on import
-c cmd : run program passed in as string
-d     : turn on debug output
-E     : ignore NYX_* environment variables
-h     : print this help message and exit (also --help)
-i     : inspect interactively after running the program
-I     : isolate from the user's environment (implies -E and -s)
-m mod : run library module as a script
-O     : add one optimization level (repeatable: -OO)
-q     : don't print the version banner on interactive startup
-s     : don't add the user site directory to the search path
-S     : don't run site initialization on startup
-t     : accepted for compatibility, no effect
-v     : trace imports verbosely (repeatable: -vv)
-V     : print the Nyx version number and exit (also --version)
-W arg : add a warning filter (repeatable)
Environment:
NYX_PATH     : ':'-separated directories prefixed to the module search path
NYX_WARNINGS : ','-separated warning filters applied before -W filters
NYX_HASHSEED : 'random' or an integer in [0; 4294967295] fixing the hash seed";

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let env_snapshot: HashMap<String, String> = std::env::vars().collect();

    match nyx_launch::resolve_with_paths(&argv, &env_snapshot, &stdlib_paths()) {
        Ok(Resolution::Help) => println!("{HELP}"),
        Ok(Resolution::Version) => println!("Nyx {}", env!("CARGO_PKG_VERSION")),
        Ok(Resolution::Run(config)) => {
            if let Err(e) = print_report(&config) {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
                eprintln!("stdout error: {e}");
                std::process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}

/// The handoff record an embedding interpreter core boots from.
fn print_report(config: &RuntimeConfig) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{config}")?;
    writeln!(out, "hashsecret: {}", config.hash_seed.secret())?;
    writeln!(out, "argv: {}", fmt_list(config.source.args()))?;
    writeln!(out, "path: {}", fmt_list(&config.search_path))?;
    writeln!(out, "warnoptions: {}", fmt_list(&config.warn_options))?;
    writeln!(out, "source: {}", describe_source(&config.source))?;
    Ok(())
}

fn describe_source(source: &SourceMode) -> String {
    match source {
        SourceMode::File { path, .. } => format!("file {path}"),
        SourceMode::Module { name, .. } => format!("module {name}"),
        SourceMode::Command { .. } => "command".to_string(),
        SourceMode::Stdin { .. } => "stdin".to_string(),
    }
}

fn fmt_list(items: &[String]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        out.push_str(item);
        out.push('\'');
    }
    out.push(']');
    out
}

/// Tool-provided stdlib directories: next to the executable in a build
/// tree, or under the current directory as a fallback.
fn stdlib_paths() -> Vec<String> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(project_root) = exe_path
            .parent()
            .and_then(|p| p.parent())
            .and_then(|p| p.parent())
        {
            let stdlib = project_root.join("stdlib");
            if stdlib.exists() {
                return vec![stdlib.to_string_lossy().to_string()];
            }
        }
    }
    // If the current_exe logic fails, try relative to CWD.
    if std::path::Path::new("stdlib").exists() {
        if let Ok(cwd) = std::env::current_dir() {
            return vec![cwd.join("stdlib").to_string_lossy().to_string()];
        }
    }
    Vec::new()
}
