use refab_io::{clear_dir, set_project_root};
use refab_pipeline::{ExportConfig, run_export};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let Some(command) = args.get(1).map(String::as_str) else {
        print_usage();
        std::process::exit(2);
    };

    let result = match command {
        "apply" => apply_command(&args, &cwd),
        "clear" => clear_command(&args, &cwd),
        _ => {
            print_usage();
            Err(format!("unknown command `{command}`"))
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  refab apply --source <base.pfab> --out <dir> [--limit <n>] [--path <project_dir>]");
    eprintln!("  refab apply --config <refab.toml> [--path <project_dir>]");
    eprintln!("  refab clear --out <dir> [--path <project_dir>]   # delete exported files");
}

fn parse_flag_value(args: &[String], flag: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1).cloned()
}

fn setup_project_root(args: &[String], cwd: &Path) {
    let root = parse_flag_value(args, "--path")
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.to_path_buf());
    set_project_root(root);
}

fn apply_command(args: &[String], cwd: &Path) -> Result<(), String> {
    setup_project_root(args, cwd);

    let config = if let Some(config_path) = parse_flag_value(args, "--config") {
        load_config(&config_path)?
    } else {
        let mut config = ExportConfig::new(
            parse_flag_value(args, "--source").unwrap_or_default(),
            parse_flag_value(args, "--out").unwrap_or_default(),
        );
        if let Some(limit) = parse_flag_value(args, "--limit") {
            let limit: u32 = limit
                .parse()
                .map_err(|_| format!("invalid --limit value `{limit}`"))?;
            config.limit = Some(limit);
        }
        config
    };

    let report = run_export(&config).map_err(|err| err.to_string())?;
    println!(
        "export complete: {} processed, {} skipped",
        report.processed, report.skipped
    );
    Ok(())
}

fn clear_command(args: &[String], cwd: &Path) -> Result<(), String> {
    setup_project_root(args, cwd);

    let Some(out_dir) = parse_flag_value(args, "--out") else {
        print_usage();
        return Err("clear requires --out <dir>".to_string());
    };

    let removed = clear_dir(&out_dir).map_err(|err| err.to_string())?;
    println!("removed {removed} file(s) from `{out_dir}`");
    Ok(())
}

fn load_config(path: &str) -> Result<ExportConfig, String> {
    let contents =
        fs::read_to_string(path).map_err(|err| format!("failed to read `{path}`: {err}"))?;
    toml::from_str(&contents).map_err(|err| format!("failed to parse `{path}`: {err}"))
}
