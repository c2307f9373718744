#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::Context as _;
use tracing_subscriber::prelude::*;

fn init_logging() -> anyhow::Result<()> {
    let proj_dirs = directories::ProjectDirs::from("com", "", "promptforge")
        .context("no home directory available for log files")?;

    let log_dir = proj_dirs.data_dir().join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("promptforge.log");

    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {:?}", log_path))?;

    // Set restrictive permissions (owner read/write only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                eprintln!("Failed to set log file permissions: {}", e);
            }
        }
    }

    // RUST_LOG overrides the baked-in defaults. GUI framework (eframe, egui,
    // wgpu, winit) logs are captured via the tracing-log bridge below.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::builder()
            .parse("promptforge=info,eframe=info,egui=warn,wgpu=warn,winit=warn,arboard=warn")
            .expect("default env filter must parse")
    });

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(move || file.try_clone().expect("Failed to clone file handle"))
            .with_ansi(false), // No ANSI colors in file
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    // Bridge log crate events to tracing. eframe, egui, and the platform
    // clipboard backend all emit through the log crate, so clipboard failures
    // end up in promptforge.log. Must run AFTER setting the subscriber.
    tracing_log::LogTracer::init().context("failed to initialize log-to-tracing bridge")?;

    tracing::info!("Logging initialized to: {:?}", log_path);
    Ok(())
}

fn setup_panic_handler() {
    // Write panic info to a crash log file even if normal logging hasn't been
    // initialized yet.
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Prompt Forge crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "promptforge") {
            let log_dir = proj_dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic handler BEFORE anything else to catch early crashes
    setup_panic_handler();

    if let Err(e) = init_logging() {
        // Degrade to stderr-only logging; the app itself never needs the file
        eprintln!("File logging unavailable: {:#}", e);
    }

    tracing::info!("promptforge {} starting", env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Prompt Forge"),
        ..Default::default()
    };

    eframe::run_native(
        "Prompt Forge",
        native_options,
        Box::new(|cc| Ok(Box::new(promptforge::ForgeApp::new(cc)))),
    )?;

    Ok(())
}
