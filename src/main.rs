//! Browser Dock - reference host
//!
//! Runs the dock plugin inside a small egui host with a test-pattern engine.

use std::env;
use std::rc::Rc;

use browser_dock::environment::{DisplayEnvironment, ProcessEnvironment};
use browser_dock::surface::{BrowserEngine, RenderTarget};
use browser_dock::ui::TestPatternEngine;
use browser_dock::{AUTHOR, BrowserDockPlugin, DESCRIPTION, DockConfig, NAME, VERSION, choose_mode};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Check for CLI mode
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "--cli" {
        run_cli_mode();
    } else {
        run_gui_mode();
    }
}

fn run_cli_mode() {
    let env = ProcessEnvironment;
    let display = DisplayEnvironment::detect(&env);
    let config = DockConfig::from_env(&env);

    println!("{} v{} by {}", NAME, VERSION, AUTHOR);
    println!("{}", DESCRIPTION);
    println!();
    println!("Wayland session:   {}", display.wayland);
    println!("Hyprland:          {}", display.hyprland);
    println!("Auto dock mode:    {:?}", choose_mode(&env));
    println!("Sample interval:   {:?}", config.sample_interval);
    println!(
        "Browser surface:   {}x{}",
        config.browser_size.width, config.browser_size.height
    );
    println!("Home page:         {}", config.home_url);
}

fn run_gui_mode() {
    let env = ProcessEnvironment;
    let display = DisplayEnvironment::detect(&env);
    let status = format!(
        "Wayland: {} | Hyprland: {} | auto mode: {:?}",
        display.wayland,
        display.hyprland,
        choose_mode(&env)
    );

    let engines = |target: RenderTarget| -> Box<dyn BrowserEngine> {
        Box::new(TestPatternEngine::new(target))
    };
    let plugin = Rc::new(BrowserDockPlugin::new(
        DockConfig::from_env(&env),
        Rc::new(engines),
        Rc::new(env),
    ));

    log::info!("{} v{} - starting reference host", NAME, VERSION);

    if let Err(e) = browser_dock::ui::run(plugin, status) {
        log::error!("Failed to start host: {}", e);
        std::process::exit(1);
    }
}
