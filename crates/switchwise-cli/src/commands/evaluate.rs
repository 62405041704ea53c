use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use switchwise_core::present::{render_alternative, render_slot};
use switchwise_core::{
    Clock, Config, EnglishPresenter, Evaluation, FixedClock, OfferFilter, OfferSource,
    SnapshotSource, SwitchEngine, SystemClock, UserProfile, WindowPresenter,
};

#[derive(Args)]
pub struct InputArgs {
    /// Profile TOML file (defaults to config `data.profile_path`)
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Offer snapshot JSON file (defaults to config `data.catalog_path`)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub today: Option<NaiveDate>,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Windows,
    Compare,
    Alternatives,
    All,
}

fn resolve_path(
    explicit: Option<PathBuf>,
    configured: Option<PathBuf>,
    what: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    explicit.or(configured).ok_or_else(|| {
        format!("no {what} given: pass --{what} or set data.{what}_path in config").into()
    })
}

pub fn run(
    view: View,
    input: InputArgs,
    opts: OutputOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let profile_path = resolve_path(input.profile, config.data.profile_path.clone(), "profile")?;
    let catalog_path = resolve_path(input.catalog, config.data.catalog_path.clone(), "catalog")?;

    let profile = UserProfile::load(&profile_path)?;
    let source = SnapshotSource::load(&catalog_path)?;
    let offers = source.fetch(&OfferFilter::for_profile(&profile))?;
    tracing::debug!(
        profile = %profile_path.display(),
        catalog = %catalog_path.display(),
        snapshot = source.offers().len(),
        matching = offers.len(),
        "inputs loaded"
    );

    let today = opts.today.unwrap_or_else(|| SystemClock.today());
    let evaluation = SwitchEngine::new(FixedClock(today)).evaluate(&profile, &offers);

    if opts.json {
        let json = match view {
            View::Windows => serde_json::to_string_pretty(&evaluation.windows)?,
            View::Compare => serde_json::to_string_pretty(&evaluation.comparison)?,
            View::Alternatives => serde_json::to_string_pretty(&evaluation.alternatives)?,
            View::All => serde_json::to_string_pretty(&evaluation)?,
        };
        println!("{json}");
        return Ok(());
    }

    if evaluation.current_category.is_none() {
        println!("Current plan not found in the offer snapshot.");
    }
    match view {
        View::Windows => print_windows(&evaluation, &config),
        View::Compare => print_comparison(&evaluation, &config),
        View::Alternatives => print_alternatives(&evaluation, &config),
        View::All => {
            println!("Switching windows as of {}", evaluation.today);
            print_windows(&evaluation, &config);
            println!();
            println!("Comparison");
            print_comparison(&evaluation, &config);
            if !evaluation.alternatives.is_empty() {
                println!();
                println!("Model alternatives");
                print_alternatives(&evaluation, &config);
            }
        }
    }
    Ok(())
}

fn print_windows(evaluation: &Evaluation, config: &Config) {
    let presenter = EnglishPresenter;
    for window in &evaluation.windows {
        if !window.is_open && !config.display.show_closed_windows {
            continue;
        }
        let text = presenter.present(window);
        let state = if window.is_open { "open" } else { "closed" };
        match window.deadline {
            Some(deadline) => println!("{} ({state}): {}, deadline {deadline}", text.headline, text.detail),
            None => println!("{} ({state}): {}", text.headline, text.detail),
        }
    }
}

fn print_comparison(evaluation: &Evaluation, config: &Config) {
    for (role, slot) in evaluation.comparison.iter() {
        println!("{}", render_slot(role, slot, &config.display.currency));
    }
}

fn print_alternatives(evaluation: &Evaluation, config: &Config) {
    if evaluation.alternatives.is_empty() {
        println!("No model alternatives (current plan is not a Standard plan).");
        return;
    }
    for row in &evaluation.alternatives {
        println!("{}", render_alternative(row, &config.display.currency));
    }
}
