use std::io::Write;

use retire_friend_core::i18n::{translate, validation_message, MessageKey};
use retire_friend_core::{
    project, Error, Locale, PlanInput, ProjectionResult, ResultSummary, ShareLink, SocialNetwork,
    Theme,
};
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("RF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Outcome of a command. `Rejected` means the plan failed validation and a
/// message was already printed.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Rejected,
}

/// Settings resolved from configuration and global flags.
struct View {
    locale: Locale,
    theme: Option<Theme>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    plan: &'a PlanInput,
    projection: ProjectionResult,
    summary: ResultSummary,
    share_link: String,
}

pub fn run(cli: Cli, config: &Config, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let view = View {
        locale: cli.locale.unwrap_or(config.locale),
        theme: cli.theme.or(config.theme),
    };

    match cli.command {
        Commands::Project { plan, json } => {
            let plan = plan.into_plan(view.locale);
            print_result(&plan, &view, config, json, out)
        }
        Commands::Open { link, json } => {
            let link = ShareLink::parse(&link)?;
            match link.shared_plan() {
                Some(shared) => {
                    let view = View {
                        locale: shared.locale.unwrap_or(view.locale),
                        ..view
                    };
                    let locale = view.locale;
                    tracing::info!("Opened shared plan in locale {}", locale);
                    print_result(&shared.plan, &view, config, json, out)
                }
                None => {
                    print_landing(view.locale, out)?;
                    Ok(Outcome::Done)
                }
            }
        }
        Commands::Share { plan, network } => {
            let plan = plan.into_plan(view.locale);
            if let Err(err) = project(&plan) {
                return reject(err, view.locale, out);
            }
            let link = ShareLink::new(&config.base_url, &plan, view.locale);
            writeln!(out, "{}", network.label(view.locale))?;
            writeln!(out, "{}", link.social_url(network, view.locale))?;
            Ok(Outcome::Done)
        }
        Commands::Themes => {
            for theme in Theme::ALL {
                writeln!(out, "{:<14} {}", theme.display_name(), theme.css_class())?;
            }
            Ok(Outcome::Done)
        }
    }
}

fn print_result(
    plan: &PlanInput,
    view: &View,
    config: &Config,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let projection = match project(plan) {
        Ok(projection) => projection,
        Err(err) => return reject(err, view.locale, out),
    };
    let summary = ResultSummary::build(plan, &projection, view.locale, view.theme);
    let link = ShareLink::new(&config.base_url, plan, view.locale);

    if json {
        let report = JsonReport {
            plan,
            projection,
            summary,
            share_link: link.to_string(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(Outcome::Done);
    }

    writeln!(out, "{}", summary.to_text())?;
    writeln!(out)?;
    writeln!(out, "{} {}", translate(MessageKey::ShareUrlLabel, view.locale), link)?;
    for network in [SocialNetwork::Facebook, SocialNetwork::Line] {
        writeln!(
            out,
            "{}: {}",
            network.label(view.locale),
            link.social_url(network, view.locale)
        )?;
    }
    Ok(Outcome::Done)
}

fn print_landing(locale: Locale, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", translate(MessageKey::LandingTitle, locale))?;
    writeln!(out, "{}", translate(MessageKey::LandingSubtitle, locale))?;
    writeln!(out)?;
    writeln!(out, "{}", translate(MessageKey::LandingWhyTitle, locale))?;
    for key in [
        MessageKey::LandingWhyPoint1,
        MessageKey::LandingWhyPoint2,
        MessageKey::LandingWhyPoint3,
        MessageKey::LandingWhyPoint4,
    ] {
        writeln!(out, "- {}", translate(key, locale))?;
    }
    Ok(())
}

fn reject(err: Error, locale: Locale, out: &mut impl Write) -> anyhow::Result<Outcome> {
    match err {
        Error::InvalidInput(validation) => {
            tracing::warn!("Rejected plan: {}", validation);
            writeln!(out, "{}", validation_message(&validation, locale))?;
            Ok(Outcome::Rejected)
        }
        other => Err(other.into()),
    }
}
